use serde::{Deserialize, Serialize};

/// Declared content kind of a document.
///
/// Only `Markdown` documents are subject to the formatting linter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    /// Structured markup (Obsidian/markdown notes).
    Markdown,
    /// Plain prose.
    #[default]
    Text,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Markdown => "markdown",
            ContentKind::Text => "text",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" | "structured" => Some(ContentKind::Markdown),
            "text" | "txt" | "plain" => Some(ContentKind::Text),
            _ => None,
        }
    }

    /// Infer the kind from a filename extension, falling back to content:
    /// a document that opens with a heading marker is markdown.
    pub fn infer(content: &str, filename: Option<&str>) -> Self {
        if let Some(name) = filename {
            let lower = name.to_ascii_lowercase();
            if lower.ends_with(".md") || lower.ends_with(".markdown") {
                return ContentKind::Markdown;
            }
        }
        if content.starts_with('#') {
            ContentKind::Markdown
        } else {
            ContentKind::Text
        }
    }

    pub fn is_markdown(&self) -> bool {
        matches!(self, ContentKind::Markdown)
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A document under verification. Immutable for the duration of a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    content: String,
    kind: ContentKind,
    filename: Option<String>,
}

impl Document {
    pub fn new(content: impl Into<String>, kind: ContentKind) -> Self {
        Self {
            content: content.into(),
            kind,
            filename: None,
        }
    }

    /// Build a document whose kind is inferred from its filename and content.
    pub fn inferred(content: impl Into<String>, filename: Option<&str>) -> Self {
        let content = content.into();
        let kind = ContentKind::infer(&content, filename);
        Self {
            content,
            kind,
            filename: filename.map(str::to_string),
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Lines split on `\n`, numbered from 1. A trailing newline yields a
    /// final empty line.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.content.split('\n').enumerate().map(|(i, l)| (i + 1, l))
    }

    /// Document length in characters.
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

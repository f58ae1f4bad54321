use serde::{Deserialize, Serialize};

/// A citation extracted from text: author surname, year, numeric identifier.
///
/// A `Citation` is always well-formed: the year is exactly four ASCII digits
/// and the identifier is a non-empty run of ASCII digits. Equality covers
/// all three fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Citation {
    author: String,
    year: String,
    identifier: String,
}

impl Citation {
    /// Build a citation, or `None` if the year or identifier is malformed.
    /// Surrounding whitespace on the author is trimmed.
    pub fn try_new(
        author: impl AsRef<str>,
        year: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Option<Self> {
        let author = author.as_ref().trim().to_string();
        let year = year.into();
        let identifier = identifier.into();

        if author.is_empty() {
            return None;
        }
        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if identifier.is_empty() || !identifier.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self {
            author,
            year,
            identifier,
        })
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl std::fmt::Display for Citation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} et al., {}, PMID: {}",
            self.author, self.year, self.identifier
        )
    }
}

use serde::{Deserialize, Serialize};

/// A bibliographic record fetched from the registry by identifier.
/// Owned by the registry; never persisted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryRecord {
    pub identifier: String,
    /// Author names in registry order, e.g. `"Smith J"`.
    pub authors: Vec<String>,
    /// Free-form publication date, e.g. `"2020 Mar 15"`.
    pub pubdate: String,
    pub title: String,
}

impl RegistryRecord {
    /// Surname of the first author: the first whitespace-delimited token of
    /// the first author name. `None` when there is no usable author.
    pub fn first_author_surname(&self) -> Option<&str> {
        self.authors
            .first()
            .and_then(|name| name.split_whitespace().next())
    }

    /// Publication year: the first whitespace-delimited token of `pubdate`.
    pub fn publication_year(&self) -> &str {
        self.pubdate.split_whitespace().next().unwrap_or("")
    }
}

//! Frontend Models
//!
//! Data structures matching the character API payloads.

use serde::{Deserialize, Serialize};

/// Character record (matches API `results[]` entries)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: u32,
    pub name: String,
    pub species: String,
    pub status: String,
    pub gender: String,
    pub origin: Origin,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Origin {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Pagination block returned alongside every batch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

/// One `GET /character?page=n` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterPage {
    #[serde(default)]
    pub info: PageInfo,
    pub results: Vec<Character>,
}

impl CharacterPage {
    /// True when the upstream has nothing after this page
    pub fn is_last(&self) -> bool {
        self.results.is_empty() || (self.info.pages > 0 && self.info.next.is_none())
    }
}

// ABOUTME: iTunes podcast namespace types (itunes:*).
// ABOUTME: Category tree, artwork, owner, show type, and episode type.

use serde::{Deserialize, Serialize};

/// `itunes:category` with at most one nested subcategory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItunesCategory {
    pub text: String,
    #[serde(default)]
    pub subcategory: Option<String>,
}

impl ItunesCategory {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            subcategory: None,
        }
    }

    pub fn with_subcategory(mut self, text: impl Into<String>) -> Self {
        self.subcategory = Some(text.into());
        self
    }
}

/// `itunes:image[href]`: show or episode artwork.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItunesImage {
    pub href: String,
}

/// `itunes:owner`: contact details for the show.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItunesOwner {
    pub name: String,
    pub email: String,
}

/// `itunes:type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItunesType {
    Episodic,
    Serial,
}

impl ItunesType {
    pub fn as_str(self) -> &'static str {
        match self {
            ItunesType::Episodic => "episodic",
            ItunesType::Serial => "serial",
        }
    }
}

/// `itunes:episodeType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EpisodeType {
    Full,
    Trailer,
    Bonus,
}

impl EpisodeType {
    pub fn as_str(self) -> &'static str {
        match self {
            EpisodeType::Full => "full",
            EpisodeType::Trailer => "trailer",
            EpisodeType::Bonus => "bonus",
        }
    }
}

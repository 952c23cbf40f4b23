// ABOUTME: Podlove Simple Chapters types (psc:chapters / psc:chapter).
// ABOUTME: Chapter marks carry a start offset, title, and optional link and image.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::duration_format::serde_seconds;

/// Version written when the caller does not pick one.
pub const PSC_VERSION: &str = "1.2";

/// `psc:chapters[version]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PscChapters {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub chapters: Vec<PscChapter>,
}

fn default_version() -> String {
    PSC_VERSION.to_string()
}

impl Default for PscChapters {
    fn default() -> Self {
        Self {
            version: default_version(),
            chapters: Vec::new(),
        }
    }
}

impl PscChapters {
    pub fn new(chapters: Vec<PscChapter>) -> Self {
        Self {
            chapters,
            ..Self::default()
        }
    }
}

/// `psc:chapter[start,title,href,image]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PscChapter {
    #[serde(with = "serde_seconds")]
    pub start: Duration,
    pub title: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl PscChapter {
    pub fn new(start: Duration, title: impl Into<String>) -> Self {
        Self {
            start,
            title: title.into(),
            href: None,
            image: None,
        }
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

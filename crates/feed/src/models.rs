// ABOUTME: Entity graph for a podcast RSS 2.0 document: Feed, Channel, Item, and core RSS elements.
// ABOUTME: Optional fields are Option, repeated fields are Vec; namespace types live in sibling modules.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::duration_format::serde_option_seconds;
use crate::itunes::{EpisodeType, ItunesCategory, ItunesImage, ItunesOwner, ItunesType};
use crate::namespace::Namespaces;
use crate::podcast::{
    AlternateEnclosure, Chapters, Episode, Funding, LiveItem, Location, Locked, Medium, Person,
    Podping, Publisher, Season, Soundbite, Trailer, Transcript, Txt, Value,
};
use crate::psc::PscChapters;

/// The only RSS version this crate writes.
pub const RSS_VERSION: &str = "2.0";

/// Root of the document: namespace controls plus exactly one channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Feed {
    pub namespaces: Namespaces,
    pub channel: Channel,
}

impl Feed {
    pub fn new(channel: Channel) -> Self {
        Self {
            namespaces: Namespaces::default(),
            channel,
        }
    }

    pub fn with_namespaces(mut self, namespaces: Namespaces) -> Self {
        self.namespaces = namespaces;
        self
    }

    pub fn version(&self) -> &'static str {
        RSS_VERSION
    }
}

/// Text content that the caller chooses to wrap in CDATA or escape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub text: String,
    #[serde(default)]
    pub cdata: bool,
}

impl TextBlock {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            cdata: false,
        }
    }

    pub fn cdata(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            cdata: true,
        }
    }
}

/// Represents a media enclosure (the episode's downloadable file).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Enclosure {
    pub url: String,
    pub length: u64,
    pub mime_type: String,
}

/// Item identifier, optionally marked as a permalink.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Guid {
    pub value: String,
    #[serde(default)]
    pub is_perma_link: Option<bool>,
}

impl Guid {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            is_perma_link: None,
        }
    }
}

/// `atom:link`, usually the feed's self reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AtomLink {
    pub href: String,
    #[serde(default)]
    pub rel: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
}

/// Podcast-level metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Channel {
    pub copyright: Option<String>,
    pub description: Option<TextBlock>,
    pub generator: Option<String>,
    pub language: Option<String>,
    pub last_build_date: Option<DateTime<Utc>>,
    pub link: Option<String>,
    pub title: Option<String>,
    pub atom_link: Option<AtomLink>,
    pub content_encoded: Option<TextBlock>,

    pub itunes_author: Option<String>,
    pub itunes_categories: Vec<ItunesCategory>,
    pub itunes_explicit: Option<bool>,
    pub itunes_image: Option<ItunesImage>,
    pub itunes_new_feed_url: Option<String>,
    pub itunes_owner: Option<ItunesOwner>,
    pub itunes_type: Option<ItunesType>,

    pub podcast_fundings: Vec<Funding>,
    /// UUID identifying the show across hosts.
    pub podcast_guid: Option<String>,
    pub podcast_isrc: Option<String>,
    pub podcast_location: Option<Location>,
    pub podcast_locked: Option<Locked>,
    pub podcast_medium: Option<Medium>,
    pub podcast_persons: Vec<Person>,
    pub podcast_podping: Option<Podping>,
    pub podcast_publisher: Option<Publisher>,
    pub podcast_single_item: Option<bool>,
    pub podcast_txts: Vec<Txt>,
    pub podcast_trailers: Vec<Trailer>,
    pub podcast_value: Option<Value>,
    pub podcast_live_items: Vec<LiveItem>,

    pub items: Vec<Item>,
}

/// A single episode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    pub description: Option<TextBlock>,
    pub enclosure: Option<Enclosure>,
    pub guid: Option<Guid>,
    pub link: Option<String>,
    pub pub_date: Option<DateTime<Utc>>,
    pub title: Option<String>,
    pub content_encoded: Option<TextBlock>,

    #[serde(with = "serde_option_seconds")]
    pub itunes_duration: Option<Duration>,
    pub itunes_episode: Option<u64>,
    pub itunes_episode_type: Option<EpisodeType>,
    pub itunes_explicit: Option<bool>,
    pub itunes_image: Option<ItunesImage>,
    pub itunes_season: Option<u64>,

    pub podcast_alternate_enclosures: Vec<AlternateEnclosure>,
    pub podcast_chapters: Option<Chapters>,
    pub podcast_episode: Option<Episode>,
    pub podcast_isrc: Option<String>,
    pub podcast_location: Option<Location>,
    pub podcast_persons: Vec<Person>,
    pub podcast_season: Option<Season>,
    pub podcast_soundbites: Vec<Soundbite>,
    pub podcast_txts: Vec<Txt>,
    pub podcast_transcripts: Vec<Transcript>,
    pub podcast_value: Option<Value>,

    pub psc_chapters: Option<PscChapters>,
}

impl Item {
    /// True if any iTunes field is populated.
    pub(crate) fn uses_itunes(&self) -> bool {
        self.itunes_duration.is_some()
            || self.itunes_episode.is_some()
            || self.itunes_episode_type.is_some()
            || self.itunes_explicit.is_some()
            || self.itunes_image.is_some()
            || self.itunes_season.is_some()
    }

    /// True if any Podcasting 2.0 field is populated.
    pub(crate) fn uses_podcast(&self) -> bool {
        !self.podcast_alternate_enclosures.is_empty()
            || self.podcast_chapters.is_some()
            || self.podcast_episode.is_some()
            || self.podcast_isrc.is_some()
            || self.podcast_location.is_some()
            || !self.podcast_persons.is_empty()
            || self.podcast_season.is_some()
            || !self.podcast_soundbites.is_empty()
            || !self.podcast_txts.is_empty()
            || !self.podcast_transcripts.is_empty()
            || self.podcast_value.is_some()
    }
}

impl Channel {
    pub(crate) fn uses_itunes(&self) -> bool {
        self.itunes_author.is_some()
            || !self.itunes_categories.is_empty()
            || self.itunes_explicit.is_some()
            || self.itunes_image.is_some()
            || self.itunes_new_feed_url.is_some()
            || self.itunes_owner.is_some()
            || self.itunes_type.is_some()
    }

    /// Channel-level podcast fields only; items are checked separately.
    pub(crate) fn uses_podcast(&self) -> bool {
        !self.podcast_fundings.is_empty()
            || self.podcast_guid.is_some()
            || self.podcast_isrc.is_some()
            || self.podcast_location.is_some()
            || self.podcast_locked.is_some()
            || self.podcast_medium.is_some()
            || !self.podcast_persons.is_empty()
            || self.podcast_podping.is_some()
            || self.podcast_publisher.is_some()
            || self.podcast_single_item.is_some()
            || !self.podcast_txts.is_empty()
            || !self.podcast_trailers.is_empty()
            || self.podcast_value.is_some()
            || !self.podcast_live_items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_version_is_fixed() {
        assert_eq!(Feed::default().version(), "2.0");
    }

    #[test]
    fn test_item_namespace_usage() {
        let mut item = Item::default();
        assert!(!item.uses_itunes());
        assert!(!item.uses_podcast());

        item.itunes_explicit = Some(false);
        assert!(item.uses_itunes());

        item.podcast_isrc = Some("AA6Q72000047".to_string());
        assert!(item.uses_podcast());
    }

    #[test]
    fn test_channel_deserializes_from_sparse_json() {
        let json = r#"{
            "title": "X",
            "description": { "text": "Y", "cdata": true },
            "podcast_medium": "podcast"
        }"#;
        let channel: Channel = serde_json::from_str(json).unwrap();
        assert_eq!(channel.title.as_deref(), Some("X"));
        assert_eq!(channel.description, Some(TextBlock::cdata("Y")));
        assert_eq!(channel.podcast_medium, Some(Medium::Podcast));
        assert!(channel.items.is_empty());
    }

    #[test]
    fn test_item_duration_from_json_seconds() {
        let item: Item = serde_json::from_str(r#"{ "itunes_duration": 671.5 }"#).unwrap();
        assert_eq!(item.itunes_duration, Some(Duration::from_millis(671_500)));
    }
}

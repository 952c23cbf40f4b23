// ABOUTME: Podcasting 2.0 namespace types (podcast:*), see podcastindex.org/namespace/1.0.
// ABOUTME: Channel-level tags, episode-level tags, value-for-value blocks, and live items.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::duration_format::{serde_option_seconds, serde_seconds};
use crate::location::{Geo, Osm};
use crate::models::Item;

/// `podcast:medium`: what kind of content the feed carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Medium {
    #[serde(rename = "podcast")]
    Podcast,
    #[serde(rename = "music")]
    Music,
    #[serde(rename = "video")]
    Video,
    #[serde(rename = "film")]
    Film,
    #[serde(rename = "audiobook")]
    Audiobook,
    #[serde(rename = "newsletter")]
    Newsletter,
    #[serde(rename = "blog")]
    Blog,
    #[serde(rename = "publisher")]
    Publisher,
    #[serde(rename = "podcastL")]
    PodcastList,
    #[serde(rename = "musicL")]
    MusicList,
    #[serde(rename = "videoL")]
    VideoList,
    #[serde(rename = "filmL")]
    FilmList,
    #[serde(rename = "audiobookL")]
    AudiobookList,
    #[serde(rename = "newsletterL")]
    NewsletterList,
    #[serde(rename = "blogL")]
    BlogList,
    #[serde(rename = "publisherL")]
    PublisherList,
    #[serde(rename = "mixed")]
    Mixed,
}

impl Medium {
    pub fn as_str(self) -> &'static str {
        match self {
            Medium::Podcast => "podcast",
            Medium::Music => "music",
            Medium::Video => "video",
            Medium::Film => "film",
            Medium::Audiobook => "audiobook",
            Medium::Newsletter => "newsletter",
            Medium::Blog => "blog",
            Medium::Publisher => "publisher",
            Medium::PodcastList => "podcastL",
            Medium::MusicList => "musicL",
            Medium::VideoList => "videoL",
            Medium::FilmList => "filmL",
            Medium::AudiobookList => "audiobookL",
            Medium::NewsletterList => "newsletterL",
            Medium::BlogList => "blogL",
            Medium::PublisherList => "publisherL",
            Medium::Mixed => "mixed",
        }
    }
}

/// `podcast:locked[owner]`: whether other hosts may import the feed.
/// Written as `yes`/`no`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Locked {
    pub locked: bool,
    #[serde(default)]
    pub owner: Option<String>,
}

/// `podcast:funding[url]` with a caption.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Funding {
    pub url: String,
    #[serde(default)]
    pub caption: String,
}

/// `podcast:location[geo,osm]` with a human-readable name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    #[serde(default)]
    pub geo: Option<Geo>,
    #[serde(default)]
    pub osm: Option<Osm>,
}

/// `podcast:person[group,role,href,img]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    pub name: String,
    pub group: Option<String>,
    pub role: Option<String>,
    pub href: Option<String>,
    pub img: Option<String>,
}

/// `podcast:trailer[pubdate,url,length,type,season]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trailer {
    pub title: String,
    pub pub_date: DateTime<Utc>,
    pub url: String,
    #[serde(default)]
    pub length: Option<u64>,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub season: Option<u64>,
}

/// `podcast:txt[purpose]`: free-form text record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Txt {
    pub text: String,
    #[serde(default)]
    pub purpose: Option<String>,
}

/// `podcast:podping[usesPodping]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Podping {
    #[serde(default)]
    pub uses_podping: Option<bool>,
}

/// `podcast:publisher`: points back at the publisher feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Publisher {
    #[serde(default)]
    pub remote_items: Vec<RemoteItem>,
}

/// `podcast:remoteItem[itemGuid,feedGuid,feedUrl,medium]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteItem {
    pub feed_guid: Uuid,
    #[serde(default)]
    pub item_guid: Option<String>,
    #[serde(default)]
    pub feed_url: Option<String>,
    #[serde(default)]
    pub medium: Option<Medium>,
}

impl RemoteItem {
    pub fn new(feed_guid: Uuid) -> Self {
        Self {
            feed_guid,
            item_guid: None,
            feed_url: None,
            medium: None,
        }
    }
}

/// `podcast:value[type,method,suggested]`: value-for-value payment setup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Value {
    pub value_type: String,
    pub method: String,
    pub suggested: Option<f64>,
    pub recipients: Vec<ValueRecipient>,
    pub time_splits: Vec<ValueTimeSplit>,
}

/// `podcast:valueRecipient`. Splits are shares, not required to total 100.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueRecipient {
    pub name: Option<String>,
    pub custom_key: Option<String>,
    pub custom_value: Option<String>,
    pub recipient_type: String,
    pub address: String,
    pub split: u32,
    pub fee: Option<bool>,
}

/// `podcast:valueTimeSplit`: a payment override for one stretch of the episode.
/// Timings are written as whole seconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueTimeSplit {
    #[serde(with = "serde_seconds")]
    pub start_time: Duration,
    #[serde(with = "serde_seconds")]
    pub duration: Duration,
    #[serde(default, with = "serde_option_seconds")]
    pub remote_start_time: Option<Duration>,
    #[serde(default)]
    pub remote_percentage: Option<u32>,
    #[serde(default)]
    pub recipients: Vec<ValueRecipient>,
    #[serde(default)]
    pub remote_item: Option<RemoteItem>,
}

/// `podcast:transcript[url,type,language,rel]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub url: String,
    pub mime_type: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub rel: Option<String>,
}

/// `podcast:chapters[url,type]`: link to an external chapters file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chapters {
    pub url: String,
    pub mime_type: String,
}

/// `podcast:alternateEnclosure`: another rendition of the episode media.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlternateEnclosure {
    pub mime_type: String,
    pub length: Option<u64>,
    pub bitrate: Option<u64>,
    pub height: Option<u64>,
    pub lang: Option<String>,
    pub title: Option<String>,
    pub rel: Option<String>,
    pub default: Option<bool>,
    pub sources: Vec<Source>,
}

/// `podcast:source[uri,contentType]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub uri: String,
    #[serde(default)]
    pub content_type: Option<String>,
}

/// `podcast:soundbite[startTime,duration]`: a highlight clip.
/// Timings are written as fractional seconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Soundbite {
    #[serde(with = "serde_seconds")]
    pub start_time: Duration,
    #[serde(with = "serde_seconds")]
    pub duration: Duration,
    #[serde(default)]
    pub title: Option<String>,
}

/// `podcast:season[name]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Season {
    pub number: u64,
    #[serde(default)]
    pub name: Option<String>,
}

/// `podcast:episode[display]`. The number may be fractional, e.g. `315.5`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub number: f64,
    #[serde(default)]
    pub display: Option<String>,
}

/// `podcast:liveItem[status]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiveStatus {
    Pending,
    Live,
    Ended,
}

impl LiveStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            LiveStatus::Pending => "pending",
            LiveStatus::Live => "live",
            LiveStatus::Ended => "ended",
        }
    }
}

/// `podcast:liveItem[status,start,end]`: a scheduled or running livestream.
/// The body is an ordinary item plus a few live-only tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveItem {
    pub status: LiveStatus,
    pub start: DateTime<Utc>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub item: Item,
    #[serde(default)]
    pub chat: Option<Chat>,
    #[serde(default)]
    pub content_links: Vec<ContentLink>,
    #[serde(default)]
    pub live_value: Option<LiveValue>,
}

impl LiveItem {
    pub fn new(status: LiveStatus, start: DateTime<Utc>) -> Self {
        Self {
            status,
            start,
            end: None,
            item: Item::default(),
            chat: None,
            content_links: Vec::new(),
            live_value: None,
        }
    }
}

/// `podcast:contentLink[href]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentLink {
    pub href: String,
    #[serde(default)]
    pub text: String,
}

/// `podcast:chat[server,protocol,accountId,space,embedUrl]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Chat {
    pub server: String,
    pub protocol: String,
    pub account_id: Option<String>,
    pub space: Option<String>,
    pub embed_url: Option<String>,
}

/// `podcast:liveValue[uri,protocol]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LiveValue {
    pub uri: String,
    pub protocol: String,
}

// ABOUTME: Podcast RSS 2.0 feed model and encoder for the podfeed workspace.
// ABOUTME: Covers iTunes, Google Play, content, atom, Podcasting 2.0, and Podlove Simple Chapters.

pub mod duration_format;
pub mod encoder;
pub mod error;
pub mod itunes;
pub mod location;
pub mod models;
pub mod namespace;
pub mod options;
pub mod order;
pub mod podcast;
pub mod psc;
pub mod scalars;
pub mod time_format;
pub mod validate;

pub use encoder::{encode_to_string, encode_to_vec, write_feed};
pub use error::EncodeError;
pub use itunes::{EpisodeType, ItunesCategory, ItunesImage, ItunesOwner, ItunesType};
pub use location::{Geo, Osm, OsmType};
pub use models::{AtomLink, Channel, Enclosure, Feed, Guid, Item, TextBlock, RSS_VERSION};
pub use namespace::{Namespace, NamespaceDecl, Namespaces};
pub use options::{EncodeOptions, Indent};
pub use podcast::{
    AlternateEnclosure, Chapters, Chat, ContentLink, Episode, Funding, LiveItem, LiveStatus,
    LiveValue, Location, Locked, Medium, Person, Podping, Publisher, RemoteItem, Season,
    Soundbite, Source, Trailer, Transcript, Txt, Value, ValueRecipient, ValueTimeSplit,
};
pub use psc::{PscChapter, PscChapters, PSC_VERSION};
pub use validate::validate_feed;

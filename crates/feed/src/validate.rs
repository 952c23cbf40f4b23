// ABOUTME: Pre-encoding schema checks for the feed entity graph.
// ABOUTME: Rejects empty required attributes, unparsable URLs, and non-UUID podcast GUIDs.

use url::Url;
use uuid::Uuid;

use crate::error::EncodeError;
use crate::models::{Channel, Feed, Item};
use crate::podcast::{LiveItem, Location, Person, RemoteItem, Value, ValueRecipient};

/// Walks the whole feed and returns the first schema violation found.
/// Elements are visited in document order, so the error points at the
/// earliest offending element.
pub fn validate_feed(feed: &Feed) -> Result<(), EncodeError> {
    validate_channel(&feed.channel)
}

fn validate_channel(channel: &Channel) -> Result<(), EncodeError> {
    if let Some(ref link) = channel.atom_link {
        check_url("atom:link", "href", &link.href)?;
    }
    for category in &channel.itunes_categories {
        require("itunes:category", "text", &category.text)?;
        if let Some(ref sub) = category.subcategory {
            require("itunes:category", "text", sub)?;
        }
    }
    if let Some(ref image) = channel.itunes_image {
        check_url("itunes:image", "href", &image.href)?;
    }
    if let Some(ref url) = channel.itunes_new_feed_url {
        check_url("itunes:new-feed-url", "text", url)?;
    }
    for funding in &channel.podcast_fundings {
        check_url("podcast:funding", "url", &funding.url)?;
    }
    if let Some(ref guid) = channel.podcast_guid {
        Uuid::parse_str(guid).map_err(|e| {
            EncodeError::invalid("podcast:guid", format!("{:?} is not a UUID: {}", guid, e))
        })?;
    }
    if let Some(ref location) = channel.podcast_location {
        validate_location(location)?;
    }
    for person in &channel.podcast_persons {
        validate_person(person)?;
    }
    if let Some(ref publisher) = channel.podcast_publisher {
        for remote in &publisher.remote_items {
            validate_remote_item(remote)?;
        }
    }
    for trailer in &channel.podcast_trailers {
        check_url("podcast:trailer", "url", &trailer.url)?;
    }
    if let Some(ref value) = channel.podcast_value {
        validate_value(value)?;
    }
    for live in &channel.podcast_live_items {
        validate_live_item(live)?;
    }
    for item in &channel.items {
        validate_item(item)?;
    }
    Ok(())
}

fn validate_item(item: &Item) -> Result<(), EncodeError> {
    if let Some(ref enclosure) = item.enclosure {
        check_url("enclosure", "url", &enclosure.url)?;
        require("enclosure", "type", &enclosure.mime_type)?;
    }
    if let Some(ref guid) = item.guid {
        require("guid", "text", &guid.value)?;
    }
    if let Some(ref image) = item.itunes_image {
        check_url("itunes:image", "href", &image.href)?;
    }
    for alt in &item.podcast_alternate_enclosures {
        require("podcast:alternateEnclosure", "type", &alt.mime_type)?;
        if alt.sources.is_empty() {
            return Err(EncodeError::missing(
                "podcast:alternateEnclosure",
                "podcast:source",
            ));
        }
        for source in &alt.sources {
            check_url("podcast:source", "uri", &source.uri)?;
        }
    }
    if let Some(ref chapters) = item.podcast_chapters {
        check_url("podcast:chapters", "url", &chapters.url)?;
        require("podcast:chapters", "type", &chapters.mime_type)?;
    }
    if let Some(ref episode) = item.podcast_episode {
        if !episode.number.is_finite() {
            return Err(EncodeError::invalid(
                "podcast:episode",
                "episode number is not finite",
            ));
        }
    }
    if let Some(ref location) = item.podcast_location {
        validate_location(location)?;
    }
    for person in &item.podcast_persons {
        validate_person(person)?;
    }
    for transcript in &item.podcast_transcripts {
        check_url("podcast:transcript", "url", &transcript.url)?;
        require("podcast:transcript", "type", &transcript.mime_type)?;
    }
    if let Some(ref value) = item.podcast_value {
        validate_value(value)?;
    }
    if let Some(ref psc) = item.psc_chapters {
        require("psc:chapters", "version", &psc.version)?;
        for chapter in &psc.chapters {
            require("psc:chapter", "title", &chapter.title)?;
            if let Some(ref href) = chapter.href {
                check_url("psc:chapter", "href", href)?;
            }
            if let Some(ref image) = chapter.image {
                check_url("psc:chapter", "image", image)?;
            }
        }
    }
    Ok(())
}

fn validate_live_item(live: &LiveItem) -> Result<(), EncodeError> {
    validate_item(&live.item)?;
    if let Some(ref chat) = live.chat {
        require("podcast:chat", "server", &chat.server)?;
        require("podcast:chat", "protocol", &chat.protocol)?;
        if let Some(ref embed) = chat.embed_url {
            check_url("podcast:chat", "embedUrl", embed)?;
        }
    }
    for link in &live.content_links {
        check_url("podcast:contentLink", "href", &link.href)?;
    }
    if let Some(ref lv) = live.live_value {
        require("podcast:liveValue", "uri", &lv.uri)?;
        require("podcast:liveValue", "protocol", &lv.protocol)?;
    }
    Ok(())
}

fn validate_value(value: &Value) -> Result<(), EncodeError> {
    require("podcast:value", "type", &value.value_type)?;
    require("podcast:value", "method", &value.method)?;
    if let Some(suggested) = value.suggested {
        if !suggested.is_finite() {
            return Err(EncodeError::invalid(
                "podcast:value",
                "suggested amount is not finite",
            ));
        }
    }
    for recipient in &value.recipients {
        validate_recipient(recipient)?;
    }
    for split in &value.time_splits {
        for recipient in &split.recipients {
            validate_recipient(recipient)?;
        }
        if let Some(ref remote) = split.remote_item {
            validate_remote_item(remote)?;
        }
        if let Some(pct) = split.remote_percentage {
            if pct > 100 {
                return Err(EncodeError::invalid(
                    "podcast:valueTimeSplit",
                    format!("remotePercentage {} exceeds 100", pct),
                ));
            }
        }
    }
    Ok(())
}

fn validate_recipient(recipient: &ValueRecipient) -> Result<(), EncodeError> {
    require("podcast:valueRecipient", "type", &recipient.recipient_type)?;
    require("podcast:valueRecipient", "address", &recipient.address)?;
    Ok(())
}

fn validate_remote_item(remote: &RemoteItem) -> Result<(), EncodeError> {
    if let Some(ref url) = remote.feed_url {
        check_url("podcast:remoteItem", "feedUrl", url)?;
    }
    Ok(())
}

fn validate_location(location: &Location) -> Result<(), EncodeError> {
    if let Some(ref geo) = location.geo {
        geo.to_uri()?;
    }
    Ok(())
}

fn validate_person(person: &Person) -> Result<(), EncodeError> {
    require("podcast:person", "name", &person.name)?;
    if let Some(ref href) = person.href {
        check_url("podcast:person", "href", href)?;
    }
    if let Some(ref img) = person.img {
        check_url("podcast:person", "img", img)?;
    }
    Ok(())
}

fn require(element: &'static str, attribute: &'static str, value: &str) -> Result<(), EncodeError> {
    if value.trim().is_empty() {
        return Err(EncodeError::missing(element, attribute));
    }
    Ok(())
}

fn check_url(element: &'static str, attribute: &'static str, value: &str) -> Result<(), EncodeError> {
    require(element, attribute, value)?;
    Url::parse(value).map_err(|e| EncodeError::InvalidUrl {
        element,
        attribute,
        value: value.to_string(),
        reason: e.to_string(),
    })?;
    Ok(())
}

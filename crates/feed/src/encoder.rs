// ABOUTME: Document assembler: walks Feed -> Channel -> Items and writes RSS XML with quick-xml.
// ABOUTME: Applies presence rules, canonical ordering, scalar codecs, and resolved namespace declarations.

use std::borrow::Cow;
use std::io::Write;

use quick_xml::escape::escape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::QName;
use quick_xml::writer::Writer;

use crate::duration_format::{
    encode_chapter_timestamp, encode_fractional_seconds, encode_integer_seconds,
};
use crate::error::EncodeError;
use crate::itunes::ItunesCategory;
use crate::location::Geo;
use crate::models::{Channel, Feed, Item, TextBlock};
use crate::namespace::{detect_usage, resolve, Declaration};
use crate::options::EncodeOptions;
use crate::order::{ChannelField, ItemField, CHANNEL_ORDER, ITEM_ORDER};
use crate::podcast::{
    AlternateEnclosure, LiveItem, Location, Medium, Person, RemoteItem, Trailer, Txt, Value,
    ValueRecipient, ValueTimeSplit,
};
use crate::psc::PscChapters;
use crate::scalars::{encode_true_false, encode_yes_no, finite_decimal};
use crate::time_format::{encode_pub_date, encode_timestamp};
use crate::validate::validate_feed;

/// Encodes a feed into a UTF-8 string.
pub fn encode_to_string(feed: &Feed, options: &EncodeOptions) -> Result<String, EncodeError> {
    let bytes = encode_to_vec(feed, options)?;
    String::from_utf8(bytes).map_err(EncodeError::write)
}

/// Encodes a feed into a fresh byte buffer.
pub fn encode_to_vec(feed: &Feed, options: &EncodeOptions) -> Result<Vec<u8>, EncodeError> {
    write_feed(feed, options, Vec::new())
}

/// Writes a feed into `sink` and hands the sink back.
///
/// Validation (when enabled) runs before the first byte is written. An error
/// raised later, while writing, may leave a partial document in `sink`; the
/// caller must discard it.
pub fn write_feed<W: Write>(feed: &Feed, options: &EncodeOptions, sink: W) -> Result<W, EncodeError> {
    if options.validate {
        validate_feed(feed)?;
    }

    let used = detect_usage(&feed.channel);
    let declarations = resolve(&feed.namespaces, &used);
    tracing::debug!(
        namespaces = ?declarations.iter().map(|d| d.namespace.prefix()).collect::<Vec<_>>(),
        items = feed.channel.items.len(),
        live_items = feed.channel.podcast_live_items.len(),
        "encoding feed"
    );

    let xml = match options.indent {
        Some(indent) if indent.width > 0 => {
            Writer::new_with_indent(sink, indent.ch, indent.width)
        }
        _ => Writer::new(sink),
    };
    let mut doc = DocumentWriter { xml };
    doc.document(feed, &declarations, options.xml_declaration)?;
    Ok(doc.xml.into_inner())
}

impl Feed {
    /// Shorthand for [`encode_to_string`].
    pub fn to_xml(&self, options: &EncodeOptions) -> Result<String, EncodeError> {
        encode_to_string(self, options)
    }
}

/// A start tag under construction.
struct Tag {
    name: &'static str,
    start: BytesStart<'static>,
}

impl Tag {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            start: BytesStart::new(name),
        }
    }

    /// Pushes an attribute whose value is escaped by [`escape_attr`].
    fn attr(mut self, key: &str, value: &str) -> Self {
        self.start.push_attribute(Attribute {
            key: QName(key.as_bytes()),
            value: Cow::Owned(escape_attr(value).into_bytes()),
        });
        self
    }

    fn opt_attr(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.attr(key, v),
            None => self,
        }
    }
}

struct DocumentWriter<W: Write> {
    xml: Writer<W>,
}

impl<W: Write> DocumentWriter<W> {
    // ------------------------------------------------------------------------
    // Primitives
    // ------------------------------------------------------------------------

    fn emit(&mut self, event: Event<'_>) -> Result<(), EncodeError> {
        self.xml.write_event(event).map_err(EncodeError::write)
    }

    fn open(&mut self, tag: Tag) -> Result<(), EncodeError> {
        self.emit(Event::Start(tag.start))
    }

    fn close(&mut self, name: &str) -> Result<(), EncodeError> {
        self.emit(Event::End(BytesEnd::new(name)))
    }

    /// `<name ...>text</name>`. An empty text still yields an explicit end tag.
    fn text_element(&mut self, tag: Tag, text: &str) -> Result<(), EncodeError> {
        let name = tag.name;
        self.open(tag)?;
        self.emit(Event::Text(BytesText::new(&replace_invalid_chars(text))))?;
        self.close(name)
    }

    fn empty(&mut self, tag: Tag) -> Result<(), EncodeError> {
        self.text_element(tag, "")
    }

    /// Writes `tag` with nested children, or as an empty pair when there are none.
    fn container<F>(&mut self, tag: Tag, has_children: bool, children: F) -> Result<(), EncodeError>
    where
        F: FnOnce(&mut Self) -> Result<(), EncodeError>,
    {
        if !has_children {
            return self.empty(tag);
        }
        let name = tag.name;
        self.open(tag)?;
        children(self)?;
        self.close(name)
    }

    fn opt_text(&mut self, name: &'static str, value: Option<&str>) -> Result<(), EncodeError> {
        match value {
            Some(v) => self.text_element(Tag::new(name), v),
            None => Ok(()),
        }
    }

    fn opt_block(&mut self, name: &'static str, block: Option<&TextBlock>) -> Result<(), EncodeError> {
        let Some(block) = block else {
            return Ok(());
        };
        if !block.cdata {
            return self.text_element(Tag::new(name), &block.text);
        }
        let text = replace_invalid_chars(&block.text);
        self.open(Tag::new(name))?;
        for part in split_cdata(&text) {
            self.emit(Event::CData(BytesCData::new(part)))?;
        }
        self.close(name)
    }

    // ------------------------------------------------------------------------
    // Document
    // ------------------------------------------------------------------------

    fn document(
        &mut self,
        feed: &Feed,
        declarations: &[Declaration],
        xml_declaration: bool,
    ) -> Result<(), EncodeError> {
        if xml_declaration {
            self.emit(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        }

        let mut rss = Tag::new("rss").attr("version", feed.version());
        for decl in declarations {
            rss = rss.attr(decl.namespace.xmlns_attr(), &decl.uri);
        }
        self.open(rss)?;
        self.channel(&feed.channel)?;
        self.close("rss")
    }

    fn channel(&mut self, channel: &Channel) -> Result<(), EncodeError> {
        self.open(Tag::new("channel"))?;
        for field in CHANNEL_ORDER {
            self.channel_field(channel, field)?;
        }
        self.close("channel")
    }

    fn channel_field(&mut self, ch: &Channel, field: ChannelField) -> Result<(), EncodeError> {
        let name = field.element_name();
        match field {
            ChannelField::Copyright => self.opt_text(name, ch.copyright.as_deref()),
            ChannelField::Description => self.opt_block(name, ch.description.as_ref()),
            ChannelField::Generator => self.opt_text(name, ch.generator.as_deref()),
            ChannelField::Language => self.opt_text(name, ch.language.as_deref()),
            ChannelField::LastBuildDate => {
                let date = ch.last_build_date.as_ref().map(encode_pub_date);
                self.opt_text(name, date.as_deref())
            }
            ChannelField::Link => self.opt_text(name, ch.link.as_deref()),
            ChannelField::Title => self.opt_text(name, ch.title.as_deref()),
            ChannelField::AtomLink => match ch.atom_link {
                Some(ref link) => self.empty(
                    Tag::new(name)
                        .attr("href", &link.href)
                        .opt_attr("rel", link.rel.as_deref())
                        .opt_attr("type", link.mime_type.as_deref()),
                ),
                None => Ok(()),
            },
            ChannelField::ContentEncoded => self.opt_block(name, ch.content_encoded.as_ref()),
            ChannelField::ItunesAuthor => self.opt_text(name, ch.itunes_author.as_deref()),
            ChannelField::ItunesCategories => {
                for category in &ch.itunes_categories {
                    self.itunes_category(category)?;
                }
                Ok(())
            }
            ChannelField::ItunesExplicit => {
                self.opt_text(name, ch.itunes_explicit.map(encode_true_false))
            }
            ChannelField::ItunesImage => match ch.itunes_image {
                Some(ref image) => self.empty(Tag::new(name).attr("href", &image.href)),
                None => Ok(()),
            },
            ChannelField::ItunesNewFeedUrl => self.opt_text(name, ch.itunes_new_feed_url.as_deref()),
            ChannelField::ItunesOwner => match ch.itunes_owner {
                Some(ref owner) => {
                    self.open(Tag::new(name))?;
                    self.text_element(Tag::new("itunes:name"), &owner.name)?;
                    self.text_element(Tag::new("itunes:email"), &owner.email)?;
                    self.close(name)
                }
                None => Ok(()),
            },
            ChannelField::ItunesType => self.opt_text(name, ch.itunes_type.map(|t| t.as_str())),
            ChannelField::PodcastFundings => {
                for funding in &ch.podcast_fundings {
                    self.text_element(Tag::new(name).attr("url", &funding.url), &funding.caption)?;
                }
                Ok(())
            }
            ChannelField::PodcastGuid => self.opt_text(name, ch.podcast_guid.as_deref()),
            ChannelField::PodcastIsrc => self.opt_text(name, ch.podcast_isrc.as_deref()),
            ChannelField::PodcastLocation => match ch.podcast_location {
                Some(ref location) => self.location(location),
                None => Ok(()),
            },
            ChannelField::PodcastLocked => match ch.podcast_locked {
                Some(ref locked) => self.text_element(
                    Tag::new(name).opt_attr("owner", locked.owner.as_deref()),
                    encode_yes_no(locked.locked),
                ),
                None => Ok(()),
            },
            ChannelField::PodcastMedium => self.opt_text(name, ch.podcast_medium.map(Medium::as_str)),
            ChannelField::PodcastPersons => {
                for person in &ch.podcast_persons {
                    self.person(person)?;
                }
                Ok(())
            }
            ChannelField::PodcastPodping => match ch.podcast_podping {
                Some(ref podping) => self.empty(
                    Tag::new(name).opt_attr("usesPodping", podping.uses_podping.map(encode_true_false)),
                ),
                None => Ok(()),
            },
            ChannelField::PodcastPublisher => match ch.podcast_publisher {
                Some(ref publisher) => {
                    self.container(Tag::new(name), !publisher.remote_items.is_empty(), |w| {
                        for remote in &publisher.remote_items {
                            w.remote_item(remote)?;
                        }
                        Ok(())
                    })
                }
                None => Ok(()),
            },
            ChannelField::PodcastSingleItem => {
                self.opt_text(name, ch.podcast_single_item.map(encode_true_false))
            }
            ChannelField::PodcastTxts => {
                for txt in &ch.podcast_txts {
                    self.txt(txt)?;
                }
                Ok(())
            }
            ChannelField::PodcastTrailers => {
                for trailer in &ch.podcast_trailers {
                    self.trailer(trailer)?;
                }
                Ok(())
            }
            ChannelField::PodcastValue => match ch.podcast_value {
                Some(ref value) => self.value(value),
                None => Ok(()),
            },
            ChannelField::PodcastLiveItems => {
                for live in &ch.podcast_live_items {
                    self.live_item(live)?;
                }
                Ok(())
            }
            ChannelField::Items => {
                for (index, item) in ch.items.iter().enumerate() {
                    tracing::trace!(index, title = item.title.as_deref(), "encoding item");
                    self.open(Tag::new("item"))?;
                    self.item_body(item, None)?;
                    self.close("item")?;
                }
                Ok(())
            }
        }
    }

    // ------------------------------------------------------------------------
    // Items
    // ------------------------------------------------------------------------

    fn live_item(&mut self, live: &LiveItem) -> Result<(), EncodeError> {
        let start = encode_timestamp(&live.start);
        let end = live.end.as_ref().map(encode_timestamp);
        let tag = Tag::new("podcast:liveItem")
            .attr("status", live.status.as_str())
            .attr("start", &start)
            .opt_attr("end", end.as_deref());

        self.open(tag)?;
        self.item_body(&live.item, Some(live))?;
        self.close("podcast:liveItem")
    }

    /// Writes the children of an item; `live` supplies the live-only slots.
    fn item_body(&mut self, item: &Item, live: Option<&LiveItem>) -> Result<(), EncodeError> {
        for field in ITEM_ORDER {
            self.item_field(item, live, field)?;
        }
        Ok(())
    }

    fn item_field(
        &mut self,
        item: &Item,
        live: Option<&LiveItem>,
        field: ItemField,
    ) -> Result<(), EncodeError> {
        let name = field.element_name();
        match field {
            ItemField::Description => self.opt_block(name, item.description.as_ref()),
            ItemField::Enclosure => match item.enclosure {
                Some(ref enclosure) => self.empty(
                    Tag::new(name)
                        .attr("url", &enclosure.url)
                        .attr("length", &enclosure.length.to_string())
                        .attr("type", &enclosure.mime_type),
                ),
                None => Ok(()),
            },
            ItemField::Guid => match item.guid {
                Some(ref guid) => self.text_element(
                    Tag::new(name).opt_attr("isPermaLink", guid.is_perma_link.map(encode_true_false)),
                    &guid.value,
                ),
                None => Ok(()),
            },
            ItemField::Link => self.opt_text(name, item.link.as_deref()),
            ItemField::PubDate => {
                let date = item.pub_date.as_ref().map(encode_pub_date);
                self.opt_text(name, date.as_deref())
            }
            ItemField::Title => self.opt_text(name, item.title.as_deref()),
            ItemField::ContentEncoded => self.opt_block(name, item.content_encoded.as_ref()),
            ItemField::ItunesDuration => {
                let secs = item.itunes_duration.map(encode_integer_seconds);
                self.opt_text(name, secs.as_deref())
            }
            ItemField::ItunesEpisode => {
                let number = item.itunes_episode.map(|n| n.to_string());
                self.opt_text(name, number.as_deref())
            }
            ItemField::ItunesEpisodeType => {
                self.opt_text(name, item.itunes_episode_type.map(|t| t.as_str()))
            }
            ItemField::ItunesExplicit => {
                self.opt_text(name, item.itunes_explicit.map(encode_true_false))
            }
            ItemField::ItunesImage => match item.itunes_image {
                Some(ref image) => self.empty(Tag::new(name).attr("href", &image.href)),
                None => Ok(()),
            },
            ItemField::ItunesSeason => {
                let number = item.itunes_season.map(|n| n.to_string());
                self.opt_text(name, number.as_deref())
            }
            ItemField::PodcastAlternateEnclosures => {
                for alt in &item.podcast_alternate_enclosures {
                    self.alternate_enclosure(alt)?;
                }
                Ok(())
            }
            ItemField::PodcastChat => match live.and_then(|l| l.chat.as_ref()) {
                Some(chat) => self.empty(
                    Tag::new(name)
                        .attr("server", &chat.server)
                        .attr("protocol", &chat.protocol)
                        .opt_attr("accountId", chat.account_id.as_deref())
                        .opt_attr("space", chat.space.as_deref())
                        .opt_attr("embedUrl", chat.embed_url.as_deref()),
                ),
                None => Ok(()),
            },
            ItemField::PodcastContentLinks => {
                for link in live.map(|l| l.content_links.as_slice()).unwrap_or_default() {
                    self.text_element(Tag::new(name).attr("href", &link.href), &link.text)?;
                }
                Ok(())
            }
            ItemField::PodcastChapters => match item.podcast_chapters {
                Some(ref chapters) => self.empty(
                    Tag::new(name)
                        .attr("url", &chapters.url)
                        .attr("type", &chapters.mime_type),
                ),
                None => Ok(()),
            },
            ItemField::PodcastEpisode => match item.podcast_episode {
                Some(ref episode) => {
                    let number = finite_decimal(name, episode.number)?;
                    self.text_element(
                        Tag::new(name).opt_attr("display", episode.display.as_deref()),
                        &number,
                    )
                }
                None => Ok(()),
            },
            ItemField::PodcastIsrc => self.opt_text(name, item.podcast_isrc.as_deref()),
            ItemField::PodcastLiveValue => match live.and_then(|l| l.live_value.as_ref()) {
                Some(lv) => self.empty(
                    Tag::new(name)
                        .attr("uri", &lv.uri)
                        .attr("protocol", &lv.protocol),
                ),
                None => Ok(()),
            },
            ItemField::PodcastLocation => match item.podcast_location {
                Some(ref location) => self.location(location),
                None => Ok(()),
            },
            ItemField::PodcastPersons => {
                for person in &item.podcast_persons {
                    self.person(person)?;
                }
                Ok(())
            }
            ItemField::PodcastSeason => match item.podcast_season {
                Some(ref season) => self.text_element(
                    Tag::new(name).opt_attr("name", season.name.as_deref()),
                    &season.number.to_string(),
                ),
                None => Ok(()),
            },
            ItemField::PodcastSoundbites => {
                for bite in &item.podcast_soundbites {
                    let tag = Tag::new(name)
                        .attr("startTime", &encode_fractional_seconds(bite.start_time))
                        .attr("duration", &encode_fractional_seconds(bite.duration));
                    self.text_element(tag, bite.title.as_deref().unwrap_or_default())?;
                }
                Ok(())
            }
            ItemField::PodcastTxts => {
                for txt in &item.podcast_txts {
                    self.txt(txt)?;
                }
                Ok(())
            }
            ItemField::PodcastTranscripts => {
                for transcript in &item.podcast_transcripts {
                    self.empty(
                        Tag::new(name)
                            .attr("url", &transcript.url)
                            .attr("type", &transcript.mime_type)
                            .opt_attr("language", transcript.language.as_deref())
                            .opt_attr("rel", transcript.rel.as_deref()),
                    )?;
                }
                Ok(())
            }
            ItemField::PodcastValue => match item.podcast_value {
                Some(ref value) => self.value(value),
                None => Ok(()),
            },
            ItemField::PscChapters => match item.psc_chapters {
                Some(ref chapters) => self.psc_chapters(chapters),
                None => Ok(()),
            },
        }
    }

    // ------------------------------------------------------------------------
    // Nested elements
    // ------------------------------------------------------------------------

    fn itunes_category(&mut self, category: &ItunesCategory) -> Result<(), EncodeError> {
        let tag = Tag::new("itunes:category").attr("text", &category.text);
        self.container(tag, category.subcategory.is_some(), |w| match category.subcategory {
            Some(ref sub) => w.empty(Tag::new("itunes:category").attr("text", sub)),
            None => Ok(()),
        })
    }

    fn location(&mut self, location: &Location) -> Result<(), EncodeError> {
        let geo = location.geo.as_ref().map(Geo::to_uri).transpose()?;
        let osm = location.osm.map(|o| o.to_string());
        let tag = Tag::new("podcast:location")
            .opt_attr("geo", geo.as_deref())
            .opt_attr("osm", osm.as_deref());
        self.text_element(tag, &location.name)
    }

    fn person(&mut self, person: &Person) -> Result<(), EncodeError> {
        let tag = Tag::new("podcast:person")
            .opt_attr("group", person.group.as_deref())
            .opt_attr("role", person.role.as_deref())
            .opt_attr("href", person.href.as_deref())
            .opt_attr("img", person.img.as_deref());
        self.text_element(tag, &person.name)
    }

    fn txt(&mut self, txt: &Txt) -> Result<(), EncodeError> {
        let tag = Tag::new("podcast:txt").opt_attr("purpose", txt.purpose.as_deref());
        self.text_element(tag, &txt.text)
    }

    fn trailer(&mut self, trailer: &Trailer) -> Result<(), EncodeError> {
        let length = trailer.length.map(|n| n.to_string());
        let season = trailer.season.map(|n| n.to_string());
        let tag = Tag::new("podcast:trailer")
            .attr("pubdate", &encode_pub_date(&trailer.pub_date))
            .attr("url", &trailer.url)
            .opt_attr("length", length.as_deref())
            .opt_attr("type", trailer.mime_type.as_deref())
            .opt_attr("season", season.as_deref());
        self.text_element(tag, &trailer.title)
    }

    fn remote_item(&mut self, remote: &RemoteItem) -> Result<(), EncodeError> {
        self.empty(
            Tag::new("podcast:remoteItem")
                .opt_attr("itemGuid", remote.item_guid.as_deref())
                .attr("feedGuid", &remote.feed_guid.to_string())
                .opt_attr("feedUrl", remote.feed_url.as_deref())
                .opt_attr("medium", remote.medium.map(Medium::as_str)),
        )
    }

    fn value(&mut self, value: &Value) -> Result<(), EncodeError> {
        let suggested = value
            .suggested
            .map(|s| finite_decimal("podcast:value", s))
            .transpose()?;
        let tag = Tag::new("podcast:value")
            .attr("type", &value.value_type)
            .attr("method", &value.method)
            .opt_attr("suggested", suggested.as_deref());

        let total: u64 = value.recipients.iter().map(|r| u64::from(r.split)).sum();
        if !value.recipients.is_empty() && total != 100 {
            tracing::warn!(total, "value recipient splits do not sum to 100");
        }

        let has_children = !value.recipients.is_empty() || !value.time_splits.is_empty();
        self.container(tag, has_children, |w| {
            for recipient in &value.recipients {
                w.recipient(recipient)?;
            }
            for split in &value.time_splits {
                w.time_split(split)?;
            }
            Ok(())
        })
    }

    fn recipient(&mut self, recipient: &ValueRecipient) -> Result<(), EncodeError> {
        self.empty(
            Tag::new("podcast:valueRecipient")
                .opt_attr("name", recipient.name.as_deref())
                .opt_attr("customKey", recipient.custom_key.as_deref())
                .opt_attr("customValue", recipient.custom_value.as_deref())
                .attr("type", &recipient.recipient_type)
                .attr("address", &recipient.address)
                .attr("split", &recipient.split.to_string())
                .opt_attr("fee", recipient.fee.map(encode_true_false)),
        )
    }

    fn time_split(&mut self, split: &ValueTimeSplit) -> Result<(), EncodeError> {
        let remote_start = split.remote_start_time.map(encode_integer_seconds);
        let remote_pct = split.remote_percentage.map(|p| p.to_string());
        let tag = Tag::new("podcast:valueTimeSplit")
            .attr("startTime", &encode_integer_seconds(split.start_time))
            .attr("duration", &encode_integer_seconds(split.duration))
            .opt_attr("remoteStartTime", remote_start.as_deref())
            .opt_attr("remotePercentage", remote_pct.as_deref());

        let has_children = !split.recipients.is_empty() || split.remote_item.is_some();
        self.container(tag, has_children, |w| {
            for recipient in &split.recipients {
                w.recipient(recipient)?;
            }
            if let Some(ref remote) = split.remote_item {
                w.remote_item(remote)?;
            }
            Ok(())
        })
    }

    fn alternate_enclosure(&mut self, alt: &AlternateEnclosure) -> Result<(), EncodeError> {
        let length = alt.length.map(|n| n.to_string());
        let bitrate = alt.bitrate.map(|n| n.to_string());
        let height = alt.height.map(|n| n.to_string());
        let tag = Tag::new("podcast:alternateEnclosure")
            .attr("type", &alt.mime_type)
            .opt_attr("length", length.as_deref())
            .opt_attr("bitrate", bitrate.as_deref())
            .opt_attr("height", height.as_deref())
            .opt_attr("lang", alt.lang.as_deref())
            .opt_attr("title", alt.title.as_deref())
            .opt_attr("rel", alt.rel.as_deref())
            .opt_attr("default", alt.default.map(encode_true_false));

        self.container(tag, !alt.sources.is_empty(), |w| {
            for source in &alt.sources {
                w.empty(
                    Tag::new("podcast:source")
                        .attr("uri", &source.uri)
                        .opt_attr("contentType", source.content_type.as_deref()),
                )?;
            }
            Ok(())
        })
    }

    fn psc_chapters(&mut self, psc: &PscChapters) -> Result<(), EncodeError> {
        let tag = Tag::new("psc:chapters").attr("version", &psc.version);
        self.container(tag, !psc.chapters.is_empty(), |w| {
            for chapter in &psc.chapters {
                w.empty(
                    Tag::new("psc:chapter")
                        .attr("start", &encode_chapter_timestamp(chapter.start))
                        .attr("title", &chapter.title)
                        .opt_attr("href", chapter.href.as_deref())
                        .opt_attr("image", chapter.image.as_deref()),
                )?;
            }
            Ok(())
        })
    }
}

/// True for characters allowed by the XML 1.0 `Char` production.
fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\u{9}' | '\u{A}' | '\u{D}'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

/// Replaces characters XML 1.0 cannot carry with U+FFFD, keeping the document well-formed.
fn replace_invalid_chars(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        return Cow::Borrowed(text);
    }
    tracing::debug!("replacing characters not allowed in XML with U+FFFD");
    Cow::Owned(
        text.chars()
            .map(|c| if is_xml_char(c) { c } else { '\u{FFFD}' })
            .collect(),
    )
}

/// Escapes an attribute value. Tabs and line breaks become character
/// references so parsers do not normalise them to spaces.
fn escape_attr(value: &str) -> String {
    let clean = replace_invalid_chars(value);
    let escaped = escape(&*clean);
    let mut out = String::with_capacity(escaped.len());
    for c in escaped.chars() {
        match c {
            '\n' => out.push_str("&#xA;"),
            '\r' => out.push_str("&#xD;"),
            '\t' => out.push_str("&#x9;"),
            _ => out.push(c),
        }
    }
    out
}

/// Splits text so that no piece contains `]]>`, which would end a CDATA
/// section early. Each piece becomes its own CDATA section.
fn split_cdata(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut rest = text;
    while let Some(pos) = rest.find("]]>") {
        parts.push(&rest[..pos + 2]);
        rest = &rest[pos + 2..];
    }
    parts.push(rest);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Enclosure;
    use crate::namespace::{Namespace, NamespaceDecl, Namespaces};

    fn compact(feed: &Feed) -> String {
        encode_to_string(feed, &EncodeOptions::default()).unwrap()
    }

    #[test]
    fn test_split_cdata() {
        assert_eq!(split_cdata("plain"), vec!["plain"]);
        assert_eq!(split_cdata("a]]>b"), vec!["a]]", ">b"]);
        assert_eq!(split_cdata(""), vec![""]);
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("a\nb\tc\rd"), "a&#xA;b&#x9;c&#xD;d");
        assert_eq!(escape_attr("Tom & \"Jerry\""), "Tom &amp; &quot;Jerry&quot;");
        assert_eq!(escape_attr("x\u{0}y"), "x\u{FFFD}y");
    }

    #[test]
    fn test_replace_invalid_chars() {
        assert!(matches!(replace_invalid_chars("plain é 😀"), Cow::Borrowed(_)));
        assert_eq!(
            replace_invalid_chars("a\u{1}b\u{B}c\u{FFFE}d"),
            "a\u{FFFD}b\u{FFFD}c\u{FFFD}d"
        );
        assert_eq!(replace_invalid_chars("keep\ttabs\n"), "keep\ttabs\n");
    }

    #[test]
    fn test_cdata_terminator_is_split() {
        let mut channel = Channel::default();
        channel.description = Some(TextBlock::cdata("x]]>y"));
        let xml = compact(&Feed::new(channel));
        assert!(xml.contains("<description><![CDATA[x]]]]><![CDATA[>y]]></description>"));
    }

    #[test]
    fn test_empty_channel() {
        assert_eq!(
            compact(&Feed::default()),
            r#"<rss version="2.0"><channel></channel></rss>"#
        );
    }

    #[test]
    fn test_plain_text_is_escaped() {
        let mut channel = Channel::default();
        channel.title = Some("Tom & Jerry <live>".to_string());
        let xml = compact(&Feed::new(channel));
        assert!(xml.contains("<title>Tom &amp; Jerry &lt;live&gt;</title>"));
    }

    #[test]
    fn test_empty_string_still_emits_element() {
        let mut channel = Channel::default();
        channel.title = Some(String::new());
        channel.itunes_explicit = Some(false);
        let xml = compact(&Feed::new(channel));
        assert!(xml.contains("<title></title>"));
        assert!(xml.contains("<itunes:explicit>false</itunes:explicit>"));
    }

    #[test]
    fn test_enclosure_attribute_order() {
        let mut channel = Channel::default();
        channel.items.push(Item {
            enclosure: Some(Enclosure {
                url: "https://example.com/a.mp3".to_string(),
                length: 0,
                mime_type: "audio/mpeg".to_string(),
            }),
            ..Item::default()
        });
        let xml = compact(&Feed::new(channel));
        assert!(xml.contains(
            r#"<item><enclosure url="https://example.com/a.mp3" length="0" type="audio/mpeg"></enclosure></item>"#
        ));
    }

    #[test]
    fn test_validation_runs_before_writing() {
        let mut channel = Channel::default();
        channel.items.push(Item {
            enclosure: Some(Enclosure::default()),
            ..Item::default()
        });
        let feed = Feed::new(channel);
        let err = encode_to_vec(&feed, &EncodeOptions::default()).unwrap_err();
        assert_eq!(err, EncodeError::missing("enclosure", "url"));

        // Skipping validation writes the element as given.
        let xml = encode_to_string(&feed, &EncodeOptions::default().validate(false)).unwrap();
        assert!(xml.contains(r#"<enclosure url="" length="0" type=""></enclosure>"#));
    }

    #[test]
    fn test_xml_declaration() {
        let xml = encode_to_string(
            &Feed::default(),
            &EncodeOptions::default().xml_declaration(true),
        )
        .unwrap();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?><rss version="2.0">"#));
    }

    #[test]
    fn test_suppressed_namespace_still_writes_elements() {
        let mut channel = Channel::default();
        channel.itunes_author = Some("Jane".to_string());
        let feed = Feed::new(channel)
            .with_namespaces(Namespaces::default().with(Namespace::ITunes, NamespaceDecl::Suppress));
        assert_eq!(
            compact(&feed),
            r#"<rss version="2.0"><channel><itunes:author>Jane</itunes:author></channel></rss>"#
        );
    }

    #[test]
    fn test_to_xml_matches_encode_to_string() {
        let feed = Feed::default();
        let opts = EncodeOptions::pretty();
        assert_eq!(feed.to_xml(&opts).unwrap(), encode_to_string(&feed, &opts).unwrap());
    }
}

// ABOUTME: Canonical element order for channels and items, independent of struct field order.
// ABOUTME: The encoder walks these slot lists; changing a list changes every document written.

/// One child slot of `<channel>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelField {
    Copyright,
    Description,
    Generator,
    Language,
    LastBuildDate,
    Link,
    Title,
    AtomLink,
    ContentEncoded,
    ItunesAuthor,
    ItunesCategories,
    ItunesExplicit,
    ItunesImage,
    ItunesNewFeedUrl,
    ItunesOwner,
    ItunesType,
    PodcastFundings,
    PodcastGuid,
    PodcastIsrc,
    PodcastLocation,
    PodcastLocked,
    PodcastMedium,
    PodcastPersons,
    PodcastPodping,
    PodcastPublisher,
    PodcastSingleItem,
    PodcastTxts,
    PodcastTrailers,
    PodcastValue,
    PodcastLiveItems,
    Items,
}

pub const CHANNEL_ORDER: [ChannelField; 31] = [
    ChannelField::Copyright,
    ChannelField::Description,
    ChannelField::Generator,
    ChannelField::Language,
    ChannelField::LastBuildDate,
    ChannelField::Link,
    ChannelField::Title,
    ChannelField::AtomLink,
    ChannelField::ContentEncoded,
    ChannelField::ItunesAuthor,
    ChannelField::ItunesCategories,
    ChannelField::ItunesExplicit,
    ChannelField::ItunesImage,
    ChannelField::ItunesNewFeedUrl,
    ChannelField::ItunesOwner,
    ChannelField::ItunesType,
    ChannelField::PodcastFundings,
    ChannelField::PodcastGuid,
    ChannelField::PodcastIsrc,
    ChannelField::PodcastLocation,
    ChannelField::PodcastLocked,
    ChannelField::PodcastMedium,
    ChannelField::PodcastPersons,
    ChannelField::PodcastPodping,
    ChannelField::PodcastPublisher,
    ChannelField::PodcastSingleItem,
    ChannelField::PodcastTxts,
    ChannelField::PodcastTrailers,
    ChannelField::PodcastValue,
    ChannelField::PodcastLiveItems,
    ChannelField::Items,
];

impl ChannelField {
    /// Qualified name of the element written for this slot.
    pub fn element_name(self) -> &'static str {
        match self {
            ChannelField::Copyright => "copyright",
            ChannelField::Description => "description",
            ChannelField::Generator => "generator",
            ChannelField::Language => "language",
            ChannelField::LastBuildDate => "lastBuildDate",
            ChannelField::Link => "link",
            ChannelField::Title => "title",
            ChannelField::AtomLink => "atom:link",
            ChannelField::ContentEncoded => "content:encoded",
            ChannelField::ItunesAuthor => "itunes:author",
            ChannelField::ItunesCategories => "itunes:category",
            ChannelField::ItunesExplicit => "itunes:explicit",
            ChannelField::ItunesImage => "itunes:image",
            ChannelField::ItunesNewFeedUrl => "itunes:new-feed-url",
            ChannelField::ItunesOwner => "itunes:owner",
            ChannelField::ItunesType => "itunes:type",
            ChannelField::PodcastFundings => "podcast:funding",
            ChannelField::PodcastGuid => "podcast:guid",
            ChannelField::PodcastIsrc => "podcast:isrc",
            ChannelField::PodcastLocation => "podcast:location",
            ChannelField::PodcastLocked => "podcast:locked",
            ChannelField::PodcastMedium => "podcast:medium",
            ChannelField::PodcastPersons => "podcast:person",
            ChannelField::PodcastPodping => "podcast:podping",
            ChannelField::PodcastPublisher => "podcast:publisher",
            ChannelField::PodcastSingleItem => "podcast:singleItem",
            ChannelField::PodcastTxts => "podcast:txt",
            ChannelField::PodcastTrailers => "podcast:trailer",
            ChannelField::PodcastValue => "podcast:value",
            ChannelField::PodcastLiveItems => "podcast:liveItem",
            ChannelField::Items => "item",
        }
    }
}

/// One child slot of `<item>` or `<podcast:liveItem>`.
/// `Chat`, `ContentLinks` and `LiveValue` only ever produce output for live items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Description,
    Enclosure,
    Guid,
    Link,
    PubDate,
    Title,
    ContentEncoded,
    ItunesDuration,
    ItunesEpisode,
    ItunesEpisodeType,
    ItunesExplicit,
    ItunesImage,
    ItunesSeason,
    PodcastAlternateEnclosures,
    PodcastChat,
    PodcastContentLinks,
    PodcastChapters,
    PodcastEpisode,
    PodcastIsrc,
    PodcastLiveValue,
    PodcastLocation,
    PodcastPersons,
    PodcastSeason,
    PodcastSoundbites,
    PodcastTxts,
    PodcastTranscripts,
    PodcastValue,
    PscChapters,
}

pub const ITEM_ORDER: [ItemField; 28] = [
    ItemField::Description,
    ItemField::Enclosure,
    ItemField::Guid,
    ItemField::Link,
    ItemField::PubDate,
    ItemField::Title,
    ItemField::ContentEncoded,
    ItemField::ItunesDuration,
    ItemField::ItunesEpisode,
    ItemField::ItunesEpisodeType,
    ItemField::ItunesExplicit,
    ItemField::ItunesImage,
    ItemField::ItunesSeason,
    ItemField::PodcastAlternateEnclosures,
    ItemField::PodcastChat,
    ItemField::PodcastContentLinks,
    ItemField::PodcastChapters,
    ItemField::PodcastEpisode,
    ItemField::PodcastIsrc,
    ItemField::PodcastLiveValue,
    ItemField::PodcastLocation,
    ItemField::PodcastPersons,
    ItemField::PodcastSeason,
    ItemField::PodcastSoundbites,
    ItemField::PodcastTxts,
    ItemField::PodcastTranscripts,
    ItemField::PodcastValue,
    ItemField::PscChapters,
];

impl ItemField {
    pub fn element_name(self) -> &'static str {
        match self {
            ItemField::Description => "description",
            ItemField::Enclosure => "enclosure",
            ItemField::Guid => "guid",
            ItemField::Link => "link",
            ItemField::PubDate => "pubDate",
            ItemField::Title => "title",
            ItemField::ContentEncoded => "content:encoded",
            ItemField::ItunesDuration => "itunes:duration",
            ItemField::ItunesEpisode => "itunes:episode",
            ItemField::ItunesEpisodeType => "itunes:episodeType",
            ItemField::ItunesExplicit => "itunes:explicit",
            ItemField::ItunesImage => "itunes:image",
            ItemField::ItunesSeason => "itunes:season",
            ItemField::PodcastAlternateEnclosures => "podcast:alternateEnclosure",
            ItemField::PodcastChat => "podcast:chat",
            ItemField::PodcastContentLinks => "podcast:contentLink",
            ItemField::PodcastChapters => "podcast:chapters",
            ItemField::PodcastEpisode => "podcast:episode",
            ItemField::PodcastIsrc => "podcast:isrc",
            ItemField::PodcastLiveValue => "podcast:liveValue",
            ItemField::PodcastLocation => "podcast:location",
            ItemField::PodcastPersons => "podcast:person",
            ItemField::PodcastSeason => "podcast:season",
            ItemField::PodcastSoundbites => "podcast:soundbite",
            ItemField::PodcastTxts => "podcast:txt",
            ItemField::PodcastTranscripts => "podcast:transcript",
            ItemField::PodcastValue => "podcast:value",
            ItemField::PscChapters => "psc:chapters",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_channel_order_has_no_duplicates() {
        let names: HashSet<_> = CHANNEL_ORDER.iter().map(|f| f.element_name()).collect();
        assert_eq!(names.len(), CHANNEL_ORDER.len());
        assert_eq!(CHANNEL_ORDER.last(), Some(&ChannelField::Items));
    }

    #[test]
    fn test_item_order_has_no_duplicates() {
        let names: HashSet<_> = ITEM_ORDER.iter().map(|f| f.element_name()).collect();
        assert_eq!(names.len(), ITEM_ORDER.len());
        assert_eq!(ITEM_ORDER.first(), Some(&ItemField::Description));
        assert_eq!(ITEM_ORDER.last(), Some(&ItemField::PscChapters));
    }
}

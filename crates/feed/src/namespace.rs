// ABOUTME: XML namespace table and the resolver that decides which xmlns:* attributes the root gets.
// ABOUTME: Auto-detects namespaces from populated fields; explicit declarations and overrides win.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EncodeError;
use crate::models::{Channel, Item};

pub const ATOM_NAMESPACE: &str = "http://www.w3.org/2005/Atom";
pub const CONTENT_NAMESPACE: &str = "http://purl.org/rss/1.0/modules/content/";
pub const GOOGLE_PLAY_NAMESPACE: &str = "http://www.google.com/schemas/play-podcasts/1.0";
pub const ITUNES_NAMESPACE: &str = "http://www.itunes.com/dtds/podcast-1.0.dtd";
pub const PODCAST_NAMESPACE: &str = "https://podcastindex.org/namespace/1.0";
pub const PSC_NAMESPACE: &str = "http://podlove.org/simple-chapters";

/// An extension namespace the encoder knows how to declare.
/// Ordering follows the prefix alphabetically, which is also the
/// order of `xmlns:*` attributes on the root element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Namespace {
    Atom,
    Content,
    GooglePlay,
    ITunes,
    Podcast,
    Psc,
}

impl Namespace {
    pub const ALL: [Namespace; 6] = [
        Namespace::Atom,
        Namespace::Content,
        Namespace::GooglePlay,
        Namespace::ITunes,
        Namespace::Podcast,
        Namespace::Psc,
    ];

    pub fn prefix(self) -> &'static str {
        match self {
            Namespace::Atom => "atom",
            Namespace::Content => "content",
            Namespace::GooglePlay => "googleplay",
            Namespace::ITunes => "itunes",
            Namespace::Podcast => "podcast",
            Namespace::Psc => "psc",
        }
    }

    /// Name of the declaring attribute, e.g. `xmlns:itunes`.
    pub fn xmlns_attr(self) -> &'static str {
        match self {
            Namespace::Atom => "xmlns:atom",
            Namespace::Content => "xmlns:content",
            Namespace::GooglePlay => "xmlns:googleplay",
            Namespace::ITunes => "xmlns:itunes",
            Namespace::Podcast => "xmlns:podcast",
            Namespace::Psc => "xmlns:psc",
        }
    }

    pub fn default_uri(self) -> &'static str {
        match self {
            Namespace::Atom => ATOM_NAMESPACE,
            Namespace::Content => CONTENT_NAMESPACE,
            Namespace::GooglePlay => GOOGLE_PLAY_NAMESPACE,
            Namespace::ITunes => ITUNES_NAMESPACE,
            Namespace::Podcast => PODCAST_NAMESPACE,
            Namespace::Psc => PSC_NAMESPACE,
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

impl FromStr for Namespace {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Namespace::ALL
            .into_iter()
            .find(|ns| ns.prefix() == s)
            .ok_or_else(|| EncodeError::UnknownNamespace(s.to_string()))
    }
}

/// How a single namespace should be declared on the root element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamespaceDecl {
    /// Declare with the well-known URI if any field of the namespace is populated.
    #[default]
    Auto,
    /// Always declare with the well-known URI.
    Declare,
    /// Always declare with this URI. An empty string suppresses the declaration.
    Uri(String),
    /// Never declare, even if fields are populated.
    Suppress,
}

/// Per-namespace declaration controls for a feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Namespaces {
    pub atom: NamespaceDecl,
    pub content: NamespaceDecl,
    pub googleplay: NamespaceDecl,
    pub itunes: NamespaceDecl,
    pub podcast: NamespaceDecl,
    pub psc: NamespaceDecl,
}

impl Namespaces {
    /// Every namespace declared with its well-known URI.
    pub fn all_declared() -> Self {
        let mut ns = Self::default();
        for n in Namespace::ALL {
            ns.set(n, NamespaceDecl::Declare);
        }
        ns
    }

    pub fn get(&self, ns: Namespace) -> &NamespaceDecl {
        match ns {
            Namespace::Atom => &self.atom,
            Namespace::Content => &self.content,
            Namespace::GooglePlay => &self.googleplay,
            Namespace::ITunes => &self.itunes,
            Namespace::Podcast => &self.podcast,
            Namespace::Psc => &self.psc,
        }
    }

    pub fn set(&mut self, ns: Namespace, decl: NamespaceDecl) {
        let slot = match ns {
            Namespace::Atom => &mut self.atom,
            Namespace::Content => &mut self.content,
            Namespace::GooglePlay => &mut self.googleplay,
            Namespace::ITunes => &mut self.itunes,
            Namespace::Podcast => &mut self.podcast,
            Namespace::Psc => &mut self.psc,
        };
        *slot = decl;
    }

    /// Like [`Namespaces::set`] but selects the namespace by prefix.
    pub fn set_by_prefix(&mut self, prefix: &str, decl: NamespaceDecl) -> Result<(), EncodeError> {
        let ns: Namespace = prefix.parse()?;
        self.set(ns, decl);
        Ok(())
    }

    pub fn with(mut self, ns: Namespace, decl: NamespaceDecl) -> Self {
        self.set(ns, decl);
        self
    }
}

/// Collects the namespaces whose fields are populated anywhere in the channel.
pub fn detect_usage(channel: &Channel) -> BTreeSet<Namespace> {
    let mut used = BTreeSet::new();

    if channel.atom_link.is_some() {
        used.insert(Namespace::Atom);
    }
    if channel.content_encoded.is_some() {
        used.insert(Namespace::Content);
    }
    if channel.uses_itunes() {
        used.insert(Namespace::ITunes);
    }
    if channel.uses_podcast() {
        used.insert(Namespace::Podcast);
    }

    let live_bodies = channel.podcast_live_items.iter().map(|live| &live.item);
    for item in channel.items.iter().chain(live_bodies) {
        item_usage(item, &mut used);
    }
    used
}

fn item_usage(item: &Item, used: &mut BTreeSet<Namespace>) {
    if item.content_encoded.is_some() {
        used.insert(Namespace::Content);
    }
    if item.uses_itunes() {
        used.insert(Namespace::ITunes);
    }
    if item.uses_podcast() {
        used.insert(Namespace::Podcast);
    }
    if item.psc_chapters.is_some() {
        used.insert(Namespace::Psc);
    }
}

/// A resolved `xmlns:<prefix>="<uri>"` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub namespace: Namespace,
    pub uri: String,
}

/// Decides which namespace declarations the root element carries.
///
/// An explicit URI override wins over everything, and an empty override
/// suppresses the declaration. `Declare` always emits the well-known URI,
/// `Auto` emits it only when `used` contains the namespace.
pub fn resolve(namespaces: &Namespaces, used: &BTreeSet<Namespace>) -> Vec<Declaration> {
    let mut decls = Vec::new();
    for ns in Namespace::ALL {
        let uri = match namespaces.get(ns) {
            NamespaceDecl::Uri(uri) if uri.is_empty() => None,
            NamespaceDecl::Uri(uri) => Some(uri.clone()),
            NamespaceDecl::Suppress => None,
            NamespaceDecl::Declare => Some(ns.default_uri().to_string()),
            NamespaceDecl::Auto => used.contains(&ns).then(|| ns.default_uri().to_string()),
        };

        match uri {
            Some(uri) => decls.push(Declaration { namespace: ns, uri }),
            None if used.contains(&ns) => {
                tracing::warn!(
                    prefix = ns.prefix(),
                    "namespace declaration suppressed while its elements are in use"
                );
            }
            None => {}
        }
    }
    decls
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itunes::ItunesImage;
    use crate::psc::PscChapters;

    fn prefixes(decls: &[Declaration]) -> Vec<&'static str> {
        decls.iter().map(|d| d.namespace.prefix()).collect()
    }

    #[test]
    fn test_from_str() {
        assert_eq!("itunes".parse::<Namespace>().unwrap(), Namespace::ITunes);
        assert_eq!("psc".parse::<Namespace>().unwrap(), Namespace::Psc);
        assert_eq!(
            "media".parse::<Namespace>(),
            Err(EncodeError::UnknownNamespace("media".to_string()))
        );
    }

    #[test]
    fn test_set_by_prefix_rejects_unknown() {
        let mut ns = Namespaces::default();
        assert!(ns.set_by_prefix("podcast", NamespaceDecl::Declare).is_ok());
        assert_eq!(ns.podcast, NamespaceDecl::Declare);
        assert!(ns.set_by_prefix("dc", NamespaceDecl::Declare).is_err());
    }

    #[test]
    fn test_empty_channel_uses_nothing() {
        let used = detect_usage(&Channel::default());
        assert!(used.is_empty());
        assert!(resolve(&Namespaces::default(), &used).is_empty());
    }

    #[test]
    fn test_detects_item_level_namespaces() {
        let mut channel = Channel::default();
        channel.itunes_image = Some(ItunesImage {
            href: "https://example.com/art.png".to_string(),
        });
        channel.items.push(Item {
            psc_chapters: Some(PscChapters::default()),
            ..Item::default()
        });

        let used = detect_usage(&channel);
        let decls = resolve(&Namespaces::default(), &used);
        assert_eq!(prefixes(&decls), vec!["itunes", "psc"]);
        assert_eq!(decls[0].uri, ITUNES_NAMESPACE);
    }

    #[test]
    fn test_declare_without_usage() {
        let ns = Namespaces::default().with(Namespace::GooglePlay, NamespaceDecl::Declare);
        let decls = resolve(&ns, &BTreeSet::new());
        assert_eq!(prefixes(&decls), vec!["googleplay"]);
        assert_eq!(decls[0].uri, GOOGLE_PLAY_NAMESPACE);
    }

    #[test]
    fn test_empty_override_suppresses_used_namespace() {
        let used: BTreeSet<_> = [Namespace::Podcast].into_iter().collect();
        let ns = Namespaces::default().with(Namespace::Podcast, NamespaceDecl::Uri(String::new()));
        assert!(resolve(&ns, &used).is_empty());

        let ns = Namespaces::default().with(Namespace::Podcast, NamespaceDecl::Suppress);
        assert!(resolve(&ns, &used).is_empty());
    }

    #[test]
    fn test_custom_uri_override() {
        let ns = Namespaces::default().with(
            Namespace::ITunes,
            NamespaceDecl::Uri("http://example.com/itunes".to_string()),
        );
        let decls = resolve(&ns, &BTreeSet::new());
        assert_eq!(decls[0].uri, "http://example.com/itunes");
    }

    #[test]
    fn test_all_declared_is_alphabetical() {
        let decls = resolve(&Namespaces::all_declared(), &BTreeSet::new());
        assert_eq!(
            prefixes(&decls),
            vec!["atom", "content", "googleplay", "itunes", "podcast", "psc"]
        );
    }
}

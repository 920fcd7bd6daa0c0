use crate::dependants::domain::{FeedEntry, FeedPage};
use crate::shared::Result;
use roxmltree::{Document, Node};

const ATOM_NS: &str = "http://www.w3.org/2005/Atom";
const DATA_NS: &str = "http://schemas.microsoft.com/ado/2007/08/dataservices";
const METADATA_NS: &str = "http://schemas.microsoft.com/ado/2007/08/dataservices/metadata";

/// AtomFeedParser converts an OData Atom document into a [`FeedPage`]
///
/// Only the properties the report needs are extracted; everything else in
/// the document is ignored. Elements are matched by namespace URI, not by
/// prefix, so feeds using different prefixes parse the same way.
pub struct AtomFeedParser;

impl AtomFeedParser {
    /// Parses one feed page
    ///
    /// # Errors
    /// Returns an error if the text is not well-formed XML or the root
    /// element is not an Atom `feed`
    pub fn parse(xml: &str) -> Result<FeedPage> {
        let document = Document::parse(xml)?;
        let feed = document.root_element();

        if !feed.has_tag_name((ATOM_NS, "feed")) {
            anyhow::bail!(
                "expected an Atom <feed> root element, found <{}>",
                feed.tag_name().name()
            );
        }

        let entries = feed
            .children()
            .filter(|node| node.has_tag_name((ATOM_NS, "entry")))
            .map(Self::parse_entry)
            .collect();

        Ok(FeedPage::new(entries, Self::next_link(feed)))
    }

    fn parse_entry(entry: Node) -> FeedEntry {
        let properties = entry
            .children()
            .find(|node| node.has_tag_name((METADATA_NS, "properties")));

        let property = |name: &str| {
            properties.and_then(|props| {
                props
                    .children()
                    .find(|node| node.has_tag_name((DATA_NS, name)))
                    .map(|node| node.text().unwrap_or_default().to_string())
            })
        };

        FeedEntry::new(
            property("Id"),
            property("DownloadCount"),
            property("Version"),
            property("Dependencies"),
        )
    }

    /// Finds the feed-level `<link rel="next">` and percent-decodes its href
    fn next_link(feed: Node) -> Option<String> {
        let href = feed
            .children()
            .find(|node| {
                node.has_tag_name((ATOM_NS, "link")) && node.attribute("rel") == Some("next")
            })?
            .attribute("href")?;

        Some(match urlencoding::decode(href) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => href.to_string(),
        })
    }
}

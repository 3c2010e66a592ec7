//! RSS 2.0 feed assembly.
//!
//! Builds the complete feed document as a string: one channel block from
//! the site configuration plus one item block per article index entry, in
//! index order.
//!
//! Text fields (title, description) are inserted without entity escaping by
//! default, matching the documents existing pipelines produce. Setting
//! `feed.escape = true` XML-escapes them instead; that is an explicit
//! opt-in, never a silent change.

use crate::{
    config::SiteConfig,
    content::{ArticleIndex, ContentStore},
    utils::{
        date::DateTimeUtc,
        html::{escape_xml, strip_tags},
    },
};
use anyhow::{Result, anyhow};
use std::borrow::Cow;

/// Generator identifier emitted in the channel, combined with the host
/// version string.
const GENERATOR: &str = "sitefeed";

/// Declared update cadence. Fixed literals; nothing configures these today.
const UPDATE_PERIOD: &str = "hourly";
const UPDATE_FREQUENCY: u32 = 1;

/// Channel image dimensions.
const IMAGE_SIZE: u32 = 32;

/// Root element with the namespaces declared whether or not the body uses
/// them: content, wfw, dc, atom, sy, slash.
const RSS_OPEN: &str = r#"<rss xmlns:content="http://purl.org/rss/1.0/modules/content/" xmlns:wfw="http://wellformedweb.org/CommentAPI/" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:atom="http://www.w3.org/2005/Atom" xmlns:sy="http://purl.org/rss/1.0/modules/syndication/" xmlns:slash="http://purl.org/rss/1.0/modules/slash/" version="2.0">"#;

/// The built feed document, handed from the builder step to the writer step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedDocument(pub(crate) String);

impl FeedDocument {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Build the complete RSS document for the indexed articles.
///
/// `version` is the host's own version string, emitted in the channel
/// `generator` field.
pub fn build_feed(
    config: &SiteConfig,
    content: &ContentStore,
    articles: &ArticleIndex,
    version: &str,
) -> Result<FeedDocument> {
    let feed = RssFeed::build(config, content, articles, version)?;
    Ok(FeedDocument(feed.into_xml()))
}

struct RssFeed<'a> {
    config: &'a SiteConfig,
    version: &'a str,
    items: Vec<RssItem>,
}

struct RssItem {
    title: String,
    link: String,
    pub_date: String,
    description: String,
}

impl<'a> RssFeed<'a> {
    fn build(
        config: &'a SiteConfig,
        content: &ContentStore,
        articles: &ArticleIndex,
        version: &'a str,
    ) -> Result<Self> {
        let mut items = Vec::with_capacity(articles.len());

        for id in articles.iter() {
            let item = content
                .get(id)
                .ok_or_else(|| anyhow!("article `{id}` is not in the content store"))?;

            let date = DateTimeUtc::parse_dmy(&item.meta.date).ok_or_else(|| {
                anyhow!(
                    "article `{id}` has invalid date `{}`, expected day.month.year",
                    item.meta.date
                )
            })?;

            items.push(RssItem {
                title: item.title.clone(),
                link: format!("{}/{}", config.feed.home_url, item.meta.permalink),
                pub_date: date.to_rfc822(),
                description: strip_tags(&item.excerpt).into_owned(),
            });
        }

        Ok(Self {
            config,
            version,
            items,
        })
    }

    /// Text content, raw by default or escaped when `feed.escape` is set.
    fn text<'s>(&self, s: &'s str) -> Cow<'s, str> {
        if self.config.feed.escape {
            escape_xml(s)
        } else {
            Cow::Borrowed(s)
        }
    }

    fn into_xml(self) -> String {
        let site = &self.config.site;
        let feed = &self.config.feed;
        let editor = self.config.editor();
        let build_date = DateTimeUtc::now().to_rfc822();

        let mut xml = String::with_capacity(2048 + 512 * self.items.len());

        xml.push_str(RSS_OPEN);
        xml.push('\n');
        push_line(&mut xml, 1, "<channel>");
        push_tag(&mut xml, 2, "title", &self.text(&site.title));
        push_line(
            &mut xml,
            2,
            &format!(
                r#"<atom:link href="{}/{}" rel="self" type="application/rss+xml"/>"#,
                feed.home_url,
                super::FEED_FILENAME
            ),
        );
        push_tag(&mut xml, 2, "link", &feed.home_url);
        push_tag(&mut xml, 2, "description", &self.text(&site.description));
        push_tag(&mut xml, 2, "lastBuildDate", &build_date);
        push_tag(&mut xml, 2, "language", &feed.language);
        push_tag(
            &mut xml,
            2,
            "generator",
            &format!("{GENERATOR} {}", self.version),
        );
        push_tag(&mut xml, 2, "sy:updatePeriod", UPDATE_PERIOD);
        push_tag(
            &mut xml,
            2,
            "sy:updateFrequency",
            &UPDATE_FREQUENCY.to_string(),
        );
        push_tag(&mut xml, 2, "managingEditor", &editor);
        push_tag(&mut xml, 2, "webMaster", &editor);
        push_line(&mut xml, 2, "<image>");
        push_tag(&mut xml, 3, "url", &feed.image);
        push_tag(&mut xml, 3, "title", &self.text(&site.title));
        push_tag(&mut xml, 3, "link", &feed.home_url);
        push_tag(&mut xml, 3, "width", &IMAGE_SIZE.to_string());
        push_tag(&mut xml, 3, "height", &IMAGE_SIZE.to_string());
        push_line(&mut xml, 2, "</image>");

        for item in &self.items {
            push_line(&mut xml, 2, "<item>");
            push_tag(&mut xml, 3, "title", &self.text(&item.title));
            push_tag(&mut xml, 3, "link", &item.link);
            push_tag(&mut xml, 3, "pubDate", &item.pub_date);
            push_tag(&mut xml, 3, "author", &editor);
            push_line(
                &mut xml,
                3,
                &format!(r#"<guid isPermaLink="true">{}</guid>"#, item.link),
            );
            push_tag(&mut xml, 3, "description", &self.text(&item.description));
            // CDATA keeps raw markup characters from being read as
            // document structure.
            push_line(
                &mut xml,
                3,
                &format!(
                    "<content:encoded><![CDATA[{}]]></content:encoded>",
                    item.description
                ),
            );
            push_line(&mut xml, 2, "</item>");
        }

        push_line(&mut xml, 1, "</channel>");
        xml.push_str("</rss>\n");
        xml
    }
}

fn push_line(xml: &mut String, depth: usize, line: &str) {
    for _ in 0..depth {
        xml.push_str("  ");
    }
    xml.push_str(line);
    xml.push('\n');
}

fn push_tag(xml: &mut String, depth: usize, name: &str, value: &str) {
    for _ in 0..depth {
        xml.push_str("  ");
    }
    xml.push('<');
    xml.push_str(name);
    xml.push('>');
    xml.push_str(value);
    xml.push_str("</");
    xml.push_str(name);
    xml.push('>');
    xml.push('\n');
}

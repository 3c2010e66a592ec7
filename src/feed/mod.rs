//! Feed generation and persistence steps.
//!
//! - [`generate_feed`] runs on the "content rendered" event: builds the RSS
//!   document and stashes it in the pipeline context
//! - [`save_feed`] runs on the "site saved" event: writes the stashed
//!   document to `feed.xml`

pub mod rss;
mod writer;

pub use rss::{FeedDocument, build_feed};
pub use writer::write_feed;

use crate::pipeline::PipelineContext;
use anyhow::{Result, anyhow};

/// Output filename inside the site output directory.
pub const FEED_FILENAME: &str = "feed.xml";

/// Hook for the "content rendered" event.
///
/// Builds the feed and stores it in the context; a document left over from
/// a previous run is replaced, never merged.
pub fn generate_feed(mut ctx: PipelineContext) -> Result<PipelineContext> {
    let doc = rss::build_feed(&ctx.config, &ctx.content, &ctx.articles, &ctx.version)?;
    ctx.feed = Some(doc);
    Ok(ctx)
}

/// Hook for the "site saved" event.
///
/// Writes the previously built document. Running without a prior
/// [`generate_feed`] in the same run is an error.
pub fn save_feed(ctx: PipelineContext) -> Result<PipelineContext> {
    let doc = ctx
        .feed
        .as_ref()
        .ok_or_else(|| anyhow!("feed was not built before saving; hook order is wrong"))?;
    writer::write_feed(doc, &ctx.output_dir)?;
    Ok(ctx)
}

//! Host pipeline integration.
//!
//! The host exposes two lifecycle events; [`register`] attaches the feed
//! steps to them. Each hook receives the full [`PipelineContext`] by value
//! and returns it, so mutations are visible to later steps. Hooks run
//! strictly sequentially, no locking is involved.

use crate::{
    config::SiteConfig,
    content::{ArticleIndex, ContentStore},
    feed::{self, FeedDocument},
};
use anyhow::Result;
use std::path::PathBuf;

/// A pipeline step: takes the context, returns it (possibly mutated).
pub type Hook = fn(PipelineContext) -> Result<PipelineContext>;

/// Everything the host hands to its pipeline steps.
#[derive(Debug)]
pub struct PipelineContext {
    /// Site configuration, immutable for the duration of a build.
    pub config: SiteConfig,

    /// Rendered content, keyed by article id.
    pub content: ContentStore,

    /// Article ids selected for the feed, in output order.
    pub articles: ArticleIndex,

    /// Directory the site is written to.
    pub output_dir: PathBuf,

    /// Host version string, emitted in the channel `generator` field.
    pub version: String,

    /// Scratch slot handing the built feed from builder to writer.
    /// Overwritten on every builder run, never merged.
    pub feed: Option<FeedDocument>,
}

impl PipelineContext {
    pub fn new(
        config: SiteConfig,
        content: ContentStore,
        articles: ArticleIndex,
        output_dir: PathBuf,
        version: impl Into<String>,
    ) -> Self {
        Self {
            config,
            content,
            articles,
            output_dir,
            version: version.into(),
            feed: None,
        }
    }
}

/// Named capability slots for the two lifecycle events the host exposes.
#[derive(Default)]
pub struct Hooks {
    after_render_content: Vec<Hook>,
    after_save_site: Vec<Hook>,
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a hook to the "content rendered" event.
    pub fn on_content_rendered(&mut self, hook: Hook) {
        self.after_render_content.push(hook);
    }

    /// Attach a hook to the "site saved" event.
    pub fn on_site_saved(&mut self, hook: Hook) {
        self.after_save_site.push(hook);
    }

    /// Run all "content rendered" hooks in registration order.
    pub fn run_content_rendered(&self, ctx: PipelineContext) -> Result<PipelineContext> {
        Self::run_all(&self.after_render_content, ctx)
    }

    /// Run all "site saved" hooks in registration order.
    pub fn run_site_saved(&self, ctx: PipelineContext) -> Result<PipelineContext> {
        Self::run_all(&self.after_save_site, ctx)
    }

    fn run_all(hooks: &[Hook], mut ctx: PipelineContext) -> Result<PipelineContext> {
        for hook in hooks {
            ctx = hook(ctx)?;
        }
        Ok(ctx)
    }
}

/// Attach the feed builder and writer to their lifecycle events.
pub fn register(hooks: &mut Hooks) {
    hooks.on_content_rendered(feed::generate_feed);
    hooks.on_site_saved(feed::save_feed);
}

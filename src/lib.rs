//! Sitefeed - RSS 2.0 feed generation for static-site build pipelines.
//!
//! Two steps run at two host lifecycle points:
//!
//! - [`feed::generate_feed`] builds the feed document after content is
//!   rendered and stashes it in the pipeline context
//! - [`feed::save_feed`] persists it as `feed.xml` after the site is saved
//!
//! [`pipeline::register`] attaches both to a [`pipeline::Hooks`] registry;
//! the host runs the registered hooks at its two lifecycle points.
//!
//! # Example
//!
//! ```ignore
//! let mut hooks = Hooks::new();
//! sitefeed::register(&mut hooks);
//!
//! let ctx = PipelineContext::new(config, content, articles, output_dir, "0.1.0");
//! let ctx = hooks.run_content_rendered(ctx)?;
//! let _ctx = hooks.run_site_saved(ctx)?;
//! ```

pub mod config;
pub mod content;
pub mod feed;
pub mod logger;
pub mod pipeline;
pub mod utils;

pub use config::SiteConfig;
pub use content::{ArticleIndex, ContentItem, ContentMeta, ContentStore};
pub use feed::{FEED_FILENAME, FeedDocument, build_feed, write_feed};
pub use pipeline::{Hooks, PipelineContext, register};

//! Feed persistence.

use super::{FEED_FILENAME, rss::FeedDocument};
use crate::log;
use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Write the built feed verbatim to `feed.xml` inside the output directory,
/// replacing any previous file of that name.
///
/// The output directory must already exist; a missing or unwritable
/// directory is an error. There is no retry and no fallback path.
pub fn write_feed(doc: &FeedDocument, output_dir: &Path) -> Result<PathBuf> {
    let feed_path = output_dir.join(FEED_FILENAME);

    fs::write(&feed_path, doc.as_str())
        .with_context(|| format!("failed to write feed to {}", feed_path.display()))?;

    log!("feed"; "{}", feed_path.file_name().unwrap_or_default().to_string_lossy());
    Ok(feed_path)
}

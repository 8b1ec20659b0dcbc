//! Blog tab selection.

use std::path::Path;

use tracing::debug;

use crate::error::{ExploreError, Result};
use crate::types::{Blog, BlogTab};

/// Tabs plus the slug of the one currently shown.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TabSelection {
    tabs: Vec<BlogTab>,
    active: Option<String>,
}

impl TabSelection {
    /// Start on `requested` when such a tab exists, else on the first tab.
    ///
    /// Tabs are kept in ascending `order`; ties keep their input sequence.
    pub fn new(mut tabs: Vec<BlogTab>, requested: Option<&str>) -> Self {
        tabs.sort_by_key(|t| t.order);
        let active = requested
            .filter(|slug| tabs.iter().any(|t| t.slug == *slug))
            .map(str::to_string)
            .or_else(|| tabs.first().map(|t| t.slug.clone()));
        Self { tabs, active }
    }

    /// Switch tabs. Unknown slugs leave the selection unchanged; returns
    /// whether the slug was found.
    pub fn select(&mut self, slug: &str) -> bool {
        if self.tabs.iter().any(|t| t.slug == slug) {
            self.active = Some(slug.to_string());
            true
        } else {
            debug!(slug, "ignoring selection of unknown tab");
            false
        }
    }

    pub fn active_slug(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn active_tab(&self) -> Option<&BlogTab> {
        let slug = self.active.as_deref()?;
        self.tabs.iter().find(|t| t.slug == slug)
    }

    /// Articles of the active tab; empty when there are no tabs.
    pub fn active_blogs(&self) -> &[Blog] {
        self.active_tab().map(|t| t.blogs.as_slice()).unwrap_or(&[])
    }

    pub fn tabs(&self) -> &[BlogTab] {
        &self.tabs
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}

/// Read a JSON array of blog tabs from disk.
pub fn read_blog_tabs(path: &Path) -> Result<Vec<BlogTab>> {
    let body = std::fs::read_to_string(path).map_err(|source| ExploreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&body)?)
}

//! # explore-views
//!
//! Leptos SSR renderer for the explore site.
//!
//! Turns plain view-model structs into complete, self-contained HTML
//! documents: the explore landing page (ordered CMS sections of cards with
//! "view more" links), the tabbed blog listing, and loading/error/empty
//! status pages.
//!
//! ## Quick Start
//!
//! ```rust
//! use explore_views::{render_explore_page, types::PageView};
//!
//! let page = PageView {
//!     name: "All Destinations".into(),
//!     ..Default::default()
//! };
//!
//! let html = render_explore_page(&page);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - View-model structs (what each component displays)
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! Rendering uses Leptos 0.8's `RenderHtml::to_html`; no reactive runtime
//! or hydration is involved.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod styles;
pub mod types;

use components::{BlogDocument, ExploreDocument, StatusDocument};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::{BlogTabsView, PageMeta, PageView, StatusView};

/// Render the explore page for a loaded CMS page.
///
/// Sections are rendered in the order given; callers sort them first.
/// Sections without cards are skipped.
pub fn render_explore_page(page: &PageView) -> String {
    let doc = view! { <ExploreDocument page=page.clone() /> };
    with_doctype(doc.to_html())
}

/// Render a loading, error or "No Data Found" page.
pub fn render_status_page(meta: &PageMeta, status: &StatusView) -> String {
    let doc = view! { <StatusDocument meta=meta.clone() status=status.clone() /> };
    with_doctype(doc.to_html())
}

/// Render the tabbed blog listing.
///
/// The tab named by `listing.active_slug` is shown first; the inline script
/// switches panels and scrolls the selected tab into view.
pub fn render_blog_page(meta: &PageMeta, listing: &BlogTabsView) -> String {
    let doc = view! { <BlogDocument meta=meta.clone() listing=listing.clone() /> };
    with_doctype(doc.to_html())
}

// Leptos doesn't include DOCTYPE, so we add it
fn with_doctype(html: String) -> String {
    format!("<!DOCTYPE html>\n{}", html)
}

//! # explore
//!
//! **CMS-driven travel explore pages** - fetch a page description from the
//! content API, work out what each section holds, link every item and render
//! the result as static HTML.
//!
//! ## Features
//!
//! - **Section resolution** - pick the populated content type of a section by fixed priority
//! - **Item links** - one policy table per type: slug, id, attributes, positional fallback
//! - **Race-free loading** - generation tokens drop responses for superseded loads
//! - **Blog tabs** - requested-or-first tab selection
//! - **SSR output** - complete HTML documents via `explore-views`
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust
//! use explore::links::build_url;
//! use explore::resolver::resolve;
//! use explore::types::ContentMap;
//! use serde_json::json;
//!
//! let content = ContentMap::from_value(json!({
//!     "destinations": [{"name": "Bali", "slug": "bali"}, {"name": "Kyoto"}]
//! }));
//!
//! let resolved = resolve(&content).unwrap();
//! let urls: Vec<String> = resolved
//!     .items
//!     .iter()
//!     .enumerate()
//!     .map(|(i, item)| build_url(resolved.kind, item, i))
//!     .collect();
//! assert_eq!(urls, ["/destinations/bali", "/destinations/place-2"]);
//! ```
//!
//! ## Loading a Page
//!
//! ```rust,no_run
//! use explore::page::{PageLoader, PageState};
//! use explore::source::{HttpPageSource, DEFAULT_CMS_BASE_URL};
//! use std::time::Duration;
//!
//! # async fn demo() -> explore::error::Result<()> {
//! let source = HttpPageSource::new(DEFAULT_CMS_BASE_URL, Duration::from_secs(30))?;
//! let loader = PageLoader::new(source);
//! loader.load("All Destinations").await;
//! if let PageState::Success(page) = loader.state().await {
//!     println!("{} sections", page.sections.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! explore page "All Destinations" > index.html
//! explore page --source saved.json --format text
//! explore blogs tabs.json --tab travel-tips -o blog.html
//! explore link destinations '{"country":"Japan"}'
//! ```

// ============================================================================
// Core Modules
// ============================================================================

/// Content model: sections, pages, the six item variants.
pub mod types;

/// Which content type a section carries.
///
/// Priority: themes, destinations, testimonials, offers, blogs, packages.
pub mod resolver;

/// Navigation URL policy and CTA labels.
pub mod links;

/// Page load state machine with stale-response protection.
pub mod page;

/// Data sources behind the page loader (HTTP, saved file).
pub mod source;

/// Blog tab selection.
pub mod tabs;

/// Domain to view-model mapping and HTML rendering.
pub mod render;

// ============================================================================
// Support
// ============================================================================

pub mod config;
pub mod error;

/// Command-line parsing and dispatch for the `explore` binary.
pub mod cli;

/// Spinner and status lines on stderr.
pub mod progress;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use config::ExploreConfig;
pub use error::{ExploreError, Result};
pub use page::{LoadOutcome, PageLoader, PageMetadata, PageState};
pub use resolver::{ResolveMode, Resolved, resolve};
pub use source::{FilePageSource, HttpPageSource, PageSource};
pub use types::{ContentItem, ContentMap, Page, PageResponse, Section, SectionType};

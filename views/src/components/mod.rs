//! Leptos UI components for rendering the explore pages.
//!
//! Each component is a Leptos `#[component]` function rendered once on the
//! server; there is no hydration.
//!
//! # Component Hierarchy
//!
//! ```text
//! ExploreDocument
//! └── PageShell
//!     └── SectionBlock (per CMS section, in order)
//!         └── CardStrip (per resolved content type)
//!             ├── Card → BlogCardView | DestinationCardView | PackageCardView
//!             │          | OfferCardView | TestimonialCardView | ThemeCardView
//!             └── ViewMoreCta
//!
//! BlogDocument
//! └── BlogTabsSection
//!     ├── BlogTabBar
//!     └── TabPanel (per tab)
//!         └── BlogDetails
//!
//! StatusDocument
//! └── StatusPanel (loading | error | empty)
//! ```

mod blog;
mod cards;
mod cta;
mod document;
mod icons;
mod section;
mod status;
mod tabs;

pub use blog::{BlogDetails, BlogTabsSection};
pub use cards::{
    BlogCardView, Card, DestinationCardView, OfferCardView, PackageCardView, TestimonialCardView,
    ThemeCardView,
};
pub use cta::ViewMoreCta;
pub use document::{BlogDocument, ExploreDocument, PageShell, StatusDocument};
pub use icons::*;
pub use section::{CardStrip, SectionBlock};
pub use status::StatusPanel;
pub use tabs::{BlogTabBar, TabPanel};

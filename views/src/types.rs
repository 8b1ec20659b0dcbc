//! View-model types consumed by the components.
//!
//! These types carry exactly what a component displays. They're designed to be:
//!
//! - **Serializable** - a rendered page can be dumped as JSON for debugging
//! - **Clone-friendly** - components take ownership without borrowing issues
//! - **Default-able** - build partial fixtures with `..Default::default()`
//!
//! Callers map their own domain records into these structs; the renderer
//! never sees raw CMS payloads.
//!
//! # Example
//!
//! ```rust
//! use explore_views::types::{
//!     CardData, CardEntry, CardGroup, CtaLink, DestinationCard, PageView, SectionView,
//! };
//!
//! let page = PageView {
//!     name: "All Destinations".into(),
//!     sections: vec![SectionView {
//!         id: "s1".into(),
//!         title: "Popular".into(),
//!         groups: vec![CardGroup {
//!             kind: "destinations".into(),
//!             entries: vec![CardEntry {
//!                 card: CardData::Destination(DestinationCard {
//!                     name: "Bali".into(),
//!                     ..Default::default()
//!                 }),
//!                 cta: CtaLink {
//!                     text: "Discover Destination".into(),
//!                     href: "/destinations/bali".into(),
//!                 },
//!             }],
//!         }],
//!     }],
//!     ..Default::default()
//! };
//! assert!(!page.sections[0].is_empty());
//! ```

use serde::{Deserialize, Serialize};

/// Document-level metadata for the `<head>`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PageMeta {
    /// `<title>` text
    pub title: String,
    /// `<meta name="description">` content
    pub description: String,
}

/// A complete explore page ready for rendering.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PageView {
    /// Page name shown as the main heading
    pub name: String,
    /// Head metadata
    pub meta: PageMeta,
    /// Sections, already in display order
    #[serde(default)]
    pub sections: Vec<SectionView>,
}

/// One CMS section: an optional heading and a strip of cards.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SectionView {
    /// Stable section id (used for the DOM id)
    pub id: String,
    /// Heading; empty means no heading is rendered
    pub title: String,
    /// Card groups, one per resolved content type
    #[serde(default)]
    pub groups: Vec<CardGroup>,
}

impl SectionView {
    /// True when nothing in the section would be displayed.
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|g| g.entries.is_empty())
    }
}

/// Cards of one content type inside a section.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct CardGroup {
    /// Content type key (`"blogs"`, `"themes"`, ...)
    pub kind: String,
    /// Cards in source order
    #[serde(default)]
    pub entries: Vec<CardEntry>,
}

/// A card paired with its call-to-action.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CardEntry {
    /// What the card shows
    pub card: CardData,
    /// Where "view more" leads
    pub cta: CtaLink,
}

/// "View more" link under a card.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct CtaLink {
    /// Button label
    pub text: String,
    /// Relative navigation path
    pub href: String,
}

/// Per-type card payload.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardData {
    /// Blog article teaser
    Blog(BlogCard),
    /// Destination teaser
    Destination(DestinationCard),
    /// Tour package teaser
    Package(PackageCard),
    /// Limited-time offer
    Offer(OfferCard),
    /// Customer review
    Testimonial(TestimonialCard),
    /// Travel theme
    Theme(ThemeCard),
}

impl CardData {
    /// CSS modifier for the card wrapper.
    pub fn css_kind(&self) -> &'static str {
        match self {
            CardData::Blog(_) => "blog",
            CardData::Destination(_) => "destination",
            CardData::Package(_) => "package",
            CardData::Offer(_) => "offer",
            CardData::Testimonial(_) => "testimonial",
            CardData::Theme(_) => "theme",
        }
    }
}

/// Image reference with alt text.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ImageRef {
    /// Image URL
    pub src: String,
    /// Alt text
    pub alt: String,
}

#[allow(missing_docs)]
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct BlogCard {
    pub title: String,
    pub excerpt: String,
    pub image: Option<ImageRef>,
    pub read_time: Option<u32>,
}

#[allow(missing_docs)]
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DestinationCard {
    pub name: String,
    pub description: String,
    pub image: Option<ImageRef>,
    pub country: String,
    pub region: String,
    pub package_count: Option<u32>,
}

#[allow(missing_docs)]
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PackageCard {
    pub title: String,
    /// Description paragraphs
    pub description: Vec<String>,
    pub image: Option<ImageRef>,
    /// Preformatted price, e.g. `"INR 45000"`
    pub price: Option<String>,
    /// Preformatted duration, e.g. `"5 days"`
    pub duration: Option<String>,
    pub rating: Option<f64>,
}

#[allow(missing_docs)]
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct OfferCard {
    pub title: String,
    pub description: String,
    pub image: Option<ImageRef>,
    pub discount_percentage: Option<f64>,
    pub valid_to: String,
}

#[allow(missing_docs)]
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct TestimonialCard {
    pub name: String,
    pub location: String,
    pub rating: Option<f64>,
    pub review: String,
    pub image: Option<ImageRef>,
}

#[allow(missing_docs)]
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ThemeCard {
    pub name: String,
    pub description: String,
    pub image: Option<ImageRef>,
    pub package_count: Option<u32>,
}

/// Non-content page states.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum StatusView {
    /// Request in flight
    Loading,
    /// Load failed; carries the user-visible message
    Error(String),
    /// Load succeeded but the CMS had no page data
    Empty,
}

/// Tabbed blog listing.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct BlogTabsView {
    /// Page heading
    pub title: String,
    /// Tabs in display order
    #[serde(default)]
    pub tabs: Vec<BlogTabView>,
    /// Slug of the tab shown first; `None` when there are no tabs
    pub active_slug: Option<String>,
}

/// One blog tab and its articles.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct BlogTabView {
    /// Button label
    pub name: String,
    /// Tab key, also the `data-tab-slug` attribute
    pub slug: String,
    /// Articles under this tab
    #[serde(default)]
    pub blogs: Vec<BlogDetailView>,
}

/// A blog article row inside a tab panel.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct BlogDetailView {
    /// Article teaser
    pub card: BlogCard,
    /// Link to the full article
    pub href: String,
}

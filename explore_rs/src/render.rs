//! Domain records to view models, and view models to HTML.
//!
//! This is the only place that knows both the CMS shapes and the
//! `explore-views` structs. Resolution and link building happen here, once
//! per section, so the renderer only ever sees finished cards.

use explore_views::types::{
    BlogCard, BlogDetailView, BlogTabView, BlogTabsView, CardData, CardEntry, CardGroup, CtaLink,
    DestinationCard, ImageRef, OfferCard, PackageCard, PageMeta, PageView, SectionView,
    StatusView, TestimonialCard, ThemeCard,
};
use explore_views::{render_blog_page, render_explore_page, render_status_page};

use crate::config::ExploreConfig;
use crate::links::{LinkFallback, build_url_with, cta_label};
use crate::page::{PageMetadata, PageState};
use crate::resolver::{ResolveMode, Resolved, resolve_with};
use crate::tabs::TabSelection;
use crate::types::{
    Blog, ContentItem, Destination, Offer, Package, Page, Section, SectionType, Testimonial, Theme,
};

/// Knobs that change what a page turns into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub resolve_mode: ResolveMode,
    pub link_fallback: LinkFallback,
    pub prefer_section_cta_text: bool,
}

impl From<&ExploreConfig> for RenderOptions {
    fn from(config: &ExploreConfig) -> Self {
        Self {
            resolve_mode: config.resolve_mode,
            link_fallback: config.link_fallback,
            prefer_section_cta_text: config.prefer_section_cta_text,
        }
    }
}

pub fn page_meta(meta: &PageMetadata) -> PageMeta {
    PageMeta {
        title: meta.title.clone(),
        description: meta.description.clone(),
    }
}

/// Full explore page: sections in `order`, each resolved into card groups.
pub fn page_view(page: &Page, meta: &PageMetadata, opts: &RenderOptions) -> PageView {
    PageView {
        name: meta.name.clone(),
        meta: page_meta(meta),
        sections: page
            .ordered_sections()
            .into_iter()
            .map(|section| section_view(section, opts))
            .collect(),
    }
}

pub fn section_view(section: &Section, opts: &RenderOptions) -> SectionView {
    SectionView {
        id: section.id.clone(),
        title: section.title.clone(),
        groups: resolve_with(&section.content, opts.resolve_mode)
            .into_iter()
            .map(|resolved| card_group(section, resolved, opts))
            .collect(),
    }
}

fn card_group(section: &Section, resolved: Resolved, opts: &RenderOptions) -> CardGroup {
    let label = if opts.prefer_section_cta_text && !section.view_more_text.trim().is_empty() {
        section.view_more_text.clone()
    } else {
        cta_label(resolved.kind).to_string()
    };

    let entries = resolved
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| CardEntry {
            card: card_data(item),
            cta: CtaLink {
                text: label.clone(),
                href: build_url_with(resolved.kind, item, index, opts.link_fallback),
            },
        })
        .collect();

    CardGroup {
        kind: resolved.kind.key().to_string(),
        entries,
    }
}

/// Card payload for one item.
pub fn card_data(item: &ContentItem) -> CardData {
    match item {
        ContentItem::Blog(b) => CardData::Blog(blog_card(b)),
        ContentItem::Destination(d) => CardData::Destination(destination_card(d)),
        ContentItem::Package(p) => CardData::Package(package_card(p)),
        ContentItem::Offer(o) => CardData::Offer(offer_card(o)),
        ContentItem::Testimonial(t) => CardData::Testimonial(testimonial_card(t)),
        ContentItem::Theme(t) => CardData::Theme(theme_card(t)),
    }
}

fn image(src: Option<&String>, alt: Option<&String>, fallback_alt: &str) -> Option<ImageRef> {
    let src = src.filter(|s| !s.trim().is_empty())?;
    let alt = alt
        .filter(|a| !a.trim().is_empty())
        .map(String::as_str)
        .unwrap_or(fallback_alt);
    Some(ImageRef {
        src: src.clone(),
        alt: alt.to_string(),
    })
}

fn blog_card(b: &Blog) -> BlogCard {
    // Card-sized image first, then the article hero.
    let src = b.card_feature_image.as_ref().or(b.feature_image.as_ref());
    let alt = b
        .card_feature_image_alt
        .as_ref()
        .or(b.feature_image_alt.as_ref());
    BlogCard {
        title: b.title.clone(),
        excerpt: b.excerpt.clone(),
        image: image(src, alt, &b.title),
        read_time: b.read_time,
    }
}

fn destination_card(d: &Destination) -> DestinationCard {
    DestinationCard {
        name: d.name.clone(),
        description: d.description.clone(),
        image: image(d.image.as_ref(), d.image_alt.as_ref(), &d.name),
        country: d.country.clone().unwrap_or_default(),
        region: d.region.clone().unwrap_or_default(),
        package_count: d.package_count,
    }
}

fn package_card(p: &Package) -> PackageCard {
    PackageCard {
        title: p.title.clone(),
        description: p.description.clone(),
        image: image(p.image.as_ref(), p.image_alt.as_ref(), &p.title),
        price: p.price.map(|amount| format_price(amount, p.currency.as_deref())),
        duration: p.duration.map(|d| {
            let unit = p.duration_type.as_deref().unwrap_or("days");
            format!("{d} {unit}")
        }),
        rating: p.rating,
    }
}

fn format_price(amount: f64, currency: Option<&str>) -> String {
    let amount = if amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        format!("{amount:.2}")
    };
    match currency.filter(|c| !c.trim().is_empty()) {
        Some(currency) => format!("{currency} {amount}"),
        None => amount,
    }
}

fn offer_card(o: &Offer) -> OfferCard {
    OfferCard {
        title: o.title.clone(),
        description: o.description.clone(),
        image: image(o.image.as_ref(), o.image_alt.as_ref(), &o.title),
        discount_percentage: o.discount_percentage,
        valid_to: o.valid_to.clone().unwrap_or_default(),
    }
}

fn testimonial_card(t: &Testimonial) -> TestimonialCard {
    TestimonialCard {
        name: t.name.clone(),
        location: t.location.clone().unwrap_or_default(),
        rating: t.rating,
        review: t.review.clone(),
        image: image(t.image.as_ref(), t.image_alt.as_ref(), &t.name),
    }
}

fn theme_card(t: &Theme) -> ThemeCard {
    ThemeCard {
        name: t.name.clone(),
        description: t.description.clone(),
        image: image(t.image.as_ref(), t.image_alt.as_ref(), &t.name),
        package_count: t.package_count,
    }
}

/// Tabbed blog listing with article links.
pub fn blog_tabs_view(selection: &TabSelection, title: &str, fallback: LinkFallback) -> BlogTabsView {
    BlogTabsView {
        title: title.to_string(),
        active_slug: selection.active_slug().map(str::to_string),
        tabs: selection
            .tabs()
            .iter()
            .map(|tab| BlogTabView {
                name: tab.name.clone(),
                slug: tab.slug.clone(),
                blogs: tab
                    .blogs
                    .iter()
                    .enumerate()
                    .map(|(index, blog)| BlogDetailView {
                        card: blog_card(blog),
                        href: build_url_with(
                            SectionType::Blogs,
                            &ContentItem::Blog(blog.clone()),
                            index,
                            fallback,
                        ),
                    })
                    .collect(),
            })
            .collect(),
    }
}

/// Status panel for every non-success state.
pub fn status_view(state: &PageState) -> Option<StatusView> {
    match state {
        PageState::Loading => Some(StatusView::Loading),
        PageState::Empty => Some(StatusView::Empty),
        PageState::Error(message) => Some(StatusView::Error(message.clone())),
        PageState::Success(_) => None,
    }
}

/// HTML document for whatever state the page is in.
pub fn render_state(state: &PageState, meta: &PageMetadata, opts: &RenderOptions) -> String {
    match state {
        PageState::Success(page) => render_explore_page(&page_view(page, meta, opts)),
        other => {
            let status = status_view(other).unwrap_or(StatusView::Empty);
            render_status_page(&page_meta(meta), &status)
        }
    }
}

/// HTML document for a blog tab listing.
pub fn render_blogs(selection: &TabSelection, meta: &PageMetadata, fallback: LinkFallback) -> String {
    render_blog_page(&page_meta(meta), &blog_tabs_view(selection, &meta.name, fallback))
}

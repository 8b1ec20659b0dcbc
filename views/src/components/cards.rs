//! Per-type content cards.
//!
//! Each card renders one record read-only. [`Card`] dispatches on
//! [`CardData`] so callers never match on the variant themselves.

use leptos::prelude::*;

use crate::components::icons::{ICON_CLOCK, ICON_MAP_PIN, Icon};
use crate::types::{
    BlogCard, CardData, DestinationCard, ImageRef, OfferCard, PackageCard, TestimonialCard,
    ThemeCard,
};

/// Renders whichever card matches the payload.
#[component]
pub fn Card(card: CardData) -> impl IntoView {
    let class = format!("card card--{}", card.css_kind());
    let body = match card {
        CardData::Blog(data) => view! { <BlogCardView data=data /> }.into_any(),
        CardData::Destination(data) => view! { <DestinationCardView data=data /> }.into_any(),
        CardData::Package(data) => view! { <PackageCardView data=data /> }.into_any(),
        CardData::Offer(data) => view! { <OfferCardView data=data /> }.into_any(),
        CardData::Testimonial(data) => view! { <TestimonialCardView data=data /> }.into_any(),
        CardData::Theme(data) => view! { <ThemeCardView data=data /> }.into_any(),
    };

    view! { <article class=class>{body}</article> }
}

#[component]
fn CardImage(image: Option<ImageRef>) -> impl IntoView {
    image.map(|img| view! { <img src=img.src alt=img.alt loading="lazy" /> })
}

/// Blog teaser: image, title, excerpt, read time.
#[component]
pub fn BlogCardView(data: BlogCard) -> impl IntoView {
    view! {
        <CardImage image=data.image />
        <div class="card-body">
            <h3 class="card-title">{data.title}</h3>
            <p class="card-text">{data.excerpt}</p>
            {data.read_time.map(|mins| view! {
                <div class="card-meta">
                    <span class="pill">
                        <Icon path=ICON_CLOCK size="12" />
                        {format!(" {} min read", mins)}
                    </span>
                </div>
            })}
        </div>
    }
}

/// Destination teaser with location and package count.
#[component]
pub fn DestinationCardView(data: DestinationCard) -> impl IntoView {
    let location = join_non_empty(&[data.country.as_str(), data.region.as_str()]);

    view! {
        <CardImage image=data.image />
        <div class="card-body">
            <h3 class="card-title">{data.name}</h3>
            <p class="card-text">{data.description}</p>
            <div class="card-meta">
                {(!location.is_empty()).then(|| view! {
                    <span class="pill">
                        <Icon path=ICON_MAP_PIN size="12" />
                        {format!(" {}", location)}
                    </span>
                })}
                {data.package_count.map(|n| view! {
                    <span class="pill">{format!("{} packages", n)}</span>
                })}
            </div>
        </div>
    }
}

/// Package teaser. Description may span several paragraphs.
#[component]
pub fn PackageCardView(data: PackageCard) -> impl IntoView {
    view! {
        <CardImage image=data.image />
        <div class="card-body">
            <h3 class="card-title">{data.title}</h3>
            {data.description.into_iter().map(|para| view! {
                <p class="card-text">{para}</p>
            }).collect::<Vec<_>>()}
            <div class="card-meta">
                {data.duration.map(|d| view! {
                    <span class="pill">
                        <Icon path=ICON_CLOCK size="12" />
                        {format!(" {}", d)}
                    </span>
                })}
                {data.price.map(|p| view! { <span class="pill">{p}</span> })}
                {data.rating.map(|r| view! {
                    <span class="pill">{format!("{} / 5", r)}</span>
                })}
            </div>
        </div>
    }
}

/// Offer with discount badge and validity.
#[component]
pub fn OfferCardView(data: OfferCard) -> impl IntoView {
    view! {
        <CardImage image=data.image />
        <div class="card-body">
            {data.discount_percentage.map(|pct| view! {
                <span class="badge">{format!("{}% OFF", pct)}</span>
            })}
            <h3 class="card-title">{data.title}</h3>
            <p class="card-text">{data.description}</p>
            {(!data.valid_to.is_empty()).then(|| view! {
                <div class="card-meta">
                    <span class="pill">{format!("Valid until {}", data.valid_to)}</span>
                </div>
            })}
        </div>
    }
}

/// Customer review with star line.
#[component]
pub fn TestimonialCardView(data: TestimonialCard) -> impl IntoView {
    let stars = data.rating.map(star_line);

    view! {
        <CardImage image=data.image />
        <div class="card-body">
            {stars.map(|s| view! { <div class="stars">{s}</div> })}
            <blockquote>{data.review}</blockquote>
            <h3 class="card-title">{data.name}</h3>
            {(!data.location.is_empty()).then(|| view! {
                <div class="card-meta">
                    <span class="pill">
                        <Icon path=ICON_MAP_PIN size="12" />
                        {format!(" {}", data.location)}
                    </span>
                </div>
            })}
        </div>
    }
}

/// Travel theme teaser.
#[component]
pub fn ThemeCardView(data: ThemeCard) -> impl IntoView {
    view! {
        <CardImage image=data.image />
        <div class="card-body">
            <h3 class="card-title">{data.name}</h3>
            <p class="card-text">{data.description}</p>
            {data.package_count.map(|n| view! {
                <div class="card-meta">
                    <span class="pill">{format!("{} packages", n)}</span>
                </div>
            })}
        </div>
    }
}

/// Five-slot star line; ratings are clamped to 0..=5 and rounded.
pub(crate) fn star_line(rating: f64) -> String {
    let filled = rating.clamp(0.0, 5.0).round() as usize;
    let mut line = "★".repeat(filled);
    line.push_str(&"☆".repeat(5 - filled));
    line
}

fn join_non_empty(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_line_rounds_and_clamps() {
        assert_eq!(star_line(4.4), "★★★★☆");
        assert_eq!(star_line(4.6), "★★★★★");
        assert_eq!(star_line(9.0), "★★★★★");
        assert_eq!(star_line(-1.0), "☆☆☆☆☆");
    }

    #[test]
    fn join_skips_empty_parts() {
        assert_eq!(join_non_empty(&["Indonesia", ""]), "Indonesia");
        assert_eq!(join_non_empty(&["Japan", "East Asia"]), "Japan, East Asia");
        assert_eq!(join_non_empty(&["", ""]), "");
    }
}

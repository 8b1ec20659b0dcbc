//! Navigation URLs for content items.
//!
//! One policy row per content type: slug pattern, id pattern, attribute
//! rules tried in order, then a fallback. Every item gets a non-empty path,
//! however sparse its record is.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use tracing::debug;

use crate::types::{Attribute, ContentItem, SectionType};

/// What to do when an item has no slug, id or discriminating attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LinkFallback {
    /// 1-based position in the section (`/blogs/article/3`).
    #[default]
    Positional,
    /// Slugified title or name, positional when that comes out empty.
    #[serde(alias = "title_slug")]
    Title,
}

/// URL patterns for one content type.
#[derive(Debug)]
pub struct LinkPolicy {
    pub kind: SectionType,
    pub slug: &'static str,
    pub id: &'static str,
    pub rules: &'static [(Attribute, &'static str)],
    pub positional: &'static str,
    pub title: &'static str,
}

static POLICIES: [LinkPolicy; 6] = [
    LinkPolicy {
        kind: SectionType::Blogs,
        slug: "/blogs/{slug}",
        id: "/blogs/{id}",
        rules: &[(Attribute::Category, "/blogs/category/{category}")],
        positional: "/blogs/article/{index}",
        title: "/blogs/{slug}",
    },
    LinkPolicy {
        kind: SectionType::Offers,
        slug: "/offers/{slug}",
        id: "/offers/{id}",
        rules: &[
            (Attribute::Discount, "/offers/discount/{discount}"),
            (Attribute::Type, "/offers/{type}"),
        ],
        positional: "/offers/deal/{index}",
        title: "/offers/{slug}",
    },
    LinkPolicy {
        kind: SectionType::Packages,
        slug: "/destinations/packages/{slug}",
        id: "/destinations/packages/{id}",
        rules: &[
            (Attribute::Destination, "/destinations/{destination}/packages"),
            (Attribute::Duration, "/destinations/packages/{duration}-days"),
        ],
        positional: "/destinations/packages/tour-{index}",
        title: "/destinations/packages/{slug}",
    },
    LinkPolicy {
        kind: SectionType::Destinations,
        slug: "/destinations/{slug}",
        id: "/destinations/{id}",
        rules: &[
            (Attribute::Country, "/destinations/{country}"),
            (Attribute::Region, "/destinations/region/{region}"),
        ],
        positional: "/destinations/place-{index}",
        title: "/destinations/{slug}",
    },
    LinkPolicy {
        kind: SectionType::Testimonials,
        slug: "/testimonials/{slug}",
        id: "/testimonials/{id}",
        rules: &[
            (Attribute::Rating, "/testimonials/rating/{rating}-star"),
            (Attribute::Customer, "/testimonials/customer/{customer}"),
        ],
        positional: "/testimonials/review-{index}",
        title: "/testimonials/{slug}",
    },
    LinkPolicy {
        kind: SectionType::Themes,
        slug: "/themes/{slug}",
        id: "/themes/{id}",
        rules: &[
            (Attribute::Category, "/themes/{category}"),
            (Attribute::Type, "/themes/type/{type}"),
        ],
        positional: "/themes/theme-{index}",
        title: "/themes/{slug}",
    },
];

static NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Policy row for a content type.
pub fn policy(kind: SectionType) -> &'static LinkPolicy {
    let row = match kind {
        SectionType::Blogs => 0,
        SectionType::Offers => 1,
        SectionType::Packages => 2,
        SectionType::Destinations => 3,
        SectionType::Testimonials => 4,
        SectionType::Themes => 5,
    };
    &POLICIES[row]
}

/// URL for the item at `index` (0-based) of a section, positional fallback.
pub fn build_url(kind: SectionType, item: &ContentItem, index: usize) -> String {
    build_url_with(kind, item, index, LinkFallback::Positional)
}

/// URL for the item at `index` (0-based) with an explicit fallback.
pub fn build_url_with(
    kind: SectionType,
    item: &ContentItem,
    index: usize,
    fallback: LinkFallback,
) -> String {
    let policy = policy(kind);

    if let Some(slug) = item.slug() {
        return fill(policy.slug, "{slug}", slug);
    }
    if let Some(id) = item.id() {
        return fill(policy.id, "{id}", id);
    }
    for (attr, pattern) in policy.rules {
        if let Some(value) = item.attribute(*attr) {
            debug!(kind = %kind, attribute = ?attr, "link from attribute");
            return fill(pattern, attr.placeholder(), &value);
        }
    }

    if fallback == LinkFallback::Title {
        if let Some(slug) = item.title().map(slugify).filter(|s| !s.is_empty()) {
            return fill(policy.title, "{slug}", &slug);
        }
    }

    debug!(kind = %kind, index, "link from position");
    policy
        .positional
        .replace("{index}", &(index + 1).to_string())
}

/// Lowercase, collapse runs of non-alphanumerics into `-`, trim dashes.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    NON_ALNUM
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Default "view more" label for a content type.
pub fn cta_label(kind: SectionType) -> &'static str {
    match kind {
        SectionType::Blogs => "Read Full Article",
        SectionType::Offers => "View Offer Details",
        SectionType::Packages => "Explore Package",
        SectionType::Destinations => "Discover Destination",
        SectionType::Testimonials => "Read Full Review",
        SectionType::Themes => "Explore Theme",
    }
}

fn fill(pattern: &str, placeholder: &str, value: &str) -> String {
    pattern.replace(placeholder, &urlencoding::encode(value.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn item(kind: SectionType, value: Value) -> ContentItem {
        ContentItem::decode(kind, &value).unwrap()
    }

    #[test]
    fn slug_wins_over_everything() {
        let dest = item(
            SectionType::Destinations,
            json!({"slug": "bali", "id": "7", "country": "Indonesia"}),
        );
        assert_eq!(build_url(SectionType::Destinations, &dest, 0), "/destinations/bali");
    }

    #[test]
    fn id_is_used_without_slug() {
        let blog = item(SectionType::Blogs, json!({"id": "42", "category": "tips"}));
        assert_eq!(build_url(SectionType::Blogs, &blog, 0), "/blogs/42");

        let pkg = item(SectionType::Packages, json!({"id": 9}));
        assert_eq!(build_url(SectionType::Packages, &pkg, 0), "/destinations/packages/9");
    }

    #[test]
    fn attribute_rules_apply_in_order() {
        let offer = item(SectionType::Offers, json!({"discount": "20", "type": "seasonal"}));
        assert_eq!(build_url(SectionType::Offers, &offer, 0), "/offers/discount/20");

        let offer = item(SectionType::Offers, json!({"type": "seasonal"}));
        assert_eq!(build_url(SectionType::Offers, &offer, 0), "/offers/seasonal");

        let pkg = item(SectionType::Packages, json!({"destination": "bali", "duration": 5}));
        assert_eq!(
            build_url(SectionType::Packages, &pkg, 0),
            "/destinations/bali/packages"
        );

        let pkg = item(SectionType::Packages, json!({"duration": 5}));
        assert_eq!(
            build_url(SectionType::Packages, &pkg, 0),
            "/destinations/packages/5-days"
        );

        let review = item(SectionType::Testimonials, json!({"rating": 5}));
        assert_eq!(
            build_url(SectionType::Testimonials, &review, 0),
            "/testimonials/rating/5-star"
        );

        let theme = item(SectionType::Themes, json!({"type": "luxury"}));
        assert_eq!(build_url(SectionType::Themes, &theme, 0), "/themes/type/luxury");

        let dest = item(SectionType::Destinations, json!({"region": "asia"}));
        assert_eq!(
            build_url(SectionType::Destinations, &dest, 0),
            "/destinations/region/asia"
        );
    }

    #[test]
    fn positional_fallback_is_one_based() {
        let empty = item(SectionType::Blogs, json!({}));
        assert_eq!(build_url(SectionType::Blogs, &empty, 2), "/blogs/article/3");

        let cases = [
            (SectionType::Offers, "/offers/deal/1"),
            (SectionType::Packages, "/destinations/packages/tour-1"),
            (SectionType::Destinations, "/destinations/place-1"),
            (SectionType::Testimonials, "/testimonials/review-1"),
            (SectionType::Themes, "/themes/theme-1"),
        ];
        for (kind, expected) in cases {
            let empty = item(kind, json!({}));
            assert_eq!(build_url(kind, &empty, 0), expected);
        }
    }

    #[test]
    fn empty_and_zero_values_are_skipped() {
        let review = item(
            SectionType::Testimonials,
            json!({"slug": "", "id": "", "rating": 0, "customer": "maya"}),
        );
        assert_eq!(
            build_url(SectionType::Testimonials, &review, 0),
            "/testimonials/customer/maya"
        );
    }

    #[test]
    fn quoted_numeric_attributes_still_link() {
        let pkg = item(SectionType::Packages, json!({"duration": "5", "featured": null}));
        assert_eq!(
            build_url(SectionType::Packages, &pkg, 0),
            "/destinations/packages/5-days"
        );

        let review = item(SectionType::Testimonials, json!({"rating": "5"}));
        assert_eq!(
            build_url(SectionType::Testimonials, &review, 0),
            "/testimonials/rating/5-star"
        );
    }

    #[test]
    fn title_fallback_slugifies() {
        let blog = item(SectionType::Blogs, json!({"title": "Hello, World!"}));
        assert_eq!(
            build_url_with(SectionType::Blogs, &blog, 0, LinkFallback::Title),
            "/blogs/hello-world"
        );

        let pkg = item(SectionType::Packages, json!({"title": "Bali Escape"}));
        assert_eq!(
            build_url_with(SectionType::Packages, &pkg, 0, LinkFallback::Title),
            "/destinations/packages/bali-escape"
        );
    }

    #[test]
    fn title_fallback_without_usable_title_is_positional() {
        let blog = item(SectionType::Blogs, json!({"title": "!!!"}));
        assert_eq!(
            build_url_with(SectionType::Blogs, &blog, 1, LinkFallback::Title),
            "/blogs/article/2"
        );
    }

    #[test]
    fn substituted_values_are_percent_encoded() {
        let dest = item(SectionType::Destinations, json!({"country": "New Zealand"}));
        assert_eq!(
            build_url(SectionType::Destinations, &dest, 0),
            "/destinations/New%20Zealand"
        );

        let blog = item(SectionType::Blogs, json!({"slug": "a/b"}));
        assert_eq!(build_url(SectionType::Blogs, &blog, 0), "/blogs/a%2Fb");
    }

    #[test]
    fn slugify_collapses_and_trims() {
        assert_eq!(slugify("  Top 10: Beaches & Bays  "), "top-10-beaches-bays");
        assert_eq!(slugify("---"), "");
        assert_eq!(slugify("Café"), "caf");
    }

    #[test]
    fn every_type_has_a_label_and_policy() {
        for kind in SectionType::PRIORITY {
            assert!(!cta_label(kind).is_empty());
            assert_eq!(policy(kind).kind, kind);
        }
    }
}

//! Content model for CMS pages.
//!
//! Everything here is read-only and decoded per request. Item records are a
//! closed set of six variants; every attribute is optional on the wire so a
//! sparse CMS record still decodes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::ExploreError;

/// The closed set of section content keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Themes,
    Destinations,
    Testimonials,
    Offers,
    Blogs,
    Packages,
}

impl SectionType {
    /// Resolution priority: earlier wins when a section carries several types.
    pub const PRIORITY: [SectionType; 6] = [
        SectionType::Themes,
        SectionType::Destinations,
        SectionType::Testimonials,
        SectionType::Offers,
        SectionType::Blogs,
        SectionType::Packages,
    ];

    /// Key used in the CMS `content` object.
    pub fn key(self) -> &'static str {
        match self {
            SectionType::Themes => "themes",
            SectionType::Destinations => "destinations",
            SectionType::Testimonials => "testimonials",
            SectionType::Offers => "offers",
            SectionType::Blogs => "blogs",
            SectionType::Packages => "packages",
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SectionType {
    type Err = ExploreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionType::PRIORITY
            .into_iter()
            .find(|t| t.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ExploreError::UnknownSectionType(s.to_string()))
    }
}

/// Raw `content` object of a section.
///
/// Kept untyped until resolution so unknown keys and malformed values can be
/// skipped instead of failing the whole page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentMap(Map<String, Value>);

impl ContentMap {
    /// Value stored under a section type key, if any.
    pub fn get(&self, kind: SectionType) -> Option<&Value> {
        self.0.get(kind.key())
    }

    /// Wrap a JSON value; anything but an object yields an empty map.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => ContentMap(map),
            _ => ContentMap::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Discriminating attributes used by the link builder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attribute {
    Category,
    Discount,
    Type,
    Destination,
    Duration,
    Country,
    Region,
    Rating,
    Customer,
}

impl Attribute {
    /// Placeholder name inside a path pattern (`{category}`, ...).
    pub fn placeholder(self) -> &'static str {
        match self {
            Attribute::Category => "{category}",
            Attribute::Discount => "{discount}",
            Attribute::Type => "{type}",
            Attribute::Destination => "{destination}",
            Attribute::Duration => "{duration}",
            Attribute::Country => "{country}",
            Attribute::Region => "{region}",
            Attribute::Rating => "{rating}",
            Attribute::Customer => "{customer}",
        }
    }
}

/// Blog article record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Blog {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub title: String,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub slug: Option<String>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub excerpt: String,
    pub status: Option<String>,
    pub author_id: Option<String>,
    pub feature_image: Option<String>,
    pub feature_image_alt: Option<String>,
    pub card_feature_image: Option<String>,
    pub card_feature_image_alt: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub keywords: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub destinations: Vec<String>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub themes: Vec<String>,
    #[serde(deserialize_with = "lenient::opt_u32")]
    pub read_time: Option<u32>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub category: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Destination record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Destination {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub name: String,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub slug: Option<String>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub description: String,
    pub image: Option<String>,
    pub image_alt: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub country: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub region: Option<String>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub featured: bool,
    #[serde(deserialize_with = "lenient::opt_u32")]
    pub package_count: Option<u32>,
    #[serde(deserialize_with = "lenient::opt_u32")]
    pub blog_count: Option<u32>,
}

/// Tour package record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Package {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub title: String,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub slug: Option<String>,
    /// A single string or a list of paragraphs on the wire.
    #[serde(deserialize_with = "lenient::paragraphs")]
    pub description: Vec<String>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub price: Option<f64>,
    pub currency: Option<String>,
    #[serde(deserialize_with = "lenient::opt_u32")]
    pub duration: Option<u32>,
    pub duration_type: Option<String>,
    pub image: Option<String>,
    pub image_alt: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub destination: Option<String>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub destinations: Vec<String>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub themes: Vec<String>,
    pub difficulty: Option<String>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub featured: bool,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub rating: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_u32")]
    pub review_count: Option<u32>,
}

/// Offer record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Offer {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub title: String,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub slug: Option<String>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub description: String,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub discount: Option<String>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub discount_percentage: Option<f64>,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "lenient::opt_string")]
    pub offer_type: Option<String>,
    pub valid_from: Option<String>,
    pub valid_to: Option<String>,
    pub image: Option<String>,
    pub image_alt: Option<String>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub package_ids: Vec<String>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub featured: bool,
}

/// Customer testimonial record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub name: String,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub slug: Option<String>,
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub rating: Option<f64>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub review: String,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub customer: Option<String>,
    pub image: Option<String>,
    pub image_alt: Option<String>,
    pub package_id: Option<String>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub featured: bool,
}

/// Travel theme record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub name: String,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub slug: Option<String>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub description: String,
    pub image: Option<String>,
    pub image_alt: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub category: Option<String>,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "lenient::opt_string")]
    pub theme_type: Option<String>,
    #[serde(deserialize_with = "lenient::opt_u32")]
    pub package_count: Option<u32>,
    #[serde(deserialize_with = "lenient::opt_u32")]
    pub blog_count: Option<u32>,
    #[serde(deserialize_with = "lenient::null_default")]
    pub featured: bool,
}

/// One content item, tagged by the section type it came from.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentItem {
    Blog(Blog),
    Destination(Destination),
    Package(Package),
    Offer(Offer),
    Testimonial(Testimonial),
    Theme(Theme),
}

impl ContentItem {
    /// Decode one raw item as the variant belonging to `kind`.
    pub fn decode(kind: SectionType, value: &Value) -> Result<Self, serde_json::Error> {
        Ok(match kind {
            SectionType::Blogs => ContentItem::Blog(Blog::deserialize(value)?),
            SectionType::Destinations => ContentItem::Destination(Destination::deserialize(value)?),
            SectionType::Packages => ContentItem::Package(Package::deserialize(value)?),
            SectionType::Offers => ContentItem::Offer(Offer::deserialize(value)?),
            SectionType::Testimonials => ContentItem::Testimonial(Testimonial::deserialize(value)?),
            SectionType::Themes => ContentItem::Theme(Theme::deserialize(value)?),
        })
    }

    pub fn kind(&self) -> SectionType {
        match self {
            ContentItem::Blog(_) => SectionType::Blogs,
            ContentItem::Destination(_) => SectionType::Destinations,
            ContentItem::Package(_) => SectionType::Packages,
            ContentItem::Offer(_) => SectionType::Offers,
            ContentItem::Testimonial(_) => SectionType::Testimonials,
            ContentItem::Theme(_) => SectionType::Themes,
        }
    }

    pub fn slug(&self) -> Option<&str> {
        let slug = match self {
            ContentItem::Blog(b) => b.slug.as_deref(),
            ContentItem::Destination(d) => d.slug.as_deref(),
            ContentItem::Package(p) => p.slug.as_deref(),
            ContentItem::Offer(o) => o.slug.as_deref(),
            ContentItem::Testimonial(t) => t.slug.as_deref(),
            ContentItem::Theme(t) => t.slug.as_deref(),
        };
        non_empty(slug)
    }

    pub fn id(&self) -> Option<&str> {
        let id = match self {
            ContentItem::Blog(b) => b.id.as_deref(),
            ContentItem::Destination(d) => d.id.as_deref(),
            ContentItem::Package(p) => p.id.as_deref(),
            ContentItem::Offer(o) => o.id.as_deref(),
            ContentItem::Testimonial(t) => t.id.as_deref(),
            ContentItem::Theme(t) => t.id.as_deref(),
        };
        non_empty(id)
    }

    /// Display title: `title` for articles, packages and offers, `name` otherwise.
    pub fn title(&self) -> Option<&str> {
        let title = match self {
            ContentItem::Blog(b) => b.title.as_str(),
            ContentItem::Destination(d) => d.name.as_str(),
            ContentItem::Package(p) => p.title.as_str(),
            ContentItem::Offer(o) => o.title.as_str(),
            ContentItem::Testimonial(t) => t.name.as_str(),
            ContentItem::Theme(t) => t.name.as_str(),
        };
        non_empty(Some(title))
    }

    /// Value of a discriminating attribute, rendered for a URL.
    ///
    /// Empty strings and zero numbers count as absent.
    pub fn attribute(&self, attr: Attribute) -> Option<String> {
        let text = |v: &Option<String>| non_empty(v.as_deref()).map(str::to_string);
        let number = |v: Option<f64>| v.filter(|n| *n != 0.0 && n.is_finite()).map(|n| n.to_string());

        match (self, attr) {
            (ContentItem::Blog(b), Attribute::Category) => text(&b.category),
            (ContentItem::Offer(o), Attribute::Discount) => {
                text(&o.discount).or_else(|| number(o.discount_percentage))
            }
            (ContentItem::Offer(o), Attribute::Type) => text(&o.offer_type),
            (ContentItem::Package(p), Attribute::Destination) => text(&p.destination),
            (ContentItem::Package(p), Attribute::Duration) => {
                number(p.duration.map(f64::from))
            }
            (ContentItem::Destination(d), Attribute::Country) => text(&d.country),
            (ContentItem::Destination(d), Attribute::Region) => text(&d.region),
            (ContentItem::Testimonial(t), Attribute::Rating) => number(t.rating),
            (ContentItem::Testimonial(t), Attribute::Customer) => text(&t.customer),
            (ContentItem::Theme(t), Attribute::Category) => text(&t.category),
            (ContentItem::Theme(t), Attribute::Type) => text(&t.theme_type),
            _ => None,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// One CMS section of a page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Section {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(rename = "type", deserialize_with = "lenient::null_default")]
    pub section_type: String,
    #[serde(deserialize_with = "lenient::null_default")]
    pub title: String,
    #[serde(deserialize_with = "lenient::content")]
    pub content: ContentMap,
    #[serde(deserialize_with = "lenient::null_default")]
    pub view_more_text: String,
    #[serde(deserialize_with = "lenient::order")]
    pub order: i64,
}

/// A page description from the CMS.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::null_default")]
    pub name: String,
    #[serde(deserialize_with = "lenient::null_default")]
    pub slug: String,
    #[serde(deserialize_with = "lenient::null_default")]
    pub sections: Vec<Section>,
}

impl Page {
    /// Sections sorted by `order`; equal orders keep their original sequence.
    pub fn ordered_sections(&self) -> Vec<&Section> {
        let mut sections: Vec<&Section> = self.sections.iter().collect();
        sections.sort_by_key(|s| s.order);
        sections
    }
}

/// Envelope returned by `page-by-name`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageResponse {
    #[serde(default, deserialize_with = "lenient::null_default")]
    pub success: bool,
    #[serde(default)]
    pub data: Option<Page>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A named blog tab (category) and its articles.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogTab {
    #[serde(deserialize_with = "lenient::null_default")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub slug: String,
    #[serde(deserialize_with = "lenient::order")]
    pub order: i64,
    #[serde(deserialize_with = "lenient::null_default")]
    pub blogs: Vec<Blog>,
}

/// Deserializers that accept the loose shapes the CMS emits.
mod lenient {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Str(String),
        Int(i64),
        Float(f64),
        Bool(bool),
    }

    impl Scalar {
        fn into_string(self) -> String {
            match self {
                Scalar::Str(s) => s,
                Scalar::Int(i) => i.to_string(),
                Scalar::Float(f) => f.to_string(),
                Scalar::Bool(b) => b.to_string(),
            }
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    pub(super) fn opt_string<'de, D>(d: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Scalar>::deserialize(d)?.map(Scalar::into_string))
    }

    pub(super) fn string<'de, D>(d: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(opt_string(d)?.unwrap_or_default())
    }

    /// `null` reads as the type's default.
    pub(super) fn null_default<'de, D, T>(d: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
    {
        Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
    }

    /// A number, or a string holding one. Anything else reads as absent.
    pub(super) fn opt_f64<'de, D>(d: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Value>::deserialize(d)?.as_ref().and_then(number))
    }

    pub(super) fn opt_u32<'de, D>(d: D) -> Result<Option<u32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(opt_f64(d)?
            .filter(|n| *n >= 0.0 && n.fract() == 0.0 && *n <= f64::from(u32::MAX))
            .map(|n| n as u32))
    }

    pub(super) fn order<'de, D>(d: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Value>::deserialize(d)?
            .as_ref()
            .and_then(|v| v.as_i64().or_else(|| number(v).map(|n| n as i64)))
            .unwrap_or_default())
    }

    /// Anything but an object reads as empty content.
    pub(super) fn content<'de, D>(d: D) -> Result<ContentMap, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(ContentMap::from_value(Value::deserialize(d)?))
    }

    fn number(value: &Value) -> Option<f64> {
        let n = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        n.filter(|n| n.is_finite())
    }

    pub(super) fn paragraphs<'de, D>(d: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<OneOrMany>::deserialize(d)? {
            Some(OneOrMany::One(s)) if s.is_empty() => Vec::new(),
            Some(OneOrMany::One(s)) => vec![s],
            Some(OneOrMany::Many(v)) => v,
            None => Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn section_type_parses_case_insensitively() {
        assert_eq!("Themes".parse::<SectionType>().unwrap(), SectionType::Themes);
        assert_eq!(" blogs ".parse::<SectionType>().unwrap(), SectionType::Blogs);
        assert!(matches!(
            "hotels".parse::<SectionType>(),
            Err(ExploreError::UnknownSectionType(_))
        ));
    }

    #[test]
    fn sparse_items_decode_without_error() {
        let item = ContentItem::decode(SectionType::Destinations, &json!({})).unwrap();
        assert_eq!(item.kind(), SectionType::Destinations);
        assert_eq!(item.slug(), None);
        assert_eq!(item.id(), None);
        assert_eq!(item.title(), None);
    }

    #[test]
    fn numeric_ids_are_accepted() {
        let item = ContentItem::decode(SectionType::Blogs, &json!({"id": 42})).unwrap();
        assert_eq!(item.id(), Some("42"));
    }

    #[test]
    fn package_description_accepts_string_or_list() {
        let one = ContentItem::decode(SectionType::Packages, &json!({"description": "Sun"})).unwrap();
        let many = ContentItem::decode(
            SectionType::Packages,
            &json!({"description": ["Day 1", "Day 2"]}),
        )
        .unwrap();

        let ContentItem::Package(one) = one else { panic!("expected package") };
        let ContentItem::Package(many) = many else { panic!("expected package") };
        assert_eq!(one.description, vec!["Sun".to_string()]);
        assert_eq!(many.description.len(), 2);
    }

    #[test]
    fn empty_strings_and_zero_numbers_are_absent_attributes() {
        let item = ContentItem::decode(
            SectionType::Testimonials,
            &json!({"slug": "", "rating": 0, "customer": "  "}),
        )
        .unwrap();
        assert_eq!(item.slug(), None);
        assert_eq!(item.attribute(Attribute::Rating), None);
        assert_eq!(item.attribute(Attribute::Customer), None);
    }

    #[test]
    fn attributes_render_numbers_like_the_cms() {
        let item = ContentItem::decode(SectionType::Testimonials, &json!({"rating": 4.5})).unwrap();
        assert_eq!(item.attribute(Attribute::Rating).as_deref(), Some("4.5"));

        let item = ContentItem::decode(SectionType::Packages, &json!({"duration": 7})).unwrap();
        assert_eq!(item.attribute(Attribute::Duration).as_deref(), Some("7"));
    }

    #[test]
    fn null_fields_read_as_absent() {
        let page: Page = serde_json::from_value(json!({
            "id": 3,
            "name": null,
            "sections": [{
                "id": "s1",
                "type": null,
                "title": null,
                "viewMoreText": null,
                "order": null,
                "content": {"destinations": [{"slug": "bali", "featured": null, "name": null}]}
            }, {
                "id": "s2",
                "title": "Later",
                "order": "2",
                "content": null
            }]
        }))
        .unwrap();

        let section = &page.sections[0];
        assert_eq!(section.title, "");
        assert_eq!(section.view_more_text, "");
        assert_eq!(section.order, 0);
        assert!(!section.content.is_empty());
        assert_eq!(page.sections[1].order, 2);
        assert!(page.sections[1].content.is_empty());

        let value = section.content.get(SectionType::Destinations).unwrap()[0].clone();
        let item = ContentItem::decode(SectionType::Destinations, &value).unwrap();
        assert_eq!(item.slug(), Some("bali"));
        assert_eq!(item.title(), None);
    }

    #[test]
    fn numbers_sent_as_strings_are_read() {
        let item = ContentItem::decode(
            SectionType::Packages,
            &json!({"duration": "5", "price": "45000", "rating": " 4.5 ", "featured": null}),
        )
        .unwrap();
        let ContentItem::Package(pkg) = &item else { panic!("expected package") };
        assert_eq!(pkg.duration, Some(5));
        assert_eq!(pkg.price, Some(45000.0));
        assert_eq!(pkg.rating, Some(4.5));
        assert_eq!(item.attribute(Attribute::Duration).as_deref(), Some("5"));

        let item = ContentItem::decode(SectionType::Testimonials, &json!({"rating": "5"})).unwrap();
        assert_eq!(item.attribute(Attribute::Rating).as_deref(), Some("5"));
    }

    #[test]
    fn unparsable_numbers_are_absent_not_errors() {
        let item = ContentItem::decode(
            SectionType::Packages,
            &json!({"duration": "a week", "price": {}, "reviewCount": -3}),
        )
        .unwrap();
        let ContentItem::Package(pkg) = item else { panic!("expected package") };
        assert_eq!(pkg.duration, None);
        assert_eq!(pkg.price, None);
        assert_eq!(pkg.review_count, None);
    }

    #[test]
    fn response_with_null_success_is_a_failure() {
        let resp: PageResponse = serde_json::from_value(json!({"success": null, "data": null})).unwrap();
        assert!(!resp.success);
        assert!(resp.data.is_none());
    }

    #[test]
    fn attribute_outside_type_is_none() {
        let item = ContentItem::decode(SectionType::Blogs, &json!({"country": "Japan"})).unwrap();
        assert_eq!(item.attribute(Attribute::Country), None);
    }

    #[test]
    fn ordered_sections_is_a_stable_sort() {
        let page: Page = serde_json::from_value(json!({
            "id": 1,
            "name": "Home",
            "slug": "home",
            "sections": [
                {"id": "c", "order": 2},
                {"id": "a", "order": 1},
                {"id": "b", "order": 1},
                {"id": "d", "order": 0}
            ]
        }))
        .unwrap();

        let ids: Vec<&str> = page.ordered_sections().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["d", "a", "b", "c"]);
        assert_eq!(page.id, "1");
    }

    #[test]
    fn response_without_data_decodes() {
        let resp: PageResponse =
            serde_json::from_value(json!({"success": false, "message": "nope"})).unwrap();
        assert!(!resp.success);
        assert!(resp.data.is_none());
        assert_eq!(resp.message.as_deref(), Some("nope"));
    }
}

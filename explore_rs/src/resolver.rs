//! Section content resolution.
//!
//! A section's `content` object is keyed by content type. The resolver walks
//! the fixed priority list and reports which type (or types) the section
//! actually carries, decoding the items on the way.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::types::{ContentItem, ContentMap, SectionType};

/// How many populated content types a section may contribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolveMode {
    /// Only the first populated type in priority order.
    #[default]
    #[serde(alias = "first_by_priority")]
    First,
    /// Every populated type, in priority order.
    #[serde(alias = "all_populated")]
    All,
}

/// Items of one content type found in a section.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolved {
    pub kind: SectionType,
    pub items: Vec<ContentItem>,
}

/// First populated content type in priority order.
///
/// Returns `None` when no known key holds a non-empty list; the caller
/// renders nothing for that section.
pub fn resolve(content: &ContentMap) -> Option<Resolved> {
    SectionType::PRIORITY
        .into_iter()
        .find_map(|kind| populated(content, kind))
}

/// Resolve according to `mode`. The result is in priority order and empty
/// when nothing matched.
pub fn resolve_with(content: &ContentMap, mode: ResolveMode) -> Vec<Resolved> {
    match mode {
        ResolveMode::First => resolve(content).into_iter().collect(),
        ResolveMode::All => SectionType::PRIORITY
            .into_iter()
            .filter_map(|kind| populated(content, kind))
            .collect(),
    }
}

fn populated(content: &ContentMap, kind: SectionType) -> Option<Resolved> {
    let Value::Array(raw) = content.get(kind)? else {
        debug!(kind = %kind, "content value is not a list, ignoring");
        return None;
    };

    let items: Vec<ContentItem> = raw
        .iter()
        .enumerate()
        .filter_map(|(idx, value)| match ContentItem::decode(kind, value) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!(kind = %kind, index = idx, error = %e, "skipping undecodable item");
                None
            }
        })
        .collect();

    if items.is_empty() {
        return None;
    }
    debug!(kind = %kind, count = items.len(), "resolved section content");
    Some(Resolved { kind, items })
}

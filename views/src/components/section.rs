//! Section block - heading plus one card strip per resolved content type.

use leptos::prelude::*;

use super::{Card, ViewMoreCta};
use crate::types::{CardGroup, SectionView};

/// A CMS section. The heading renders even when no cards resolved.
#[component]
pub fn SectionBlock(section: SectionView) -> impl IntoView {
    let dom_id = format!("section-{}", dom_safe(&section.id));
    let title = section.title;

    view! {
        <section id=dom_id class="section-block">
            {(!title.is_empty()).then(|| view! { <h2>{title.clone()}</h2> })}
            {section
                .groups
                .into_iter()
                .filter(|g| !g.entries.is_empty())
                .map(|group| view! { <CardStrip group=group /> })
                .collect::<Vec<_>>()}
        </section>
    }
}

/// Horizontally scrolling strip of card + CTA pairs.
#[component]
pub fn CardStrip(group: CardGroup) -> impl IntoView {
    view! {
        <div class="card-strip" data-kind=group.kind>
            {group.entries.into_iter().map(|entry| view! {
                <div class="card-entry">
                    <Card card=entry.card />
                    <ViewMoreCta text=entry.cta.text href=entry.cta.href />
                </div>
            }).collect::<Vec<_>>()}
        </div>
    }
}

pub(crate) fn dom_safe(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect()
}

//! Plain-text page summary for terminals.

use console::style;
use explore_views::types::{CardData, PageView};

use crate::page::{PageMetadata, PageState};
use crate::progress::format_count;
use crate::render::{RenderOptions, page_view};

/// One line per card, grouped under section headings.
pub fn text_summary(state: &PageState, meta: &PageMetadata, opts: &RenderOptions) -> String {
    match state {
        PageState::Loading => format!("{} Loading...", meta.name),
        PageState::Empty => format!("{}\nNo Data Found", style(&meta.name).bold()),
        PageState::Error(message) => {
            format!("{}\n{} {}", style(&meta.name).bold(), style("Error").red().bold(), message)
        }
        PageState::Success(page) => summarize(&page_view(page, meta, opts)),
    }
}

fn summarize(view: &PageView) -> String {
    let mut lines = vec![format!(
        "{} ({})",
        style(&view.name).bold(),
        format_count(view.sections.len(), "section", "sections")
    )];

    for section in &view.sections {
        let heading = if section.title.is_empty() {
            "(untitled)"
        } else {
            section.title.as_str()
        };
        lines.push(String::new());
        lines.push(format!("## {}", style(heading).bold()));
        if section.is_empty() {
            lines.push("   (no items)".to_string());
        }
        for group in &section.groups {
            lines.push(format!(
                "   [{}] {}",
                group.kind,
                format_count(group.entries.len(), "item", "items")
            ));
            for entry in &group.entries {
                lines.push(format!(
                    "   - {}  {}",
                    card_title(&entry.card),
                    style(&entry.cta.href).cyan()
                ));
            }
        }
    }
    lines.join("\n")
}

fn card_title(card: &CardData) -> &str {
    let title = match card {
        CardData::Blog(c) => &c.title,
        CardData::Destination(c) => &c.name,
        CardData::Package(c) => &c.title,
        CardData::Offer(c) => &c.title,
        CardData::Testimonial(c) => &c.name,
        CardData::Theme(c) => &c.name,
    };
    if title.is_empty() { "(untitled)" } else { title.as_str() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Page;
    use serde_json::json;

    #[test]
    fn summary_lists_cards_with_links() {
        console::set_colors_enabled(false);
        let page: Page = serde_json::from_value(json!({
            "name": "All Destinations",
            "sections": [
                {"id": "a", "title": "Popular", "order": 1,
                 "content": {"destinations": [{"name": "Bali", "slug": "bali"}]}},
                {"id": "b", "title": "Empty", "order": 2, "content": {}}
            ]
        }))
        .unwrap();
        let meta = PageMetadata::from_route("All Destinations", "Holiday Tribe");

        let text = text_summary(&PageState::Success(page), &meta, &RenderOptions::default());
        assert!(text.contains("All Destinations (2 sections)"));
        assert!(text.contains("## Popular"));
        assert!(text.contains("[destinations] 1 item"));
        assert!(text.contains("- Bali  /destinations/bali"));
        assert!(text.contains("## Empty\n   (no items)"));
    }

    #[test]
    fn summary_for_error_state() {
        console::set_colors_enabled(false);
        let meta = PageMetadata::from_route("Nope", "Holiday Tribe");
        let text = text_summary(
            &PageState::Error("Page not found".into()),
            &meta,
            &RenderOptions::default(),
        );
        assert!(text.contains("Error Page not found"));
    }
}

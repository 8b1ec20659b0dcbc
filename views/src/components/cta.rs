//! "View more" call-to-action under each card.

use leptos::prelude::*;

use crate::components::icons::{ICON_ARROW_RIGHT, Icon};

/// Centered outline button linking to `href`.
#[component]
pub fn ViewMoreCta(
    #[prop(into)] text: String,
    #[prop(into)] href: String,
    /// Extra classes appended to the wrapper
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let wrapper = if class.is_empty() {
        "view-more".to_string()
    } else {
        format!("view-more {}", class)
    };

    view! {
        <div class=wrapper>
            <a href=href>
                {text}
                <Icon path=ICON_ARROW_RIGHT size="16" />
            </a>
        </div>
    }
}

//! Loading, error and empty placeholders.

use leptos::prelude::*;

use crate::components::icons::{ICON_WARNING_CIRCLE, Icon};
use crate::types::StatusView;

/// Full-height placeholder for a page that has no content to show.
#[component]
pub fn StatusPanel(status: StatusView) -> impl IntoView {
    match status {
        StatusView::Loading => view! {
            <div class="status status--loading" role="status">
                <div class="spinner"></div>
            </div>
        }
        .into_any(),
        StatusView::Error(message) => view! {
            <div class="status status--error" role="alert">
                <div>
                    <Icon path=ICON_WARNING_CIRCLE size="32" />
                    <h2>"Error"</h2>
                    <p>{message}</p>
                </div>
            </div>
        }
        .into_any(),
        StatusView::Empty => view! {
            <div class="status status--empty">
                <div>
                    <h2>"No Data Found"</h2>
                    <p>"No content available for this page."</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

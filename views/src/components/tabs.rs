//! Blog tab navigation components

use leptos::prelude::*;

use crate::types::BlogTabView;

/// Tab bar with one button per blog tab
#[component]
pub fn BlogTabBar(tabs: Vec<BlogTabView>, active_slug: Option<String>) -> impl IntoView {
    view! {
        <div class="tab-bar" role="tablist">
            {tabs.into_iter().map(|tab| {
                let active = active_slug.as_deref() == Some(tab.slug.as_str());
                let class = if active { "active" } else { "" };
                view! {
                    <button
                        class=class
                        role="tab"
                        aria-selected=if active { "true" } else { "false" }
                        data-tab-slug=tab.slug
                    >
                        {tab.name}
                    </button>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}

/// Tab content panel
#[component]
pub fn TabPanel(#[prop(into)] slug: String, active: bool, children: Children) -> impl IntoView {
    let class = if active { "tab-panel active" } else { "tab-panel" };

    view! {
        <div class=class role="tabpanel" data-tab-panel=slug>
            {children()}
        </div>
    }
}

//! Blog tab page body: tab bar plus one panel of article rows per tab.

use leptos::prelude::*;

use super::{BlogTabBar, TabPanel};
use crate::types::{BlogDetailView, BlogTabsView};

/// Tabbed blog listing. Renders nothing when there are no tabs.
#[component]
pub fn BlogTabsSection(listing: BlogTabsView) -> impl IntoView {
    if listing.tabs.is_empty() {
        return view! { "" }.into_any();
    }

    let active_slug = listing.active_slug.clone();
    let panels = listing
        .tabs
        .clone()
        .into_iter()
        .map(|tab| {
            let active = active_slug.as_deref() == Some(tab.slug.as_str());
            view! {
                <TabPanel slug=tab.slug active=active>
                    {tab.blogs.into_iter().map(|blog| view! { <BlogDetails blog=blog /> }).collect::<Vec<_>>()}
                </TabPanel>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="blog-tabs">
            <BlogTabBar tabs=listing.tabs active_slug=active_slug />
            {panels}
        </div>
    }
    .into_any()
}

/// One article row linking to the full post.
#[component]
pub fn BlogDetails(blog: BlogDetailView) -> impl IntoView {
    let card = blog.card;

    view! {
        <a class="blog-detail" href=blog.href>
            {card.image.map(|img| view! { <img src=img.src alt=img.alt loading="lazy" /> })}
            <div>
                <h3 class="card-title">{card.title}</h3>
                <p class="card-text">{card.excerpt}</p>
                {card.read_time.map(|mins| view! {
                    <div class="card-meta">
                        <span class="pill">{format!("{} min read", mins)}</span>
                    </div>
                })}
            </div>
        </a>
    }
}

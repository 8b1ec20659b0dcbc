//! Root document components - complete HTML pages.
//!
//! Every page shares [`PageShell`]: charset, CSP, title, description and the
//! inlined stylesheet. Scripts are only emitted for pages that need them.

use leptos::prelude::*;

use super::{BlogTabsSection, SectionBlock, StatusPanel};
use crate::styles::{CSP, EXPLORE_CSS};
use crate::types::{BlogTabsView, PageMeta, PageView, StatusView};

/// `<html>` wrapper with the shared `<head>`.
#[component]
pub fn PageShell(meta: PageMeta, children: Children) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{meta.title}</title>
                <meta name="description" content=meta.description />
                <style>{EXPLORE_CSS}</style>
            </head>
            <body>
                {children()}
            </body>
        </html>
    }
}

/// The explore landing page: header plus ordered sections.
#[component]
pub fn ExploreDocument(page: PageView) -> impl IntoView {
    let tagline = format!(
        "Explore our curated collection of {}",
        page.name.to_lowercase()
    );

    view! {
        <PageShell meta=page.meta>
            <div class="container">
                <header class="page-header">
                    <h1>{page.name}</h1>
                    <p>{tagline}</p>
                </header>
                <div class="sections">
                    {page.sections.into_iter().map(|section| view! {
                        <SectionBlock section=section />
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </PageShell>
    }
}

/// A page that only shows a loading, error or empty state.
#[component]
pub fn StatusDocument(meta: PageMeta, status: StatusView) -> impl IntoView {
    view! {
        <PageShell meta=meta>
            <div class="container">
                <StatusPanel status=status />
            </div>
        </PageShell>
    }
}

/// Tabbed blog listing page.
#[component]
pub fn BlogDocument(meta: PageMeta, listing: BlogTabsView) -> impl IntoView {
    let title = listing.title.clone();

    view! {
        <PageShell meta=meta>
            <div class="container">
                {(!title.is_empty()).then(|| view! {
                    <header class="page-header"><h1>{title.clone()}</h1></header>
                })}
                <BlogTabsSection listing=listing />
            </div>
            <script>{TAB_SCRIPT}</script>
        </PageShell>
    }
}

/// Tab switching: activate the clicked tab, show its panel, scroll the button into view.
const TAB_SCRIPT: &str = r#"
(() => {
  const bar = document.querySelector('.tab-bar');
  if (!bar) return;

  const activate = (slug) => {
    bar.querySelectorAll('button[data-tab-slug]').forEach(btn => {
      const on = btn.dataset.tabSlug === slug;
      btn.classList.toggle('active', on);
      btn.setAttribute('aria-selected', on ? 'true' : 'false');
      if (on) {
        btn.scrollIntoView({ behavior: 'smooth', inline: 'center', block: 'nearest' });
      }
    });
    document.querySelectorAll('.tab-panel[data-tab-panel]').forEach(panel => {
      panel.classList.toggle('active', panel.dataset.tabPanel === slug);
    });
  };

  bar.querySelectorAll('button[data-tab-slug]').forEach(btn => {
    btn.addEventListener('click', () => activate(btn.dataset.tabSlug));
  });

  const initial = bar.querySelector('button.active');
  if (initial) activate(initial.dataset.tabSlug);
})();
"#;

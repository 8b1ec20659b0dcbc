//! Command dispatch for the `explore` binary.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use serde_json::json;
use tracing::{debug, info};

use super::args::{Args, Command, OutputFormat};
use super::output::text_summary;
use crate::config::ExploreConfig;
use crate::links::{LinkFallback, build_url_with};
use crate::page::{LoadOutcome, PageLoader, PageMetadata, PageState};
use crate::progress::{self, Spinner};
use crate::render::{RenderOptions, page_view, render_blogs, render_state, status_view};
use crate::resolver::ResolveMode;
use crate::source::{FilePageSource, HttpPageSource, PageSource};
use crate::tabs::{TabSelection, read_blog_tabs};
use crate::types::{ContentItem, SectionType};

/// Run one parsed command line.
pub async fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    debug!(?config, "configuration loaded");

    match args.command {
        Command::Page {
            name,
            source,
            out,
            format,
            fallback,
            all_types,
        } => {
            let mut opts = RenderOptions::from(&config);
            if let Some(fallback) = fallback {
                opts.link_fallback = fallback;
            }
            if all_types {
                opts.resolve_mode = ResolveMode::All;
            }
            let route = name.unwrap_or_else(|| config.default_page.clone());
            run_page(&config, &route, source, out.as_deref(), format, &opts).await
        }
        Command::Blogs {
            file,
            tab,
            title,
            out,
        } => run_blogs(&config, &file, tab.as_deref(), &title, out.as_deref()),
        Command::Link {
            kind,
            item,
            index,
            fallback,
        } => {
            let url = link(&kind, &item, index, fallback.unwrap_or(config.link_fallback))?;
            println!("{url}");
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<ExploreConfig> {
    match path {
        Some(path) => Ok(ExploreConfig::load_strict(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?
            .with_env()),
        None => {
            let cwd = std::env::current_dir().context("Failed to read working directory")?;
            Ok(ExploreConfig::load(&cwd))
        }
    }
}

async fn run_page(
    config: &ExploreConfig,
    route: &str,
    source: Option<PathBuf>,
    out: Option<&Path>,
    format: OutputFormat,
    opts: &RenderOptions,
) -> Result<()> {
    let meta = PageMetadata::from_route(route, &config.site_name);
    let started = Instant::now();

    let state = match source {
        Some(path) => load_state(FilePageSource::new(path), &meta.name).await,
        None => {
            let http = HttpPageSource::new(config.cms_base_url.clone(), config.request_timeout())
                .context("Failed to build HTTP client")?;
            let spinner = Spinner::new(&format!("Loading {}", meta.name));
            let state = load_state(http, &meta.name).await;
            spinner.finish_clear();
            state
        }
    };
    info!(page = %meta.name, elapsed = %progress::format_duration(started.elapsed()), "page load finished");

    let rendered = match format {
        OutputFormat::Html => render_state(&state, &meta, opts),
        OutputFormat::Json => {
            let value = match &state {
                PageState::Success(page) => serde_json::to_value(page_view(page, &meta, opts))?,
                other => json!({ "name": meta.name, "status": status_view(other) }),
            };
            serde_json::to_string_pretty(&value)?
        }
        OutputFormat::Text => text_summary(&state, &meta, opts),
    };
    write_output(out, &rendered)?;

    match state {
        PageState::Error(message) => bail!("{message}"),
        PageState::Empty => {
            progress::warning("No Data Found");
            Ok(())
        }
        _ => {
            if let Some(path) = out {
                progress::success(&format!(
                    "Rendered {} in {} -> {}",
                    meta.name,
                    progress::format_duration(started.elapsed()),
                    path.display()
                ));
            }
            Ok(())
        }
    }
}

async fn load_state<S: PageSource>(source: S, name: &str) -> PageState {
    let loader = PageLoader::new(source);
    match loader.load(name).await {
        LoadOutcome::Applied(state) => state,
        LoadOutcome::Stale => loader.state().await,
    }
}

fn run_blogs(
    config: &ExploreConfig,
    file: &Path,
    tab: Option<&str>,
    title: &str,
    out: Option<&Path>,
) -> Result<()> {
    let tabs = read_blog_tabs(file)
        .with_context(|| format!("Failed to load blog tabs from {}", file.display()))?;
    let selection = TabSelection::new(tabs, tab);

    if let Some(requested) = tab {
        if selection.active_slug() != Some(requested) {
            progress::warning(&format!("No tab '{requested}', showing the first tab"));
        }
    }
    if selection.is_empty() {
        progress::warning("No blog tabs to render");
    }

    let meta = PageMetadata::from_route(title, &config.site_name);
    let html = render_blogs(&selection, &meta, config.link_fallback);
    write_output(out, &html)
}

fn link(kind: &str, item: &str, index: usize, fallback: LinkFallback) -> Result<String> {
    let kind: SectionType = kind.parse()?;
    let value: serde_json::Value =
        serde_json::from_str(item).context("Item must be a JSON object")?;
    let item = ContentItem::decode(kind, &value)
        .with_context(|| format!("Item is not a valid {kind} record"))?;
    Ok(build_url_with(kind, &item, index, fallback))
}

fn write_output(out: Option<&Path>, content: &str) -> Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))
        }
        None => {
            println!("{content}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_builds_from_json_item() {
        let url = link("destinations", r#"{"slug":"bali"}"#, 0, LinkFallback::Positional).unwrap();
        assert_eq!(url, "/destinations/bali");

        let url = link("blogs", "{}", 2, LinkFallback::Positional).unwrap();
        assert_eq!(url, "/blogs/article/3");
    }

    #[test]
    fn link_rejects_unknown_type_and_bad_json() {
        assert!(link("hotels", "{}", 0, LinkFallback::Positional).is_err());
        assert!(link("blogs", "{nope", 0, LinkFallback::Positional).is_err());
    }
}

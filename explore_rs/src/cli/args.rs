//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::links::LinkFallback;

#[derive(Parser, Debug)]
#[command(name = "explore")]
#[command(about = "Render CMS-driven travel explore pages")]
#[command(version)]
pub struct Args {
    /// Config file (default: .explore/config.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG wins when set
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load a CMS page and render it
    Page {
        /// Page name, plain or percent-encoded (default from config)
        name: Option<String>,

        /// Read a saved page-by-name response instead of calling the CMS
        #[arg(long)]
        source: Option<PathBuf>,

        /// Write output here instead of stdout
        #[arg(long, short)]
        out: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,

        /// Link fallback for items with no slug, id or attribute
        #[arg(long, value_enum)]
        fallback: Option<LinkFallback>,

        /// Render every populated content type of a section
        #[arg(long)]
        all_types: bool,
    },

    /// Render a tabbed blog listing from a JSON array of tabs
    Blogs {
        file: PathBuf,

        /// Slug of the tab to open first
        #[arg(long)]
        tab: Option<String>,

        /// Page heading
        #[arg(long, default_value = "Travel Blog")]
        title: String,

        #[arg(long, short)]
        out: Option<PathBuf>,
    },

    /// Print the navigation URL for one item
    Link {
        /// Content type (blogs, offers, packages, destinations, testimonials, themes)
        kind: String,

        /// Item record as JSON
        item: String,

        /// 0-based position of the item in its section
        #[arg(long, default_value_t = 0)]
        index: usize,

        #[arg(long, value_enum)]
        fallback: Option<LinkFallback>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    Json,
    Text,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_page_defaults() {
        let args = Args::try_parse_from(["explore", "page"]).unwrap();
        assert_eq!(args.log_level, "warn");
        let Command::Page { name, format, all_types, .. } = args.command else {
            panic!("expected page command");
        };
        assert!(name.is_none());
        assert_eq!(format, OutputFormat::Html);
        assert!(!all_types);
    }

    #[test]
    fn parses_link_with_fallback() {
        let args = Args::try_parse_from([
            "explore",
            "link",
            "blogs",
            "{}",
            "--index",
            "2",
            "--fallback",
            "title",
        ])
        .unwrap();
        let Command::Link { kind, index, fallback, .. } = args.command else {
            panic!("expected link command");
        };
        assert_eq!(kind, "blogs");
        assert_eq!(index, 2);
        assert_eq!(fallback, Some(LinkFallback::Title));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args =
            Args::try_parse_from(["explore", "blogs", "tabs.json", "--log-level", "debug"]).unwrap();
        assert_eq!(args.log_level, "debug");
    }
}

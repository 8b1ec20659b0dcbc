//! CSS styles for the rendered pages.
//!
//! Everything is inlined into the document `<head>` so a generated page is
//! a single self-contained file.
//!
//! # Customization
//!
//! ```rust
//! use explore_views::styles::EXPLORE_CSS;
//!
//! let my_css = ".card { border-radius: 0; }";
//! let combined = format!("{}\n{}", EXPLORE_CSS, my_css);
//! assert!(combined.contains(".card"));
//! ```

/// Complete CSS for explore, blog and status pages.
///
/// Covers:
/// - Page container and header typography
/// - Horizontally scrolling card strips
/// - Per-type card variants and the "view more" CTA
/// - Blog tab bar and panels
/// - Loading spinner, error and empty states
pub const EXPLORE_CSS: &str = r#"
:root {
    --bg-page: #f9fafb;
    --bg-card: #ffffff;
    --text-strong: #111827;
    --text-body: #374151;
    --text-muted: #6b7280;
    --border-soft: #e5e7eb;
    --border-hover: #d1d5db;
    --accent: #2563eb;
    --accent-warm: #f59e0b;
    --danger: #ef4444;
    --radius: 12px;
    --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    font-family: var(--font-sans);
    background: var(--bg-page);
    color: var(--text-body);
    line-height: 1.5;
    margin: 0;
}

.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 32px 16px;
}

.page-header {
    margin-bottom: 32px;
}

.page-header h1 {
    font-size: 36px;
    font-weight: 700;
    color: var(--text-strong);
    margin: 0 0 8px;
}

.page-header p {
    color: var(--text-muted);
    margin: 0;
}

.sections {
    display: flex;
    flex-direction: column;
    gap: 32px;
}

.section-block {
    background: var(--bg-card);
    border-radius: 8px;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    padding: 24px;
}

.section-block h2 {
    font-size: 24px;
    font-weight: 600;
    color: var(--text-strong);
    margin: 0 0 16px;
}

.card-strip {
    display: flex;
    gap: 16px;
    margin: 10px 0 36px;
    overflow-x: auto;
    scrollbar-width: none;
}

.card-strip::-webkit-scrollbar {
    display: none;
}

.card-entry {
    flex: 0 0 280px;
    display: flex;
    flex-direction: column;
}

.card {
    background: var(--bg-card);
    border: 1px solid var(--border-soft);
    border-radius: var(--radius);
    overflow: hidden;
    flex: 1;
}

.card img {
    width: 100%;
    height: 160px;
    object-fit: cover;
    display: block;
}

.card-body {
    padding: 12px 16px;
}

.card-title {
    font-size: 16px;
    font-weight: 600;
    color: var(--text-strong);
    margin: 0 0 6px;
}

.card-text {
    font-size: 14px;
    color: var(--text-body);
    margin: 0 0 8px;
}

.card-meta {
    display: flex;
    flex-wrap: wrap;
    gap: 8px;
    font-size: 12px;
    color: var(--text-muted);
}

.card-meta .pill {
    background: var(--bg-page);
    border-radius: 999px;
    padding: 2px 8px;
}

.card--offer .badge {
    display: inline-block;
    background: var(--accent-warm);
    color: #fff;
    font-weight: 700;
    font-size: 12px;
    border-radius: 6px;
    padding: 2px 8px;
    margin-bottom: 6px;
}

.card--testimonial .stars {
    color: var(--accent-warm);
    letter-spacing: 2px;
}

.card--testimonial blockquote {
    margin: 0 0 8px;
    font-style: italic;
}

.view-more {
    display: flex;
    justify-content: center;
    margin-top: 24px;
}

.view-more a {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    background: #fff;
    border: 2px solid var(--border-soft);
    border-radius: 8px;
    color: var(--text-body);
    font-weight: 600;
    padding: 12px 24px;
    text-decoration: none;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    transition: all 0.2s;
}

.view-more a:hover {
    border-color: var(--border-hover);
    color: var(--text-strong);
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.08);
}

.view-more a:hover svg {
    transform: translateX(4px);
}

.view-more svg {
    transition: transform 0.2s;
}

.tab-bar {
    display: flex;
    gap: 8px;
    overflow-x: auto;
    padding: 8px;
    background: #1f2937;
    border-radius: 999px 0 0 999px;
    scrollbar-width: none;
}

.tab-bar button {
    flex-shrink: 0;
    white-space: nowrap;
    border: none;
    border-radius: 8px;
    padding: 8px 16px;
    font-size: 14px;
    font-weight: 500;
    background: transparent;
    color: #fff;
    cursor: pointer;
    transition: all 0.2s;
}

.tab-bar button:hover {
    background: rgba(55, 65, 81, 0.5);
}

.tab-bar button.active {
    background: #d1d5db;
    color: var(--text-strong);
}

.tab-panel {
    display: none;
    padding: 16px 0;
}

.tab-panel.active {
    display: flex;
    flex-direction: column;
    gap: 16px;
}

.blog-detail {
    display: flex;
    gap: 16px;
    background: var(--bg-card);
    border: 1px solid var(--border-soft);
    border-radius: var(--radius);
    padding: 16px;
    color: inherit;
    text-decoration: none;
}

.blog-detail img {
    width: 160px;
    height: 110px;
    object-fit: cover;
    border-radius: 8px;
}

.status {
    display: flex;
    justify-content: center;
    align-items: center;
    min-height: 400px;
    text-align: center;
}

.status h2 {
    font-size: 24px;
    font-weight: 700;
    margin: 0 0 16px;
}

.status--error {
    color: var(--danger);
}

.status--empty {
    color: var(--text-muted);
}

.spinner {
    width: 128px;
    height: 128px;
    border-radius: 50%;
    border-bottom: 2px solid var(--text-strong);
    animation: spin 1s linear infinite;
}

@keyframes spin {
    to { transform: rotate(360deg); }
}
"#;

/// Content Security Policy for generated documents (inline styles and the tab script only).
pub const CSP: &str = "default-src 'self'; img-src 'self' https: data:; style-src 'self' 'unsafe-inline'; script-src 'self' 'unsafe-inline'; connect-src 'none';";

// src/core/html.rs
// Small helpers over `scraper` element trees.

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

/// Parse a selector from a literal. Panics only on a malformed literal.
pub fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("bad selector {css:?}: {e}"))
}

/// Any `span` whose class attribute contains "copy" (the site's copy-to-clipboard values).
pub static COPY_SPAN: LazyLock<Selector> = LazyLock::new(|| selector(r#"span[class*="copy"]"#));

/// All text below `el`, concatenated, then trimmed.
pub fn inner_text(el: ElementRef<'_>) -> String {
    let text: String = el.text().collect();
    s!(text.trim())
}

/// Direct element children of `el` with the given tag name (no descendants).
pub fn child_elements<'a>(el: ElementRef<'a>, tag: &'a str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    el.children()
        .filter_map(ElementRef::wrap)
        .filter(move |c| c.value().name().eq_ignore_ascii_case(tag))
}

/// Trimmed text of the first copy-span under `el`, else of `el` itself.
pub fn copy_text_or_self(el: ElementRef<'_>) -> String {
    match el.select(&COPY_SPAN).next() {
        Some(span) => inner_text(span),
        None => inner_text(el),
    }
}

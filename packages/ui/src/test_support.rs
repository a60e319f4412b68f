//! Helpers for rendering components to HTML in unit tests.

use dioxus::prelude::*;

/// Build `app` once and return its HTML.
pub(crate) fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// The opening tag of the first element whose attributes contain `needle`.
pub(crate) fn opening_tag<'a>(html: &'a str, needle: &str) -> &'a str {
    let at = html
        .find(needle)
        .unwrap_or_else(|| panic!("{needle} not found in {html}"));
    let start = html[..at].rfind('<').unwrap();
    let end = at + html[at..].find('>').unwrap();
    &html[start..=end]
}

pub(crate) fn is_disabled(tag: &str) -> bool {
    tag.contains("disabled") && !tag.contains("disabled=false") && !tag.contains("disabled=\"false\"")
}

use dioxus::prelude::*;
use model::Segment;

/// Text whose matched segments are wrapped in `<mark>`.
#[component]
pub fn HighlightedText(segments: Vec<Segment>) -> Element {
    rsx! {
        for segment in segments {
            if segment.is_match {
                mark { class: "highlight", "{segment.text}" }
            } else {
                "{segment.text}"
            }
        }
    }
}

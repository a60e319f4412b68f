use dioxus::prelude::*;
use model::CounterState;

/// Counter with threshold messages.
///
/// The decrement button is disabled at or below zero. An info alert shows at
/// exactly zero and a milestone alert from ten upwards.
#[component]
pub fn Counter(
    #[props(default)] initial_value: i64,
    #[props(default = 1)] step: i64,
) -> Element {
    let mut counter = use_signal(|| CounterState::new(initial_value, step));
    let state = counter();

    rsx! {
        div {
            class: "card",
            div {
                class: "card-body items-center text-center",
                h2 { class: "card-title", "Counter Component" }
                div { class: "counter-value", "{state.value}" }
                div {
                    class: "card-actions",
                    button {
                        class: "btn btn-error",
                        disabled: !state.can_decrement(),
                        onclick: move |_| counter.write().decrement(),
                        "-"
                    }
                    button {
                        class: "btn btn-neutral",
                        onclick: move |_| counter.write().reset(),
                        "Reset"
                    }
                    button {
                        class: "btn btn-success",
                        onclick: move |_| counter.write().increment(),
                        "+"
                    }
                }
                if let Some(message) = state.zero_message() {
                    div {
                        class: "alert alert-info",
                        span { "{message}" }
                    }
                }
                if let Some(message) = state.milestone_message() {
                    div {
                        class: "alert alert-success",
                        span { "{message}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{is_disabled, opening_tag, render};

    #[test]
    fn test_renders_heading_and_buttons() {
        let html = render(|| rsx! { Counter {} });
        assert!(html.contains("Counter Component"));
        assert!(html.contains(">-</button>"));
        assert!(html.contains(">Reset</button>"));
        assert!(html.contains(">+</button>"));
    }

    #[test]
    fn test_zero_disables_decrement_and_shows_message() {
        let html = render(|| rsx! { Counter { initial_value: 0 } });
        assert!(is_disabled(opening_tag(&html, "btn btn-error")));
        assert!(html.contains("Counter is at zero!"));
        assert!(!html.contains("reached"));
    }

    #[test]
    fn test_positive_value_enables_decrement() {
        let html = render(|| rsx! { Counter { initial_value: 1 } });
        assert!(html.contains(">1</div>"));
        assert!(!is_disabled(opening_tag(&html, "btn btn-error")));
        assert!(!html.contains("Counter is at zero!"));
        assert!(!html.contains("reached"));
    }

    #[test]
    fn test_milestone_shows_exact_value() {
        let html = render(|| rsx! { Counter { initial_value: 10 } });
        assert!(html.contains("reached 10!"));
        assert!(!html.contains("Counter is at zero!"));

        let html = render(|| rsx! { Counter { initial_value: 15, step: 5 } });
        assert!(html.contains("reached 15!"));
        assert!(!is_disabled(opening_tag(&html, "btn btn-error")));
    }

    #[test]
    fn test_negative_value_keeps_decrement_disabled() {
        let html = render(|| rsx! { Counter { initial_value: -3 } });
        assert!(is_disabled(opening_tag(&html, "btn btn-error")));
        assert!(!html.contains("Counter is at zero!"));
    }
}

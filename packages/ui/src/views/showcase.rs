use dioxus::prelude::*;
use model::ShowcaseConfig;

use crate::{ContactForm, Counter, UserDirectory};

/// Shared page shell.
///
/// Lays the three widgets out side by side. They share no state; each one
/// only receives its own section of the configuration.
#[component]
pub fn ShowcaseView(config: ShowcaseConfig) -> Element {
    rsx! {
        div {
            class: "showcase",
            div {
                class: "showcase-header",
                h1 { "Welcome to Component Testing with Dioxus" }
                p { "This app demonstrates various components perfect for testing scenarios" }
            }
            div {
                class: "showcase-grid",
                div {
                    Counter {
                        initial_value: config.counter.initial_value,
                        step: config.counter.step,
                    }
                }
                div {
                    ContactForm { submit_delay_ms: config.contact.submit_delay_ms }
                }
                div {
                    class: "span-2",
                    UserDirectory { endpoint: config.directory.endpoint.clone() }
                }
            }
        }
    }
}

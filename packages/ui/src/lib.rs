//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const WIDGETS_CSS: Asset = asset!("/assets/widgets.css");

mod counter;
pub use counter::Counter;

mod contact_form;
pub use contact_form::{ContactForm, ContactFormPanel};

mod highlighted_text;
pub use highlighted_text::HighlightedText;

mod user_directory;
pub use user_directory::{DirectoryPanel, UserDirectory};

#[cfg(test)]
mod test_support;

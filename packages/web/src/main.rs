use dioxus::prelude::*;
use model::ShowcaseConfig;

/// Settings baked into the WASM bundle.
const SHOWCASE_TOML: &str = include_str!("../showcase.toml");

fn main() {
    dioxus::launch(App);
}

fn load_config() -> ShowcaseConfig {
    match ShowcaseConfig::from_toml(SHOWCASE_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid {}: {}", ShowcaseConfig::filename(), e);
            ShowcaseConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::WIDGETS_CSS }
        ui::views::ShowcaseView { config }
    }
}

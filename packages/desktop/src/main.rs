use std::path::{Path, PathBuf};

use dioxus::prelude::*;
use model::ShowcaseConfig;
use tracing_subscriber::EnvFilter;

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .ok();

    dioxus::launch(App);
}

/// `SHOWCASE_CONFIG` if set, otherwise `showcase.toml` in the working directory.
fn config_path() -> PathBuf {
    std::env::var("SHOWCASE_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(ShowcaseConfig::filename()))
}

/// Load the config file, falling back to defaults when it is missing or invalid.
fn load_config_from(path: &Path) -> ShowcaseConfig {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!("No config at {}: {}", path.display(), e);
            return ShowcaseConfig::default();
        }
    };
    match ShowcaseConfig::from_toml(&text) {
        Ok(config) => {
            tracing::info!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            tracing::error!("Invalid config {}: {}", path.display(), e);
            ShowcaseConfig::default()
        }
    }
}

/// `SHOWCASE_USERS_ENDPOINT` wins over the file's `[directory]` endpoint.
fn apply_endpoint_override(config: ShowcaseConfig, endpoint: Option<String>) -> ShowcaseConfig {
    match endpoint {
        Some(endpoint) if !endpoint.is_empty() => {
            tracing::info!("Using users endpoint {} from environment", endpoint);
            config.with_endpoint(endpoint)
        }
        _ => config,
    }
}

fn load_config() -> ShowcaseConfig {
    let config = load_config_from(&config_path());
    apply_endpoint_override(config, std::env::var("SHOWCASE_USERS_ENDPOINT").ok())
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::WIDGETS_CSS }
        ui::views::ShowcaseView { config }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("showcase.toml"));
        assert_eq!(config, ShowcaseConfig::default());
    }

    #[test]
    fn test_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("showcase.toml");
        std::fs::write(&path, "[counter]\ninitial_value = 9\n").unwrap();

        let config = load_config_from(&path);
        assert_eq!(config.counter.initial_value, 9);
        assert_eq!(config.counter.step, 1);
    }

    #[test]
    fn test_invalid_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("showcase.toml");
        std::fs::write(&path, "[counter\n").unwrap();

        assert_eq!(load_config_from(&path), ShowcaseConfig::default());
    }

    #[test]
    fn test_endpoint_override() {
        let config = apply_endpoint_override(
            ShowcaseConfig::default(),
            Some("http://localhost:3000/users".to_string()),
        );
        assert_eq!(config.directory.endpoint, "http://localhost:3000/users");

        let config = apply_endpoint_override(ShowcaseConfig::default(), Some(String::new()));
        assert_eq!(config, ShowcaseConfig::default());

        let config = apply_endpoint_override(ShowcaseConfig::default(), None);
        assert_eq!(config, ShowcaseConfig::default());
    }
}

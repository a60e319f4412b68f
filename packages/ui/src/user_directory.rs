//! Searchable user directory backed by a remote users endpoint.

use api::{into_resolution, CancellationToken, UsersClient};
use dioxus::prelude::*;
use model::{DirectoryState, DirectoryView, FetchResolution, Highlighter, DEFAULT_USERS_ENDPOINT};

use crate::icons::{FaArrowsRotate, FaXmark};
use crate::{HighlightedText, Icon};

/// Directory widget that owns its fetch lifecycle.
///
/// One fetch starts on mount and is cancelled on unmount. Retry and Refresh
/// start extra fetches that nothing cancels; the newest fetch always wins.
#[component]
pub fn UserDirectory(
    #[props(default = DEFAULT_USERS_ENDPOINT.to_string())] endpoint: String,
) -> Element {
    let mut state = use_signal(DirectoryState::new);
    let client = use_hook(|| UsersClient::new(endpoint.clone()));
    let mount_token = use_hook(CancellationToken::new);

    use_hook({
        let client = client.clone();
        let token = mount_token.clone();
        move || {
            spawn(load_users(state, client, token));
        }
    });

    use_drop({
        let token = mount_token.clone();
        move || token.cancel()
    });

    let reload = move |_: ()| {
        spawn(load_users(state, client.clone(), CancellationToken::new()));
    };

    rsx! {
        DirectoryPanel {
            state: state(),
            on_search: move |term: String| state.write().set_search_term(term),
            on_clear: move |_| state.write().clear_search(),
            on_retry: reload.clone(),
            on_refresh: reload,
        }
    }
}

async fn load_users(
    mut state: Signal<DirectoryState>,
    client: UsersClient,
    cancel: CancellationToken,
) {
    let ticket = state.write().begin_fetch();
    let result = client.fetch_users(&cancel).await;
    if let Err(e) = &result {
        if !e.is_cancelled() {
            tracing::warn!("users fetch from {} failed: {e}", client.endpoint());
        }
    }

    // The owner may be gone; its state must not be touched.
    let resolution = into_resolution(result, &cancel);
    if resolution == FetchResolution::Cancelled {
        tracing::debug!("dropping users fetch for an unmounted directory");
        return;
    }
    state.write().resolve(ticket, resolution);
}

/// Stateless rendering of a [`DirectoryState`].
#[component]
pub fn DirectoryPanel(
    state: DirectoryState,
    on_search: EventHandler<String>,
    on_clear: EventHandler<()>,
    on_retry: EventHandler<()>,
    on_refresh: EventHandler<()>,
) -> Element {
    let view = state.view();

    if view == DirectoryView::Loading {
        return rsx! {
            div {
                class: "card",
                div {
                    class: "card-body items-center",
                    span { class: "loading loading-spinner loading-lg" }
                    p { "Loading users..." }
                }
            }
        };
    }

    if let DirectoryView::Error(message) = view {
        return rsx! {
            div {
                class: "card",
                div {
                    class: "card-body items-center",
                    div {
                        class: "alert alert-error",
                        span { "{message}" }
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_retry.call(()),
                        "Retry"
                    }
                }
            }
        };
    }

    let term = state.search_term.clone();
    let highlighter = Highlighter::new(&term);
    let body = match view {
        DirectoryView::Rows(rows) => rsx! {
            div {
                class: "overflow-x-auto",
                table {
                    class: "table table-zebra",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Username" }
                            th { "Email" }
                        }
                    }
                    tbody {
                        for user in rows {
                            tr {
                                key: "{user.id}",
                                td {
                                    HighlightedText { segments: highlighter.segments(&user.name) }
                                }
                                td {
                                    "@"
                                    HighlightedText { segments: highlighter.segments(&user.username) }
                                }
                                td {
                                    HighlightedText { segments: highlighter.segments(&user.email) }
                                }
                            }
                        }
                    }
                }
            }
        },
        _ => rsx! {
            div {
                class: "text-center empty-results",
                p { "No users found matching your search." }
            }
        },
    };

    rsx! {
        div {
            class: "card",
            div {
                class: "card-body",
                h2 { class: "card-title", "User Directory" }
                div {
                    class: "form-control search-row",
                    input {
                        r#type: "text",
                        class: "input",
                        placeholder: "Search users...",
                        value: "{term}",
                        oninput: move |evt: FormEvent| on_search.call(evt.value()),
                    }
                    button {
                        class: "btn",
                        title: "Clear search",
                        disabled: !state.can_clear_search(),
                        onclick: move |_| on_clear.call(()),
                        Icon { icon: FaXmark, width: 12, height: 12 }
                    }
                }
                {body}
                div {
                    class: "card-actions justify-end",
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| on_refresh.call(()),
                        Icon { icon: FaArrowsRotate, width: 12, height: 12 }
                        " Refresh"
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
    use model::UserRecord;

    fn users() -> Vec<UserRecord> {
        vec![
            UserRecord {
                id: 1,
                name: "Leanne Graham".to_string(),
                email: "Sincere@april.biz".to_string(),
                username: "Bret".to_string(),
            },
            UserRecord {
                id: 2,
                name: "Ervin Howell".to_string(),
                email: "Shanna@melissa.tv".to_string(),
                username: "Antonette".to_string(),
            },
        ]
    }

    fn loading() -> DirectoryState {
        let mut state = DirectoryState::new();
        state.begin_fetch();
        state
    }

    fn failed() -> DirectoryState {
        let mut state = DirectoryState::new();
        let ticket = state.begin_fetch();
        state.resolve(ticket, FetchResolution::Failed("Failed to fetch users".to_string()));
        state
    }

    fn loaded(term: &str) -> DirectoryState {
        let mut state = DirectoryState::new();
        let ticket = state.begin_fetch();
        state.resolve(ticket, FetchResolution::Loaded(users()));
        state.set_search_term(term);
        state
    }

    #[test]
    fn test_loading_view() {
        let html = render(|| rsx! {
            DirectoryPanel {
                state: loading(),
                on_search: |_: String| {},
                on_clear: |_: ()| {},
                on_retry: |_: ()| {},
                on_refresh: |_: ()| {},
            }
        });
        assert!(html.contains("Loading users..."));
        assert!(!html.contains("User Directory"));
        assert!(!html.contains("Retry"));
    }

    #[test]
    fn test_error_view_offers_retry_only() {
        let html = render(|| rsx! {
            DirectoryPanel {
                state: failed(),
                on_search: |_: String| {},
                on_clear: |_: ()| {},
                on_retry: |_: ()| {},
                on_refresh: |_: ()| {},
            }
        });
        assert!(html.contains("Failed to fetch users"));
        assert!(html.contains(">Retry</button>"));
        assert!(!html.contains("Refresh"));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn test_rows_view_lists_everyone_without_term() {
        let html = render(|| rsx! {
            DirectoryPanel {
                state: loaded(""),
                on_search: |_: String| {},
                on_clear: |_: ()| {},
                on_retry: |_: ()| {},
                on_refresh: |_: ()| {},
            }
        });
        assert!(html.contains("User Directory"));
        assert!(html.contains("Leanne Graham"));
        assert!(html.contains("Ervin Howell"));
        assert!(html.contains("Refresh"));
        assert!(!html.contains("Retry"));
        assert!(!html.contains("<mark"));
        assert!(is_disabled(opening_tag(&html, r#"title="Clear search""#)));
    }

    #[test]
    fn test_rows_view_highlights_matches() {
        let html = render(|| rsx! {
            DirectoryPanel {
                state: loaded("ann"),
                on_search: |_: String| {},
                on_clear: |_: ()| {},
                on_retry: |_: ()| {},
                on_refresh: |_: ()| {},
            }
        });
        // Leanne matches by name, Ervin through "Shanna"
        assert!(html.contains(r#"<mark class="highlight">ann</mark>"#));
        assert_eq!(html.matches("<mark").count(), 2);
        assert!(!is_disabled(opening_tag(&html, r#"title="Clear search""#)));
    }

    #[test]
    fn test_empty_view() {
        let html = render(|| rsx! {
            DirectoryPanel {
                state: loaded("zzz"),
                on_search: |_: String| {},
                on_clear: |_: ()| {},
                on_retry: |_: ()| {},
                on_refresh: |_: ()| {},
            }
        });
        assert!(html.contains("No users found matching your search."));
        assert!(!html.contains("<table"));
        assert!(html.contains("Refresh"));
    }
}

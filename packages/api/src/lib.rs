//! # API crate — the widgets' outside world
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`users`] | [`UsersClient`]: one cancellable `GET` of the user batch shown by the directory |
//! | [`contact`] | [`submit_contact`]: validation plus the simulated, delayed contact submission |
//! | [`error`] | [`FetchError`]: transport, status and decode failures, and cancellation |
//!
//! Cancellation is explicit: callers pass a
//! [`tokio_util::sync::CancellationToken`] and tell a cancelled call apart from
//! a failed one with [`FetchError::is_cancelled`].

pub mod contact;
pub mod error;
pub mod users;

pub use contact::{submit_contact, DEFAULT_SUBMIT_DELAY};
pub use error::FetchError;
pub use tokio_util::sync::CancellationToken;
pub use users::{into_resolution, UsersClient};

//! Platform-free state for the showcase widgets.
//!
//! Everything here is plain data plus pure transitions; the `ui` crate keeps
//! these values in signals and re-renders from them.

pub mod config;
pub mod contact;
pub mod counter;
pub mod directory;
pub mod highlight;

pub use config::{ShowcaseConfig, DEFAULT_USERS_ENDPOINT};
pub use contact::{
    validate, ContactFormState, ContactSubmission, Field, FieldErrors, FormPhase, FormResult,
    SubmitStep,
};
pub use counter::CounterState;
pub use directory::{filter, DirectoryState, DirectoryView, FetchResolution, FetchTicket, UserRecord};
pub use highlight::{highlight, Highlighter, Segment};

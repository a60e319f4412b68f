//! Simulated delivery of the contact form.
//!
//! There is no real endpoint behind the form. A production build would `POST`
//! the [`ContactSubmission`] as JSON; here the accepted submission is logged
//! and answered after a fixed delay.

use std::time::Duration;

use model::{validate, ContactSubmission, FormResult};
use tracing::{debug, info};

/// Latency of the simulated submission.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(2000);

/// Validate and deliver a contact submission.
///
/// Validation failures come back immediately, without waiting.
pub async fn submit_contact(submission: ContactSubmission, delay: Duration) -> FormResult {
    if let Err(errors) = validate(&submission) {
        debug!("contact submission rejected: {} field error(s)", errors.len());
        return FormResult::rejected(errors);
    }

    info!(
        name = %submission.name,
        email = %submission.email,
        subscribe = submission.subscribe,
        "Form submitted successfully"
    );
    sleep(delay).await;
    FormResult::accepted()
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::Field;
    use std::time::Instant;

    #[tokio::test]
    async fn test_invalid_submission_returns_immediately() {
        let submission = ContactSubmission {
            email: "foo".to_string(),
            ..Default::default()
        };
        let result = tokio::time::timeout(
            Duration::from_secs(1),
            submit_contact(submission, Duration::from_secs(60)),
        )
        .await
        .expect("validation failure should not wait");

        assert!(!result.success);
        assert_eq!(result.field_errors.len(), 3);
        assert_eq!(result.field_errors[&Field::Email], "Email is invalid");
    }

    #[tokio::test]
    async fn test_valid_submission_waits_then_succeeds() {
        let submission = ContactSubmission {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            message: "hi".to_string(),
            subscribe: true,
        };
        let started = Instant::now();
        let result = submit_contact(submission, Duration::from_millis(30)).await;

        assert!(result.success);
        assert!(result.field_errors.is_empty());
        assert!(started.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn test_default_delay_is_two_seconds() {
        assert_eq!(DEFAULT_SUBMIT_DELAY.as_secs(), 2);
    }
}

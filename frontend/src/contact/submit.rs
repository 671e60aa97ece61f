use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::Deserialize;

use super::error::ContactError;
use super::form::{Ack, ContactSubmission};

/// Delivers a validated contact request somewhere and reports the outcome.
pub trait ContactSubmitter {
    fn submit(&self, submission: ContactSubmission) -> LocalBoxFuture<'static, Result<Ack, ContactError>>;
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Posts the submission as JSON to a contact endpoint.
pub struct HttpSubmitter {
    endpoint: String,
}

impl HttpSubmitter {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

impl ContactSubmitter for HttpSubmitter {
    fn submit(&self, submission: ContactSubmission) -> LocalBoxFuture<'static, Result<Ack, ContactError>> {
        let endpoint = self.endpoint.clone();
        async move {
            let request = Request::post(&endpoint)
                .json(&submission)
                .map_err(|e| ContactError::Encoding(e.to_string()))?;

            let response = request
                .send()
                .await
                .map_err(|e| ContactError::Network(e.to_string()))?;

            let status = response.status();
            if !response.ok() {
                let message = response.json::<ErrorResponse>().await.ok().map(|body| body.error);
                log::warn!("Contact endpoint answered {}", status);
                return Err(ContactError::Server { status, message });
            }

            // a 2xx means the message was delivered, whatever the body says
            let body = match response.json::<Ack>().await {
                Ok(ack) => Some(ack),
                Err(e) => {
                    log::debug!("Contact endpoint answered {} without a reference: {}", status, e);
                    None
                }
            };
            Ok(acknowledgement(body, chrono::Utc::now().timestamp_millis()))
        }
        .boxed_local()
    }
}

/// Stand-in used when no endpoint is configured: waits, then acknowledges.
pub struct SimulatedSubmitter {
    delay_ms: u32,
}

impl SimulatedSubmitter {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

pub(crate) fn local_reference(millis: i64) -> String {
    format!("KRV-{:X}", millis.max(0))
}

/// Acknowledgement for a delivered submission. Falls back to a local
/// reference when the endpoint did not hand one back.
pub(crate) fn acknowledgement(body: Option<Ack>, now_millis: i64) -> Ack {
    match body {
        Some(ack) if !ack.reference.trim().is_empty() => ack,
        _ => Ack { reference: local_reference(now_millis) },
    }
}

impl ContactSubmitter for SimulatedSubmitter {
    fn submit(&self, submission: ContactSubmission) -> LocalBoxFuture<'static, Result<Ack, ContactError>> {
        let delay_ms = self.delay_ms;
        async move {
            TimeoutFuture::new(delay_ms).await;
            log::info!("Simulated contact request from {}", submission.email);
            Ok(acknowledgement(None, chrono::Utc::now().timestamp_millis()))
        }
        .boxed_local()
    }
}

/// Shared handle so a submitter can travel through component props.
#[derive(Clone)]
pub struct Submitter(pub Rc<dyn ContactSubmitter>);

impl Submitter {
    pub fn new(inner: impl ContactSubmitter + 'static) -> Self {
        Self(Rc::new(inner))
    }

    pub fn submit(&self, submission: ContactSubmission) -> LocalBoxFuture<'static, Result<Ack, ContactError>> {
        self.0.submit(submission)
    }
}

impl PartialEq for Submitter {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::form::FormStatus;
    use futures::executor::block_on;

    struct Rejecting;

    impl ContactSubmitter for Rejecting {
        fn submit(&self, _: ContactSubmission) -> LocalBoxFuture<'static, Result<Ack, ContactError>> {
            async { Err(ContactError::Server { status: 503, message: None }) }.boxed_local()
        }
    }

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Grace".into(),
            email: "grace@navy.mil".into(),
            company: None,
            message: "Compilers?".into(),
        }
    }

    #[test]
    fn injected_submitter_result_is_passed_through() {
        let submitter = Submitter::new(Rejecting);
        let result = block_on(submitter.submit(submission()));
        assert_eq!(result, Err(ContactError::Server { status: 503, message: None }));
    }

    #[test]
    fn handles_compare_by_identity() {
        let a = Submitter::new(Rejecting);
        let b = a.clone();
        let c = Submitter::new(Rejecting);
        assert!(a == b);
        assert!(a != c);
    }

    #[test]
    fn delivered_without_reference_still_acknowledges() {
        // 204 No Content, an empty 200 or `{"ok":true}` all arrive as no body
        assert_eq!(acknowledgement(None, 0x1F4), Ack { reference: "KRV-1F4".into() });
        assert_eq!(
            acknowledgement(Some(Ack { reference: "  ".into() }), 16),
            Ack { reference: "KRV-10".into() }
        );
    }

    #[test]
    fn server_reference_is_kept() {
        let ack = acknowledgement(Some(Ack { reference: "CASE-4411".into() }), 16);
        assert_eq!(ack.reference, "CASE-4411");
    }

    #[test]
    fn delivered_submission_settles_as_submitted() {
        let mut status = FormStatus::Submitting;
        status.finish(Ok(acknowledgement(None, 255)));
        assert_eq!(status, FormStatus::Submitted(Ack { reference: "KRV-FF".into() }));
        assert!(!status.is_editable());
    }

    #[test]
    fn local_references_are_hex_stamped() {
        assert_eq!(local_reference(255), "KRV-FF");
        assert_eq!(local_reference(-4), "KRV-0");
    }
}

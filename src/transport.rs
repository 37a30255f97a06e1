use crate::contact::{ContactResponse, ContactSubmission, ContactTransport, SubmitError};
use gloo::timers::future::TimeoutFuture;
use gloo_net::http::Request;

impl ContactTransport {
    pub async fn deliver(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
        match self {
            Self::Simulated { latency_ms } => {
                TimeoutFuture::new(*latency_ms).await;
                Ok(())
            }
            Self::Http { endpoint } => post_submission(endpoint, submission).await,
        }
    }
}

async fn post_submission(endpoint: &str, submission: &ContactSubmission) -> Result<(), SubmitError> {
    let response = Request::post(endpoint)
        .json(submission)
        .map_err(|error| SubmitError::Network(error.to_string()))?
        .send()
        .await
        .map_err(|error| SubmitError::Network(error.to_string()))?;

    if response.ok() {
        return Ok(());
    }

    let status = response.status();
    match response.json::<ContactResponse>().await {
        Ok(ContactResponse {
            error: Some(message),
            ..
        }) => Err(SubmitError::Rejected(message)),
        _ => Err(SubmitError::Status(status)),
    }
}

use std::time::Duration;

use reqwest::Response;
use stripe_sdk::StripeError;

use crate::config::REQUEST_ID_HEADER;

/// Map a `reqwest` send or read failure.
pub(crate) fn map_reqwest_error(err: reqwest::Error, timeout: Duration) -> StripeError {
    if err.is_timeout() {
        StripeError::Timeout(timeout)
    } else {
        StripeError::Transport(Box::new(err))
    }
}

pub(crate) fn request_id(response: &Response) -> Option<String> {
    response
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(ToOwned::to_owned)
}

/// Read the whole body, failing as soon as it grows past `limit` bytes.
pub(crate) async fn read_limited_body(
    mut response: Response,
    limit: usize,
    timeout: Duration,
) -> Result<Vec<u8>, StripeError> {
    if let Some(declared) = response.content_length() {
        let declared = usize::try_from(declared).unwrap_or(usize::MAX);
        if declared > limit {
            return Err(StripeError::BodyTooLarge {
                limit,
                actual: declared,
            });
        }
    }

    let mut body = Vec::new();
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| map_reqwest_error(e, timeout))?
    {
        let actual = body.len() + chunk.len();
        if actual > limit {
            return Err(StripeError::BodyTooLarge { limit, actual });
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

use stripe_sdk::StripeError;
use url::Url;

use crate::config::TransportSecurity;

/// Parse `raw` and check its scheme against the transport security mode.
pub(crate) fn validate_url(raw: &str, security: TransportSecurity) -> Result<Url, StripeError> {
    let url = Url::parse(raw).map_err(|e| StripeError::InvalidUrl {
        url: raw.to_owned(),
        reason: e.to_string(),
    })?;

    if url.host_str().is_none_or(str::is_empty) {
        return Err(StripeError::InvalidUrl {
            url: raw.to_owned(),
            reason: "missing host".to_owned(),
        });
    }

    match url.scheme() {
        "https" => Ok(url),
        "http" => match security {
            TransportSecurity::AllowInsecureHttp => Ok(url),
            TransportSecurity::TlsOnly => Err(StripeError::InvalidScheme {
                scheme: "http".to_owned(),
                reason: "HTTPS required (transport security is TlsOnly)".to_owned(),
            }),
        },
        scheme => Err(StripeError::InvalidScheme {
            scheme: scheme.to_owned(),
            reason: "only http:// and https:// schemes are supported".to_owned(),
        }),
    }
}

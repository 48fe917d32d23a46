//! Inbound request validation.
//!
//! Both fields of a request — the URL and the email address — must pass
//! format validation independently before any fetch happens. Validation
//! failures are user-facing errors; nothing is retried and nothing is
//! recorded.

use log::warn;
use url::Url;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::AnalysisError;

/// Validates and normalizes a URL.
///
/// Adds an `https://` prefix if the scheme is missing, then requires the
/// result to parse with an http/https scheme and a host. URLs longer than
/// [`MAX_URL_LENGTH`] are rejected outright.
pub fn validate_url(raw: &str) -> Result<Url, AnalysisError> {
    let raw = raw.trim();
    if raw.is_empty() || raw.len() > MAX_URL_LENGTH {
        warn!("rejecting URL of length {}", raw.len());
        return Err(AnalysisError::InvalidUrl(preview(raw)));
    }

    let normalized = if !raw.starts_with("http://") && !raw.starts_with("https://") {
        format!("https://{raw}")
    } else {
        raw.to_string()
    };
    if normalized.len() > MAX_URL_LENGTH {
        return Err(AnalysisError::InvalidUrl(preview(raw)));
    }

    let parsed = Url::parse(&normalized).map_err(|e| {
        warn!("rejecting unparseable URL: {e}");
        AnalysisError::InvalidUrl(preview(raw))
    })?;

    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_some() => Ok(parsed),
        _ => {
            warn!("rejecting URL without http(s) scheme and host");
            Err(AnalysisError::InvalidUrl(preview(raw)))
        }
    }
}

/// Validates an email address.
///
/// This intentionally checks shape, not deliverability: exactly one `@`,
/// a non-empty local part, a dot somewhere inside the domain, and no
/// whitespace or control characters.
pub fn validate_email(raw: &str) -> Result<String, AnalysisError> {
    let email = raw.trim();

    let shape_ok = {
        let mut parts = email.splitn(2, '@');
        match (parts.next(), parts.next()) {
            (Some(local), Some(domain)) => {
                !local.is_empty()
                    && !domain.contains('@')
                    && domain.len() >= 3
                    && domain.contains('.')
                    && !domain.starts_with('.')
                    && !domain.ends_with('.')
            }
            _ => false,
        }
    };

    let charset_ok = !email
        .chars()
        .any(|c| c.is_whitespace() || c.is_control());

    if shape_ok && charset_ok {
        Ok(email.to_string())
    } else {
        warn!("rejecting malformed email address");
        Err(AnalysisError::InvalidEmail(preview(email)))
    }
}

// Bounded echo of the rejected value for the user-facing message.
fn preview(value: &str) -> String {
    const MAX_PREVIEW: usize = 60;
    if value.chars().count() > MAX_PREVIEW {
        let prefix: String = value.chars().take(MAX_PREVIEW).collect();
        format!("{prefix}...")
    } else {
        value.to_string()
    }
}

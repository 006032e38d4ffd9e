use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Compiled redaction patterns. Each is a vetted literal, so construction
/// cannot fail at runtime.
struct Patterns {
    /// Compact JWS: three base64url segments joined by dots
    jwt: Regex,
    email: Regex,
    /// Opaque base64/base64url or hex runs of 16+ chars
    opaque: Regex,
}

#[allow(clippy::unwrap_used)]
static PATTERNS: LazyLock<Patterns> = LazyLock::new(|| {
    Patterns {
        jwt: Regex::new(r"\b[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]*").unwrap(),
        email: Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap(),
        opaque: Regex::new(r"\b[A-Za-z0-9+/_-]{16,}={0,2}").unwrap(),
    }
});

/// Mask an email: keep the first character of the local part and the whole
/// domain (`alice@x.com` → `a***@x.com`).
fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => match local.chars().next() {
            Some(first) => format!("{first}***@{domain}"),
            None => format!("@{domain}"),
        },
        None => email.to_string(),
    }
}

/// Redact credentials and emails from a string before it reaches the logs.
///
/// Order matters: whole JWTs first (their segments would otherwise be
/// half-matched), then emails, then any remaining opaque token runs.
pub fn redact(input: &str) -> String {
    let patterns = &*PATTERNS;
    let no_jwt = patterns.jwt.replace_all(input, "[REDACTED_TOKEN]");
    let no_email = patterns
        .email
        .replace_all(&no_jwt, |caps: &regex::Captures| mask_email(&caps[0]));
    patterns
        .opaque
        .replace_all(&no_email, "[REDACTED_TOKEN]")
        .into_owned()
}

/// Display/Debug wrapper that redacts on format.
///
/// `tracing::warn!(email = %Redacted(&email), ...)`
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

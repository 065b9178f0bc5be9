//! URL parsing helpers shared by the database and callback checks

use url::Url;

const GEN_DELIMS: &str = ":/?#[]@";
const SUB_DELIMS: &str = "!$&'()*+,;=";
const UNRESERVED_MARKS: &str = "-._~";

/// Surrounding whitespace or control characters anywhere.
///
/// The WHATWG parser trims and strips these on its own, so such input is
/// rejected up front instead of being accepted in an altered form.
fn has_stray_characters(raw: &str) -> bool {
    raw.trim() != raw || raw.chars().any(|c| c.is_ascii_control())
}

/// Parse an absolute URL.
pub fn parse_url(raw: &str) -> Option<Url> {
    if has_stray_characters(raw) {
        return None;
    }
    Url::parse(raw).ok()
}

fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || "+-.".contains(c))
}

fn is_uri_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || UNRESERVED_MARKS.contains(c)
        || GEN_DELIMS.contains(c)
        || SUB_DELIMS.contains(c)
}

fn has_valid_percent_escapes(rest: &str) -> bool {
    let bytes = rest.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes.get(i + 1..i + 3);
            if !matches!(escape, Some([a, b]) if a.is_ascii_hexdigit() && b.is_ascii_hexdigit()) {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}

/// Check a connection URL against the RFC 3986 generic syntax: a scheme,
/// then legal URI characters. Unlike [`parse_url`] this accepts libpq forms
/// such as `postgres://user@/db?host=/run/postgresql` (empty host) and
/// `postgresql://db1:5432,db2:5433/db` (host lists).
pub fn is_generic_url(raw: &str) -> bool {
    if has_stray_characters(raw) {
        return false;
    }
    let Some((scheme, rest)) = raw.split_once(':') else {
        return false;
    };
    if !is_valid_scheme(scheme) {
        return false;
    }
    if !rest.chars().all(|c| is_uri_char(c) || c == '%') || !has_valid_percent_escapes(rest) {
        return false;
    }
    match rest.strip_prefix("//") {
        Some(after) => {
            let end = after.find(['/', '?', '#']).unwrap_or(after.len());
            after[..end].matches('@').count() <= 1
        }
        None => true,
    }
}

/// Render a URL for logs with the password in its userinfo masked
pub fn redact_password(raw: &str) -> String {
    let Some(start) = raw.find("://").map(|i| i + 3) else {
        return raw.to_string();
    };
    let authority_len = raw[start..].find(['/', '?', '#']).unwrap_or(raw.len() - start);
    let authority = &raw[start..start + authority_len];
    let Some(at) = authority.rfind('@') else {
        return raw.to_string();
    };
    let Some(colon) = authority[..at].find(':') else {
        return raw.to_string();
    };
    format!(
        "{}****{}",
        &raw[..start + colon + 1],
        &raw[start + at..]
    )
}

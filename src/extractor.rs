//! Prefix extraction and canonical ordering.
//!
//! Turns the decoded payload into the list rendered into the geo table:
//! every IPv4-form prefix (lexically sorted) followed by every IPv6-form
//! prefix (lexically sorted). Family is decided by the string itself, not
//! by the field it came from. Duplicates are kept.

use serde_json::Value;
use tracing::debug;

use crate::error::{MapError, Result};

/// Top-level array holding the range entries
pub const PREFIXES_FIELD: &str = "prefixes";
pub const IPV4_FIELD: &str = "ipv4Prefix";
pub const IPV6_FIELD: &str = "ipv6Prefix";

/// Extract IPv4 and IPv6 prefixes from the payload in canonical order.
///
/// # Errors
/// * [`MapError::Schema`] if `prefixes` is missing or not an array
/// * [`MapError::EmptyResult`] if no entry carries a usable prefix
///
/// # Examples
/// ```
/// use googlebot_map::extractor::build_prefix_list;
///
/// let payload = serde_json::json!({"prefixes": [
///     {"ipv6Prefix": "2001:db8::/32"},
///     {"ipv4Prefix": "198.51.100.0/24"},
///     {"ipv4Prefix": "192.0.2.0/24"},
/// ]});
/// assert_eq!(
///     build_prefix_list(&payload).unwrap(),
///     vec!["192.0.2.0/24", "198.51.100.0/24", "2001:db8::/32"]
/// );
/// ```
pub fn build_prefix_list(payload: &Value) -> Result<Vec<String>> {
    let entries = payload
        .get(PREFIXES_FIELD)
        .and_then(Value::as_array)
        .ok_or_else(|| {
            MapError::Schema(format!("JSON payload missing '{}' array", PREFIXES_FIELD))
        })?;

    let candidates: Vec<String> = entries.iter().flat_map(entry_prefixes).collect();

    if candidates.is_empty() {
        return Err(MapError::EmptyResult(
            "No Googlebot prefixes discovered in payload".to_string(),
        ));
    }

    let (mut ipv4, mut ipv6): (Vec<String>, Vec<String>) =
        candidates.into_iter().partition(|p| !is_ipv6_form(p));
    ipv4.sort_unstable();
    ipv6.sort_unstable();

    debug!(
        "Extracted {} IPv4 and {} IPv6 prefixes from {} entries",
        ipv4.len(),
        ipv6.len(),
        entries.len()
    );

    ipv4.extend(ipv6);
    Ok(ipv4)
}

/// Usable prefixes of a single entry, IPv4 field first.
/// Non-object entries and empty or non-string values contribute nothing.
/// Numbers and booleans are skipped on purpose rather than stringified.
fn entry_prefixes(entry: &Value) -> Vec<String> {
    let Some(object) = entry.as_object() else {
        return Vec::new();
    };

    [IPV4_FIELD, IPV6_FIELD]
        .iter()
        .filter_map(|field| object.get(*field).and_then(Value::as_str))
        .filter(|prefix| !prefix.is_empty())
        .map(str::to_string)
        .collect()
}

/// IPv6 textual forms always contain a colon; IPv4 forms never do.
pub fn is_ipv6_form(prefix: &str) -> bool {
    prefix.contains(':')
}

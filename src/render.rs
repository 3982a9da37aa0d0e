//! Rendering of the two nginx include files.
//!
//! Both renderers are pure: the caller supplies the generation instant, so
//! identical inputs always produce identical bytes.

use chrono::{DateTime, Utc};
use std::path::Path;

use crate::clock::format_timestamp;

/// Variable set by the geo block for addresses inside a published range
pub const GEO_VARIABLE: &str = "$is_verified_googlebot";

/// Variable set by the user-agent map for crawler-looking clients
pub const UA_VARIABLE: &str = "$ua_is_googlebot";

/// Case-insensitive user-agent patterns for Googlebot and its sibling
/// crawlers. Static configuration, independent of the fetched ranges.
pub const USER_AGENT_PATTERNS: &[&str] = &[
    "Googlebot",
    "Google-InspectionTool",
    "GoogleOther",
    "Google-Site-Verification",
    "AdsBot-Google",
    "AdsBot-Google-Mobile",
    "APIs-Google",
    "Mediapartners-Google",
    "Feedfetcher-Google",
];

/// Render the geo table: header, then one `<prefix> 1;` line per prefix.
pub fn render_map_file(prefixes: &[String], source_url: &str, generated: DateTime<Utc>) -> String {
    let mut out = String::with_capacity(128 + prefixes.len() * 24);
    out.push_str("# Auto-generated Googlebot CIDR map\n");
    out.push_str(&format!("# Source: {}\n", source_url));
    out.push_str(&format!("# Generated: {}\n", format_timestamp(generated)));
    for prefix in prefixes {
        out.push_str(&format!("{} 1;\n", prefix));
    }
    out
}

/// Render the http-level include referencing the geo table at `map_path`.
pub fn render_http_include(map_path: &Path, generated: DateTime<Utc>) -> String {
    let mut out = String::with_capacity(768);
    out.push_str("# Auto-generated Googlebot verification rules\n");
    out.push_str(&format!("# Generated: {}\n", format_timestamp(generated)));
    out.push('\n');

    out.push_str(&format!("geo {} {{\n", GEO_VARIABLE));
    out.push_str("    default 0;\n");
    out.push_str(&format!("    include {};\n", map_path.display()));
    out.push_str("}\n\n");

    out.push_str(&format!("map $http_user_agent {} {{\n", UA_VARIABLE));
    out.push_str("    default 0;\n");
    for pattern in USER_AGENT_PATTERNS {
        out.push_str(&format!("    \"~*{}\" 1;\n", pattern));
    }
    out.push_str("}\n");
    out
}

/// Recover the prefix list from a rendered geo table.
///
/// Comment and blank lines are ignored; every other line must have the
/// `<prefix> 1;` form. Returns `None` on the first line that does not.
pub fn parse_map_file(content: &str) -> Option<Vec<String>> {
    content
        .lines()
        .filter(|line| !line.starts_with('#') && !line.trim().is_empty())
        .map(|line| line.strip_suffix(" 1;").map(str::to_string))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Clock, FixedClock};
    use std::path::PathBuf;

    fn generated() -> DateTime<Utc> {
        FixedClock::from_unix_secs(1_700_000_000).now()
    }

    fn prefixes() -> Vec<String> {
        vec![
            "192.0.2.0/24".to_string(),
            "198.51.100.0/24".to_string(),
            "2001:db8::/32".to_string(),
        ]
    }

    #[test]
    fn test_render_map_file_exact() {
        let rendered = render_map_file(
            &prefixes(),
            "https://developers.google.com/search/apis/ipranges/googlebot.json",
            generated(),
        );
        let expected = "\
# Auto-generated Googlebot CIDR map
# Source: https://developers.google.com/search/apis/ipranges/googlebot.json
# Generated: 2023-11-14 22:13:20 UTC
192.0.2.0/24 1;
198.51.100.0/24 1;
2001:db8::/32 1;
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_map_file_uses_configured_source() {
        let rendered = render_map_file(&prefixes(), "http://mirror.local/ranges.json", generated());
        assert!(rendered.contains("# Source: http://mirror.local/ranges.json\n"));
    }

    #[test]
    fn test_render_http_include_exact() {
        let rendered = render_http_include(
            &PathBuf::from("/etc/nginx/fastpanel2-includes/googlebot-verified.map"),
            generated(),
        );
        let expected = r#"# Auto-generated Googlebot verification rules
# Generated: 2023-11-14 22:13:20 UTC

geo $is_verified_googlebot {
    default 0;
    include /etc/nginx/fastpanel2-includes/googlebot-verified.map;
}

map $http_user_agent $ua_is_googlebot {
    default 0;
    "~*Googlebot" 1;
    "~*Google-InspectionTool" 1;
    "~*GoogleOther" 1;
    "~*Google-Site-Verification" 1;
    "~*AdsBot-Google" 1;
    "~*AdsBot-Google-Mobile" 1;
    "~*APIs-Google" 1;
    "~*Mediapartners-Google" 1;
    "~*Feedfetcher-Google" 1;
}
"#;
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_round_trip_recovers_prefixes() {
        let rendered = render_map_file(&prefixes(), "u", generated());
        assert_eq!(parse_map_file(&rendered), Some(prefixes()));
    }

    #[test]
    fn test_round_trip_preserves_duplicates() {
        let dupes = vec!["192.0.2.0/24".to_string(), "192.0.2.0/24".to_string()];
        let rendered = render_map_file(&dupes, "u", generated());
        assert_eq!(parse_map_file(&rendered), Some(dupes));
    }

    #[test]
    fn test_parse_map_file_rejects_foreign_lines() {
        assert_eq!(parse_map_file("# header\n192.0.2.0/24 0;\n"), None);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let a = render_map_file(&prefixes(), "u", generated());
        let b = render_map_file(&prefixes(), "u", generated());
        assert_eq!(a, b);
    }

    #[test]
    fn test_only_generated_line_depends_on_time() {
        let earlier = render_map_file(&prefixes(), "u", generated());
        let later = render_map_file(
            &prefixes(),
            "u",
            FixedClock::from_unix_secs(1_800_000_000).now(),
        );
        let differing: Vec<_> = earlier
            .lines()
            .zip(later.lines())
            .filter(|(a, b)| a != b)
            .collect();
        assert_eq!(differing.len(), 1);
        assert!(differing[0].0.starts_with("# Generated: "));
    }
}

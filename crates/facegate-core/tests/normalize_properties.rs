//! Property tests for endpoint normalization.

use facegate_core::{normalize_url, Endpoint};
use proptest::prelude::*;

/// Inputs that look like what people paste into a config field.
fn endpoint_like() -> impl Strategy<Value = String> {
    let scheme = prop_oneof![
        Just(""),
        Just("http://"),
        Just("https://"),
        Just("HTTP://"),
        Just("HTTPS://"),
        Just("hTtPs://"),
    ];
    let host = "[a-zA-Z0-9.-]{0,12}(:[0-9]{1,5})?(/[a-zA-Z0-9_/]{0,8})?";
    let pad = "[ \t\n]{0,3}";
    let slashes = "/{0,4}";
    (pad, scheme, host, slashes, pad).prop_map(|(lead, scheme, host, slashes, trail)| {
        format!("{}{}{}{}{}", lead, scheme, host, slashes, trail)
    })
}

/// Anything past the scheme; `https://` alone is the blank-input result.
fn has_host(normalized: &str) -> bool {
    normalized.len() > "https://".len()
}

proptest! {
    #[test]
    fn never_panics(input in any::<String>()) {
        let _ = normalize_url(&input);
    }

    #[test]
    fn always_secure_scheme(input in any::<String>()) {
        let out = normalize_url(&input);
        prop_assert!(out.get(..8).is_some_and(|s| s.eq_ignore_ascii_case("https://")));
        prop_assert!(!out.get(..7).is_some_and(|s| s.eq_ignore_ascii_case("http://")));
    }

    #[test]
    fn no_trailing_slash_when_host_present(input in endpoint_like()) {
        let out = normalize_url(&input);
        prop_assume!(has_host(&out));
        prop_assert!(!out.ends_with('/'));
    }

    #[test]
    fn idempotent_when_host_present(input in endpoint_like()) {
        let once = normalize_url(&input);
        prop_assume!(has_host(&once));
        prop_assert_eq!(normalize_url(&once), once);
    }

    // Slash stripping runs after trimming, so "a /" keeps the space that sat
    // in front of the slash; a second pass would then trim it.
    #[test]
    fn idempotent_on_arbitrary_text(input in any::<String>()) {
        let once = normalize_url(&input);
        prop_assume!(has_host(&once));
        prop_assume!(!once.ends_with(char::is_whitespace));
        prop_assert_eq!(normalize_url(&once), once);
    }

    #[test]
    fn content_after_scheme_preserved(host in "[a-zA-Z0-9.]{1,12}") {
        prop_assert_eq!(normalize_url(&format!("HTTP://{}", host)), format!("https://{}", host));
        prop_assert_eq!(normalize_url(&host), format!("https://{}", host));
    }

    #[test]
    fn endpoint_matches_normalizer(input in endpoint_like()) {
        let endpoint = Endpoint::parse(&input);
        prop_assert_eq!(endpoint.as_str(), normalize_url(&input));
        prop_assert_eq!(endpoint.is_empty_host(), !has_host(endpoint.as_str()));
    }
}

#[test]
fn documented_scenarios() {
    let cases = [
        ("example.com", "https://example.com"),
        ("  example.com/  ", "https://example.com"),
        ("http://example.com", "https://example.com"),
        ("HTTPS://Example.com///", "HTTPS://Example.com"),
        ("https://example.com", "https://example.com"),
        ("   ", "https://"),
    ];

    for (input, expected) in cases {
        assert_eq!(normalize_url(input), expected, "input {:?}", input);
    }
}

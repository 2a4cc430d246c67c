use std::{collections::HashMap, time::Duration};

use spstats::Error;
use spstats::config::*;

// Helper function to build a lookup over fixed values
fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let values: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| values.get(key).cloned()
}

const CREDENTIALS: [(&str, &str); 2] = [
    ("SPOTIFY_API_AUTH_CLIENT_ID", "id"),
    ("SPOTIFY_API_AUTH_CLIENT_SECRET", "secret"),
];

#[test]
fn test_defaults() {
    let config = Config::from_lookup(lookup(&CREDENTIALS)).unwrap();

    assert_eq!(config.client_id, "id");
    assert_eq!(config.client_secret, "secret");
    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.token_url, DEFAULT_TOKEN_URL);
    assert_eq!(config.page_concurrency, DEFAULT_PAGE_CONCURRENCY);
    assert_eq!(
        config.request_timeout,
        Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
    );
}

#[test]
fn test_overrides() {
    let mut pairs = CREDENTIALS.to_vec();
    pairs.extend([
        ("SPOTIFY_API_URL", "http://localhost:9000/v1/"),
        ("SPOTIFY_API_TOKEN_URL", "http://localhost:9000/token"),
        ("SPSTATS_PAGE_CONCURRENCY", "2"),
        ("SPSTATS_REQUEST_TIMEOUT_SECS", "5"),
    ]);

    let config = Config::from_lookup(lookup(&pairs)).unwrap();

    // Trailing slash is dropped so paths can be appended
    assert_eq!(config.api_url, "http://localhost:9000/v1");
    assert_eq!(config.token_url, "http://localhost:9000/token");
    assert_eq!(config.page_concurrency, 2);
    assert_eq!(config.request_timeout, Duration::from_secs(5));
}

#[test]
fn test_missing_credentials() {
    let result = Config::from_lookup(lookup(&[("SPOTIFY_API_AUTH_CLIENT_ID", "id")]));
    assert!(matches!(
        result,
        Err(Error::MissingConfig("SPOTIFY_API_AUTH_CLIENT_SECRET"))
    ));

    let result = Config::from_lookup(lookup(&[
        ("SPOTIFY_API_AUTH_CLIENT_ID", "  "),
        ("SPOTIFY_API_AUTH_CLIENT_SECRET", "secret"),
    ]));
    assert!(matches!(
        result,
        Err(Error::MissingConfig("SPOTIFY_API_AUTH_CLIENT_ID"))
    ));
}

#[test]
fn test_invalid_numbers() {
    for (key, value) in [
        ("SPSTATS_PAGE_CONCURRENCY", "0"),
        ("SPSTATS_PAGE_CONCURRENCY", "many"),
        ("SPSTATS_REQUEST_TIMEOUT_SECS", "-1"),
        ("SPSTATS_REQUEST_TIMEOUT_SECS", "0"),
    ] {
        let mut pairs = CREDENTIALS.to_vec();
        pairs.push((key, value));

        match Config::from_lookup(lookup(&pairs)) {
            Err(Error::InvalidConfig { key: k, value: v }) => {
                assert_eq!(k, key);
                assert_eq!(v, value);
            }
            other => panic!("expected InvalidConfig for {key}={value}, got {other:?}"),
        }
    }
}

#[test]
fn test_builder_helpers() {
    let config = Config::new("id", "secret")
        .with_api_url("http://127.0.0.1:1234/")
        .with_token_url("http://127.0.0.1:1234/api/token")
        .with_page_concurrency(0)
        .with_request_timeout(Duration::from_millis(250));

    assert_eq!(config.api_url, "http://127.0.0.1:1234");
    assert_eq!(config.token_url, "http://127.0.0.1:1234/api/token");
    assert_eq!(config.page_concurrency, 1);
    assert_eq!(config.request_timeout, Duration::from_millis(250));

    let config = Config::new("id", "secret").with_request_timeout(Duration::ZERO);
    assert_eq!(config.request_timeout, Duration::from_millis(1));
}

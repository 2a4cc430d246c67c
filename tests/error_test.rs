use reqwest::StatusCode;
use spstats::{Error, Res};

// Helper function returning the crate-level alias
fn parse(input: &str) -> Res<String> {
    spstats::utils::parse_playlist_id(input)
}

#[test]
fn test_res_is_library_result() {
    let result: spstats::error::Result<String> = parse("37i9dQZF1DXcBWIGoYBM5M");
    assert_eq!(result.unwrap(), "37i9dQZF1DXcBWIGoYBM5M");
}

#[test]
fn test_error_messages() {
    let cases = [
        (
            Error::Authentication("token endpoint returned 400".to_string()),
            "authentication failed: token endpoint returned 400",
        ),
        (
            Error::Status {
                url: "http://localhost/playlists/pl1".to_string(),
                status: StatusCode::NOT_FOUND,
            },
            "http://localhost/playlists/pl1 returned status 404 Not Found",
        ),
        (
            Error::MissingConfig("SPOTIFY_API_AUTH_CLIENT_ID"),
            "SPOTIFY_API_AUTH_CLIENT_ID must be set",
        ),
        (
            Error::InvalidConfig {
                key: "SPSTATS_REQUEST_TIMEOUT_SECS",
                value: "0".to_string(),
            },
            "invalid value for SPSTATS_REQUEST_TIMEOUT_SECS: 0",
        ),
        (
            Error::InvalidPlaylist("not a playlist".to_string()),
            "invalid playlist reference: not a playlist",
        ),
        (Error::Cancelled, "operation cancelled"),
    ];

    for (error, expected) in cases {
        assert_eq!(error.to_string(), expected);
    }
}

#[test]
fn test_invalid_playlist_is_reported() {
    assert!(matches!(parse("spotify:album:abc"), Err(Error::InvalidPlaylist(_))));
}

use reqwest::header::{AUTHORIZATION, HeaderName};
use serde_json::Map;

use souq_providers::Error;

#[test]
fn builds_bearer_auth_header() {
	let headers =
		souq_providers::auth_headers("secret", &Map::new()).expect("Failed to build headers.");
	let value = headers.get(AUTHORIZATION).expect("Missing authorization header.");

	assert_eq!(value, "Bearer secret");
}

#[test]
fn forwards_default_headers() {
	let mut defaults = Map::new();

	defaults.insert("x-goog-api-client".to_string(), serde_json::json!("souq/0.1"));

	let headers = souq_providers::auth_headers("secret", &defaults).expect("Failed to build headers.");

	assert_eq!(
		headers.get(HeaderName::from_static("x-goog-api-client")).expect("Missing header."),
		"souq/0.1"
	);
}

#[test]
fn rejects_non_string_default_headers() {
	let mut defaults = Map::new();

	defaults.insert("x-retries".to_string(), serde_json::json!(3));

	let err = souq_providers::auth_headers("secret", &defaults).expect_err("Expected error.");

	assert!(matches!(err, Error::InvalidConfig { .. }));
}

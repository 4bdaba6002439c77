use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use toml::Value;

use souq_config::{Config, Error, Intent};

const SAMPLE_CONFIG_TOML: &str = include_str!("fixtures/sample_config.toml");

fn sample_toml_with(section: &str, key: &str, value: Value) -> String {
	let mut root: Value =
		toml::from_str(SAMPLE_CONFIG_TOML).expect("Failed to parse sample config.");
	let mut table = root.as_table_mut().expect("Sample config must be a table.");

	for part in section.split('.') {
		table = table
			.get_mut(part)
			.and_then(Value::as_table_mut)
			.unwrap_or_else(|| panic!("Sample config must include [{section}]."));
	}

	table.insert(key.to_string(), value);

	toml::to_string(&root).expect("Failed to render sample config.")
}

fn write_temp_config(payload: String) -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("System time must be valid.")
		.as_nanos();
	let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);
	let pid = std::process::id();
	let mut path = env::temp_dir();

	path.push(format!("souq_config_test_{nanos}_{pid}_{ordinal}.toml"));

	fs::write(&path, payload).expect("Failed to write test config.");

	path
}

fn base_config() -> Config {
	toml::from_str(SAMPLE_CONFIG_TOML).expect("Failed to parse test config.")
}

fn expect_validation(cfg: &Config, needle: &str) {
	let err = souq_config::validate(cfg).expect_err("Expected validation error.");

	assert!(matches!(err, Error::Validation { .. }), "Unexpected error kind: {err:?}");
	assert!(err.to_string().contains(needle), "Unexpected error: {err}");
}

#[test]
fn sample_config_loads() {
	let path = write_temp_config(SAMPLE_CONFIG_TOML.to_string());
	let result = souq_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	let cfg = result.expect("Sample config must be valid.");

	assert_eq!(cfg.storage.qdrant.offers_collection, "providing_services");
	assert_eq!(cfg.search.candidate_pool, 100);
	assert_eq!(cfg.search.top_k, 5);
	assert!((cfg.search.min_score - 0.75).abs() < f32::EPSILON);
	assert!(cfg.intent.is_none());
}

#[test]
fn search_section_defaults_when_omitted() {
	let mut root: Value = toml::from_str(SAMPLE_CONFIG_TOML).expect("Failed to parse config.");

	root.as_table_mut().expect("Sample config must be a table.").remove("search");

	let cfg: Config = toml::from_str(&toml::to_string(&root).expect("Failed to render config."))
		.expect("Config without [search] must parse.");

	assert_eq!(cfg.search.candidate_pool, 100);
	assert_eq!(cfg.search.top_k, 5);
	assert_eq!(cfg.search.timeout_ms, 10_000);
	assert!(souq_config::validate(&cfg).is_ok());
}

#[test]
fn missing_file_reports_path() {
	let path = env::temp_dir().join("souq_config_missing_file.toml");
	let err = souq_config::load(&path).expect_err("Expected read error.");

	assert!(matches!(err, Error::ReadConfig { .. }), "Unexpected error: {err:?}");
}

#[test]
fn malformed_file_is_a_parse_error() {
	let path = write_temp_config("[service\nhttp_bind = ".to_string());
	let result = souq_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	assert!(matches!(result, Err(Error::ParseConfig { .. })));
}

#[test]
fn min_score_must_be_normalized() {
	let payload = sample_toml_with("search", "min_score", Value::Float(1.5));
	let path = write_temp_config(payload);
	let result = souq_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	let err = result.expect_err("Expected min_score validation error.");

	assert!(
		err.to_string().contains("search.min_score must be in the range 0.0-1.0."),
		"Unexpected error: {err}"
	);
}

#[test]
fn min_score_must_be_finite() {
	let mut cfg = base_config();

	cfg.search.min_score = f32::NAN;

	expect_validation(&cfg, "search.min_score must be a finite number.");
}

#[test]
fn embedding_dimensions_must_match_vector_dim() {
	let mut cfg = base_config();

	cfg.storage.qdrant.vector_dim = 768;

	expect_validation(&cfg, "providers.embedding.dimensions must match storage.qdrant.vector_dim.");
}

#[test]
fn pools_must_use_distinct_collections() {
	let mut cfg = base_config();

	cfg.storage.qdrant.requests_collection = cfg.storage.qdrant.offers_collection.clone();

	expect_validation(&cfg, "must differ.");
}

#[test]
fn collection_names_are_trimmed_on_load() {
	let payload = sample_toml_with(
		"storage.qdrant",
		"requests_collection",
		Value::String("  requested_services \n".to_string()),
	);
	let path = write_temp_config(payload);
	let result = souq_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	let cfg = result.expect("Trimmed collection name must be valid.");

	assert_eq!(cfg.storage.qdrant.requests_collection, "requested_services");
}

#[test]
fn candidate_pool_must_cover_top_k() {
	let mut cfg = base_config();

	cfg.search.top_k = 20;
	cfg.search.candidate_pool = 10;

	expect_validation(&cfg, "search.candidate_pool must be at least search.top_k.");

	cfg = base_config();
	cfg.search.top_k = 0;

	expect_validation(&cfg, "search.top_k must be greater than zero.");
}

#[test]
fn timeout_must_be_positive() {
	let mut cfg = base_config();

	cfg.search.timeout_ms = 0;

	expect_validation(&cfg, "search.timeout_ms must be greater than zero.");
}

#[test]
fn provider_keys_must_be_present() {
	let mut cfg = base_config();

	cfg.providers.summarizer.api_key = "   ".to_string();

	expect_validation(&cfg, "Provider summarizer api_key must be non-empty.");
}

#[test]
fn intent_tables_reject_blank_phrases() {
	let mut cfg = base_config();

	cfg.intent = Some(Intent {
		provider_phrases: vec!["looking for".to_string()],
		requester_phrases: vec![" ".to_string()],
	});

	expect_validation(&cfg, "intent.requester_phrases must not contain blank phrases.");

	cfg.intent =
		Some(Intent { provider_phrases: Vec::new(), requester_phrases: vec!["who needs".to_string()] });

	expect_validation(&cfg, "intent.provider_phrases must be non-empty.");
}

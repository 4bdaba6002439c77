use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	pub providers: Providers,
	#[serde(default)]
	pub search: Search,
	/// Optional. Replaces the built-in intent phrase tables when present.
	pub intent: Option<Intent>,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	pub qdrant: Qdrant,
}

#[derive(Debug, Deserialize)]
pub struct Qdrant {
	pub url: String,
	/// Collection holding service offers (records of type "providing").
	pub offers_collection: String,
	/// Collection holding service requests (records of type "request").
	pub requests_collection: String,
	pub vector_dim: u32,
}

#[derive(Debug, Deserialize)]
pub struct Providers {
	pub embedding: EmbeddingProviderConfig,
	pub summarizer: LlmProviderConfig,
}

#[derive(Debug, Deserialize)]
pub struct EmbeddingProviderConfig {
	pub provider_id: String,
	pub api_base: String,
	pub api_key: String,
	pub path: String,
	pub model: String,
	pub dimensions: u32,
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct LlmProviderConfig {
	pub provider_id: String,
	pub api_base: String,
	pub api_key: String,
	pub path: String,
	pub model: String,
	pub temperature: f32,
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Search {
	/// Approximate neighbours considered per pool before the top-k cut.
	pub candidate_pool: u32,
	/// Candidates returned per pool.
	pub top_k: u32,
	/// Minimum normalized similarity the top-ranked candidate must reach.
	pub min_score: f32,
	/// Deadline covering both pool queries.
	pub timeout_ms: u64,
}
impl Default for Search {
	fn default() -> Self {
		Self { candidate_pool: 100, top_k: 5, min_score: 0.75, timeout_ms: 10_000 }
	}
}

#[derive(Debug, Deserialize)]
pub struct Intent {
	pub provider_phrases: Vec<String>,
	pub requester_phrases: Vec<String>,
}

mod error;
mod types;

pub use error::{Error, Result};
pub use types::{
	Config, EmbeddingProviderConfig, Intent, LlmProviderConfig, Providers, Qdrant, Search, Service,
	Storage,
};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.providers.embedding.dimensions == 0 {
		return Err(Error::Validation {
			message: "providers.embedding.dimensions must be greater than zero.".to_string(),
		});
	}
	if cfg.providers.embedding.dimensions != cfg.storage.qdrant.vector_dim {
		return Err(Error::Validation {
			message: "providers.embedding.dimensions must match storage.qdrant.vector_dim."
				.to_string(),
		});
	}

	let qdrant = &cfg.storage.qdrant;

	for (label, value) in [
		("storage.qdrant.offers_collection", &qdrant.offers_collection),
		("storage.qdrant.requests_collection", &qdrant.requests_collection),
	] {
		if value.trim().is_empty() {
			return Err(Error::Validation { message: format!("{label} must be non-empty.") });
		}
	}

	if qdrant.offers_collection == qdrant.requests_collection {
		return Err(Error::Validation {
			message:
				"storage.qdrant.offers_collection and storage.qdrant.requests_collection must differ."
					.to_string(),
		});
	}
	if cfg.search.top_k == 0 {
		return Err(Error::Validation {
			message: "search.top_k must be greater than zero.".to_string(),
		});
	}
	if cfg.search.candidate_pool < cfg.search.top_k {
		return Err(Error::Validation {
			message: "search.candidate_pool must be at least search.top_k.".to_string(),
		});
	}
	if !cfg.search.min_score.is_finite() {
		return Err(Error::Validation {
			message: "search.min_score must be a finite number.".to_string(),
		});
	}
	if !(0.0..=1.0).contains(&cfg.search.min_score) {
		return Err(Error::Validation {
			message: "search.min_score must be in the range 0.0-1.0.".to_string(),
		});
	}
	if cfg.search.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "search.timeout_ms must be greater than zero.".to_string(),
		});
	}
	if !cfg.providers.summarizer.temperature.is_finite() {
		return Err(Error::Validation {
			message: "providers.summarizer.temperature must be a finite number.".to_string(),
		});
	}

	for (label, key) in [
		("embedding", &cfg.providers.embedding.api_key),
		("summarizer", &cfg.providers.summarizer.api_key),
	] {
		if key.trim().is_empty() {
			return Err(Error::Validation {
				message: format!("Provider {label} api_key must be non-empty."),
			});
		}
	}

	if let Some(intent) = cfg.intent.as_ref() {
		validate_intent(intent)?;
	}

	Ok(())
}

fn validate_intent(intent: &Intent) -> Result<()> {
	for (label, phrases) in [
		("intent.provider_phrases", &intent.provider_phrases),
		("intent.requester_phrases", &intent.requester_phrases),
	] {
		if phrases.is_empty() {
			return Err(Error::Validation { message: format!("{label} must be non-empty.") });
		}
		if phrases.iter().any(|phrase| phrase.trim().is_empty()) {
			return Err(Error::Validation {
				message: format!("{label} must not contain blank phrases."),
			});
		}
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	cfg.storage.qdrant.offers_collection = cfg.storage.qdrant.offers_collection.trim().to_string();
	cfg.storage.qdrant.requests_collection =
		cfg.storage.qdrant.requests_collection.trim().to_string();

	if let Some(intent) = cfg.intent.as_mut() {
		for phrase in intent.provider_phrases.iter_mut().chain(intent.requester_phrases.iter_mut()) {
			*phrase = phrase.trim().to_string();
		}
	}
}

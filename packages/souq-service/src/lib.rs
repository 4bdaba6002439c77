pub mod ask;
pub mod embed;
pub mod summary;

mod error;
mod fetch;

pub use ask::{AskRequest, AskResponse};
pub use embed::{EmbedRequest, EmbedResponse};
pub use error::{Error, Result};
pub use summary::SummaryContext;

use std::{future::Future, pin::Pin, sync::Arc};

use souq_config::{Config, EmbeddingProviderConfig, LlmProviderConfig};
use souq_domain::{Candidate, IntentClassifier, KeywordClassifier, Pool, present};
use souq_providers::{embedding, summarizer};
use souq_storage::qdrant::QdrantStore;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub trait EmbeddingProvider
where
	Self: Send + Sync,
{
	fn embed<'a>(
		&'a self,
		cfg: &'a EmbeddingProviderConfig,
		texts: &'a [String],
	) -> BoxFuture<'a, Result<Vec<Vec<f32>>>>;
}

/// Similarity search over one pool. Implementations return at most `top_k` candidates, best first.
pub trait VectorStore
where
	Self: Send + Sync,
{
	fn query<'a>(
		&'a self,
		pool: Pool,
		vector: &'a [f32],
		candidate_pool: u32,
		top_k: u32,
	) -> BoxFuture<'a, Result<Vec<Candidate>>>;
}

pub trait Summarizer
where
	Self: Send + Sync,
{
	fn summarize<'a>(
		&'a self,
		cfg: &'a LlmProviderConfig,
		context: &'a SummaryContext,
	) -> BoxFuture<'a, Result<String>>;
}

#[derive(Clone)]
pub struct Providers {
	pub embedding: Arc<dyn EmbeddingProvider>,
	pub summarizer: Arc<dyn Summarizer>,
}
impl Providers {
	pub fn new(embedding: Arc<dyn EmbeddingProvider>, summarizer: Arc<dyn Summarizer>) -> Self {
		Self { embedding, summarizer }
	}
}
impl Default for Providers {
	fn default() -> Self {
		let provider = Arc::new(DefaultProviders);

		Self { embedding: provider.clone(), summarizer: provider }
	}
}

pub struct MatchService {
	pub cfg: Config,
	pub store: Arc<dyn VectorStore>,
	pub providers: Providers,
	pub classifier: Arc<dyn IntentClassifier>,
}
impl MatchService {
	pub fn new(cfg: Config, store: QdrantStore) -> Result<Self> {
		Self::with_providers(cfg, Arc::new(store), Providers::default())
	}

	/// Uses the phrase tables from `cfg.intent`, or the built-in ones when absent.
	pub fn with_providers(
		cfg: Config,
		store: Arc<dyn VectorStore>,
		providers: Providers,
	) -> Result<Self> {
		let classifier = KeywordClassifier::from_config(cfg.intent.as_ref())
			.map_err(|err| Error::InvalidConfig { message: err.to_string() })?;

		Ok(Self { cfg, store, providers, classifier: Arc::new(classifier) })
	}

	pub fn with_classifier(mut self, classifier: Arc<dyn IntentClassifier>) -> Self {
		self.classifier = classifier;

		self
	}

	pub(crate) async fn embed_query(&self, text: &str) -> Result<Vec<f32>> {
		let embeddings =
			self.providers.embedding.embed(&self.cfg.providers.embedding, &[text.to_string()]).await?;
		let Some(vector) = embeddings.into_iter().next() else {
			return Err(Error::Embedding {
				message: "Embedding provider returned no vectors.".to_string(),
			});
		};

		if vector.len() != self.cfg.storage.qdrant.vector_dim as usize {
			return Err(Error::Embedding {
				message: format!(
					"Embedding vector has {} dimensions, expected {}.",
					vector.len(),
					self.cfg.storage.qdrant.vector_dim
				),
			});
		}

		Ok(vector)
	}
}

struct DefaultProviders;
impl EmbeddingProvider for DefaultProviders {
	fn embed<'a>(
		&'a self,
		cfg: &'a EmbeddingProviderConfig,
		texts: &'a [String],
	) -> BoxFuture<'a, Result<Vec<Vec<f32>>>> {
		Box::pin(async move {
			embedding::embed(cfg, texts)
				.await
				.map_err(|err| Error::Embedding { message: err.to_string() })
		})
	}
}
impl Summarizer for DefaultProviders {
	fn summarize<'a>(
		&'a self,
		cfg: &'a LlmProviderConfig,
		context: &'a SummaryContext,
	) -> BoxFuture<'a, Result<String>> {
		Box::pin(async move {
			if let Some(message) =
				present::no_match_message(context.status, &context.query, context.intent)
			{
				return Ok(message);
			}

			let messages = summary::build_summary_messages(context);

			summarizer::summarize(cfg, &messages)
				.await
				.map_err(|err| Error::Summarizer { message: err.to_string() })
		})
	}
}

impl VectorStore for QdrantStore {
	fn query<'a>(
		&'a self,
		pool: Pool,
		vector: &'a [f32],
		candidate_pool: u32,
		top_k: u32,
	) -> BoxFuture<'a, Result<Vec<Candidate>>> {
		Box::pin(async move {
			QdrantStore::query(self, pool, vector, candidate_pool, top_k)
				.await
				.map_err(|err| Error::Query { pool, message: err.to_string() })
		})
	}
}

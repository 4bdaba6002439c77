pub const DENSE_VECTOR_NAME: &str = "dense";

use qdrant_client::qdrant::{
	PayloadIncludeSelector, Query, QueryPointsBuilder, SearchParamsBuilder,
	with_payload_selector::SelectorOptions,
};

use souq_domain::{Candidate, Pool};

use crate::{Error, Result, payload};

/// Handle to the two pool collections.
///
/// Built once at startup and shared by every request; the underlying gRPC channel is released when
/// the store is dropped.
pub struct QdrantStore {
	pub client: qdrant_client::Qdrant,
	pub offers_collection: String,
	pub requests_collection: String,
	pub vector_dim: u32,
}
impl QdrantStore {
	pub fn new(cfg: &souq_config::Qdrant) -> Result<Self> {
		let client = qdrant_client::Qdrant::from_url(&cfg.url).build()?;

		Ok(Self {
			client,
			offers_collection: cfg.offers_collection.clone(),
			requests_collection: cfg.requests_collection.clone(),
			vector_dim: cfg.vector_dim,
		})
	}

	pub fn collection(&self, pool: Pool) -> &str {
		match pool {
			Pool::Offers => &self.offers_collection,
			Pool::Requests => &self.requests_collection,
		}
	}

	/// Nearest neighbours of `vector` in `pool`.
	///
	/// `candidate_pool` bounds the approximate search (HNSW `ef`); at most `top_k` candidates are
	/// returned, best first, with `pool` set on each.
	pub async fn query(
		&self,
		pool: Pool,
		vector: &[f32],
		candidate_pool: u32,
		top_k: u32,
	) -> Result<Vec<Candidate>> {
		if vector.len() != self.vector_dim as usize {
			return Err(Error::InvalidArgument(format!(
				"Query vector has {} dimensions, expected {}.",
				vector.len(),
				self.vector_dim
			)));
		}

		let search = QueryPointsBuilder::new(self.collection(pool))
			.query(Query::new_nearest(vector.to_vec()))
			.using(DENSE_VECTOR_NAME)
			.params(SearchParamsBuilder::default().hnsw_ef(u64::from(candidate_pool)))
			.limit(u64::from(top_k))
			.with_payload(projected_payload())
			.with_vectors(false);
		let response = self.client.query(search).await?;
		let candidates = payload::candidates_from_points(&response.result, pool);

		tracing::debug!(
			pool = pool.as_str(),
			collection = self.collection(pool),
			count = candidates.len(),
			"Pool query finished."
		);

		Ok(candidates)
	}
}

fn projected_payload() -> SelectorOptions {
	SelectorOptions::Include(PayloadIncludeSelector {
		fields: payload::PROJECTED_FIELDS.iter().map(|field| field.to_string()).collect(),
	})
}

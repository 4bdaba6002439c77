use std::time::Duration;

use souq_config::Search;
use souq_domain::{Candidate, Pool};

use crate::{Error, Result, VectorStore};

/// Queries both pools concurrently with the same vector.
///
/// Fails as soon as either query fails; the sibling is dropped. Both queries share one deadline of
/// `search.timeout_ms`. Every returned candidate carries the pool it was fetched from.
pub(crate) async fn fetch_pools(
	store: &dyn VectorStore,
	vector: &[f32],
	search: &Search,
) -> Result<(Vec<Candidate>, Vec<Candidate>)> {
	let query_pool = move |pool: Pool| async move {
		let mut candidates =
			store.query(pool, vector, search.candidate_pool, search.top_k).await?;

		for candidate in &mut candidates {
			candidate.pool = pool;
		}

		tracing::debug!(pool = pool.as_str(), count = candidates.len(), "Pool query returned.");

		Ok::<_, Error>(candidates)
	};
	let joined = async { tokio::try_join!(query_pool(Pool::Offers), query_pool(Pool::Requests)) };

	tokio::time::timeout(Duration::from_millis(search.timeout_ms), joined)
		.await
		.map_err(|_| Error::Timeout { timeout_ms: search.timeout_ms })?
}

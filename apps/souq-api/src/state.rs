use std::sync::Arc;

use souq_service::MatchService;
use souq_storage::qdrant::QdrantStore;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<MatchService>,
}
impl AppState {
	pub fn new(config: souq_config::Config) -> color_eyre::Result<Self> {
		let qdrant = QdrantStore::new(&config.storage.qdrant)?;
		let service = MatchService::new(config, qdrant)?;

		Ok(Self::from_service(service))
	}

	pub fn from_service(service: MatchService) -> Self {
		Self { service: Arc::new(service) }
	}
}

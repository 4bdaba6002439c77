use serde::{Deserialize, Serialize};

use crate::{Error, MatchService, Result};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EmbedRequest {
	/// A missing field is treated like blank text.
	#[serde(default)]
	pub text: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EmbedResponse {
	pub embedding: Vec<f32>,
}

impl MatchService {
	pub async fn embed_text(&self, req: EmbedRequest) -> Result<EmbedResponse> {
		let text = req.text.trim();

		if text.is_empty() {
			return Err(Error::InvalidRequest { message: "text must be non-empty.".to_string() });
		}

		Ok(EmbedResponse { embedding: self.embed_query(text).await? })
	}
}

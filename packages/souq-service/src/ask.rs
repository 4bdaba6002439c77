use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use souq_domain::{Intent, MatchStatus, PresentedEntry, evaluate};

use crate::{Error, MatchService, Result, SummaryContext, fetch};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AskRequest {
	/// A missing field is treated like blank text.
	#[serde(default)]
	pub text: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AskResponse {
	pub answer: String,
	pub intent: Intent,
	pub status: MatchStatus,
	pub top_score: Option<f32>,
	pub entries: Vec<PresentedEntry>,
}

impl MatchService {
	/// Matches `req.text` against both pools and summarizes the outcome.
	///
	/// A blank query fails before any collaborator is called. No-match outcomes are reported
	/// through `status`, never as errors.
	pub async fn ask(&self, req: AskRequest) -> Result<AskResponse> {
		let query = req.text.trim();

		if query.is_empty() {
			return Err(Error::InvalidRequest { message: "text must be non-empty.".to_string() });
		}

		let intent = self.classifier.classify(query);
		let vector = self.embed_query(query).await?;
		let (offers, requests) =
			fetch::fetch_pools(self.store.as_ref(), &vector, &self.cfg.search).await?;
		let evaluation = evaluate(
			offers,
			requests,
			intent,
			self.cfg.search.min_score,
			OffsetDateTime::now_utc(),
		);

		tracing::info!(
			intent = intent.as_str(),
			status = evaluation.status.as_str(),
			top_score = ?evaluation.top_score,
			count = evaluation.entries.len(),
			"Match evaluated."
		);

		let context = SummaryContext {
			query: query.to_string(),
			intent,
			status: evaluation.status,
			entries: evaluation.entries,
		};
		let answer =
			self.providers.summarizer.summarize(&self.cfg.providers.summarizer, &context).await?;

		Ok(AskResponse {
			answer,
			intent,
			status: context.status,
			top_score: evaluation.top_score,
			entries: context.entries,
		})
	}
}

use serde_json::Value;

use souq_domain::{Intent, MatchStatus, PresentedEntry, present};

/// Everything the summarizer sees about one match.
#[derive(Clone, Debug)]
pub struct SummaryContext {
	pub query: String,
	pub intent: Intent,
	pub status: MatchStatus,
	/// Presented entries in rank order. Empty unless `status` is `Matched`.
	pub entries: Vec<PresentedEntry>,
}

pub fn build_summary_messages(context: &SummaryContext) -> Vec<Value> {
	let system_prompt = "You answer questions about a neighbourhood services board. \
Use only the services listed by the user and never invent details. \
List every available contact for each service, and write \"none\" when a service has no contact. \
Reply in the same language and dialect as the question, in a warm and polite tone. \
Start each point with \u{1F539} and never with *. Make the heading bold. \
If a date falls within the current week, also name the weekday.";
	let looking_for = match context.intent {
		Intent::ProviderSeeking => "people offering this service",
		Intent::RequesterSeeking => "people asking for this service",
		Intent::Unknown => "related services",
	};
	let user_prompt = format!(
		"Services:\n{services}\n\nThe user is looking for {looking_for}.\nQuestion: \"{query}\"",
		services = present::render_entries(&context.entries),
		query = context.query,
	);

	vec![
		serde_json::json!({ "role": "system", "content": system_prompt }),
		serde_json::json!({ "role": "user", "content": user_prompt }),
	]
}

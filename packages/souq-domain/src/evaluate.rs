use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
	candidate::Candidate,
	filter::{self, Filtered},
	gate::{self, Gate, Rejection},
	intent::Intent,
	present::{self, PresentedEntry},
	ranking,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
	Matched,
	/// Neither pool returned anything.
	NoCandidates,
	/// Candidates exist, but none of the kind the intent asks for.
	NoIntentMatch,
	/// The best surviving candidate scored under the threshold.
	BelowThreshold,
}
impl MatchStatus {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Matched => "matched",
			Self::NoCandidates => "no_candidates",
			Self::NoIntentMatch => "no_intent_match",
			Self::BelowThreshold => "below_threshold",
		}
	}
}

#[derive(Clone, Debug)]
pub struct Evaluation {
	pub status: MatchStatus,
	/// Score of the candidate the relevance gate looked at, if any.
	pub top_score: Option<f32>,
	pub entries: Vec<PresentedEntry>,
}
impl Evaluation {
	fn empty(status: MatchStatus) -> Self {
		Self { status, top_score: None, entries: Vec::new() }
	}
}

/// Runs merge, intent filter, relevance gate and presentation over the two pools.
pub fn evaluate(
	offers: Vec<Candidate>,
	requests: Vec<Candidate>,
	intent: Intent,
	threshold: f32,
	now: OffsetDateTime,
) -> Evaluation {
	let ranked = ranking::merge(offers, requests);
	let filtered = match filter::filter_by_intent(ranked, intent) {
		Filtered::Matches(candidates) => candidates,
		Filtered::NoCandidates => return Evaluation::empty(MatchStatus::NoCandidates),
		Filtered::NoIntentMatch => return Evaluation::empty(MatchStatus::NoIntentMatch),
	};

	match gate::gate(filtered, threshold) {
		Gate::Accepted(accepted) => Evaluation {
			status: MatchStatus::Matched,
			top_score: accepted.first().map(|candidate| candidate.score),
			entries: present::present(&accepted, now),
		},
		Gate::Rejected(Rejection::BelowThreshold { top_score }) => Evaluation {
			status: MatchStatus::BelowThreshold,
			top_score: Some(top_score),
			entries: Vec::new(),
		},
		Gate::Rejected(Rejection::Empty) => Evaluation::empty(MatchStatus::NoCandidates),
	}
}

use crate::{candidate::Candidate, intent::Intent};

#[derive(Clone, Debug, PartialEq)]
pub enum Filtered {
	/// Survivors, in ranked order.
	Matches(Vec<Candidate>),
	/// There was nothing to filter.
	NoCandidates,
	/// Candidates existed but none has the kind the intent asks for.
	NoIntentMatch,
}

pub fn filter_by_intent(ranked: Vec<Candidate>, intent: Intent) -> Filtered {
	if ranked.is_empty() {
		return Filtered::NoCandidates;
	}

	let kept: Vec<Candidate> =
		ranked.into_iter().filter(|candidate| intent.accepts(candidate.kind)).collect();

	if kept.is_empty() {
		return Filtered::NoIntentMatch;
	}

	Filtered::Matches(kept)
}

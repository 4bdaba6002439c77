use crate::candidate::Candidate;

#[derive(Clone, Debug, PartialEq)]
pub enum Gate {
	/// The full set, unchanged. Only its first element was checked.
	Accepted(Vec<Candidate>),
	Rejected(Rejection),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rejection {
	Empty,
	BelowThreshold { top_score: f32 },
}

/// Accepts `ranked` when its top score reaches `threshold`.
///
/// `ranked` must already be in descending score order. A NaN top score never passes.
pub fn gate(ranked: Vec<Candidate>, threshold: f32) -> Gate {
	let Some(top) = ranked.first() else {
		return Gate::Rejected(Rejection::Empty);
	};

	if top.score.is_nan() || top.score < threshold {
		return Gate::Rejected(Rejection::BelowThreshold { top_score: top.score });
	}

	Gate::Accepted(ranked)
}

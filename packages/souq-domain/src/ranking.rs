use std::cmp::Ordering;

use crate::candidate::Candidate;

/// Unions both pools and orders them by score, highest first.
///
/// The sort is stable, so equal scores keep arrival order: offers before requests, and store order
/// within a pool.
pub fn merge(offers: Vec<Candidate>, requests: Vec<Candidate>) -> Vec<Candidate> {
	let mut ranked = Vec::with_capacity(offers.len() + requests.len());

	ranked.extend(offers);
	ranked.extend(requests);
	ranked.sort_by(|a, b| cmp_score_desc(a.score, b.score));

	ranked
}

/// Descending score order with NaN ranked below every number.
pub fn cmp_score_desc(a: f32, b: f32) -> Ordering {
	match (a.is_nan(), b.is_nan()) {
		(true, true) => Ordering::Equal,
		(true, false) => Ordering::Greater,
		(false, true) => Ordering::Less,
		(false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
	}
}

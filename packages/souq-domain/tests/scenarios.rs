use time::{OffsetDateTime, macros::datetime};

use souq_domain::{
	Candidate, CandidateKind, Intent, IntentClassifier, KeywordClassifier, MatchStatus, Pool,
	evaluate, present,
};

const THRESHOLD: f32 = 0.75;
const NOW: OffsetDateTime = datetime!(2025-06-01 12:00 UTC);

fn offer(id: &str, score: f32) -> Candidate {
	Candidate::new(id, CandidateKind::Providing, score, Pool::Offers)
}

fn request(id: &str, score: f32) -> Candidate {
	Candidate::new(id, CandidateKind::Request, score, Pool::Requests)
}

#[test]
fn provider_query_keeps_only_offers() {
	let classifier = KeywordClassifier::default();
	let intent = classifier.classify("need an electrician");

	assert_eq!(intent, Intent::ProviderSeeking);

	let evaluation =
		evaluate(vec![offer("o1", 0.9)], vec![request("r1", 0.95)], intent, THRESHOLD, NOW);

	assert_eq!(evaluation.status, MatchStatus::Matched);
	assert_eq!(evaluation.top_score, Some(0.9));
	assert_eq!(evaluation.entries.len(), 1);
	assert_eq!(evaluation.entries[0].role, "offer");
	assert_eq!(evaluation.entries[0].position, 1);
}

#[test]
fn weak_offers_are_rejected_below_threshold() {
	let intent = KeywordClassifier::default().classify("need an electrician");
	let evaluation = evaluate(
		vec![offer("o1", 0.3), offer("o2", 0.2)],
		vec![request("r1", 0.95)],
		intent,
		THRESHOLD,
		NOW,
	);

	assert_eq!(evaluation.status, MatchStatus::BelowThreshold);
	assert_eq!(evaluation.top_score, Some(0.3));
	assert!(evaluation.entries.is_empty());
	assert!(
		present::no_match_message(evaluation.status, "need an electrician", intent)
			.expect("Below-threshold outcome must carry a message.")
			.contains("closely enough")
	);
}

#[test]
fn unknown_intent_ranks_the_full_merged_set() {
	let intent = KeywordClassifier::default().classify("thanks!");

	assert_eq!(intent, Intent::Unknown);

	let evaluation = evaluate(
		vec![offer("o1", 0.8), offer("o2", 0.5)],
		vec![request("r1", 0.9)],
		intent,
		THRESHOLD,
		NOW,
	);

	assert_eq!(evaluation.status, MatchStatus::Matched);
	assert_eq!(evaluation.top_score, Some(0.9));
	assert_eq!(
		evaluation.entries.iter().map(|entry| entry.role.as_str()).collect::<Vec<_>>(),
		vec!["request", "offer", "offer"]
	);
}

#[test]
fn requester_query_without_requests_reports_intent_mismatch() {
	let query = "who needs a plumber";
	let intent = KeywordClassifier::default().classify(query);

	assert_eq!(intent, Intent::RequesterSeeking);

	let evaluation = evaluate(
		vec![offer("o1", 0.92), offer("o2", 0.88), offer("o3", 0.8)],
		Vec::new(),
		intent,
		THRESHOLD,
		NOW,
	);

	assert_eq!(evaluation.status, MatchStatus::NoIntentMatch);
	assert!(evaluation.entries.is_empty());

	let intent_message =
		present::no_match_message(evaluation.status, query, intent).expect("Message expected.");
	let generic_message = present::no_match_message(MatchStatus::NoCandidates, query, intent)
		.expect("Message expected.");

	assert_ne!(intent_message, generic_message);
	assert!(intent_message.contains("asked for"));
}

#[test]
fn empty_pools_report_no_candidates() {
	let evaluation = evaluate(Vec::new(), Vec::new(), Intent::ProviderSeeking, THRESHOLD, NOW);

	assert_eq!(evaluation.status, MatchStatus::NoCandidates);
	assert_eq!(evaluation.top_score, None);
	assert!(present::no_match_message(MatchStatus::Matched, "x", Intent::Unknown).is_none());
}

use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, UtcOffset};

use crate::{
	candidate::{Candidate, CandidateKind},
	evaluate::MatchStatus,
	intent::Intent,
};

pub const UNSPECIFIED_CATEGORY: &str = "unspecified";
pub const MISSING_DESCRIPTION: &str = "no description";
pub const NO_CONTACTS: &str = "none";
pub const OFFER_ROLE: &str = "offer";
pub const REQUEST_ROLE: &str = "request";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentedEntry {
	pub position: usize,
	pub category: String,
	pub description: String,
	pub role: String,
	pub date: String,
	pub contacts: Vec<String>,
}

/// Projects accepted candidates, in rank order, into presentation entries.
///
/// `now` stands in for records that carry no creation time.
pub fn present(accepted: &[Candidate], now: OffsetDateTime) -> Vec<PresentedEntry> {
	accepted
		.iter()
		.enumerate()
		.map(|(idx, candidate)| PresentedEntry {
			position: idx + 1,
			category: text_or(candidate.category.as_deref(), UNSPECIFIED_CATEGORY),
			description: text_or(candidate.description.as_deref(), MISSING_DESCRIPTION),
			role: role_label(candidate.kind).to_string(),
			date: format_date(candidate.created_at.unwrap_or(now)),
			contacts: contacts(candidate),
		})
		.collect()
}

pub fn role_label(kind: CandidateKind) -> &'static str {
	match kind {
		CandidateKind::Providing => OFFER_ROLE,
		CandidateKind::Request => REQUEST_ROLE,
	}
}

/// `D/M/YYYY` in UTC, without zero padding.
pub fn format_date(ts: OffsetDateTime) -> String {
	let utc = ts.to_offset(UtcOffset::UTC);

	format!("{}/{}/{}", utc.day(), u8::from(utc.month()), utc.year())
}

/// Renders entries as the bullet block embedded in the summarizer prompt.
pub fn render_entries(entries: &[PresentedEntry]) -> String {
	entries
		.iter()
		.map(|entry| {
			format!(
				"\u{1F539} Service {position} ({role}):\n- Category: {category}\n- Details: {description}\n- Added on: {date}\n- Contact: {contacts}",
				position = entry.position,
				role = entry.role,
				category = entry.category,
				description = entry.description,
				date = entry.date,
				contacts = entry.contacts.join(" | "),
			)
		})
		.collect::<Vec<_>>()
		.join("\n\n")
}

/// Fixed answer for a query that produced no presentable match. `None` for
/// [`MatchStatus::Matched`].
pub fn no_match_message(status: MatchStatus, query: &str, intent: Intent) -> Option<String> {
	let message = match status {
		MatchStatus::Matched => return None,
		MatchStatus::NoCandidates => {
			format!("I couldn't find any services similar to \"{query}\".")
		},
		MatchStatus::NoIntentMatch => match intent {
			Intent::RequesterSeeking => format!(
				"Nobody has asked for anything like \"{query}\" yet. Check back later \u{2764}\u{FE0F}"
			),
			Intent::ProviderSeeking | Intent::Unknown => format!(
				"Nobody is offering anything like \"{query}\" right now. Check back later \u{2764}\u{FE0F}"
			),
		},
		MatchStatus::BelowThreshold => format!(
			"Nothing matches \"{query}\" closely enough yet. Try describing it a different way \u{2764}\u{FE0F}"
		),
	};

	Some(message)
}

fn text_or(value: Option<&str>, fallback: &str) -> String {
	match value.map(str::trim) {
		Some(text) if !text.is_empty() => text.to_string(),
		_ => fallback.to_string(),
	}
}

fn contacts(candidate: &Candidate) -> Vec<String> {
	let mut out = Vec::new();

	for (icon, label, value) in [
		("\u{1F4DE}", "Phone", &candidate.phone),
		("\u{1F4F1}", "WhatsApp", &candidate.whatsapp),
		("\u{1F4E7}", "Email", &candidate.email),
	] {
		if let Some(value) = value.as_deref().map(str::trim).filter(|value| !value.is_empty()) {
			out.push(format!("{icon} {label}: {value}"));
		}
	}

	if out.is_empty() {
		out.push(NO_CONTACTS.to_string());
	}

	out
}

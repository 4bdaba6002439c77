use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// What a stored record advertises: a service someone provides, or a service someone asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateKind {
	Providing,
	Request,
}
impl CandidateKind {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Providing => "providing",
			Self::Request => "request",
		}
	}

	/// Parses the `type` payload value. Matching is case-insensitive and accepts the
	/// "offer"/"requesting" spellings found in older records.
	pub fn parse(raw: &str) -> Option<Self> {
		match raw.trim().to_ascii_lowercase().as_str() {
			"providing" | "offer" => Some(Self::Providing),
			"request" | "requesting" => Some(Self::Request),
			_ => None,
		}
	}
}

/// Logical collection a candidate was fetched from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pool {
	Offers,
	Requests,
}
impl Pool {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Offers => "offers",
			Self::Requests => "requests",
		}
	}

	/// Kind assumed for records in this pool that carry no `type` field.
	pub fn default_kind(self) -> CandidateKind {
		match self {
			Self::Offers => CandidateKind::Providing,
			Self::Requests => CandidateKind::Request,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
	pub id: String,
	pub kind: CandidateKind,
	pub category: Option<String>,
	pub description: Option<String>,
	pub created_at: Option<OffsetDateTime>,
	pub phone: Option<String>,
	pub whatsapp: Option<String>,
	pub email: Option<String>,
	/// Normalized similarity, higher is more relevant.
	pub score: f32,
	pub pool: Pool,
}
impl Candidate {
	pub fn new(id: impl Into<String>, kind: CandidateKind, score: f32, pool: Pool) -> Self {
		Self {
			id: id.into(),
			kind,
			category: None,
			description: None,
			created_at: None,
			phone: None,
			whatsapp: None,
			email: None,
			score,
			pool,
		}
	}
}

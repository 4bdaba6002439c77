use std::collections::HashMap;

use qdrant_client::qdrant::{PointId, ScoredPoint, Value, point_id::PointIdOptions, value::Kind};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use souq_domain::{Candidate, CandidateKind, Pool};

pub const TYPE_FIELD: &str = "type";
pub const CATEGORY_FIELD: &str = "category";
pub const DESCRIPTION_FIELD: &str = "description";
pub const CREATED_AT_FIELD: &str = "created_at";
pub const PHONE_FIELD: &str = "phone";
pub const WHATSAPP_FIELD: &str = "whatsapp";
pub const EMAIL_FIELD: &str = "email";

/// Payload keys fetched with every similarity query. Vectors are never requested.
pub const PROJECTED_FIELDS: [&str; 7] = [
	TYPE_FIELD,
	CATEGORY_FIELD,
	DESCRIPTION_FIELD,
	CREATED_AT_FIELD,
	PHONE_FIELD,
	WHATSAPP_FIELD,
	EMAIL_FIELD,
];

/// Projects scored points from `pool` into candidates, keeping the store's order.
pub fn candidates_from_points(points: &[ScoredPoint], pool: Pool) -> Vec<Candidate> {
	let mut out = Vec::with_capacity(points.len());

	for point in points {
		let Some(id) = point.id.as_ref().and_then(point_id_to_string) else {
			tracing::warn!(pool = pool.as_str(), "Scored point missing id.");

			continue;
		};
		let kind = match payload_string(&point.payload, TYPE_FIELD) {
			Some(raw) => CandidateKind::parse(&raw).unwrap_or_else(|| {
				tracing::warn!(
					pool = pool.as_str(),
					point_id = %id,
					value = %raw,
					"Unrecognized record type. Falling back to the pool default."
				);

				pool.default_kind()
			}),
			None => pool.default_kind(),
		};

		out.push(Candidate {
			id,
			kind,
			category: payload_string(&point.payload, CATEGORY_FIELD),
			description: payload_string(&point.payload, DESCRIPTION_FIELD),
			created_at: payload_timestamp(&point.payload, CREATED_AT_FIELD),
			phone: payload_string(&point.payload, PHONE_FIELD),
			whatsapp: payload_string(&point.payload, WHATSAPP_FIELD),
			email: payload_string(&point.payload, EMAIL_FIELD),
			score: normalize_cosine(point.score),
			pool,
		});
	}

	out
}

/// Maps a cosine similarity from `[-1, 1]` onto `[0, 1]`.
pub fn normalize_cosine(score: f32) -> f32 {
	((1.0 + score) / 2.0).clamp(0.0, 1.0)
}

pub fn point_id_to_string(point_id: &PointId) -> Option<String> {
	match &point_id.point_id_options {
		Some(PointIdOptions::Uuid(id)) => Some(id.clone()),
		Some(PointIdOptions::Num(id)) => Some(id.to_string()),
		None => None,
	}
}

fn payload_string(payload: &HashMap<String, Value>, key: &str) -> Option<String> {
	let value = payload.get(key)?;

	match &value.kind {
		Some(Kind::StringValue(text)) if !text.trim().is_empty() => Some(text.clone()),
		Some(Kind::IntegerValue(number)) => Some(number.to_string()),
		_ => None,
	}
}

/// Accepts RFC 3339 strings and integer Unix timestamps in milliseconds.
fn payload_timestamp(payload: &HashMap<String, Value>, key: &str) -> Option<OffsetDateTime> {
	let value = payload.get(key)?;

	match &value.kind {
		Some(Kind::StringValue(text)) => OffsetDateTime::parse(text.trim(), &Rfc3339).ok(),
		Some(Kind::IntegerValue(millis)) =>
			OffsetDateTime::from_unix_timestamp_nanos(i128::from(*millis) * 1_000_000).ok(),
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn point(id: PointId, score: f32, fields: &[(&str, Value)]) -> ScoredPoint {
		ScoredPoint {
			id: Some(id),
			payload: fields.iter().map(|(key, value)| (key.to_string(), value.clone())).collect(),
			score,
			..Default::default()
		}
	}

	#[test]
	fn projects_payload_fields() {
		let points = vec![point(
			PointId::from(42_u64),
			0.6,
			&[
				(TYPE_FIELD, Value::from("Providing")),
				(CATEGORY_FIELD, Value::from("Plumbing")),
				(DESCRIPTION_FIELD, Value::from("Fixes leaks")),
				(CREATED_AT_FIELD, Value::from("2024-11-05T10:00:00Z")),
				(PHONE_FIELD, Value::from(1_000_000_000_i64)),
				(EMAIL_FIELD, Value::from("  ")),
			],
		)];
		let candidates = candidates_from_points(&points, Pool::Offers);

		assert_eq!(candidates.len(), 1);

		let candidate = &candidates[0];

		assert_eq!(candidate.id, "42");
		assert_eq!(candidate.kind, CandidateKind::Providing);
		assert_eq!(candidate.category.as_deref(), Some("Plumbing"));
		assert_eq!(candidate.description.as_deref(), Some("Fixes leaks"));
		assert_eq!(candidate.phone.as_deref(), Some("1000000000"));
		assert_eq!(candidate.whatsapp, None);
		assert_eq!(candidate.email, None);
		assert_eq!(candidate.pool, Pool::Offers);
		assert!((candidate.score - 0.8).abs() < 1e-6);
		assert_eq!(
			candidate.created_at.map(|ts| ts.unix_timestamp()),
			Some(1_730_800_800)
		);
	}

	#[test]
	fn missing_type_falls_back_to_pool_kind() {
		let points = vec![
			point(PointId::from("5f0c2d9e-9a51-4b7f-8f57-2a4c4c1f0d11"), 1.0, &[]),
			point(PointId::from(7_u64), 0.0, &[(TYPE_FIELD, Value::from("gibberish"))]),
		];
		let candidates = candidates_from_points(&points, Pool::Requests);

		assert_eq!(candidates[0].id, "5f0c2d9e-9a51-4b7f-8f57-2a4c4c1f0d11");
		assert!(candidates.iter().all(|candidate| candidate.kind == CandidateKind::Request));
		assert_eq!(candidates[0].score, 1.0);
		assert_eq!(candidates[1].score, 0.5);
	}

	#[test]
	fn payload_type_wins_over_pool() {
		let points = vec![point(PointId::from(1_u64), 0.5, &[(TYPE_FIELD, Value::from("offer"))])];
		let candidates = candidates_from_points(&points, Pool::Requests);

		assert_eq!(candidates[0].kind, CandidateKind::Providing);
		assert_eq!(candidates[0].pool, Pool::Requests);
	}

	#[test]
	fn skips_points_without_id() {
		let points = vec![ScoredPoint { score: 0.9, ..Default::default() }];

		assert!(candidates_from_points(&points, Pool::Offers).is_empty());
	}

	#[test]
	fn accepts_millisecond_timestamps() {
		let mut payload = HashMap::new();

		payload.insert(CREATED_AT_FIELD.to_string(), Value::from(1_730_800_800_000_i64));

		assert_eq!(
			payload_timestamp(&payload, CREATED_AT_FIELD).map(|ts| ts.unix_timestamp()),
			Some(1_730_800_800)
		);
	}
}

use serde_json::Value;

use crate::{Error, Result};

/// Sends chat `messages` to an OpenAI-compatible completion endpoint and returns the reply text.
pub async fn summarize(cfg: &souq_config::LlmProviderConfig, messages: &[Value]) -> Result<String> {
	let client = crate::client(cfg.timeout_ms)?;
	let body = serde_json::json!({
		"model": cfg.model,
		"temperature": cfg.temperature,
		"messages": messages,
	});
	let res = client
		.post(crate::endpoint(&cfg.api_base, &cfg.path))
		.headers(crate::auth_headers(&cfg.api_key, &cfg.default_headers)?)
		.json(&body)
		.send()
		.await?;
	let json: Value = res.error_for_status()?.json().await?;

	parse_completion_text(&json)
}

fn parse_completion_text(json: &Value) -> Result<String> {
	let content = json
		.get("choices")
		.and_then(|v| v.as_array())
		.and_then(|arr| arr.first())
		.and_then(|choice| choice.get("message"))
		.and_then(|msg| msg.get("content"))
		.and_then(|c| c.as_str())
		.ok_or_else(|| Error::response("Completion response is missing message content."))?;
	let trimmed = content.trim();

	if trimmed.is_empty() {
		return Err(Error::response("Completion response content is empty."));
	}

	Ok(trimmed.to_string())
}

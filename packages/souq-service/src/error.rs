use souq_domain::Pool;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid config: {message}")]
	InvalidConfig { message: String },
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Embedding error: {message}")]
	Embedding { message: String },
	#[error("Query error on the {} pool: {message}", .pool.as_str())]
	Query { pool: Pool, message: String },
	#[error("Candidate fetch exceeded {timeout_ms} ms.")]
	Timeout { timeout_ms: u64 },
	#[error("Summarizer error: {message}")]
	Summarizer { message: String },
}

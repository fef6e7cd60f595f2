use std::sync::{Mutex, OnceLock};

use empresamix_sdk::{QueryClient, QueryConfig, RequestError};
use empresamix_types::api::powerbi::Query;
use serde_json::Value;

static RUNTIME: OnceLock<tokio::runtime::Runtime> = OnceLock::new();

pub fn rt() -> &'static tokio::runtime::Runtime {
	RUNTIME.get_or_init(|| {
		let _ = env_logger::builder().is_test(true).try_init();
		empresamix_sdk::config::load_dotenv();
		tokio::runtime::Builder::new_multi_thread()
			.enable_all()
			.build()
			.expect("Failed to create Tokio runtime")
	})
}

pub fn acme_config() -> QueryConfig {
	QueryConfig::new("acme", "42", "summary")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
	pub path: String,
	pub query: Query<'static>,
}

#[derive(Debug, Clone)]
enum Outcome {
	Respond(Value),
	Fail(String),
}

/// Records every request it receives and answers all of them the same way.
#[derive(Debug)]
pub struct StubClient {
	outcome: Outcome,
	calls: Mutex<Vec<RecordedCall>>,
}

impl StubClient {
	pub fn responding(payload: Value) -> Self {
		Self::with_outcome(Outcome::Respond(payload))
	}

	pub fn failing(reason: impl Into<String>) -> Self {
		Self::with_outcome(Outcome::Fail(reason.into()))
	}

	fn with_outcome(outcome: Outcome) -> Self {
		Self {
			outcome,
			calls: Mutex::new(Vec::new()),
		}
	}

	pub fn calls(&self) -> Vec<RecordedCall> {
		self.calls.lock().unwrap().clone()
	}

	pub fn call_count(&self) -> usize {
		self.calls.lock().unwrap().len()
	}
}

impl QueryClient for StubClient {
	async fn get_query(&self, path: &str, query: &Query<'_>) -> Result<Value, RequestError> {
		self.calls.lock().unwrap().push(RecordedCall {
			path: path.to_string(),
			query: query.clone().into_owned(),
		});
		match &self.outcome {
			Outcome::Respond(payload) => Ok(payload.clone()),
			Outcome::Fail(reason) => {
				log::debug!("stub failing request to {path:?}: {reason}");
				Err(RequestError::Custom(reason.clone()))
			}
		}
	}
}

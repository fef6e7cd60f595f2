use std::{borrow::Cow, time::Duration};

use empresamix_types::api::powerbi::Query;

use crate::consts::{
	BASE_URL_ENV, CLIENT_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, ID_ENV, TIMEOUT_ENV, VIEW_ENV,
};

/// Identifiers sent with every gateway request.
///
/// None of the values are validated, whatever is set is forwarded as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryConfig {
	pub client: Option<String>,
	pub id: Option<String>,
	pub view: Option<String>,
}

impl QueryConfig {
	pub fn new(client: impl Into<String>, id: impl Into<String>, view: impl Into<String>) -> Self {
		Self {
			client: Some(client.into()),
			id: Some(id.into()),
			view: Some(view.into()),
		}
	}

	/// Reads `VITE_API_CLIENTE`, `VITE_API_ID` and `VITE_API_VIEW`.
	pub fn from_env() -> Self {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
		Self {
			client: lookup(CLIENT_ENV),
			id: lookup(ID_ENV),
			view: lookup(VIEW_ENV),
		}
	}

	pub fn query(&self) -> Query<'_> {
		Query {
			client: self.client.as_deref().map(Cow::Borrowed),
			id: self.id.as_deref().map(Cow::Borrowed),
			view: self.view.as_deref().map(Cow::Borrowed),
		}
	}

	pub(crate) fn query_with_view<'a>(&'a self, view: &'a str) -> Query<'a> {
		Query {
			view: Some(Cow::Borrowed(view)),
			..self.query()
		}
	}
}

/// Transport settings for [`crate::HttpClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
	pub base_url: String,
	pub timeout: Duration,
	pub log_level: log::LevelFilter,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.to_string(),
			timeout: DEFAULT_TIMEOUT,
			log_level: log::LevelFilter::Debug,
		}
	}
}

impl ClientConfig {
	pub fn new(base_url: impl Into<String>) -> Self {
		Self {
			base_url: base_url.into(),
			..Default::default()
		}
	}

	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}

	pub fn with_log_level(mut self, log_level: log::LevelFilter) -> Self {
		self.log_level = log_level;
		self
	}

	/// Reads `API_BASE_URL` and `API_TIMEOUT` (seconds), falling back to the defaults.
	pub fn from_env() -> Self {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
		let mut config = Self::default();
		if let Some(base_url) = lookup(BASE_URL_ENV) {
			config.base_url = base_url;
		}
		if let Some(timeout) = lookup(TIMEOUT_ENV) {
			match timeout.trim().parse::<u64>() {
				Ok(secs) => config.timeout = Duration::from_secs(secs),
				Err(e) => log::warn!(
					"Ignoring {TIMEOUT_ENV}={timeout:?} ({e}), using {}s",
					DEFAULT_TIMEOUT.as_secs()
				),
			}
		}
		config
	}
}

/// Loads a `.env` file from the working directory or its parents, if there is one.
pub fn load_dotenv() {
	match dotenv::dotenv() {
		Ok(path) => log::debug!("Loaded environment from {}", path.display()),
		Err(e) => log::debug!("No .env file loaded: {e}"),
	}
}

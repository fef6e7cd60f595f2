use empresamix_types::{api::powerbi::Query, error::ResponseError};
use reqwest::RequestBuilder;
use serde_json::Value;
use tower::{ServiceBuilder, ServiceExt};

use crate::{
	ClientConfig, Error, ErrorKind, RequestError,
	consts::api_url,
	error::ResultExt,
};

mod logging;

/// Anything able to send a GET to the gateway.
///
/// `path` is relative to the client's base URL. Implementations decide on
/// timeouts, headers and authentication.
pub trait QueryClient {
	fn get_query(
		&self,
		path: &str,
		query: &Query<'_>,
	) -> impl Future<Output = Result<Value, RequestError>> + Send;
}

/// [`QueryClient`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpClient {
	reqwest_client: reqwest::Client,
	base_url: String,
	log_level: log::LevelFilter,
}

impl HttpClient {
	pub fn new(config: ClientConfig) -> Result<Self, Error> {
		reqwest::Url::parse(&config.base_url).map_kind(ErrorKind::InvalidBaseUrl)?;
		let reqwest_client = reqwest::Client::builder()
			.timeout(config.timeout)
			.build()
			.map_kind(ErrorKind::Reqwest)?;
		Ok(Self {
			reqwest_client,
			base_url: config.base_url,
			log_level: config.log_level,
		})
	}

	pub fn from_env() -> Result<Self, Error> {
		Self::new(ClientConfig::from_env())
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	fn get_request(&self, url: &str, query: &Query<'_>) -> RequestBuilder {
		self.reqwest_client.get(url).query(query)
	}
}

impl QueryClient for HttpClient {
	async fn get_query(&self, path: &str, query: &Query<'_>) -> Result<Value, RequestError> {
		let request = self
			.get_request(&api_url(&self.base_url, path), query)
			.build()?;
		let client = self.reqwest_client.clone();
		ServiceBuilder::new()
			.layer(logging::GatewayLogLayer::new(self.log_level))
			.service_fn(move |request| execute_request(client.clone(), request))
			.oneshot(request)
			.await
	}
}

async fn execute_request(
	client: reqwest::Client,
	request: reqwest::Request,
) -> Result<Value, RequestError> {
	let response = client.execute(request).await?;
	let status = response.status();
	let body = response.bytes().await?;
	if !status.is_success() {
		return Err(ResponseError::Status {
			status: status.as_u16(),
			body: String::from_utf8_lossy(&body).into_owned(),
		}
		.into());
	}
	Ok(serde_json::from_slice(&body)?)
}

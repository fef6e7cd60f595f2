//! Territorial billing data from the POWERBI gateway.
//!
//! Every failure collapses into one [`ErrorKind`] per operation. The
//! underlying cause is logged and kept as the error's source, but never
//! shows up in its message.

use serde_json::Value;

use crate::{
	Error, ErrorKind, QueryConfig,
	api,
	error::ErrorExt,
	http::QueryClient,
};

/// Fetches the configured view, returning the gateway's payload untouched.
pub async fn fetch_territorial_billing(
	client: &impl QueryClient,
	config: &QueryConfig,
) -> Result<Value, Error> {
	api::powerbi::get(client, &config.query())
		.await
		.map_err(|e| {
			log::error!("{}: {e}", ErrorKind::TerritorialFetch);
			e.into_kind(ErrorKind::TerritorialFetch)
		})
}

/// Same as [`fetch_territorial_billing`], reading the identifiers from the
/// environment on every call.
pub async fn fetch_territorial_billing_from_env(client: &impl QueryClient) -> Result<Value, Error> {
	fetch_territorial_billing(client, &QueryConfig::from_env()).await
}

/// Fetches `view` (a cube such as `CUBO_FATURAMENTO`) instead of the configured one.
pub async fn fetch_view(
	client: &impl QueryClient,
	config: &QueryConfig,
	view: &str,
) -> Result<Value, Error> {
	api::powerbi::get(client, &config.query_with_view(view))
		.await
		.map_err(|e| {
			log::error!("{} {view}: {e}", ErrorKind::ViewFetch);
			e.into_kind(ErrorKind::ViewFetch)
		})
}

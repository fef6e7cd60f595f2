use empresamix_types::api::powerbi::{ENDPOINT, Query};
use serde_json::Value;

use crate::{RequestError, http::QueryClient};

pub(crate) async fn get(client: &impl QueryClient, query: &Query<'_>) -> Result<Value, RequestError> {
	client.get_query(ENDPOINT, query).await
}

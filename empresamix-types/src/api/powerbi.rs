use std::borrow::Cow;

use serde::Serialize;

/// Root of the gateway; requests go to `<base>/`.
pub const ENDPOINT: &str = "";

/// Cube holding invoiced revenue per client, region and date.
pub const BILLING_CUBE: &str = "CUBO_FATURAMENTO";

/// Query string of a gateway request.
///
/// Absent values are left out of the query string entirely, the gateway
/// decides what a missing parameter means.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Query<'a> {
	#[serde(rename = "CLIENTE", skip_serializing_if = "Option::is_none")]
	pub client: Option<Cow<'a, str>>,
	#[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
	pub id: Option<Cow<'a, str>>,
	#[serde(rename = "VIEW", skip_serializing_if = "Option::is_none")]
	pub view: Option<Cow<'a, str>>,
}

impl Query<'_> {
	pub fn into_owned(self) -> Query<'static> {
		Query {
			client: self.client.map(|c| Cow::Owned(c.into_owned())),
			id: self.id.map(|i| Cow::Owned(i.into_owned())),
			view: self.view.map(|v| Cow::Owned(v.into_owned())),
		}
	}
}

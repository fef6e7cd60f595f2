use std::{error::Error as _, time::Duration};

use empresamix_sdk::{
	ClientConfig, ErrorKind, HttpClient, QueryConfig, RequestError, fetch_territorial_billing,
	fetch_view,
};
use empresamix_types::{api::powerbi::BILLING_CUBE, error::ResponseError};
use serde_json::json;
use test_utils::acme_config;
use wiremock::{
	Mock, MockServer, ResponseTemplate,
	matchers::{method, path, query_param},
};

const GENERIC_MESSAGE: &str = "Erro ao buscar dados territoriais";

fn client_for(server: &MockServer) -> HttpClient {
	HttpClient::new(ClientConfig::new(format!("{}/POWERBI", server.uri()))).unwrap()
}

fn request_error(err: &empresamix_sdk::Error) -> &RequestError {
	err.source()
		.and_then(|s| s.downcast_ref::<RequestError>())
		.unwrap()
}

#[test]
fn fetches_with_identifiers_in_query() {
	test_utils::rt().block_on(async {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path("/POWERBI/"))
			.and(query_param("CLIENTE", "acme"))
			.and(query_param("ID", "42"))
			.and(query_param("VIEW", "summary"))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 1000})))
			.expect(1)
			.mount(&server)
			.await;

		let data = fetch_territorial_billing(&client_for(&server), &acme_config())
			.await
			.unwrap();
		assert_eq!(data, json!({"total": 1000}));

		let requests = server.received_requests().await.unwrap();
		assert_eq!(requests.len(), 1);
		let mut keys: Vec<String> = requests[0]
			.url
			.query_pairs()
			.map(|(k, _)| k.into_owned())
			.collect();
		keys.sort();
		assert_eq!(keys, ["CLIENTE", "ID", "VIEW"]);
	})
}

#[test]
fn server_error_becomes_generic_error() {
	test_utils::rt().block_on(async {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.respond_with(ResponseTemplate::new(500).set_body_string("boom"))
			.expect(1)
			.mount(&server)
			.await;

		let err = fetch_territorial_billing(&client_for(&server), &acme_config())
			.await
			.unwrap_err();
		assert_eq!(err.to_string(), GENERIC_MESSAGE);
		assert!(matches!(
			request_error(&err),
			RequestError::Response(ResponseError::Status { status: 500, body }) if body == "boom"
		));
	})
}

#[test]
fn client_error_becomes_generic_error() {
	test_utils::rt().block_on(async {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.respond_with(ResponseTemplate::new(404))
			.mount(&server)
			.await;

		let err = fetch_territorial_billing(&client_for(&server), &acme_config())
			.await
			.unwrap_err();
		assert_eq!(err.kind(), ErrorKind::TerritorialFetch);
		assert_eq!(err.to_string(), GENERIC_MESSAGE);
	})
}

#[test]
fn malformed_body_becomes_generic_error() {
	test_utils::rt().block_on(async {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
			.mount(&server)
			.await;

		let err = fetch_territorial_billing(&client_for(&server), &acme_config())
			.await
			.unwrap_err();
		assert_eq!(err.to_string(), GENERIC_MESSAGE);
		assert!(matches!(request_error(&err), RequestError::Deserialize(_)));
	})
}

#[test]
fn slow_gateway_times_out() {
	test_utils::rt().block_on(async {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.respond_with(
				ResponseTemplate::new(200)
					.set_body_json(json!({"total": 1000}))
					.set_delay(Duration::from_secs(5)),
			)
			.mount(&server)
			.await;

		let client = HttpClient::new(
			ClientConfig::new(server.uri()).with_timeout(Duration::from_millis(100)),
		)
		.unwrap();
		let err = fetch_territorial_billing(&client, &acme_config())
			.await
			.unwrap_err();
		assert_eq!(err.to_string(), GENERIC_MESSAGE);
		assert!(matches!(request_error(&err), RequestError::Reqwest(e) if e.is_timeout()));
	})
}

#[test]
fn unreachable_gateway_becomes_generic_error() {
	test_utils::rt().block_on(async {
		let client = HttpClient::new(ClientConfig::new("http://127.0.0.1:1/POWERBI")).unwrap();
		let err = fetch_territorial_billing(&client, &acme_config())
			.await
			.unwrap_err();
		assert_eq!(err.to_string(), GENERIC_MESSAGE);
		assert!(matches!(request_error(&err), RequestError::Reqwest(_)));
	})
}

#[test]
fn missing_identifiers_are_left_out() {
	test_utils::rt().block_on(async {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path("/POWERBI/"))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
			.expect(1)
			.mount(&server)
			.await;

		let config = QueryConfig {
			id: Some("42".to_string()),
			..Default::default()
		};
		let data = fetch_territorial_billing(&client_for(&server), &config)
			.await
			.unwrap();
		assert_eq!(data, json!([]));

		let requests = server.received_requests().await.unwrap();
		assert_eq!(requests[0].url.query(), Some("ID=42"));
	})
}

#[test]
fn view_override_reaches_gateway() {
	test_utils::rt().block_on(async {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path("/POWERBI/"))
			.and(query_param("CLIENTE", "acme"))
			.and(query_param("VIEW", BILLING_CUBE))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!([{"codcli": 7}])))
			.expect(1)
			.mount(&server)
			.await;

		let data = fetch_view(&client_for(&server), &acme_config(), BILLING_CUBE)
			.await
			.unwrap();
		assert_eq!(data, json!([{"codcli": 7}]));
	})
}

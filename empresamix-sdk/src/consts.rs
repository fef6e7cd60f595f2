use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://tecnolife.empresamix.info:8077/POWERBI";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const CLIENT_ENV: &str = "VITE_API_CLIENTE";
pub const ID_ENV: &str = "VITE_API_ID";
pub const VIEW_ENV: &str = "VITE_API_VIEW";
pub const BASE_URL_ENV: &str = "API_BASE_URL";
pub const TIMEOUT_ENV: &str = "API_TIMEOUT";

pub fn api_url(base_url: &str, path: &str) -> String {
	format!(
		"{}/{}",
		base_url.trim_end_matches('/'),
		path.trim_start_matches('/')
	)
}

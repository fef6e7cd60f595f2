pub(crate) mod api;
pub mod config;
pub mod consts;
pub mod error;
pub mod http;
pub mod territorial;

pub use config::{ClientConfig, QueryConfig};
pub use error::{Error, ErrorKind, RequestError};
pub use http::{HttpClient, QueryClient};
pub use territorial::{fetch_territorial_billing, fetch_territorial_billing_from_env, fetch_view};

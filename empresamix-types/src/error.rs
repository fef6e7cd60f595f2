use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResponseError {
	#[error("Gateway answered with status `{status}`: `{body}`")]
	Status { status: u16, body: String },
}

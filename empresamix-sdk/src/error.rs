use std::fmt;

use thiserror::Error;

type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// What a caller-facing [`Error`] is about.
///
/// The fetch kinds deliberately carry no detail in their message, the cause
/// is only reachable through [`std::error::Error::source`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
	TerritorialFetch,
	ViewFetch,
	InvalidBaseUrl,
	Reqwest,
}

impl ErrorKind {
	pub fn message(self) -> &'static str {
		match self {
			ErrorKind::TerritorialFetch => "Erro ao buscar dados territoriais",
			ErrorKind::ViewFetch => "Erro ao buscar dados da view",
			ErrorKind::InvalidBaseUrl => "URL base da API inválida",
			ErrorKind::Reqwest => "Erro ao criar cliente HTTP",
		}
	}
}

impl fmt::Display for ErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.message())
	}
}

#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
	kind: ErrorKind,
	#[source]
	source: Option<BoxedSource>,
}

impl Error {
	pub fn new(kind: ErrorKind) -> Self {
		Self { kind, source: None }
	}

	pub fn with_source(kind: ErrorKind, source: impl Into<BoxedSource>) -> Self {
		Self {
			kind,
			source: Some(source.into()),
		}
	}

	pub fn kind(&self) -> ErrorKind {
		self.kind
	}
}

/// Failure of a single gateway request, before it is collapsed into an [`Error`].
#[derive(Debug, Error)]
pub enum RequestError {
	#[error("Request Error: `{0}`")]
	Reqwest(#[from] reqwest::Error),
	#[error("Response Error: `{0}`")]
	Response(#[from] empresamix_types::error::ResponseError),
	#[error("Deserialize Error: `{0}`")]
	Deserialize(#[from] serde_json::Error),
	#[error("`{0}`")]
	Custom(String),
}

pub trait ErrorExt {
	fn into_kind(self, kind: ErrorKind) -> Error;
}

impl<E> ErrorExt for E
where
	E: std::error::Error + Send + Sync + 'static,
{
	fn into_kind(self, kind: ErrorKind) -> Error {
		Error::with_source(kind, self)
	}
}

pub trait ResultExt<T> {
	fn map_kind(self, kind: ErrorKind) -> Result<T, Error>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
	E: ErrorExt,
{
	fn map_kind(self, kind: ErrorKind) -> Result<T, Error> {
		self.map_err(|e| e.into_kind(kind))
	}
}

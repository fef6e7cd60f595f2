use std::{
	pin::Pin,
	task::{Context, Poll},
	time::Instant,
};

use empresamix_types::error::ResponseError;
use tower::Service;

use crate::RequestError;

/// Traces gateway requests below `warn`.
///
/// Failures are only reported at `debug` here, the fetch operation that
/// issued the request owns the single error record.
#[derive(Clone, Copy)]
pub(crate) struct GatewayLogLayer {
	level_filter: log::LevelFilter,
}

impl GatewayLogLayer {
	pub(crate) fn new(level_filter: log::LevelFilter) -> Self {
		Self { level_filter }
	}
}

impl<S> tower::Layer<S> for GatewayLogLayer {
	type Service = GatewayLogService<S>;

	fn layer(&self, inner: S) -> Self::Service {
		GatewayLogService {
			inner,
			level_filter: self.level_filter,
		}
	}
}

#[derive(Clone)]
pub(crate) struct GatewayLogService<S> {
	inner: S,
	level_filter: log::LevelFilter,
}

impl<S> Service<reqwest::Request> for GatewayLogService<S>
where
	S: Service<reqwest::Request, Error = RequestError>,
	S::Response: std::fmt::Debug,
{
	type Response = S::Response;
	type Error = S::Error;
	type Future = TimedFuture<S::Future>;

	fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
		self.inner.poll_ready(cx)
	}

	fn call(&mut self, req: reqwest::Request) -> Self::Future {
		// the url already carries CLIENTE/ID/VIEW in its query string
		let url = req.url().clone();
		if self.level_filter >= log::LevelFilter::Debug {
			log::debug!("GET {url}");
		}
		TimedFuture {
			inner: self.inner.call(req),
			level_filter: self.level_filter,
			url,
			started: Instant::now(),
		}
	}
}

#[pin_project::pin_project]
pub(crate) struct TimedFuture<F> {
	#[pin]
	inner: F,
	level_filter: log::LevelFilter,
	url: reqwest::Url,
	started: Instant,
}

impl<F, Res> Future for TimedFuture<F>
where
	F: Future<Output = Result<Res, RequestError>>,
	Res: std::fmt::Debug,
{
	type Output = F::Output;

	fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
		let this = self.project();
		let output = match this.inner.poll(cx) {
			Poll::Ready(output) => output,
			Poll::Pending => return Poll::Pending,
		};
		if *this.level_filter < log::LevelFilter::Debug {
			return Poll::Ready(output);
		}

		let elapsed_ms = this.started.elapsed().as_millis();
		let path = this.url.path();
		match &output {
			Ok(payload) => {
				log::debug!("GET {path} answered in {elapsed_ms} ms");
				if *this.level_filter >= log::LevelFilter::Trace {
					log::trace!("GET {path} payload: {payload:?}");
				}
			}
			Err(RequestError::Response(ResponseError::Status { status, .. })) => {
				log::debug!("GET {path} answered {status} in {elapsed_ms} ms");
			}
			Err(e) => log::debug!("GET {path} gave up after {elapsed_ms} ms: {e}"),
		}
		Poll::Ready(output)
	}
}

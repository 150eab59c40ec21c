//! Routing and the hyper server loop.

use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use hyper::body::HttpBody;
use hyper::header::{CONTENT_LENGTH, CONTENT_TYPE, HeaderValue};
use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Method, Request, Response, Server, StatusCode};
use namegen_adapters::openai::{OpenAiAdapter, OpenAiConfig};
use namegen_adapters::traits::{AdapterResult, ModelAdapter};
use namegen_config::AppConfig;
use namegen_core::{GenerateError, GenerationOutcome, GenerationSettings, NameRequestBuilder};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::form::FormInput;
use crate::render;

/// Largest accepted form body.
pub const MAX_FORM_BYTES: usize = 16 * 1024;

/// Errors that stop the server loop.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listening socket could not be opened.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Requested address.
        addr: SocketAddr,
        /// Underlying hyper error.
        #[source]
        source: hyper::Error,
    },

    /// The accept loop failed.
    #[error("server error: {0}")]
    Serve(#[from] hyper::Error),
}

/// Shared, immutable state for every request.
#[derive(Debug)]
pub struct App {
    builder: NameRequestBuilder,
}

impl App {
    /// Wraps an already constructed pipeline.
    #[must_use]
    pub fn new(builder: NameRequestBuilder) -> Arc<Self> {
        Arc::new(Self { builder })
    }

    /// Builds the `OpenAI` adapter and pipeline from configuration.
    ///
    /// # Errors
    ///
    /// Returns an adapter configuration error if the base URL is unusable.
    pub fn from_config(config: &AppConfig) -> AdapterResult<Arc<Self>> {
        let model = &config.model;
        let mut openai = OpenAiConfig::new(model.model.as_str())
            .with_base_url(&model.base_url)?
            .with_timeout(model.timeout());
        if let Some(key) = config.api_key() {
            openai = openai.with_api_key(key.expose());
        }

        let adapter: Arc<dyn ModelAdapter> = Arc::new(OpenAiAdapter::new(openai)?);
        let builder = NameRequestBuilder::new(adapter).with_settings(GenerationSettings {
            max_output_tokens: model.max_output_tokens,
            temperature: model.temperature,
        });
        Ok(Self::new(builder))
    }

    /// The pipeline serving requests.
    #[must_use]
    pub fn builder(&self) -> &NameRequestBuilder {
        &self.builder
    }
}

/// Routes one request. Never fails; every error becomes a response.
///
/// # Errors
///
/// The error type is [`Infallible`].
pub async fn handle(app: Arc<App>, req: Request<Body>) -> Result<Response<Body>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let response = match (method.clone(), path.as_str()) {
        (Method::GET, "/") => html(
            StatusCode::OK,
            render::page(app.builder.model(), &FormInput::default(), None),
        ),
        (Method::POST, "/generate") => generate(&app, req).await,
        (Method::GET, "/healthz") => text(StatusCode::OK, "ok"),
        (_, "/" | "/generate" | "/healthz") => {
            text(StatusCode::METHOD_NOT_ALLOWED, "method not allowed")
        }
        _ => text(StatusCode::NOT_FOUND, "not found"),
    };

    debug!(%method, %path, status = %response.status(), "handled request");
    Ok(response)
}

async fn generate(app: &App, req: Request<Body>) -> Response<Body> {
    let declared = req
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<usize>().ok());
    if declared.is_some_and(|len| len > MAX_FORM_BYTES) {
        return text(StatusCode::PAYLOAD_TOO_LARGE, "form too large");
    }

    let body = match read_form(req.into_body()).await {
        Ok(Some(body)) => body,
        Ok(None) => return text(StatusCode::PAYLOAD_TOO_LARGE, "form too large"),
        Err(err) => {
            warn!(%err, "failed to read form body");
            return text(StatusCode::BAD_REQUEST, "unreadable form body");
        }
    };

    let input = FormInput::parse(&body);
    let result = match input.to_request() {
        Ok(request) => app.builder.generate(&request).await,
        Err(err) => Err(GenerateError::Validation(err)),
    };
    let outcome = GenerationOutcome::from_result(result);

    let status = match &outcome {
        GenerationOutcome::Names(names) => {
            info!(count = names.len(), "rendered name suggestions");
            StatusCode::OK
        }
        GenerationOutcome::NoResults => {
            info!("no suggestions fit the word limit");
            StatusCode::OK
        }
        GenerationOutcome::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        GenerationOutcome::Failed => StatusCode::BAD_GATEWAY,
    };

    html(status, render::page(app.builder.model(), &input, Some(&outcome)))
}

/// Collects the body, giving up with `None` as soon as it passes
/// [`MAX_FORM_BYTES`].
async fn read_form(mut body: Body) -> Result<Option<Vec<u8>>, hyper::Error> {
    let mut buf = Vec::new();
    while let Some(chunk) = body.data().await {
        let chunk = chunk?;
        if buf.len() + chunk.len() > MAX_FORM_BYTES {
            return Ok(None);
        }
        buf.extend_from_slice(&chunk);
    }
    Ok(Some(buf))
}

fn html(status: StatusCode, body: String) -> Response<Body> {
    respond(status, "text/html; charset=utf-8", Body::from(body))
}

fn text(status: StatusCode, body: &'static str) -> Response<Body> {
    respond(status, "text/plain; charset=utf-8", Body::from(body))
}

fn respond(status: StatusCode, content_type: &'static str, body: Body) -> Response<Body> {
    let mut response = Response::new(body);
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    response
}

/// Serves `app` on `addr` until `shutdown` resolves.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] if the address is unavailable and
/// [`ServerError::Serve`] if the accept loop fails.
pub async fn run(
    app: Arc<App>,
    addr: SocketAddr,
    shutdown: impl Future<Output = ()>,
) -> Result<(), ServerError> {
    let make_service = make_service_fn(move |_conn| {
        let app = Arc::clone(&app);
        async move {
            Ok::<_, Infallible>(service_fn(move |req| handle(Arc::clone(&app), req)))
        }
    });

    let server = Server::try_bind(&addr)
        .map_err(|source| ServerError::Bind { addr, source })?
        .serve(make_service);

    info!(addr = %server.local_addr(), "serving business name generator");
    server.with_graceful_shutdown(shutdown).await?;
    info!("server stopped");
    Ok(())
}

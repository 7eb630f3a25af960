use crate::config::ClientConfig;
use crate::error::{AdviceError, Result};
use crate::http::ResponseConverter;
use crate::traits::ApiTransport;
use crate::url_builder::UrlBuilder;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Instant;
use url::Url;

/// HTTP client for the advisor API.
///
/// Construct one per backend and hand clones to the resource clients; the
/// underlying connection pool is shared between clones.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    urls: UrlBuilder,
    response_converter: ResponseConverter,
    log_traffic: bool,
}

impl ApiClient {
    /// Create a new HTTP client with configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder()
            .timeout(config.timeout())
            .default_headers(headers);

        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }

        let client = builder.build().map_err(|e| {
            AdviceError::invalid_config(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Self {
            client,
            urls: UrlBuilder::new(config)?,
            response_converter: ResponseConverter::new(),
            log_traffic: config.development,
        })
    }

    /// API root all relative paths are resolved against
    pub fn api_root(&self) -> &Url {
        self.urls.root()
    }

    fn request(&self, method: Method, path: &str) -> Result<(RequestBuilder, Url)> {
        let url = self.urls.build(path)?;
        Ok((self.client.request(method, url.clone()), url))
    }

    /// Send a prepared request and decode the response, logging both sides
    /// when traffic logging is enabled.
    async fn execute<T>(&self, request: RequestBuilder, method: Method, url: Url) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let started = Instant::now();

        if self.log_traffic {
            tracing::debug!(%method, %url, "api request");
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                let err = AdviceError::from_transport(e, url.as_str());
                if self.log_traffic {
                    tracing::warn!(
                        %method,
                        %url,
                        error = %err,
                        "api request failed without a response"
                    );
                }
                return Err(err);
            }
        };

        let status = response.status().as_u16();
        let result = self.response_converter.convert_response(response).await;

        if self.log_traffic {
            let elapsed_ms = started.elapsed().as_millis() as u64;
            match &result {
                Ok(_) => tracing::debug!(%method, %url, status, elapsed_ms, "api response"),
                Err(AdviceError::Status { body, .. }) => {
                    tracing::warn!(
                        %method,
                        %url,
                        status,
                        elapsed_ms,
                        body = %body,
                        "api error response"
                    )
                }
                Err(err) => tracing::warn!(
                    %method,
                    %url,
                    status,
                    elapsed_ms,
                    error = %err,
                    "api response could not be read"
                ),
            }
        }

        result
    }
}

impl ApiTransport for ApiClient {
    async fn get_json<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        let (request, url) = self.request(Method::GET, path)?;
        self.execute(request, Method::GET, url).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned + Send,
    {
        let payload = serde_json::to_vec(body)?;
        if self.log_traffic {
            tracing::debug!(path, body = %String::from_utf8_lossy(&payload), "api request body");
        }

        let (request, url) = self.request(Method::POST, path)?;
        self.execute(request.body(payload), Method::POST, url).await
    }

    async fn post_empty<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        let (request, url) = self.request(Method::POST, path)?;
        self.execute(request, Method::POST, url).await
    }
}

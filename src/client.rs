use reqwest::{Client, Method, RequestBuilder, StatusCode};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::types::{CameraStream, CreateCameraStreamDto, StreamId};

const BASE_PATH: &str = "/api/camera-stream";

/// Typed client for the camera-stream endpoints of the printer-management
/// server. Holds a shared reqwest client; every method issues exactly one
/// request and calls are safe to run concurrently.
#[derive(Debug, Clone)]
pub struct CameraStreamClient {
    base_url: String,
    api_key: Option<String>,
    http_client: Client,
}

impl CameraStreamClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
            return Err(ClientError::Config(format!(
                "base_url must be an http(s) URL, got: {}",
                config.base_url
            )));
        }

        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            http_client,
        })
    }

    pub async fn list(&self) -> Result<Vec<CameraStream>> {
        let url = self.collection_url();
        tracing::debug!("GET {}", url);

        let response = self
            .request(Method::GET, &url)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    pub async fn create(&self, dto: &CreateCameraStreamDto) -> Result<CameraStream> {
        let url = self.collection_url();
        tracing::debug!("POST {}", url);

        let response = self
            .request(Method::POST, &url)
            .json(dto)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    pub async fn get(&self, id: impl Into<StreamId>) -> Result<CameraStream> {
        let url = self.stream_url(&id.into());
        tracing::debug!("GET {}", url);

        let response = self
            .request(Method::GET, &url)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    /// Looks up the camera stream bound to a printer. The server answers 204
    /// when no stream is bound, which maps to `None` rather than an error.
    pub async fn get_by_printer(
        &self,
        printer_id: impl Into<StreamId>,
    ) -> Result<Option<CameraStream>> {
        let url = format!("{}{}/printer/{}", self.base_url, BASE_PATH, printer_id.into());
        tracing::debug!("GET {}", url);

        let response = self
            .request(Method::GET, &url)
            .send()
            .await?
            .error_for_status()?;

        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        Ok(Some(response.json().await?))
    }

    pub async fn update(
        &self,
        id: impl Into<StreamId>,
        dto: &CreateCameraStreamDto,
    ) -> Result<CameraStream> {
        let url = self.stream_url(&id.into());
        tracing::debug!("PUT {}", url);

        let response = self
            .request(Method::PUT, &url)
            .json(dto)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    pub async fn delete(&self, id: impl Into<StreamId>) -> Result<()> {
        let url = self.stream_url(&id.into());
        tracing::debug!("DELETE {}", url);

        self.request(Method::DELETE, &url)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }

    fn collection_url(&self) -> String {
        format!("{}{}/", self.base_url, BASE_PATH)
    }

    fn stream_url(&self, id: &StreamId) -> String {
        format!("{}{}/{}", self.base_url, BASE_PATH, id)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self.http_client.request(method, url);
        match &self.api_key {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }
}

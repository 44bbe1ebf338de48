use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use tracing::debug;

use crate::entities::like_button::LikeResponse;
use crate::error::{AppError, AppResult};
use crate::interfaces::like_transport::{LikeRequest, LikeTransportInterface};

pub const CSRF_HEADER_NAME: &str = "X-CSRFToken";

pub struct ReqwestLikeTransport {
    client: Client,
    csrf_header: String,
}

impl ReqwestLikeTransport {
    pub fn new(csrf_header: &str, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            csrf_header: csrf_header.to_string(),
        })
    }
}

#[async_trait]
impl LikeTransportInterface for ReqwestLikeTransport {
    async fn send(&self, request: LikeRequest) -> AppResult<LikeResponse> {
        let mut builder = self
            .client
            .post(&request.url)
            .header(ACCEPT, "application/json");
        if let Some(token) = request.csrf_token.as_ref() {
            builder = builder.header(self.csrf_header.as_str(), token);
        }

        let response = builder.send().await?;
        let status = response.status();
        debug!("->> POST {} - {}", request.url, status);
        if !status.is_success() {
            return Err(AppError::UnexpectedStatus {
                url: request.url,
                status: status.as_u16(),
            });
        }

        Ok(response.json::<LikeResponse>().await?)
    }
}

use std::time::Duration;

use crate::entities::endpoints::LikeEndpoints;
use crate::error::{AppError, AppResult};
use crate::utils::cookie_utils::CSRF_COOKIE_NAME;
use crate::utils::http_transport::CSRF_HEADER_NAME;

pub const DEFAULT_LIKE_URL_TEMPLATE: &str = "http://127.0.0.1:8000/like/num/";
pub const DEFAULT_UNLIKE_URL_TEMPLATE: &str = "http://127.0.0.1:8000/unlike/num/";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub endpoints: LikeEndpoints,
    pub csrf_cookie_name: String,
    pub csrf_header_name: String,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        let _ = dotenvy::dotenv();
        let like_url_template = std::env::var("LIKE_URL_TEMPLATE")
            .unwrap_or(DEFAULT_LIKE_URL_TEMPLATE.to_string());
        let unlike_url_template = std::env::var("UNLIKE_URL_TEMPLATE")
            .unwrap_or(DEFAULT_UNLIKE_URL_TEMPLATE.to_string());
        let endpoints = LikeEndpoints::new(&like_url_template, &unlike_url_template)?;

        let csrf_cookie_name =
            std::env::var("CSRF_COOKIE_NAME").unwrap_or(CSRF_COOKIE_NAME.to_string());
        let csrf_header_name =
            std::env::var("CSRF_HEADER_NAME").unwrap_or(CSRF_HEADER_NAME.to_string());

        let request_timeout_secs: u64 = std::env::var("LIKE_REQUEST_TIMEOUT_SECS")
            .unwrap_or("10".to_string())
            .parse()
            .map_err(|e: std::num::ParseIntError| AppError::Config {
                key: "LIKE_REQUEST_TIMEOUT_SECS".to_string(),
                source: e.to_string(),
            })?;

        Ok(Self {
            endpoints,
            csrf_cookie_name,
            csrf_header_name,
            request_timeout: Duration::from_secs(request_timeout_secs),
        })
    }
}

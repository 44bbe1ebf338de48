use async_trait::async_trait;

use crate::entities::like_button::LikeResponse;
use crate::error::AppResult;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LikeRequest {
    pub url: String,
    pub csrf_token: Option<String>,
}

#[async_trait]
pub trait LikeTransportInterface {
    async fn send(&self, request: LikeRequest) -> AppResult<LikeResponse>;
}

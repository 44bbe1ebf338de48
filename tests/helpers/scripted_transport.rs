use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use like_toggle::entities::like_button::LikeResponse;
use like_toggle::error::AppResult;
use like_toggle::interfaces::credential_provider::CredentialProviderInterface;
use like_toggle::interfaces::like_transport::{LikeRequest, LikeTransportInterface};

/// Answers each request with the next scripted response after its delay.
pub struct ScriptedTransport {
    script: Mutex<VecDeque<(Duration, AppResult<LikeResponse>)>>,
    pub requests: Mutex<Vec<LikeRequest>>,
}

impl ScriptedTransport {
    #[allow(dead_code)]
    pub fn new(script: Vec<(Duration, AppResult<LikeResponse>)>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            requests: Mutex::new(vec![]),
        }
    }
}

#[async_trait]
impl LikeTransportInterface for ScriptedTransport {
    async fn send(&self, request: LikeRequest) -> AppResult<LikeResponse> {
        self.requests.lock().unwrap().push(request);
        let (delay, result) = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .expect("scripted response");
        tokio::time::sleep(delay).await;
        result
    }
}

pub struct StaticToken(pub Option<String>);

impl CredentialProviderInterface for StaticToken {
    fn token(&self) -> Option<String> {
        self.0.clone()
    }
}

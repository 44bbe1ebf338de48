use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

#[derive(Debug, Clone, Default)]
pub struct MockPost {
    pub likes_count: u64,
    pub liked: bool,
}

#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub path: String,
    pub csrf_token: Option<String>,
}

#[derive(Clone)]
pub struct MockLikeState {
    pub csrf_token: String,
    pub posts: Arc<Mutex<HashMap<i64, MockPost>>>,
    pub received: Arc<Mutex<Vec<ReceivedRequest>>>,
}

impl MockLikeState {
    #[allow(dead_code)]
    pub fn received(&self) -> Vec<ReceivedRequest> {
        self.received.lock().unwrap().clone()
    }

    #[allow(dead_code)]
    pub fn post(&self, post_pk: i64) -> Option<MockPost> {
        self.posts.lock().unwrap().get(&post_pk).cloned()
    }

    fn record(&self, path: String, headers: &HeaderMap) -> Result<(), StatusCode> {
        let csrf_token = headers
            .get("x-csrftoken")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());
        self.received.lock().unwrap().push(ReceivedRequest {
            path,
            csrf_token: csrf_token.clone(),
        });
        match csrf_token {
            Some(token) if token == self.csrf_token => Ok(()),
            _ => Err(StatusCode::FORBIDDEN),
        }
    }

    fn set_liked(&self, post_pk: i64, liked: bool) -> Result<Json<Value>, StatusCode> {
        let mut posts = self.posts.lock().unwrap();
        let post = posts.get_mut(&post_pk).ok_or(StatusCode::NOT_FOUND)?;
        match (post.liked, liked) {
            (false, true) => post.likes_count += 1,
            (true, false) => post.likes_count -= 1,
            _ => {}
        }
        post.liked = liked;
        Ok(Json(json!({
            "post_pk": post_pk,
            "likes_count": post.likes_count,
            "liked": post.liked,
        })))
    }
}

pub struct MockLikeServer {
    pub base_url: String,
    pub state: MockLikeState,
}

async fn like(
    State(state): State<MockLikeState>,
    Path(post_pk): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<Value>, StatusCode> {
    state.record(format!("/like/{post_pk}/"), &headers)?;
    state.set_liked(post_pk, true)
}

async fn unlike(
    State(state): State<MockLikeState>,
    Path(post_pk): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<Value>, StatusCode> {
    state.record(format!("/unlike/{post_pk}/"), &headers)?;
    state.set_liked(post_pk, false)
}

async fn broken(
    State(state): State<MockLikeState>,
    Path(post_pk): Path<i64>,
    headers: HeaderMap,
) -> Result<String, StatusCode> {
    state.record(format!("/broken/{post_pk}/"), &headers)?;
    Ok("<html>not json</html>".to_string())
}

async fn slow(Path(_post_pk): Path<i64>) -> StatusCode {
    tokio::time::sleep(Duration::from_secs(5)).await;
    StatusCode::OK
}

/// Serves `/like/:post_pk/` and `/unlike/:post_pk/` like the real endpoints,
/// plus `/broken/` (non-JSON body) and `/slow/` (never answers in time).
#[allow(dead_code)]
pub async fn start_mock_like_server(csrf_token: &str, posts: &[(i64, u64, bool)]) -> MockLikeServer {
    let state = MockLikeState {
        csrf_token: csrf_token.to_string(),
        posts: Arc::new(Mutex::new(
            posts
                .iter()
                .map(|(pk, likes_count, liked)| {
                    (
                        *pk,
                        MockPost {
                            likes_count: *likes_count,
                            liked: *liked,
                        },
                    )
                })
                .collect(),
        )),
        received: Arc::new(Mutex::new(vec![])),
    };

    let app = Router::new()
        .route("/like/:post_pk/", post(like))
        .route("/unlike/:post_pk/", post(unlike))
        .route("/broken/:post_pk/", post(broken))
        .route("/slow/:post_pk/", post(slow))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock server");
    let addr = listener.local_addr().expect("mock server addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock server");
    });

    MockLikeServer {
        base_url: format!("http://{addr}"),
        state,
    }
}

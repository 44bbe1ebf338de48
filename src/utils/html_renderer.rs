use std::collections::HashMap;
use std::sync::Mutex;

use askama::Template;
use tracing::warn;

use crate::entities::like_button::{IconState, LikeButton};
use crate::entities::post_pk::PostPk;
use crate::error::{AppError, AppResult};
use crate::interfaces::like_view::LikeViewInterface;

#[derive(Template, Debug)]
#[template(
    source = r#"<a class="like" href="" data-url="{{ target_url }}"><i class="{{ icon_state }}"></i><span>{{ count_display }}</span></a>"#,
    ext = "html"
)]
struct LikeButtonTemplate<'a> {
    target_url: &'a str,
    icon_state: IconState,
    count_display: &'a str,
}

pub fn render_like_button(button: &LikeButton) -> AppResult<String> {
    LikeButtonTemplate {
        target_url: &button.target_url,
        icon_state: button.icon_state,
        count_display: &button.count_display,
    }
    .render()
    .map_err(|e| AppError::Generic {
        description: format!("Render template error - {e}"),
    })
}

/// Keeps the last markup rendered per post and every error shown to the user.
#[derive(Debug, Default)]
pub struct HtmlLikeButtonRenderer {
    markup: Mutex<HashMap<PostPk, String>>,
    notifications: Mutex<Vec<String>>,
}

impl HtmlLikeButtonRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn markup(&self, post_pk: &PostPk) -> Option<String> {
        self.markup
            .lock()
            .ok()
            .and_then(|markup| markup.get(post_pk).cloned())
    }

    pub fn notifications(&self) -> Vec<String> {
        self.notifications
            .lock()
            .map(|n| n.clone())
            .unwrap_or_default()
    }
}

impl LikeViewInterface for HtmlLikeButtonRenderer {
    fn render(&self, button: &LikeButton) {
        let rendered = match render_like_button(button) {
            Ok(rendered) => rendered,
            Err(err) => {
                warn!("->> like button for post {} not rendered - {err}", button.post_pk);
                return;
            }
        };
        if let Ok(mut markup) = self.markup.lock() {
            markup.insert(button.post_pk.clone(), rendered);
        }
    }

    fn notify_error(&self, post_pk: &PostPk, error: &AppError) {
        warn!("->> like toggle failed for post {post_pk} - {error}");
        if let Ok(mut notifications) = self.notifications.lock() {
            notifications.push(format!("Could not update like for post {post_pk}: {error}"));
        }
    }
}

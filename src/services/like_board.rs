use std::collections::HashMap;
use std::sync::Mutex;

use crate::entities::endpoints::LikeEndpoints;
use crate::entities::like_button::LikeButton;
use crate::entities::post_pk::PostPk;
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct PostLikeData {
    pub post_pk: PostPk,
    pub likes_count: u64,
}

/// Every like button bound on the page, keyed by post.
#[derive(Debug, Default)]
pub struct LikeBoard {
    buttons: Mutex<HashMap<PostPk, LikeButton>>,
}

impl LikeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buttons for a post list, filled for the posts the viewer already liked.
    pub fn from_posts(
        posts: &[PostLikeData],
        liked_post_pks: &[PostPk],
        endpoints: &LikeEndpoints,
    ) -> Self {
        let buttons = posts
            .iter()
            .map(|post| {
                let liked = liked_post_pks.contains(&post.post_pk);
                let button =
                    LikeButton::for_post(post.post_pk.clone(), post.likes_count, liked, endpoints);
                (post.post_pk.clone(), button)
            })
            .collect::<HashMap<PostPk, LikeButton>>();
        Self {
            buttons: Mutex::new(buttons),
        }
    }

    pub fn insert(&self, button: LikeButton) -> AppResult<()> {
        self.lock()?.insert(button.post_pk.clone(), button);
        Ok(())
    }

    pub fn get(&self, post_pk: &PostPk) -> AppResult<LikeButton> {
        self.lock()?
            .get(post_pk)
            .cloned()
            .ok_or_else(|| AppError::UnknownButton {
                post_pk: post_pk.to_string(),
            })
    }

    pub fn buttons(&self) -> AppResult<Vec<LikeButton>> {
        Ok(self.lock()?.values().cloned().collect())
    }

    /// Replaces the button with `f(current)` while holding the board lock.
    pub fn update<F>(&self, post_pk: &PostPk, f: F) -> AppResult<LikeButton>
    where
        F: FnOnce(&LikeButton) -> LikeButton,
    {
        let mut buttons = self.lock()?;
        let current = buttons
            .get_mut(post_pk)
            .ok_or_else(|| AppError::UnknownButton {
                post_pk: post_pk.to_string(),
            })?;
        let next = f(&*current);
        *current = next.clone();
        Ok(next)
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, HashMap<PostPk, LikeButton>>> {
        self.buttons.lock().map_err(|_| AppError::Generic {
            description: "Like board lock poisoned".to_string(),
        })
    }
}

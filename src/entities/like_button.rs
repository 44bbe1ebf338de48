use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::entities::endpoints::LikeEndpoints;
use crate::entities::post_pk::PostPk;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToggleState {
    Liked,
    NotLiked,
}

impl From<bool> for ToggleState {
    fn from(liked: bool) -> Self {
        match liked {
            true => ToggleState::Liked,
            false => ToggleState::NotLiked,
        }
    }
}

/// Thumbs-up icon, displayed as its CSS class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
pub enum IconState {
    #[strum(to_string = "fas fa-thumbs-up")]
    Filled,
    #[strum(to_string = "far fa-thumbs-up")]
    Outline,
}

impl From<ToggleState> for IconState {
    fn from(state: ToggleState) -> Self {
        match state {
            ToggleState::Liked => IconState::Filled,
            ToggleState::NotLiked => IconState::Outline,
        }
    }
}

/// Body returned by both the like and the unlike endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeResponse {
    pub likes_count: u64,
    pub liked: bool,
    pub post_pk: PostPk,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeButton {
    pub post_pk: PostPk,
    pub target_url: String,
    pub count_display: String,
    pub icon_state: IconState,
}

impl LikeButton {
    /// State of a button as the page first renders it.
    pub fn for_post(
        post_pk: PostPk,
        likes_count: u64,
        liked: bool,
        endpoints: &LikeEndpoints,
    ) -> Self {
        Self {
            target_url: endpoints.target_for(liked, &post_pk),
            count_display: likes_count.to_string(),
            icon_state: ToggleState::from(liked).into(),
            post_pk,
        }
    }

    /// Next state after a confirmed response. Only the response decides the
    /// result, so replaying it yields the same button.
    pub fn apply(&self, response: &LikeResponse, endpoints: &LikeEndpoints) -> LikeButton {
        LikeButton {
            post_pk: self.post_pk.clone(),
            target_url: endpoints.target_for(response.liked, &response.post_pk),
            count_display: response.likes_count.to_string(),
            icon_state: ToggleState::from(response.liked).into(),
        }
    }

    pub fn toggle_state(&self) -> ToggleState {
        match self.icon_state {
            IconState::Filled => ToggleState::Liked,
            IconState::Outline => ToggleState::NotLiked,
        }
    }
}

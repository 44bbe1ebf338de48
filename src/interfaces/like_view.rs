use crate::entities::like_button::LikeButton;
use crate::entities::post_pk::PostPk;
use crate::error::AppError;

pub trait LikeViewInterface {
    fn render(&self, button: &LikeButton);
    /// Must not block; the button keeps its previous state.
    fn notify_error(&self, post_pk: &PostPk, error: &AppError);
}

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{info, warn};
use uuid::Uuid;

use crate::entities::click_event::ClickEvent;
use crate::entities::endpoints::LikeEndpoints;
use crate::entities::like_button::LikeButton;
use crate::entities::post_pk::PostPk;
use crate::error::AppResult;
use crate::interfaces::credential_provider::CredentialProviderInterface;
use crate::interfaces::like_transport::{LikeRequest, LikeTransportInterface};
use crate::interfaces::like_view::LikeViewInterface;
use crate::services::like_board::LikeBoard;

pub struct LikeToggleService<C, T, V>
where
    C: CredentialProviderInterface,
    T: LikeTransportInterface,
    V: LikeViewInterface,
{
    credentials: C,
    transport: T,
    view: V,
    board: LikeBoard,
    endpoints: LikeEndpoints,
}

impl<C, T, V> LikeToggleService<C, T, V>
where
    C: CredentialProviderInterface,
    T: LikeTransportInterface,
    V: LikeViewInterface,
{
    pub fn new(
        credentials: C,
        transport: T,
        view: V,
        board: LikeBoard,
        endpoints: LikeEndpoints,
    ) -> Self {
        Self {
            credentials,
            transport,
            view,
            board,
            endpoints,
        }
    }

    pub fn board(&self) -> &LikeBoard {
        &self.board
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Renders every bound button once, before any click.
    pub fn render_all(&self) -> AppResult<()> {
        for button in self.board.buttons()? {
            self.view.render(&button);
        }
        Ok(())
    }

    pub async fn handle_click(
        &self,
        post_pk: &PostPk,
        event: &mut ClickEvent,
    ) -> AppResult<LikeButton> {
        event.prevent_default();
        let req_id = Uuid::new_v4();

        let prior = self.board.get(post_pk)?;
        let csrf_token = self.credentials.token();
        if csrf_token.is_none() {
            warn!("->> {req_id} no csrf token, sending like request without it");
        }

        let request = LikeRequest {
            url: prior.target_url.clone(),
            csrf_token,
        };
        info!("->> {req_id} POST {} for post {post_pk}", request.url);

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(err) => {
                warn!("->> {req_id} like toggle failed - {err}");
                self.view.notify_error(post_pk, &err);
                return Err(err);
            }
        };

        // rendered under the board lock so board and view agree on the last completion
        let next = self.board.update(post_pk, |current| {
            let next = current.apply(&response, &self.endpoints);
            self.view.render(&next);
            next
        })?;
        info!(
            "->> {req_id} post {post_pk} liked={} likes_count={}",
            response.liked, response.likes_count
        );
        Ok(next)
    }
}

impl<C, T, V> LikeToggleService<C, T, V>
where
    C: CredentialProviderInterface + Send + Sync + 'static,
    T: LikeTransportInterface + Send + Sync + 'static,
    V: LikeViewInterface + Send + Sync + 'static,
{
    /// Runs a click in the background. Clicks are neither merged nor cancelled.
    pub fn spawn_click(self: &Arc<Self>, post_pk: PostPk) -> JoinHandle<AppResult<LikeButton>> {
        let service = self.clone();
        tokio::spawn(async move {
            let mut event = ClickEvent::new();
            service.handle_click(&post_pk, &mut event).await
        })
    }
}

use like_toggle::config::AppConfig;
use like_toggle::entities::click_event::ClickEvent;
use like_toggle::entities::post_pk::PostPk;
use like_toggle::error::{AppError, AppResult};
use like_toggle::services::like_board::{LikeBoard, PostLikeData};
use like_toggle::services::like_toggle_service::LikeToggleService;
use like_toggle::utils::cookie_utils::CookieCredentialProvider;
use like_toggle::utils::html_renderer::HtmlLikeButtonRenderer;
use like_toggle::utils::http_transport::ReqwestLikeTransport;
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: like_toggle <post_pk> <likes_count> <liked:true|false>";

fn parse_args(args: &[String]) -> AppResult<(PostPk, u64, bool)> {
    let usage = || AppError::Generic {
        description: USAGE.to_string(),
    };
    match args {
        [post_pk, likes_count, liked] => {
            let likes_count = likes_count.parse::<u64>().map_err(|_| usage())?;
            let liked = liked.parse::<bool>().map_err(|_| usage())?;
            Ok((PostPk::from(post_pk.as_str()), likes_count, liked))
        }
        _ => Err(usage()),
    }
}

#[tokio::main]
async fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = AppConfig::from_env()?;
    let args = std::env::args().skip(1).collect::<Vec<String>>();
    let (post_pk, likes_count, liked) = parse_args(&args)?;

    let cookies = std::env::var("LIKE_COOKIES").unwrap_or_default();
    let credentials = CookieCredentialProvider::new(&cookies, &config.csrf_cookie_name);
    let transport = ReqwestLikeTransport::new(&config.csrf_header_name, config.request_timeout)?;
    let liked_post_pks = match liked {
        true => vec![post_pk.clone()],
        false => vec![],
    };
    let board = LikeBoard::from_posts(
        &[PostLikeData {
            post_pk: post_pk.clone(),
            likes_count,
        }],
        &liked_post_pks,
        &config.endpoints,
    );

    let service = LikeToggleService::new(
        credentials,
        transport,
        HtmlLikeButtonRenderer::new(),
        board,
        config.endpoints.clone(),
    );
    service.render_all()?;

    let mut event = ClickEvent::new();
    let result = service.handle_click(&post_pk, &mut event).await;
    if let Some(markup) = service.view().markup(&post_pk) {
        println!("{markup}");
    }
    let button = result?;
    info!("->> post {post_pk} is now {:?}", button.toggle_state());

    Ok(())
}

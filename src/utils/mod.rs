pub mod cookie_utils;
pub mod html_renderer;
pub mod http_transport;

pub mod click_event;
pub mod endpoints;
pub mod like_button;
pub mod post_pk;

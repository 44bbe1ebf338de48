pub mod like_board;
pub mod like_toggle_service;

pub mod credential_provider;
pub mod like_transport;
pub mod like_view;

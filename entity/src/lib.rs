//! SeaORM entity models for the playlist collaboration backend.

pub mod prelude;

pub mod event;
pub mod oauth_token;
pub mod playlist;
pub mod playlist_config;
pub mod song;
pub mod user;

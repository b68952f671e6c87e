//! Request and response DTOs shared by the HTTP layer.

pub mod api;
pub mod event;
pub mod playlist;
pub mod song;
pub mod user;

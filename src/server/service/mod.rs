//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce
//! ownership and submission rules, own transaction boundaries, and are the only
//! callers of the Spotify provider.
//!
//! Every provider call that uses a user's credentials first passes through
//! `token::TokenRefreshGuard`. Calls that change both local state and Spotify
//! state go through `coordinator::PlaylistMutationCoordinator`.

pub mod auth;
pub mod coordinator;
pub mod event;
pub mod playlist;
pub mod song;
pub mod token;

#[cfg(test)]
mod test;

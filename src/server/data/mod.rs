//! Database repository layer for all domain entities.
//!
//! Repositories wrap SeaORM queries for one table each and return domain models.
//! They are generic over `ConnectionTrait` so the same repository runs against the
//! connection pool or inside a transaction opened by a service.

pub mod event;
pub mod oauth_token;
pub mod playlist;
pub mod playlist_config;
pub mod song;
pub mod user;

#[cfg(test)]
mod test;

//! Playlist Collab Test Utils
//!
//! Shared helpers for the backend's unit and integration tests. The crate builds
//! in-memory SQLite databases with only the tables a test needs, hands out a
//! session backed by the same database, and provides factories for seeding rows.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn seeds_a_playlist() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_playlist_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (owner, playlist) = factory::helpers::create_playlist_with_owner(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;

//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customized rows and a `create_*`
//! shorthand for defaults. Factories insert rows directly through SeaORM and do
//! not go through the application's repositories.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let owner = factory::user::UserFactory::new(&db)
//!     .spotify_id("host-account")
//!     .build()
//!     .await?;
//! let token = factory::oauth_token::OauthTokenFactory::new(&db, owner.id)
//!     .expired()
//!     .build()
//!     .await?;
//! ```

pub mod event;
pub mod helpers;
pub mod oauth_token;
pub mod playlist;
pub mod song;
pub mod user;

pub use event::create_event;
pub use oauth_token::create_token;
pub use playlist::create_playlist;
pub use song::create_song;
pub use user::create_user;

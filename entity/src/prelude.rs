pub use super::event::Entity as Event;
pub use super::oauth_token::Entity as OauthToken;
pub use super::playlist::Entity as Playlist;
pub use super::playlist_config::Entity as PlaylistConfig;
pub use super::song::Entity as Song;
pub use super::user::Entity as User;

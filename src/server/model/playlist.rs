//! Playlist domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::playlist::{
        CreatePlaylistDto, CreatedPlaylistDto, PlaylistConfigDto, PlaylistDto, PublicPlaylistDto,
        UpdatePlaylistConfigDto,
    },
    server::model::token::StoredToken,
};

/// Explicit tracks are allowed on new playlists.
pub const DEFAULT_EXPLICIT: bool = true;
/// New playlists require the host to approve each song.
pub const DEFAULT_REQUIRE_APPROVAL: bool = true;
/// Maximum number of non-blacklisted songs on a new playlist.
pub const DEFAULT_MAX_SONGS: i32 = 50;

/// Local record of a playlist created on Spotify.
#[derive(Debug, Clone, PartialEq)]
pub struct Playlist {
    pub id: i32,
    pub owner_id: i32,
    pub spotify_playlist_id: String,
    pub name: String,
    /// Six character join code, `[A-Z0-9]`.
    pub code: String,
    pub created_at: DateTime<Utc>,
}

impl Playlist {
    pub fn from_entity(entity: entity::playlist::Model) -> Self {
        Self {
            id: entity.id,
            owner_id: entity.owner_id,
            spotify_playlist_id: entity.spotify_playlist_id,
            name: entity.name,
            code: entity.code,
            created_at: entity.created_at,
        }
    }
}

/// Submission rules for a playlist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaylistConfig {
    pub explicit: bool,
    pub require_approval: bool,
    pub max_songs: i32,
}

impl Default for PlaylistConfig {
    fn default() -> Self {
        Self {
            explicit: DEFAULT_EXPLICIT,
            require_approval: DEFAULT_REQUIRE_APPROVAL,
            max_songs: DEFAULT_MAX_SONGS,
        }
    }
}

impl PlaylistConfig {
    pub fn from_entity(entity: entity::playlist_config::Model) -> Self {
        Self {
            explicit: entity.explicit,
            require_approval: entity.require_approval,
            max_songs: entity.max_songs,
        }
    }

    pub fn into_dto(self) -> PlaylistConfigDto {
        PlaylistConfigDto {
            explicit: self.explicit,
            require_approval: self.require_approval,
            max_songs: self.max_songs,
        }
    }
}

/// A playlist together with its configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistWithConfig {
    pub playlist: Playlist,
    pub config: PlaylistConfig,
}

impl PlaylistWithConfig {
    pub fn into_dto(self) -> PlaylistDto {
        PlaylistDto {
            id: self.playlist.id,
            owner_id: self.playlist.owner_id,
            spotify_playlist_id: self.playlist.spotify_playlist_id,
            name: self.playlist.name,
            code: self.playlist.code,
            created_at: self.playlist.created_at,
            config: self.config.into_dto(),
        }
    }

    pub fn into_public_dto(self) -> PublicPlaylistDto {
        PublicPlaylistDto {
            name: self.playlist.name,
            code: self.playlist.code,
            config: self.config.into_dto(),
        }
    }
}

/// Parameters for creating a playlist on Spotify and recording it locally.
#[derive(Debug, Clone)]
pub struct CreatePlaylistParams {
    pub owner_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub public: bool,
    pub collaborative: bool,
}

impl CreatePlaylistParams {
    pub fn from_dto(owner_id: i32, dto: CreatePlaylistDto) -> Self {
        Self {
            owner_id,
            name: dto.name,
            description: dto.description,
            public: dto.is_public,
            collaborative: dto.is_collaborative,
        }
    }
}

/// Row values for a new local playlist record.
#[derive(Debug, Clone)]
pub struct InsertPlaylistParam {
    pub owner_id: i32,
    pub spotify_playlist_id: String,
    pub name: String,
    pub code: String,
}

/// Result of a playlist creation.
#[derive(Debug, Clone)]
pub struct PlaylistCreation {
    pub playlist: PlaylistWithConfig,
    /// Present only when the owner's token was refreshed during creation.
    pub refreshed_token: Option<StoredToken>,
}

impl PlaylistCreation {
    pub fn into_dto(self) -> CreatedPlaylistDto {
        CreatedPlaylistDto {
            playlist: self.playlist.into_dto(),
            refreshed_token: self.refreshed_token.map(StoredToken::into_dto),
        }
    }
}

/// Partial configuration update; `None` keeps the stored value.
#[derive(Debug, Clone)]
pub struct UpdatePlaylistConfigParams {
    pub playlist_id: i32,
    pub explicit: Option<bool>,
    pub require_approval: Option<bool>,
    pub max_songs: Option<i32>,
}

impl UpdatePlaylistConfigParams {
    pub fn from_dto(dto: UpdatePlaylistConfigDto) -> Self {
        Self {
            playlist_id: dto.playlist_id,
            explicit: dto.explicit,
            require_approval: dto.require_approval,
            max_songs: dto.max_songs,
        }
    }

    /// Applies the present fields on top of `current`.
    pub fn apply_to(&self, current: PlaylistConfig) -> PlaylistConfig {
        PlaylistConfig {
            explicit: self.explicit.unwrap_or(current.explicit),
            require_approval: self.require_approval.unwrap_or(current.require_approval),
            max_songs: self.max_songs.unwrap_or(current.max_songs),
        }
    }
}

//! Song domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::song::{SongDecisionDto, SongDto, SongStatusDto},
    server::{
        error::{internal::InternalError, AppError},
        model::token::StoredToken,
    },
};

/// Disposition of a submitted song.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SongStatus {
    Pending,
    Accepted,
    Rejected,
}

impl SongStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            other => Err(InternalError::UnknownSongStatus(other.to_string()).into()),
        }
    }

    pub fn from_dto(dto: SongStatusDto) -> Self {
        match dto {
            SongStatusDto::Pending => Self::Pending,
            SongStatusDto::Accepted => Self::Accepted,
            SongStatusDto::Rejected => Self::Rejected,
        }
    }

    pub fn into_dto(self) -> SongStatusDto {
        match self {
            Self::Pending => SongStatusDto::Pending,
            Self::Accepted => SongStatusDto::Accepted,
            Self::Rejected => SongStatusDto::Rejected,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    pub id: i32,
    pub playlist_id: i32,
    pub uri: String,
    pub status: SongStatus,
    pub blacklisted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Song {
    /// Converts an entity model to a song domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Song)` - The converted song
    /// - `Err(AppError::InternalErr(UnknownSongStatus))` - Stored status is not recognized
    pub fn from_entity(entity: entity::song::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            playlist_id: entity.playlist_id,
            uri: entity.uri,
            status: SongStatus::parse(&entity.status)?,
            blacklisted: entity.blacklisted,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> SongDto {
        SongDto {
            id: self.id,
            playlist_id: self.playlist_id,
            uri: self.uri,
            status: self.status.into_dto(),
            blacklisted: self.blacklisted,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Host decision on a pending song.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SongDecision {
    Accept,
    Reject,
}

impl SongDecision {
    /// Parses the `{decision}` path segment.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "accept" => Ok(Self::Accept),
            "reject" => Ok(Self::Reject),
            other => Err(AppError::Validation(format!(
                "Unknown song decision '{}', expected 'accept' or 'reject'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SongDecisionParams {
    pub playlist_id: i32,
    pub song_uri: String,
    pub decision: SongDecision,
    /// User performing the decision; must own the playlist.
    pub user_id: i32,
}

#[derive(Debug, Clone)]
pub struct SongDecisionOutcome {
    pub song: Song,
    /// Present only when the owner's token was refreshed during the decision.
    pub refreshed_token: Option<StoredToken>,
}

impl SongDecisionOutcome {
    pub fn into_dto(self) -> SongDecisionDto {
        SongDecisionDto {
            song: self.song.into_dto(),
            refreshed_token: self.refreshed_token.map(StoredToken::into_dto),
        }
    }
}

/// Anonymous participant submission.
#[derive(Debug, Clone)]
pub struct SubmitSongParams {
    pub playlist_code: String,
    pub song_uri: String,
}

/// Parses a `spotify:track:<id>` URI and returns the track id.
///
/// Track ids are base62.
pub fn track_id_from_uri(uri: &str) -> Result<&str, AppError> {
    let invalid = || AppError::Validation(format!("'{}' is not a Spotify track URI", uri));

    let id = uri.strip_prefix("spotify:track:").ok_or_else(invalid)?;
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(invalid());
    }

    Ok(id)
}

use sea_orm::DbErr;

use crate::server::{data::playlist_config::PlaylistConfigRepository, model::playlist::PlaylistConfig};
use test_utils::{builder::TestBuilder, factory};

mod update;

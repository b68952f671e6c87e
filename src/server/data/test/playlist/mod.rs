use sea_orm::DbErr;

use crate::server::{data::playlist::PlaylistRepository, model::playlist::InsertPlaylistParam};
use test_utils::{builder::TestBuilder, factory};

mod code_exists;
mod delete;
mod insert;
mod list_by_owner;

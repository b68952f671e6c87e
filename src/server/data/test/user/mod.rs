use crate::server::{data::user::UserRepository, model::user::CreateSpotifyUserParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_api_token;
mod get_or_create;
mod set_api_token;

use crate::server::{
    data::song::SongRepository,
    error::AppError,
    model::song::SongStatus,
};
use test_utils::{builder::TestBuilder, factory};

mod count_active;
mod insert;
mod list_by_playlist;

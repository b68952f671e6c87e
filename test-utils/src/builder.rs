use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for test contexts backed by an in-memory SQLite database.
///
/// Add the entity tables a test touches, then call `build()`. Tables are created
/// in insertion order, so referenced tables must be added before the tables that
/// hold foreign keys to them.
///
/// # Example
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_table(entity::prelude::User)
///     .with_table(entity::prelude::OauthToken)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements generated from entity definitions.
    tables: Vec<TableCreateStatement>,
    /// Composite indexes the entity definitions cannot express, created after the tables.
    indexes: Vec<IndexCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a builder with no tables.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds the table for `entity` using SQLite syntax.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to generate the CREATE TABLE statement from
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the user and credential tables.
    ///
    /// Enough for tests of login, bearer authentication and token refresh.
    pub fn with_auth_tables(self) -> Self {
        self.with_table(User).with_table(OauthToken)
    }

    /// Adds every table a playlist operation can touch.
    ///
    /// Covers users, credentials, playlists, their configuration and songs, in
    /// foreign key order.
    pub fn with_playlist_tables(self) -> Self {
        self.with_auth_tables()
            .with_table(Playlist)
            .with_table(PlaylistConfig)
            .with_table(Song)
            .with_index(
                Index::create()
                    .name("idx_song_playlist_uri")
                    .table(Song)
                    .col(entity::song::Column::PlaylistId)
                    .col(entity::song::Column::Uri)
                    .unique()
                    .to_owned(),
            )
    }

    /// Adds an index created once all tables exist.
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds the playlist tables plus events.
    pub fn with_all_tables(self) -> Self {
        self.with_playlist_tables().with_table(Event)
    }

    /// Connects to a fresh in-memory database and creates the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with the schema in place
    /// - `Err(TestError::Database)` - Connection or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        context.with_tables(self.tables).await?;
        context.with_indexes(self.indexes).await?;

        Ok(context)
    }
}

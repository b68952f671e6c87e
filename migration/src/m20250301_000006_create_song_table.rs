use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000003_create_playlist_table::Playlist;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Song::Table)
                    .if_not_exists()
                    .col(pk_auto(Song::Id))
                    .col(integer(Song::PlaylistId))
                    .col(string(Song::Uri))
                    .col(string(Song::Status).default("pending"))
                    .col(boolean(Song::Blacklisted).default(false))
                    .col(
                        timestamp(Song::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Song::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_song_playlist_id")
                            .from(Song::Table, Song::PlaylistId)
                            .to(Playlist::Table, Playlist::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_song_playlist_uri")
                    .table(Song::Table)
                    .col(Song::PlaylistId)
                    .col(Song::Uri)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Song::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Song {
    Table,
    Id,
    PlaylistId,
    Uri,
    Status,
    Blacklisted,
    CreatedAt,
    UpdatedAt,
}

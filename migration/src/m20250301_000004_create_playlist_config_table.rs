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
                    .table(PlaylistConfig::Table)
                    .if_not_exists()
                    .col(pk_auto(PlaylistConfig::Id))
                    .col(integer(PlaylistConfig::PlaylistId).unique_key())
                    .col(boolean(PlaylistConfig::Explicit).default(true))
                    .col(boolean(PlaylistConfig::RequireApproval).default(true))
                    .col(integer(PlaylistConfig::MaxSongs).default(50))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_playlist_config_playlist_id")
                            .from(PlaylistConfig::Table, PlaylistConfig::PlaylistId)
                            .to(Playlist::Table, Playlist::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlaylistConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlaylistConfig {
    Table,
    Id,
    PlaylistId,
    Explicit,
    RequireApproval,
    MaxSongs,
}

use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OauthToken::Table)
                    .if_not_exists()
                    .col(pk_auto(OauthToken::Id))
                    .col(integer(OauthToken::UserId).unique_key())
                    .col(text(OauthToken::AccessToken))
                    .col(text(OauthToken::RefreshToken))
                    .col(timestamp(OauthToken::ExpiresAt))
                    .col(
                        timestamp(OauthToken::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_oauth_token_user_id")
                            .from(OauthToken::Table, OauthToken::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_oauth_token_access_token")
                    .table(OauthToken::Table)
                    .col(OauthToken::AccessToken)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OauthToken::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OauthToken {
    Table,
    Id,
    UserId,
    AccessToken,
    RefreshToken,
    ExpiresAt,
    UpdatedAt,
}

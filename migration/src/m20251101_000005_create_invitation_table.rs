use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Invitation::Table)
                    .if_not_exists()
                    .col(pk_auto(Invitation::Id))
                    .col(string(Invitation::Email))
                    .col(string_len(Invitation::InviteRole, 16))
                    .col(string_uniq(Invitation::Token))
                    .col(boolean(Invitation::IsUsed).default(false))
                    .col(timestamp_with_time_zone(Invitation::ExpiresAt))
                    .col(timestamp_with_time_zone_null(Invitation::UsedAt))
                    .col(
                        timestamp_with_time_zone(Invitation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_invitation_email")
                    .table(Invitation::Table)
                    .col(Invitation::Email)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Invitation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Invitation {
    Table,
    Id,
    Email,
    InviteRole,
    Token,
    IsUsed,
    ExpiresAt,
    UsedAt,
    CreatedAt,
}

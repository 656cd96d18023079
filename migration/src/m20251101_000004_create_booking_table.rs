use sea_orm_migration::{prelude::*, schema::*};

use super::{m20251101_000001_create_user_table::User, m20251101_000003_create_room_table::Room};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(integer_null(Booking::GuestId))
                    .col(string(Booking::GuestName))
                    .col(string_null(Booking::GuestEmail))
                    .col(string_null(Booking::GuestPhone))
                    .col(integer(Booking::RoomId))
                    .col(timestamp_with_time_zone(Booking::CheckIn))
                    .col(timestamp_with_time_zone(Booking::CheckOut))
                    .col(string_len(Booking::Status, 16).default("PENDING"))
                    .col(big_integer(Booking::TotalPrice))
                    .col(
                        timestamp_with_time_zone(Booking::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_room_id")
                            .from(Booking::Table, Booking::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_guest_id")
                            .from(Booking::Table, Booking::GuestId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_room_status")
                    .table(Booking::Table)
                    .col(Booking::RoomId)
                    .col(Booking::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    GuestId,
    GuestName,
    GuestEmail,
    GuestPhone,
    RoomId,
    CheckIn,
    CheckOut,
    Status,
    TotalPrice,
    CreatedAt,
}

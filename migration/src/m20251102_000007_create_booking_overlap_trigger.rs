use sea_orm_migration::prelude::*;

/// Message raised by the trigger; the booking service matches on it.
pub const BOOKING_OVERLAP_MESSAGE: &str = "booking overlaps an active booking for this room";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(&format!(
            "CREATE TRIGGER IF NOT EXISTS trg_booking_no_overlap
             BEFORE INSERT ON booking
             WHEN NEW.status IN ('PENDING', 'CONFIRMED', 'CHECKED_IN')
             BEGIN
                 SELECT RAISE(ABORT, '{BOOKING_OVERLAP_MESSAGE}')
                 WHERE EXISTS (
                     SELECT 1 FROM booking
                     WHERE room_id = NEW.room_id
                       AND status IN ('PENDING', 'CONFIRMED', 'CHECKED_IN')
                       AND check_in < NEW.check_out
                       AND check_out > NEW.check_in
                 );
             END;"
        ))
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TRIGGER IF EXISTS trg_booking_no_overlap;")
            .await?;

        Ok(())
    }
}

pub use sea_orm_migration::prelude::*;

mod m20251101_000001_create_user_table;
mod m20251101_000002_create_room_type_table;
mod m20251101_000003_create_room_table;
mod m20251101_000004_create_booking_table;
mod m20251101_000005_create_invitation_table;
mod m20251101_000006_create_amenity_table;
mod m20251102_000007_create_booking_overlap_trigger;

pub use m20251102_000007_create_booking_overlap_trigger::BOOKING_OVERLAP_MESSAGE;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_create_user_table::Migration),
            Box::new(m20251101_000002_create_room_type_table::Migration),
            Box::new(m20251101_000003_create_room_table::Migration),
            Box::new(m20251101_000004_create_booking_table::Migration),
            Box::new(m20251101_000005_create_invitation_table::Migration),
            Box::new(m20251101_000006_create_amenity_table::Migration),
            Box::new(m20251102_000007_create_booking_overlap_trigger::Migration),
        ]
    }
}

//! Shared helpers for factories.

use sea_orm::{DatabaseConnection, DbErr};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Monotonically increasing value used to keep factory defaults unique.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a room type and one room of that type.
///
/// # Returns
/// - `Ok((room_type, room))` - Both inserted with factory defaults
/// - `Err(DbErr)` - Database error during creation
pub async fn create_room_with_type(
    db: &DatabaseConnection,
) -> Result<(entity::room_type::Model, entity::room::Model), DbErr> {
    let room_type = crate::factory::room_type::create_room_type(db).await?;
    let room = crate::factory::room::create_room(db, room_type.id).await?;

    Ok((room_type, room))
}

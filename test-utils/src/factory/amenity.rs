//! Amenity factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub async fn create_amenity(
    db: &DatabaseConnection,
    name: impl Into<String>,
    icon: impl Into<String>,
) -> Result<entity::amenity::Model, DbErr> {
    entity::amenity::ActiveModel {
        name: ActiveValue::Set(name.into()),
        description: ActiveValue::Set("Test amenity".to_string()),
        icon: ActiveValue::Set(icon.into()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

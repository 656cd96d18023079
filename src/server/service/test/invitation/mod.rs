use entity::{
    invitation::InviteRole,
    user::{AccountStatus, Role},
};
use sea_orm::{DatabaseConnection, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{invitation::InvitationError, AppError},
    model::{invitation::ConsumeInvitationParams, user::User},
    service::{invitation::InvitationService, notification::EmailSender},
};

mod consume;
mod create;

const APP_URL: &str = "https://hoterra.test";

/// A sender without an API key; messages are only logged.
fn log_only_sender() -> EmailSender {
    EmailSender::new(
        reqwest::Client::new(),
        None,
        "noreply@hoterra.test".to_string(),
    )
}

fn redeem(email: &str, token: &str, role: &str) -> ConsumeInvitationParams {
    ConsumeInvitationParams {
        email: email.to_string(),
        token: token.to_string(),
        role: role.to_string(),
        name: "New Staff".to_string(),
        password: "correct horse".to_string(),
        phone: None,
    }
}

async fn admin(db: &DatabaseConnection) -> User {
    User::from_entity(factory::create_admin(db).await.unwrap())
}

//! Staff invitations: issuing a single-use registration link and redeeming it.

use chrono::{Duration, Utc};
use entity::{
    invitation::InviteRole,
    user::{AccountStatus, Role},
};
use rand::Rng;
use sea_orm::{DatabaseConnection, TransactionTrait};
use url::Url;

use crate::server::{
    data::{invitation::InvitationRepository, user::UserRepository},
    error::{internal::InternalError, invitation::InvitationError, AppError},
    model::{
        invitation::{ConsumeInvitationParams, CreateInvitationParams, IssuedInvitation},
        user::{CreateUserParams, UpgradeUserParams, User},
    },
    service::{
        notification::{invitation_email, EmailSender},
        password::{hash_password, validate_password},
    },
};

/// How long an invitation stays redeemable.
const INVITATION_TTL_DAYS: i64 = 7;

pub struct InvitationService<'a> {
    db: &'a DatabaseConnection,
    email_sender: &'a EmailSender,
    app_url: &'a str,
}

impl<'a> InvitationService<'a> {
    pub fn new(db: &'a DatabaseConnection, email_sender: &'a EmailSender, app_url: &'a str) -> Self {
        Self {
            db,
            email_sender,
            app_url,
        }
    }

    /// Issues an invitation for `email`, replacing any unused invitation for it, and emails the
    /// registration link.
    ///
    /// Email delivery happens after the invitation is stored; a delivery failure is logged and
    /// the link is still returned.
    ///
    /// # Returns
    /// - `Ok(IssuedInvitation)` - Stored invitation and its registration URL
    /// - `Err(AppError::BadRequest)` - Email missing
    /// - `Err(InvitationError::InvalidRole)` - Role is not ADMIN or RECEPTIONIST
    /// - `Err(InvitationError::AlreadyRegistered)` - Email belongs to a staff account
    pub async fn create(
        &self,
        caller: &User,
        email: &str,
        role: &str,
    ) -> Result<IssuedInvitation, AppError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(AppError::BadRequest("Email is required".to_string()));
        }

        let invite_role = InviteRole::parse(role.trim())
            .ok_or_else(|| InvitationError::InvalidRole(role.to_string()))?;

        if let Some(existing) = UserRepository::new(self.db).find_by_email(email).await? {
            if !existing.has_role(Role::Guest) {
                return Err(InvitationError::AlreadyRegistered.into());
            }
        }

        let token = generate_token();
        let registration_url = registration_url(self.app_url, invite_role, &token)?;

        let txn = self.db.begin().await?;

        let invitation_repo = InvitationRepository::new(&txn);
        let replaced = invitation_repo.delete_unused_for_email(email).await?;
        let invitation = invitation_repo
            .create(CreateInvitationParams {
                email: email.to_string(),
                invite_role,
                token,
                expires_at: Utc::now() + Duration::days(INVITATION_TTL_DAYS),
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            invitation_id = invitation.id,
            role = invite_role.as_str(),
            replaced,
            invited_by = caller.id,
            "Invitation created"
        );

        if let Err(e) = self
            .email_sender
            .send(invitation_email(email, invite_role.as_str(), &registration_url))
            .await
        {
            tracing::error!(
                invitation_id = invitation.id,
                "Failed to send invitation email: {}",
                e
            );
        }

        Ok(IssuedInvitation {
            invitation,
            registration_url,
        })
    }

    /// Redeems an invitation, creating the staff account or upgrading a guest-only account in
    /// place.
    ///
    /// The account write and the used-flag update share one transaction, and the flag update only
    /// succeeds while the invitation is still unused, so a token can be redeemed once.
    ///
    /// # Returns
    /// - `Ok(User)` - The staff account
    /// - `Err(InvitationError::InvalidOrExpiredToken)` - Unknown, used or expired token
    /// - `Err(InvitationError::EmailMismatch)` - Email differs from the invited one
    /// - `Err(InvitationError::InvalidRole)` - Role differs from the invited one
    /// - `Err(InvitationError::AlreadyRegisteredHigherRole)` - Account holds a non-guest role
    /// - `Err(AppError::BadRequest)` - Name missing or password too short
    pub async fn consume(&self, params: ConsumeInvitationParams) -> Result<User, AppError> {
        let now = Utc::now();

        let txn = self.db.begin().await?;

        let invitation_repo = InvitationRepository::new(&txn);
        let invitation = invitation_repo
            .find_redeemable(&params.token, now)
            .await?
            .ok_or(InvitationError::InvalidOrExpiredToken)?;

        if invitation.email != params.email {
            return Err(InvitationError::EmailMismatch.into());
        }

        let role = InviteRole::parse(&params.role)
            .filter(|role| *role == invitation.invite_role)
            .ok_or_else(|| InvitationError::InvalidRole(params.role.clone()))?;

        if params.name.is_empty() {
            return Err(AppError::BadRequest("Name is required".to_string()));
        }
        validate_password(&params.password)?;
        let password_hash = hash_password(&params.password)?;

        let account_status = match role {
            InviteRole::Admin => AccountStatus::Active,
            InviteRole::Receptionist => AccountStatus::Pending,
        };
        let phone = params.phone.filter(|p| !p.trim().is_empty());

        let user_repo = UserRepository::new(&txn);
        let user = match user_repo.find_by_email(&params.email).await? {
            Some(existing) if existing.is_guest_only() => {
                user_repo
                    .upgrade(UpgradeUserParams {
                        id: existing.id,
                        name: params.name,
                        password_hash,
                        phone,
                        roles: vec![role.into()],
                        account_status,
                    })
                    .await?
            }
            Some(_) => return Err(InvitationError::AlreadyRegisteredHigherRole.into()),
            None => {
                user_repo
                    .create(CreateUserParams {
                        name: params.name,
                        email: params.email,
                        password_hash,
                        phone,
                        roles: vec![role.into()],
                        account_status,
                    })
                    .await?
            }
        };

        if invitation_repo.mark_used(invitation.id, now).await? == 0 {
            return Err(InvitationError::InvalidOrExpiredToken.into());
        }

        txn.commit().await?;

        tracing::info!(
            user_id = user.id,
            invitation_id = invitation.id,
            role = role.as_str(),
            "Invitation redeemed"
        );

        Ok(user)
    }
}

/// 32 random bytes as 64 lowercase hex characters.
fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    hex::encode(bytes)
}

/// `{app_url}/register?role={role}&token={token}`
fn registration_url(app_url: &str, role: InviteRole, token: &str) -> Result<String, AppError> {
    let base = app_url.trim_end_matches('/');
    let mut url = Url::parse(&format!("{base}/register")).map_err(|source| {
        InternalError::InvalidUrl {
            base: app_url.to_string(),
            source,
        }
    })?;
    url.query_pairs_mut()
        .append_pair("role", role.as_str())
        .append_pair("token", token);

    Ok(url.to_string())
}

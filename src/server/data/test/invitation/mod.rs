use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::invitation::InvitationRepository;

mod delete_unused_for_email;
mod find_redeemable;
mod mark_used;

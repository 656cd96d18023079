use entity::user::{AccountStatus, Role};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::user::UserRepository,
    model::{pagination::PageRequest, user::UpgradeUserParams},
};

mod admin_exists;
mod get_all_paginated;
mod upgrade;

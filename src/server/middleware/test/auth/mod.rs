use entity::user::{AccountStatus, Role};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::AuthSession,
    },
};

mod require;

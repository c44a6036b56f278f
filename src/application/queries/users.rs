// src/application/queries/users.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{UserRepository, Username},
};

pub struct GetUserQuery {
    pub username: String,
}

pub struct UserQueryService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn list_users(&self) -> ApplicationResult<Vec<UserDto>> {
        let users = self.user_repo.list().await?;
        Ok(users.into_iter().map(Into::into).collect())
    }

    pub async fn get_user(&self, query: GetUserQuery) -> ApplicationResult<UserDto> {
        let username = Username::new(query.username)
            .map_err(|_| ApplicationError::bad_request("username is required"))?;
        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("user {username} not found")))?;
        Ok(user.into())
    }
}

// src/domain/user/entity.rs
use crate::domain::user::value_objects::Username;

#[derive(Debug, Clone)]
pub struct User {
    pub username: Username,
    pub name: String,
    pub avatar_url: String,
}

// src/presentation/http/controllers/mod.rs
pub mod articles;
pub mod comments;
pub mod manifest;
pub mod topics;
pub mod users;

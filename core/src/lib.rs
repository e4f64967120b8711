pub mod analysis;
pub mod auth;
pub mod case;
pub mod manager;
pub mod policy;
pub mod render;
pub mod validator;

pub mod error;

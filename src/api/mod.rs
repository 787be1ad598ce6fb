//! HTTP Client Adapter for the roster REST API.

mod auth;
mod client;
mod types;

pub use auth::{AuthContext, Token};
pub use client::ApiClient;
pub use types::{AuthResponse, LoginRequest, NewStudent, Page, RegisterRequest, Student, Teacher};

pub const LOGIN_PATH: &str = "api/auth/login";
pub const REGISTER_PATH: &str = "api/auth/register";

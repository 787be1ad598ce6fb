pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod guard;
pub mod logging;
pub mod storage;
pub mod store;
pub mod validation;

pub use error::{Error, Result};

use super::state::PaginatedCollection;
use crate::store::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ListIntent<T> {
    LoadStarted { seq: u64, page: u32, page_size: u32 },
    LoadSucceeded { seq: u64, page: PaginatedCollection<T> },
    LoadFailed { seq: u64, message: String },
    CreateStarted,
    CreateSucceeded(T),
    CreateFailed(String),
    DeleteStarted,
    DeleteSucceeded { id: String },
    DeleteFailed(String),
}

impl<T: Send + 'static> Intent for ListIntent<T> {}

//! Client-side state: the session and one store per paginated list.
//!
//! Each store keeps its state behind a lock and changes it only through its
//! reducer; network calls happen outside the lock.

pub mod list;
pub mod mvi;
pub mod session;
mod status;

pub use list::{ListState, ListStore, PaginatedCollection, Students, Teachers};
pub use session::{Identity, Session, SessionState, SessionStore};
pub use status::RequestStatus;

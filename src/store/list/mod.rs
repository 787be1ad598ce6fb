mod intent;
mod reducer;
mod resource;
mod state;
mod store;

pub use intent::ListIntent;
pub use reducer::ListReducer;
pub use resource::{MutableResource, Resource, Students, Teachers};
pub use state::{ListState, PageQuery, PaginatedCollection, DEFAULT_PAGE_SIZE};
pub use store::ListStore;

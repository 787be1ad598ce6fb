//! Model-View-Intent primitives for the client stores.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: snapshot of one store, everything a view needs to render
//! - **Intent**: a dispatched request or the arrival of its response
//! - **Reducer**: pure function that transforms state based on intents
//!
//! Network calls live in the async stores; reducers never perform I/O.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::StoreState;

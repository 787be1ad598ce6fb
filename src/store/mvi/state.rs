/// Marker trait for store state objects.
///
/// States should be:
/// - Cloneable (views read snapshots, never the live value)
/// - Comparable (PartialEq for detecting changes)
/// - Defaultable (the state before any intent)
pub trait StoreState: Clone + PartialEq + Default + Send + 'static {}

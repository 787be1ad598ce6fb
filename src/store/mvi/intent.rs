/// Marker trait for intent objects.
///
/// Intents represent either a dispatched operation (`*Started`) or the
/// outcome of its network round-trip (`*Succeeded` / `*Failed`).
pub trait Intent: Send + 'static {}

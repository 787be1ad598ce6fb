/// Lifecycle of one logical operation (fetch list, create item, ...).
///
/// `Idle | Succeeded | Failed → Loading` on dispatch,
/// `Loading → Succeeded | Failed` when the response arrives.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed(String),
}

impl RequestStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

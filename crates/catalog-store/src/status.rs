//! Load status of the catalog.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the store is in its fetch lifecycle.
///
/// `Idle → Loading → Ready | Failed`. `Ready` and `Failed` only go back to
/// `Loading` through an explicit initialize or retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// Fetch in flight.
    Loading,
    /// Collection loaded.
    Ready,
    /// Last fetch failed; the error message is kept alongside.
    Failed,
}

impl LoadStatus {
    /// Whether a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }

    /// Whether the store has settled (successfully or not).
    pub fn is_settled(&self) -> bool {
        matches!(self, LoadStatus::Ready | LoadStatus::Failed)
    }

    /// Whether a transition to `next` is allowed.
    pub fn can_transition_to(&self, next: LoadStatus) -> bool {
        use LoadStatus::*;
        matches!(
            (self, next),
            (Idle, Loading) | (Ready, Loading) | (Failed, Loading) | (Loading, Ready) | (Loading, Failed)
        )
    }

    /// Lower-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadStatus::Idle => "idle",
            LoadStatus::Loading => "loading",
            LoadStatus::Ready => "ready",
            LoadStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_transitions() {
        assert!(LoadStatus::Idle.can_transition_to(LoadStatus::Loading));
        assert!(LoadStatus::Loading.can_transition_to(LoadStatus::Ready));
        assert!(LoadStatus::Loading.can_transition_to(LoadStatus::Failed));
        assert!(LoadStatus::Failed.can_transition_to(LoadStatus::Loading));
        assert!(LoadStatus::Ready.can_transition_to(LoadStatus::Loading));
    }

    #[test]
    fn test_rejected_transitions() {
        assert!(!LoadStatus::Idle.can_transition_to(LoadStatus::Ready));
        assert!(!LoadStatus::Ready.can_transition_to(LoadStatus::Failed));
        assert!(!LoadStatus::Failed.can_transition_to(LoadStatus::Ready));
        assert!(!LoadStatus::Loading.can_transition_to(LoadStatus::Idle));
    }

    #[test]
    fn test_flags() {
        assert!(LoadStatus::Loading.is_loading());
        assert!(!LoadStatus::Idle.is_settled());
        assert!(LoadStatus::Failed.is_settled());
        assert_eq!(LoadStatus::default(), LoadStatus::Idle);
        assert_eq!(LoadStatus::Ready.to_string(), "ready");
    }
}

use serde::{Deserialize, Serialize};

use crate::id::{AppId, WindowId};

/// Every user-triggerable shell operation.
///
/// Desktop icons, window chrome, the start menu, and the taskbar all resolve
/// their gestures to an `Action`. The shell dispatcher matches on this enum
/// to route to the window manager and overlay state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    // -- Launching --
    LaunchApp(AppId),
    TaskbarApp(AppId),

    // -- Window chrome --
    CloseWindow(WindowId),
    MinimizeWindow(WindowId),
    ToggleMaximize(WindowId),
    FocusWindow(WindowId),
    RestoreWindow(WindowId),

    // -- Overlays --
    ToggleStartMenu,
    CloseStartMenu,

    // -- Session --
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_serialization_roundtrip() {
        let actions = [
            Action::LaunchApp(AppId::new("notepad")),
            Action::TaskbarApp(AppId::new("paint")),
            Action::CloseWindow(WindowId(3)),
            Action::FocusWindow(WindowId(1)),
            Action::ToggleStartMenu,
            Action::Quit,
        ];
        for action in &actions {
            let json = serde_json::to_string(action).unwrap();
            let deserialized: Action = serde_json::from_str(&json).unwrap();
            assert_eq!(*action, deserialized);
        }
    }

    #[test]
    fn action_hash_distinguishes_targets() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Action::FocusWindow(WindowId(1)));
        set.insert(Action::FocusWindow(WindowId(2)));
        set.insert(Action::FocusWindow(WindowId(1)));
        assert_eq!(set.len(), 2);
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Generate a short correlation id for matching AI requests to replies.
pub fn new_request_id() -> String {
    let uuid = uuid::Uuid::new_v4();
    let bytes = uuid.as_bytes();
    format!(
        "{:02x}{:02x}{:02x}{:02x}",
        bytes[0], bytes[1], bytes[2], bytes[3]
    )
}

/// Identity of one open window. Assigned once by the window manager,
/// stable for the window's lifetime, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window-{}", self.0)
    }
}

/// Key of an installable application in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppId(String);

impl AppId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AppId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_id_length() {
        let rid = new_request_id();
        assert_eq!(rid.len(), 8);
    }

    #[test]
    fn request_id_is_hex() {
        let rid = new_request_id();
        assert!(rid.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn request_id_is_unique() {
        let a = new_request_id();
        let b = new_request_id();
        assert_ne!(a, b);
    }

    #[test]
    fn window_id_display() {
        let id = WindowId(42);
        assert_eq!(id.to_string(), "window-42");
    }

    #[test]
    fn window_id_hash_and_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(WindowId(1));
        set.insert(WindowId(2));
        set.insert(WindowId(1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn window_id_serialization() {
        let id = WindowId(7);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: WindowId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn app_id_from_str() {
        let id = AppId::from("notepad");
        assert_eq!(id.as_str(), "notepad");
        assert_eq!(id.to_string(), "notepad");
    }

    #[test]
    fn app_id_equality() {
        assert_eq!(AppId::new("paint"), AppId::from("paint"));
        assert_ne!(AppId::new("paint"), AppId::new("calculator"));
    }

    #[test]
    fn app_id_serialization() {
        let id = AppId::new("terminal");
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: AppId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}

use serde::{Deserialize, Serialize};

use deskos_common::types::{Color, Size};
use deskos_common::AppId;

/// Static description of one installable application.
///
/// Read-only after startup. The window manager resolves an [`AppId`] against
/// the registry on every `open` call; it never owns or mutates the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppManifest {
    pub id: AppId,
    pub name: String,
    pub icon: char,
    pub accent: Color,
    pub default_size: Size,
}

/// Ordered collection of application manifests. Order is meaningful: desktop
/// icons, the start menu, and the taskbar list entries in registry order.
#[derive(Debug, Clone, Default)]
pub struct AppRegistry {
    entries: Vec<AppManifest>,
}

impl AppRegistry {
    pub fn from_entries(entries: Vec<AppManifest>) -> Self {
        Self { entries }
    }

    pub fn get(&self, app: &AppId) -> Option<&AppManifest> {
        self.entries.iter().find(|m| &m.id == app)
    }

    pub fn entries(&self) -> &[AppManifest] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_registry() -> AppRegistry {
        AppRegistry::from_entries(vec![
            AppManifest {
                id: AppId::new("notepad"),
                name: "Notepad".into(),
                icon: '▤',
                accent: Color::rgb(59, 130, 246),
                default_size: Size::new(50, 14),
            },
            AppManifest {
                id: AppId::new("paint"),
                name: "Paint".into(),
                icon: '✎',
                accent: Color::rgb(234, 179, 8),
                default_size: Size::new(64, 18),
            },
        ])
    }

    #[test]
    fn lookup_by_id() {
        let registry = sample_registry();
        let manifest = registry.get(&AppId::new("paint")).unwrap();
        assert_eq!(manifest.name, "Paint");
        assert_eq!(manifest.default_size, Size::new(64, 18));
    }

    #[test]
    fn lookup_unknown_is_none() {
        let registry = sample_registry();
        assert!(registry.get(&AppId::new("solitaire")).is_none());
    }

    #[test]
    fn entries_preserve_order() {
        let registry = sample_registry();
        let names: Vec<&str> = registry.entries().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Notepad", "Paint"]);
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
    }

    #[test]
    fn empty_registry() {
        let registry = AppRegistry::default();
        assert!(registry.is_empty());
        assert!(registry.get(&AppId::new("notepad")).is_none());
    }
}

//! The WindowManager owns the live window collection, stacking, and focus.

mod focus;
mod operations;
mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{AppManifest, AppRegistry};
    use deskos_common::types::{Color, Point, Size};
    use deskos_common::AppId;

    fn manifest(id: &str, width: u16, height: u16) -> AppManifest {
        AppManifest {
            id: AppId::new(id),
            name: id.to_string(),
            icon: '■',
            accent: Color::rgb(59, 130, 246),
            default_size: Size::new(width, height),
        }
    }

    fn registry() -> AppRegistry {
        AppRegistry::from_entries(vec![
            manifest("notepad", 50, 14),
            manifest("paint", 64, 18),
            manifest("calculator", 24, 14),
            manifest("terminal", 60, 16),
        ])
    }

    #[test]
    fn new_manager_is_empty() {
        let mgr = WindowManager::new();
        assert!(mgr.is_empty());
        assert_eq!(mgr.window_count(), 0);
        assert!(mgr.topmost().is_none());
    }

    #[test]
    fn open_creates_window_from_manifest() {
        let reg = registry();
        let mut mgr = WindowManager::new();
        let id = mgr.open(&reg, &AppId::new("notepad")).unwrap();

        let w = mgr.window(id).unwrap();
        assert_eq!(w.app, AppId::new("notepad"));
        assert_eq!(w.title, "notepad");
        assert_eq!(w.size, Size::new(50, 14));
        assert!(!w.minimized);
        assert!(!w.maximized);
    }

    #[test]
    fn open_unknown_app_is_noop() {
        let reg = registry();
        let mut mgr = WindowManager::new();
        assert!(mgr.open(&reg, &AppId::new("solitaire")).is_none());
        assert!(mgr.is_empty());
    }

    #[test]
    fn open_ids_are_unique() {
        let reg = registry();
        let mut mgr = WindowManager::new();
        let mut ids = Vec::new();
        for _ in 0..8 {
            ids.push(mgr.open(&reg, &AppId::new("notepad")).unwrap());
        }
        // Close a few and open more: ids must never be reused.
        mgr.close(ids[2]);
        mgr.close(ids[5]);
        for _ in 0..4 {
            ids.push(mgr.open(&reg, &AppId::new("paint")).unwrap());
        }
        let mut seen = std::collections::HashSet::new();
        for id in &ids {
            assert!(seen.insert(*id), "id {id} reused");
        }
    }

    #[test]
    fn open_allows_multiple_instances() {
        let reg = registry();
        let mut mgr = WindowManager::new();
        mgr.open(&reg, &AppId::new("notepad")).unwrap();
        mgr.open(&reg, &AppId::new("notepad")).unwrap();
        assert_eq!(mgr.windows_for_app(&AppId::new("notepad")).count(), 2);
    }

    #[test]
    fn open_cascades_position() {
        let reg = registry();
        let mut mgr = WindowManager::with_cascade(Point::new(5, 5), Point::new(2, 2));
        let a = mgr.open(&reg, &AppId::new("notepad")).unwrap();
        let b = mgr.open(&reg, &AppId::new("paint")).unwrap();
        let c = mgr.open(&reg, &AppId::new("paint")).unwrap();
        assert_eq!(mgr.window(a).unwrap().position, Point::new(5, 5));
        assert_eq!(mgr.window(b).unwrap().position, Point::new(7, 7));
        assert_eq!(mgr.window(c).unwrap().position, Point::new(9, 9));
    }

    #[test]
    fn cascade_counts_live_windows_not_total_opened() {
        let reg = registry();
        let mut mgr = WindowManager::with_cascade(Point::new(5, 5), Point::new(2, 2));
        let a = mgr.open(&reg, &AppId::new("notepad")).unwrap();
        mgr.open(&reg, &AppId::new("paint")).unwrap();
        mgr.close(a);
        let c = mgr.open(&reg, &AppId::new("paint")).unwrap();
        // One live window remains, so the new window sits one step in.
        assert_eq!(mgr.window(c).unwrap().position, Point::new(7, 7));
    }

    #[test]
    fn close_removes_window() {
        let reg = registry();
        let mut mgr = WindowManager::new();
        let id = mgr.open(&reg, &AppId::new("notepad")).unwrap();
        assert!(mgr.close(id));
        assert!(mgr.window(id).is_none());
        assert!(mgr.is_empty());
    }

    #[test]
    fn close_unknown_is_noop() {
        let reg = registry();
        let mut mgr = WindowManager::new();
        mgr.open(&reg, &AppId::new("notepad")).unwrap();
        assert!(!mgr.close(deskos_common::WindowId(999)));
        assert_eq!(mgr.window_count(), 1);
    }

    #[test]
    fn focus_bumps_stack_order_monotonically() {
        let reg = registry();
        let mut mgr = WindowManager::new();
        let a = mgr.open(&reg, &AppId::new("notepad")).unwrap();
        let b = mgr.open(&reg, &AppId::new("paint")).unwrap();

        let before = mgr.stack_counter();
        assert!(mgr.focus(a));
        assert!(mgr.stack_counter() > before);

        // The focused window now outranks every stack order observed before
        // the call.
        let a_order = mgr.window(a).unwrap().stack_order;
        assert!(a_order > mgr.window(b).unwrap().stack_order);
        assert_eq!(mgr.topmost().unwrap().id, a);
    }

    #[test]
    fn focus_unknown_is_noop() {
        let mut mgr = WindowManager::new();
        let before = mgr.stack_counter();
        assert!(!mgr.focus(deskos_common::WindowId(1)));
        assert_eq!(mgr.stack_counter(), before);
    }

    #[test]
    fn counter_strictly_increases_across_operations() {
        let reg = registry();
        let mut mgr = WindowManager::new();
        let a = mgr.open(&reg, &AppId::new("notepad")).unwrap();
        let mut last = mgr.stack_counter();
        for _ in 0..5 {
            mgr.focus(a);
            assert!(mgr.stack_counter() > last);
            last = mgr.stack_counter();
        }
        mgr.minimize(a);
        mgr.restore(a);
        assert!(mgr.stack_counter() > last);
    }

    #[test]
    fn topmost_ignores_minimized() {
        let reg = registry();
        let mut mgr = WindowManager::new();
        let a = mgr.open(&reg, &AppId::new("notepad")).unwrap();
        let b = mgr.open(&reg, &AppId::new("paint")).unwrap();

        assert_eq!(mgr.topmost().unwrap().id, b);
        mgr.minimize(b);
        assert_eq!(mgr.topmost().unwrap().id, a);
        mgr.minimize(a);
        assert!(mgr.topmost().is_none());
    }

    #[test]
    fn minimize_preserves_stack_order() {
        let reg = registry();
        let mut mgr = WindowManager::new();
        let a = mgr.open(&reg, &AppId::new("notepad")).unwrap();
        let order = mgr.window(a).unwrap().stack_order;
        mgr.minimize(a);
        assert_eq!(mgr.window(a).unwrap().stack_order, order);
        assert!(mgr.window(a).unwrap().minimized);
    }

    #[test]
    fn minimized_window_stays_in_collection() {
        let reg = registry();
        let mut mgr = WindowManager::new();
        let a = mgr.open(&reg, &AppId::new("calculator")).unwrap();
        mgr.minimize(a);
        assert_eq!(mgr.window_count(), 1);
        assert!(mgr.window(a).is_some());
    }

    #[test]
    fn restore_round_trip() {
        let reg = registry();
        let mut mgr = WindowManager::new();
        let a = mgr.open(&reg, &AppId::new("notepad")).unwrap();
        mgr.open(&reg, &AppId::new("paint")).unwrap();

        let before = mgr.window(a).unwrap().clone();
        mgr.minimize(a);
        mgr.restore(a);

        let after = mgr.window(a).unwrap();
        assert!(!after.minimized);
        assert!(after.stack_order > before.stack_order);
        assert_eq!(after.position, before.position);
        assert_eq!(after.size, before.size);
        assert_eq!(after.maximized, before.maximized);
        assert_eq!(after.title, before.title);
        assert_eq!(mgr.topmost().unwrap().id, a);
    }

    #[test]
    fn restore_of_visible_window_acts_as_focus() {
        let reg = registry();
        let mut mgr = WindowManager::new();
        let a = mgr.open(&reg, &AppId::new("notepad")).unwrap();
        let b = mgr.open(&reg, &AppId::new("paint")).unwrap();

        assert!(mgr.restore(a));
        assert!(!mgr.window(a).unwrap().minimized);
        assert_eq!(mgr.topmost().unwrap().id, a);
        assert!(mgr.window(a).unwrap().stack_order > mgr.window(b).unwrap().stack_order);
    }

    #[test]
    fn maximize_toggle_is_idempotent_pair() {
        let reg = registry();
        let mut mgr = WindowManager::new();
        let a = mgr.open(&reg, &AppId::new("paint")).unwrap();
        let before = mgr.window(a).unwrap().clone();

        mgr.toggle_maximize(a);
        let mid = mgr.window(a).unwrap();
        assert!(mid.maximized);
        assert_eq!(mid.position, before.position);
        assert_eq!(mid.size, before.size);
        assert_eq!(mid.stack_order, before.stack_order);

        mgr.toggle_maximize(a);
        let after = mgr.window(a).unwrap();
        assert!(!after.maximized);
        assert_eq!(after.position, before.position);
        assert_eq!(after.size, before.size);
    }

    #[test]
    fn maximized_window_can_be_minimized() {
        let reg = registry();
        let mut mgr = WindowManager::new();
        let a = mgr.open(&reg, &AppId::new("paint")).unwrap();
        mgr.toggle_maximize(a);
        mgr.minimize(a);
        let w = mgr.window(a).unwrap();
        assert!(w.maximized);
        assert!(w.minimized);
        assert!(mgr.topmost().is_none());
    }

    #[test]
    fn move_to_sets_position_unclamped() {
        let reg = registry();
        let mut mgr = WindowManager::new();
        let a = mgr.open(&reg, &AppId::new("terminal")).unwrap();
        assert!(mgr.move_to(a, -12, 300));
        assert_eq!(mgr.window(a).unwrap().position, Point::new(-12, 300));
    }

    #[test]
    fn move_unknown_is_noop() {
        let mut mgr = WindowManager::new();
        assert!(!mgr.move_to(deskos_common::WindowId(5), 1, 1));
    }

    #[test]
    fn paint_order_is_back_to_front() {
        let reg = registry();
        let mut mgr = WindowManager::new();
        let a = mgr.open(&reg, &AppId::new("notepad")).unwrap();
        let b = mgr.open(&reg, &AppId::new("paint")).unwrap();
        let c = mgr.open(&reg, &AppId::new("terminal")).unwrap();
        mgr.focus(a);

        let order: Vec<_> = mgr.paint_order().iter().map(|w| w.id).collect();
        assert_eq!(order, vec![b, c, a]);
    }

    #[test]
    fn operations_stay_consistent_after_close() {
        let reg = registry();
        let mut mgr = WindowManager::new();
        let a = mgr.open(&reg, &AppId::new("notepad")).unwrap();
        let b = mgr.open(&reg, &AppId::new("paint")).unwrap();
        mgr.close(b);

        // Stale id: every operation is a silent no-op.
        assert!(!mgr.focus(b));
        assert!(!mgr.minimize(b));
        assert!(!mgr.toggle_maximize(b));
        assert!(!mgr.restore(b));
        assert!(!mgr.move_to(b, 0, 0));
        assert_eq!(mgr.topmost().unwrap().id, a);
    }

    #[test]
    fn default_impl() {
        let mgr = WindowManager::default();
        assert!(mgr.is_empty());
    }
}

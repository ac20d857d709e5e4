//! Floating panel positions and z-order.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Observers, StackConfig};

/// Named floating panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelId {
    /// Card detail panel.
    Detail,
    /// Deck under construction.
    Keep,
}

impl PanelId {
    pub const ALL: [PanelId; 2] = [PanelId::Detail, PanelId::Keep];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PanelId::Detail => "detail",
            PanelId::Keep => "keep",
        }
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position and stacking value of one panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowInfo {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub id: PanelId,
}

/// Change notifications from `WindowStack`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowEvent {
    Moved(PanelId),
    Raised { id: PanelId, z: i32 },
    Renormalized { cursor: i32 },
}

/// Panel map plus a monotonic z cursor.
///
/// Every raise puts the panel one step above everything raised before it.
/// Once the cursor passes the configured threshold, all panels are lowered
/// by the same amount and the cursor restarts, which keeps z values bounded
/// without reordering panels.
///
/// ```
/// use deck_keeper::windows::{PanelId, WindowStack};
///
/// let mut stack = WindowStack::new();
/// stack.initialize();
/// stack.raise_to_front(PanelId::Detail);
/// stack.move_by(5, -3);
///
/// let detail = stack.get(PanelId::Detail).unwrap();
/// assert_eq!((detail.x, detail.y), (785, 337));
/// assert_eq!(stack.top(), Some(PanelId::Detail));
/// ```
#[derive(Debug)]
pub struct WindowStack {
    windows: FxHashMap<PanelId, WindowInfo>,
    z_cursor: i32,
    drag_target: Option<PanelId>,
    config: StackConfig,
    renormalizations: u32,
    observers: Observers<WindowEvent>,
}

impl Default for WindowStack {
    fn default() -> Self {
        Self::with_config(StackConfig::default())
    }
}

impl WindowStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: StackConfig) -> Self {
        Self {
            windows: FxHashMap::default(),
            z_cursor: config.base_z,
            drag_target: None,
            config,
            renormalizations: 0,
            observers: Observers::new(),
        }
    }

    /// Seed the configured panels relative to the current cursor, then move
    /// the cursor up to the highest z in use.
    ///
    /// Calling it again re-seeds above the current cursor.
    pub fn initialize(&mut self) {
        for layout in &self.config.panels {
            self.windows.insert(
                layout.id,
                WindowInfo {
                    x: layout.x,
                    y: layout.y,
                    z: self.z_cursor + layout.z_offset,
                    id: layout.id,
                },
            );
        }

        self.z_cursor = self
            .windows
            .values()
            .map(|w| w.z)
            .fold(self.z_cursor, i32::max);
    }

    /// Translate the current drag target. No-op without one.
    ///
    /// Takes no panel id on purpose: the panel moved is always the one
    /// `raise_to_front` made the drag target.
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        let Some(id) = self.drag_target else {
            return;
        };
        if let Some(window) = self.windows.get_mut(&id) {
            window.x += dx;
            window.y += dy;
            self.observers.notify(&WindowEvent::Moved(id));
        }
    }

    /// Mark a panel as drag target and stack it above every other panel.
    ///
    /// The drag target is set even if the panel was never seeded; the z
    /// cursor only moves for panels that exist.
    pub fn raise_to_front(&mut self, id: PanelId) {
        self.drag_target = Some(id);

        let Some(window) = self.windows.get_mut(&id) else {
            return;
        };
        self.z_cursor += self.config.step;
        window.z = self.z_cursor;
        self.observers.notify(&WindowEvent::Raised {
            id,
            z: self.z_cursor,
        });

        if self.z_cursor > self.config.threshold {
            self.renormalize();
        }
    }

    /// Lower every panel by the configured amount and reset the cursor.
    pub fn renormalize(&mut self) {
        for window in self.windows.values_mut() {
            window.z -= self.config.renormalize_by;
        }
        self.z_cursor = self.config.reset_to;
        self.renormalizations += 1;

        debug!(cursor = self.z_cursor, count = self.renormalizations, "renormalized z-order");
        self.observers.notify(&WindowEvent::Renormalized {
            cursor: self.z_cursor,
        });
    }

    pub fn release_drag_target(&mut self) {
        self.drag_target = None;
    }

    #[must_use]
    pub fn drag_target(&self) -> Option<PanelId> {
        self.drag_target
    }

    #[must_use]
    pub fn z_cursor(&self) -> i32 {
        self.z_cursor
    }

    /// How many times `renormalize` has run.
    #[must_use]
    pub fn renormalizations(&self) -> u32 {
        self.renormalizations
    }

    #[must_use]
    pub fn get(&self, id: PanelId) -> Option<&WindowInfo> {
        self.windows.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Panels from bottom to top.
    #[must_use]
    pub fn z_order(&self) -> Vec<PanelId> {
        let mut windows: Vec<&WindowInfo> = self.windows.values().collect();
        windows.sort_by_key(|w| (w.z, w.id));
        windows.into_iter().map(|w| w.id).collect()
    }

    /// Panel drawn on top, if any.
    #[must_use]
    pub fn top(&self) -> Option<PanelId> {
        self.windows
            .values()
            .max_by_key(|w| (w.z, w.id))
            .map(|w| w.id)
    }

    pub fn observers_mut(&mut self) -> &mut Observers<WindowEvent> {
        &mut self.observers
    }

    #[must_use]
    pub fn config(&self) -> &StackConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_seeds_panels() {
        let mut stack = WindowStack::new();
        stack.initialize();

        let detail = stack.get(PanelId::Detail).unwrap();
        let keep = stack.get(PanelId::Keep).unwrap();
        assert_eq!((detail.x, detail.y, detail.z), (780, 340, 110));
        assert_eq!((keep.x, keep.y, keep.z), (1100, 43, 120));
        assert_eq!(stack.z_cursor(), 120);
    }

    #[test]
    fn test_initialize_twice() {
        let mut stack = WindowStack::new();
        stack.initialize();
        stack.initialize();

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.get(PanelId::Keep).unwrap().z, 140);
        assert_eq!(stack.z_cursor(), 140);
    }

    #[test]
    fn test_move_without_target() {
        let mut stack = WindowStack::new();
        stack.initialize();
        stack.move_by(10, 10);
        assert_eq!(stack.get(PanelId::Detail).unwrap().x, 780);
        assert_eq!(stack.get(PanelId::Keep).unwrap().x, 1100);
    }

    #[test]
    fn test_release_stops_moves() {
        let mut stack = WindowStack::new();
        stack.initialize();
        stack.raise_to_front(PanelId::Keep);
        stack.move_by(-100, 7);
        stack.release_drag_target();
        stack.move_by(-100, 7);

        let keep = stack.get(PanelId::Keep).unwrap();
        assert_eq!((keep.x, keep.y), (1000, 50));
        assert_eq!(stack.drag_target(), None);
    }

    #[test]
    fn test_raise_unknown_panel() {
        let mut stack = WindowStack::new();
        stack.raise_to_front(PanelId::Detail);
        assert_eq!(stack.drag_target(), Some(PanelId::Detail));
        assert_eq!(stack.z_cursor(), 100);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_raise_puts_on_top() {
        let mut stack = WindowStack::new();
        stack.initialize();
        assert_eq!(stack.top(), Some(PanelId::Keep));

        stack.raise_to_front(PanelId::Detail);
        assert_eq!(stack.top(), Some(PanelId::Detail));
        assert_eq!(stack.get(PanelId::Detail).unwrap().z, 135);
        assert_eq!(stack.z_order(), vec![PanelId::Keep, PanelId::Detail]);
    }

    #[test]
    fn test_renormalize_preserves_order() {
        let mut stack = WindowStack::new();
        stack.initialize();
        stack.raise_to_front(PanelId::Detail);
        let before = stack.z_order();
        let gap = stack.get(PanelId::Detail).unwrap().z - stack.get(PanelId::Keep).unwrap().z;

        stack.renormalize();

        assert_eq!(stack.z_order(), before);
        assert_eq!(
            stack.get(PanelId::Detail).unwrap().z - stack.get(PanelId::Keep).unwrap().z,
            gap
        );
        assert_eq!(stack.z_cursor(), 100);
    }

    #[test]
    fn test_renormalize_on_threshold() {
        let mut stack = WindowStack::new();
        stack.initialize();
        // 120 + 15 * 59 = 1005
        for _ in 0..58 {
            stack.raise_to_front(PanelId::Detail);
        }
        assert_eq!(stack.renormalizations(), 0);
        assert_eq!(stack.z_cursor(), 990);

        stack.raise_to_front(PanelId::Detail);
        assert_eq!(stack.renormalizations(), 1);
        assert_eq!(stack.z_cursor(), 100);
        assert_eq!(stack.get(PanelId::Detail).unwrap().z, 205);
        assert_eq!(stack.get(PanelId::Keep).unwrap().z, -680);
    }

    #[test]
    fn test_events() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);

        let mut stack = WindowStack::with_config(StackConfig {
            threshold: 140,
            ..StackConfig::default()
        });
        stack.observers_mut().subscribe(move |e| sink.borrow_mut().push(*e));
        stack.initialize();
        stack.raise_to_front(PanelId::Keep);
        stack.raise_to_front(PanelId::Detail);

        assert_eq!(
            *events.borrow(),
            vec![
                WindowEvent::Raised { id: PanelId::Keep, z: 135 },
                WindowEvent::Raised { id: PanelId::Detail, z: 150 },
                WindowEvent::Renormalized { cursor: 100 },
            ]
        );
    }
}

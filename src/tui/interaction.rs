//! Component-level mouse interactivity.
//!
//! Components register their clickable regions during render, and the mouse
//! handler routes clicks to the matching region's action. The registry is
//! rebuilt every frame, so regions always reflect the rows as last drawn --
//! including the picker row and everything it shifted down.

use crate::app::ClickRegion;
use crate::events::Action;

/// A clickable region tied to an action.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// Identifier for debugging/logging
    pub id: &'static str,

    /// The bounds of this region in terminal cells
    pub bounds: ClickRegion,

    /// Action to dispatch on left click
    pub on_click: Action,

    /// Priority for overlapping regions (higher = checked first).
    /// Popups use this to capture clicks over the rows beneath them.
    pub priority: i32,
}

impl InteractiveRegion {
    pub fn new(id: &'static str, bounds: ClickRegion, on_click: Action) -> Self {
        Self {
            id,
            bounds,
            on_click,
            priority: 0,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }
}

/// Registry of interactive regions, rebuilt each frame during render.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Clear all registered regions (call at start of each render)
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Register an interactive region
    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    /// Register the clickable area of a rendered row
    pub fn register_row(&mut self, render_index: usize, bounds: ClickRegion) {
        self.register(InteractiveRegion::new(
            "row",
            bounds,
            Action::ActivateRow(render_index),
        ));
    }

    /// Find the action to dispatch for a click at (x, y).
    ///
    /// Returns the action of the highest-priority region containing the
    /// point, or [`Action::None`].
    pub fn handle_click(&self, x: u16, y: u16) -> Action {
        let hit = self
            .regions
            .iter()
            .filter(|r| r.contains(x, y))
            .max_by_key(|r| r.priority);

        match hit {
            Some(region) => {
                crate::log::log_event(&format!("click on {} at ({}, {})", region.id, x, y));
                region.on_click
            }
            None => Action::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_contains() {
        let region =
            InteractiveRegion::new("test", ClickRegion::new(10, 10, 20, 1), Action::None);

        assert!(region.contains(10, 10)); // left edge
        assert!(region.contains(29, 10)); // just inside right edge
        assert!(!region.contains(30, 10)); // just outside
        assert!(!region.contains(15, 11)); // next line
    }

    #[test]
    fn test_click_maps_to_row() {
        let mut registry = InteractionRegistry::new();
        registry.register_row(4, ClickRegion::new(0, 6, 40, 1));
        registry.register_row(5, ClickRegion::new(0, 7, 40, 5)); // picker row

        assert_eq!(registry.handle_click(3, 6), Action::ActivateRow(4));
        assert_eq!(registry.handle_click(3, 9), Action::ActivateRow(5));
        assert_eq!(registry.handle_click(3, 20), Action::None);
    }

    #[test]
    fn test_priority_ordering() {
        let mut registry = InteractionRegistry::new();
        registry.register(InteractiveRegion::new(
            "row",
            ClickRegion::new(0, 0, 100, 100),
            Action::ActivateRow(0),
        ));
        registry.register(
            InteractiveRegion::new("popup", ClickRegion::new(20, 20, 10, 10), Action::CloseHelp)
                .with_priority(10),
        );

        assert_eq!(registry.handle_click(25, 25), Action::CloseHelp);
        assert_eq!(registry.handle_click(5, 5), Action::ActivateRow(0));
    }
}

//! Ceiling mode: a plain flag driven by wheel direction or scroll position.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CeilingTrigger {
    /// Wheel up enters ceiling mode, wheel down leaves it.
    #[default]
    Wheel,
    /// Ceiling mode while the page is scrolled to the top.
    ScrollPosition,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Ceiling {
    active: bool,
}

impl Ceiling {
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the new flag only when it changed.
    pub fn on_wheel(&mut self, delta_y: f64) -> Option<bool> {
        if delta_y < 0.0 && !self.active {
            self.set(true)
        } else if delta_y > 0.0 && self.active {
            self.set(false)
        } else {
            None
        }
    }

    /// Returns the new flag only when it changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> Option<bool> {
        let at_top = scroll_y <= 0.0;
        if at_top == self.active {
            return None;
        }
        self.set(at_top)
    }

    fn set(&mut self, active: bool) -> Option<bool> {
        self.active = active;
        log::debug!("[ceiling] active={}", active);
        Some(active)
    }
}

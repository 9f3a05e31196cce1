//! The engine: sole owner of motion state, the reduced-motion flag, ceiling
//! mode and the color-stop cache. Event handlers call its commands; the frame
//! loop calls [`Engine::tick`].

use crate::ceiling::Ceiling;
use crate::config::MotionConfig;
use crate::favicon::{ColorStops, FaviconFrame};
use crate::mapper::{map_vector, Presentation};
use crate::motion::{MotionState, TargetOutcome};
use crate::vector::DirectionVector;

pub struct Engine {
    pub config: MotionConfig,
    pub motion: MotionState,
    animation_enabled: bool,
    pub ceiling: Ceiling,
    /// Filled on the first favicon render and kept for the session. A live
    /// theme switch will not be picked up.
    color_stops: Option<ColorStops>,
}

impl Engine {
    pub fn new(config: MotionConfig, animation_enabled: bool) -> Self {
        Self {
            motion: MotionState::new(config.transition_ms),
            config,
            animation_enabled,
            ceiling: Ceiling::default(),
            color_stops: None,
        }
    }

    pub fn animation_enabled(&self) -> bool {
        self.animation_enabled
    }

    /// Route a new target through the transition rules. Rejected while
    /// animation is disabled.
    pub fn install_target(&mut self, target: DirectionVector, now: f64) -> TargetOutcome {
        if !self.animation_enabled {
            return TargetOutcome::Rejected;
        }
        let outcome = self.motion.install_target(target, now);
        if outcome == TargetOutcome::Started {
            log::debug!(
                "[motion] transition ({:.2},{:.2}) -> ({:.2},{:.2})",
                self.motion.previous.x,
                self.motion.previous.y,
                target.x,
                target.y
            );
        }
        outcome
    }

    /// Mirror the reduced-motion preference. Turning animation off freezes
    /// motion at the last reached vector.
    pub fn set_animation_enabled(&mut self, enabled: bool) {
        if enabled == self.animation_enabled {
            return;
        }
        self.animation_enabled = enabled;
        if !enabled {
            self.motion.freeze();
        }
        log::info!("[motion] animation enabled={}", enabled);
    }

    pub fn wheel(&mut self, delta_y: f64) -> Option<bool> {
        self.ceiling.on_wheel(delta_y)
    }

    pub fn scroll(&mut self, scroll_y: f64) -> Option<bool> {
        self.ceiling.on_scroll(scroll_y)
    }

    /// Advance and map. `None` while at rest: nothing to redraw.
    pub fn tick(&mut self, now: f64) -> Option<Presentation> {
        let current = self.motion.advance(now)?;
        Some(map_vector(current, &self.config.mapping))
    }

    /// Presentation of the committed vector, for the first paint.
    pub fn present(&self) -> Presentation {
        map_vector(self.motion.current, &self.config.mapping)
    }

    pub fn favicon_frame(&self, p: &Presentation) -> FaviconFrame {
        FaviconFrame::compose(self.config.favicon_size, p.angle_deg, p.invert)
    }

    /// Cached color stops. `read` runs until it first succeeds; after that the
    /// cached value is returned for the rest of the session.
    pub fn color_stops_or_try_read(
        &mut self,
        read: impl FnOnce() -> Option<ColorStops>,
    ) -> Option<&ColorStops> {
        if self.color_stops.is_none() {
            self.color_stops = read();
        }
        self.color_stops.as_ref()
    }

    pub fn cached_color_stops(&self) -> Option<&ColorStops> {
        self.color_stops.as_ref()
    }
}

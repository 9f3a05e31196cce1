//! Motion state and the eased interpolation that advances it once per tick.
//!
//! A transition runs from `previous` toward `target` over a fixed duration.
//! Installing a new target while a transition is running only replaces the
//! target; the elapsed fraction keeps counting from the original start.

use crate::vector::{lerp_vector, DirectionVector};

/// Symmetric cubic ease-in-out: `4t³` below the midpoint, `1 - 4(1-t)³` above.
#[inline]
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = 1.0 - t;
        1.0 - 4.0 * u * u * u
    }
}

/// What happened to a target request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetOutcome {
    /// No transition was running; a new one starts now.
    Started,
    /// A transition was already running; only its target moved.
    Retargeted,
    /// Animation is disabled; the request was ignored.
    Rejected,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MotionState {
    pub previous: DirectionVector,
    pub target: DirectionVector,
    pub current: DirectionVector,
    /// Host clock in milliseconds; `None` means at rest.
    pub transition_start: Option<f64>,
    duration_ms: f64,
}

impl MotionState {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            previous: DirectionVector::ZERO,
            target: DirectionVector::ZERO,
            current: DirectionVector::ZERO,
            transition_start: None,
            duration_ms,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.transition_start.is_some()
    }

    /// Accept a new target. Starts a transition from `current` when at rest,
    /// otherwise retargets the running one without touching its basis.
    pub fn install_target(&mut self, target: DirectionVector, now: f64) -> TargetOutcome {
        self.target = target;
        if self.transition_start.is_some() {
            return TargetOutcome::Retargeted;
        }
        self.previous = self.current;
        self.transition_start = Some(now);
        TargetOutcome::Started
    }

    /// Linear elapsed fraction at `now`, not clamped above 1.
    pub fn elapsed_fraction(&self, now: f64) -> Option<f64> {
        let start = self.transition_start?;
        Some(((now - start) / self.duration_ms).max(0.0))
    }

    /// Interpolated vector at `now` without mutating anything.
    pub fn sample(&self, now: f64) -> Option<DirectionVector> {
        let t = self.elapsed_fraction(now)?;
        Some(lerp_vector(self.previous, self.target, ease_in_out(t)))
    }

    /// Advance to `now`, writing `current`. Ends the transition once the
    /// elapsed fraction reaches 1; that final frame lands on `target`.
    pub fn advance(&mut self, now: f64) -> Option<DirectionVector> {
        let t = self.elapsed_fraction(now)?;
        let next = lerp_vector(self.previous, self.target, ease_in_out(t));
        if t >= 1.0 {
            self.transition_start = None;
        }
        self.current = next;
        Some(next)
    }

    /// Stop wherever `current` is and make it the resting point.
    pub fn freeze(&mut self) {
        self.previous = self.current;
        self.target = self.current;
        self.transition_start = None;
    }
}

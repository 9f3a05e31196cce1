//! Normalization of raw input into direction vectors, and the one-shot
//! choice between pointer and orientation input.

use crate::vector::{finite_vector, round_to, DirectionVector};

/// Largest front-back tilt accepted before normalizing, in degrees.
pub const MAX_TILT_DEG: f64 = 90.0;

/// Pointer offset from the viewport center, normalized by the viewport size.
/// Returns `None` for an empty viewport.
pub fn pointer_vector(
    client_x: f64,
    client_y: f64,
    viewport_w: f64,
    viewport_h: f64,
    places: u32,
) -> Option<DirectionVector> {
    if !(viewport_w > 0.0 && viewport_h > 0.0) {
        return None;
    }
    let x = (client_x - viewport_w / 2.0) / viewport_w;
    let y = (client_y - viewport_h / 2.0) / viewport_h;
    finite_vector(round_to(x, places), round_to(y, places))
}

/// Device tilt mapped to roughly \[-1, 1\] per axis. `beta` is front-back
/// (clamped to ±90°), `gamma` is left-right (not clamped).
pub fn orientation_vector(
    beta: Option<f64>,
    gamma: Option<f64>,
    places: u32,
) -> Option<DirectionVector> {
    let beta = beta?.clamp(-MAX_TILT_DEG, MAX_TILT_DEG);
    let gamma = gamma?;
    finite_vector(
        round_to(gamma / MAX_TILT_DEG, places),
        round_to(beta / MAX_TILT_DEG, places),
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    Pointer,
    Orientation,
}

/// Result of asking the platform for orientation access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PermissionOutcome {
    Granted,
    Denied,
    /// The platform has no permission API.
    Unavailable,
}

impl SourceKind {
    pub fn from_permission(outcome: PermissionOutcome) -> Self {
        match outcome {
            PermissionOutcome::Granted => SourceKind::Orientation,
            PermissionOutcome::Denied | PermissionOutcome::Unavailable => SourceKind::Pointer,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Selection {
    #[default]
    Undecided,
    Pending,
    Bound(SourceKind),
}

/// Latch that lets the source decision happen once per page session.
#[derive(Clone, Copy, Debug, Default)]
pub struct SourceSelector {
    selection: Selection,
}

impl SourceSelector {
    /// True exactly once: the caller should start the permission request.
    pub fn begin(&mut self) -> bool {
        if self.selection != Selection::Undecided {
            return false;
        }
        self.selection = Selection::Pending;
        true
    }

    /// Bind the source for the rest of the session. Returns the kind to wire,
    /// or `None` when a source is already bound.
    pub fn resolve(&mut self, outcome: PermissionOutcome) -> Option<SourceKind> {
        if let Selection::Bound(_) = self.selection {
            return None;
        }
        let kind = SourceKind::from_permission(outcome);
        self.selection = Selection::Bound(kind);
        Some(kind)
    }

    pub fn bound(&self) -> Option<SourceKind> {
        match self.selection {
            Selection::Bound(kind) => Some(kind),
            _ => None,
        }
    }
}

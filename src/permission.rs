use sway_core::PermissionOutcome;

/// Interpret the value a `requestPermission()` promise resolved with.
#[inline]
pub fn outcome_from_answer(answer: Option<&str>, granted: &str) -> PermissionOutcome {
    match answer {
        Some(a) if a == granted => PermissionOutcome::Granted,
        _ => PermissionOutcome::Denied,
    }
}

/// Reduced-motion preference matching means animation is off.
#[inline]
pub fn animation_enabled_for(reduce_matches: bool) -> bool {
    !reduce_matches
}

pub mod ceiling;
pub mod orientation;
pub mod pointer;
pub mod preference;
pub mod selection;

pub use ceiling::wire_ceiling;
pub use preference::{initial_animation_enabled, wire_reduced_motion};
pub use selection::wire_source_selection;

use crate::clock::Clock;
use std::cell::RefCell;
use std::rc::Rc;
use sway_core::Engine;

/// What every input handler needs: the engine it drives and the shared clock.
#[derive(Clone)]
pub struct InputWiring {
    pub engine: Rc<RefCell<Engine>>,
    pub clock: Clock,
}

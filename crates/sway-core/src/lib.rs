//! Platform-free core of the sway page animator.
//!
//! Input events become direction vectors ([`sources`]), the [`motion`] state
//! eases toward them once per frame, and the [`mapper`] turns the current
//! vector into the quantities the style writer and favicon consume.

pub mod ceiling;
pub mod config;
pub mod engine;
pub mod favicon;
pub mod mapper;
pub mod motion;
pub mod sources;
pub mod style;
pub mod vector;

pub use ceiling::*;
pub use config::*;
pub use engine::*;
pub use favicon::*;
pub use mapper::*;
pub use motion::*;
pub use sources::*;
pub use style::*;
pub use vector::*;

//! Phasor animation: per-frame rotation, arm geometry and the tip trail.

pub(crate) mod phasor;
pub(crate) mod session;
pub(crate) mod shape;
pub(crate) mod trail;

//! Contour description and arc-length sampling.

pub(crate) mod model;
pub(crate) mod sampler;

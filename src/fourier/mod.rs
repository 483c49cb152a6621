//! Discrete Fourier decomposition of sampled contours.

pub(crate) mod decompose;

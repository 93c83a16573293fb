//! Deterministic pseudorandom generation based on ChaCha8.

pub mod source;

//! Portable slice-level kernels. Functions take coefficient slices and assume
//! matching lengths, which are only checked in debug builds.

pub mod tpoly;

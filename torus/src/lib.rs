//! # torus
//!
//! Polynomial arithmetic over the torus ring `T[X]/(X^N + 1)`, where `T = R/Z`
//! is represented by fixed-width wrapping integers.
//!
//! This crate is the arithmetic layer consumed by ring-LWE style schemes: every
//! key generation, encryption or blind-rotation step above it reduces to the
//! operations exposed here.
//!
//! ## Core Concepts
//!
//! **Torus:** a value `v` of a [`layouts::Torus`] type of width `W` represents
//! the real `v / 2^W mod 1`. Addition is wrapping integer addition and the only
//! multiplication is by a signed integer of the same width ([`layouts::Torus::mul_int`]).
//! [`layouts::Torus32`] and [`layouts::Torus64`] are provided.
//!
//! **Ring:** a [`layouts::Module`] fixes the ring degree `N` and the torus width.
//! All polynomials handed to one operation must share its `N`.
//!
//! **Layout types** ([`layouts`]):
//! - [`layouts::IntPolynomial`] -- `N` signed integer coefficients.
//! - [`layouts::TorusPolynomial`] -- `N` torus coefficients.
//! - [`layouts::Scratch`], [`layouts::ScratchOwned`] -- aligned scratch memory for temporary workspace.
//!
//! ## Architecture
//!
//! 1. **[`api`]** -- one trait per operation, implemented on [`layouts::Module`].
//! 2. **[`delegates`]** -- implementations of the [`api`] traits, checking operand
//!    shapes and forwarding coefficient slices to [`mod@reference`].
//! 3. **[`mod@reference`]** -- slice-level kernels, including the schoolbook and
//!    Karatsuba external products.
//!
//! ## External product
//!
//! The product of an [`layouts::IntPolynomial`] by a [`layouts::TorusPolynomial`]
//! is available through a schoolbook kernel ([`api::TorusPolyMulNaive`]) and a
//! Karatsuba kernel ([`api::TorusPolyMulKaratsuba`]). Both are exact and return
//! identical results. The Karatsuba kernel draws all of its temporaries from a
//! single [`layouts::Scratch`] whose size is given by
//! [`api::TorusPolyMulKaratsubaTmpBytes`].
//!
//! ## Contracts
//!
//! - Arithmetic never fails; coefficient overflow wraps, which is the torus semantics.
//! - Operand degree mismatches and undersized scratch regions are caller bugs
//!   and panic.
//! - Output operands are taken by `&mut` and inputs by `&`: an output can never
//!   alias an input.

pub mod api;
pub mod delegates;
pub mod layouts;
pub mod reference;

#[cfg(test)]
mod test_suite;

pub use sampling::source::Source;

/// Default memory alignment in bytes for every region taken from a [`layouts::Scratch`].
///
/// Set to 64 bytes to match the cache-line size of modern x86 processors.
pub const DEFAULTALIGN: usize = 64;

/// Recursion cut-off of the Karatsuba kernel: sub-products whose half size is
/// at most this value are computed by the schoolbook convolution.
pub const KARATSUBA_THRESHOLD: usize = 4;

/// Rounds `bytes` up to the next multiple of [`DEFAULTALIGN`].
#[inline]
pub fn align_bytes(bytes: usize) -> usize {
    bytes.next_multiple_of(DEFAULTALIGN)
}

/// Returns `true` if `ptr` is aligned to [`DEFAULTALIGN`] bytes.
pub fn is_aligned<T>(ptr: *const T) -> bool {
    (ptr as usize).is_multiple_of(DEFAULTALIGN)
}

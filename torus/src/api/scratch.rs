//! Scratch memory allocation, borrowing, and arena-style sub-allocation.

use bytemuck::Pod;

use crate::layouts::Scratch;

/// Allocates a new [crate::layouts::ScratchOwned] of `size` aligned bytes.
pub trait ScratchOwnedAlloc {
    fn alloc(size: usize) -> Self;
}

/// Borrows the bytes of a [crate::layouts::ScratchOwned] as a [Scratch].
pub trait ScratchOwnedBorrow {
    fn borrow(&mut self) -> &mut Scratch;
}

/// Wrap an array of mutable borrowed bytes into a [Scratch].
pub trait ScratchFromBytes {
    fn from_bytes(data: &mut [u8]) -> &mut Scratch;
}

/// Returns how many bytes left can be taken from the scratch.
pub trait ScratchAvailable {
    fn available(&self) -> usize;
}

/// Takes `len` elements of type `T` from the front of a [Scratch] and returns
/// them together with the remaining [Scratch].
///
/// # Panics
///
/// Panics if fewer than `len * size_of::<T>()` aligned bytes are available.
pub trait TakeSlice {
    fn take_slice<T: Pod>(&mut self, len: usize) -> (&mut [T], &mut Self);
}

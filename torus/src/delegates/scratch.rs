use bytemuck::Pod;

use crate::{
    DEFAULTALIGN,
    api::{ScratchAvailable, ScratchFromBytes, ScratchOwnedAlloc, ScratchOwnedBorrow, TakeSlice},
    is_aligned,
    layouts::{Scratch, ScratchOwned},
};

impl ScratchOwnedAlloc for ScratchOwned {
    fn alloc(size: usize) -> Self {
        // Slack so that `size` bytes remain after aligning the start.
        Self {
            data: vec![0u8; size + DEFAULTALIGN],
        }
    }
}

impl ScratchOwnedBorrow for ScratchOwned {
    fn borrow(&mut self) -> &mut Scratch {
        Scratch::from_bytes(&mut self.data)
    }
}

impl ScratchFromBytes for Scratch {
    fn from_bytes(data: &mut [u8]) -> &mut Scratch {
        // SAFETY: `Scratch` is a `#[repr(transparent)]` wrapper around `[u8]`.
        unsafe { &mut *(data as *mut [u8] as *mut Scratch) }
    }
}

impl ScratchAvailable for Scratch {
    fn available(&self) -> usize {
        let ptr: *const u8 = self.data.as_ptr();
        let self_len: usize = self.data.len();
        let aligned_offset: usize = ptr.align_offset(DEFAULTALIGN);
        self_len.saturating_sub(aligned_offset)
    }
}

impl TakeSlice for Scratch {
    fn take_slice<T: Pod>(&mut self, len: usize) -> (&mut [T], &mut Self) {
        if len == 0 {
            return (&mut [], self);
        }
        let (take_slice, rem_slice) = take_slice_aligned(&mut self.data, len * size_of::<T>());
        (bytemuck::cast_slice_mut(take_slice), Scratch::from_bytes(rem_slice))
    }
}

/// Splits `take_len` bytes starting at the first [`DEFAULTALIGN`]-aligned
/// position of `data` from the remaining tail.
fn take_slice_aligned(data: &mut [u8], take_len: usize) -> (&mut [u8], &mut [u8]) {
    let self_len: usize = data.len();
    let aligned_offset: usize = data.as_ptr().align_offset(DEFAULTALIGN).min(self_len);
    let aligned_len: usize = self_len - aligned_offset;

    if take_len > aligned_len {
        panic!(
            "Attempted to take {} from scratch with {} aligned bytes left",
            take_len, aligned_len,
        );
    }

    let (_, aligned) = data.split_at_mut(aligned_offset);
    let (take, rem) = aligned.split_at_mut(take_len);
    debug_assert!(is_aligned(take.as_ptr()));
    (take, rem)
}

/// Owned scratch memory. At least the requested number of bytes are
/// available once the region is aligned to [`crate::DEFAULTALIGN`].
pub struct ScratchOwned {
    pub(crate) data: Vec<u8>,
}

/// Borrowed scratch memory from which temporaries are carved front to back.
///
/// Taking a region returns it together with the remaining tail; passing the
/// same tail to several calls one after another lets them reuse the same
/// memory, which is what bounds the footprint of recursive kernels.
#[repr(transparent)]
pub struct Scratch {
    pub(crate) data: [u8],
}

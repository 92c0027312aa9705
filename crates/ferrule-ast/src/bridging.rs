//! Strings handed across the AST boundary as (pointer, length) pairs.

use std::fmt;
use std::marker::PhantomData;
use std::str::Utf8Error;

/// A borrowed byte string in the boundary's layout.
///
/// The lifetime ties the reference to whatever owns the bytes. The null
/// pointer with zero length is the "empty-initialized" sentinel; every other
/// value points at `len` readable bytes.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct BridgedStringRef<'a> {
    data: *const u8,
    len: usize,
    _marker: PhantomData<&'a [u8]>,
}

impl<'a> BridgedStringRef<'a> {
    pub const EMPTY: Self = Self { data: std::ptr::null(), len: 0, _marker: PhantomData };

    pub fn new(text: &'a str) -> Self {
        Self { data: text.as_ptr(), len: text.len(), _marker: PhantomData }
    }

    /// # Safety
    ///
    /// `data` must be null with `len == 0`, or point at `len` bytes that stay
    /// valid and unchanged for `'a`.
    pub unsafe fn from_raw_parts(data: *const u8, len: usize) -> Self {
        Self { data, len, _marker: PhantomData }
    }

    pub fn data(self) -> *const u8 {
        self.data
    }

    pub fn len(self) -> usize {
        self.len
    }

    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    /// `true` only for the (null, 0) sentinel, not for empty strings that
    /// point somewhere.
    pub fn is_empty_initialized(self) -> bool {
        self.data.is_null() && self.len == 0
    }

    pub fn as_bytes(self) -> &'a [u8] {
        if self.data.is_null() {
            return &[];
        }
        // SAFETY: non-null references point at `len` bytes valid for `'a`.
        unsafe { std::slice::from_raw_parts(self.data, self.len) }
    }

    pub fn to_str(self) -> Result<&'a str, Utf8Error> {
        std::str::from_utf8(self.as_bytes())
    }
}

impl fmt::Debug for BridgedStringRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty_initialized() {
            return f.write_str("BridgedStringRef::EMPTY");
        }
        write!(f, "{:?}", String::from_utf8_lossy(self.as_bytes()))
    }
}

/// A heap copy of a string followed by a NUL byte.
///
/// [`OwnedBridgedString::into_raw`] hands ownership to the other side of the
/// boundary, which returns it through [`OwnedBridgedString::from_raw`].
pub struct OwnedBridgedString {
    bytes: Box<[u8]>,
}

impl OwnedBridgedString {
    pub fn new(text: &str) -> Self {
        let mut bytes = Vec::with_capacity(text.len() + 1);
        bytes.extend_from_slice(text.as_bytes());
        bytes.push(0);
        Self { bytes: bytes.into_boxed_slice() }
    }

    /// Length without the trailing NUL.
    pub fn len(&self) -> usize {
        self.bytes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_bridged(&self) -> BridgedStringRef<'_> {
        // SAFETY: the buffer holds `len() + 1` bytes and outlives the borrow.
        unsafe { BridgedStringRef::from_raw_parts(self.bytes.as_ptr(), self.len()) }
    }

    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.bytes
    }

    /// Releases ownership. The result must be passed to
    /// [`OwnedBridgedString::from_raw`] exactly once to free it.
    pub fn into_raw(self) -> BridgedStringRef<'static> {
        let len = self.len();
        let data = Box::into_raw(self.bytes).cast::<u8>();
        // SAFETY: the leaked buffer stays valid until `from_raw`.
        unsafe { BridgedStringRef::from_raw_parts(data, len) }
    }

    /// Takes back a buffer produced by [`OwnedBridgedString::into_raw`].
    /// Returns `None` for [`BridgedStringRef::EMPTY`].
    ///
    /// # Safety
    ///
    /// `raw` must be `EMPTY` or come from `into_raw` and not have been
    /// reclaimed before.
    pub unsafe fn from_raw(raw: BridgedStringRef<'static>) -> Option<Self> {
        if raw.is_empty_initialized() {
            return None;
        }
        let slice = std::ptr::slice_from_raw_parts_mut(raw.data.cast_mut(), raw.len + 1);
        // SAFETY: guaranteed by the caller.
        Some(Self { bytes: unsafe { Box::from_raw(slice) } })
    }
}

impl fmt::Debug for OwnedBridgedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OwnedBridgedString").field(&self.as_bridged()).finish()
    }
}

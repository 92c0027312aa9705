//! Moving text across the AST boundary.

use ferrule_ast::{BridgedStringRef, OwnedBridgedString};

/// Copies the referenced bytes into a `String`.
///
/// # Panics
///
/// Panics if the bytes are not valid UTF-8.
#[track_caller]
pub fn decode_bridged_string(string: BridgedStringRef<'_>) -> String {
    match string.to_str() {
        Ok(text) => text.to_owned(),
        Err(error) => panic!("bridged string is not valid UTF-8: {error}"),
    }
}

/// Lends `text` to `body` as a [`BridgedStringRef`] that cannot outlive the call.
pub fn with_bridged_string<R>(
    text: &str,
    body: impl for<'a> FnOnce(BridgedStringRef<'a>) -> R,
) -> R {
    body(BridgedStringRef::new(text))
}

/// Heap-copies `text` with a trailing NUL. The copy lives until it is dropped
/// or, once handed out with [`OwnedBridgedString::into_raw`], until
/// [`ferrule_astgen_free_bridged_string`] releases it.
pub fn allocate_bridged_string(text: &str) -> OwnedBridgedString {
    OwnedBridgedString::new(text)
}

/// Releases a string produced by [`OwnedBridgedString::into_raw`].
/// Releasing [`BridgedStringRef::EMPTY`] does nothing.
///
/// # Safety
///
/// `string` must be `EMPTY` or come from `into_raw`, and must not be released
/// twice. Borrowed references must never be passed here.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ferrule_astgen_free_bridged_string(string: BridgedStringRef<'static>) {
    // SAFETY: forwarded to the caller.
    drop(unsafe { OwnedBridgedString::from_raw(string) });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_copies_the_text() {
        assert_eq!(decode_bridged_string(BridgedStringRef::new("héllo")), "héllo");
        assert_eq!(decode_bridged_string(BridgedStringRef::EMPTY), "");
    }

    #[test]
    #[should_panic = "not valid UTF-8"]
    fn decode_rejects_invalid_utf8() {
        let bytes = [0xff, 0xfe];
        let string = unsafe { BridgedStringRef::from_raw_parts(bytes.as_ptr(), bytes.len()) };
        decode_bridged_string(string);
    }

    #[test]
    fn borrowed_view_points_into_the_source() {
        let text = String::from("name");
        let (data, len) = with_bridged_string(&text, |string| (string.data(), string.len()));
        assert_eq!(data, text.as_ptr());
        assert_eq!(len, 4);
    }

    #[test]
    fn allocated_strings_are_nul_terminated() {
        let owned = allocate_bridged_string("hi");
        assert_eq!(owned.len(), 2);
        assert_eq!(owned.as_bytes_with_nul(), b"hi\0");

        let raw = owned.into_raw();
        assert_eq!(decode_bridged_string(raw), "hi");
        unsafe { ferrule_astgen_free_bridged_string(raw) };
    }

    #[test]
    fn releasing_the_empty_sentinel_is_a_no_op() {
        unsafe { ferrule_astgen_free_bridged_string(BridgedStringRef::EMPTY) };
    }
}

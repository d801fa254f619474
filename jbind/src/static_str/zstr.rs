use std::{
    ffi::CStr,
    fmt,
    hash::{Hash, Hasher},
    ops::Deref,
};

/// A zero-terminated UTF-8 string with static storage.
///
/// Built in constant context by [`zstr!`](crate::zstr) and the other toolkit macros, so a
/// malformed buffer is rejected at compile time. [`len`](ZStr::len) counts characters without the
/// terminator.
#[derive(Clone, Copy)]
pub struct ZStr {
    text: &'static str,
    c_str: &'static CStr,
}

impl ZStr {
    /// Wraps a buffer that ends with a single NUL byte and is otherwise valid UTF-8.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is not NUL terminated, contains an interior NUL or is not UTF-8. In a
    /// `const` item the panic is a compile error.
    pub const fn from_bytes_with_nul(bytes: &'static [u8]) -> Self {
        let c_str = match CStr::from_bytes_with_nul(bytes) {
            Ok(c_str) => c_str,
            Err(_) => panic!("Buffer must end with its only NUL byte"),
        };

        let (content, _) = bytes.split_at(bytes.len() - 1);
        let text = match std::str::from_utf8(content) {
            Ok(text) => text,
            Err(_) => panic!("Buffer is not valid UTF-8"),
        };

        ZStr { text, c_str }
    }

    pub const fn as_str(&self) -> &'static str {
        self.text
    }

    /// Content bytes, without the terminator.
    pub const fn as_bytes(&self) -> &'static [u8] {
        self.text.as_bytes()
    }

    pub fn as_bytes_with_nul(&self) -> &'static [u8] {
        self.c_str.to_bytes_with_nul()
    }

    pub const fn as_c_str(&self) -> &'static CStr {
        self.c_str
    }

    pub const fn len(&self) -> usize {
        self.text.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl Deref for ZStr {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.text
    }
}

impl AsRef<str> for ZStr {
    fn as_ref(&self) -> &str {
        self.text
    }
}

impl AsRef<CStr> for ZStr {
    fn as_ref(&self) -> &CStr {
        self.c_str
    }
}

impl PartialEq for ZStr {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for ZStr {}

impl PartialEq<str> for ZStr {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&'_ str> for ZStr {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl PartialEq<ZStr> for &'_ str {
    fn eq(&self, other: &ZStr) -> bool {
        *self == other.text
    }
}

impl Hash for ZStr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state)
    }
}

impl fmt::Debug for ZStr {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.text, formatter)
    }
}

impl fmt::Display for ZStr {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::ZStr;

    const HELLO: ZStr = ZStr::from_bytes_with_nul(b"hello\0");

    #[test]
    fn length_excludes_terminator() {
        assert_eq!(HELLO.len(), 5);
        assert_eq!(HELLO.as_bytes(), b"hello");
        assert_eq!(HELLO.as_bytes_with_nul(), b"hello\0");
        assert_eq!(HELLO.as_c_str().to_bytes(), b"hello");
    }

    #[test]
    fn empty_string_is_just_the_terminator() {
        const EMPTY: ZStr = ZStr::from_bytes_with_nul(b"\0");

        assert!(EMPTY.is_empty());
        assert_eq!(EMPTY, "");
        assert_eq!(EMPTY.as_bytes_with_nul(), b"\0");
    }

    #[test]
    fn compares_and_formats_as_text() {
        assert_eq!(HELLO, "hello");
        assert_eq!("hello", HELLO);
        assert_eq!(HELLO.to_string(), "hello");
        assert_eq!(format!("{:?}", HELLO), "\"hello\"");
        assert!(HELLO.starts_with("he"));
    }

    #[test]
    #[should_panic]
    fn rejects_missing_terminator() {
        ZStr::from_bytes_with_nul(b"hello");
    }

    #[test]
    #[should_panic]
    fn rejects_interior_nul() {
        ZStr::from_bytes_with_nul(b"he\0llo\0");
    }

    #[test]
    #[should_panic]
    fn rejects_invalid_utf8() {
        ZStr::from_bytes_with_nul(b"\xff\0");
    }
}

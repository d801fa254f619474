//! Compile-time string building.
//!
//! The `const fn`s in this module produce fixed-size byte buffers whose length is a const generic
//! parameter. The caller computes that length up front and every function asserts it, so a
//! mismatch aborts constant evaluation instead of truncating the output. The exported macros
//! ([`zstr!`](crate::zstr), [`digits!`](crate::digits), [`replace!`](crate::replace) and
//! [`join!`](crate::join)) do the length bookkeeping and wrap the result in a [`ZStr`].
//!
//! Macro operands must be constant expressions of type `&str` or [`ZStr`].

mod zstr;

pub use self::zstr::ZStr;

/// Copies `src` into a buffer of `M` bytes, the last one being the NUL terminator.
///
/// `M` must be `src.len() + 1`.
pub const fn to_char_array<const M: usize>(src: &[u8]) -> [u8; M] {
    assert!(src.len() + 1 == M, "Buffer size must be the source length plus one");

    let mut buffer = [0; M];
    let mut index = 0;

    while index < src.len() {
        buffer[index] = src[index];
        index += 1;
    }

    buffer
}

/// Returns the number of decimal digits in `n`. Zero has one digit.
pub const fn num_digits(n: usize) -> usize {
    if n < 10 {
        1
    } else {
        num_digits(n / 10) + 1
    }
}

/// Renders `n` as decimal digits, most significant first.
///
/// `L` must be `num_digits(n)`.
pub const fn integer_to_digits<const L: usize>(n: usize) -> [u8; L] {
    assert!(num_digits(n) == L, "Buffer size must match the digit count");

    let mut digits = [0; L];
    let mut remaining = n;
    let mut index = L;

    while index > 0 {
        index -= 1;
        digits[index] = b'0' + (remaining % 10) as u8;
        remaining /= 10;
    }

    digits
}

/// Copies `src`, substituting every `from` byte with `to`.
///
/// `M` must be `src.len()`.
pub const fn replace<const M: usize>(src: &[u8], from: u8, to: u8) -> [u8; M] {
    assert!(src.len() == M, "Replacement must preserve the length");

    let mut replaced = [0; M];
    let mut index = 0;

    while index < M {
        replaced[index] = if src[index] == from { to } else { src[index] };
        index += 1;
    }

    replaced
}

/// Sum of the lengths of `parts`.
pub const fn total_len(parts: &[&[u8]]) -> usize {
    let mut length = 0;
    let mut index = 0;

    while index < parts.len() {
        length += parts[index].len();
        index += 1;
    }

    length
}

/// Concatenates `parts` in order.
///
/// `M` must be `total_len(parts)`.
pub const fn join<const M: usize>(parts: &[&[u8]]) -> [u8; M] {
    assert!(total_len(parts) == M, "Buffer size must be the total length of the parts");

    let mut joined = [0; M];
    let mut position = 0;
    let mut part_index = 0;

    while part_index < parts.len() {
        let part = parts[part_index];
        let mut index = 0;

        while index < part.len() {
            joined[position] = part[index];
            position += 1;
            index += 1;
        }

        part_index += 1;
    }

    joined
}

/// Converts a character operand into a byte, rejecting anything outside ASCII so that replacing
/// bytes can never break UTF-8.
pub const fn ascii(character: char) -> u8 {
    assert!(character.is_ascii(), "Only ASCII characters can be replaced");

    character as u8
}

#[doc(hidden)]
#[macro_export]
macro_rules! __zstr_from_bytes {
    ($bytes:expr) => {{
        const __ZSTR_SOURCE: &[u8] = $bytes;
        const __ZSTR_SIZE: usize = __ZSTR_SOURCE.len() + 1;
        const __ZSTR_BUFFER: [u8; __ZSTR_SIZE] =
            $crate::static_str::to_char_array::<{ __ZSTR_SIZE }>(__ZSTR_SOURCE);
        const __ZSTR_WITH_NUL: &[u8] = &__ZSTR_BUFFER;
        const __ZSTR: $crate::ZStr = $crate::ZStr::from_bytes_with_nul(__ZSTR_WITH_NUL);

        __ZSTR
    }};
}

/// Builds a zero-terminated [`ZStr`](crate::ZStr) with static storage from a constant string.
///
/// ```
/// const NAME: jbind::ZStr = jbind::zstr!("java/lang/Object");
///
/// assert_eq!(NAME.as_bytes_with_nul(), b"java/lang/Object\0");
/// ```
#[macro_export]
macro_rules! zstr {
    ($string:expr) => {
        $crate::__zstr_from_bytes!($string.as_bytes())
    };
}

/// Renders a constant unsigned integer as decimal digits.
///
/// ```
/// assert_eq!(jbind::digits!(12345), "12345");
/// assert_eq!(jbind::digits!(0), "0");
/// ```
#[macro_export]
macro_rules! digits {
    ($number:expr) => {{
        const __DIGITS_NUMBER: usize = $number;
        const __DIGITS_COUNT: usize = $crate::static_str::num_digits(__DIGITS_NUMBER);
        const __DIGITS: [u8; __DIGITS_COUNT] =
            $crate::static_str::integer_to_digits::<{ __DIGITS_COUNT }>(__DIGITS_NUMBER);

        $crate::__zstr_from_bytes!(&__DIGITS)
    }};
}

/// Replaces every occurrence of an ASCII character in a constant string.
///
/// ```
/// assert_eq!(jbind::replace!("a.b.C", '.', '/'), "a/b/C");
/// ```
#[macro_export]
macro_rules! replace {
    ($string:expr, $from:expr, $to:expr) => {{
        const __REPLACE_SOURCE: &[u8] = $string.as_bytes();
        const __REPLACE_LENGTH: usize = __REPLACE_SOURCE.len();
        const __REPLACED: [u8; __REPLACE_LENGTH] =
            $crate::static_str::replace::<{ __REPLACE_LENGTH }>(
                __REPLACE_SOURCE,
                $crate::static_str::ascii($from),
                $crate::static_str::ascii($to),
            );

        $crate::__zstr_from_bytes!(&__REPLACED)
    }};
}

/// Concatenates constant strings, in argument order and without separators.
///
/// ```
/// const SIGNATURE: jbind::ZStr = jbind::join!("L", "java/lang/String", ";");
///
/// assert_eq!(SIGNATURE, "Ljava/lang/String;");
/// assert_eq!(jbind::join!(), "");
/// ```
#[macro_export]
macro_rules! join {
    ($( $string:expr ),* $(,)?) => {{
        const __JOIN_PARTS: &[&[u8]] = &[$( $string.as_bytes() ),*];
        const __JOIN_LENGTH: usize = $crate::static_str::total_len(__JOIN_PARTS);
        const __JOINED: [u8; __JOIN_LENGTH] =
            $crate::static_str::join::<{ __JOIN_LENGTH }>(__JOIN_PARTS);

        $crate::__zstr_from_bytes!(&__JOINED)
    }};
}

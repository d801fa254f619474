use crate::{JniSignature, ZStr};
use std::fmt;

/// How a native type is represented on the Java side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClassKind {
    /// Composite value marshalled between Java and native code and passed by value.
    Data,
    /// Object living in the native code space, exposed to Java as an opaque handle.
    Native,
}

impl fmt::Display for ClassKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassKind::Data => formatter.write_str("data class"),
            ClassKind::Native => formatter.write_str("native class"),
        }
    }
}

/// Mapping between a native type and a Java class.
///
/// Implemented through [`declare_data_class!`](crate::declare_data_class),
/// [`declare_native_class!`](crate::declare_native_class) or, with the `derive` feature,
/// `#[derive(JavaClass)]`. All names are computed at compile time.
pub trait JavaClass: JniSignature + 'static {
    const KIND: ClassKind;

    /// Dotted class name, such as `net.example.Point`.
    const QUALIFIED_NAME: &'static str;

    /// Slash delimited class name accepted by `FindClass`, such as `net/example/Point`.
    const CLASS_NAME: ZStr;
}

/// Checks that `qualified_name` is a dotted Java class name: not empty, no empty segment and no
/// `/` separator.
///
/// # Panics
///
/// Panics on an invalid name, which is a compile error when called in constant context.
pub const fn check_qualified_name(qualified_name: &str) {
    let bytes = qualified_name.as_bytes();
    let mut segment_length = 0;
    let mut index = 0;

    assert!(!bytes.is_empty(), "Java class name can't be empty");

    while index < bytes.len() {
        match bytes[index] {
            b'/' => panic!("Java class name must use '.' as a separator"),
            b'.' => {
                assert!(segment_length > 0, "Java class name has an empty segment");
                segment_length = 0;
            }
            _ => segment_length += 1,
        }

        index += 1;
    }

    assert!(segment_length > 0, "Java class name has an empty segment");
}

#[doc(hidden)]
#[macro_export]
macro_rules! __declare_class {
    ($native_type:ty, $qualified_name:expr, $kind:expr) => {
        const _: () = $crate::check_qualified_name($qualified_name);

        impl $crate::JavaClass for $native_type {
            const KIND: $crate::ClassKind = $kind;
            const QUALIFIED_NAME: &'static str = $qualified_name;
            const CLASS_NAME: $crate::ZStr = $crate::replace!($qualified_name, '.', '/');
        }

        impl $crate::JniSignature for $native_type {
            const SIGNATURE: $crate::ZStr =
                $crate::join!("L", $crate::replace!($qualified_name, '.', '/'), ";");
        }
    };
}

/// Maps a native type to a Java data class.
///
/// ```
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// jbind::declare_data_class!(Point, "net.example.Point");
///
/// use jbind::{JavaClass, JniSignature};
///
/// assert_eq!(Point::CLASS_NAME, "net/example/Point");
/// assert_eq!(Point::SIGNATURE, "Lnet/example/Point;");
/// ```
#[macro_export]
macro_rules! declare_data_class {
    ($native_type:ty, $qualified_name:literal $(,)?) => {
        $crate::__declare_class!($native_type, $qualified_name, $crate::ClassKind::Data);
    };
}

/// Maps a native type to a Java class that holds it as an opaque handle.
#[macro_export]
macro_rules! declare_native_class {
    ($native_type:ty, $qualified_name:literal $(,)?) => {
        $crate::__declare_class!($native_type, $qualified_name, $crate::ClassKind::Native);
    };
}

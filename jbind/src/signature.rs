use crate::ZStr;

/// JNI type descriptor of a type, as used in field and method signatures.
pub trait JniSignature {
    const SIGNATURE: ZStr;
}

macro_rules! impl_jni_signature {
    ($( $native_type:ty => $signature:literal ),* $(,)?) => {
        $(
            impl JniSignature for $native_type {
                const SIGNATURE: ZStr = crate::zstr!($signature);
            }
        )*
    };
}

impl_jni_signature! {
    () => "V",
    bool => "Z",
    i8 => "B",
    u16 => "C",
    i16 => "S",
    i32 => "I",
    i64 => "J",
    f32 => "F",
    f64 => "D",
    String => "Ljava/lang/String;",
    &'_ str => "Ljava/lang/String;",
    Vec<u8> => "[B",
    &'_ [u8] => "[B",
}

/// Builds a JNI method descriptor from Rust parameter and return types.
///
/// Omitting the return type describes a `void` method.
///
/// ```
/// use jbind::method_signature;
///
/// assert_eq!(method_signature!((i32, String) -> bool), "(ILjava/lang/String;)Z");
/// assert_eq!(method_signature!(()), "()V");
/// ```
#[macro_export]
macro_rules! method_signature {
    (( $( $parameter:ty ),* $(,)? ) -> $return_type:ty) => {
        $crate::join!(
            "(",
            $( <$parameter as $crate::JniSignature>::SIGNATURE, )*
            ")",
            <$return_type as $crate::JniSignature>::SIGNATURE,
        )
    };
    (( $( $parameter:ty ),* $(,)? )) => {
        $crate::method_signature!(( $( $parameter ),* ) -> ())
    };
}

#[cfg(test)]
mod tests {
    use super::JniSignature;
    use crate::ZStr;

    struct Session;

    crate::declare_native_class!(Session, "net.example.Session");

    #[test]
    fn primitive_descriptors() {
        assert_eq!(<()>::SIGNATURE, "V");
        assert_eq!(bool::SIGNATURE, "Z");
        assert_eq!(i32::SIGNATURE, "I");
        assert_eq!(i64::SIGNATURE, "J");
        assert_eq!(f64::SIGNATURE, "D");
        assert_eq!(String::SIGNATURE, "Ljava/lang/String;");
        assert_eq!(<&[u8]>::SIGNATURE, "[B");
    }

    #[test]
    fn method_descriptors() {
        const CONNECT: ZStr = method_signature!((String, i32) -> Session);

        assert_eq!(CONNECT, "(Ljava/lang/String;I)Lnet/example/Session;");
        assert_eq!(method_signature!((Session)), "(Lnet/example/Session;)V");
        assert_eq!(method_signature!(() -> Vec<u8>), "()[B");
        assert_eq!(method_signature!((bool, f32, i16,) -> ()), "(ZFS)V");
    }
}

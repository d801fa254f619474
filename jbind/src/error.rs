use std::any::TypeId;

/// Errors raised while registering Java classes or talking to the JVM.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The same native type was added to a registry twice.
    #[error("{type_name} is already mapped to a Java class")]
    DuplicateType {
        type_id: TypeId,
        type_name: &'static str,
    },

    /// Two native types claim the same Java class.
    #[error("Java class {qualified_name} is mapped by both {first} and {second}")]
    DuplicateClassName {
        qualified_name: &'static str,
        first: &'static str,
        second: &'static str,
    },

    #[error("A class registry has already been installed")]
    AlreadyInstalled,

    #[error("No class registry has been installed")]
    NotInstalled,

    #[error("{0} has not been registered as a Java class")]
    UnregisteredType(&'static str),

    #[error("The JNI function table has no {0} entry")]
    MissingFunction(&'static str),

    #[error("Failed to register native methods for {class_name} (error code {code})")]
    RegisterNatives {
        class_name: &'static str,
        code: jni::sys::jint,
    },

    #[error("JNI call failed")]
    Jni(#[from] jni::errors::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

//! Compile-time Java class names and signatures for JNI bindings.
//!
//! Native types are mapped to Java classes with [`declare_data_class!`],
//! [`declare_native_class!`] or `#[derive(JavaClass)]`. Their internal names and type signatures
//! are built during compilation by the macros in [`static_str`], and collected at load time into
//! a [`Registry`].

pub extern crate jni;

mod error;
mod java_class;
mod jbind_env;
mod lifecycle;
mod registry;
mod signature;
pub mod static_str;

pub use self::{
    error::{Error, Result},
    java_class::{check_qualified_name, ClassKind, JavaClass},
    jbind_env::{clear_class_cache, JbindEnv, NativeMethod},
    lifecycle::{on_load, on_unload},
    registry::{ClassEntry, Registry, RegistryBuilder},
    signature::JniSignature,
    static_str::ZStr,
};
#[cfg(feature = "derive")]
pub use jbind_macros::JavaClass;

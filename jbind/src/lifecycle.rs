use crate::{jbind_env, JbindEnv, Registry, Result};
use jni::{
    sys::{jint, JNI_ERR, JNI_VERSION_1_6},
    JavaVM,
};

/// Body of the library's `JNI_OnLoad`.
///
/// Runs `initializer` with the loading thread's environment, resolves all classes of the registry
/// it returns and then installs that registry. Returns the JNI version to report to the JVM, or
/// `JNI_ERR` if any step failed. A failed load installs nothing, so the library can be loaded
/// again.
pub fn on_load<F>(vm: &JavaVM, initializer: F) -> jint
where
    F: FnOnce(&JbindEnv<'_>) -> Result<Registry>,
{
    match initialize(vm, initializer) {
        Ok(()) => JNI_VERSION_1_6,
        Err(error) => {
            log::error!("Failed to load native library: {}", error);
            JNI_ERR
        }
    }
}

fn initialize<F>(vm: &JavaVM, initializer: F) -> Result<()>
where
    F: FnOnce(&JbindEnv<'_>) -> Result<Registry>,
{
    let env = JbindEnv::from(vm.get_env()?);
    let registry = initializer(&env)?;

    install_preloaded(registry, |registry| env.preload_classes(registry))?;

    Ok(())
}

fn install_preloaded<P>(registry: Registry, preload: P) -> Result<&'static Registry>
where
    P: FnOnce(&Registry) -> Result<()>,
{
    let result = preload(&registry).and_then(|()| registry.install());

    if result.is_err() {
        jbind_env::clear_class_cache();
    }

    result
}

/// Body of the library's `JNI_OnUnload`.
pub fn on_unload() {
    jbind_env::clear_class_cache();
}

/// Defines the `JNI_OnLoad` and `JNI_OnUnload` entry points of a native library.
///
/// The argument is a function taking a [`JbindEnv`](crate::JbindEnv) and returning the
/// [`Registry`](crate::Registry) of the library's classes, see [`on_load`](crate::on_load).
#[macro_export]
macro_rules! java_extension_module {
    ($initializer:expr) => {
        #[no_mangle]
        pub extern "system" fn JNI_OnLoad(
            vm: *mut $crate::jni::sys::JavaVM,
            _reserved: *mut ::std::ffi::c_void,
        ) -> $crate::jni::sys::jint {
            if vm.is_null() {
                return $crate::jni::sys::JNI_ERR;
            }

            match unsafe { $crate::jni::JavaVM::from_raw(vm) } {
                Ok(vm) => $crate::on_load(&vm, $initializer),
                Err(_) => $crate::jni::sys::JNI_ERR,
            }
        }

        #[no_mangle]
        pub extern "system" fn JNI_OnUnload(
            _vm: *mut $crate::jni::sys::JavaVM,
            _reserved: *mut ::std::ffi::c_void,
        ) {
            $crate::on_unload();
        }
    };
}

#[cfg(test)]
mod tests {
    use super::install_preloaded;
    use crate::{Error, Registry};

    struct Widget;

    crate::declare_native_class!(Widget, "net.example.Widget");

    fn widget_registry() -> Registry {
        Registry::builder()
            .class::<Widget>()
            .build()
            .expect("Failed to build registry")
    }

    #[test]
    fn failed_preload_leaves_library_loadable() {
        let failed = install_preloaded(widget_registry(), |_| Err(Error::NotInstalled));

        assert!(matches!(failed, Err(Error::NotInstalled)));
        assert!(Registry::global().is_err());

        let mut preloaded = Vec::new();
        let installed = install_preloaded(widget_registry(), |registry| {
            preloaded.extend(registry.iter().map(|entry| entry.class_name()));
            Ok(())
        })
        .expect("Failed to install registry after a failed load");

        assert_eq!(preloaded, [crate::zstr!("net/example/Widget")]);
        assert!(installed.contains::<Widget>());
        assert!(Registry::global().is_ok());

        let again = install_preloaded(widget_registry(), |_| Ok(()));

        assert!(matches!(again, Err(Error::AlreadyInstalled)));
    }
}

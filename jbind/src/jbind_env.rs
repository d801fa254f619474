use crate::{Error, JavaClass, Registry, Result, ZStr};
use jni::{
    objects::{GlobalRef, JObject},
    sys::{jint, JNINativeMethod, JNI_OK},
    JNIEnv,
};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::{
    borrow::Cow,
    collections::HashMap,
    ffi::c_void,
    ops::Deref,
    os::raw::c_char,
};

static CLASS_CACHE: Lazy<Mutex<HashMap<String, GlobalRef>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// A native function bound to a method of a Java class.
#[derive(Clone, Copy, Debug)]
pub struct NativeMethod {
    pub name: ZStr,
    pub signature: ZStr,
    pub fn_ptr: *mut c_void,
}

impl NativeMethod {
    /// Entry for the `RegisterNatives` table. The names point into static storage, so the entry
    /// stays valid for the life of the process.
    pub fn to_raw(&self) -> JNINativeMethod {
        JNINativeMethod {
            name: self.name.as_c_str().as_ptr() as *mut c_char,
            signature: self.signature.as_c_str().as_ptr() as *mut c_char,
            fnPtr: self.fn_ptr,
        }
    }
}

pub struct JbindEnv<'env> {
    env: JNIEnv<'env>,
}

impl<'env> From<JNIEnv<'env>> for JbindEnv<'env> {
    fn from(env: JNIEnv<'env>) -> Self {
        JbindEnv { env }
    }
}

impl<'env> Deref for JbindEnv<'env> {
    type Target = JNIEnv<'env>;

    fn deref(&self) -> &Self::Target {
        &self.env
    }
}

impl<'env> JbindEnv<'env> {
    /// Returns the cached class object a native type is mapped to.
    pub fn get_class<T: JavaClass>(&self) -> Result<GlobalRef> {
        self.get_class_by_name(T::CLASS_NAME.as_str())
    }

    pub fn get_class_by_name<'a>(&self, class_name: impl Into<Cow<'a, str>>) -> Result<GlobalRef> {
        let class_name = class_name.into();
        let mut cache = CLASS_CACHE.lock();

        if let Some(class) = cache.get(class_name.as_ref()) {
            Ok(class.clone())
        } else {
            let class = self.load_class(class_name.as_ref())?;

            cache.insert(class_name.into_owned(), class.clone());

            Ok(class)
        }
    }

    /// Looks up a class without going through the cache.
    pub fn load_class(&self, class_name: impl AsRef<str>) -> Result<GlobalRef> {
        let class_name = class_name.as_ref();
        let local_ref = self.env.find_class(class_name).map_err(|error| {
            log::error!("Failed to find {} Java class", class_name);
            error
        })?;

        log::debug!("Loaded {} Java class", class_name);

        Ok(self.env.new_global_ref(JObject::from(local_ref))?)
    }

    /// Resolves every class in `registry` so later lookups hit the cache.
    ///
    /// Classes must be resolved from a thread that sees the application class loader, which is
    /// why this runs while the library is being loaded.
    pub fn preload_classes(&self, registry: &Registry) -> Result<()> {
        for entry in registry.iter() {
            self.get_class_by_name(entry.class_name().as_str())?;
        }

        Ok(())
    }

    /// Binds native functions to methods of the Java class `T` is mapped to.
    pub fn register_native_methods<T: JavaClass>(&self, methods: &[NativeMethod]) -> Result<()> {
        let class = self.get_class::<T>()?;
        let raw_methods: Vec<JNINativeMethod> = methods.iter().map(NativeMethod::to_raw).collect();
        let raw_env = self.env.get_native_interface();

        let register_natives = unsafe { (**raw_env).RegisterNatives }
            .ok_or(Error::MissingFunction("RegisterNatives"))?;

        let code = unsafe {
            register_natives(
                raw_env,
                class.as_obj().into_inner(),
                raw_methods.as_ptr(),
                raw_methods.len() as jint,
            )
        };

        if code != JNI_OK {
            log::error!(
                "Failed to register {} native methods for {}",
                methods.len(),
                T::QUALIFIED_NAME
            );

            return Err(Error::RegisterNatives {
                class_name: T::QUALIFIED_NAME,
                code,
            });
        }

        log::info!(
            "Registered {} native methods for {}",
            methods.len(),
            T::QUALIFIED_NAME
        );

        Ok(())
    }
}

/// Drops every cached class reference.
pub fn clear_class_cache() {
    let mut cache = CLASS_CACHE.lock();

    log::debug!("Releasing {} cached Java classes", cache.len());

    cache.clear();
}

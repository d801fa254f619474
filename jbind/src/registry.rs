//! Process-wide table of the native types exposed to Java.
//!
//! The table is assembled with a [`RegistryBuilder`], usually from the library's `JNI_OnLoad`
//! through [`on_load`](crate::on_load), and installed once. After installation it is read-only.

use crate::{ClassKind, Error, JavaClass, JniSignature, Result, ZStr};
use once_cell::sync::OnceCell;
use std::{
    any::{type_name, TypeId},
    collections::HashMap,
};

static REGISTRY: OnceCell<Registry> = OnceCell::new();

/// One registered native type and the Java class it maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassEntry {
    type_id: TypeId,
    type_name: &'static str,
    kind: ClassKind,
    qualified_name: &'static str,
    class_name: ZStr,
    signature: ZStr,
}

impl ClassEntry {
    pub fn of<T: JavaClass>() -> Self {
        ClassEntry {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            kind: T::KIND,
            qualified_name: T::QUALIFIED_NAME,
            class_name: T::CLASS_NAME,
            signature: <T as JniSignature>::SIGNATURE,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Rust name of the native type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn kind(&self) -> ClassKind {
        self.kind
    }

    pub fn qualified_name(&self) -> &'static str {
        self.qualified_name
    }

    pub fn class_name(&self) -> ZStr {
        self.class_name
    }

    pub fn signature(&self) -> ZStr {
        self.signature
    }
}

/// Collects class mappings before they are frozen into a [`Registry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: Vec<ClassEntry>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        RegistryBuilder::default()
    }

    pub fn class<T: JavaClass>(mut self) -> Self {
        self.entries.push(ClassEntry::of::<T>());
        self
    }

    /// Indexes the collected classes.
    ///
    /// Fails if a native type is added twice or if two native types map to the same Java class.
    pub fn build(self) -> Result<Registry> {
        let mut by_type = HashMap::with_capacity(self.entries.len());
        let mut by_qualified_name = HashMap::with_capacity(self.entries.len());
        let mut by_class_name = HashMap::with_capacity(self.entries.len());

        for (index, entry) in self.entries.iter().enumerate() {
            if by_type.insert(entry.type_id, index).is_some() {
                return Err(Error::DuplicateType {
                    type_id: entry.type_id,
                    type_name: entry.type_name,
                });
            }

            let same_qualified_name = by_qualified_name.insert(entry.qualified_name, index);
            let same_class_name = by_class_name.insert(entry.class_name.as_str(), index);

            if let Some(previous) = same_qualified_name.or(same_class_name) {
                return Err(Error::DuplicateClassName {
                    qualified_name: entry.qualified_name,
                    first: self.entries[previous].type_name,
                    second: entry.type_name,
                });
            }

            log::debug!(
                "Mapped {} to Java {} {}",
                entry.type_name,
                entry.kind,
                entry.qualified_name
            );
        }

        Ok(Registry {
            entries: self.entries,
            by_type,
            by_qualified_name,
            by_class_name,
        })
    }
}

/// Immutable index from native types to Java class names.
#[derive(Debug)]
pub struct Registry {
    entries: Vec<ClassEntry>,
    by_type: HashMap<TypeId, usize>,
    by_qualified_name: HashMap<&'static str, usize>,
    by_class_name: HashMap<&'static str, usize>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Makes this registry the process-wide one. Only the first call succeeds.
    pub fn install(self) -> Result<&'static Registry> {
        let class_count = self.len();

        REGISTRY.set(self).map_err(|_| Error::AlreadyInstalled)?;

        log::info!("Installed Java class registry with {} classes", class_count);

        REGISTRY.get().ok_or(Error::NotInstalled)
    }

    /// The process-wide registry, if one has been installed.
    pub fn global() -> Result<&'static Registry> {
        REGISTRY.get().ok_or(Error::NotInstalled)
    }

    pub fn get<T: 'static>(&self) -> Option<&ClassEntry> {
        self.by_type
            .get(&TypeId::of::<T>())
            .map(|&index| &self.entries[index])
    }

    /// Like [`get`](Registry::get), but treats a missing type as an error.
    pub fn lookup<T: 'static>(&self) -> Result<&ClassEntry> {
        self.get::<T>()
            .ok_or_else(|| Error::UnregisteredType(type_name::<T>()))
    }

    /// Finds a class by its dotted name.
    pub fn by_qualified_name(&self, qualified_name: &str) -> Option<&ClassEntry> {
        self.by_qualified_name
            .get(qualified_name)
            .map(|&index| &self.entries[index])
    }

    /// Finds a class by its slash delimited name.
    pub fn by_class_name(&self, class_name: &str) -> Option<&ClassEntry> {
        self.by_class_name
            .get(class_name)
            .map(|&index| &self.entries[index])
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.by_type.contains_key(&TypeId::of::<T>())
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ClassEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{ClassEntry, Registry};
    use crate::{ClassKind, Error, JavaClass, JniSignature, ZStr};

    struct Point;
    struct Session;
    struct OtherPoint;
    struct Missing;
    struct SlashedPoint;

    crate::declare_data_class!(Point, "net.example.Point");
    crate::declare_native_class!(Session, "net.example.Session");
    crate::declare_data_class!(OtherPoint, "net.example.Point");
    crate::declare_data_class!(Missing, "net.example.Missing");

    impl JniSignature for SlashedPoint {
        const SIGNATURE: ZStr = crate::zstr!("Lnet/example/Point;");
    }

    impl JavaClass for SlashedPoint {
        const KIND: ClassKind = ClassKind::Data;
        const QUALIFIED_NAME: &'static str = "net.example.SlashedPoint";
        const CLASS_NAME: ZStr = crate::zstr!("net/example/Point");
    }

    fn registry() -> Registry {
        Registry::builder()
            .class::<Point>()
            .class::<Session>()
            .build()
            .expect("Failed to build registry")
    }

    #[test]
    fn entry_captures_class_constants() {
        let entry = ClassEntry::of::<Session>();

        assert_eq!(entry.kind(), ClassKind::Native);
        assert_eq!(entry.qualified_name(), "net.example.Session");
        assert_eq!(entry.class_name(), "net/example/Session");
        assert_eq!(entry.signature(), "Lnet/example/Session;");
        assert!(entry.type_name().ends_with("Session"));
    }

    #[test]
    fn lookups() {
        let registry = registry();

        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
        assert_eq!(
            registry.get::<Point>().map(ClassEntry::class_name),
            Some(crate::zstr!("net/example/Point"))
        );
        assert_eq!(
            registry
                .by_qualified_name("net.example.Session")
                .map(ClassEntry::kind),
            Some(ClassKind::Native)
        );
        assert_eq!(
            registry
                .by_class_name("net/example/Point")
                .map(ClassEntry::qualified_name),
            Some("net.example.Point")
        );
        assert!(registry.by_class_name("net.example.Point").is_none());
        assert!(registry.contains::<Session>());
        assert!(!registry.contains::<Missing>());
    }

    #[test]
    fn iterates_in_registration_order() {
        let names: Vec<_> = registry().iter().map(ClassEntry::qualified_name).collect();

        assert_eq!(names, ["net.example.Point", "net.example.Session"]);
    }

    #[test]
    fn unregistered_type() {
        let registry = registry();

        assert!(registry.get::<Missing>().is_none());
        assert!(matches!(
            registry.lookup::<Missing>(),
            Err(Error::UnregisteredType(name)) if name.ends_with("Missing")
        ));
    }

    #[test]
    fn empty_registry() {
        let registry = Registry::builder().build().expect("Failed to build registry");

        assert!(registry.is_empty());
        assert!(registry.get::<Point>().is_none());
    }

    #[test]
    fn rejects_duplicate_type() {
        let result = Registry::builder()
            .class::<Point>()
            .class::<Session>()
            .class::<Point>()
            .build();

        assert!(matches!(
            result,
            Err(Error::DuplicateType { type_name, .. }) if type_name.ends_with("Point")
        ));
    }

    #[test]
    fn rejects_duplicate_class_name() {
        let result = Registry::builder()
            .class::<Point>()
            .class::<OtherPoint>()
            .build();

        match result {
            Err(Error::DuplicateClassName {
                qualified_name,
                first,
                second,
            }) => {
                assert_eq!(qualified_name, "net.example.Point");
                assert!(first.ends_with("Point"));
                assert!(second.ends_with("OtherPoint"));
            }
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn rejects_colliding_internal_name() {
        let result = Registry::builder()
            .class::<Point>()
            .class::<SlashedPoint>()
            .build();

        assert!(matches!(
            result,
            Err(Error::DuplicateClassName { second, .. }) if second.ends_with("SlashedPoint")
        ));
    }
}

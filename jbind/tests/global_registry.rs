use jbind::{Error, Registry};

struct Counter;

jbind::declare_native_class!(Counter, "net.example.Counter");

#[test]
fn installs_once() {
    assert!(matches!(Registry::global(), Err(Error::NotInstalled)));

    let registry = Registry::builder()
        .class::<Counter>()
        .build()
        .expect("Failed to build registry");
    let installed = registry.install().expect("Failed to install registry");

    assert!(installed.contains::<Counter>());

    let global = Registry::global().expect("Missing installed registry");

    assert!(std::ptr::eq(installed, global));
    assert_eq!(
        global.lookup::<Counter>().ok().map(|entry| entry.class_name()),
        Some(jbind::zstr!("net/example/Counter"))
    );

    let second = Registry::builder().build().expect("Failed to build registry");

    assert!(matches!(second.install(), Err(Error::AlreadyInstalled)));
    assert_eq!(Registry::global().map(Registry::len).ok(), Some(1));
}

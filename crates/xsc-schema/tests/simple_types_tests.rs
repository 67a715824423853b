use super::*;

#[test]
fn test_double_under_mscorlib() {
    assert_eq!(
        lookup("clr-namespace:System;assembly=mscorlib", "Double"),
        Some(PrimitiveKind::Double)
    );
}

#[test]
fn test_uri_lives_in_system_assembly() {
    assert_eq!(lookup("clr-namespace:System;assembly=System", "Uri"), Some(PrimitiveKind::Uri));
    assert_eq!(lookup("clr-namespace:System;assembly=mscorlib", "Uri"), None);
}

#[test]
fn test_every_primitive_is_present() {
    for kind in PrimitiveKind::ALL {
        let namespace = clr_namespace_uri(kind.namespace(), kind.assembly());
        assert_eq!(lookup(&namespace, kind.name()), Some(kind), "{kind:?}");
    }
    assert_eq!(entries().count(), PrimitiveKind::ALL.len());
}

#[test]
fn test_matching_is_exact() {
    assert_eq!(lookup("clr-namespace:System;assembly=mscorlib", "double"), None);
    assert_eq!(lookup("clr-namespace:system;assembly=mscorlib", "Double"), None);
    assert_eq!(lookup("clr-namespace:System; assembly=mscorlib", "Double"), None);
    assert_eq!(lookup("clr-namespace:System;assembly=mscorlib", "Object"), None);
}

#[test]
fn test_concurrent_first_use() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| lookup("clr-namespace:System;assembly=mscorlib", "Int32")))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some(PrimitiveKind::Int32));
    }
}

use super::*;

fn controls(universe: &TypeUniverse) -> (TypeHandle, TypeHandle, TypeHandle) {
    let object = universe.object_type();
    let control = universe.register_type(TypeDef::class("Host.Controls", "Control", "Host.Controls").with_base(object));
    let panel = universe.register_type(TypeDef::class("Host.Controls", "Panel", "Host.Controls").with_base(control));
    let stack = universe.register_type(TypeDef::class("Host.Controls", "StackPanel", "Host.Controls").with_base(panel));
    (control, panel, stack)
}

#[test]
fn test_new_universe_has_system_types() {
    let universe = TypeUniverse::new();

    let object = universe.object_type();
    assert!(object.is_valid());
    assert_eq!(universe.require_type(object).unwrap().full_name(), "System.Object");

    for kind in PrimitiveKind::ALL {
        let handle = universe.primitive(kind);
        assert!(handle.is_valid(), "{kind:?} should be registered");
        assert_eq!(universe.primitive_kind(handle), Some(kind));
        let def = universe.require_type(handle).unwrap();
        assert_eq!(def.name, kind.name());
        assert_eq!(def.assembly, kind.assembly());
    }
    assert_eq!(universe.len(), 1 + PrimitiveKind::ALL.len());
}

#[test]
fn test_find_by_namespace_and_assembly() {
    let universe = TypeUniverse::new();
    let (control, _, _) = controls(&universe);

    assert_eq!(universe.find("Host.Controls", "Control", None).unwrap(), Some(control));
    assert_eq!(
        universe
            .find("Host.Controls", "Control", Some("Host.Controls"))
            .unwrap(),
        Some(control)
    );
    assert_eq!(universe.find("Host.Controls", "Control", Some("Other")).unwrap(), None);
    assert_eq!(universe.find("Host.Controls", "control", None).unwrap(), None);
}

#[test]
fn test_find_reports_ambiguity_without_assembly() {
    let universe = TypeUniverse::new();
    universe.register_type(TypeDef::class("Shared", "Thing", "A"));
    let b = universe.register_type(TypeDef::class("Shared", "Thing", "B"));

    let err = universe.find("Shared", "Thing", None).unwrap_err();
    assert!(matches!(err, ProviderError::Ambiguous { .. }));
    assert_eq!(universe.find("Shared", "Thing", Some("B")).unwrap(), Some(b));
}

#[test]
fn test_define_property_attaches_to_owner() {
    let universe = TypeUniverse::new();
    let (control, _, _) = controls(&universe);
    let string = universe.primitive(PrimitiveKind::String);

    let prop = universe
        .define_property(PropertyDef::read_write(control, "Name", string))
        .unwrap();

    let def = universe.require_type(control).unwrap();
    assert_eq!(def.properties, vec![prop]);
    let prop_def = universe.require_property(prop).unwrap();
    assert_eq!(prop_def.name, "Name");
    assert!(prop_def.can_write());
}

#[test]
fn test_define_on_unknown_type_fails() {
    let universe = TypeUniverse::new();
    let string = universe.primitive(PrimitiveKind::String);
    let err = universe
        .define_property(PropertyDef::read_write(TypeHandle(999), "Name", string))
        .unwrap_err();
    assert!(matches!(err, ProviderError::UnknownType(TypeHandle(999))));
}

#[test]
fn test_base_chain_and_assignability() {
    let universe = TypeUniverse::new();
    let (control, panel, stack) = controls(&universe);
    let object = universe.object_type();

    assert_eq!(universe.base_chain(stack), vec![stack, panel, control, object]);
    assert!(universe.is_assignable_to(stack, control));
    assert!(!universe.is_assignable_to(control, stack));
}

#[test]
fn test_interface_implemented_through_base_and_inheritance() {
    let universe = TypeUniverse::new();
    let object = universe.object_type();
    let binding = universe.register_type(TypeDef::interface("Host.Data", "IBinding", "Host.Base"));
    let described = universe.register_type(TypeDef::interface("Host.Data", "IDescribedBinding", "Host.Base").with_interface(binding));
    let base = universe.register_type(
        TypeDef::class("Host.Data", "BindingBase", "Host.Base")
            .with_base(object)
            .with_interface(described),
    );
    let derived = universe.register_type(TypeDef::class("Host.Data", "Binding", "Host.Base").with_base(base));

    assert!(universe.is_assignable_to(derived, binding));
    assert!(universe.is_assignable_to(base, described));
    assert!(!universe.is_assignable_to(object, binding));
}

#[test]
fn test_instantiate_is_interned() {
    let universe = TypeUniverse::new();
    let list = universe.register_type(TypeDef::generic_class("System.Collections.Generic", "List", "mscorlib", 1));
    let int = universe.primitive(PrimitiveKind::Int32);
    let string = universe.primitive(PrimitiveKind::String);

    let ints = universe.instantiate(list, &[int]).unwrap();
    let again = universe.instantiate(list, &[int]).unwrap();
    let strings = universe.instantiate(list, &[string]).unwrap();

    assert_eq!(ints, again);
    assert_ne!(ints, strings);
    let def = universe.require_type(ints).unwrap();
    assert_eq!(def.generic_definition, Some(list));
    assert_eq!(def.generic_args.as_slice(), &[int]);
    assert_eq!(def.simple_name(), "List");
    assert!(!def.is_generic_definition());
}

#[test]
fn test_concurrent_instantiate_registers_one_type() {
    let universe = TypeUniverse::new();
    let list = universe.register_type(TypeDef::generic_class("System.Collections.Generic", "List", "mscorlib", 1));
    let double = universe.primitive(PrimitiveKind::Double);
    let before = universe.len();

    let handles: Vec<TypeHandle> = std::thread::scope(|scope| {
        let workers: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| universe.instantiate(list, &[double]).unwrap()))
            .collect();
        workers.into_iter().map(|w| w.join().unwrap()).collect()
    });

    assert!(handles.iter().all(|&h| h == handles[0]));
    assert_eq!(universe.len(), before + 1);
}

#[test]
fn test_instantiate_rejects_wrong_arity() {
    let universe = TypeUniverse::new();
    let dict = universe.register_type(TypeDef::generic_class("System.Collections.Generic", "Dictionary", "mscorlib", 2));
    let int = universe.primitive(PrimitiveKind::Int32);

    let err = universe.instantiate(dict, &[int]).unwrap_err();
    assert!(matches!(
        err,
        ProviderError::ArityMismatch {
            expected: 2,
            given: 1,
            ..
        }
    ));
}

#[test]
fn test_well_known_host_types_are_set_once() {
    let universe = TypeUniverse::new();
    let binding = universe.register_type(TypeDef::interface("Host.Data", "IBinding", "Host.Base"));
    let other = universe.register_type(TypeDef::interface("Host.Data", "IOther", "Host.Base"));

    assert_eq!(universe.binding_interface(), None);
    assert!(universe.set_binding_interface(binding));
    assert!(!universe.set_binding_interface(other));
    assert_eq!(universe.binding_interface(), Some(binding));
}

#[test]
fn test_member_attributes() {
    let universe = TypeUniverse::new();
    let (control, _, _) = controls(&universe);
    let double = universe.primitive(PrimitiveKind::Double);

    let width = universe
        .define_property(
            PropertyDef::read_write(control, "Width", double).with_attribute(CustomAttribute::depends_on("Height")),
        )
        .unwrap();
    let getter = universe
        .define_method(MethodDef::static_getter(control, "GetTag", control, double))
        .unwrap();

    assert_eq!(
        universe.member_attributes(width.into()).unwrap(),
        vec![CustomAttribute::depends_on("Height")]
    );
    assert!(universe.member_attributes(getter.into()).unwrap().is_empty());
    assert!(universe.member_attributes(MemberRef::Method(MethodHandle(404))).is_err());
}

//! Shared host model for schema context tests.
//!
//! A small control library spread over four runtime namespaces, all mapped
//! to `UI_NS`:
//!
//! - `Host.Controls`: `Control`, `Widget`, `ContentControl`, `Panel`, `StackPanel`
//! - `Host.Markup`: `MarkupExtension`, `StaticResourceExtension`,
//!   `Reference`, `ReferenceExtension`
//! - `Host.Data`: `IBinding`, `BindingBase`, `Binding`
//! - `Host.Collections`: `ItemList`1`

#![allow(dead_code)]

use crate::{SchemaContext, SchemaOptions};
use xsc_reflect::{
    ClrNamespace, CustomAttribute, InMemoryPropertyRegistry, MethodDef, MethodHandle, NamespaceTypeProvider,
    PrimitiveKind, PropertyDef, PropertyFlags, PropertyHandle, TypeDef, TypeFlags, TypeHandle, TypeUniverse,
};

pub const UI_NS: &str = "https://xsc.example/ui";
pub const ASSEMBLY: &str = "Host.Controls";

pub struct Types {
    pub control: TypeHandle,
    pub widget: TypeHandle,
    pub content_control: TypeHandle,
    pub panel: TypeHandle,
    pub stack_panel: TypeHandle,
    pub markup_extension: TypeHandle,
    pub static_resource: TypeHandle,
    pub reference: TypeHandle,
    pub reference_extension: TypeHandle,
    pub binding_interface: TypeHandle,
    pub binding_base: TypeHandle,
    pub binding: TypeHandle,
    pub item_list: TypeHandle,
}

pub struct Props {
    pub control_name: PropertyHandle,
    pub control_tag: PropertyHandle,
    pub widget_foo: PropertyHandle,
    pub widget_bar: PropertyHandle,
    pub widget_text: PropertyHandle,
    pub widget_source: PropertyHandle,
    pub content: PropertyHandle,
    pub children: PropertyHandle,
    pub binding_path: PropertyHandle,
    pub binding_mode: PropertyHandle,
    pub binding_description: PropertyHandle,
    pub binding_element_name: PropertyHandle,
    pub binding_default_mode: PropertyHandle,
}

pub struct Methods {
    pub get_is_visible: MethodHandle,
    pub set_is_visible: MethodHandle,
    pub get_dock: MethodHandle,
    pub set_dock: MethodHandle,
    pub get_z_index: MethodHandle,
    pub set_z_index: MethodHandle,
}

pub struct Host {
    pub universe: TypeUniverse,
    pub provider: NamespaceTypeProvider,
    pub registry: InMemoryPropertyRegistry,
    pub types: Types,
    pub props: Props,
    pub methods: Methods,
}

impl Host {
    pub fn new() -> Self {
        let universe = TypeUniverse::new();
        let object = universe.object_type();
        let string = universe.primitive(PrimitiveKind::String);
        let double = universe.primitive(PrimitiveKind::Double);
        let boolean = universe.primitive(PrimitiveKind::Boolean);
        let int = universe.primitive(PrimitiveKind::Int32);

        let class = |namespace: &str, name: &str, base: TypeHandle| {
            universe.register_type(TypeDef::class(namespace, name, ASSEMBLY).with_base(base))
        };

        // Host.Data
        let binding_interface = universe.register_type(TypeDef::interface("Host.Data", "IBinding", ASSEMBLY));
        let binding_base = universe.register_type(
            TypeDef::class("Host.Data", "BindingBase", ASSEMBLY)
                .with_base(object)
                .with_interface(binding_interface)
                .with_flags(TypeFlags::ABSTRACT),
        );
        let binding = class("Host.Data", "Binding", binding_base);
        universe.set_binding_interface(binding_interface);

        // Host.Markup
        let markup_extension = universe.register_type(
            TypeDef::class("Host.Markup", "MarkupExtension", ASSEMBLY)
                .with_base(object)
                .with_flags(TypeFlags::ABSTRACT),
        );
        universe.set_markup_extension_base(markup_extension);
        let static_resource = class("Host.Markup", "StaticResourceExtension", markup_extension);
        let reference = class("Host.Markup", "Reference", object);
        let reference_extension = class("Host.Markup", "ReferenceExtension", markup_extension);

        // Host.Controls
        let control = class("Host.Controls", "Control", object);
        let widget = class("Host.Controls", "Widget", control);
        let content_control = class("Host.Controls", "ContentControl", control);
        let panel = class("Host.Controls", "Panel", control);
        let stack_panel = class("Host.Controls", "StackPanel", panel);

        // Host.Collections
        let item_list = universe.register_type(TypeDef::generic_class("Host.Collections", "ItemList", ASSEMBLY, 1));

        let define = |def: PropertyDef| universe.define_property(def).expect("owner is registered");
        let props = Props {
            control_name: define(PropertyDef::read_write(control, "Name", string)),
            control_tag: define(PropertyDef::read_write(control, "Tag", object)),
            widget_foo: define(
                PropertyDef::read_write(widget, "Foo", string).with_attribute(CustomAttribute::depends_on("Bar")),
            ),
            widget_bar: define(PropertyDef::read_write(widget, "Bar", string)),
            widget_text: define(
                PropertyDef::read_write(widget, "Text", string).with_attribute(CustomAttribute::depends_on("Bar")),
            ),
            widget_source: define(
                PropertyDef::read_write(widget, "Source", object).with_attribute(CustomAttribute::AssignBinding),
            ),
            content: define(
                PropertyDef::read_write(content_control, "Content", object).with_attribute(CustomAttribute::Content),
            ),
            children: define(
                PropertyDef::read_only(panel, "Children", object).with_attribute(CustomAttribute::Content),
            ),
            binding_path: define(PropertyDef::read_write(binding_base, "Path", string)),
            binding_mode: define(PropertyDef::read_write(binding_base, "Mode", int)),
            binding_description: define(PropertyDef::read_only(binding_base, "Description", string)),
            binding_element_name: define(PropertyDef::read_write(binding, "ElementName", string)),
            binding_default_mode: define(PropertyDef {
                flags: PropertyFlags::CAN_READ | PropertyFlags::CAN_WRITE | PropertyFlags::STATIC,
                ..PropertyDef::read_write(binding, "DefaultMode", int)
            }),
        };
        define(PropertyDef::read_write(static_resource, "ResourceKey", object));

        let method = |def: MethodDef| universe.define_method(def).expect("owner is registered");
        let methods = Methods {
            get_is_visible: method(MethodDef::static_getter(panel, "GetIsVisible", control, boolean)),
            set_is_visible: method(MethodDef::static_setter(panel, "SetIsVisible", control, boolean)),
            get_dock: method(MethodDef::static_getter(panel, "GetDock", control, int)),
            set_dock: method(MethodDef::static_setter(panel, "SetDock", control, int)),
            get_z_index: method(MethodDef::static_getter(panel, "GetZIndex", control, int)),
            set_z_index: method(MethodDef::static_setter(panel, "SetZIndex", control, int)),
        };

        let mut registry = InMemoryPropertyRegistry::new();
        registry.register(control, "Name", string);
        registry.register(control, "Width", double);
        registry.register(widget, "Text", string);
        registry.register(widget, "Source", object);
        registry.register(content_control, "Content", object);
        registry.register_attached(panel, "IsVisible", boolean, true);
        registry.register_attached(panel, "ZIndex", int, false);
        registry.register_attached(panel, "ZIndex", double, false);

        let mut provider = NamespaceTypeProvider::new();
        provider.reference_assembly(ASSEMBLY);
        for namespace in ["Host.Controls", "Host.Markup", "Host.Data", "Host.Collections"] {
            provider.map_namespace(UI_NS, ClrNamespace::new(namespace, Some(ASSEMBLY)));
        }

        let types = Types {
            control,
            widget,
            content_control,
            panel,
            stack_panel,
            markup_extension,
            static_resource,
            reference,
            reference_extension,
            binding_interface,
            binding_base,
            binding,
            item_list,
        };

        Host {
            universe,
            provider,
            registry,
            types,
            props,
            methods,
        }
    }

    pub fn context(&self) -> SchemaContext<'_> {
        SchemaContext::new(&self.universe, &self.provider, &self.registry)
    }

    pub fn context_with(&self, options: SchemaOptions) -> SchemaContext<'_> {
        SchemaContext::with_options(&self.universe, &self.provider, &self.registry, options)
    }
}

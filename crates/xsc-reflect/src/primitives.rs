//! Primitive system types every universe carries.

/// The primitive system types known to the runtime.
///
/// Every `TypeUniverse` registers these on construction, under the assembly
/// the runtime ships them in (`mscorlib`, except `Uri` which lives in
/// `System`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Char,
    Decimal,
    Double,
    Int16,
    Int32,
    Int64,
    Single,
    String,
    TimeSpan,
    Uri,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 12] = [
        PrimitiveKind::Boolean,
        PrimitiveKind::Byte,
        PrimitiveKind::Char,
        PrimitiveKind::Decimal,
        PrimitiveKind::Double,
        PrimitiveKind::Int16,
        PrimitiveKind::Int32,
        PrimitiveKind::Int64,
        PrimitiveKind::Single,
        PrimitiveKind::String,
        PrimitiveKind::TimeSpan,
        PrimitiveKind::Uri,
    ];

    /// Runtime type name (without namespace).
    pub const fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "Boolean",
            PrimitiveKind::Byte => "Byte",
            PrimitiveKind::Char => "Char",
            PrimitiveKind::Decimal => "Decimal",
            PrimitiveKind::Double => "Double",
            PrimitiveKind::Int16 => "Int16",
            PrimitiveKind::Int32 => "Int32",
            PrimitiveKind::Int64 => "Int64",
            PrimitiveKind::Single => "Single",
            PrimitiveKind::String => "String",
            PrimitiveKind::TimeSpan => "TimeSpan",
            PrimitiveKind::Uri => "Uri",
        }
    }

    pub const fn namespace(self) -> &'static str {
        "System"
    }

    /// Assembly that declares the type.
    pub const fn assembly(self) -> &'static str {
        match self {
            PrimitiveKind::Uri => "System",
            _ => "mscorlib",
        }
    }

    pub const fn is_value_type(self) -> bool {
        !matches!(self, PrimitiveKind::String | PrimitiveKind::Uri)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

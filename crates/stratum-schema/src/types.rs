use serde::Serialize;

///
/// AttributeKind
///
/// Scalar taxonomy for entity attributes. `List` carries an opaque nested
/// payload; `Object` and `Enum` name their target type on the attribute.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum AttributeKind {
    Bool,
    Int,
    Float,
    Text,
    DateTime,
    Date,
    Time,
    List,
    Object,
    Enum,
}

impl AttributeKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Text => "text",
            Self::DateTime => "datetime",
            Self::Date => "date",
            Self::Time => "time",
            Self::List => "list",
            Self::Object => "object",
            Self::Enum => "enum",
        }
    }

    /// Kinds that render as canonical text in the serialized mapping.
    #[must_use]
    pub const fn is_temporal(self) -> bool {
        matches!(self, Self::DateTime | Self::Date | Self::Time)
    }

    /// Kinds that require a named target type on the attribute.
    #[must_use]
    pub const fn requires_type_name(self) -> bool {
        matches!(self, Self::Object | Self::Enum)
    }
}

//! The built-in contribution units. Each emits members/methods over the
//! `stratum-runtime` API; the emitted bodies match the runtime contract the
//! fixture entities in that crate exercise.

mod attribute_accessor;
mod collection_accessor;
mod constant;
mod constructor;
mod member;
mod primary_key;
mod reference_accessor;
mod tree_deserializer;
mod tree_serializer;

pub use attribute_accessor::AttributeAccessorPlugin;
pub use collection_accessor::CollectionAccessorPlugin;
pub use constant::ConstantPlugin;
pub use constructor::ConstructorPlugin;
pub use member::MemberPlugin;
pub use primary_key::PrimaryKeyPlugin;
pub use reference_accessor::ReferenceAccessorPlugin;
pub use tree_deserializer::TreeDeserializerPlugin;
pub use tree_serializer::TreeSerializerPlugin;

use convert_case::{Case, Casing};
use stratum_schema::{node::Attribute, types::AttributeKind};

// Value type of an attribute; the backing member wraps it in Option.
// Schema validation guarantees Object/Enum attributes carry a type name.
pub(crate) fn value_type(attribute: &Attribute) -> String {
    match attribute.kind {
        AttributeKind::Bool => "bool".to_string(),
        AttributeKind::Int => "i64".to_string(),
        AttributeKind::Float => "f64".to_string(),
        AttributeKind::Text => "String".to_string(),
        AttributeKind::DateTime => "Timestamp".to_string(),
        AttributeKind::Date => "Date".to_string(),
        AttributeKind::Time => "Time".to_string(),
        AttributeKind::List => "Tree".to_string(),
        AttributeKind::Object => format!(
            "Shared<{}>",
            attribute.type_name.as_deref().unwrap_or_default()
        ),
        AttributeKind::Enum => attribute.type_name.clone().unwrap_or_default(),
    }
}

pub(crate) fn member_type(attribute: &Attribute) -> String {
    format!("Option<{}>", value_type(attribute))
}

// Kinds whose getters return by copy; the rest clone.
pub(crate) const fn is_copy_kind(kind: AttributeKind) -> bool {
    matches!(
        kind,
        AttributeKind::Bool
            | AttributeKind::Int
            | AttributeKind::Float
            | AttributeKind::DateTime
            | AttributeKind::Date
            | AttributeKind::Time
            | AttributeKind::Enum
    )
}

pub(crate) fn column_constant(attribute: &Attribute) -> String {
    format!("COLUMN_{}", attribute.name.to_case(Case::Constant))
}

pub(crate) fn variant_name(value: &str) -> String {
    value.to_case(Case::UpperCamel)
}

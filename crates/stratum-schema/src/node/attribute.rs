use crate::{
    err, error::ErrorTree, node::ValidateNode, types::AttributeKind, validate::naming::validate_ident,
};
use serde::Serialize;

///
/// Attribute
///
/// Scalar, enum, or embedded-object field of an entity. `column` is the
/// storage column identity; `sequence` names the external auto-generation
/// strategy for primary-key attributes that use one.
///

#[derive(Clone, Debug, Serialize)]
pub struct Attribute {
    pub name: String,
    pub column: String,
    pub kind: AttributeKind,
    pub nullable: bool,
    pub primary_key: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<String>,
}

impl Attribute {
    #[must_use]
    pub fn new(name: impl Into<String>, column: impl Into<String>, kind: AttributeKind) -> Self {
        Self {
            name: name.into(),
            column: column.into(),
            kind,
            nullable: true,
            primary_key: false,
            length: None,
            type_name: None,
            enum_values: Vec::new(),
            sequence: None,
        }
    }

    #[must_use]
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    #[must_use]
    pub fn with_length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    /// Target type for `Object` and `Enum` kinds.
    #[must_use]
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    #[must_use]
    pub fn with_enum_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Name of the external sequence consulted for auto-generation.
    #[must_use]
    pub fn with_sequence(mut self, sequence: impl Into<String>) -> Self {
        self.sequence = Some(sequence.into());
        self
    }

    #[must_use]
    pub fn is_enum(&self) -> bool {
        self.kind == AttributeKind::Enum
    }

    #[must_use]
    pub fn is_object(&self) -> bool {
        self.kind == AttributeKind::Object
    }
}

impl ValidateNode for Attribute {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if let Err(e) = validate_ident(&self.name) {
            err!(errs, "attribute name: {e}");
        }
        if self.column.is_empty() {
            err!(errs, "attribute '{0}' has an empty column name", self.name);
        }
        if self.kind.requires_type_name() && self.type_name.is_none() {
            err!(
                errs,
                "attribute '{0}' of kind '{1}' must name a target type",
                self.name,
                self.kind.as_str()
            );
        }
        if self.is_enum() && self.enum_values.is_empty() {
            err!(errs, "enum attribute '{0}' declares no values", self.name);
        }
        if !self.is_enum() && !self.enum_values.is_empty() {
            err!(
                errs,
                "attribute '{0}' of kind '{1}' must not declare enum values",
                self.name,
                self.kind.as_str()
            );
        }
        if self.sequence.is_some() && !self.primary_key {
            err!(
                errs,
                "attribute '{0}' declares a sequence but is not a primary key",
                self.name
            );
        }

        errs.result()
    }
}

use std::fmt;

use serde::Serialize;

use crate::error::SchemaError;

use super::default_value::DefaultValue;
use super::identifier::Identifier;
use super::scalar_type::ScalarType;

/// How many values a field holds.
///
/// Optional lists are not representable in the target language, so there is
/// no variant for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldArity {
    Required,
    Optional,
    List,
}

impl FieldArity {
    /// Converts the `is_required` / `is_list` flag pair into an arity.
    ///
    /// Fails with `OptionalListNotSupported` when `is_required` is false and
    /// `is_list` is true.
    pub fn from_flags(is_required: bool, is_list: bool) -> Result<Self, SchemaError> {
        match (is_required, is_list) {
            (false, true) => Err(SchemaError::OptionalListNotSupported),
            (true, true) => Ok(Self::List),
            (true, false) => Ok(Self::Required),
            (false, false) => Ok(Self::Optional),
        }
    }

    pub fn is_list(self) -> bool {
        self == Self::List
    }

    pub fn is_required(self) -> bool {
        self != Self::Optional
    }
}

/// A model field: the shared base record plus a kind-specific payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    name: Identifier,
    arity: FieldArity,
    #[serde(skip_serializing_if = "Option::is_none")]
    documentation: Option<String>,
    kind: FieldKind,
}

impl Field {
    pub(crate) fn new(
        name: Identifier,
        arity: FieldArity,
        documentation: Option<String>,
        kind: FieldKind,
    ) -> Self {
        Self {
            name,
            arity,
            documentation,
            kind,
        }
    }

    pub fn name(&self) -> &Identifier {
        &self.name
    }

    pub fn arity(&self) -> FieldArity {
        self.arity
    }

    pub fn is_list(&self) -> bool {
        self.arity.is_list()
    }

    pub fn is_required(&self) -> bool {
        self.arity.is_required()
    }

    pub fn documentation(&self) -> Option<&str> {
        self.documentation.as_deref()
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Returns the scalar payload if this is a scalar field.
    pub fn as_scalar(&self) -> Option<&ScalarField> {
        match &self.kind {
            FieldKind::Scalar(s) => Some(s),
            FieldKind::Object(_) => None,
        }
    }

    /// Returns the object payload if this is an object (relation) field.
    pub fn as_object(&self) -> Option<&ObjectField> {
        match &self.kind {
            FieldKind::Object(o) => Some(o),
            FieldKind::Scalar(_) => None,
        }
    }

    /// Returns the declared type name, e.g. `Int` or `User`.
    pub fn type_name(&self) -> &str {
        match &self.kind {
            FieldKind::Scalar(s) => s.r#type.as_str(),
            FieldKind::Object(o) => &o.r#type,
        }
    }
}

/// Discriminant of a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    Scalar(ScalarField),
    Object(ObjectField),
}

/// Payload of a field whose type is one of the primitive scalar types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScalarField {
    r#type: ScalarType,
    is_id: bool,
    is_unique: bool,
    is_updated_at: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<DefaultValue>,
}

impl ScalarField {
    pub(crate) fn new(
        r#type: ScalarType,
        is_id: bool,
        is_unique: bool,
        is_updated_at: bool,
        default: Option<DefaultValue>,
    ) -> Self {
        Self {
            r#type,
            is_id,
            is_unique,
            is_updated_at,
            default,
        }
    }

    pub fn r#type(&self) -> ScalarType {
        self.r#type
    }

    pub fn is_id(&self) -> bool {
        self.is_id
    }

    pub fn is_unique(&self) -> bool {
        self.is_unique
    }

    pub fn is_updated_at(&self) -> bool {
        self.is_updated_at
    }

    pub fn default(&self) -> Option<&DefaultValue> {
        self.default.as_ref()
    }
}

/// Payload of a field referencing another model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectField {
    r#type: String,
    relation: Relation,
}

impl ObjectField {
    pub(crate) fn new(r#type: String, relation: Relation) -> Self {
        Self { r#type, relation }
    }

    /// Name of the referenced model. Not checked against the schema.
    pub fn r#type(&self) -> &str {
        &self.r#type
    }

    pub fn relation(&self) -> &Relation {
        &self.relation
    }
}

/// Relation metadata of an object field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Relation {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    references: Vec<String>,
    on_delete: OnDelete,
}

impl Relation {
    pub(crate) fn new(
        name: Option<String>,
        fields: Vec<String>,
        references: Vec<String>,
        on_delete: OnDelete,
    ) -> Self {
        Self {
            name,
            fields,
            references,
            on_delete,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Local scalar fields holding the foreign key.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Fields of the referenced model.
    pub fn references(&self) -> &[String] {
        &self.references
    }

    pub fn on_delete(&self) -> OnDelete {
        self.on_delete
    }

    /// True when the relation carries a non-empty name, local fields or
    /// references, i.e. when an `@relation` attribute has something to say.
    pub fn is_explicit(&self) -> bool {
        self.name.as_deref().is_some_and(|n| !n.is_empty())
            || !self.fields.is_empty()
            || !self.references.is_empty()
    }
}

/// Delete behavior of a relation. Only one marker is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum OnDelete {
    #[default]
    #[serde(rename = "NONE")]
    None,
}

impl fmt::Display for OnDelete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "NONE"),
        }
    }
}

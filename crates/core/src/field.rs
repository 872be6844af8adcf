//! Editable fields and edit rejections
//!
//! Every analog setter names the field it touches and the value it proposes.
//! Validators look at that proposal and either let it through or answer with
//! a [`Rejection`].

use crate::contract::{IdAlias, Timestamp};
use crate::payload::RefexValue;
use crate::types::{ComponentKind, Nid, Status};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Field of a component that an analog can change
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Field {
    // Stamp
    Status,
    Time,
    Author,
    Module,
    Path,
    Alias,

    // Concept
    Defined,

    // Description and media
    Concept,
    Text,
    TypeNid,
    Language,
    CaseSignificant,
    Format,
    TextDescription,
    Data,

    // Relationship
    Source,
    Destination,
    Characteristic,
    Refinability,
    Group,

    // Refex
    Refset,
    ReferencedComponent,
    RefexValue,
    C1,
    C2,
    C3,
    IntValue,
    LongValue,
    FloatValue,
    StringValue,
}

impl Field {
    /// Snake-case field name
    pub const fn name(&self) -> &'static str {
        match self {
            Field::Status => "status",
            Field::Time => "time",
            Field::Author => "author",
            Field::Module => "module",
            Field::Path => "path",
            Field::Alias => "alias",
            Field::Defined => "defined",
            Field::Concept => "concept",
            Field::Text => "text",
            Field::TypeNid => "type_nid",
            Field::Language => "language",
            Field::CaseSignificant => "case_significant",
            Field::Format => "format",
            Field::TextDescription => "text_description",
            Field::Data => "data",
            Field::Source => "source",
            Field::Destination => "destination",
            Field::Characteristic => "characteristic",
            Field::Refinability => "refinability",
            Field::Group => "group",
            Field::Refset => "refset",
            Field::ReferencedComponent => "referenced_component",
            Field::RefexValue => "refex_value",
            Field::C1 => "c1",
            Field::C2 => "c2",
            Field::C3 => "c3",
            Field::IntValue => "int_value",
            Field::LongValue => "long_value",
            Field::FloatValue => "float_value",
            Field::StringValue => "string_value",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Proposed value for a field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// Status value
    Status(Status),
    /// Time value
    Time(Timestamp),
    /// Identity reference
    Nid(Nid),
    /// Flag
    Bool(bool),
    /// 32-bit integer
    Int(i32),
    /// 64-bit integer
    Long(i64),
    /// 32-bit float
    Float(f32),
    /// Text
    Text(&'a str),
    /// Binary data
    Bytes(&'a [u8]),
    /// Identifier alias
    Alias(&'a IdAlias),
    /// Whole refex value
    Refex(&'a RefexValue),
}

/// A single proposed field change, as seen by validators
#[derive(Debug, Clone, Copy)]
pub struct FieldEdit<'a> {
    /// Component being edited
    pub nid: Nid,
    /// Kind of the component
    pub kind: ComponentKind,
    /// Field being changed
    pub field: Field,
    /// Proposed value
    pub value: FieldValue<'a>,
}

impl<'a> FieldEdit<'a> {
    /// Build a rejection of this edit
    pub fn reject(&self, reason: impl Into<String>) -> Rejection {
        Rejection::field(self.nid, self.field, reason)
    }
}

/// Structured refusal of an edit or commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    /// Component the edit targeted
    pub nid: Nid,
    /// Offending field, if the refusal is about one field
    pub field: Option<Field>,
    /// Human readable reason
    pub reason: String,
}

impl Rejection {
    /// Rejection of a specific field
    pub fn field(nid: Nid, field: Field, reason: impl Into<String>) -> Self {
        Rejection {
            nid,
            field: Some(field),
            reason: reason.into(),
        }
    }

    /// Rejection of the edit as a whole
    pub fn whole(nid: Nid, reason: impl Into<String>) -> Self {
        Rejection {
            nid,
            field: None,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.field {
            Some(field) => write!(f, "{} field '{}': {}", self.nid, field, self.reason),
            None => write!(f, "{}: {}", self.nid, self.reason),
        }
    }
}

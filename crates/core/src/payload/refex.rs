//! Refex (reference set extension) payloads
//!
//! A refex member annotates another component with a typed value. The value
//! is a tagged union over a closed set of slot combinations, drawn from five
//! primitive slot types: identity reference, 32-bit integer, 64-bit integer,
//! 32-bit float and text.
//!
//! ## Tag discipline
//!
//! Accessors check the tag before touching slots. Reading a value through an
//! accessor its tag does not support is a programming error and fails with
//! `Error::InvalidSlotAccess`:
//!
//! ```
//! use termstore_core::{Error, Nid, RefexValue};
//!
//! let value = RefexValue::IdentifierAndFloat { c1: Nid::new(7), value: 0.5 };
//! assert!(value.as_identifier_and_float().is_ok());
//! assert!(matches!(
//!     value.as_identifier_and_long(),
//!     Err(Error::InvalidSlotAccess { .. })
//! ));
//! ```

use super::{require_assigned, Payload, PayloadRef};
use crate::error::{Error, Result};
use crate::field::{Field, Rejection};
use crate::types::{ComponentKind, Nid};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Primitive slot of a refex value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// First identity reference
    C1,
    /// Second identity reference
    C2,
    /// Third identity reference
    C3,
    /// 32-bit integer
    Int,
    /// 64-bit integer
    Long,
    /// 32-bit float
    Float,
    /// Text
    Text,
}

impl Slot {
    /// Analog field that writes this slot
    pub const fn field(&self) -> Field {
        match self {
            Slot::C1 => Field::C1,
            Slot::C2 => Field::C2,
            Slot::C3 => Field::C3,
            Slot::Int => Field::IntValue,
            Slot::Long => Field::LongValue,
            Slot::Float => Field::FloatValue,
            Slot::Text => Field::StringValue,
        }
    }
}

/// Tag of a refex value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RefexKind {
    /// Membership only, no slots
    Member,
    /// One identity reference
    Identifier,
    /// One 32-bit integer
    Int,
    /// One 64-bit integer
    Long,
    /// One 32-bit float
    Float,
    /// One text
    Text,
    /// Identity reference and 32-bit integer
    IdentifierAndInt,
    /// Identity reference and 64-bit integer
    IdentifierAndLong,
    /// Identity reference and 32-bit float
    IdentifierAndFloat,
    /// Identity reference and text
    IdentifierAndText,
    /// Two identity references
    IdentifierPair,
    /// Two identity references and text
    IdentifierPairAndText,
    /// Three identity references
    IdentifierTriple,
}

impl RefexKind {
    /// Slots a value of this kind carries, in order
    pub const fn slots(&self) -> &'static [Slot] {
        match self {
            RefexKind::Member => &[],
            RefexKind::Identifier => &[Slot::C1],
            RefexKind::Int => &[Slot::Int],
            RefexKind::Long => &[Slot::Long],
            RefexKind::Float => &[Slot::Float],
            RefexKind::Text => &[Slot::Text],
            RefexKind::IdentifierAndInt => &[Slot::C1, Slot::Int],
            RefexKind::IdentifierAndLong => &[Slot::C1, Slot::Long],
            RefexKind::IdentifierAndFloat => &[Slot::C1, Slot::Float],
            RefexKind::IdentifierAndText => &[Slot::C1, Slot::Text],
            RefexKind::IdentifierPair => &[Slot::C1, Slot::C2],
            RefexKind::IdentifierPairAndText => &[Slot::C1, Slot::C2, Slot::Text],
            RefexKind::IdentifierTriple => &[Slot::C1, Slot::C2, Slot::C3],
        }
    }

    /// Whether this kind carries `slot`
    pub fn has_slot(&self, slot: Slot) -> bool {
        self.slots().contains(&slot)
    }
}

impl fmt::Display for RefexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// What a caller tried to access on a refex value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefexAccess {
    /// Whole-value read as a specific kind
    Kind(RefexKind),
    /// Single slot read or write
    Slot(Slot),
}

impl fmt::Display for RefexAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefexAccess::Kind(kind) => write!(f, "{}", kind),
            RefexAccess::Slot(slot) => write!(f, "slot {:?}", slot),
        }
    }
}

/// Typed refex value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum RefexValue {
    Member,
    Identifier { c1: Nid },
    Int(i32),
    Long(i64),
    Float(f32),
    Text(String),
    IdentifierAndInt { c1: Nid, value: i32 },
    IdentifierAndLong { c1: Nid, value: i64 },
    IdentifierAndFloat { c1: Nid, value: f32 },
    IdentifierAndText { c1: Nid, text: String },
    IdentifierPair { c1: Nid, c2: Nid },
    IdentifierPairAndText { c1: Nid, c2: Nid, text: String },
    IdentifierTriple { c1: Nid, c2: Nid, c3: Nid },
}

impl RefexValue {
    /// Zero-filled value of `kind`
    pub fn empty(kind: RefexKind) -> Self {
        let nil = Nid::UNASSIGNED;
        match kind {
            RefexKind::Member => RefexValue::Member,
            RefexKind::Identifier => RefexValue::Identifier { c1: nil },
            RefexKind::Int => RefexValue::Int(0),
            RefexKind::Long => RefexValue::Long(0),
            RefexKind::Float => RefexValue::Float(0.0),
            RefexKind::Text => RefexValue::Text(String::new()),
            RefexKind::IdentifierAndInt => RefexValue::IdentifierAndInt { c1: nil, value: 0 },
            RefexKind::IdentifierAndLong => RefexValue::IdentifierAndLong { c1: nil, value: 0 },
            RefexKind::IdentifierAndFloat => RefexValue::IdentifierAndFloat { c1: nil, value: 0.0 },
            RefexKind::IdentifierAndText => RefexValue::IdentifierAndText {
                c1: nil,
                text: String::new(),
            },
            RefexKind::IdentifierPair => RefexValue::IdentifierPair { c1: nil, c2: nil },
            RefexKind::IdentifierPairAndText => RefexValue::IdentifierPairAndText {
                c1: nil,
                c2: nil,
                text: String::new(),
            },
            RefexKind::IdentifierTriple => RefexValue::IdentifierTriple {
                c1: nil,
                c2: nil,
                c3: nil,
            },
        }
    }

    /// Tag of this value
    pub fn kind(&self) -> RefexKind {
        match self {
            RefexValue::Member => RefexKind::Member,
            RefexValue::Identifier { .. } => RefexKind::Identifier,
            RefexValue::Int(_) => RefexKind::Int,
            RefexValue::Long(_) => RefexKind::Long,
            RefexValue::Float(_) => RefexKind::Float,
            RefexValue::Text(_) => RefexKind::Text,
            RefexValue::IdentifierAndInt { .. } => RefexKind::IdentifierAndInt,
            RefexValue::IdentifierAndLong { .. } => RefexKind::IdentifierAndLong,
            RefexValue::IdentifierAndFloat { .. } => RefexKind::IdentifierAndFloat,
            RefexValue::IdentifierAndText { .. } => RefexKind::IdentifierAndText,
            RefexValue::IdentifierPair { .. } => RefexKind::IdentifierPair,
            RefexValue::IdentifierPairAndText { .. } => RefexKind::IdentifierPairAndText,
            RefexValue::IdentifierTriple { .. } => RefexKind::IdentifierTriple,
        }
    }

    fn wrong_kind(&self, requested: RefexKind) -> Error {
        Error::InvalidSlotAccess {
            requested: RefexAccess::Kind(requested),
            actual: self.kind(),
        }
    }

    fn wrong_slot(&self, slot: Slot) -> Error {
        Error::InvalidSlotAccess {
            requested: RefexAccess::Slot(slot),
            actual: self.kind(),
        }
    }

    // =========================================================================
    // Whole-value readers
    // =========================================================================

    /// Read as `Identifier`
    pub fn as_identifier(&self) -> Result<Nid> {
        match self {
            RefexValue::Identifier { c1 } => Ok(*c1),
            _ => Err(self.wrong_kind(RefexKind::Identifier)),
        }
    }

    /// Read as `Int`
    pub fn as_int(&self) -> Result<i32> {
        match self {
            RefexValue::Int(v) => Ok(*v),
            _ => Err(self.wrong_kind(RefexKind::Int)),
        }
    }

    /// Read as `Long`
    pub fn as_long(&self) -> Result<i64> {
        match self {
            RefexValue::Long(v) => Ok(*v),
            _ => Err(self.wrong_kind(RefexKind::Long)),
        }
    }

    /// Read as `Float`
    pub fn as_float(&self) -> Result<f32> {
        match self {
            RefexValue::Float(v) => Ok(*v),
            _ => Err(self.wrong_kind(RefexKind::Float)),
        }
    }

    /// Read as `Text`
    pub fn as_text(&self) -> Result<&str> {
        match self {
            RefexValue::Text(v) => Ok(v.as_str()),
            _ => Err(self.wrong_kind(RefexKind::Text)),
        }
    }

    /// Read as `IdentifierAndInt`
    pub fn as_identifier_and_int(&self) -> Result<(Nid, i32)> {
        match self {
            RefexValue::IdentifierAndInt { c1, value } => Ok((*c1, *value)),
            _ => Err(self.wrong_kind(RefexKind::IdentifierAndInt)),
        }
    }

    /// Read as `IdentifierAndLong`
    pub fn as_identifier_and_long(&self) -> Result<(Nid, i64)> {
        match self {
            RefexValue::IdentifierAndLong { c1, value } => Ok((*c1, *value)),
            _ => Err(self.wrong_kind(RefexKind::IdentifierAndLong)),
        }
    }

    /// Read as `IdentifierAndFloat`
    pub fn as_identifier_and_float(&self) -> Result<(Nid, f32)> {
        match self {
            RefexValue::IdentifierAndFloat { c1, value } => Ok((*c1, *value)),
            _ => Err(self.wrong_kind(RefexKind::IdentifierAndFloat)),
        }
    }

    /// Read as `IdentifierAndText`
    pub fn as_identifier_and_text(&self) -> Result<(Nid, &str)> {
        match self {
            RefexValue::IdentifierAndText { c1, text } => Ok((*c1, text.as_str())),
            _ => Err(self.wrong_kind(RefexKind::IdentifierAndText)),
        }
    }

    /// Read as `IdentifierPair`
    pub fn as_identifier_pair(&self) -> Result<(Nid, Nid)> {
        match self {
            RefexValue::IdentifierPair { c1, c2 } => Ok((*c1, *c2)),
            _ => Err(self.wrong_kind(RefexKind::IdentifierPair)),
        }
    }

    /// Read as `IdentifierPairAndText`
    pub fn as_identifier_pair_and_text(&self) -> Result<(Nid, Nid, &str)> {
        match self {
            RefexValue::IdentifierPairAndText { c1, c2, text } => Ok((*c1, *c2, text.as_str())),
            _ => Err(self.wrong_kind(RefexKind::IdentifierPairAndText)),
        }
    }

    /// Read as `IdentifierTriple`
    pub fn as_identifier_triple(&self) -> Result<(Nid, Nid, Nid)> {
        match self {
            RefexValue::IdentifierTriple { c1, c2, c3 } => Ok((*c1, *c2, *c3)),
            _ => Err(self.wrong_kind(RefexKind::IdentifierTriple)),
        }
    }

    // =========================================================================
    // Slot readers (any kind carrying the slot)
    // =========================================================================

    /// First identity reference
    pub fn c1(&self) -> Result<Nid> {
        match self {
            RefexValue::Identifier { c1 }
            | RefexValue::IdentifierAndInt { c1, .. }
            | RefexValue::IdentifierAndLong { c1, .. }
            | RefexValue::IdentifierAndFloat { c1, .. }
            | RefexValue::IdentifierAndText { c1, .. }
            | RefexValue::IdentifierPair { c1, .. }
            | RefexValue::IdentifierPairAndText { c1, .. }
            | RefexValue::IdentifierTriple { c1, .. } => Ok(*c1),
            _ => Err(self.wrong_slot(Slot::C1)),
        }
    }

    /// Second identity reference
    pub fn c2(&self) -> Result<Nid> {
        match self {
            RefexValue::IdentifierPair { c2, .. }
            | RefexValue::IdentifierPairAndText { c2, .. }
            | RefexValue::IdentifierTriple { c2, .. } => Ok(*c2),
            _ => Err(self.wrong_slot(Slot::C2)),
        }
    }

    /// Third identity reference
    pub fn c3(&self) -> Result<Nid> {
        match self {
            RefexValue::IdentifierTriple { c3, .. } => Ok(*c3),
            _ => Err(self.wrong_slot(Slot::C3)),
        }
    }

    /// Text slot
    pub fn text(&self) -> Result<&str> {
        match self {
            RefexValue::Text(text)
            | RefexValue::IdentifierAndText { text, .. }
            | RefexValue::IdentifierPairAndText { text, .. } => Ok(text.as_str()),
            _ => Err(self.wrong_slot(Slot::Text)),
        }
    }

    // =========================================================================
    // Slot writers
    // =========================================================================

    /// Overwrite the first identity reference
    pub fn set_c1(&mut self, nid: Nid) -> Result<()> {
        match self {
            RefexValue::Identifier { c1 }
            | RefexValue::IdentifierAndInt { c1, .. }
            | RefexValue::IdentifierAndLong { c1, .. }
            | RefexValue::IdentifierAndFloat { c1, .. }
            | RefexValue::IdentifierAndText { c1, .. }
            | RefexValue::IdentifierPair { c1, .. }
            | RefexValue::IdentifierPairAndText { c1, .. }
            | RefexValue::IdentifierTriple { c1, .. } => {
                *c1 = nid;
                Ok(())
            }
            _ => Err(self.wrong_slot(Slot::C1)),
        }
    }

    /// Overwrite the second identity reference
    pub fn set_c2(&mut self, nid: Nid) -> Result<()> {
        match self {
            RefexValue::IdentifierPair { c2, .. }
            | RefexValue::IdentifierPairAndText { c2, .. }
            | RefexValue::IdentifierTriple { c2, .. } => {
                *c2 = nid;
                Ok(())
            }
            _ => Err(self.wrong_slot(Slot::C2)),
        }
    }

    /// Overwrite the third identity reference
    pub fn set_c3(&mut self, nid: Nid) -> Result<()> {
        match self {
            RefexValue::IdentifierTriple { c3, .. } => {
                *c3 = nid;
                Ok(())
            }
            _ => Err(self.wrong_slot(Slot::C3)),
        }
    }

    /// Overwrite the 32-bit integer slot
    pub fn set_int(&mut self, v: i32) -> Result<()> {
        match self {
            RefexValue::Int(value) | RefexValue::IdentifierAndInt { value, .. } => {
                *value = v;
                Ok(())
            }
            _ => Err(self.wrong_slot(Slot::Int)),
        }
    }

    /// Overwrite the 64-bit integer slot
    pub fn set_long(&mut self, v: i64) -> Result<()> {
        match self {
            RefexValue::Long(value) | RefexValue::IdentifierAndLong { value, .. } => {
                *value = v;
                Ok(())
            }
            _ => Err(self.wrong_slot(Slot::Long)),
        }
    }

    /// Overwrite the float slot
    pub fn set_float(&mut self, v: f32) -> Result<()> {
        match self {
            RefexValue::Float(value) | RefexValue::IdentifierAndFloat { value, .. } => {
                *value = v;
                Ok(())
            }
            _ => Err(self.wrong_slot(Slot::Float)),
        }
    }

    /// Overwrite the text slot
    pub fn set_text(&mut self, v: impl Into<String>) -> Result<()> {
        match self {
            RefexValue::Text(text)
            | RefexValue::IdentifierAndText { text, .. }
            | RefexValue::IdentifierPairAndText { text, .. } => {
                *text = v.into();
                Ok(())
            }
            _ => Err(self.wrong_slot(Slot::Text)),
        }
    }

    /// Identity references held in slots, in slot order
    pub fn identifiers(&self) -> Vec<Nid> {
        [self.c1(), self.c2(), self.c3()]
            .into_iter()
            .filter_map(|slot| slot.ok())
            .collect()
    }
}

impl Default for RefexValue {
    fn default() -> Self {
        RefexValue::Member
    }
}

/// Refex member attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RefexPayload {
    /// Reference set (extension type) the member belongs to
    pub refset: Nid,
    /// Component the member annotates
    pub referenced_component: Nid,
    /// Typed value
    pub value: RefexValue,
}

impl RefexPayload {
    /// Payload for a new member of `refset` annotating `referenced_component`
    pub fn new(refset: Nid, referenced_component: Nid, value: RefexValue) -> Self {
        RefexPayload {
            refset,
            referenced_component,
            value,
        }
    }
}

impl Payload for RefexPayload {
    const KIND: ComponentKind = ComponentKind::Refex;

    fn check(&self, nid: Nid) -> std::result::Result<(), Rejection> {
        require_assigned(nid, Field::Refset, self.refset)?;
        require_assigned(nid, Field::ReferencedComponent, self.referenced_component)?;
        if self.referenced_component == nid {
            return Err(Rejection::field(
                nid,
                Field::ReferencedComponent,
                "a member cannot annotate itself",
            ));
        }
        Ok(())
    }

    fn anchor(&self) -> Option<Nid> {
        Some(self.referenced_component).filter(Nid::is_assigned)
    }

    fn payload_ref(&self) -> PayloadRef<'_> {
        PayloadRef::Refex(self)
    }
}

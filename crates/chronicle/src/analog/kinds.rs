//! Kind-specific analog accessors

use super::Analog;
use termstore_core::{
    ConceptPayload, DescriptionPayload, Error, Field, FieldValue, MediaPayload, Nid, RefexAccess,
    RefexPayload, RefexValue, RelationshipPayload, Result, Slot,
};

impl Analog<ConceptPayload> {
    /// Whether the concept is fully defined
    pub fn defined(&self) -> bool {
        self.payload.defined
    }

    /// Set whether the concept is fully defined
    pub fn set_defined(&mut self, defined: bool) -> Result<()> {
        self.propose(Field::Defined, FieldValue::Bool(defined))?;
        self.payload.defined = defined;
        Ok(())
    }
}

impl Analog<DescriptionPayload> {
    /// Described concept
    pub fn concept(&self) -> Nid {
        self.payload.concept
    }

    /// Description text
    pub fn text(&self) -> &str {
        &self.payload.text
    }

    /// Description type
    pub fn type_nid(&self) -> Nid {
        self.payload.type_nid
    }

    /// Language code
    pub fn language(&self) -> &str {
        &self.payload.language
    }

    /// Whether case is significant
    pub fn case_significant(&self) -> bool {
        self.payload.case_significant
    }

    /// Set the described concept
    pub fn set_concept(&mut self, concept: Nid) -> Result<()> {
        self.propose(Field::Concept, FieldValue::Nid(concept))?;
        self.payload.concept = concept;
        Ok(())
    }

    /// Set the description text
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<()> {
        let text = text.into();
        self.propose(Field::Text, FieldValue::Text(&text))?;
        self.payload.text = text;
        Ok(())
    }

    /// Set the description type
    pub fn set_type_nid(&mut self, type_nid: Nid) -> Result<()> {
        self.propose(Field::TypeNid, FieldValue::Nid(type_nid))?;
        self.payload.type_nid = type_nid;
        Ok(())
    }

    /// Set the language code
    pub fn set_language(&mut self, language: impl Into<String>) -> Result<()> {
        let language = language.into();
        self.propose(Field::Language, FieldValue::Text(&language))?;
        self.payload.language = language;
        Ok(())
    }

    /// Set case significance
    pub fn set_case_significant(&mut self, significant: bool) -> Result<()> {
        self.propose(Field::CaseSignificant, FieldValue::Bool(significant))?;
        self.payload.case_significant = significant;
        Ok(())
    }
}

impl Analog<RelationshipPayload> {
    /// Source concept
    pub fn source(&self) -> Nid {
        self.payload.source
    }

    /// Destination concept
    pub fn destination(&self) -> Nid {
        self.payload.destination
    }

    /// Relationship type
    pub fn type_nid(&self) -> Nid {
        self.payload.type_nid
    }

    /// Characteristic
    pub fn characteristic(&self) -> Nid {
        self.payload.characteristic
    }

    /// Refinability
    pub fn refinability(&self) -> Nid {
        self.payload.refinability
    }

    /// Role group
    pub fn group(&self) -> i32 {
        self.payload.group
    }

    /// Set the source concept
    pub fn set_source(&mut self, source: Nid) -> Result<()> {
        self.propose(Field::Source, FieldValue::Nid(source))?;
        self.payload.source = source;
        Ok(())
    }

    /// Set the destination concept
    pub fn set_destination(&mut self, destination: Nid) -> Result<()> {
        self.propose(Field::Destination, FieldValue::Nid(destination))?;
        self.payload.destination = destination;
        Ok(())
    }

    /// Set the relationship type
    pub fn set_type_nid(&mut self, type_nid: Nid) -> Result<()> {
        self.propose(Field::TypeNid, FieldValue::Nid(type_nid))?;
        self.payload.type_nid = type_nid;
        Ok(())
    }

    /// Set the characteristic
    pub fn set_characteristic(&mut self, characteristic: Nid) -> Result<()> {
        self.propose(Field::Characteristic, FieldValue::Nid(characteristic))?;
        self.payload.characteristic = characteristic;
        Ok(())
    }

    /// Set the refinability
    pub fn set_refinability(&mut self, refinability: Nid) -> Result<()> {
        self.propose(Field::Refinability, FieldValue::Nid(refinability))?;
        self.payload.refinability = refinability;
        Ok(())
    }

    /// Set the role group
    ///
    /// Negative groups are accepted here and rejected at commit.
    pub fn set_group(&mut self, group: i32) -> Result<()> {
        self.propose(Field::Group, FieldValue::Int(group))?;
        self.payload.group = group;
        Ok(())
    }
}

impl Analog<MediaPayload> {
    /// Illustrated concept
    pub fn concept(&self) -> Nid {
        self.payload.concept
    }

    /// Media type
    pub fn type_nid(&self) -> Nid {
        self.payload.type_nid
    }

    /// Data format
    pub fn format(&self) -> &str {
        &self.payload.format
    }

    /// Textual description
    pub fn text_description(&self) -> &str {
        &self.payload.text_description
    }

    /// Media bytes
    pub fn data(&self) -> &[u8] {
        &self.payload.data
    }

    /// Set the illustrated concept
    pub fn set_concept(&mut self, concept: Nid) -> Result<()> {
        self.propose(Field::Concept, FieldValue::Nid(concept))?;
        self.payload.concept = concept;
        Ok(())
    }

    /// Set the media type
    pub fn set_type_nid(&mut self, type_nid: Nid) -> Result<()> {
        self.propose(Field::TypeNid, FieldValue::Nid(type_nid))?;
        self.payload.type_nid = type_nid;
        Ok(())
    }

    /// Set the data format
    pub fn set_format(&mut self, format: impl Into<String>) -> Result<()> {
        let format = format.into();
        self.propose(Field::Format, FieldValue::Text(&format))?;
        self.payload.format = format;
        Ok(())
    }

    /// Set the textual description
    pub fn set_text_description(&mut self, text: impl Into<String>) -> Result<()> {
        let text = text.into();
        self.propose(Field::TextDescription, FieldValue::Text(&text))?;
        self.payload.text_description = text;
        Ok(())
    }

    /// Replace the media bytes
    pub fn set_data(&mut self, data: impl Into<Vec<u8>>) -> Result<()> {
        let data = data.into();
        self.propose(Field::Data, FieldValue::Bytes(&data))?;
        self.payload.data = data;
        Ok(())
    }
}

/// Refex analogs
///
/// The value's kind is fixed once the member has committed history: an
/// analog seeded from a committed version cannot switch to another kind, and
/// no analog can write a slot its current kind lacks. Both are
/// `Error::InvalidSlotAccess`.
impl Analog<RefexPayload> {
    /// Reference set
    pub fn refset(&self) -> Nid {
        self.payload.refset
    }

    /// Annotated component
    pub fn referenced_component(&self) -> Nid {
        self.payload.referenced_component
    }

    /// Typed value
    pub fn value(&self) -> &RefexValue {
        &self.payload.value
    }

    /// Set the reference set
    pub fn set_refset(&mut self, refset: Nid) -> Result<()> {
        self.propose(Field::Refset, FieldValue::Nid(refset))?;
        self.payload.refset = refset;
        Ok(())
    }

    /// Set the annotated component
    pub fn set_referenced_component(&mut self, referenced: Nid) -> Result<()> {
        self.propose(Field::ReferencedComponent, FieldValue::Nid(referenced))?;
        self.payload.referenced_component = referenced;
        Ok(())
    }

    /// Replace the whole value
    pub fn set_value(&mut self, value: RefexValue) -> Result<()> {
        let current = self.payload.value.kind();
        if !self.is_new() && value.kind() != current {
            return Err(Error::InvalidSlotAccess {
                requested: RefexAccess::Kind(value.kind()),
                actual: current,
            });
        }
        self.propose(Field::RefexValue, FieldValue::Refex(&value))?;
        self.payload.value = value;
        Ok(())
    }

    fn require_slot(&self, slot: Slot) -> Result<()> {
        let kind = self.payload.value.kind();
        if kind.has_slot(slot) {
            Ok(())
        } else {
            Err(Error::InvalidSlotAccess {
                requested: RefexAccess::Slot(slot),
                actual: kind,
            })
        }
    }

    /// Set the first identity slot
    pub fn set_c1(&mut self, nid: Nid) -> Result<()> {
        self.require_slot(Slot::C1)?;
        self.propose(Slot::C1.field(), FieldValue::Nid(nid))?;
        self.payload.value.set_c1(nid)
    }

    /// Set the second identity slot
    pub fn set_c2(&mut self, nid: Nid) -> Result<()> {
        self.require_slot(Slot::C2)?;
        self.propose(Slot::C2.field(), FieldValue::Nid(nid))?;
        self.payload.value.set_c2(nid)
    }

    /// Set the third identity slot
    pub fn set_c3(&mut self, nid: Nid) -> Result<()> {
        self.require_slot(Slot::C3)?;
        self.propose(Slot::C3.field(), FieldValue::Nid(nid))?;
        self.payload.value.set_c3(nid)
    }

    /// Set the 32-bit integer slot
    pub fn set_int(&mut self, value: i32) -> Result<()> {
        self.require_slot(Slot::Int)?;
        self.propose(Slot::Int.field(), FieldValue::Int(value))?;
        self.payload.value.set_int(value)
    }

    /// Set the 64-bit integer slot
    pub fn set_long(&mut self, value: i64) -> Result<()> {
        self.require_slot(Slot::Long)?;
        self.propose(Slot::Long.field(), FieldValue::Long(value))?;
        self.payload.value.set_long(value)
    }

    /// Set the float slot
    pub fn set_float(&mut self, value: f32) -> Result<()> {
        self.require_slot(Slot::Float)?;
        self.propose(Slot::Float.field(), FieldValue::Float(value))?;
        self.payload.value.set_float(value)
    }

    /// Set the text slot
    pub fn set_string(&mut self, value: impl Into<String>) -> Result<()> {
        self.require_slot(Slot::Text)?;
        let value = value.into();
        self.propose(Slot::Text.field(), FieldValue::Text(&value))?;
        self.payload.value.set_text(value)
    }
}

//! Analogs: staged edits
//!
//! An analog is a mutable copy of a component's latest version (or of a
//! blank payload, for a component that has no history yet). Editors change
//! it field by field and hand it to [`Chronicle::commit`](crate::Chronicle::commit),
//! which turns it into the next immutable version.
//!
//! ## Setter contract
//!
//! Every setter first offers the proposed value to the validator registry.
//! If any validator refuses, the setter returns `Error::RejectedEdit` and the
//! field keeps its previous value. Cross-field rules are not checked here;
//! they run at commit so that a multi-field edit may pass through
//! intermediate states that are only valid once complete.
//!
//! Dropping an analog discards the edit. Nothing is shared with the
//! chronicle until commit.

mod kinds;

use crate::validation::Validators;
use crate::version::Version;
use std::collections::BTreeSet;
use termstore_core::{
    Field, FieldEdit, FieldValue, IdAlias, Nid, Payload, Result, Stamp, Status, Timestamp,
};
use uuid::Uuid;

/// Mutable staging copy of a component
#[derive(Debug, Clone)]
pub struct Analog<P: Payload> {
    nid: Nid,
    stamp: Stamp,
    aliases: BTreeSet<IdAlias>,
    payload: P,
    basis: usize,
    primordial_uuid: Option<Uuid>,
    validators: Validators,
}

impl<P: Payload> Analog<P> {
    /// Blank analog for a component with no history
    pub fn new(nid: Nid, stamp: Stamp, validators: Validators) -> Self {
        Analog {
            nid,
            stamp,
            aliases: BTreeSet::new(),
            payload: P::default(),
            basis: 0,
            primordial_uuid: None,
            validators,
        }
    }

    pub(crate) fn seeded(
        version: &Version<P>,
        stamp: Stamp,
        basis: usize,
        validators: Validators,
    ) -> Self {
        Analog {
            nid: version.nid(),
            stamp,
            aliases: version.aliases().clone(),
            payload: version.payload().clone(),
            basis,
            primordial_uuid: None,
            validators,
        }
    }

    /// Request `uuid` as the primordial UUID of the chronicle this analog
    /// creates
    ///
    /// Only meaningful on a new analog; registries read it when they create
    /// the chronicle on first commit.
    pub fn with_primordial_uuid(mut self, uuid: Uuid) -> Self {
        self.primordial_uuid = Some(uuid);
        self
    }

    pub(crate) fn into_parts(self) -> (Nid, Stamp, BTreeSet<IdAlias>, P, usize) {
        (self.nid, self.stamp, self.aliases, self.payload, self.basis)
    }

    pub(crate) fn propose(&self, field: Field, value: FieldValue<'_>) -> Result<()> {
        self.validators.check_field(&FieldEdit {
            nid: self.nid,
            kind: P::KIND,
            field,
            value,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Identity of the component being edited
    pub fn nid(&self) -> Nid {
        self.nid
    }

    /// Stamp the edit will be committed with
    pub fn stamp(&self) -> &Stamp {
        &self.stamp
    }

    /// History length this analog was seeded from
    ///
    /// Zero for a component that had no committed versions.
    pub fn basis(&self) -> usize {
        self.basis
    }

    /// Primordial UUID requested for a new component
    pub fn primordial_uuid(&self) -> Option<Uuid> {
        self.primordial_uuid
    }

    /// Whether this analog creates the component's first version
    pub fn is_new(&self) -> bool {
        self.basis == 0
    }

    /// Identifier aliases
    pub fn aliases(&self) -> &BTreeSet<IdAlias> {
        &self.aliases
    }

    /// Kind-specific content
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Status
    pub fn status(&self) -> Status {
        self.stamp.status
    }

    /// Time
    pub fn time(&self) -> Timestamp {
        self.stamp.time
    }

    /// Author
    pub fn author(&self) -> Nid {
        self.stamp.author
    }

    /// Module
    pub fn module(&self) -> Nid {
        self.stamp.module
    }

    /// Path
    pub fn path(&self) -> Nid {
        self.stamp.path
    }

    // =========================================================================
    // Stamp setters
    // =========================================================================

    /// Set the status
    pub fn set_status(&mut self, status: Status) -> Result<()> {
        self.propose(Field::Status, FieldValue::Status(status))?;
        self.stamp = self.stamp.with_status(status);
        Ok(())
    }

    /// Set the commit time
    pub fn set_time(&mut self, time: Timestamp) -> Result<()> {
        self.propose(Field::Time, FieldValue::Time(time))?;
        self.stamp = self.stamp.with_time(time);
        Ok(())
    }

    /// Set the author
    pub fn set_author(&mut self, author: Nid) -> Result<()> {
        self.propose(Field::Author, FieldValue::Nid(author))?;
        self.stamp = self.stamp.with_author(author);
        Ok(())
    }

    /// Set the module
    pub fn set_module(&mut self, module: Nid) -> Result<()> {
        self.propose(Field::Module, FieldValue::Nid(module))?;
        self.stamp = self.stamp.with_module(module);
        Ok(())
    }

    /// Set the path
    pub fn set_path(&mut self, path: Nid) -> Result<()> {
        self.propose(Field::Path, FieldValue::Nid(path))?;
        self.stamp = self.stamp.with_path(path);
        Ok(())
    }

    // =========================================================================
    // Identifier aliases
    // =========================================================================

    /// Associate a numeric identifier issued by `authority`
    ///
    /// Returns `true` if the alias was added, `false` if it was already
    /// present or a validator refused it. Never fails.
    pub fn add_long_id(&mut self, authority: Nid, value: i64) -> bool {
        self.add_alias(IdAlias::long(authority, value))
    }

    /// Associate a UUID issued by `authority`; see [`Analog::add_long_id`]
    pub fn add_uuid_id(&mut self, authority: Nid, value: Uuid) -> bool {
        self.add_alias(IdAlias::uuid(authority, value))
    }

    /// Associate a text identifier issued by `authority`; see [`Analog::add_long_id`]
    pub fn add_string_id(&mut self, authority: Nid, value: impl Into<String>) -> bool {
        self.add_alias(IdAlias::text(authority, value))
    }

    fn add_alias(&mut self, alias: IdAlias) -> bool {
        if self.aliases.contains(&alias) {
            return false;
        }
        if self.propose(Field::Alias, FieldValue::Alias(&alias)).is_err() {
            return false;
        }
        self.aliases.insert(alias)
    }
}

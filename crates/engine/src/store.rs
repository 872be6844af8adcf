//! TerminologyStore: the identity-keyed registry of chronicles
//!
//! The store hands out native identities, routes analogs to the chronicle
//! they belong to, and registers a chronicle the first time one of its
//! analogs commits. Per-chronicle ordering is left to [`Chronicle::commit`];
//! the store only has to make sure a given identity is registered once.
//!
//! ## Indexes
//!
//! - `by_uuid`: primordial UUIDs and committed UUID aliases to nids. A
//!   primordial UUID is claimed when the identity is allocated, so two
//!   pending components can never share one.
//! - `dependents`: anchor nid to the components whose latest version points
//!   at it (descriptions and media to their concept, relationships to their
//!   source, refex members to their referenced component)
//! - `anchors`: the anchor each component is currently filed under in
//!   `dependents`
//!
//! Both are updated after the chronicle append, so a reader may briefly see
//! a committed version before it shows up in an index. Dependents updates
//! for one nid run under that nid's `anchors` entry and always re-read the
//! chronicle's latest version, so the last update to finish files the
//! component under its latest anchor.
//!
//! ## Reference checks
//!
//! A commit whose payload references an unregistered component (see
//! `Payload::references`) fails with `IdentityNotFound { kind: None }`.

use crate::component::{Component, StoredPayload};
use crate::config::StoreConfig;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rustc_hash::FxHashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use termstore_chronicle::{Analog, Chronicle, Validators, Version};
use termstore_core::{
    AliasValue, ComponentKind, Error, Nid, Payload, Rejection, Result, Stamp,
};
use tracing::{debug, trace, warn};
use uuid::Uuid;

/// Registry of every component chronicle, keyed by native identity
pub struct TerminologyStore {
    config: StoreConfig,
    validators: Validators,
    next_nid: AtomicU64,
    components: DashMap<Nid, Component>,
    by_uuid: DashMap<Uuid, Nid>,
    dependents: DashMap<Nid, FxHashSet<Nid>>,
    anchors: DashMap<Nid, Nid>,
}

impl TerminologyStore {
    /// Create a store with `config` and the validators every chronicle
    /// and analog will consult.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if `config` fails validation.
    pub fn new(config: StoreConfig, validators: Validators) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, validators))
    }

    fn build(config: StoreConfig, validators: Validators) -> Self {
        debug!(
            target: "termstore::store",
            first_nid = config.first_nid,
            track_dependents = config.track_dependents,
            validators = validators.len(),
            "Store created"
        );
        TerminologyStore {
            next_nid: AtomicU64::new(config.first_nid),
            components: DashMap::with_capacity(config.initial_capacity),
            by_uuid: DashMap::with_capacity(config.initial_capacity),
            dependents: DashMap::new(),
            anchors: DashMap::new(),
            config,
            validators,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Validator registry shared by every chronicle in this store
    pub fn validators(&self) -> &Validators {
        &self.validators
    }

    // =========================================================================
    // Authoring
    // =========================================================================

    /// Blank analog for a fresh identity
    ///
    /// The identity is allocated now; the chronicle is created and
    /// registered when the analog first commits. Dropping the analog leaves
    /// the identity unused.
    pub fn new_component<P: StoredPayload>(&self, stamp: Stamp) -> Analog<P> {
        let nid = self.allocate_nid();
        trace!(target: "termstore::store", nid = %nid, kind = P::KIND.name(), "Identity allocated");
        Analog::new(nid, stamp, self.validators.clone())
    }

    /// Like [`TerminologyStore::new_component`] with a known primordial UUID
    ///
    /// The UUID is claimed for the new identity immediately. Like the
    /// identity itself, it stays claimed if the analog is dropped.
    ///
    /// # Errors
    ///
    /// Returns `Error::RejectedEdit` if `uuid` is already claimed by another
    /// identity, pending or registered.
    pub fn new_component_with_uuid<P: StoredPayload>(
        &self,
        uuid: Uuid,
        stamp: Stamp,
    ) -> Result<Analog<P>> {
        match self.by_uuid.entry(uuid) {
            Entry::Occupied(claimed) => Err(Error::RejectedEdit(Rejection::whole(
                *claimed.get(),
                format!("uuid {} is already claimed", uuid),
            ))),
            Entry::Vacant(slot) => {
                let analog = self.new_component::<P>(stamp).with_primordial_uuid(uuid);
                slot.insert(analog.nid());
                Ok(analog)
            }
        }
    }

    /// Analog seeded from the latest version of an existing component
    ///
    /// # Errors
    ///
    /// Returns `Error::IdentityNotFound` if `nid` is not registered as a
    /// `P` component.
    pub fn edit<P: StoredPayload>(&self, nid: Nid, stamp: Stamp) -> Result<Analog<P>> {
        Ok(self.chronicle::<P>(nid)?.new_analog(stamp))
    }

    /// Commit `analog` to its chronicle
    ///
    /// The first commit of a fresh identity creates and registers the
    /// chronicle. If two first commits race for one identity, the later
    /// registration fails with `StaleBasis`.
    ///
    /// # Errors
    ///
    /// Everything [`Chronicle::commit`] returns, plus `IdentityNotFound`
    /// when the analog names an identity this store never allocated or one
    /// registered as another kind, or when its payload references an
    /// unregistered component (`kind: None`).
    pub fn commit<P: StoredPayload>(&self, analog: Analog<P>) -> Result<Version<P>> {
        let nid = analog.nid();
        let basis = analog.basis();
        self.check_references(nid, analog.payload())?;
        let existing = self.components.get(&nid).map(|c| c.value().clone());

        let (chronicle, version) = match existing {
            Some(component) => {
                let chronicle = P::from_component(&component).ok_or(Error::IdentityNotFound {
                    nid,
                    kind: Some(P::KIND),
                })?;
                let version = chronicle.commit(analog).map_err(|e| self.log_failure(nid, e))?;
                (chronicle, version)
            }
            None => self.register(analog)?,
        };

        debug!(
            target: "termstore::store",
            nid = %nid,
            kind = P::KIND.name(),
            time = %version.time(),
            versions = basis + 1,
            "Version committed"
        );
        self.index(&chronicle, &version);
        Ok(version)
    }

    fn check_references<P: StoredPayload>(&self, nid: Nid, payload: &P) -> Result<()> {
        for reference in payload.references() {
            if !self.components.contains_key(&reference) {
                debug!(
                    target: "termstore::store",
                    nid = %nid,
                    reference = %reference,
                    "Commit refused: unknown reference"
                );
                return Err(Error::IdentityNotFound {
                    nid: reference,
                    kind: None,
                });
            }
        }
        Ok(())
    }

    fn register<P: StoredPayload>(
        &self,
        analog: Analog<P>,
    ) -> Result<(Arc<Chronicle<P>>, Version<P>)> {
        let nid = analog.nid();
        if !analog.is_new() || !self.is_allocated(nid) {
            return Err(Error::IdentityNotFound {
                nid,
                kind: Some(P::KIND),
            });
        }

        let uuid = match analog.primordial_uuid() {
            Some(uuid) => {
                if self.by_uuid.get(&uuid).map(|n| *n.value()) != Some(nid) {
                    return Err(Error::RejectedEdit(Rejection::whole(
                        nid,
                        format!("uuid {} was not claimed for {}", uuid, nid),
                    )));
                }
                uuid
            }
            None => Uuid::new_v4(),
        };
        let chronicle = Arc::new(Chronicle::with_uuid(nid, uuid, self.validators.clone()));
        let version = chronicle.commit(analog).map_err(|e| self.log_failure(nid, e))?;

        match self.components.entry(nid) {
            Entry::Vacant(slot) => {
                slot.insert(P::into_component(Arc::clone(&chronicle)));
            }
            Entry::Occupied(winner) => {
                let current = winner.get().len();
                drop(winner);
                return Err(self.log_failure(
                    nid,
                    Error::StaleBasis {
                        nid,
                        basis: 0,
                        current,
                    },
                ));
            }
        }

        self.by_uuid.entry(uuid).or_insert(nid);
        debug!(
            target: "termstore::store",
            nid = %nid,
            kind = P::KIND.name(),
            uuid = %uuid,
            "Chronicle registered"
        );
        Ok((chronicle, version))
    }

    fn log_failure(&self, nid: Nid, err: Error) -> Error {
        match &err {
            Error::StaleBasis { basis, current, .. } => {
                warn!(target: "termstore::store", nid = %nid, basis, current, "Stale commit");
            }
            other => {
                debug!(target: "termstore::store", nid = %nid, error = %other, "Commit refused");
            }
        }
        err
    }

    fn index<P: StoredPayload>(&self, chronicle: &Chronicle<P>, version: &Version<P>) {
        let nid = version.nid();
        for alias in version.aliases() {
            if let AliasValue::Uuid(uuid) = alias.value {
                self.by_uuid.entry(uuid).or_insert(nid);
            }
        }

        if !self.config.track_dependents {
            return;
        }
        // Holding the entry serializes refiling of this nid.
        let filed = self.anchors.entry(nid);
        let latest = chronicle
            .latest_version(None)
            .and_then(|v| v.payload().anchor());
        let previous = match &filed {
            Entry::Occupied(e) => Some(*e.get()),
            Entry::Vacant(_) => None,
        };
        if previous == latest {
            return;
        }

        if let Some(previous) = previous {
            if let Some(mut set) = self.dependents.get_mut(&previous) {
                set.remove(&nid);
            }
            self.dependents.remove_if(&previous, |_, set| set.is_empty());
        }
        if let Some(anchor) = latest {
            self.dependents.entry(anchor).or_default().insert(nid);
        }

        match (filed, latest) {
            (Entry::Occupied(mut e), Some(anchor)) => {
                e.insert(anchor);
            }
            (Entry::Vacant(e), Some(anchor)) => {
                e.insert(anchor);
            }
            (Entry::Occupied(e), None) => {
                e.remove();
            }
            (Entry::Vacant(_), None) => {}
        }
    }

    fn allocate_nid(&self) -> Nid {
        Nid::new(self.next_nid.fetch_add(1, Ordering::Relaxed))
    }

    fn is_allocated(&self, nid: Nid) -> bool {
        nid.as_u64() >= self.config.first_nid && nid.as_u64() < self.next_nid.load(Ordering::Relaxed)
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Typed chronicle for `nid`
    ///
    /// # Errors
    ///
    /// Returns `Error::IdentityNotFound` if `nid` is unregistered or holds
    /// another kind.
    pub fn chronicle<P: StoredPayload>(&self, nid: Nid) -> Result<Arc<Chronicle<P>>> {
        trace!(target: "termstore::store", nid = %nid, kind = P::KIND.name(), "Chronicle lookup");
        self.components
            .get(&nid)
            .and_then(|c| P::from_component(c.value()))
            .ok_or(Error::IdentityNotFound {
                nid,
                kind: Some(P::KIND),
            })
    }

    /// Kind-erased component for `nid`
    pub fn component(&self, nid: Nid) -> Option<Component> {
        self.components.get(&nid).map(|c| c.value().clone())
    }

    /// Kind of the component registered under `nid`
    pub fn component_kind(&self, nid: Nid) -> Option<ComponentKind> {
        self.components.get(&nid).map(|c| c.kind())
    }

    /// Registered identity for `uuid`, either as primordial UUID or as a
    /// committed UUID alias
    ///
    /// UUIDs claimed by identities that have not committed yet resolve to
    /// `None`.
    pub fn nid_for_uuid(&self, uuid: &Uuid) -> Option<Nid> {
        trace!(target: "termstore::store", uuid = %uuid, "UUID lookup");
        self.by_uuid
            .get(uuid)
            .map(|n| *n.value())
            .filter(|nid| self.components.contains_key(nid))
    }

    /// Components whose latest version is anchored on `nid`, sorted by nid
    pub fn dependents(&self, nid: Nid) -> Vec<Nid> {
        let mut found: Vec<Nid> = if self.config.track_dependents {
            self.dependents
                .get(&nid)
                .map(|set| set.iter().copied().collect())
                .unwrap_or_default()
        } else {
            self.components
                .iter()
                .filter(|c| c.value().anchor() == Some(nid))
                .map(|c| *c.key())
                .collect()
        };
        found.sort_unstable();
        found
    }

    /// Refex members whose referenced component is `referenced`, sorted by nid
    pub fn refex_members(&self, referenced: Nid) -> Vec<Nid> {
        self.dependents(referenced)
            .into_iter()
            .filter(|nid| self.component_kind(*nid) == Some(ComponentKind::Refex))
            .collect()
    }

    /// Number of registered components
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether no component is registered
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl Default for TerminologyStore {
    fn default() -> Self {
        Self::build(StoreConfig::default(), Validators::new())
    }
}

impl std::fmt::Debug for TerminologyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminologyStore")
            .field("config", &self.config)
            .field("validators", &self.validators)
            .field("components", &self.components.len())
            .finish()
    }
}

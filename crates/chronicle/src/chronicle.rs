//! Chronicle: the append-only history of one component
//!
//! ## Commit rules
//!
//! `commit` is the serialization point for concurrent editors. Under the
//! chronicle's write lock it checks, in order:
//!
//! 1. the analog targets this chronicle,
//! 2. the analog's basis is still the current history length (else
//!    `StaleBasis`),
//! 3. the stamp time is committed and strictly after the latest version,
//! 4. the payload's structural checks,
//! 5. the registered commit validators,
//!
//! and only then appends. Readers clone an `Arc` of the committed list, so a
//! reader sees either the whole new version or nothing.
//!
//! ## Pending versions
//!
//! A chronicle holds at most one staged version carrying the uncommitted
//! time sentinel. `commit_pending` stamps it with a real time and runs it
//! through the same rules as `commit`.

use crate::analog::Analog;
use crate::validation::Validators;
use crate::version::{Version, VersionHistory};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use termstore_core::{
    ComponentKind, Error, Field, Nid, Payload, Rejection, Result, Stamp, Timestamp, ViewCoordinate,
};
use uuid::Uuid;

/// Lifecycle of a component as seen from its latest committed version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lifecycle {
    /// No committed versions yet
    Uncommitted,
    /// Latest committed version is active
    Active,
    /// Latest committed version is not active; a later commit may reactivate
    Inactive,
}

#[derive(Debug, Clone)]
struct Pending<P> {
    version: Version<P>,
    basis: usize,
}

#[derive(Debug)]
struct ChronicleState<P> {
    committed: Arc<Vec<Version<P>>>,
    pending: Option<Pending<P>>,
}

/// Append-only ordered history of one component
#[derive(Debug)]
pub struct Chronicle<P: Payload> {
    nid: Nid,
    uuid: Uuid,
    validators: Validators,
    state: RwLock<ChronicleState<P>>,
}

impl<P: Payload> Chronicle<P> {
    /// Empty chronicle with a fresh primordial UUID
    pub fn new(nid: Nid, validators: Validators) -> Self {
        Self::with_uuid(nid, Uuid::new_v4(), validators)
    }

    /// Empty chronicle with a known primordial UUID
    pub fn with_uuid(nid: Nid, uuid: Uuid, validators: Validators) -> Self {
        Chronicle {
            nid,
            uuid,
            validators,
            state: RwLock::new(ChronicleState {
                committed: Arc::new(Vec::new()),
                pending: None,
            }),
        }
    }

    // =========================================================================
    // Identity
    // =========================================================================

    /// Native identity
    pub fn nid(&self) -> Nid {
        self.nid
    }

    /// External identity assigned at creation
    pub fn primordial_uuid(&self) -> Uuid {
        self.uuid
    }

    /// Component kind
    pub fn kind(&self) -> ComponentKind {
        P::KIND
    }

    /// Validators consulted by this chronicle and its analogs
    pub fn validators(&self) -> &Validators {
        &self.validators
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Number of committed versions
    pub fn len(&self) -> usize {
        self.state.read().committed.len()
    }

    /// Whether nothing has been committed
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Most recent committed version visible through `view`
    ///
    /// With no view, the most recent committed version.
    pub fn latest_version(&self, view: Option<&ViewCoordinate>) -> Option<Version<P>> {
        let committed = Arc::clone(&self.state.read().committed);
        match view {
            None => committed.last().cloned(),
            Some(view) => committed
                .iter()
                .rev()
                .find(|v| view.accepts(v.stamp()))
                .cloned(),
        }
    }

    /// Snapshot of the full committed history, oldest first
    pub fn all_versions(&self) -> VersionHistory<P> {
        VersionHistory::new(Arc::clone(&self.state.read().committed))
    }

    /// Staged version, if any
    pub fn pending_version(&self) -> Option<Version<P>> {
        self.state.read().pending.as_ref().map(|p| p.version.clone())
    }

    /// Lifecycle derived from the latest committed version
    pub fn lifecycle(&self) -> Lifecycle {
        match self.state.read().committed.last() {
            None => Lifecycle::Uncommitted,
            Some(v) if v.is_active() => Lifecycle::Active,
            Some(_) => Lifecycle::Inactive,
        }
    }

    // =========================================================================
    // Edits
    // =========================================================================

    /// Analog seeded from the latest committed version
    ///
    /// With no history the analog starts from a blank payload.
    pub fn new_analog(&self, stamp: Stamp) -> Analog<P> {
        let state = self.state.read();
        let basis = state.committed.len();
        match state.committed.last() {
            Some(latest) => Analog::seeded(latest, stamp, basis, self.validators.clone()),
            None => Analog::new(self.nid, stamp, self.validators.clone()),
        }
    }

    /// Validate `analog` and append it as the next version
    pub fn commit(&self, analog: Analog<P>) -> Result<Version<P>> {
        let (nid, stamp, aliases, payload, basis) = analog.into_parts();
        self.check_target(nid)?;
        if stamp.is_uncommitted() {
            return Err(Error::rejected(
                nid,
                Field::Time,
                "commit needs a committed time; stage the analog instead",
            ));
        }

        let version = Version::new(nid, stamp, aliases, payload);
        let mut state = self.state.write();
        self.append(&mut state, version, basis)
    }

    /// Hold `analog` as the single pending version
    ///
    /// Content checks are deferred to [`Chronicle::commit_pending`].
    pub fn stage(&self, analog: Analog<P>) -> Result<Version<P>> {
        let (nid, stamp, aliases, payload, basis) = analog.into_parts();
        self.check_target(nid)?;

        let mut state = self.state.write();
        let current = state.committed.len();
        if basis != current {
            return Err(Error::StaleBasis {
                nid,
                basis,
                current,
            });
        }
        if state.pending.is_some() {
            return Err(Error::RejectedEdit(Rejection::whole(
                nid,
                "a pending version is already staged",
            )));
        }

        let version = Version::new(nid, stamp.with_time(Timestamp::UNCOMMITTED), aliases, payload);
        state.pending = Some(Pending {
            version: version.clone(),
            basis,
        });
        Ok(version)
    }

    /// Commit the pending version at `time`
    ///
    /// On failure the pending version stays staged so the caller can inspect
    /// or discard it.
    pub fn commit_pending(&self, time: Timestamp) -> Result<Version<P>> {
        if time.is_uncommitted() {
            return Err(Error::rejected(
                self.nid,
                Field::Time,
                "pending versions commit at a real time",
            ));
        }

        let mut state = self.state.write();
        let pending = state.pending.take().ok_or_else(|| {
            Error::RejectedEdit(Rejection::whole(self.nid, "no pending version"))
        })?;

        let version = pending.version.restamped(time);
        match self.append(&mut state, version, pending.basis) {
            Ok(version) => Ok(version),
            Err(e) => {
                state.pending = Some(pending);
                Err(e)
            }
        }
    }

    /// Drop the pending version; true if there was one
    pub fn discard_pending(&self) -> bool {
        self.state.write().pending.take().is_some()
    }

    fn check_target(&self, nid: Nid) -> Result<()> {
        if nid == self.nid {
            Ok(())
        } else {
            Err(Error::RejectedEdit(Rejection::whole(
                nid,
                format!("analog belongs to {}, not {}", nid, self.nid),
            )))
        }
    }

    fn append(
        &self,
        state: &mut ChronicleState<P>,
        version: Version<P>,
        basis: usize,
    ) -> Result<Version<P>> {
        let current = state.committed.len();
        if basis != current {
            return Err(Error::StaleBasis {
                nid: self.nid,
                basis,
                current,
            });
        }

        if let Some(latest) = state.committed.last() {
            if version.time() <= latest.time() {
                return Err(Error::rejected(
                    self.nid,
                    Field::Time,
                    format!("must be after the latest version at {}", latest.time()),
                ));
            }
        }

        version.payload().check(self.nid)?;
        self.validators.check_commit(&version.candidate())?;

        Arc::make_mut(&mut state.committed).push(version.clone());
        Ok(version)
    }
}

//! Edit validation
//!
//! Validators veto edits. They are consulted at two points:
//!
//! - **Field edits**: every analog setter asks each validator about the
//!   proposed value before applying it. A rejection leaves the analog
//!   untouched.
//! - **Commits**: the fully staged version is offered to each validator
//!   after the payload's own structural checks pass.
//!
//! Validators are registered once and handed to chronicles at construction.
//! The first rejection wins; later validators are not consulted.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;
use termstore_core::{ComponentKind, Error, FieldEdit, IdAlias, Nid, PayloadRef, Rejection, Result, Stamp};

/// A version about to be committed, as seen by validators
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// Component being committed
    pub nid: Nid,
    /// Stamp the version will carry
    pub stamp: &'a Stamp,
    /// Identifier aliases the version will carry
    pub aliases: &'a BTreeSet<IdAlias>,
    /// Payload the version will carry
    pub payload: PayloadRef<'a>,
}

impl Candidate<'_> {
    /// Kind of the component being committed
    pub fn kind(&self) -> ComponentKind {
        self.payload.kind()
    }

    /// Build a whole-version rejection
    pub fn reject(&self, reason: impl Into<String>) -> Rejection {
        Rejection::whole(self.nid, reason)
    }
}

/// Veto hook for edits and commits
///
/// Both methods default to accepting, so a validator only implements the
/// hook it cares about. Implementations must not call back into the
/// chronicle being validated: commit hooks run under its write lock.
pub trait EditValidator: Send + Sync {
    /// Inspect a proposed field change
    fn validate_field(&self, _edit: &FieldEdit<'_>) -> std::result::Result<(), Rejection> {
        Ok(())
    }

    /// Inspect a version about to be committed
    fn validate_commit(&self, _candidate: &Candidate<'_>) -> std::result::Result<(), Rejection> {
        Ok(())
    }
}

/// Field validator built from a closure
pub struct FieldRule<F>(F);

impl<F> FieldRule<F>
where
    F: Fn(&FieldEdit<'_>) -> std::result::Result<(), Rejection> + Send + Sync,
{
    /// Wrap `check` as a validator
    pub fn new(check: F) -> Self {
        FieldRule(check)
    }
}

impl<F> EditValidator for FieldRule<F>
where
    F: Fn(&FieldEdit<'_>) -> std::result::Result<(), Rejection> + Send + Sync,
{
    fn validate_field(&self, edit: &FieldEdit<'_>) -> std::result::Result<(), Rejection> {
        (self.0)(edit)
    }
}

/// Commit validator built from a closure
pub struct CommitRule<F>(F);

impl<F> CommitRule<F>
where
    F: Fn(&Candidate<'_>) -> std::result::Result<(), Rejection> + Send + Sync,
{
    /// Wrap `check` as a validator
    pub fn new(check: F) -> Self {
        CommitRule(check)
    }
}

impl<F> EditValidator for CommitRule<F>
where
    F: Fn(&Candidate<'_>) -> std::result::Result<(), Rejection> + Send + Sync,
{
    fn validate_commit(&self, candidate: &Candidate<'_>) -> std::result::Result<(), Rejection> {
        (self.0)(candidate)
    }
}

/// Registry of validators shared by chronicles and their analogs
///
/// Cloning is cheap: clones share the same registered validators.
#[derive(Clone, Default)]
pub struct Validators {
    inner: Arc<Vec<Arc<dyn EditValidator>>>,
}

impl Validators {
    /// Empty registry; every edit is accepted
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with `validator` appended
    pub fn with(self, validator: impl EditValidator + 'static) -> Self {
        self.with_shared(Arc::new(validator))
    }

    /// Registry with an already shared validator appended
    pub fn with_shared(self, validator: Arc<dyn EditValidator>) -> Self {
        let mut list: Vec<_> = self.inner.iter().cloned().collect();
        list.push(validator);
        Validators {
            inner: Arc::new(list),
        }
    }

    /// Number of registered validators
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether no validators are registered
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Run every field hook; first rejection wins
    pub fn check_field(&self, edit: &FieldEdit<'_>) -> Result<()> {
        for validator in self.inner.iter() {
            validator.validate_field(edit).map_err(Error::RejectedEdit)?;
        }
        Ok(())
    }

    /// Run every commit hook; first rejection wins
    pub fn check_commit(&self, candidate: &Candidate<'_>) -> Result<()> {
        for validator in self.inner.iter() {
            validator
                .validate_commit(candidate)
                .map_err(Error::RejectedEdit)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Validators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validators")
            .field("count", &self.inner.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use termstore_core::{Field, FieldValue, Status, Timestamp};

    fn edit(value: &str) -> FieldEdit<'_> {
        FieldEdit {
            nid: Nid::new(1),
            kind: ComponentKind::Description,
            field: Field::Text,
            value: FieldValue::Text(value),
        }
    }

    struct Counting(AtomicUsize);

    impl EditValidator for Counting {
        fn validate_field(&self, _edit: &FieldEdit<'_>) -> std::result::Result<(), Rejection> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn test_empty_registry_accepts() {
        let validators = Validators::new();
        assert!(validators.is_empty());
        assert!(validators.check_field(&edit("anything")).is_ok());
    }

    #[test]
    fn test_first_rejection_wins() {
        let counter = Arc::new(Counting(AtomicUsize::new(0)));
        let validators = Validators::new()
            .with(FieldRule::new(|e: &FieldEdit<'_>| match e.value {
                FieldValue::Text(t) if t.is_empty() => Err(e.reject("empty text")),
                _ => Ok(()),
            }))
            .with_shared(counter.clone());

        let err = validators.check_field(&edit("")).unwrap_err();
        assert_eq!(err.rejection().map(|r| r.reason.as_str()), Some("empty text"));
        assert_eq!(counter.0.load(Ordering::SeqCst), 0);

        validators.check_field(&edit("Heart")).unwrap();
        assert_eq!(counter.0.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_commit_rule_sees_candidate() {
        let validators = Validators::new().with(CommitRule::new(|c: &Candidate<'_>| {
            if c.stamp.status.is_active() {
                Ok(())
            } else {
                Err(c.reject("retirement needs review"))
            }
        }));
        let aliases = BTreeSet::new();
        let payload = termstore_core::ConceptPayload::default();
        let stamp = Stamp::new(
            Status::Retired,
            Timestamp::from_micros(1),
            Nid::new(2),
            Nid::new(3),
            Nid::new(4),
        );
        let candidate = Candidate {
            nid: Nid::new(1),
            stamp: &stamp,
            aliases: &aliases,
            payload: PayloadRef::Concept(&payload),
        };
        assert_eq!(candidate.kind(), ComponentKind::Concept);
        assert!(matches!(
            validators.check_commit(&candidate),
            Err(Error::RejectedEdit(_))
        ));
    }

    #[test]
    fn test_clones_share_registry() {
        let a = Validators::new().with(FieldRule::new(|_: &FieldEdit<'_>| Ok(())));
        let b = a.clone();
        assert_eq!(b.len(), 1);
        assert_eq!(format!("{:?}", b), "Validators { count: 1 }");
    }
}

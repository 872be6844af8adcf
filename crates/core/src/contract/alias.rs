//! Identifier aliases
//!
//! Components are known outside the store by identifiers issued by other
//! authorities (a release's SCTID, a legacy code, a UUID). An alias pairs the
//! issuing authority with the identifier value.

use crate::types::Nid;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier value issued by an authority
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AliasValue {
    /// 64-bit numeric identifier
    Long(i64),
    /// UUID identifier
    Uuid(Uuid),
    /// Free-text identifier
    Text(String),
}

/// Identifier alias of a component
///
/// Two aliases are equal only if both authority and value match, so the same
/// value issued by two authorities is two distinct aliases.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IdAlias {
    /// Issuing authority
    pub authority: Nid,
    /// Issued value
    pub value: AliasValue,
}

impl IdAlias {
    /// Numeric alias
    pub fn long(authority: Nid, value: i64) -> Self {
        IdAlias {
            authority,
            value: AliasValue::Long(value),
        }
    }

    /// UUID alias
    pub fn uuid(authority: Nid, value: Uuid) -> Self {
        IdAlias {
            authority,
            value: AliasValue::Uuid(value),
        }
    }

    /// Text alias
    pub fn text(authority: Nid, value: impl Into<String>) -> Self {
        IdAlias {
            authority,
            value: AliasValue::Text(value.into()),
        }
    }
}

impl fmt::Display for IdAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            AliasValue::Long(v) => write!(f, "{}:{}", self.authority, v),
            AliasValue::Uuid(v) => write!(f, "{}:{}", self.authority, v),
            AliasValue::Text(v) => write!(f, "{}:{:?}", self.authority, v),
        }
    }
}

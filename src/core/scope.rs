//! Participant scope applied before every aggregation.
//!
//! A [`Scope`] is either the whole chat ([`Scope::Overall`]) or one
//! participant. Every view in [`crate::core`] starts by running the records
//! through [`apply_scope`].
//!
//! # Example
//!
//! ```
//! use chatlens::core::scope::{Scope, apply_scope};
//! use chatlens::parser::parse;
//!
//! let messages = parse(
//!     "01/02/23, 10:00 - Alice: hello\n\
//!      01/02/23, 10:01 - Bob: hi\n\
//!      01/02/23, 10:02 - Alice: how are you?",
//! );
//!
//! let alice: Scope = "Alice".parse().unwrap();
//! assert_eq!(apply_scope(&alice, &messages).count(), 2);
//! assert_eq!(apply_scope(&Scope::Overall, &messages).count(), 3);
//! ```
//!
//! # Behavior Notes
//!
//! - Sender matching is exact (case-sensitive)
//! - An unknown participant is not an error; it simply matches nothing

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Message;

/// Which messages a view is computed over.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Every participant, notifications included.
    #[default]
    Overall,
    /// Only messages whose sender is exactly this name.
    Participant(String),
}

impl Scope {
    /// Creates a single-participant scope.
    pub fn participant(name: impl Into<String>) -> Self {
        Scope::Participant(name.into())
    }

    /// Returns `true` for [`Scope::Overall`].
    pub fn is_overall(&self) -> bool {
        matches!(self, Scope::Overall)
    }

    /// Returns `true` if `msg` belongs to this scope.
    pub fn matches(&self, msg: &Message) -> bool {
        match self {
            Scope::Overall => true,
            Scope::Participant(name) => msg.sender == *name,
        }
    }

    /// Name shown to users: `"Overall"` or the participant name.
    pub fn label(&self) -> &str {
        match self {
            Scope::Overall => "Overall",
            Scope::Participant(name) => name,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Scope {
    type Err = Infallible;

    /// `overall`, `all` and `*` (any case) select everyone; anything else is a name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "overall" | "all" | "*" => Ok(Scope::Overall),
            _ => Ok(Scope::Participant(s.to_string())),
        }
    }
}

/// Yields the records that belong to `scope`, in their original order.
pub fn apply_scope<'a>(
    scope: &'a Scope,
    records: &'a [Message],
) -> impl Iterator<Item = &'a Message> + 'a {
    records.iter().filter(move |msg| scope.matches(msg))
}

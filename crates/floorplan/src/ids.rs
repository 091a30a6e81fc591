//! Entity identifiers.
//!
//! Every floor-plan entity carries a uuid-backed id. Ids are stable across
//! edits and across save/load, so selection and hover state can refer to
//! entities without holding references into the document.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(uuid::Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            /// Parses an id from its full uuid string. Returns a fresh id if
            /// the string is not a valid uuid.
            pub fn from_str(s: &str) -> Self {
                match uuid::Uuid::parse_str(s) {
                    Ok(uuid) => Self(uuid),
                    Err(_) => Self::new(),
                }
            }

            /// The full uuid string, used for round-trip fidelity in the
            /// interchange format.
            pub fn to_uuid_string(&self) -> String {
                self.0.to_string()
            }

            /// Builds an id from a raw u128, handy in tests.
            pub fn from_u128(value: u128) -> Self {
                Self(uuid::Uuid::from_u128(value))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), &self.0.to_string()[..8])
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", &self.0.to_string()[..8])
            }
        }
    };
}

entity_id!(
    /// Unique identifier for a floor level.
    LevelId
);

entity_id!(
    /// Unique identifier for a room.
    RoomId
);

entity_id!(
    /// Unique identifier for a vertical link.
    LinkId
);

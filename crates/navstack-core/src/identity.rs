//! # Destination Identity
//!
//! Two destinations are the *same* for navigation purposes iff their kinds are
//! equal. Payload carried by a destination (an item id, a selected section) is
//! never compared.
//!
//! Kinds are a closed enumeration chosen by the application. Identity is never
//! taken from `PartialEq` on the destination itself.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Discriminator identifying which screen a destination is.
///
/// Implementors are expected to be plain fieldless enums. One value is
/// reserved as [`DestinationKind::ROOT`]: the bottom of the stack, never
/// stored on it.
pub trait DestinationKind:
    Copy + Eq + Hash + Debug + Display + Send + Sync + 'static
{
    /// The reserved "no screen" kind.
    const ROOT: Self;

    /// Check if this is the reserved root kind
    fn is_root(&self) -> bool {
        *self == Self::ROOT
    }
}

/// A logical navigation target.
pub trait Destination: Clone + Debug + Send + Sync + 'static {
    /// The kind enumeration for this destination set
    type Kind: DestinationKind;

    /// Kind of this destination. Must depend only on the variant.
    fn kind(&self) -> Self::Kind;

    /// Synthesize the root destination.
    fn root() -> Self;

    /// Check if two destinations have the same kind
    fn same_kind(&self, other: &Self) -> bool {
        self.kind() == other.kind()
    }

    /// Check if this destination is the root
    fn is_root(&self) -> bool {
        self.kind().is_root()
    }
}

/// Kind of `destination`.
pub fn kind_of<D: Destination>(destination: &D) -> D::Kind {
    destination.kind()
}

/// Equivalence used by every stack operation.
pub fn same_kind<D: Destination>(a: &D, b: &D) -> bool {
    kind_of(a) == kind_of(b)
}

//! Building handles.
//!
//! A `NodeId` is the position of a building in its `GraphStore`, so per-node
//! router state lives in plain `Vec`s indexed by [`NodeId::index`].

use std::fmt;
use std::num::TryFromIntError;

/// Handle of a building in a `GraphStore`.  Assigned sequentially from 0
/// in insertion order and never reused.
///
/// `u32` caps a store at `u32::MAX` buildings; the value `u32::MAX` itself
/// is [`NodeId::INVALID`] and is never handed out.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u32);

impl NodeId {
    /// Marks an unset slot, e.g. a predecessor not yet relaxed.
    pub const INVALID: NodeId = NodeId(u32::MAX);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl TryFrom<usize> for NodeId {
    type Error = TryFromIntError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        u32::try_from(index).map(NodeId)
    }
}

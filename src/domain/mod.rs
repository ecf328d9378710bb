//! Domain layer: the constrained composite tree
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod container;
pub mod error;
pub mod node;
pub mod rules;
pub mod view;

pub use container::Container;
pub use error::{DomainError, DomainResult};
pub use node::{
    Leaf, LeafKind, Node, NodeId, NodeKind, Value, CONTAINER_MARKER, INDENT_UNIT, LEAF_MARKER,
};
pub use rules::{AdmissionRule, SectionKind, ADDRESS_LABELS};
pub use view::TreeView;

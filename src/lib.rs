//! Employee registration dossier built as a constrained composite tree.
//!
//! Every container enforces an admission rule on the children it accepts;
//! the whole tree renders as indented, marker-prefixed text.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{Container, DomainError, Leaf, Node, SectionKind};

//! Application layer: dossier assembly and restriction probes
//!
//! This layer orchestrates domain logic and owns data-file loading.

pub mod assembly;
pub mod error;
pub mod error_ext;
pub mod probe;

pub use assembly::{build_dossier, DossierData, Entry};
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use probe::{default_probes, run_probes, Probe, ProbeOutcome};

//! Restriction probes: insertions the assembled dossier must refuse.

use tracing::{debug, instrument, warn};

use crate::application::assembly::{section_mut, ADDRESS_POS, DOCUMENTS_POS, PERSONAL_DATA_POS};
use crate::application::ApplicationResult;
use crate::domain::{Container, DomainError, Leaf, Node, SectionKind};

/// One insertion attempt that a section is expected to reject.
#[derive(Debug, Clone, Copy)]
pub struct Probe {
    pub description: &'static str,
    pub position: isize,
    pub section: SectionKind,
    pub candidate: fn() -> Node,
}

/// What happened when a probe was run.
#[derive(Debug)]
pub struct ProbeOutcome {
    pub description: &'static str,
    pub section: String,
    pub result: Result<(), DomainError>,
}

impl ProbeOutcome {
    /// The section refused the candidate.
    pub fn held(&self) -> bool {
        matches!(self.result, Err(DomainError::InvalidChildType { .. }))
    }
}

fn client_id() -> Node {
    Leaf::client_id("INV").into()
}

fn salary() -> Node {
    Leaf::base_salary("R$ 10.000").into()
}

fn random_leaf() -> Node {
    Leaf::new("Random").into()
}

fn office_address() -> Node {
    Leaf::with_value("Office", "Rua Sem Nome, 1").into()
}

/// Probes run by `dossier check`.
pub fn default_probes() -> Vec<Probe> {
    vec![
        Probe {
            description: "client id into personal data",
            position: PERSONAL_DATA_POS,
            section: SectionKind::PersonalData,
            candidate: client_id,
        },
        Probe {
            description: "base salary into personal data",
            position: PERSONAL_DATA_POS,
            section: SectionKind::PersonalData,
            candidate: salary,
        },
        Probe {
            description: "generic leaf into documents",
            position: DOCUMENTS_POS,
            section: SectionKind::Documents,
            candidate: random_leaf,
        },
        Probe {
            description: "'Office' entry into address",
            position: ADDRESS_POS,
            section: SectionKind::Address,
            candidate: office_address,
        },
    ]
}

/// Run each probe against the sections of `root`.
///
/// A probe that is accepted leaves its candidate in the tree.
#[instrument(level = "debug", skip(root, probes), fields(count = probes.len()))]
pub fn run_probes(root: &mut Container, probes: &[Probe]) -> ApplicationResult<Vec<ProbeOutcome>> {
    let mut outcomes = Vec::with_capacity(probes.len());
    for probe in probes {
        let section = section_mut(root, probe.position, probe.section)?;
        let result = section.add((probe.candidate)());
        let outcome = ProbeOutcome {
            description: probe.description,
            section: section.label().to_string(),
            result,
        };
        if outcome.held() {
            debug!(probe = probe.description, "restriction held");
        } else {
            warn!(probe = probe.description, "restriction did not hold");
        }
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::assembly::{build_dossier, DossierData};

    #[test]
    fn test_default_probes_all_hold() {
        let mut root = build_dossier(&DossierData::default()).unwrap();
        let before = root.render(0);

        let outcomes = run_probes(&mut root, &default_probes()).unwrap();

        assert_eq!(outcomes.len(), 4);
        assert!(outcomes.iter().all(|o| o.held()));
        assert_eq!(root.render(0), before);
    }

    #[test]
    fn test_accepted_probe_is_reported() {
        fn second_home() -> Node {
            Leaf::with_value("Residencial", "Rua Nova, 2").into()
        }
        let mut root = build_dossier(&DossierData::default()).unwrap();
        let probes = [Probe {
            description: "second residential address",
            position: ADDRESS_POS,
            section: SectionKind::Address,
            candidate: second_home,
        }];

        let outcomes = run_probes(&mut root, &probes).unwrap();
        assert!(!outcomes[0].held());
        assert_eq!(outcomes[0].section, "Endereço");
        assert!(root.render(0).contains("- Residencial: Rua Nova, 2"));
    }
}

//! Section kinds and their admission rules.
//!
//! A rule is decided by the immediate parent only, from the candidate's
//! dynamic kind and, for label-based rules, its label. Sub-sections
//! (dependents, contacts, job info) are admitted by their parent's whitelist
//! but apply their own, broader rule to their children.

use itertools::Itertools;

use crate::domain::node::{LeafKind, Node, NodeKind};

/// Labels accepted by the address section.
///
/// Dossier records carry the Portuguese "Residencial"/"Comercial"; the English
/// pair is accepted too so either vocabulary passes. Matching is exact.
pub const ADDRESS_LABELS: &[&str] = &["Residencial", "Comercial", "Residential", "Commercial"];

const PERSONAL_DATA_KINDS: &[NodeKind] = &[
    NodeKind::Leaf(LeafKind::FullName),
    NodeKind::Leaf(LeafKind::Phone),
    NodeKind::Container(SectionKind::Dependents),
    NodeKind::Container(SectionKind::Contacts),
];

const EMPLOYMENT_DATA_KINDS: &[NodeKind] = &[
    NodeKind::Leaf(LeafKind::AdmissionDate),
    NodeKind::Leaf(LeafKind::BaseSalary),
    NodeKind::Container(SectionKind::JobInfo),
];

const DOCUMENT_KINDS: &[NodeKind] = &[
    NodeKind::Leaf(LeafKind::Rg),
    NodeKind::Leaf(LeafKind::Cpf),
    NodeKind::Leaf(LeafKind::Cnh),
    NodeKind::Leaf(LeafKind::Ctps),
];

/// Predicate a container applies to a candidate child before insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionRule {
    /// Accepts every node.
    Any,
    /// Accepts nodes whose kind is in the whitelist.
    Kinds(&'static [NodeKind]),
    /// Accepts any leaf, whatever its kind or label.
    AnyLeaf,
    /// Accepts leaves whose label is exactly one of the given labels.
    LeafLabeled(&'static [&'static str]),
}

impl AdmissionRule {
    pub fn admits(&self, candidate: &Node) -> bool {
        match self {
            AdmissionRule::Any => true,
            AdmissionRule::Kinds(kinds) => kinds.contains(&candidate.kind()),
            AdmissionRule::AnyLeaf => candidate.is_leaf(),
            AdmissionRule::LeafLabeled(labels) => {
                candidate.is_leaf() && labels.contains(&candidate.label())
            }
        }
    }

    /// Human-readable description of what the rule accepts.
    pub fn describe(&self) -> String {
        match self {
            AdmissionRule::Any => "any component".to_string(),
            AdmissionRule::Kinds(kinds) => kinds.iter().join(", "),
            AdmissionRule::AnyLeaf => "any leaf".to_string(),
            AdmissionRule::LeafLabeled(labels) => format!(
                "leaves labelled {}",
                labels.iter().map(|l| format!("'{}'", l)).join(" or ")
            ),
        }
    }
}

/// Closed set of container kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// Unconstrained container, labelled by the caller.
    Root,
    PersonalData,
    EmploymentData,
    Address,
    Documents,
    Dependents,
    Contacts,
    JobInfo,
}

impl SectionKind {
    /// Fixed label of the kind; `None` for the root.
    pub fn label(self) -> Option<&'static str> {
        match self {
            SectionKind::Root => None,
            SectionKind::PersonalData => Some("Dados Pessoais"),
            SectionKind::EmploymentData => Some("Dados Admissional"),
            SectionKind::Address => Some("Endereço"),
            SectionKind::Documents => Some("Documentos"),
            SectionKind::Dependents => Some("Dependentes"),
            SectionKind::Contacts => Some("Contatos"),
            SectionKind::JobInfo => Some("Informações de Cargo"),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SectionKind::Root => "Section",
            SectionKind::PersonalData => "PersonalData",
            SectionKind::EmploymentData => "EmploymentData",
            SectionKind::Address => "Address",
            SectionKind::Documents => "Documents",
            SectionKind::Dependents => "Dependents",
            SectionKind::Contacts => "Contacts",
            SectionKind::JobInfo => "JobInfo",
        }
    }

    pub fn rule(self) -> AdmissionRule {
        match self {
            SectionKind::Root => AdmissionRule::Any,
            SectionKind::PersonalData => AdmissionRule::Kinds(PERSONAL_DATA_KINDS),
            SectionKind::EmploymentData => AdmissionRule::Kinds(EMPLOYMENT_DATA_KINDS),
            SectionKind::Address => AdmissionRule::LeafLabeled(ADDRESS_LABELS),
            SectionKind::Documents => AdmissionRule::Kinds(DOCUMENT_KINDS),
            SectionKind::Dependents | SectionKind::Contacts | SectionKind::JobInfo => {
                AdmissionRule::AnyLeaf
            }
        }
    }
}

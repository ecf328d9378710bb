//! Assembly of the employee dossier tree from a data record.
//!
//! The default record reproduces the sample employee used for demonstrations.
//! A TOML file with the same shape can override any part of it.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{Container, Leaf, SectionKind};

/// Label of the dossier's root container.
pub const ROOT_LABEL: &str = "CADASTRO COMPLETO DO COLABORADOR";

/// Positions of the sections among the root's children.
pub const PERSONAL_DATA_POS: isize = 2;
pub const EMPLOYMENT_DATA_POS: isize = 3;
pub const ADDRESS_POS: isize = 4;
pub const DOCUMENTS_POS: isize = 5;

/// Free-form labelled entry, rendered as a generic leaf.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    pub label: String,
    pub value: String,
}

impl Entry {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    fn to_leaf(&self) -> Leaf {
        Leaf::with_value(self.label.as_str(), self.value.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PersonalData {
    pub full_name: String,
    pub phone: String,
    pub contacts: Vec<Entry>,
    pub dependents: Vec<Entry>,
}

impl Default for PersonalData {
    fn default() -> Self {
        Self {
            full_name: "Fulano de Tal".into(),
            phone: "(31) 98765-4321".into(),
            contacts: vec![Entry::new("Email", "colaborador@empresa.com.br")],
            dependents: vec![Entry::new("Dependente 1", "João Silva")],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EmploymentData {
    pub admission_date: String,
    pub salary: String,
    pub job: Vec<Entry>,
}

impl Default for EmploymentData {
    fn default() -> Self {
        Self {
            admission_date: "2024-01-15".into(),
            salary: "R$ 5.000,00".into(),
            job: vec![Entry::new("Função", "Analista de RH")],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Documents {
    pub rg: String,
    pub cpf: String,
    pub cnh: String,
    pub ctps: String,
}

impl Default for Documents {
    fn default() -> Self {
        Self {
            rg: "MG-12.345.678".into(),
            cpf: "123.456.789-00".into(),
            cnh: "00000000000".into(),
            ctps: "987654".into(),
        }
    }
}

/// Everything needed to assemble one dossier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DossierData {
    pub client_id: String,
    pub registration_date: String,
    pub personal: PersonalData,
    pub employment: EmploymentData,
    /// Address entries; labels must be accepted by the address section.
    pub address: Vec<Entry>,
    pub documents: Documents,
}

impl Default for DossierData {
    fn default() -> Self {
        Self {
            client_id: "C001".into(),
            registration_date: "2024-01-01".into(),
            personal: PersonalData::default(),
            employment: EmploymentData::default(),
            address: vec![
                Entry::new("Residencial", "Rua das Flores, 100"),
                Entry::new("Comercial", "Av. Brasil, 500"),
            ],
            documents: Documents::default(),
        }
    }
}

impl DossierData {
    /// Load a data record from a TOML file. Missing fields keep their defaults.
    #[instrument(level = "debug")]
    pub fn load(path: &Path) -> ApplicationResult<Self> {
        let content = std::fs::read_to_string(path)
            .with_path_context("read dossier data", path)?;
        toml::from_str(&content).map_err(|e| ApplicationError::Data {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Build the dossier tree bottom-up, validating every insertion.
#[instrument(level = "debug", skip(data))]
pub fn build_dossier(data: &DossierData) -> ApplicationResult<Container> {
    let mut documents = Container::documents();
    documents.add(Leaf::rg(data.documents.rg.as_str()))?;
    documents.add(Leaf::cpf(data.documents.cpf.as_str()))?;
    documents.add(Leaf::cnh(data.documents.cnh.as_str()))?;
    documents.add(Leaf::ctps(data.documents.ctps.as_str()))?;

    let mut address = Container::address();
    for entry in &data.address {
        address.add(entry.to_leaf())?;
    }

    let mut job_info = Container::job_info();
    for entry in &data.employment.job {
        job_info.add(entry.to_leaf())?;
    }

    let mut employment = Container::employment_data();
    employment.add(Leaf::admission_date(data.employment.admission_date.as_str()))?;
    employment.add(Leaf::base_salary(data.employment.salary.as_str()))?;
    employment.add(job_info)?;

    let mut dependents = Container::dependents();
    for entry in &data.personal.dependents {
        dependents.add(entry.to_leaf())?;
    }

    let mut contacts = Container::contacts();
    for entry in &data.personal.contacts {
        contacts.add(entry.to_leaf())?;
    }

    let mut personal = Container::personal_data();
    personal.add(Leaf::full_name(data.personal.full_name.as_str()))?;
    personal.add(Leaf::phone(data.personal.phone.as_str()))?;
    personal.add(contacts)?;
    personal.add(dependents)?;

    let mut root = Container::root(ROOT_LABEL);
    root.add(Leaf::client_id(data.client_id.as_str()))?;
    root.add(Leaf::registration_date(data.registration_date.as_str()))?;
    root.add(personal)?;
    root.add(employment)?;
    root.add(address)?;
    root.add(documents)?;

    debug!(children = root.len(), "dossier assembled");
    Ok(root)
}

/// Section of the expected kind at `position` among the root's children.
pub fn section_mut(
    root: &mut Container,
    position: isize,
    kind: SectionKind,
) -> ApplicationResult<&mut Container> {
    let node = root.get_mut(position)?;
    let found = node.kind();
    match node.as_container_mut() {
        Some(section) if section.kind() == kind => Ok(section),
        _ => Err(ApplicationError::Layout {
            index: position,
            message: format!("expected {}, found {}", kind.name(), found),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dossier_layout() {
        let mut root = build_dossier(&DossierData::default()).unwrap();
        let sections = [
            (PERSONAL_DATA_POS, SectionKind::PersonalData),
            (EMPLOYMENT_DATA_POS, SectionKind::EmploymentData),
            (ADDRESS_POS, SectionKind::Address),
            (DOCUMENTS_POS, SectionKind::Documents),
        ];

        assert_eq!(root.len(), 6);
        for (position, kind) in sections {
            assert!(section_mut(&mut root, position, kind).is_ok());
        }
    }

    #[test]
    fn test_section_mut_reports_layout_mismatch() {
        let mut root = build_dossier(&DossierData::default()).unwrap();
        let err = section_mut(&mut root, 0, SectionKind::Documents).unwrap_err();
        assert!(matches!(err, ApplicationError::Layout { index: 0, .. }));
        assert!(err.to_string().contains("found ClientId"));
    }

    #[test]
    fn test_section_mut_propagates_index_error() {
        let mut root = build_dossier(&DossierData::default()).unwrap();
        let err = section_mut(&mut root, 99, SectionKind::Documents).unwrap_err();
        assert!(matches!(err, ApplicationError::Domain(_)));
    }
}

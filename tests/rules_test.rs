//! Tests for per-section admission rules

use rstest::rstest;

use dossier::domain::{Container, DomainError, Leaf, Node, SectionKind};

fn leaf(label: &str) -> Node {
    Leaf::new(label).into()
}

// ============================================================
// Whitelist enforcement
// ============================================================

#[rstest]
#[case::personal_name(SectionKind::PersonalData, Leaf::full_name("Fulano").into())]
#[case::personal_phone(SectionKind::PersonalData, Leaf::phone("(31) 1").into())]
#[case::personal_dependents(SectionKind::PersonalData, Container::dependents().into())]
#[case::personal_contacts(SectionKind::PersonalData, Container::contacts().into())]
#[case::employment_admission(SectionKind::EmploymentData, Leaf::admission_date("2024-01-15").into())]
#[case::employment_salary(SectionKind::EmploymentData, Leaf::base_salary("R$ 1").into())]
#[case::employment_job(SectionKind::EmploymentData, Container::job_info().into())]
#[case::address_residencial(SectionKind::Address, leaf("Residencial"))]
#[case::address_comercial(SectionKind::Address, leaf("Comercial"))]
#[case::address_residential(SectionKind::Address, leaf("Residential"))]
#[case::address_commercial(SectionKind::Address, leaf("Commercial"))]
#[case::address_typed_leaf(SectionKind::Address, Leaf::with_value("Residencial", "Rua A").into())]
#[case::documents_rg(SectionKind::Documents, Leaf::rg("1").into())]
#[case::documents_cpf(SectionKind::Documents, Leaf::cpf("1").into())]
#[case::documents_cnh(SectionKind::Documents, Leaf::cnh("1").into())]
#[case::documents_ctps(SectionKind::Documents, Leaf::ctps("1").into())]
#[case::dependents_generic(SectionKind::Dependents, leaf("Dependente 1"))]
#[case::contacts_generic(SectionKind::Contacts, leaf("Email"))]
#[case::job_generic(SectionKind::JobInfo, leaf("Função"))]
#[case::root_leaf(SectionKind::Root, leaf("anything"))]
#[case::root_section(SectionKind::Root, Container::documents().into())]
fn given_allowed_candidate_when_adding_then_accepted(
    #[case] kind: SectionKind,
    #[case] candidate: Node,
) {
    let mut section = Container::section(kind);

    section.add(candidate).unwrap();

    assert_eq!(section.len(), 1);
}

#[rstest]
#[case::personal_generic(SectionKind::PersonalData, leaf("Pet"), "Leaf")]
#[case::personal_client_id(SectionKind::PersonalData, Leaf::client_id("INV").into(), "ClientId")]
#[case::personal_salary(SectionKind::PersonalData, Leaf::base_salary("R$ 10.000").into(), "BaseSalary")]
#[case::personal_job(SectionKind::PersonalData, Container::job_info().into(), "JobInfo")]
#[case::employment_name(SectionKind::EmploymentData, Leaf::full_name("x").into(), "FullName")]
#[case::employment_contacts(SectionKind::EmploymentData, Container::contacts().into(), "Contacts")]
#[case::address_office(SectionKind::Address, leaf("Office"), "Leaf")]
#[case::address_case_sensitive(SectionKind::Address, leaf("residencial"), "Leaf")]
#[case::address_container(SectionKind::Address, Container::root("Residencial").into(), "Section")]
#[case::documents_generic(SectionKind::Documents, leaf("Random"), "Leaf")]
#[case::documents_label_only(SectionKind::Documents, leaf("RG"), "Leaf")]
#[case::documents_phone(SectionKind::Documents, Leaf::phone("1").into(), "Phone")]
#[case::dependents_section(SectionKind::Dependents, Container::contacts().into(), "Contacts")]
#[case::contacts_section(SectionKind::Contacts, Container::dependents().into(), "Dependents")]
#[case::job_section(SectionKind::JobInfo, Container::documents().into(), "Documents")]
fn given_disallowed_candidate_when_adding_then_rejected_with_context(
    #[case] kind: SectionKind,
    #[case] candidate: Node,
    #[case] kind_name: &str,
) {
    let mut section = Container::section(kind);
    let label = section.label().to_string();

    let err = section.add(candidate).unwrap_err();

    let expected = DomainError::InvalidChildType {
        container: label.clone(),
        kind: kind_name.to_string(),
        expected: section.rule().describe(),
    };
    assert_eq!(err, expected);
    assert!(err.to_string().contains(&label));
    assert!(section.is_empty());
}

// ============================================================
// Sub-section asymmetry
// ============================================================

#[test]
fn given_arbitrary_leaf_when_added_to_dependents_then_accepted_although_parent_rejects_it() {
    let mut personal = Container::personal_data();
    let mut dependents = Container::dependents();

    dependents.add(Leaf::new("Pet")).unwrap();
    let direct = personal.add(Leaf::new("Pet"));
    personal.add(dependents).unwrap();

    assert!(matches!(direct, Err(DomainError::InvalidChildType { .. })));
    assert_eq!(personal.len(), 1);
    assert_eq!(
        personal.render(0),
        "* DADOS PESSOAIS *\n    * DEPENDENTES *\n        - Pet"
    );
}

#[test]
fn given_typed_leaf_when_added_to_sub_section_then_any_leaf_kind_is_accepted() {
    let mut contacts = Container::contacts();

    contacts.add(Leaf::phone("(31) 98765-4321")).unwrap();

    assert_eq!(contacts.len(), 1);
}

#[test]
fn given_section_kinds_when_constructed_then_labels_and_rules_are_fixed() {
    assert_eq!(Container::personal_data().label(), "Dados Pessoais");
    assert_eq!(Container::employment_data().label(), "Dados Admissional");
    assert_eq!(Container::address().label(), "Endereço");
    assert_eq!(Container::documents().label(), "Documentos");
    assert_eq!(Container::dependents().label(), "Dependentes");
    assert_eq!(Container::contacts().label(), "Contatos");
    assert_eq!(Container::job_info().label(), "Informações de Cargo");
    assert_eq!(Container::documents().rule(), SectionKind::Documents.rule());
}

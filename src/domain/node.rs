//! Tree nodes: identity, scalar values, leaves and the `Node` sum type.

use std::fmt;

use uuid::Uuid;

use crate::domain::container::Container;
use crate::domain::rules::SectionKind;

/// One level of indentation in rendered output.
pub const INDENT_UNIT: &str = "    ";
/// Prefix of a rendered leaf line.
pub const LEAF_MARKER: &str = "-";
/// Delimiter around a rendered container header.
pub const CONTAINER_MARKER: &str = "*";

pub(crate) fn indent(depth: usize) -> String {
    INDENT_UNIT.repeat(depth)
}

/// Identity of a node, assigned at construction.
///
/// Nodes are not `Clone`, so an id names exactly one node in any tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(Uuid);

impl NodeId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Scalar payload of a leaf.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Integer(i64),
    Decimal(f64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{}", s),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Decimal(x) => write!(f, "{}", x),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Decimal(x)
    }
}

/// Closed set of leaf kinds.
///
/// Every kind except `Generic` carries a fixed label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafKind {
    Generic,
    ClientId,
    RegistrationDate,
    FullName,
    Phone,
    AdmissionDate,
    BaseSalary,
    Rg,
    Cpf,
    Cnh,
    Ctps,
}

impl LeafKind {
    /// Fixed label for typed kinds, `None` for generic leaves.
    pub fn label(self) -> Option<&'static str> {
        match self {
            LeafKind::Generic => None,
            LeafKind::ClientId => Some("ID do Cliente"),
            LeafKind::RegistrationDate => Some("Data de Cadastro"),
            LeafKind::FullName => Some("Nome Completo"),
            LeafKind::Phone => Some("Telefone"),
            LeafKind::AdmissionDate => Some("Data de Admissão"),
            LeafKind::BaseSalary => Some("Salário Base"),
            LeafKind::Rg => Some("RG"),
            LeafKind::Cpf => Some("CPF"),
            LeafKind::Cnh => Some("CNH"),
            LeafKind::Ctps => Some("CTPS"),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LeafKind::Generic => "Leaf",
            LeafKind::ClientId => "ClientId",
            LeafKind::RegistrationDate => "RegistrationDate",
            LeafKind::FullName => "FullName",
            LeafKind::Phone => "Phone",
            LeafKind::AdmissionDate => "AdmissionDate",
            LeafKind::BaseSalary => "BaseSalary",
            LeafKind::Rg => "Rg",
            LeafKind::Cpf => "Cpf",
            LeafKind::Cnh => "Cnh",
            LeafKind::Ctps => "Ctps",
        }
    }
}

/// Terminal node: a label and an optional value.
#[derive(Debug)]
pub struct Leaf {
    id: NodeId,
    kind: LeafKind,
    label: String,
    value: Option<Value>,
}

impl Leaf {
    /// Generic leaf without a value.
    pub fn new(label: impl Into<String>) -> Self {
        Self::build(LeafKind::Generic, label.into(), None)
    }

    /// Generic leaf with a value.
    pub fn with_value(label: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::build(LeafKind::Generic, label.into(), Some(value.into()))
    }

    /// Leaf of a typed kind, labelled with the kind's fixed label.
    pub fn typed(kind: LeafKind, value: impl Into<Value>) -> Self {
        let label = kind.label().unwrap_or(kind.name()).to_string();
        Self::build(kind, label, Some(value.into()))
    }

    pub fn client_id(value: impl Into<Value>) -> Self {
        Self::typed(LeafKind::ClientId, value)
    }

    pub fn registration_date(value: impl Into<Value>) -> Self {
        Self::typed(LeafKind::RegistrationDate, value)
    }

    pub fn full_name(value: impl Into<Value>) -> Self {
        Self::typed(LeafKind::FullName, value)
    }

    pub fn phone(value: impl Into<Value>) -> Self {
        Self::typed(LeafKind::Phone, value)
    }

    pub fn admission_date(value: impl Into<Value>) -> Self {
        Self::typed(LeafKind::AdmissionDate, value)
    }

    pub fn base_salary(value: impl Into<Value>) -> Self {
        Self::typed(LeafKind::BaseSalary, value)
    }

    pub fn rg(value: impl Into<Value>) -> Self {
        Self::typed(LeafKind::Rg, value)
    }

    pub fn cpf(value: impl Into<Value>) -> Self {
        Self::typed(LeafKind::Cpf, value)
    }

    pub fn cnh(value: impl Into<Value>) -> Self {
        Self::typed(LeafKind::Cnh, value)
    }

    pub fn ctps(value: impl Into<Value>) -> Self {
        Self::typed(LeafKind::Ctps, value)
    }

    fn build(kind: LeafKind, label: String, value: Option<Value>) -> Self {
        Self {
            id: NodeId::new(),
            kind,
            label,
            value,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> LeafKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Label plus `": value"` when a value is present.
    pub(crate) fn caption(&self) -> String {
        match &self.value {
            Some(value) => format!("{}: {}", self.label, value),
            None => self.label.clone(),
        }
    }

    pub fn render(&self, depth: usize) -> String {
        format!("{}{} {}", indent(depth), LEAF_MARKER, self.caption())
    }
}

/// Dynamic kind of a node, used by admission rules and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Leaf(LeafKind),
    Container(SectionKind),
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Leaf(kind) => write!(f, "{}", kind.name()),
            NodeKind::Container(kind) => write!(f, "{}", kind.name()),
        }
    }
}

/// Any element of the tree.
#[derive(Debug)]
pub enum Node {
    Leaf(Leaf),
    Container(Container),
}

impl Node {
    pub fn id(&self) -> NodeId {
        match self {
            Node::Leaf(leaf) => leaf.id(),
            Node::Container(container) => container.id(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Node::Leaf(leaf) => leaf.label(),
            Node::Container(container) => container.label(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Leaf(leaf) => NodeKind::Leaf(leaf.kind()),
            Node::Container(container) => NodeKind::Container(container.kind()),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Node::Leaf(leaf) => Some(leaf),
            Node::Container(_) => None,
        }
    }

    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Node::Container(container) => Some(container),
            Node::Leaf(_) => None,
        }
    }

    pub fn as_container_mut(&mut self) -> Option<&mut Container> {
        match self {
            Node::Container(container) => Some(container),
            Node::Leaf(_) => None,
        }
    }

    /// Renders this node and its descendants, indented by `depth` levels.
    pub fn render(&self, depth: usize) -> String {
        match self {
            Node::Leaf(leaf) => leaf.render(depth),
            Node::Container(container) => container.render(depth),
        }
    }
}

impl From<Leaf> for Node {
    fn from(leaf: Leaf) -> Self {
        Node::Leaf(leaf)
    }
}

impl From<Container> for Node {
    fn from(container: Container) -> Self {
        Node::Container(container)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(0))
    }
}

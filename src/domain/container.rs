//! Container node: ordered children guarded by an admission rule.

use std::slice;

use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::{indent, Node, NodeId, CONTAINER_MARKER};
use crate::domain::rules::{AdmissionRule, SectionKind};

/// Internal node of the dossier tree.
///
/// One type serves every section kind; the kind fixes the label and the
/// admission rule at construction and neither changes afterwards.
/// Children are owned exclusively, so a node has at most one parent and
/// the tree cannot contain cycles.
#[derive(Debug)]
pub struct Container {
    id: NodeId,
    kind: SectionKind,
    label: String,
    rule: AdmissionRule,
    children: Vec<Node>,
}

impl Container {
    /// Unconstrained container with a caller-chosen label.
    pub fn root(label: impl Into<String>) -> Self {
        Self::build(SectionKind::Root, label.into())
    }

    /// Container of the given kind, labelled with the kind's fixed label.
    pub fn section(kind: SectionKind) -> Self {
        let label = kind.label().unwrap_or(kind.name()).to_string();
        Self::build(kind, label)
    }

    pub fn personal_data() -> Self {
        Self::section(SectionKind::PersonalData)
    }

    pub fn employment_data() -> Self {
        Self::section(SectionKind::EmploymentData)
    }

    pub fn address() -> Self {
        Self::section(SectionKind::Address)
    }

    pub fn documents() -> Self {
        Self::section(SectionKind::Documents)
    }

    pub fn dependents() -> Self {
        Self::section(SectionKind::Dependents)
    }

    pub fn contacts() -> Self {
        Self::section(SectionKind::Contacts)
    }

    pub fn job_info() -> Self {
        Self::section(SectionKind::JobInfo)
    }

    fn build(kind: SectionKind, label: String) -> Self {
        Self {
            id: NodeId::new(),
            kind,
            label,
            rule: kind.rule(),
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn rule(&self) -> AdmissionRule {
        self.rule
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether `candidate` would be accepted by `add`.
    pub fn admits(&self, candidate: &Node) -> bool {
        self.rule.admits(candidate)
    }

    /// Appends `child` if the admission rule accepts it.
    ///
    /// On rejection the container is left untouched and the child is dropped;
    /// use [`Container::admits`] first to keep ownership of a rejected node.
    #[instrument(level = "trace", skip(self, child), fields(section = %self.label))]
    pub fn add(&mut self, child: impl Into<Node>) -> DomainResult<()> {
        let child = child.into();
        if !self.rule.admits(&child) {
            debug!(kind = %child.kind(), label = child.label(), "rejected child");
            return Err(DomainError::InvalidChildType {
                container: self.label.clone(),
                kind: child.kind().to_string(),
                expected: self.rule.describe(),
            });
        }
        debug!(kind = %child.kind(), label = child.label(), "added child");
        self.children.push(child);
        Ok(())
    }

    /// Removes the first child with identity `id`. Returns whether one was removed.
    #[instrument(level = "trace", skip(self), fields(section = %self.label))]
    pub fn remove(&mut self, id: NodeId) -> bool {
        self.take(id).is_some()
    }

    /// Removes the child with identity `id` and hands it back.
    #[instrument(level = "trace", skip(self), fields(section = %self.label))]
    pub fn take(&mut self, id: NodeId) -> Option<Node> {
        let pos = self.children.iter().position(|c| c.id() == id)?;
        Some(self.children.remove(pos))
    }

    #[instrument(level = "trace", skip(self), fields(section = %self.label))]
    pub fn get(&self, index: isize) -> DomainResult<&Node> {
        let pos = self.position(index)?;
        Ok(&self.children[pos])
    }

    #[instrument(level = "trace", skip(self), fields(section = %self.label))]
    pub fn get_mut(&mut self, index: isize) -> DomainResult<&mut Node> {
        let pos = self.position(index)?;
        Ok(&mut self.children[pos])
    }

    fn position(&self, index: isize) -> DomainResult<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&pos| pos < self.children.len())
            .ok_or_else(|| DomainError::IndexOutOfRange {
                index,
                label: self.label.clone(),
                count: self.children.len(),
            })
    }

    /// Children in insertion order. Each call starts a fresh traversal.
    pub fn iter(&self) -> slice::Iter<'_, Node> {
        self.children.iter()
    }

    /// Renders the header line and every child one level deeper.
    pub fn render(&self, depth: usize) -> String {
        let mut out = format!(
            "{}{} {} {}",
            indent(depth),
            CONTAINER_MARKER,
            self.label.to_uppercase(),
            CONTAINER_MARKER
        );
        for child in &self.children {
            out.push('\n');
            out.push_str(&child.render(depth + 1));
        }
        out
    }
}

impl<'a> IntoIterator for &'a Container {
    type Item = &'a Node;
    type IntoIter = slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

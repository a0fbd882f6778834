use std::{fs, path::Path};

use recshape::{Annotation, Constant, Diagnostic, SymbolAdapter};

use crate::error::SynAdapterError;
use crate::lower::{MethodDecl, TraitDecl, lower_file};
use crate::types::{SourceSite, SynType};

/// Handle to a trait loaded by a [`SynAdapter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TraitId(usize);

/// Handle to a method of a loaded trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FnId {
    owner: TraitId,
    index: usize,
}

impl FnId {
    pub fn owner(&self) -> TraitId {
        self.owner
    }
}

/// Serves the traits of one Rust source file as interface descriptions.
///
/// * methods without a receiver are static,
/// * methods with a body are default methods,
/// * `#[ignore_default]` keeps a default method out of the record,
/// * `#[initializer(name)]` names an associated function or const providing the initial value.
///
/// Diagnostics are kept in memory, see [`SynAdapter::reported`].
pub struct SynAdapter {
    traits: Vec<TraitDecl>,
    reported: Vec<Diagnostic<SourceSite>>,
}

impl SynAdapter {
    /// Parses Rust source text.
    ///
    /// # Errors
    ///
    /// Returns [`SynAdapterError::Parse`] if the source is not a valid Rust file.
    pub fn parse(source: &str) -> Result<Self, SynAdapterError> {
        let file = syn::parse_file(source)?;
        Ok(Self::from_file(&file))
    }

    /// Reads and parses a Rust source file.
    ///
    /// # Errors
    ///
    /// Returns [`SynAdapterError::Io`] if the file cannot be read and
    /// [`SynAdapterError::Parse`] if it is not valid Rust.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SynAdapterError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| SynAdapterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source)
    }

    pub fn from_file(file: &syn::File) -> Self {
        let traits = lower_file(file);
        tracing::debug!(traits = traits.len(), "loaded trait declarations");
        SynAdapter {
            traits,
            reported: Vec::new(),
        }
    }

    /// Looks a trait up by qualified path, or by simple name when that is unambiguous.
    pub fn find(&self, name: &str) -> Option<TraitId> {
        if let Some(i) = self.traits.iter().position(|t| t.qualified_name == name) {
            return Some(TraitId(i));
        }
        let mut matches = self
            .traits
            .iter()
            .enumerate()
            .filter(|(_, t)| t.simple_name == name);
        match (matches.next(), matches.next()) {
            (Some((i, _)), None) => Some(TraitId(i)),
            _ => None,
        }
    }

    /// Every loaded trait, in source order.
    pub fn traits(&self) -> impl Iterator<Item = TraitId> + '_ {
        (0..self.traits.len()).map(TraitId)
    }

    pub fn reported(&self) -> &[Diagnostic<SourceSite>] {
        &self.reported
    }

    pub fn take_reported(&mut self) -> Vec<Diagnostic<SourceSite>> {
        std::mem::take(&mut self.reported)
    }

    /// Reported diagnostics formatted for terminal output.
    pub fn render_reported(&self) -> Vec<String> {
        self.reported
            .iter()
            .map(|d| format!("{}: {}\n  --> {}", d.severity, d.error, d.site))
            .collect()
    }

    fn decl(&self, id: &TraitId) -> &TraitDecl {
        &self.traits[id.0]
    }

    fn method_decl(&self, id: &FnId) -> &MethodDecl {
        &self.decl(&id.owner).methods[id.index]
    }
}

impl SymbolAdapter for SynAdapter {
    type Interface = TraitId;
    type Method = FnId;
    type Type = SynType;
    type Site = SourceSite;

    fn qualified_name(&self, iface: &TraitId) -> String {
        self.decl(iface).qualified_name.clone()
    }

    fn simple_name(&self, iface: &TraitId) -> String {
        self.decl(iface).simple_name.clone()
    }

    fn type_parameters(&self, iface: &TraitId) -> Vec<SynType> {
        self.decl(iface).type_parameters.clone()
    }

    fn direct_supertypes(&self, iface: &TraitId) -> Vec<TraitId> {
        self.decl(iface)
            .supertypes
            .iter()
            .copied()
            .map(TraitId)
            .collect()
    }

    fn declared_methods(&self, iface: &TraitId) -> Vec<FnId> {
        (0..self.decl(iface).methods.len())
            .map(|index| FnId {
                owner: *iface,
                index,
            })
            .collect()
    }

    fn declared_constants(&self, iface: &TraitId) -> Vec<Constant<SynType>> {
        self.decl(iface).constants.clone()
    }

    fn method_name(&self, method: &FnId) -> String {
        self.method_decl(method).name.clone()
    }

    fn is_static(&self, method: &FnId) -> bool {
        self.method_decl(method).is_static
    }

    fn is_default(&self, method: &FnId) -> bool {
        self.method_decl(method).is_default
    }

    fn parameters(&self, method: &FnId) -> Vec<SynType> {
        self.method_decl(method).parameters.clone()
    }

    fn return_type(&self, method: &FnId) -> SynType {
        self.method_decl(method).return_type.clone()
    }

    fn method_type_parameters(&self, method: &FnId) -> Vec<SynType> {
        self.method_decl(method).type_parameters.clone()
    }

    fn has_annotation(&self, method: &FnId, annotation: Annotation) -> bool {
        match annotation {
            Annotation::IgnoreDefault => self.method_decl(method).ignore_default,
        }
    }

    fn initializer_name(&self, method: &FnId) -> Option<String> {
        self.method_decl(method).initializer.clone()
    }

    fn interface_site(&self, iface: &TraitId) -> SourceSite {
        self.decl(iface).site.clone()
    }

    fn method_site(&self, method: &FnId) -> SourceSite {
        self.method_decl(method).site.clone()
    }

    fn report(&mut self, diagnostic: Diagnostic<SourceSite>) {
        self.reported.push(diagnostic);
    }
}

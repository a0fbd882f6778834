use core::fmt::{self, Display};

use crate::adapter::{Annotation, Constant, SymbolAdapter, TypeExpr};
use crate::errors::Diagnostic;

/// A named type in a [`MemoryAdapter`] graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemoryType(String);

impl MemoryType {
    const VOID: &'static str = "void";

    pub fn new(name: impl Into<String>) -> Self {
        MemoryType(name.into())
    }

    pub fn void() -> Self {
        MemoryType(Self::VOID.to_string())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MemoryType {
    fn from(name: &str) -> Self {
        MemoryType::new(name)
    }
}

impl Display for MemoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TypeExpr for MemoryType {
    fn is_void(&self) -> bool {
        self.0 == Self::VOID
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InterfaceId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MethodId {
    interface: InterfaceId,
    index: usize,
}

impl MethodId {
    pub fn interface(&self) -> InterfaceId {
        self.interface
    }

    /// Position of the method in its interface's declaration order.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Where a [`MemoryAdapter`] diagnostic points to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MemorySite {
    Interface(String),
    Method { interface: String, method: String },
}

/// A method declaration in a [`MemoryAdapter`] graph.
///
/// Starts as a public, abstract, non-generic method; the builder methods adjust that.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDecl {
    name: String,
    return_type: MemoryType,
    parameters: Vec<MemoryType>,
    type_parameters: Vec<MemoryType>,
    annotations: Vec<Annotation>,
    initializer: Option<String>,
    is_static: bool,
    is_default: bool,
    is_public: bool,
}

impl MethodDecl {
    pub fn new(name: impl Into<String>, return_type: impl Into<MemoryType>) -> Self {
        MethodDecl {
            name: name.into(),
            return_type: return_type.into(),
            parameters: Vec::new(),
            type_parameters: Vec::new(),
            annotations: Vec::new(),
            initializer: None,
            is_static: false,
            is_default: false,
            is_public: true,
        }
    }

    pub fn parameter(mut self, ty: impl Into<MemoryType>) -> Self {
        self.parameters.push(ty.into());
        self
    }

    pub fn type_parameter(mut self, name: impl Into<MemoryType>) -> Self {
        self.type_parameters.push(name.into());
        self
    }

    pub fn annotated(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn initializer(mut self, target: impl Into<String>) -> Self {
        self.initializer = Some(target.into());
        self
    }

    pub fn static_method(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn default_method(mut self) -> Self {
        self.is_default = true;
        self
    }

    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }
}

#[derive(Debug, Clone)]
struct InterfaceDecl {
    qualified_name: String,
    type_parameters: Vec<MemoryType>,
    supertypes: Vec<InterfaceId>,
    methods: Vec<MethodDecl>,
    constants: Vec<Constant<MemoryType>>,
}

/// An in-memory interface graph.
///
/// Useful for hosts that assemble interface descriptions programmatically and for tests.
/// Reported diagnostics are kept in memory and can be inspected with [`MemoryAdapter::reported`].
#[derive(Debug, Default)]
pub struct MemoryAdapter {
    interfaces: Vec<InterfaceDecl>,
    reported: Vec<Diagnostic<MemorySite>>,
}

impl MemoryAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a new interface. Qualified names use `::` as the path separator.
    pub fn interface(&mut self, qualified_name: impl Into<String>) -> InterfaceId {
        self.interfaces.push(InterfaceDecl {
            qualified_name: qualified_name.into(),
            type_parameters: Vec::new(),
            supertypes: Vec::new(),
            methods: Vec::new(),
            constants: Vec::new(),
        });
        InterfaceId(self.interfaces.len() - 1)
    }

    pub fn type_parameter(&mut self, iface: InterfaceId, name: impl Into<MemoryType>) {
        self.decl_mut(iface).type_parameters.push(name.into());
    }

    pub fn extend(&mut self, iface: InterfaceId, parent: InterfaceId) {
        self.decl_mut(iface).supertypes.push(parent);
    }

    pub fn method(&mut self, iface: InterfaceId, method: MethodDecl) -> MethodId {
        let methods = &mut self.decl_mut(iface).methods;
        methods.push(method);
        MethodId {
            interface: iface,
            index: methods.len() - 1,
        }
    }

    /// Shorthand for a plain accessor: public, abstract, no parameters.
    pub fn accessor(
        &mut self,
        iface: InterfaceId,
        name: impl Into<String>,
        ty: impl Into<MemoryType>,
    ) -> MethodId {
        self.method(iface, MethodDecl::new(name, ty))
    }

    pub fn constant(
        &mut self,
        iface: InterfaceId,
        name: impl Into<String>,
        ty: impl Into<MemoryType>,
    ) {
        self.decl_mut(iface).constants.push(Constant {
            name: name.into(),
            ty: ty.into(),
            is_public: true,
            is_static: true,
            is_final: true,
        });
    }

    /// Diagnostics reported so far, in the order they were received.
    pub fn reported(&self) -> &[Diagnostic<MemorySite>] {
        &self.reported
    }

    pub fn take_reported(&mut self) -> Vec<Diagnostic<MemorySite>> {
        core::mem::take(&mut self.reported)
    }

    /// Messages of the reported diagnostics, in order.
    pub fn messages(&self) -> Vec<String> {
        self.reported.iter().map(Diagnostic::message).collect()
    }

    fn decl(&self, iface: InterfaceId) -> &InterfaceDecl {
        &self.interfaces[iface.0]
    }

    fn decl_mut(&mut self, iface: InterfaceId) -> &mut InterfaceDecl {
        &mut self.interfaces[iface.0]
    }

    fn method_decl(&self, method: &MethodId) -> &MethodDecl {
        &self.decl(method.interface).methods[method.index]
    }
}

impl SymbolAdapter for MemoryAdapter {
    type Interface = InterfaceId;
    type Method = MethodId;
    type Type = MemoryType;
    type Site = MemorySite;

    fn qualified_name(&self, iface: &InterfaceId) -> String {
        self.decl(*iface).qualified_name.clone()
    }

    fn simple_name(&self, iface: &InterfaceId) -> String {
        let qualified = &self.decl(*iface).qualified_name;
        match qualified.rsplit_once(Self::PATH_SEPARATOR) {
            Some((_, simple)) => simple.to_string(),
            None => qualified.clone(),
        }
    }

    fn type_parameters(&self, iface: &InterfaceId) -> Vec<MemoryType> {
        self.decl(*iface).type_parameters.clone()
    }

    fn direct_supertypes(&self, iface: &InterfaceId) -> Vec<InterfaceId> {
        self.decl(*iface).supertypes.clone()
    }

    fn declared_methods(&self, iface: &InterfaceId) -> Vec<MethodId> {
        (0..self.decl(*iface).methods.len())
            .map(|index| MethodId {
                interface: *iface,
                index,
            })
            .collect()
    }

    fn declared_constants(&self, iface: &InterfaceId) -> Vec<Constant<MemoryType>> {
        self.decl(*iface).constants.clone()
    }

    fn method_name(&self, method: &MethodId) -> String {
        self.method_decl(method).name.clone()
    }

    fn is_static(&self, method: &MethodId) -> bool {
        self.method_decl(method).is_static
    }

    fn is_default(&self, method: &MethodId) -> bool {
        self.method_decl(method).is_default
    }

    fn is_public(&self, method: &MethodId) -> bool {
        self.method_decl(method).is_public
    }

    fn parameters(&self, method: &MethodId) -> Vec<MemoryType> {
        self.method_decl(method).parameters.clone()
    }

    fn return_type(&self, method: &MethodId) -> MemoryType {
        self.method_decl(method).return_type.clone()
    }

    fn method_type_parameters(&self, method: &MethodId) -> Vec<MemoryType> {
        self.method_decl(method).type_parameters.clone()
    }

    fn has_annotation(&self, method: &MethodId, annotation: Annotation) -> bool {
        self.method_decl(method).annotations.contains(&annotation)
    }

    fn initializer_name(&self, method: &MethodId) -> Option<String> {
        self.method_decl(method).initializer.clone()
    }

    fn interface_site(&self, iface: &InterfaceId) -> MemorySite {
        MemorySite::Interface(self.qualified_name(iface))
    }

    fn method_site(&self, method: &MethodId) -> MemorySite {
        MemorySite::Method {
            interface: self.qualified_name(&method.interface),
            method: self.method_name(method),
        }
    }

    fn report(&mut self, diagnostic: Diagnostic<MemorySite>) {
        self.reported.push(diagnostic);
    }
}

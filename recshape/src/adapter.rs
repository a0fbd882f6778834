use core::fmt::{Debug, Display};

use crate::errors::Diagnostic;

/// A type expression handed out by a [`SymbolAdapter`].
///
/// The engine only needs to render, compare and ask whether the type is `void`.
pub trait TypeExpr: Clone + PartialEq + Display + Debug {
    /// Returns `true` for the unit/void type, which can never be a component type.
    fn is_void(&self) -> bool;
}

/// Annotations the engine understands. Every other annotation on a method is transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Annotation {
    /// Marks a default method that must not become a record component.
    IgnoreDefault,
}

/// A constant declared inside an interface, used as an initializer candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Constant<T> {
    pub name: String,
    pub ty: T,
    pub is_public: bool,
    pub is_static: bool,
    pub is_final: bool,
}

/// Read-through access to the host's interface declarations, plus the diagnostic sink.
///
/// Handles are opaque to the engine: it only clones them and passes them back.
/// Implementations must not validate anything, the engine does that. Lists are
/// returned in declaration order, which is what makes derivations deterministic.
pub trait SymbolAdapter {
    /// Handle to an interface declaration.
    type Interface: Clone;
    /// Handle to a method declared on an interface.
    type Method: Clone;
    /// Handle to a type expression.
    type Type: TypeExpr;
    /// Token identifying a source location, passed back verbatim in diagnostics.
    type Site: Clone + Debug;

    /// Separator between the package part and the simple name of a qualified name.
    const PATH_SEPARATOR: &'static str = "::";

    /// Stable name distinguishing the interface from every other one in a derivation.
    fn qualified_name(&self, iface: &Self::Interface) -> String;

    fn simple_name(&self, iface: &Self::Interface) -> String;

    /// Formal generic parameters of the interface, in order.
    fn type_parameters(&self, iface: &Self::Interface) -> Vec<Self::Type>;

    /// Direct supertypes in declaration order.
    fn direct_supertypes(&self, iface: &Self::Interface) -> Vec<Self::Interface>;

    /// Declared methods in declaration order, without synthetic bridge methods.
    fn declared_methods(&self, iface: &Self::Interface) -> Vec<Self::Method>;

    /// Declared constants in declaration order.
    fn declared_constants(&self, _iface: &Self::Interface) -> Vec<Constant<Self::Type>> {
        Vec::new()
    }

    fn method_name(&self, method: &Self::Method) -> String;

    fn is_static(&self, method: &Self::Method) -> bool;

    /// Whether the method carries an implementation inside the interface.
    fn is_default(&self, method: &Self::Method) -> bool;

    fn is_public(&self, _method: &Self::Method) -> bool {
        true
    }

    /// Parameter types, in order.
    fn parameters(&self, method: &Self::Method) -> Vec<Self::Type>;

    fn return_type(&self, method: &Self::Method) -> Self::Type;

    /// Generic parameters declared on the method itself.
    fn method_type_parameters(&self, method: &Self::Method) -> Vec<Self::Type>;

    fn has_annotation(&self, method: &Self::Method, annotation: Annotation) -> bool;

    /// Name of the member that initializes this component, if the method is annotated with one.
    fn initializer_name(&self, _method: &Self::Method) -> Option<String> {
        None
    }

    fn interface_site(&self, iface: &Self::Interface) -> Self::Site;

    fn method_site(&self, method: &Self::Method) -> Self::Site;

    /// Receives every diagnostic of a derivation, in traversal order.
    fn report(&mut self, diagnostic: Diagnostic<Self::Site>);
}

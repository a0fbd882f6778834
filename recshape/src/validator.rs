use crate::adapter::{Annotation, SymbolAdapter, TypeExpr};
use crate::errors::ShapeError;

/// What the validator decided about one declared method.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict<T> {
    /// The method is a component candidate.
    Accept { name: String, ty: T },
    /// The method is deliberately not a component.
    Skip,
    /// The method breaks the structural contract of record interfaces.
    Reject(ShapeError),
}

/// Classifies `method`, declared on `iface`.
///
/// Static methods and default methods marked [`Annotation::IgnoreDefault`] are skipped.
/// Everything else must be nullary, non-void and free of its own type parameters,
/// whether or not it carries a default implementation. At most one problem is reported
/// per method, signature problems first.
pub fn validate<A: SymbolAdapter>(
    adapter: &A,
    method: &A::Method,
    iface: &A::Interface,
) -> Verdict<A::Type> {
    if adapter.is_static(method) {
        return Verdict::Skip;
    }
    if adapter.is_default(method) && adapter.has_annotation(method, Annotation::IgnoreDefault) {
        return Verdict::Skip;
    }

    let name = adapter.method_name(method);
    let ty = adapter.return_type(method);

    if !adapter.parameters(method).is_empty() || ty.is_void() {
        return Verdict::Reject(ShapeError::Signature {
            interface: adapter.simple_name(iface),
            method: name,
        });
    }
    if !adapter.method_type_parameters(method).is_empty() {
        return Verdict::Reject(ShapeError::GenericMethod {
            interface: adapter.simple_name(iface),
            method: name,
        });
    }

    Verdict::Accept { name, ty }
}

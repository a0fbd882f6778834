use crate::adapter::SymbolAdapter;
use crate::shape::{Initializer, InitializerKind};

/// Finds the member of `iface` named `target` that can initialize a component of type `ty`.
///
/// Static methods are searched before constants, each in declaration order.
/// Methods must be public, static and return `ty`; constants must be public,
/// static, final and of type `ty`.
pub fn resolve<A: SymbolAdapter>(
    adapter: &A,
    iface: &A::Interface,
    target: &str,
    ty: &A::Type,
) -> Option<Initializer> {
    let method = adapter.declared_methods(iface).into_iter().find(|m| {
        adapter.is_static(m)
            && adapter.is_public(m)
            && adapter.method_name(m) == target
            && adapter.return_type(m) == *ty
    });
    if method.is_some() {
        return Some(Initializer {
            kind: InitializerKind::Method,
            name: target.to_string(),
        });
    }

    adapter
        .declared_constants(iface)
        .into_iter()
        .find(|c| c.is_public && c.is_static && c.is_final && c.name == target && c.ty == *ty)
        .map(|c| Initializer {
            kind: InitializerKind::Constant,
            name: c.name,
        })
}

use std::collections::{HashMap, HashSet};

use crate::adapter::{SymbolAdapter, TypeExpr};
use crate::config::OverridePolicy;
use crate::errors::{Diagnostics, ShapeError};
use crate::initializer;
use crate::shape::Component;
use crate::validator::{Verdict, validate};

/// Components and diagnostics collected by one traversal.
pub struct Walk<A: SymbolAdapter> {
    pub components: Vec<Component<A::Type, A::Method>>,
    pub diagnostics: Diagnostics<A::Site>,
}

struct Seen<T> {
    ty: T,
    interface: String,
}

/// Depth-first, pre-order traversal of an interface and its supertypes.
///
/// Each interface is visited once per walk. Components are kept in the order they are
/// first seen; a name seen again further down the graph is dropped.
pub struct Walker<'a, A: SymbolAdapter> {
    adapter: &'a A,
    policy: OverridePolicy,
    visited: HashSet<String>,
    used: HashMap<String, Seen<A::Type>>,
    components: Vec<Component<A::Type, A::Method>>,
    diagnostics: Diagnostics<A::Site>,
}

impl<'a, A: SymbolAdapter> Walker<'a, A> {
    pub fn new(adapter: &'a A, policy: OverridePolicy) -> Self {
        Walker {
            adapter,
            policy,
            visited: HashSet::new(),
            used: HashMap::new(),
            components: Vec::new(),
            diagnostics: Diagnostics::default(),
        }
    }

    pub fn run(mut self, root: &A::Interface) -> Walk<A> {
        self.visit(root);
        Walk {
            components: self.components,
            diagnostics: self.diagnostics,
        }
    }

    fn visit(&mut self, iface: &A::Interface) {
        let adapter = self.adapter;
        let qualified_name = adapter.qualified_name(iface);
        if !self.visited.insert(qualified_name.clone()) {
            tracing::trace!(interface = %qualified_name, "interface already visited");
            return;
        }
        tracing::debug!(interface = %qualified_name, "visiting interface");

        // All methods of a failing interface are still checked so every problem gets reported.
        for method in adapter.declared_methods(iface) {
            match validate(adapter, &method, iface) {
                Verdict::Accept { name, ty } => self.accept(iface, method, name, ty),
                Verdict::Skip => {
                    tracing::trace!(method = %adapter.method_name(&method), "method skipped");
                }
                Verdict::Reject(error) => {
                    self.diagnostics.push(error, adapter.method_site(&method));
                }
            }
            if self.diagnostics.has_internal_error() {
                return;
            }
        }

        for parent in adapter.direct_supertypes(iface) {
            if self.diagnostics.is_fatal() {
                return;
            }
            self.visit(&parent);
        }
    }

    fn accept(&mut self, iface: &A::Interface, method: A::Method, name: String, ty: A::Type) {
        let adapter = self.adapter;
        let interface = adapter.simple_name(iface);

        if let Some(seen) = self.used.get(&name) {
            if self.policy == OverridePolicy::Reject && seen.ty != ty {
                let error = ShapeError::ConflictingOverride {
                    name,
                    first: seen.ty.to_string(),
                    first_interface: seen.interface.clone(),
                    second: ty.to_string(),
                    second_interface: interface,
                };
                self.diagnostics.push(error, adapter.method_site(&method));
            } else {
                tracing::trace!(component = %name, %interface, "component already declared");
            }
            return;
        }

        if ty.is_void() {
            let error = ShapeError::Internal(format!(
                "component {interface}.{name}() was accepted with a void type"
            ));
            self.diagnostics.push(error, adapter.method_site(&method));
            return;
        }

        let initializer = match adapter.initializer_name(&method) {
            Some(target) => match initializer::resolve(adapter, iface, &target, &ty) {
                Some(found) => Some(found),
                None => {
                    self.diagnostics.push(
                        ShapeError::MissingInitializer { name: target },
                        adapter.method_site(&method),
                    );
                    None
                }
            },
            None => None,
        };

        tracing::trace!(component = %name, ty = %ty, %interface, "component accepted");
        self.used.insert(
            name.clone(),
            Seen {
                ty: ty.clone(),
                interface,
            },
        );
        self.components.push(Component {
            name,
            ty,
            origin: method,
            initializer,
        });
    }
}

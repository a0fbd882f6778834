use core::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::adapter::SymbolAdapter;

/// Structural problems found while deriving a record shape.
///
/// The `Display` output of each variant is the user-facing diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// A non-static, non-default method takes arguments or returns nothing.
    #[error(
        "Non-static, non-default methods must take no arguments and must return a value. Bad method: {interface}.{method}()"
    )]
    Signature { interface: String, method: String },
    /// A method declares its own generic parameters.
    #[error("Interface methods cannot have type parameters. Bad method: {interface}.{method}()")]
    GenericMethod { interface: String, method: String },
    /// The whole traversal produced no components.
    #[error("Annotated interface has no component methods")]
    EmptyShape,
    /// Two interfaces declare the same component with different types.
    /// Only reported under [`OverridePolicy::Reject`](crate::OverridePolicy::Reject).
    #[error(
        "Conflicting types for component {name}(): {first} in {first_interface}, {second} in {second_interface}"
    )]
    ConflictingOverride {
        name: String,
        first: String,
        first_interface: String,
        second: String,
        second_interface: String,
    },
    /// No member matches the name given in an initializer annotation.
    #[error("No matching public static field or method found for initializer named: {name}")]
    MissingInitializer { name: String },
    /// An engine invariant was violated. Should never happen.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ShapeError {
    pub fn severity(&self) -> Severity {
        match self {
            Self::Internal(_) => Severity::InternalError,
            _ => Severity::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Aborts the derivation, other derivations may proceed.
    Error,
    /// An invariant violation inside the engine.
    InternalError,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::InternalError => write!(f, "internal error"),
        }
    }
}

/// One diagnostic, pinned to the site the adapter handed out.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic<S> {
    pub severity: Severity,
    pub error: ShapeError,
    pub site: S,
}

impl<S> Diagnostic<S> {
    pub fn new(error: ShapeError, site: S) -> Self {
        Diagnostic {
            severity: error.severity(),
            error,
            site,
        }
    }

    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

impl<S: fmt::Debug> fmt::Display for Diagnostic<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({:?})", self.severity, self.error, self.site)
    }
}

/// Collects the diagnostics of one derivation in the order they were found.
#[derive(Debug)]
pub struct Diagnostics<S> {
    entries: Vec<Diagnostic<S>>,
}

impl<S> Default for Diagnostics<S> {
    fn default() -> Self {
        Diagnostics {
            entries: Vec::new(),
        }
    }
}

impl<S> Diagnostics<S> {
    pub fn push(&mut self, error: ShapeError, site: S) {
        tracing::debug!(severity = %error.severity(), %error, "diagnostic recorded");
        self.entries.push(Diagnostic::new(error, site));
    }

    /// Every severity aborts the derivation, so any entry makes it fatal.
    pub fn is_fatal(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn has_internal_error(&self) -> bool {
        self.entries
            .iter()
            .any(|d| d.severity == Severity::InternalError)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic<S>> {
        self.entries.iter()
    }

    /// Hands every collected diagnostic to the adapter's reporter, preserving order.
    pub fn flush<A>(self, adapter: &mut A)
    where
        A: SymbolAdapter<Site = S>,
    {
        for diagnostic in self.entries {
            adapter.report(diagnostic);
        }
    }
}

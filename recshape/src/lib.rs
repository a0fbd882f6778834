//! # recshape
//!
//! Derives the shape of a record from an interface description: the ordered list of
//! named, typed components that a generated record and its builder expose.
//!
//! The engine walks the interface and its supertypes depth-first, validates every
//! declared method against the record-interface contract, and reports violations
//! through the host's [`SymbolAdapter`].
//!
//! ## Features
//!
//! - Host independence: anything implementing [`SymbolAdapter`] can be derived from
//! - Deterministic component order with first-occurrence-wins deduplication
//! - Diagnostics pinned to the offending method or interface
//! - Initializer resolution for components with default values
//! - An in-memory adapter (`memory-adapter` feature)
//!
//! ```
//! use recshape::{DeriveConfig, MemoryAdapter, derive};
//!
//! let mut adapter = MemoryAdapter::new();
//! let point = adapter.interface("geo::Point");
//! adapter.accessor(point, "x", "int");
//! adapter.accessor(point, "y", "int");
//!
//! let shape = derive(&mut adapter, &point, &DeriveConfig::default()).unwrap();
//! assert_eq!(shape.name, "PointRecord");
//! assert_eq!(shape.component_names().collect::<Vec<_>>(), ["x", "y"]);
//! ```

mod adapter;
mod assembler;
mod config;
mod errors;
mod initializer;
#[cfg(feature = "memory-adapter")]
mod memory;
mod naming;
mod shape;
mod validator;
mod walker;

pub use adapter::{Annotation, Constant, SymbolAdapter, TypeExpr};
pub use assembler::{derive, derive_with};
pub use config::{DeriveConfig, OverridePolicy};
pub use errors::{Diagnostic, Diagnostics, Severity, ShapeError};
pub use initializer::resolve as resolve_initializer;
#[cfg(feature = "memory-adapter")]
pub use memory::{InterfaceId, MemoryAdapter, MemorySite, MemoryType, MethodDecl, MethodId};
pub use naming::{NamingPolicy, QualifiedName, SuffixNaming};
pub use shape::{
    Component, ComponentSummary, Initializer, InitializerKind, RecordShape, ShapeSummary,
};
pub use validator::{Verdict, validate};
pub use walker::{Walk, Walker};

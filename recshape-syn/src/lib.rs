//! Rust traits as interface descriptions for `recshape`.
//!
//! This crate parses Rust source with `syn` and exposes every `trait` in it through the
//! [`recshape::SymbolAdapter`] interface, so record shapes can be derived from trait
//! declarations. Diagnostics point at the line and column of the offending item.
//!
//! # Example
//!
//! ```
//! use recshape::{DeriveConfig, derive};
//! use recshape_syn::SynAdapter;
//!
//! let mut adapter = SynAdapter::parse(
//!     r#"
//!     mod geo {
//!         pub trait Point {
//!             fn x(&self) -> i32;
//!             fn y(&self) -> i32;
//!         }
//!     }
//!     "#,
//! )
//! .expect("valid source");
//!
//! let point = adapter.find("geo::Point").expect("trait is declared");
//! let shape = derive(&mut adapter, &point, &DeriveConfig::default()).expect("valid interface");
//! assert_eq!(shape.package, "geo");
//! assert_eq!(shape.component_names().collect::<Vec<_>>(), ["x", "y"]);
//! ```

mod adapter;
mod error;
mod lower;
mod types;

pub use adapter::{FnId, SynAdapter, TraitId};
pub use error::SynAdapterError;
pub use types::{SourceSite, SynType};

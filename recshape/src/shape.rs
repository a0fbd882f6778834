use serde::Serialize;

use crate::adapter::TypeExpr;

/// How a component's default value is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InitializerKind {
    /// A static method of the interface, called without arguments.
    Method,
    /// A constant of the interface.
    Constant,
}

/// A member of the declaring interface that initializes a component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Initializer {
    pub kind: InitializerKind,
    pub name: String,
}

impl Initializer {
    /// Expression producing the initial value, given the path of the owning type.
    pub fn expression(&self, owner: &str) -> String {
        match self.kind {
            InitializerKind::Method => format!("{owner}::{}()", self.name),
            InitializerKind::Constant => format!("{owner}::{}", self.name),
        }
    }
}

/// One validated field of a record shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Component<T, M> {
    pub name: String,
    /// Never the void type.
    pub ty: T,
    /// The nullary method this component was derived from.
    pub origin: M,
    pub initializer: Option<Initializer>,
}

/// The ordered, named, typed field list of a record derived from an interface.
///
/// Component names are unique and in emission order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordShape<T, M> {
    /// Record name chosen by the naming policy.
    pub name: String,
    pub package: String,
    /// The root interface's generic parameters, in order.
    pub type_parameters: Vec<T>,
    pub components: Vec<Component<T, M>>,
    pub add_builder: bool,
    /// Name hint for the builder companion, present iff `add_builder`.
    pub builder_name: Option<String>,
}

impl<T: TypeExpr, M> RecordShape<T, M> {
    pub fn component_names(&self) -> impl Iterator<Item = &str> {
        self.components.iter().map(|c| c.name.as_str())
    }

    pub fn component(&self, name: &str) -> Option<&Component<T, M>> {
        self.components.iter().find(|c| c.name == name)
    }

    /// Adapter-independent rendering of the shape, suitable for serialization.
    pub fn summary(&self) -> ShapeSummary {
        ShapeSummary {
            name: self.name.clone(),
            package: self.package.clone(),
            type_parameters: self.type_parameters.iter().map(ToString::to_string).collect(),
            components: self
                .components
                .iter()
                .map(|c| ComponentSummary {
                    name: c.name.clone(),
                    ty: c.ty.to_string(),
                    initializer: c.initializer.clone(),
                })
                .collect(),
            builder_name: self.builder_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentSummary {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initializer: Option<Initializer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShapeSummary {
    pub name: String,
    pub package: String,
    pub type_parameters: Vec<String>,
    pub components: Vec<ComponentSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub builder_name: Option<String>,
}

use serde::{Deserialize, Serialize};

/// What to do when a component name shows up again with a different type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverridePolicy {
    /// Keep the first-seen declaration and drop later ones silently.
    #[default]
    FirstWins,
    /// Report a conflicting-override error when the later type differs.
    Reject,
}

/// Per-derivation settings.
///
/// Missing fields take their defaults when deserialized, so a host can keep only
/// the settings it changes in its own configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeriveConfig {
    /// Whether the shape wants a builder companion.
    pub add_builder: bool,
    /// Package of the derived record. Defaults to the package of the root interface.
    pub package_override: Option<String>,
    /// Appended to the interface name to form the record name.
    pub interface_suffix: String,
    /// Appended to the record name to form the builder name.
    pub builder_suffix: String,
    pub override_policy: OverridePolicy,
}

impl Default for DeriveConfig {
    fn default() -> Self {
        DeriveConfig {
            add_builder: true,
            package_override: None,
            interface_suffix: "Record".to_string(),
            builder_suffix: "Builder".to_string(),
            override_policy: OverridePolicy::FirstWins,
        }
    }
}

impl DeriveConfig {
    pub fn with_builder(mut self, add_builder: bool) -> Self {
        self.add_builder = add_builder;
        self
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package_override = Some(package.into());
        self
    }

    pub fn with_override_policy(mut self, policy: OverridePolicy) -> Self {
        self.override_policy = policy;
        self
    }
}

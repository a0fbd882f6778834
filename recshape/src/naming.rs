use crate::config::DeriveConfig;

/// A qualified interface name split on the adapter's path separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualifiedName<'a> {
    full: &'a str,
    separator: &'a str,
}

impl<'a> QualifiedName<'a> {
    pub fn new(full: &'a str, separator: &'a str) -> Self {
        QualifiedName { full, separator }
    }

    pub fn full(&self) -> &'a str {
        self.full
    }

    /// Everything before the last separator, empty for top-level names.
    pub fn package(&self) -> &'a str {
        match self.full.rsplit_once(self.separator) {
            Some((package, _)) => package,
            None => "",
        }
    }

    pub fn simple(&self) -> &'a str {
        match self.full.rsplit_once(self.separator) {
            Some((_, simple)) => simple,
            None => self.full,
        }
    }
}

/// Decides the names of the generated record and its builder.
pub trait NamingPolicy {
    fn record_name(
        &self,
        interface: QualifiedName<'_>,
        type_parameters: &[String],
        config: &DeriveConfig,
    ) -> String;

    fn builder_name(&self, record_name: &str, config: &DeriveConfig) -> String;
}

/// `Point` becomes `PointRecord`, with builder `PointRecordBuilder`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixNaming;

impl NamingPolicy for SuffixNaming {
    fn record_name(
        &self,
        interface: QualifiedName<'_>,
        _type_parameters: &[String],
        config: &DeriveConfig,
    ) -> String {
        format!("{}{}", interface.simple(), config.interface_suffix)
    }

    fn builder_name(&self, record_name: &str, config: &DeriveConfig) -> String {
        format!("{record_name}{}", config.builder_suffix)
    }
}

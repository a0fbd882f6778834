use crate::adapter::SymbolAdapter;
use crate::config::DeriveConfig;
use crate::errors::{Diagnostics, ShapeError};
use crate::naming::{NamingPolicy, QualifiedName, SuffixNaming};
use crate::shape::{Component, RecordShape};
use crate::walker::Walker;

type Shape<A> = RecordShape<<A as SymbolAdapter>::Type, <A as SymbolAdapter>::Method>;

/// Derives the record shape of `root` with the default [`SuffixNaming`] policy.
///
/// Returns `None` when the interface is invalid; the reasons have then been
/// reported through [`SymbolAdapter::report`].
pub fn derive<A: SymbolAdapter>(
    adapter: &mut A,
    root: &A::Interface,
    config: &DeriveConfig,
) -> Option<Shape<A>> {
    derive_with(adapter, root, config, &SuffixNaming)
}

/// Derives the record shape of `root`, naming the record and builder with `naming`.
///
/// All diagnostics are reported before this returns, in traversal order.
pub fn derive_with<A, N>(
    adapter: &mut A,
    root: &A::Interface,
    config: &DeriveConfig,
    naming: &N,
) -> Option<Shape<A>>
where
    A: SymbolAdapter,
    N: NamingPolicy + ?Sized,
{
    let walk = Walker::new(adapter, config.override_policy).run(root);
    let mut diagnostics = walk.diagnostics;
    let shape = assemble(
        adapter,
        root,
        config,
        naming,
        walk.components,
        &mut diagnostics,
    );
    diagnostics.flush(adapter);
    shape
}

fn assemble<A, N>(
    adapter: &A,
    root: &A::Interface,
    config: &DeriveConfig,
    naming: &N,
    components: Vec<Component<A::Type, A::Method>>,
    diagnostics: &mut Diagnostics<A::Site>,
) -> Option<Shape<A>>
where
    A: SymbolAdapter,
    N: NamingPolicy + ?Sized,
{
    let qualified_name = adapter.qualified_name(root);
    if diagnostics.is_fatal() {
        tracing::debug!(
            interface = %qualified_name,
            errors = diagnostics.len(),
            "derivation failed"
        );
        return None;
    }
    if components.is_empty() {
        diagnostics.push(ShapeError::EmptyShape, adapter.interface_site(root));
        return None;
    }

    let interface = QualifiedName::new(&qualified_name, A::PATH_SEPARATOR);
    let type_parameters = adapter.type_parameters(root);
    let rendered: Vec<String> = type_parameters.iter().map(ToString::to_string).collect();

    let package = match &config.package_override {
        Some(package) => package.clone(),
        None => interface.package().to_string(),
    };
    let name = naming.record_name(interface, &rendered, config);
    let builder_name = config
        .add_builder
        .then(|| naming.builder_name(&name, config));

    tracing::debug!(
        interface = %qualified_name,
        record = %name,
        components = components.len(),
        "record shape derived"
    );
    Some(RecordShape {
        name,
        package,
        type_parameters,
        components,
        add_builder: config.add_builder,
        builder_name,
    })
}

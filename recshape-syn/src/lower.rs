use std::collections::HashMap;

use recshape::Constant;
use syn::{
    FnArg, GenericParam, Item, ItemTrait, LitStr, ReturnType, TraitItem, TraitItemFn, Type,
    TypeParamBound, WherePredicate,
};

use crate::types::{SourceSite, SynType};

pub(crate) struct TraitDecl {
    pub qualified_name: String,
    pub simple_name: String,
    module: Vec<String>,
    pub type_parameters: Vec<SynType>,
    /// Supertrait paths as written, split into segments.
    bounds: Vec<Vec<String>>,
    pub supertypes: Vec<usize>,
    pub methods: Vec<MethodDecl>,
    pub constants: Vec<Constant<SynType>>,
    pub site: SourceSite,
}

pub(crate) struct MethodDecl {
    pub name: String,
    pub is_static: bool,
    pub is_default: bool,
    pub parameters: Vec<SynType>,
    pub return_type: SynType,
    pub type_parameters: Vec<SynType>,
    pub ignore_default: bool,
    pub initializer: Option<String>,
    pub site: SourceSite,
}

/// Collects every trait in `file`, including those in inline modules, and links supertraits.
pub(crate) fn lower_file(file: &syn::File) -> Vec<TraitDecl> {
    let mut traits = Vec::new();
    collect(&file.items, &mut Vec::new(), &mut traits);
    resolve_supertypes(&mut traits);
    traits
}

fn collect(items: &[Item], module: &mut Vec<String>, out: &mut Vec<TraitDecl>) {
    for item in items {
        match item {
            Item::Trait(item) => out.push(lower_trait(item, module)),
            Item::Mod(item) => {
                if let Some((_, items)) = &item.content {
                    module.push(item.ident.to_string());
                    collect(items, module, out);
                    module.pop();
                }
            }
            _ => {}
        }
    }
}

fn lower_trait(item: &ItemTrait, module: &[String]) -> TraitDecl {
    let simple_name = item.ident.to_string();
    let qualified_name = join(module.iter().map(String::as_str).chain([simple_name.as_str()]));

    let mut bounds: Vec<Vec<String>> = item.supertraits.iter().filter_map(trait_path).collect();
    // `where Self: Trait` is another way of writing a supertrait.
    if let Some(where_clause) = &item.generics.where_clause {
        for predicate in &where_clause.predicates {
            if let WherePredicate::Type(predicate) = predicate {
                if is_self(&predicate.bounded_ty) {
                    bounds.extend(predicate.bounds.iter().filter_map(trait_path));
                }
            }
        }
    }

    let mut methods = Vec::new();
    let mut constants = Vec::new();
    for trait_item in &item.items {
        match trait_item {
            TraitItem::Fn(method) => methods.push(lower_method(method, &qualified_name)),
            TraitItem::Const(constant) => constants.push(Constant {
                name: constant.ident.to_string(),
                ty: SynType::from_tokens(&constant.ty),
                is_public: true,
                is_static: true,
                is_final: true,
            }),
            _ => {}
        }
    }

    TraitDecl {
        site: SourceSite::new(qualified_name.clone(), item.ident.span()),
        type_parameters: item.generics.params.iter().map(generic_param).collect(),
        qualified_name,
        simple_name,
        module: module.to_vec(),
        bounds,
        supertypes: Vec::new(),
        methods,
        constants,
    }
}

fn lower_method(item: &TraitItemFn, owner: &str) -> MethodDecl {
    let sig = &item.sig;
    let name = sig.ident.to_string();

    let parameters = sig
        .inputs
        .iter()
        .filter_map(|arg| match arg {
            FnArg::Typed(arg) => Some(SynType::from_tokens(&arg.ty)),
            FnArg::Receiver(_) => None,
        })
        .collect();
    let return_type = match &sig.output {
        ReturnType::Default => SynType::unit(),
        ReturnType::Type(_, ty) => SynType::from_tokens(ty),
    };
    // Lifetimes are not type parameters.
    let type_parameters = sig
        .generics
        .params
        .iter()
        .filter(|param| !matches!(param, GenericParam::Lifetime(_)))
        .map(generic_param)
        .collect();

    let ignore_default = item
        .attrs
        .iter()
        .any(|attr| attr.path().is_ident("ignore_default"));
    // Accepts both #[initializer("name")] and #[initializer(name)].
    let initializer = item
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("initializer"))
        .and_then(|attr| {
            attr.parse_args::<LitStr>()
                .map(|lit| lit.value())
                .or_else(|_| attr.parse_args::<syn::Ident>().map(|ident| ident.to_string()))
                .ok()
        });

    MethodDecl {
        site: SourceSite::new(format!("{owner}::{name}"), sig.ident.span()),
        name,
        is_static: sig.receiver().is_none(),
        is_default: item.default.is_some(),
        parameters,
        return_type,
        type_parameters,
        ignore_default,
        initializer,
    }
}

fn generic_param(param: &GenericParam) -> SynType {
    match param {
        GenericParam::Type(param) => SynType::from_tokens(&param.ident),
        GenericParam::Lifetime(param) => SynType::from_tokens(&param.lifetime),
        GenericParam::Const(param) => SynType::from_tokens(&param.ident),
    }
}

fn trait_path(bound: &TypeParamBound) -> Option<Vec<String>> {
    match bound {
        TypeParamBound::Trait(bound) => Some(
            bound
                .path
                .segments
                .iter()
                .map(|segment| segment.ident.to_string())
                .collect(),
        ),
        _ => None,
    }
}

fn is_self(ty: &Type) -> bool {
    matches!(ty, Type::Path(ty) if ty.qself.is_none() && ty.path.is_ident("Self"))
}

fn join<'a>(segments: impl Iterator<Item = &'a str>) -> String {
    segments.collect::<Vec<_>>().join("::")
}

fn resolve_supertypes(traits: &mut [TraitDecl]) {
    let by_path: HashMap<String, usize> = traits
        .iter()
        .enumerate()
        .map(|(i, decl)| (decl.qualified_name.clone(), i))
        .collect();
    let mut by_name: HashMap<&str, Vec<usize>> = HashMap::new();
    for (i, decl) in traits.iter().enumerate() {
        by_name.entry(decl.simple_name.as_str()).or_default().push(i);
    }

    let resolved: Vec<Vec<usize>> = traits
        .iter()
        .map(|decl| {
            decl.bounds
                .iter()
                .filter_map(|bound| {
                    let found = resolve(bound, &decl.module, &by_path, &by_name);
                    if found.is_none() {
                        tracing::trace!(
                            interface = %decl.qualified_name,
                            bound = %bound.join("::"),
                            "supertrait is not a declared trait"
                        );
                    }
                    found
                })
                .collect()
        })
        .collect();

    for (decl, supertypes) in traits.iter_mut().zip(resolved) {
        decl.supertypes = supertypes;
    }
}

/// Resolves a supertrait path written inside `module`.
///
/// Tries the path relative to the module, then from the file root. A bare name (one
/// segment as written) then falls back to the only trait with that name. Qualified paths
/// that match nothing point outside the file.
fn resolve(
    bound: &[String],
    module: &[String],
    by_path: &HashMap<String, usize>,
    by_name: &HashMap<&str, Vec<usize>>,
) -> Option<usize> {
    let mut base = module.to_vec();
    let mut rest = bound;
    match rest.first().map(String::as_str) {
        Some("crate") => {
            base.clear();
            rest = &rest[1..];
        }
        Some("self") => rest = &rest[1..],
        _ => {
            while rest.first().map(String::as_str) == Some("super") {
                base.pop();
                rest = &rest[1..];
            }
        }
    }

    let relative = join(base.iter().chain(rest).map(String::as_str));
    if let Some(&i) = by_path.get(&relative) {
        return Some(i);
    }
    if let Some(&i) = by_path.get(&join(rest.iter().map(String::as_str))) {
        return Some(i);
    }
    let [name] = bound else {
        return None;
    };
    match by_name.get(name.as_str()).map(Vec::as_slice) {
        Some([only]) => Some(*only),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use recshape::TypeExpr;

    use super::*;

    fn lower(source: &str) -> Vec<TraitDecl> {
        lower_file(&syn::parse_file(source).unwrap())
    }

    fn supertypes(traits: &[TraitDecl], name: &str) -> Vec<String> {
        let decl = traits.iter().find(|t| t.qualified_name == name).unwrap();
        decl.supertypes
            .iter()
            .map(|&i| traits[i].qualified_name.clone())
            .collect()
    }

    #[test]
    fn test_nested_modules_are_qualified() {
        let traits = lower(
            r#"
            trait Top { fn a(&self) -> u8; }
            mod geo {
                pub mod shapes {
                    pub trait Point { fn x(&self) -> i32; }
                }
            }
            "#,
        );
        let names: Vec<_> = traits.iter().map(|t| t.qualified_name.as_str()).collect();
        assert_eq!(names, ["Top", "geo::shapes::Point"]);
    }

    #[test]
    fn test_supertrait_resolution() {
        let traits = lower(
            r#"
            trait Named { fn name(&self) -> String; }
            mod a {
                pub trait Named { fn name(&self) -> String; }
                pub trait Local: Named + Clone {}
                pub trait Parent: super::Named {}
                pub trait Rooted: crate::Named where Self: self::Local {}
                pub mod b {
                    pub trait Deep: super::Local {}
                }
            }
            trait Unique: Deep + std::fmt::Debug {}
            "#,
        );
        assert_eq!(supertypes(&traits, "a::Local"), ["a::Named"]);
        assert_eq!(supertypes(&traits, "a::Parent"), ["Named"]);
        assert_eq!(supertypes(&traits, "a::Rooted"), ["Named", "a::Local"]);
        assert_eq!(supertypes(&traits, "a::b::Deep"), ["a::Local"]);
        assert_eq!(supertypes(&traits, "Unique"), ["a::b::Deep"]);
    }

    #[test]
    fn test_qualified_paths_do_not_match_by_simple_name() {
        let traits = lower(
            r#"
            mod model {
                pub trait Display { fn text(&self) -> String; }
            }
            mod a {
                pub trait Named { fn name(&self) -> String; }
            }
            trait Item: std::fmt::Display { fn id(&self) -> u32; }
            trait Person: other::Named { fn age(&self) -> u8; }
            trait Local: Named { fn age(&self) -> u8; }
            "#,
        );
        assert!(supertypes(&traits, "Item").is_empty());
        assert!(supertypes(&traits, "Person").is_empty());
        assert_eq!(supertypes(&traits, "Local"), ["a::Named"]);
    }

    #[test]
    fn test_method_shapes() {
        let traits = lower(
            r#"
            trait Sample {
                const LIMIT: u32;
                fn id(&self) -> u64;
                fn greeting(&self) -> String { String::new() }
                fn make() -> Self;
                fn borrow<'a>(&'a self) -> &'a str;
                fn pick<T>(&self) -> T;
                fn set(&mut self, value: u8);
                #[ignore_default]
                fn label(&self) -> String { String::new() }
                #[initializer("default_count")]
                fn count(&self) -> u32;
                #[initializer(LIMIT)]
                fn limit(&self) -> u32;
            }
            "#,
        );
        let sample = &traits[0];
        let method = |name: &str| sample.methods.iter().find(|m| m.name == name).unwrap();

        assert!(!method("id").is_static && !method("id").is_default);
        assert!(method("greeting").is_default);
        assert!(method("make").is_static);
        assert!(method("borrow").type_parameters.is_empty());
        assert_eq!(method("pick").type_parameters[0].as_str(), "T");
        assert_eq!(method("set").parameters.len(), 1);
        assert!(method("set").return_type.is_void());
        assert!(method("label").ignore_default);
        assert_eq!(method("count").initializer.as_deref(), Some("default_count"));
        assert_eq!(method("limit").initializer.as_deref(), Some("LIMIT"));
        assert_eq!(sample.constants[0].name, "LIMIT");
        assert_eq!(sample.constants[0].ty.as_str(), "u32");
    }
}

mod common;

use common::{GENERIC_PREFIX, SIGNATURE_PREFIX, components};
use recshape::{
    Annotation, DeriveConfig, MemoryAdapter, MemorySite, MethodDecl, OverridePolicy, Severity,
    ShapeError, derive,
};

#[test]
fn test_flat_interface() {
    let mut adapter = MemoryAdapter::new();
    let point = adapter.interface("geo::Point");
    adapter.accessor(point, "x", "int");
    adapter.accessor(point, "y", "int");

    let shape = derive(&mut adapter, &point, &DeriveConfig::default()).unwrap();
    assert_eq!(components(&shape), ["x:int", "y:int"]);
    assert!(adapter.reported().is_empty());
}

#[test]
fn test_diamond_yields_single_component() {
    let mut adapter = MemoryAdapter::new();
    let a = adapter.interface("A");
    adapter.accessor(a, "name", "String");
    let b = adapter.interface("B");
    adapter.extend(b, a);
    let c = adapter.interface("C");
    adapter.extend(c, a);
    let d = adapter.interface("D");
    adapter.extend(d, b);
    adapter.extend(d, c);

    let shape = derive(&mut adapter, &d, &DeriveConfig::default()).unwrap();
    assert_eq!(components(&shape), ["name:String"]);
    assert!(adapter.reported().is_empty());
}

#[test]
fn test_override_keeps_first_occurrence() {
    let mut adapter = MemoryAdapter::new();
    let p = adapter.interface("P");
    adapter.accessor(p, "id", "int");
    let q = adapter.interface("Q");
    let q_id = adapter.accessor(q, "id", "int");
    adapter.accessor(q, "tag", "String");
    adapter.extend(q, p);

    let shape = derive(&mut adapter, &q, &DeriveConfig::default()).unwrap();
    assert_eq!(components(&shape), ["id:int", "tag:String"]);
    assert_eq!(shape.components[0].origin, q_id);
}

#[test]
fn test_illegal_signature() {
    let mut adapter = MemoryAdapter::new();
    let calc = adapter.interface("math::Calculator");
    adapter.accessor(calc, "precision", "int");
    adapter.method(calc, MethodDecl::new("compute", "int").parameter("int"));

    assert!(derive(&mut adapter, &calc, &DeriveConfig::default()).is_none());
    let reported = adapter.reported();
    assert_eq!(reported.len(), 1);
    assert_eq!(reported[0].severity, Severity::Error);
    assert_eq!(
        reported[0].message(),
        format!("{SIGNATURE_PREFIX}Calculator.compute()")
    );
    assert_eq!(
        reported[0].site,
        MemorySite::Method {
            interface: "math::Calculator".into(),
            method: "compute".into(),
        }
    );
}

#[test]
fn test_method_level_generic() {
    let mut adapter = MemoryAdapter::new();
    let chooser = adapter.interface("Chooser");
    adapter.method(chooser, MethodDecl::new("pick", "T").type_parameter("T"));

    assert!(derive(&mut adapter, &chooser, &DeriveConfig::default()).is_none());
    assert_eq!(
        adapter.messages(),
        [format!("{GENERIC_PREFIX}Chooser.pick()")]
    );
}

#[test]
fn test_default_method_included() {
    let mut adapter = MemoryAdapter::new();
    let greeter = adapter.interface("Greeter");
    adapter.method(
        greeter,
        MethodDecl::new("greeting", "String").default_method(),
    );

    let shape = derive(&mut adapter, &greeter, &DeriveConfig::default()).unwrap();
    assert_eq!(components(&shape), ["greeting:String"]);
}

#[test]
fn test_ignored_default_method_leaves_empty_shape() {
    let mut adapter = MemoryAdapter::new();
    let greeter = adapter.interface("Greeter");
    adapter.method(
        greeter,
        MethodDecl::new("greeting", "String")
            .default_method()
            .annotated(Annotation::IgnoreDefault),
    );

    assert!(derive(&mut adapter, &greeter, &DeriveConfig::default()).is_none());
    assert_eq!(
        adapter.messages(),
        ["Annotated interface has no component methods"]
    );
    assert_eq!(
        adapter.reported()[0].site,
        MemorySite::Interface("Greeter".into())
    );
}

#[test]
fn test_ignored_default_alongside_components() {
    let mut adapter = MemoryAdapter::new();
    let person = adapter.interface("Person");
    adapter.accessor(person, "name", "String");
    adapter.method(
        person,
        MethodDecl::new("display", "String")
            .default_method()
            .annotated(Annotation::IgnoreDefault),
    );
    adapter.method(
        person,
        MethodDecl::new("of", "Person").parameter("String").static_method(),
    );

    let shape = derive(&mut adapter, &person, &DeriveConfig::default()).unwrap();
    assert_eq!(components(&shape), ["name:String"]);
}

#[test]
fn test_rejection_in_supertype_aborts() {
    let mut adapter = MemoryAdapter::new();
    let base = adapter.interface("Base");
    adapter.accessor(base, "close", "void");
    let root = adapter.interface("Root");
    adapter.accessor(root, "id", "long");
    adapter.extend(root, base);

    assert!(derive(&mut adapter, &root, &DeriveConfig::default()).is_none());
    assert_eq!(adapter.messages(), [format!("{SIGNATURE_PREFIX}Base.close()")]);
}

#[test]
fn test_all_violations_of_root_are_reported_in_order() {
    let mut adapter = MemoryAdapter::new();
    let root = adapter.interface("Messy");
    adapter.method(root, MethodDecl::new("first", "int").parameter("int"));
    adapter.method(root, MethodDecl::new("second", "T").type_parameter("T"));
    adapter.accessor(root, "third", "void");

    assert!(derive(&mut adapter, &root, &DeriveConfig::default()).is_none());
    assert_eq!(
        adapter.messages(),
        [
            format!("{SIGNATURE_PREFIX}Messy.first()"),
            format!("{GENERIC_PREFIX}Messy.second()"),
            format!("{SIGNATURE_PREFIX}Messy.third()"),
        ]
    );
}

#[test]
fn test_strict_override_policy() {
    let mut adapter = MemoryAdapter::new();
    let p = adapter.interface("P");
    adapter.accessor(p, "id", "int");
    let q = adapter.interface("Q");
    adapter.accessor(q, "id", "long");
    adapter.extend(q, p);

    let lenient = derive(&mut adapter, &q, &DeriveConfig::default()).unwrap();
    assert_eq!(components(&lenient), ["id:long"]);

    let strict = DeriveConfig::default().with_override_policy(OverridePolicy::Reject);
    assert!(derive(&mut adapter, &q, &strict).is_none());
    let reported = adapter.take_reported();
    assert_eq!(reported.len(), 1);
    assert!(matches!(
        reported[0].error,
        ShapeError::ConflictingOverride { .. }
    ));
}

#[test]
fn test_summary_serializes() -> anyhow::Result<()> {
    let mut adapter = MemoryAdapter::new();
    let pair = adapter.interface("util::Pair");
    adapter.type_parameter(pair, "T");
    adapter.accessor(pair, "left", "T");
    adapter.accessor(pair, "right", "T");

    let shape = derive(&mut adapter, &pair, &DeriveConfig::default()).unwrap();
    let json = serde_json::to_value(shape.summary())?;
    assert_eq!(
        json,
        serde_json::json!({
            "name": "PairRecord",
            "package": "util",
            "type_parameters": ["T"],
            "components": [
                { "name": "left", "type": "T" },
                { "name": "right", "type": "T" }
            ],
            "builder_name": "PairRecordBuilder"
        })
    );
    Ok(())
}

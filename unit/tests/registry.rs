/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::thread;

use imperial_units::{
    generate_unit_summary, BaseDimension, Namespace, Registry, Unit,
    UnitError, UnitNames, UnitScope,
};

fn base(registry: &Registry) -> (UnitScope<'_>, Unit) {
    let mut scope = UnitScope::new("test", registry);
    let m = scope
        .def_irreducible_unit(
            &["m", "meter"],
            BaseDimension::Length,
            true,
            Some("meter"),
        )
        .unwrap();
    (scope, m)
}

#[test]
fn duplicate_name_is_rejected() {
    let registry = Registry::new();
    let (mut scope, m) = base(&registry);
    let ft = scope.def_unit(&["ft"], 0.3048 * &m, true, None).unwrap();

    let mut other = UnitScope::new("other", &registry);
    match other.def_unit(&["ft"], 0.3 * &m, true, None) {
        Err(UnitError::DuplicateUnitName { name, scope }) => {
            assert_eq!(name, "ft");
            assert_eq!(scope, "registry");
        }
        r => panic!("unexpected result: {:?}", r),
    }
    assert!(registry.lookup("ft").unwrap().ptr_eq(&ft));
    assert!(other.get("ft").is_none());
}

#[test]
fn failed_definition_binds_nothing() {
    let registry = Registry::new();
    let (mut scope, m) = base(&registry);
    scope.def_unit(&["ft"], 0.3048 * &m, true, None).unwrap();
    let before = registry.len();

    let mut other = UnitScope::new("other", &registry);
    assert!(other
        .def_unit(&["fresh", "ft"], 0.3 * &m, true, None)
        .is_err());
    assert!(!registry.contains("fresh"));
    assert!(other.get("fresh").is_none());
    assert_eq!(registry.len(), before);
}

#[test]
fn scope_collision_without_registration() {
    let registry = Registry::new();
    let (mut scope, m) = base(&registry);
    let smoot = scope
        .def_unit(&["smoot"], 1.7018 * &m, false, Some("Oliver R. Smoot"))
        .unwrap();
    assert!(!registry.contains("smoot"));
    assert!(scope.lookup("smoot").unwrap().ptr_eq(&smoot));
    match scope.def_unit(&["smoot"], 2.0 * &m, false, None) {
        Err(UnitError::DuplicateUnitName { scope, .. }) => {
            assert_eq!(scope, "test")
        }
        r => panic!("unexpected result: {:?}", r),
    }
}

#[test]
fn same_unit_may_be_registered_again() {
    let registry = Registry::new();
    let (mut scope, m) = base(&registry);
    let ft = scope
        .def_unit(&["ft", "foot"], 0.3048 * &m, true, None)
        .unwrap();
    let units = registry.len();

    registry.register(&ft).unwrap();
    registry.alias("feet", &ft).unwrap();
    assert!(registry.lookup("feet").unwrap().ptr_eq(&ft));
    assert_eq!(registry.len(), units);

    let mut other = UnitScope::new("other", &registry);
    let copy = other
        .def_unit(&["ft", "foot"], 0.3048 * &m, true, None)
        .unwrap();
    assert_eq!(copy, ft);
    assert_eq!(registry.len(), units);

    assert!(matches!(
        registry.alias("feet", &m),
        Err(UnitError::DuplicateUnitName { .. })
    ));
}

#[test]
fn alias_requires_registered_unit() {
    let registry = Registry::new();
    let (mut scope, m) = base(&registry);
    let smoot = scope
        .def_unit(&["smoot"], 1.7018 * &m, false, None)
        .unwrap();
    assert_eq!(
        registry.alias("sm", &smoot),
        Err(UnitError::UnknownUnit("smoot".to_string()))
    );
    assert!(!registry.contains("sm"));
    assert_eq!(registry.len(), 1);
    for record in registry.records() {
        for name in &record.names {
            assert!(registry.contains(name));
        }
    }
}

#[test]
fn redefinition_with_other_doc_is_rejected() {
    let registry = Registry::new();
    let (mut scope, m) = base(&registry);
    let ft = scope
        .def_unit(&["ft"], 0.3048 * &m, true, Some("International foot"))
        .unwrap();

    let mut other = UnitScope::new("other", &registry);
    assert!(matches!(
        other.def_unit(&["ft"], 0.3048 * &m, true, Some("Survey foot")),
        Err(UnitError::DuplicateUnitName { .. })
    ));
    let same = other
        .def_unit(&["ft"], 0.3048 * &m, true, Some("International foot"))
        .unwrap();
    assert_eq!(same, ft);
    assert_eq!(
        registry.lookup("ft").unwrap().doc(),
        Some("International foot")
    );
}

#[test]
fn invalid_definitions() {
    let registry = Registry::new();
    let (mut scope, m) = base(&registry);
    let none: &[&str] = &[];
    assert!(matches!(
        scope.def_unit(none, 2.0 * &m, true, None),
        Err(UnitError::InvalidNames(_))
    ));
    assert!(matches!(
        scope.def_unit(&["x", "x"], 2.0 * &m, true, None),
        Err(UnitError::InvalidNames(_))
    ));
    assert!(matches!(
        scope.def_unit(&["two words"], 2.0 * &m, true, None),
        Err(UnitError::InvalidNames(_))
    ));
    assert!(matches!(
        scope.def_unit(&["neg"], -1.0 * &m, true, None),
        Err(UnitError::InvalidScale { .. })
    ));
    assert!(matches!(
        scope.def_unit(&["zero"], 0.0 * &m, true, None),
        Err(UnitError::InvalidScale { .. })
    ));
    assert!(matches!(
        scope.def_unit(&["inf"], f64::INFINITY * &m, true, None),
        Err(UnitError::InvalidScale { .. })
    ));
    assert!(!registry.contains("x"));
    assert!(!registry.contains("neg"));
}

#[test]
fn unknown_unit() {
    let registry = Registry::new();
    assert!(registry.is_empty());
    assert!(registry.get("furlong").is_none());
    assert_eq!(
        registry.lookup("furlong"),
        Err(UnitError::UnknownUnit("furlong".to_string()))
    );
}

#[test]
fn order_and_records() {
    let registry = Registry::new();
    let (mut scope, m) = base(&registry);
    scope
        .def_unit(
            UnitNames::new(&["ft"], &["foot", "feet"]),
            0.3048 * &m,
            true,
            Some("foot"),
        )
        .unwrap();
    scope.def_unit(&["yd"], 0.9144 * &m, true, None).unwrap();

    let ns: Namespace = scope.finish();
    assert_eq!(ns.scope(), "test");
    assert_eq!(ns.len(), 3);
    assert_eq!(
        ns.names().collect::<Vec<_>>(),
        ["m", "meter", "ft", "foot", "feet", "yd"]
    );

    let records = registry.records();
    assert_eq!(records, ns.records());
    assert_eq!(records[1].names, ["ft", "foot", "feet"]);
    assert_eq!(records[1].doc.as_deref(), Some("foot"));
    assert_eq!(records[1].represents, "0.3048 m");
    assert_eq!(records[1].scale, 0.3048);
    assert_eq!(records[0].represents, "m");

    let json = serde_json::to_value(&records[2]).unwrap();
    assert_eq!(json["names"], serde_json::json!(["yd"]));
    assert_eq!(json["doc"], serde_json::Value::Null);
}

#[test]
fn equivalent_units() {
    let registry = Registry::new();
    let (mut scope, m) = base(&registry);
    let s = scope
        .def_irreducible_unit(&["s"], BaseDimension::Time, true, None)
        .unwrap();
    let ft = scope.def_unit(&["ft"], 0.3048 * &m, true, None).unwrap();
    let speed = (&ft / &s).unwrap();
    assert!(registry.equivalent_units(&speed).is_empty());
    let knot = scope
        .def_unit(
            &["kn", "knot"],
            (1852.0 * &m / (3600.0 * &s)).unwrap(),
            true,
            None,
        )
        .unwrap();
    assert_eq!(registry.equivalent_units(&m), [m.clone(), ft]);
    assert_eq!(registry.equivalent_units(&speed), [knot]);
}

#[test]
fn concurrent_registration() {
    let registry = Registry::new();
    let (_, m) = base(&registry);
    let results = thread::scope(|s| {
        (1..=8)
            .map(|i| {
                let registry = &registry;
                let m = &m;
                s.spawn(move || {
                    let mut scope =
                        UnitScope::new(format!("t{}", i), registry);
                    scope.def_unit(&["widget"], i as f64 * m, true, None)
                })
            })
            .collect::<Vec<_>>()
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect::<Vec<_>>()
    });
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    let winner = results.into_iter().find_map(Result::ok).unwrap();
    assert!(registry.lookup("widget").unwrap().ptr_eq(&winner));
}

#[test]
fn summary_table() {
    let registry = Registry::new();
    let (mut scope, m) = base(&registry);
    scope
        .def_unit(&["ft", "foot"], 0.3048 * &m, true, Some("foot"))
        .unwrap();
    let summary = generate_unit_summary(&registry.units());
    let lines = summary.lines().collect::<Vec<_>>();
    assert_eq!(lines[0], "Unit  Description  Represents  Aliases");
    assert_eq!(lines[1], "====  ===========  ==========  =======");
    assert_eq!(lines[2], "m     meter        m           meter");
    assert_eq!(lines[3], "ft    foot         0.3048 m    foot");
    assert_eq!(lines.len(), 4);
}

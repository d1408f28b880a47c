/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use approx::assert_relative_eq;
use imperial_units::{
    BaseDimension, Composite, Dimension, Registry, Si, Unit, UnitError,
    UnitScope,
};
use num_rational::Rational32;

fn si() -> Si {
    Si::define(&Registry::new()).unwrap()
}

#[test]
fn multiply_and_divide() {
    let si = si();
    let speed = (&si.meter / &si.second).unwrap();
    assert!(speed.is_anonymous());
    assert_eq!(speed.to_string(), "m/s");
    assert_eq!(
        speed.dimension(),
        (Dimension::base(BaseDimension::Length)
            / Dimension::base(BaseDimension::Time))
    );

    let area = &si.meter * &si.meter;
    assert_eq!(area.to_string(), "m\u{b2}");
    assert_eq!(area, si.meter.powi(2).unwrap());

    let one = (&si.meter / &si.meter).unwrap();
    assert!(one.dimension().is_dimensionless());
    assert_eq!(one.scale(), 1.0);
    assert_eq!(one.to_string(), "1");
}

#[test]
fn named_units_stay_factors() {
    let si = si();
    let (factor, bases) = si.joule.represents();
    assert_eq!(factor, 1.0);
    assert_eq!(
        bases,
        Composite::from_powers([
            (si.newton.clone(), Rational32::from_integer(1)),
            (si.meter.clone(), Rational32::from_integer(1)),
        ])
    );
    assert_eq!(si.joule.record().represents, "N\u{22c5}m");
}

#[test]
fn scalars() {
    let si = si();
    let km = 1000.0 * &si.meter;
    assert_eq!(km.scale(), 1000.0);
    assert_eq!(km.to_string(), "1000 m");
    assert_eq!((&si.meter * 1000.0).scale(), 1000.0);
    assert_relative_eq!(
        (&si.meter / 4.0).unwrap().scale(),
        0.25,
        max_relative = 1e-12
    );
    let hz = (1.0 / &si.second).unwrap();
    assert_eq!(hz.dimension(), si.second.dimension().recip());
}

#[test]
fn division_by_zero_unit() {
    let si = si();
    assert!(matches!(
        &si.meter / 0.0,
        Err(UnitError::DivisionByZeroUnit(_))
    ));
    assert!(matches!(
        &si.meter / Unit::dimensionless(0.0),
        Err(UnitError::DivisionByZeroUnit(_))
    ));
    // A zero-scale unit can be built, but not defined or divided by.
    let zero = 0.0 * &si.meter;
    assert_eq!(zero.scale(), 0.0);
    assert!((&si.meter / &zero).is_err());
    assert!(matches!(
        zero.powi(-1),
        Err(UnitError::DivisionByZeroUnit(_))
    ));
    assert!(matches!(
        zero.pow(Rational32::new(-1, 2)),
        Err(UnitError::DivisionByZeroUnit(_))
    ));
    assert_eq!(zero.powi(2).unwrap().scale(), 0.0);
    assert_eq!(zero.sqrt().scale(), 0.0);
}

#[test]
fn fractional_powers() {
    let si = si();
    let area = 4.0 * si.meter.powi(2).unwrap();
    let side = area.sqrt();
    assert!(side.is_equivalent(&si.meter));
    assert_relative_eq!(side.scale(), 2.0, max_relative = 1e-12);

    let root = si.second.pow(Rational32::new(1, 2)).unwrap();
    assert_eq!(
        root.dimension().get(BaseDimension::Time),
        Rational32::new(1, 2)
    );
    assert_eq!(
        root.powi(2).unwrap().dimension(),
        si.second.dimension()
    );
    assert!(!root.is_equivalent(&si.second));
}

#[test]
fn decompose() {
    let si = si();
    let decomposed = si.watt.decompose();
    assert_eq!(decomposed.scale(), 1.0);
    assert!(decomposed.is_equivalent(&si.watt));
    let (_, bases) = decomposed.represents();
    assert!(bases.iter().all(|(u, _)| u.is_irreducible()));
    assert_eq!(
        bases.as_map().get(&si.second),
        Some(&Rational32::from_integer(-3))
    );

    let gram = si.gram.decompose();
    assert_relative_eq!(gram.scale(), 1e-3, max_relative = 1e-12);
    assert_eq!(
        gram.represents().1,
        Composite::simple(si.kilogram.clone())
    );
}

#[test]
fn conversion() {
    let si = si();
    let km = si.namespace().lookup("km").unwrap();
    assert_relative_eq!(
        km.convert(&si.meter, 2.5).unwrap(),
        2500.0,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        si.meter.conversion_factor(km).unwrap(),
        1e-3,
        max_relative = 1e-12
    );
    match si.meter.convert(&si.second, 1.0) {
        Err(UnitError::IncompatibleDimensions {
            from_dimension,
            to_dimension,
            ..
        }) => {
            assert_eq!(from_dimension, si.meter.dimension());
            assert_eq!(to_dimension, si.second.dimension());
        }
        r => panic!("unexpected result: {:?}", r),
    }
}

#[test]
fn identity() {
    let registry = Registry::new();
    let mut scope = UnitScope::new("test", &registry);
    let m = scope
        .def_irreducible_unit(&["m"], BaseDimension::Length, false, None)
        .unwrap();
    let a = scope.def_unit(&["a"], 2.0 * &m, false, None).unwrap();
    assert_eq!(a, a.clone());
    assert!(a.ptr_eq(&a.clone()));
    // Same value under a different name is a different unit.
    let b = scope.def_unit(&["b"], 2.0 * &m, false, None).unwrap();
    assert_ne!(a, b);
    assert!(a.is_equivalent(&b));
    assert_eq!(a.convert(&b, 3.0).unwrap(), 3.0);
}

#[test]
fn prefixed_names() {
    let si = si();
    let ns = si.namespace();
    assert_eq!(ns.lookup("km").unwrap().names(), ["km", "kilometer"]);
    assert_eq!(ns.lookup("us").unwrap().names(), ["us", "microsecond"]);
    assert_eq!(
        ns.lookup("dal").unwrap().names(),
        ["dal", "daL", "dekaliter"]
    );
    assert_eq!(ns.lookup("mL").unwrap().short_names(), ["ml", "mL"]);
    assert_eq!(ns.lookup("mg").unwrap().long_names(), ["milligram"]);
    assert!(ns.get("kg").unwrap().is_irreducible());
    assert!(ns.get("kkg").is_none());
    assert!(ns.get("kilogram").unwrap().ptr_eq(&si.kilogram));
}

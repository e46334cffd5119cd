//! Round-trip, rejection, and case sensitivity properties.
//!
//! Uses proptest to pick enumerations and variants, and to generate
//! arbitrary inputs that must be accepted exactly when they equal a
//! declared wire value.

use crate::common::{self, fixtures};
use proptest::prelude::*;
use provisioning_attrs::enums::{self, BackupMode, MtaLmtpHostLookup, StringEnum};

fn any_definition() -> impl Strategy<Value = usize> {
    0..enums::all().len()
}

proptest! {
    #[test]
    fn parse_accepts_exactly_declared_values(index in any_definition(), input in ".{0,24}") {
        let definition = &enums::all()[index];
        let declared = definition.wire_values().any(|w| w == input);
        prop_assert_eq!(definition.parse(&input).is_ok(), declared);
        prop_assert_eq!(definition.accepts(&input), declared);
    }

    #[test]
    fn every_variant_round_trips(index in any_definition(), pick in any::<prop::sample::Index>()) {
        let definition = &enums::all()[index];
        let variant = pick.get(definition.variants);
        let parsed = definition.parse(variant.wire_value).expect("declared wire value");
        prop_assert_eq!(parsed, variant);
    }

    #[test]
    fn rejection_lists_every_value(index in any_definition(), suffix in "[a-z]{1,8}") {
        let definition = &enums::all()[index];
        let input = format!("__{}__", suffix);
        let err = definition.parse(&input).expect_err("not a wire value");
        prop_assert_eq!(&err.value, &input);
        prop_assert_eq!(err.valid_values.len(), definition.len());
        prop_assert!(err.valid_values.iter().copied().eq(definition.wire_values()));
    }

    #[test]
    fn padded_values_are_rejected(index in any_definition(), pick in any::<prop::sample::Index>(), pad in "[ \t\r\n]{1,3}") {
        let definition = &enums::all()[index];
        let wire = pick.get(definition.variants).wire_value;
        let leading = format!("{pad}{wire}");
        let trailing = format!("{wire}{pad}");
        prop_assert!(definition.parse(&leading).is_err());
        prop_assert!(definition.parse(&trailing).is_err());
    }
}

#[test]
fn fixed_rejections() {
    for (_, definition) in common::indexed_definitions() {
        for input in ["", " ", "__not_a_real_value__"] {
            let err = definition.parse(input).expect_err("not a wire value");
            assert_eq!(err.valid_values.len(), definition.len());
        }
    }
}

#[test]
fn case_transforms_fail_unless_declared() {
    let mut checked = 0;
    for definition in enums::all() {
        for wire in definition.wire_values() {
            for transformed in [wire.to_uppercase(), wire.to_lowercase()] {
                if transformed == wire {
                    continue;
                }
                checked += 1;
                let declared = definition.wire_values().any(|w| w == transformed);
                assert_eq!(
                    definition.parse(&transformed).is_ok(),
                    declared,
                    "{}: {}",
                    definition.type_name,
                    transformed
                );
            }
        }
    }
    assert!(checked > 0);
}

#[test]
fn contract_values_are_bit_exact() {
    for (type_name, expected) in fixtures::contract_enums() {
        let definition = enums::definition(type_name).expect("declared enum");
        let declared: Vec<&str> = definition.wire_values().collect();
        assert_eq!(declared, expected, "{type_name}");
    }
}

#[test]
fn symbolic_spelling_is_not_a_wire_value() {
    for (type_name, symbolic, wire) in fixtures::divergent_variants() {
        let definition = enums::definition(type_name).expect("declared enum");
        let variant = definition.parse(wire).expect("declared wire value");
        assert_eq!(variant.symbolic_name, symbolic);
        assert!(definition.parse(symbolic).is_err(), "{type_name}: {symbolic}");
    }

    assert!(BackupMode::parse("Auto_Grouped").is_err());
    assert_eq!(MtaLmtpHostLookup::parse("native"), Ok(MtaLmtpHostLookup::Native));
    assert!(MtaLmtpHostLookup::parse("native_").is_err());
}

#[test]
fn declared_variant_count() {
    assert_eq!(enums::all().len(), 46);
    assert_eq!(common::total_variants(), 144);
}

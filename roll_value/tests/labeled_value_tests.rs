//! Tests for labeled values.

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use roll_value::prelude::*;

fn attack(value: Value) -> LabeledValue {
    labeled_value(value, Label::new("Attack", 1))
}

#[test]
fn test_projections_read_through() {
    let lv = attack(long_value(15));
    assert!(lv.has_label());
    assert_eq!(lv.label(), &Label::new("Attack", 1));
    assert_eq!(lv.data_type(), DataType::Long);
    assert_eq!(lv.as_text().unwrap(), "15");
    assert_eq!(lv.as_integer().unwrap(), 15);
    assert_eq!(lv.as_float().unwrap(), 15.0);
    assert_eq!(lv.as_list().unwrap(), vec![long_value(15)]);
    assert!(lv.as_boolean());
    assert_eq!(
        lv.as_dictionary().unwrap_err().kind(),
        ErrorKind::UnsupportedConversion
    );
}

#[test]
fn test_arithmetic_never_carries_the_label() {
    let lv = labeled_value(long_value(5), Label::new("X", 0));
    let sum = lv.add(&long_value(1)).unwrap();
    assert!(!sum.has_label());
    assert_eq!(sum, long_value(6));

    for op in BinOp::ALL {
        let derived = lv.apply(op, &long_value(2)).unwrap();
        assert!(!derived.has_label());
    }
    assert_eq!(lv.negate().unwrap(), long_value(-5));
}

#[test]
fn test_labeled_operand_on_the_right() {
    let lv = attack(long_value(4));
    assert_eq!(long_value(10).subtract(&lv).unwrap(), long_value(6));
    assert_eq!(lv.multiply(&lv).unwrap(), long_value(16));
}

#[test]
fn test_coercion_to_own_category_keeps_label() {
    let lv = attack(string_value("hit"));
    let same = lv.as_string_value().unwrap();
    assert!(same.has_label());
    assert_eq!(same.label().name(), "Attack");
    assert_eq!(same, Datum::from(lv.clone()));

    let listed = lv.as_list_value().unwrap();
    assert!(!listed.has_label());
    assert_eq!(listed.value(), &list_value([string_value("hit")]));
}

#[test]
fn test_failed_coercion_propagates() {
    let lv = attack(string_value("hit"));
    assert_eq!(
        lv.as_long_value().unwrap_err().kind(),
        ErrorKind::NumericConversion
    );
}

#[test]
fn test_equality_and_hash() {
    let a = attack(long_value(3));
    let b = attack(long_value(3));
    let other_label = labeled_value(long_value(3), Label::new("Attack", 2));
    let other_value = attack(long_value(4));
    assert_eq!(a, b);
    assert_ne!(a, other_label);
    assert_ne!(a, other_value);

    let set: HashSet<LabeledValue> = [a, b, other_label].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_labels_do_not_nest() {
    let lv = attack(long_value(3));
    // Relabeling goes through the plain value, so the old label is replaced.
    let relabeled = lv.value().with_label(Label::new("Damage", 0));
    assert_eq!(relabeled.label().name(), "Damage");
    assert_eq!(relabeled.value(), &long_value(3));
}

#[test]
fn test_no_label_for_plain_values() {
    let v = double_value(1.5);
    assert!(!v.has_label());
    assert_eq!(v.label().name(), "NO LABEL");
    assert_eq!(v.label().index(), 0);
}

#[test]
fn test_display() {
    let lv = attack(long_value(15));
    insta::assert_snapshot!(lv.to_string(), @"Long: 15{Label: Attack,1}");
}

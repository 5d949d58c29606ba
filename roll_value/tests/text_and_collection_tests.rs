//! Tests for String, List, Dictionary, Boolean and Null values.

use pretty_assertions::assert_eq;
use roll_value::prelude::*;

// ==================== String ====================

#[test]
fn test_string_projections() {
    let v = string_value("12");
    assert_eq!(v.data_type(), DataType::String);
    assert_eq!(v.as_text().unwrap(), "12");
    assert_eq!(v.as_integer().unwrap(), 12);
    assert_eq!(v.as_float().unwrap(), 12.0);
    assert_eq!(v.as_list().unwrap(), vec![v.clone()]);
    assert!(v.as_boolean());
    assert!(!string_value("").as_boolean());
}

#[test]
fn test_string_numeric_parse_failures() {
    let err = string_value("sword").as_integer().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NumericConversion);
    let err = string_value("sword").as_long_value().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NumericConversion);
    assert_eq!(string_value("2.5").as_float().unwrap(), 2.5);
    assert_eq!(
        string_value("2.5").as_double_value().unwrap().value(),
        &double_value(2.5)
    );
}

#[test]
fn test_string_operators() {
    let a = string_value("a");
    let b = string_value("b");
    assert_eq!(a.add(&b).unwrap().as_text().unwrap(), "ab");
    assert_eq!(
        string_value("hello world")
            .subtract(&string_value("world"))
            .unwrap()
            .as_text()
            .unwrap(),
        "hello "
    );
    assert_eq!(
        string_value("abcabc").subtract(&string_value("b")).unwrap(),
        string_value("acac")
    );
    assert_eq!(
        string_value("ab").multiply(&long_value(3)).unwrap().as_text().unwrap(),
        "ababab"
    );
    assert_eq!(
        string_value("ab").multiply(&long_value(0)).unwrap().as_text().unwrap(),
        ""
    );
    assert_eq!(
        long_value(2).multiply(&string_value("xy")).unwrap(),
        string_value("xyxy")
    );
}

#[test]
fn test_string_repetition_truncates_count() {
    let s = string_value("ab");
    assert_eq!(s.multiply(&double_value(2.9)).unwrap(), string_value("abab"));
    assert_eq!(s.multiply(&double_value(-0.5)).unwrap(), string_value(""));
    assert_eq!(s.multiply(&double_value(f64::NAN)).unwrap(), string_value(""));
    assert_eq!(
        double_value(f64::NEG_INFINITY).multiply(&s).unwrap(),
        string_value("")
    );
}

#[test]
fn test_string_repetition_too_large_is_an_error() {
    let s = string_value("ab");
    let err = s.multiply(&long_value(i64::MAX)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "UnsupportedOperation: multiply(String, Long): repeated string is too large"
    );
    let err = double_value(f64::INFINITY).multiply(&s).unwrap_err();
    assert_eq!(
        err.to_string(),
        "UnsupportedOperation: multiply(Double, String): repeated string is too large"
    );
    // Nothing to repeat, so any count fits
    assert_eq!(
        string_value("").multiply(&long_value(i64::MAX)).unwrap(),
        string_value("")
    );
}

#[test]
fn test_string_rejections() {
    let s = string_value("a");
    assert_eq!(
        s.multiply(&string_value("b")).unwrap_err().kind(),
        ErrorKind::UnsupportedOperation
    );
    assert_eq!(
        s.subtract(&long_value(1)).unwrap_err().kind(),
        ErrorKind::UnsupportedOperation
    );
    for op in [BinOp::Divide, BinOp::Remainder, BinOp::Power] {
        assert_eq!(
            s.apply(op, &long_value(2)).unwrap_err().kind(),
            ErrorKind::UnsupportedOperation
        );
    }
    assert_eq!(s.negate().unwrap_err().kind(), ErrorKind::UnsupportedOperation);
}

// ==================== List ====================

#[test]
fn test_list_projections() {
    let list = long_list_value([1, 2, 3]);
    assert_eq!(list.data_type(), DataType::List);
    assert_eq!(list.as_text().unwrap(), "[ 1, 2, 3 ]");
    assert_eq!(list.as_list().unwrap().len(), 3);
    assert!(list.as_boolean());
    assert!(!list_value([]).as_boolean());
    assert_eq!(
        list.as_integer().unwrap_err().kind(),
        ErrorKind::NumericConversion
    );
    assert_eq!(
        list.as_dictionary().unwrap_err().kind(),
        ErrorKind::UnsupportedConversion
    );
    assert!(list.as_list_value().unwrap().value().ptr_eq(&list));
}

#[test]
fn test_list_concatenation() {
    let a = long_value(1);
    let list = list_value([a.clone(), a.clone()]);
    assert_eq!(
        list.add(&list).unwrap(),
        list_value([a.clone(), a.clone(), a.clone(), a.clone()])
    );
    assert_eq!(
        string_value("s").add(&list).unwrap(),
        list_value([string_value("s"), a.clone(), a])
    );
}

#[test]
fn test_list_row_beats_null_row() {
    // A List operand takes the List rule before the Null rule is consulted,
    // and then fails converting the Null operand to a list.
    let list = list_value([null_value()]);
    let err = list.add(&null_value()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedConversion);

    let err = list.multiply(&null_value()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "UnsupportedOperation: multiply(List, Null): cannot multiply a list"
    );
}

#[test]
fn test_list_subtraction_removes_all_occurrences() {
    let a = long_value(1);
    let b = long_value(2);
    let list = list_value([a.clone(), a.clone(), b.clone()]);
    assert_eq!(
        list.subtract(&list_value([a.clone()])).unwrap(),
        list_value([b.clone()])
    );
    // Cross-type numeric equality decides membership
    assert_eq!(
        list.subtract(&list_value([double_value(2.0)])).unwrap(),
        list_value([a.clone(), a])
    );
    assert_eq!(
        list.subtract(&b).unwrap_err().kind(),
        ErrorKind::UnsupportedOperation
    );
}

#[test]
fn test_list_rejects_remaining_operators() {
    let list = list_value([]);
    for op in [BinOp::Multiply, BinOp::Divide, BinOp::Remainder, BinOp::Power] {
        assert_eq!(
            list.apply(op, &long_value(2)).unwrap_err().kind(),
            ErrorKind::UnsupportedOperation,
            "{} on a list",
            op.name()
        );
    }
}

#[test]
fn test_list_display() {
    let list = list_value([long_value(1), string_value("a")]);
    insta::assert_snapshot!(list.to_string(), @"List [ Long: 1, String: a ]");
}

// ==================== Dictionary ====================

#[test]
fn test_dictionary_projections() {
    let dict = dictionary_value([("str", long_value(18)), ("dex", long_value(12))]);
    assert_eq!(dict.data_type(), DataType::Dictionary);
    assert_eq!(dict.as_text().unwrap(), "{ str:18, dex:12 }");
    assert_eq!(dict.as_dictionary().unwrap().get("dex"), Some(&long_value(12)));
    assert_eq!(dict.as_list().unwrap(), vec![dict.clone()]);
    assert!(dict.as_boolean());
    assert!(!dictionary_value::<_, String>([]).as_boolean());
    assert_eq!(
        dict.as_float().unwrap_err().kind(),
        ErrorKind::NumericConversion
    );
}

#[test]
fn test_dictionary_rejects_arithmetic() {
    let dict = dictionary_value([("k", long_value(1))]);
    for op in BinOp::ALL {
        let err = dict.apply(op, &long_value(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
    }
    // A List operand still wins for add
    assert_eq!(
        dict.add(&list_value([])).unwrap(),
        list_value([dict.clone()])
    );
}

#[test]
fn test_dictionary_display() {
    let dict = dictionary_value([("hp", long_value(12))]);
    insta::assert_snapshot!(dict.to_string(), @"Dictionary { hp = Long: 12 }");
}

// ==================== Boolean ====================

#[test]
fn test_boolean_values() {
    let t = boolean_value(true);
    assert_eq!(t.data_type(), DataType::Boolean);
    assert_eq!(t.as_text().unwrap(), "true");
    assert!(t.as_boolean());
    assert!(!boolean_value(false).as_boolean());
    assert_eq!(
        t.as_integer().unwrap_err().kind(),
        ErrorKind::NumericConversion
    );
    assert_eq!(
        t.add(&string_value("x")).unwrap_err().kind(),
        ErrorKind::UnsupportedOperation
    );
    assert!(t.as_boolean_value().unwrap().value().ptr_eq(&t));
}

#[test]
fn test_boolean_interning() {
    let first = boolean_value(true);
    let second = boolean_value(true);
    assert!(first.ptr_eq(&second));
    assert!(long_value(1)
        .as_boolean_value()
        .unwrap()
        .value()
        .ptr_eq(&first));
}

// ==================== Null ====================

#[test]
fn test_null_projections() {
    let n = null_value();
    assert_eq!(n.data_type(), DataType::Null);
    assert!(!n.as_boolean());
    assert_eq!(
        n.as_text().unwrap_err().kind(),
        ErrorKind::UnsupportedConversion
    );
    assert_eq!(
        n.as_integer().unwrap_err().kind(),
        ErrorKind::UnsupportedConversion
    );
    assert_eq!(
        n.as_list().unwrap_err().kind(),
        ErrorKind::UnsupportedConversion
    );
    assert_eq!(
        n.as_result().unwrap_err().kind(),
        ErrorKind::UnsupportedConversion
    );
}

#[test]
fn test_null_coercions_stay_null() {
    let n = null_value();
    for target in DataType::ALL {
        if target == DataType::Any {
            continue;
        }
        let coerced = target.coerce(&n).unwrap();
        assert!(coerced.value().ptr_eq(&n), "coerce null to {}", target);
    }
}

#[test]
fn test_null_rejects_arithmetic() {
    for op in BinOp::ALL {
        let err = long_value(1).apply(op, &null_value()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
    }
    // Null is consulted before String
    let err = string_value("a").add(&null_value()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "UnsupportedOperation: add(String, Null): cannot add with a Null"
    );
}

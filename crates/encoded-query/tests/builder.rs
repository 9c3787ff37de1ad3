//! End-to-end tests for the fluent builder and the rendered query strings.

use chrono::{NaiveDate, NaiveDateTime};
use encoded_query::{MissingField, Operator, Query, QueryError};

fn date(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn date_literal(value: &str) -> String {
    format!(r#"javascript:gs.dateGenerate("{value}")"#)
}

#[test]
fn test_condition_without_field() {
    let err = Query::new().equals("test").unwrap_err();
    assert_eq!(err, QueryError::FieldMissing(MissingField::BeforeCondition));
}

#[test]
fn test_field_without_condition_is_empty() {
    let mut q = Query::new();
    q.field("test").unwrap();
    assert_eq!(q.build(), Err(QueryError::EmptyQuery));
}

#[test]
fn test_empty_query() {
    assert_eq!(Query::new().build(), Err(QueryError::EmptyQuery));
}

#[test]
fn test_multiple_conditions() {
    let mut q = Query::new();
    let err = q
        .field("test")
        .unwrap()
        .equals("test")
        .unwrap()
        .between(1, 2)
        .unwrap_err();

    assert_eq!(
        err,
        QueryError::MultipleConditions {
            field: "test".to_string()
        }
    );
    assert_eq!(q.build().unwrap(), "test=test");
}

#[test]
fn test_unfinished_logical() {
    let mut q = Query::new();
    q.field("test").unwrap().equals("test").unwrap().and().unwrap();

    assert_eq!(
        q.build(),
        Err(QueryError::FieldMissing(MissingField::DanglingJoin))
    );
}

#[test]
fn test_logical_and() {
    let mut q = Query::new();
    q.field("test")
        .unwrap()
        .equals("test")
        .unwrap()
        .and()
        .unwrap()
        .field("test2")
        .unwrap()
        .equals("test")
        .unwrap();

    assert_eq!(q.build().unwrap(), "test=test^test2=test");
}

#[test]
fn test_logical_or() {
    let mut q = Query::new();
    q.field("test")
        .unwrap()
        .equals("test")
        .unwrap()
        .or()
        .unwrap()
        .field("test2")
        .unwrap()
        .equals("test")
        .unwrap();

    assert_eq!(q.build().unwrap(), "test=test^ORtest2=test");
}

#[test]
fn test_logical_nq() {
    let mut q = Query::new();
    q.field("test")
        .unwrap()
        .equals("test")
        .unwrap()
        .nq()
        .unwrap()
        .field("test2")
        .unwrap()
        .equals("test")
        .unwrap();

    assert_eq!(q.build().unwrap(), "test=test^NQtest2=test");
}

#[test]
fn test_between() {
    let err = Query::new()
        .field("test")
        .unwrap()
        .between("test", "test")
        .unwrap_err();
    assert!(matches!(
        err,
        QueryError::Type {
            operator: Operator::Between,
            ..
        }
    ));

    let mut ints = Query::new();
    ints.field("test").unwrap().between(1, 2).unwrap();
    assert_eq!(ints.build().unwrap(), "testBETWEEN1@2");

    let mut dates = Query::new();
    dates
        .field("test")
        .unwrap()
        .between(date(1970, 1, 1), date(1970, 1, 2))
        .unwrap();
    assert_eq!(
        dates.build().unwrap(),
        format!(
            "testBETWEEN{}@{}",
            date_literal("1970-01-01 00:00:00"),
            date_literal("1970-01-02 00:00:00")
        )
    );
}

#[test]
fn test_between_mixed_kinds() {
    let err = Query::new()
        .field("test")
        .unwrap()
        .between(1, date(1970, 1, 2))
        .unwrap_err();
    assert!(matches!(err, QueryError::Type { .. }));
}

#[test]
fn test_string_operators() {
    let cases: [(fn(&mut Query) -> encoded_query::Result<&mut Query>, &str); 4] = [
        (|q| q.starts_with("val"), "testSTARTSWITHval"),
        (|q| q.ends_with("val"), "testENDSWITHval"),
        (|q| q.contains("val"), "testLIKEval"),
        (|q| q.not_contains("val"), "testNOTLIKEval"),
    ];

    for (apply, expected) in cases {
        let mut q = Query::new();
        apply(q.field("test").unwrap()).unwrap();
        assert_eq!(q.build().unwrap(), expected);
    }

    assert!(Query::new().field("test").unwrap().starts_with(1).is_err());
    assert!(Query::new().field("test").unwrap().ends_with(1).is_err());
    assert!(Query::new().field("test").unwrap().contains(1).is_err());
    assert!(Query::new().field("test").unwrap().not_contains(1).is_err());
}

#[test]
fn test_is_empty() {
    let mut q = Query::new();
    q.field("test").unwrap().is_empty().unwrap();
    assert_eq!(q.build().unwrap(), "testISEMPTY");
}

#[test]
fn test_equals() {
    let err = Query::new()
        .field("test")
        .unwrap()
        .equals(date(1970, 1, 1))
        .unwrap_err();
    assert!(matches!(err, QueryError::Type { .. }));

    let mut q = Query::new();
    q.field("test").unwrap().equals("test").unwrap();
    assert_eq!(q.build().unwrap(), "test=test");

    let mut q = Query::new();
    q.field("test").unwrap().equals(42).unwrap();
    assert_eq!(q.build().unwrap(), "test=42");
}

#[test]
fn test_not_equals() {
    assert!(
        Query::new()
            .field("test")
            .unwrap()
            .not_equals(date(1970, 1, 1))
            .is_err()
    );

    let mut q = Query::new();
    q.field("test").unwrap().not_equals("test").unwrap();
    assert_eq!(q.build().unwrap(), "test!=test");
}

#[test]
fn test_greater_and_less_than() {
    assert!(Query::new().field("test").unwrap().greater_than("a").is_err());
    assert!(Query::new().field("test").unwrap().less_than("a").is_err());

    let mut q = Query::new();
    q.field("test").unwrap().greater_than(1).unwrap();
    assert_eq!(q.build().unwrap(), "test>1");

    let mut q = Query::new();
    q.field("test").unwrap().less_than(1).unwrap();
    assert_eq!(q.build().unwrap(), "test<1");
}

#[test]
fn test_build_is_idempotent() {
    let mut q = Query::new();
    q.field("test").unwrap().equals("test").unwrap();

    let first = q.build().unwrap();
    let second = q.build().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_complex_query() {
    let mut q = Query::new();
    q.field("f1")
        .unwrap()
        .equals("val1")
        .unwrap()
        .and()
        .unwrap()
        .field("f2")
        .unwrap()
        .between(date(2016, 2, 1), date(2016, 2, 10))
        .unwrap()
        .nq()
        .unwrap()
        .field("f3")
        .unwrap()
        .equals("val3")
        .unwrap();

    assert_eq!(
        q.build().unwrap(),
        format!(
            "f1=val1^f2BETWEEN{}@{}^NQf3=val3",
            date_literal("2016-02-01 00:00:00"),
            date_literal("2016-02-10 00:00:00")
        )
    );
    assert_eq!(q.statement_count(), 3);
}

#[test]
fn test_question_mark_chaining() -> encoded_query::Result<()> {
    let mut q = Query::new();
    q.field("active")?
        .equals("true")?
        .and()?
        .field("priority")?
        .greater_than_or_equal(2)?
        .and()?
        .field("assigned_to")?
        .is_not_empty()?
        .order_descending("sys_updated_on")?;

    assert_eq!(
        q.build()?,
        "active=true^priority>=2^assigned_toISNOTEMPTY^ORDERBYDESCsys_updated_on"
    );
    Ok(())
}

#[test]
fn test_field_without_join_keeps_query_usable() {
    let mut q = Query::new();
    q.field("a").unwrap().equals(1).unwrap();
    assert_eq!(q.build().unwrap(), "a=1");

    let err = q.field("b").unwrap_err();
    assert_eq!(
        err,
        QueryError::MultipleConditions {
            field: "b".to_string()
        }
    );
    assert_eq!(q.build().unwrap(), "a=1");

    q.or().unwrap().field("c").unwrap().equals(3).unwrap();
    q.order_ascending("c").unwrap();
    assert_eq!(q.build().unwrap(), "a=1^ORc=3^ORDERBYc");
}

#[test]
fn test_empty_field_name() {
    let err = Query::new().field("").unwrap_err();
    assert_eq!(err, QueryError::FieldMissing(MissingField::EmptyName));
}

use super::*;

fn row(destination: &str, field: &str) -> ExpectationRow {
    ExpectationRow {
        id: "2".to_string(),
        destination: destination.to_string(),
        record_key: "app_001".to_string(),
        field: field.to_string(),
        export: String::new(),
        expected: "Ada".to_string(),
        filters: None,
        status: Status::Untested,
        actual: None,
    }
}

#[test]
fn test_build_case_starts_untested() {
    let case = build_case(&row("person", "first")).unwrap();
    assert_eq!(case.status, Status::Untested);
    assert!(case.actual.is_none());
    assert_eq!(case.destination(), "person");
}

#[test]
fn test_build_case_unknown_destination() {
    let err = build_case(&row("transcript", "gpa")).unwrap_err();
    assert!(matches!(err, CatalogError::UnknownDestination { .. }));
}

#[test]
fn test_build_case_unknown_variant() {
    let mut r = row("person field", "hobbies");
    r.export = "export 9".to_string();
    let err = build_case(&r).unwrap_err();
    assert!(matches!(err, CatalogError::UnknownExportVariant { .. }));
}

#[test]
fn test_sql_base_query() {
    let case = build_case(&row("person", "ssn")).unwrap();
    let sql = case.sql();
    assert!(sql.contains(r#"p."ssn" as actual"#));
    assert!(sql.contains("from application a"));
    assert!(sql.contains("join person p on a.person = p.id"));
    assert!(sql.contains("a.external_id = 'app_001'"));
    assert!(sql.trim_end().ends_with("limit 1"));
}

#[test]
fn test_sql_includes_join_fragment() {
    let case = build_case(&row("address", "city")).unwrap();
    let sql = case.sql();
    assert!(sql.contains("join address ad on ad.record = p.id"));
    assert!(sql.contains(r#"ad."city" as actual"#));
}

#[test]
fn test_sql_appends_filters() {
    let mut r = row("address", "city");
    r.filters = Some(r#"ad.type = "home""#.to_string());
    let case = build_case(&r).unwrap();
    let sql = case.sql();
    assert!(sql.contains("and ad.type = 'home'"));
}

#[test]
fn test_sql_escapes_record_key() {
    let mut r = row("person", "first");
    r.record_key = "app'; drop table person; --".to_string();
    let case = build_case(&r).unwrap();
    assert!(case.sql().contains("app''; drop table person; --"));
}

#[test]
fn test_sql_multi_value_uses_variant() {
    let mut r = row("application field", "major");
    r.export = "export 1".to_string();
    let case = build_case(&r).unwrap();
    let sql = case.sql();
    assert!(sql.contains("from field_export "));
    assert!(sql.contains("v.record = a.id"));
}

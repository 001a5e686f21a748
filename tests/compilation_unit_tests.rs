use tinyjava::ast::{CompilationUnit, Visibility};
use tinyjava::{parse_java, Error};

const AUTHENTICATOR_HEADER: &str = r#"
package com.google.android.apps.authenticator;

import com.google.android.apps.authenticator.testability.TestableActivity;
import com.google.android.apps.authenticator2.R;

@FixWhenMinSdkVersion(11)
public class AuthenticatorActivity extends TestableActivity
"#;

#[test]
fn parses_a_realistic_file_header() {
    let unit = parse_java(AUTHENTICATOR_HEADER).expect("should parse");

    let package: Vec<_> = unit
        .package
        .package_name
        .identifiers()
        .iter()
        .map(|identifier| identifier.as_str())
        .collect();
    assert_eq!(
        package,
        vec!["com", "google", "android", "apps", "authenticator"]
    );

    assert_eq!(unit.imports.len(), 2);
    assert_eq!(
        unit.imports[1].to_string(),
        "import com.google.android.apps.authenticator2.R;"
    );

    assert_eq!(unit.class.visibility, Visibility::Public);
    assert_eq!(unit.class.name.as_str(), "AuthenticatorActivity");
    assert!(unit.class.annotation.is_some());
}

#[test]
fn parses_a_minimal_unit() {
    let unit = parse_java("package demo;\npublic class Demo").expect("should parse");
    assert!(unit.imports.is_empty());
    assert!(unit.class.base_class.is_none());
    assert!(unit.class.annotation.is_none());
}

#[test]
fn renders_back_to_canonical_source() {
    let source = "package demo;\nimport java.util.List;\npublic class Demo extends Base";
    let unit = CompilationUnit::parse(source).expect("should parse");
    assert_eq!(unit.to_string(), source);
}

#[test]
fn package_statement_is_mandatory() {
    assert!(parse_java("public class Demo").is_err());
}

#[test]
fn a_second_class_is_trailing_input() {
    let source = "package demo;\npublic class A\npublic class B";
    let result = parse_java(source);
    match result {
        Err(Error::Parse { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected a parse error on line 3, got {:?}", other),
    }
}

#[test]
fn parse_errors_carry_line_and_column() {
    let result = parse_java("package demo\npublic class Demo");
    match result {
        Err(Error::Parse { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn empty_input_is_reported_as_missing() {
    assert!(matches!(parse_java(""), Err(Error::MissingInput)));
}

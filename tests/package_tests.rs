use tinyjava::ast::{PackageName, PackageStatement};
use tinyjava::Error;

fn dotted(statement: &PackageStatement) -> String {
    statement
        .package_name
        .identifiers()
        .iter()
        .map(|identifier| identifier.as_str())
        .collect::<Vec<_>>()
        .join(".")
}

#[test]
fn parses_a_single_segment_package() {
    let statement = PackageStatement::parse("package demo;").expect("should parse");
    assert_eq!(dotted(&statement), "demo");
}

#[test]
fn parses_a_dotted_package() {
    let statement =
        PackageStatement::parse("package com.google.android.apps.authenticator;")
            .expect("should parse");
    assert_eq!(dotted(&statement), "com.google.android.apps.authenticator");
}

#[test]
fn any_dotted_path_survives_a_package_statement() {
    for path in ["a", "a.b", "x9.y.z", "one.two.three.four.five"] {
        let statement =
            PackageStatement::parse(&format!("package {};", path)).expect("should parse");
        assert_eq!(dotted(&statement), path);
    }
}

#[test]
fn renders_back_to_source() {
    let source = "package com.example.app;";
    let statement = PackageStatement::parse(source).expect("should parse");
    assert_eq!(statement.to_string(), source);
}

#[test]
fn tolerates_surrounding_whitespace() {
    let statement = PackageStatement::parse("  package demo ;  ").expect("should parse");
    assert_eq!(dotted(&statement), "demo");
}

#[test]
fn empty_input_is_reported_as_missing() {
    let result = PackageStatement::parse("");
    assert!(matches!(result, Err(Error::MissingInput)));
}

#[test]
fn missing_semicolon_is_an_error() {
    assert!(PackageStatement::parse("package demo").is_err());
}

#[test]
fn trailing_dot_is_an_error() {
    assert!(PackageStatement::parse("package demo.;").is_err());
}

#[test]
fn a_bare_name_parses_as_a_package_name() {
    let name = PackageName::parse("java.util").expect("should parse");
    assert_eq!(name.identifiers().len(), 2);
    assert_eq!(name.identifiers()[0].as_str(), "java");
    assert_eq!(name.identifiers()[1].as_str(), "util");
}

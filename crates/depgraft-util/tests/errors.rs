use depgraft_util::errors::GraftError;

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = GraftError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_schema_error_display() {
    let err = GraftError::Schema {
        message: "expected a table".to_string(),
    };
    assert_eq!(err.to_string(), "Schema error: expected a table");
}

#[test]
fn test_no_matching_variant_display() {
    let err = GraftError::NoMatchingVariant {
        component: "org.example:lib:1.0".to_string(),
        attributes: "{usage=java-api}".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "No variant of org.example:lib:1.0 matches the consumer attributes {usage=java-api}"
    );
}

#[test]
fn test_ambiguous_variant_display_lists_candidates() {
    let err = GraftError::AmbiguousVariant {
        component: "org.example:lib:1.0".to_string(),
        candidates: vec!["apiElements".to_string(), "runtimeElements".to_string()],
    };
    assert_eq!(
        err.to_string(),
        "Cannot choose between the variants of org.example:lib:1.0: apiElements, runtimeElements"
    );
}

#[test]
fn test_io_error_from_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: GraftError = io_err.into();
    assert!(matches!(err, GraftError::Io(_)));
}

#[test]
fn test_converts_into_miette_report() {
    fn fails() -> depgraft_util::errors::GraftResult<()> {
        Err(GraftError::Schema {
            message: "bad".to_string(),
        })?;
        Ok(())
    }
    let report = fails().unwrap_err();
    assert_eq!(report.to_string(), "Schema error: bad");
}

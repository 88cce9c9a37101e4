use std::io;

use kiln::data::{MetadataType, ThemeKind};
use kiln::error::Error;

#[test]
fn test_option_not_valid_display() {
    let err = Error::option_not_valid("foo", ["a", "b"]);
    assert_eq!(
        err.to_string(),
        "Option not valid: 'foo'. Valid options are: a, b."
    );
}

#[test]
fn test_enum_parsing_errors() {
    let err = "fancy".parse::<ThemeKind>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Option not valid: 'fancy'. Valid options are: blank, styled, existing."
    );
    assert!("many".parse::<MetadataType>().is_err());
    assert_eq!("list".parse::<MetadataType>().unwrap(), MetadataType::List);
}

#[test]
fn test_io_error_keeps_path() {
    let err = Error::io("/tmp/x", io::Error::new(io::ErrorKind::NotFound, "gone"));
    match &err {
        Error::IoError { path, .. } => assert_eq!(path.to_str(), Some("/tmp/x")),
        _ => panic!("Expected IoError variant"),
    }
    assert!(err.to_string().contains("/tmp/x"));
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config.");

    let err = Error::ArtifactNotFound {
        kind: "resource".into(),
        name: "posts".into(),
    };
    assert_eq!(err.to_string(), "The resource 'posts' does not exist in this project.");
}

#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the icon-badge crate."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint. The lint is disabled for
//! the module to keep the generated implementations warning-free.
//!
//! Serialization itself never fails; every variant here originates from a
//! boundary: the configuration file, the shields.io service, or the external
//! badge executable.

use std::path::{Path, PathBuf};

/// Unified error type returned by the configuration loader, the shield client,
/// the tool runner and the CLI.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// Wraps I/O errors that occur while reading configuration files.
    #[error("failed to read configuration from {path:?}: {source}")]
    Io {
        /// Location of the configuration file.
        path:   PathBuf,
        /// Underlying I/O error.
        source: std::io::Error
    },
    /// Wraps YAML decoding errors, including invalid colors and gravities.
    #[error("failed to parse configuration: {source}")]
    Parse {
        /// Source decoding error from serde_yaml.
        source: serde_yaml::Error
    },
    /// Returned when a request cannot be satisfied by the configuration.
    #[error("invalid configuration: {message}")]
    Validation {
        /// Human readable message describing the validation problem.
        message: String
    },
    /// Wraps serialization errors when writing JSON output.
    #[error("failed to serialize output: {source}")]
    Serialize {
        /// Underlying serialization error.
        source: serde_json::Error
    },
    /// Wraps I/O errors that occur while writing command output.
    #[error("failed to write output: {source}")]
    Output {
        /// Underlying I/O error.
        source: std::io::Error
    },
    /// Transport failure while talking to the shield service.
    #[error("shield request failed: {source}")]
    Http {
        /// Underlying HTTP client error.
        source: reqwest::Error
    },
    /// The shield service answered with a non-success status.
    #[error("shield service responded with HTTP {status}")]
    ShieldStatus {
        /// Status code returned by the service.
        status: u16
    },
    /// Wraps I/O errors that occur while writing a fetched shield.
    #[error("failed to write shield at {path:?}: {source}")]
    ShieldIo {
        /// Location of the SVG file being written.
        path:   PathBuf,
        /// Underlying I/O error reported by the operating system.
        source: std::io::Error
    },
    /// The badge executable could not be located on the search path.
    #[error("could not find the '{name}' executable on PATH")]
    ToolNotFound {
        /// Executable name that was searched for.
        name: String
    },
    /// The badge executable could not be started.
    #[error("failed to start {path:?}: {source}")]
    ToolSpawn {
        /// Resolved executable path.
        path:   PathBuf,
        /// Underlying I/O error reported by the operating system.
        source: std::io::Error
    },
    /// The badge executable exited unsuccessfully.
    #[error("badge exited unsuccessfully ({status})")]
    ToolExit {
        /// Rendered exit status reported by the operating system.
        status: String
    }
}

impl Error {
    /// Constructs a validation error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the validation failure.
    pub fn validation<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Validation {
            message: message.into()
        }
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// The returned string matches the [`std::fmt::Display`] implementation.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(source: serde_yaml::Error) -> Self {
        Self::Parse {
            source
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Serialize {
            source
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Self::Http {
            source
        }
    }
}

/// Creates an [`Error::Io`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Location of the configuration file that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source
    }
}

/// Creates an [`Error::ShieldIo`] variant capturing the failing path and
/// source.
///
/// # Parameters
///
/// * `path` - Location of the SVG file that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn shield_io_error(path: &Path, source: std::io::Error) -> Error {
    Error::ShieldIo {
        path: path.to_path_buf(),
        source
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn validation_constructor_populates_message() {
        let error = Error::validation("configuration has no shield section");
        match error {
            Error::Validation {
                ref message
            } => {
                assert_eq!(message, "configuration has no shield section");
            }
            other => panic!("expected validation error, got {other:?}")
        }
    }

    #[test]
    fn to_display_string_matches_display() {
        let error = Error::validation("display me");
        assert_eq!(error.to_string(), error.to_display_string());
    }

    #[test]
    fn io_error_helper_wraps_path_and_source() {
        let path = std::path::Path::new("/tmp/badge.yaml");
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error = super::io_error(path, io_error);

        match error {
            Error::Io {
                path: ref stored_path,
                ref source
            } => {
                assert_eq!(stored_path, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected io error, got {other:?}")
        }
    }

    #[test]
    fn serde_yaml_conversion_maps_to_parse_variant() {
        let error = serde_yaml::from_str::<usize>("not-a-number").unwrap_err();
        let mapped: Error = error.into();
        assert!(matches!(mapped, Error::Parse { .. }));
    }

    #[test]
    fn serde_json_conversion_maps_to_serialize_variant() {
        let invalid = serde_json::from_str::<serde_json::Value>("not-json").unwrap_err();
        let mapped: Error = invalid.into();
        assert!(matches!(mapped, Error::Serialize { .. }));
    }

    #[test]
    fn shield_io_error_helper_wraps_path_and_source() {
        let path = std::path::Path::new("/tmp/shield.svg");
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = super::shield_io_error(path, io_error);

        match error {
            Error::ShieldIo {
                path: ref stored_path,
                ref source
            } => {
                assert_eq!(stored_path, path);
                assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
            }
            other => panic!("expected shield io error, got {other:?}")
        }
    }

    #[test]
    fn tool_exit_reports_status() {
        let error = Error::ToolExit {
            status: "exit status: 2".to_owned()
        };
        assert_eq!(error.to_string(), "badge exited unsuccessfully (exit status: 2)");
    }

    #[test]
    fn shield_status_mentions_code() {
        let error = Error::ShieldStatus {
            status: 503
        };
        assert_eq!(error.to_string(), "shield service responded with HTTP 503");
    }
}

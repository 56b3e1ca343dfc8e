//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for configuration parsing, validation and installation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// Explicit `type` value outside the known network kinds
    #[error("Unknown nic type: {value}. Possible values are {}", expected.join(", "))]
    UnknownType {
        value: String,
        expected: Vec<String>,
    },

    /// Manual network configuration with DHCP disabled but no address
    #[error("Manual nic configuration with no auto DHCP requires an IP address")]
    MissingRequiredAddress,

    /// Interface name that cannot be used as part of a file name
    #[error("Invalid interface name '{name}': it must not contain '/' or NUL")]
    InvalidInterface { name: String },

    /// Input does not have a shape the parser can read at all
    #[error("Malformed configuration: {message}")]
    MalformedInput { message: String },

    /// Profile Error - profile file missing, unreadable or invalid
    #[error("Profile error: {message}")]
    Profile { message: String },

    /// Subvolume Error - invalid operation on the subvolume collection
    #[error("Subvolume error: {message}")]
    Subvolume { message: String },

    /// Apply Error - the installation target reported a failure
    #[error("Failed to {step}: {message}")]
    Apply { step: String, message: String },

    /// Prompt Error - the interactive input source failed
    #[error("Prompt error: {message}")]
    Prompt { message: String },
}

impl ConfigError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::UnknownType { .. }
            | Self::MissingRequiredAddress
            | Self::InvalidInterface { .. }
            | Self::MalformedInput { .. }
            | Self::Subvolume { .. } => 1,
            Self::Profile { .. } => 2,
            Self::Apply { .. } => 3,
            Self::Prompt { .. } => 4,
        }
    }

    /// Create an unknown type error listing the accepted values
    #[inline]
    pub fn unknown_type<S: Into<String>>(value: S, expected: &[&str]) -> Self {
        Self::UnknownType {
            value: value.into(),
            expected: expected.iter().map(|v| (*v).to_owned()).collect(),
        }
    }

    /// Create an invalid interface name error
    #[inline]
    pub fn invalid_interface<S: Into<String>>(name: S) -> Self {
        Self::InvalidInterface { name: name.into() }
    }

    /// Create a malformed input error
    #[inline]
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        Self::MalformedInput {
            message: message.into(),
        }
    }

    /// Create a profile error
    #[inline]
    pub fn profile<S: Into<String>>(message: S) -> Self {
        Self::Profile {
            message: message.into(),
        }
    }

    /// Create a subvolume error
    #[inline]
    pub fn subvolume<S: Into<String>>(message: S) -> Self {
        Self::Subvolume {
            message: message.into(),
        }
    }

    /// Create an apply error for the named installation step
    #[inline]
    pub fn apply<S: Into<String>, M: Into<String>>(step: S, message: M) -> Self {
        Self::Apply {
            step: step.into(),
            message: message.into(),
        }
    }

    /// Create a prompt error
    #[inline]
    pub fn prompt<S: Into<String>>(message: S) -> Self {
        Self::Prompt {
            message: message.into(),
        }
    }
}

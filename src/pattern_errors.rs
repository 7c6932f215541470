// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Error types for naming pattern and DNS name validation.
//!
//! Rendering a pattern never fails: unknown placeholders are left as literal
//! text. These errors are only produced by the opt-in checks in
//! [`crate::pattern::validate_pattern`] and [`crate::pattern::validate_fqdn`],
//! which are meant to run when a grid configuration is loaded.

use thiserror::Error;

/// Errors found while validating a naming pattern or a rendered DNS name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// The pattern is empty or whitespace only
    #[error("Pattern must not be empty")]
    EmptyPattern,

    /// The pattern contains `..`, which can never render to a valid DNS name
    #[error("Invalid pattern '{pattern}': consecutive dots are not allowed")]
    ConsecutiveDots {
        /// The offending pattern
        pattern: String,
    },

    /// A `{` without a matching `}` or the other way around
    #[error("Invalid pattern '{pattern}': unbalanced braces at position {position}")]
    UnbalancedBraces {
        /// The offending pattern
        pattern: String,
        /// Byte offset of the unmatched brace
        position: usize,
    },

    /// A placeholder that the pattern builder does not know how to fill
    #[error("Invalid pattern '{pattern}': unknown placeholder '{{{placeholder}}}'")]
    UnknownPlaceholder {
        /// The offending pattern
        pattern: String,
        /// Placeholder name without braces
        placeholder: String,
    },

    /// A rendered name contains a character not allowed in DNS names
    #[error("Invalid DNS name '{name}': character '{character}' is not allowed")]
    InvalidCharacter {
        /// The rendered name
        name: String,
        /// The first disallowed character
        character: char,
    },

    /// A rendered name contains an empty label (leading dot or `..`)
    #[error("Invalid DNS name '{name}': empty label")]
    EmptyLabel {
        /// The rendered name
        name: String,
    },

    /// A label exceeds 63 octets
    #[error("Invalid DNS name '{name}': label '{label}' exceeds {max} characters")]
    LabelTooLong {
        /// The rendered name
        name: String,
        /// The offending label
        label: String,
        /// Maximum label length
        max: usize,
    },

    /// The DNS name parser rejected the rendered name
    #[error("Invalid DNS name '{name}': {reason}")]
    InvalidDnsName {
        /// The rendered name
        name: String,
        /// Parser error message
        reason: String,
    },
}

impl PatternError {
    /// Returns true if this error is about a pattern rather than a rendered name.
    #[must_use]
    pub fn is_pattern_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyPattern
                | Self::ConsecutiveDots { .. }
                | Self::UnbalancedBraces { .. }
                | Self::UnknownPlaceholder { .. }
        )
    }
}

//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

/// Derive avatar initials from a participant identifier.
///
/// Takes the first character of each whitespace-separated token, at most two
/// tokens, upper-cased. An empty identifier yields empty initials.
pub fn initials(identifier: &str) -> String {
    identifier
        .split_whitespace()
        .take(2)
        .filter_map(|token| token.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

/// Neutralize control characters in a value interpolated into a
/// single-line text field, so the value cannot break out of its line.
pub fn sanitize_inline(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Basic email shape check used before submitting a signup.
pub fn is_valid_email(email: &str) -> bool {
    email.contains('@') && email.contains('.') && email.len() > 5
}

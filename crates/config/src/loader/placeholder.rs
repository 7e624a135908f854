//! `${VAR}` placeholder substitution.
//!
//! A `$` that is not followed by `{` is copied literally. Variable names are
//! ASCII letters, digits and `_`. Only presence is checked; values are
//! inserted verbatim (after the trimming `Environment::get` applies).

use thiserror::Error;

use super::env::Environment;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum PlaceholderError {
    #[error("environment variable {0} is not set")]
    Missing(String),

    #[error("unterminated placeholder (missing '}}')")]
    Unterminated,

    #[error("placeholder has an empty variable name")]
    EmptyName,

    #[error("placeholder '{0}' is not a valid variable name")]
    InvalidName(String),
}

/// Replace every `${VAR}` in `template` with its value from `env`.
pub(crate) fn substitute(template: &str, env: &Environment) -> Result<String, PlaceholderError> {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        output.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after.find('}').ok_or(PlaceholderError::Unterminated)?;
        let name = &after[..end];

        if name.is_empty() {
            return Err(PlaceholderError::EmptyName);
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(PlaceholderError::InvalidName(name.to_string()));
        }

        let value = env
            .get(name)
            .ok_or_else(|| PlaceholderError::Missing(name.to_string()))?;
        output.push_str(value);
        rest = &after[end + 1..];
    }

    output.push_str(rest);
    Ok(output)
}

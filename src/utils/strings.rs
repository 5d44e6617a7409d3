use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum StringError {
    #[error("Cannot capitalize an empty string")]
    Empty,
}

/// Upper-cases the first character of `s`, leaving the rest untouched.
pub fn ucfirst(s: &str) -> Result<String, StringError> {
    let mut chars = s.chars();
    let first = chars.next().ok_or(StringError::Empty)?;

    let mut capitalized: String = first.to_uppercase().collect();
    capitalized.push_str(chars.as_str());
    Ok(capitalized)
}

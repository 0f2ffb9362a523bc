use wsp_error::{Result, WspError};

/// Validate a declared package name, which may carry an npm-style scope
/// (`@scope/name`). A name that starts with the scope marker must contain a
/// separator with a non-empty scope before it and a non-empty remainder after
/// it; anything else is rejected rather than silently truncated.
pub fn validate_name(name: &str) -> Result<()> {
    strip_scope(name).map(|_| ())
}

/// The portion of a declared name after any `@scope/` prefix.
pub fn strip_scope(name: &str) -> Result<&str> {
    if name.is_empty() {
        return Err(WspError::InvalidName("name is empty".to_string()));
    }
    if !name.starts_with('@') {
        return Ok(name);
    }

    let Some(delim) = name.find('/') else {
        return Err(WspError::InvalidName(format!(
            "\"{name}\" starts with '@' but does not contain a '/'"
        )));
    };
    if delim < 2 {
        return Err(WspError::InvalidName(format!(
            "\"{name}\" has an empty scope"
        )));
    }
    let rest = &name[delim + 1..];
    if rest.is_empty() {
        return Err(WspError::InvalidName(format!(
            "\"{name}\" ends at the scope separator"
        )));
    }
    Ok(rest)
}

/// Default directory name for a package: the declared name with any scope
/// stripped.
pub fn dir_name_for(name: &str) -> Result<String> {
    strip_scope(name).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unscoped_names_pass_through() {
        assert_eq!(strip_scope("my-lib").unwrap(), "my-lib");
        assert_eq!(dir_name_for("my-lib").unwrap(), "my-lib");
    }

    #[test]
    fn scoped_names_lose_the_scope() {
        assert_eq!(strip_scope("@myorg/my-lib").unwrap(), "my-lib");
        assert_eq!(dir_name_for("@myorg/my-lib").unwrap(), "my-lib");
    }

    #[test]
    fn scope_without_separator_is_rejected() {
        assert!(matches!(
            strip_scope("@myorg"),
            Err(WspError::InvalidName(_))
        ));
    }

    #[test]
    fn name_ending_at_separator_is_rejected() {
        assert!(matches!(
            strip_scope("@myorg/"),
            Err(WspError::InvalidName(_))
        ));
    }

    #[test]
    fn empty_scope_is_rejected() {
        assert!(matches!(strip_scope("@/lib"), Err(WspError::InvalidName(_))));
        assert!(matches!(strip_scope(""), Err(WspError::InvalidName(_))));
    }
}

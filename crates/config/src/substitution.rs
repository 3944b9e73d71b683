use anyhow::Result;
use regex::Regex;
use std::env;
use tracing::{debug, warn};

/// Substitute environment variables in the form `${VAR_NAME}`.
///
/// Unset variables keep their placeholder; the validator flags them later.
pub fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{(\w+)\}").expect("valid placeholder regex");
    let mut result = content.to_string();

    for caps in re.captures_iter(content) {
        let var_name = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        let placeholder = caps.get(0).map(|m| m.as_str()).unwrap_or_default();

        match env::var(var_name) {
            Ok(value) => {
                debug!("Substituting environment variable: {}", var_name);
                result = result.replace(placeholder, &value);
            }
            Err(_) => {
                warn!("Environment variable '{}' not set", var_name);
            }
        }
    }

    Ok(result)
}

/// Check if a string contains unresolved `${VAR}` placeholders.
pub fn has_unresolved_env_vars(content: &str) -> bool {
    let re = Regex::new(r"\$\{(\w+)\}").expect("valid placeholder regex");
    re.is_match(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_set_variable() {
        std::env::set_var("CATALOG_TEST_SUBST", "value-123");

        let result = substitute_env_vars("url: ${CATALOG_TEST_SUBST}").unwrap();
        assert_eq!(result, "url: value-123");
        assert!(!has_unresolved_env_vars(&result));
    }

    #[test]
    fn test_unset_variable_keeps_placeholder() {
        let result = substitute_env_vars("url: ${CATALOG_TEST_DEFINITELY_UNSET}").unwrap();
        assert_eq!(result, "url: ${CATALOG_TEST_DEFINITELY_UNSET}");
        assert!(has_unresolved_env_vars(&result));
    }
}

//! Naming utilities for plan destinations and template contexts

/// Format a project name for infrastructure resources: lowercase, with runs
/// of non-alphanumeric characters collapsed to single dashes.
pub fn format_app_name(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !result.is_empty() {
                result.push('-');
            }
            pending_dash = false;
            result.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    result
}

/// File name for a type definition artifact. Lowercased so the mapping is
/// stable and collision-free on case-insensitive filesystems.
pub fn definition_file_name(type_name: &str) -> String {
    format!("{}.ts", type_name.to_lowercase())
}

/// Identifier used for interface participation bookkeeping
pub fn type_link(type_name: &str) -> String {
    format!("{}Type", type_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_app_name() {
        assert_eq!(format_app_name("MyBlog"), "myblog");
        assert_eq!(format_app_name("my blog"), "my-blog");
        assert_eq!(format_app_name("my__cool  app"), "my-cool-app");
        assert_eq!(format_app_name("  spaced  "), "spaced");
    }

    #[test]
    fn test_definition_file_name() {
        assert_eq!(definition_file_name("Status"), "status.ts");
        assert_eq!(definition_file_name("URLScalar"), "urlscalar.ts");
    }

    #[test]
    fn test_type_link() {
        assert_eq!(type_link("User"), "UserType");
    }
}

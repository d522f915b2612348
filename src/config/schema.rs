//! Schema of the project settings file.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Project settings read from `cirrus.yml`.
///
/// Relative paths resolve against the project root. `~` is not expanded.
///
/// # Example
///
/// ```yaml
/// builtins: /opt/cirrus/builtins
/// search_dirs:
///   function:
///     - ../shared/functions
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Root holding the built-in components (`<root>/<type>/config/...`).
    pub builtins: Option<PathBuf>,

    /// Extra search directories per type tag, searched after the
    /// project's own collection directory.
    pub search_dirs: BTreeMap<String, Vec<PathBuf>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_settings() {
        let settings: Settings = serde_yaml::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn parse_full_settings() {
        let yaml = r#"
builtins: /opt/cirrus/builtins
search_dirs:
  function:
    - ../shared/functions
    - /srv/functions
  workflow: [flows]
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.builtins, Some(PathBuf::from("/opt/cirrus/builtins")));
        assert_eq!(settings.search_dirs["function"].len(), 2);
        assert_eq!(settings.search_dirs["workflow"], vec![PathBuf::from("flows")]);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<Settings, _> = serde_yaml::from_str("bultins: /typo\n");
        assert!(result.is_err());
    }
}

use serde::Deserialize;

/// Comparator selection for the retention decision
///
/// This enum lives in the application layer because both the configuration
/// (config file, CLI) and the comparator factory need to understand it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparatorKind {
    /// In-process byte comparison (default)
    #[default]
    Builtin,
    /// External `cmp -s`
    Cmp,
}

impl std::str::FromStr for ComparatorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "builtin" => Ok(ComparatorKind::Builtin),
            "cmp" => Ok(ComparatorKind::Cmp),
            _ => Err(format!(
                "Invalid comparator: {}. Please specify 'builtin' or 'cmp'",
                s
            )),
        }
    }
}

impl std::fmt::Display for ComparatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComparatorKind::Builtin => write!(f, "builtin"),
            ComparatorKind::Cmp => write!(f, "cmp"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_comparator_kind_from_str() {
        assert_eq!(
            ComparatorKind::from_str("builtin").unwrap(),
            ComparatorKind::Builtin
        );
        assert_eq!(ComparatorKind::from_str("CMP").unwrap(), ComparatorKind::Cmp);
    }

    #[test]
    fn test_comparator_kind_from_str_invalid() {
        let error = ComparatorKind::from_str("diff").unwrap_err();
        assert!(error.contains("Invalid comparator"));
        assert!(error.contains("builtin"));
    }

    #[test]
    fn test_comparator_kind_default_is_builtin() {
        assert_eq!(ComparatorKind::default(), ComparatorKind::Builtin);
    }

    #[test]
    fn test_comparator_kind_display_round_trips() {
        for kind in [ComparatorKind::Builtin, ComparatorKind::Cmp] {
            assert_eq!(ComparatorKind::from_str(&kind.to_string()).unwrap(), kind);
        }
    }
}

/// A board name: trimmed and non-empty. Length limits are enforced on the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardName(String);

impl BoardName {
    /// Trim and validate. Whitespace-only input is rejected.
    pub fn new(raw: &str) -> Result<Self, &'static str> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err("Board name is required");
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Optional board description. Blank input collapses to no description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardDescription(Option<String>);

impl BoardDescription {
    pub fn new(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Self(None),
            Some(t) => Self(Some(t.to_string())),
        }
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed() {
        let name = BoardName::new("  Sprint  ").unwrap();
        assert_eq!(name.as_str(), "Sprint");
    }

    #[test]
    fn empty_and_whitespace_names_are_rejected() {
        assert!(BoardName::new("").is_err());
        assert!(BoardName::new(" \t\n ").is_err());
    }

    #[test]
    fn blank_description_becomes_none() {
        assert_eq!(BoardDescription::new(None).as_deref(), None);
        assert_eq!(BoardDescription::new(Some("   ")).as_deref(), None);
        assert_eq!(BoardDescription::new(Some(" plans ")).as_deref(), Some("plans"));
    }
}

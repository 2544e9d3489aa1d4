use tracing::error;

/// A problem found while turning an OpenAPI document into routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub location: String,
    pub kind: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(location: impl Into<String>, kind: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationIssue {
            location: location.into(),
            kind: kind.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.location, self.message)
    }
}

/// Fail with every collected issue listed, or succeed when there are none.
pub fn ensure_no_issues(issues: &[ValidationIssue]) -> anyhow::Result<()> {
    if issues.is_empty() {
        return Ok(());
    }
    for issue in issues {
        error!(
            kind = %issue.kind,
            location = %issue.location,
            message = %issue.message,
            "OpenAPI spec validation issue"
        );
    }
    let listed: Vec<String> = issues.iter().map(ToString::to_string).collect();
    anyhow::bail!(
        "OpenAPI spec validation failed. {} issue(s) found:\n{}",
        issues.len(),
        listed.join("\n")
    )
}

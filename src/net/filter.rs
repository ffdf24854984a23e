use regex::Regex;

/// Represents a call-log filter pattern
#[derive(Debug, Clone)]
pub enum FilterPattern {
    /// Prefix match: `record-*` matches functions starting with `record-`
    Prefix(String),
    /// Regex match: `re:^get-.*$` matches functions via regex
    Regex(Regex),
    /// Exact match: `mint` matches the function name exactly
    Exact(String),
}

impl FilterPattern {
    /// Parse a filter string into a FilterPattern
    ///
    /// - `re:<pattern>` → Regex filter
    /// - `<prefix>*` → Prefix filter (trailing `*`)
    /// - `<exact>` → Exact match
    pub fn parse(pattern: &str) -> Result<Self, String> {
        if let Some(regex_str) = pattern.strip_prefix("re:") {
            let regex = Regex::new(regex_str)
                .map_err(|e| format!("Invalid regex pattern '{}': {}", regex_str, e))?;
            Ok(FilterPattern::Regex(regex))
        } else if let Some(prefix) = pattern.strip_suffix('*') {
            Ok(FilterPattern::Prefix(prefix.to_string()))
        } else {
            Ok(FilterPattern::Exact(pattern.to_string()))
        }
    }

    /// Check if a function name matches this filter pattern
    pub fn matches(&self, function: &str) -> bool {
        match self {
            FilterPattern::Prefix(prefix) => function.starts_with(prefix),
            FilterPattern::Regex(regex) => regex.is_match(function),
            FilterPattern::Exact(exact) => function == exact,
        }
    }
}

/// A collection of filter patterns combined with OR logic
#[derive(Debug, Clone)]
pub struct CallFilter {
    patterns: Vec<FilterPattern>,
}

impl CallFilter {
    /// Create a new call filter from a list of pattern strings
    pub fn new(patterns: &[String]) -> Result<Self, String> {
        let parsed: Result<Vec<FilterPattern>, String> =
            patterns.iter().map(|p| FilterPattern::parse(p)).collect();
        Ok(Self { patterns: parsed? })
    }

    /// Check if any filter matches the given function name.
    /// Returns true if no filters are set (show everything).
    pub fn matches(&self, function: &str) -> bool {
        if self.patterns.is_empty() {
            return true;
        }
        self.patterns.iter().any(|p| p.matches(function))
    }

    /// Returns true if no filters are configured
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Get a human-readable summary of active filters
    pub fn summary(&self) -> String {
        self.patterns
            .iter()
            .map(|p| match p {
                FilterPattern::Prefix(prefix) => format!("{}*", prefix),
                FilterPattern::Regex(regex) => format!("re:{}", regex.as_str()),
                FilterPattern::Exact(exact) => exact.clone(),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

//! Error reporting for scenario files
//!
//! Formats scenario errors for the terminal, quoting the offending line
//! when the YAML parser knows where it stopped.

use crate::error::ScenarioError;

/// Format a scenario error with context from the source text
pub fn format_scenario_error(error: &ScenarioError, source: &str) -> String {
    let mut msg = format!("Scenario error: {}", error);

    if let ScenarioError::Parse(parse_error) = error {
        if let Some(location) = parse_error.location() {
            // Locations are 1-based
            let line = location.line().saturating_sub(1);
            if let Some(text) = source.lines().nth(line) {
                msg.push_str(&format!("\n  at line {}: {}", line + 1, text));
            }
        }
    }

    msg
}


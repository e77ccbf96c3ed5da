use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the route planner library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The road network could not be loaded, so no graph is available.
    #[error("road network data not accessible: {reason}")]
    DataUnavailable { reason: String },

    /// Database file could not be located at the resolved path.
    #[error("road network database not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the road network database")]
    ProjectDirsUnavailable,

    /// Raised when one or both city names are absent from the network.
    #[error("{}{}", format_unknown(.names), format_suggestions(.suggestions))]
    UnknownCity {
        names: Vec<String>,
        suggestions: Vec<String>,
    },

    /// Raised when both cities exist but lie in disconnected parts of the network.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when travel settings are outside their valid range.
    #[error("invalid travel configuration: {message}")]
    InvalidConfig { message: String },

    /// Wrapper for SQLite errors.
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

// Blank entries are not quoted back; they get an input hint instead.
fn format_unknown(names: &[String]) -> String {
    let quoted: Vec<String> = names
        .iter()
        .filter(|name| !name.is_empty())
        .map(|name| format!("'{}'", name))
        .collect();

    let mut message = match quoted.len() {
        0 => String::new(),
        1 => format!("unknown city: {}", quoted[0]),
        _ => format!("unknown cities: {}", quoted.join(", ")),
    };
    if quoted.len() < names.len() {
        if !message.is_empty() {
            message.push_str("; ");
        }
        message.push_str("please enter both a source and a destination city");
    }
    message
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_city_names_single_input() {
        let error = Error::UnknownCity {
            names: vec!["Atlantis".to_string()],
            suggestions: Vec::new(),
        };
        assert_eq!(error.to_string(), "unknown city: 'Atlantis'");
    }

    #[test]
    fn unknown_city_names_both_inputs_with_suggestions() {
        let error = Error::UnknownCity {
            names: vec!["Mumbay".to_string(), "Pone".to_string()],
            suggestions: vec!["Mumbai".to_string(), "Pune".to_string()],
        };
        assert_eq!(
            error.to_string(),
            "unknown cities: 'Mumbay', 'Pone'. Did you mean one of: 'Mumbai', 'Pune'?"
        );
    }

    #[test]
    fn blank_city_asks_for_both_names() {
        let error = Error::UnknownCity {
            names: vec![String::new()],
            suggestions: Vec::new(),
        };
        assert_eq!(
            error.to_string(),
            "please enter both a source and a destination city"
        );

        let error = Error::UnknownCity {
            names: vec!["Atlantis".to_string(), String::new()],
            suggestions: Vec::new(),
        };
        assert_eq!(
            error.to_string(),
            "unknown city: 'Atlantis'; please enter both a source and a destination city"
        );
    }

    #[test]
    fn route_not_found_names_both_cities() {
        let error = Error::RouteNotFound {
            start: "Leh".to_string(),
            goal: "Agartala".to_string(),
        };
        assert_eq!(error.to_string(), "no route found between Leh and Agartala");
    }
}

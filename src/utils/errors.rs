/// Display variant picked for a failed fetch. Classification is by message
/// substring only; the raw message is never parsed beyond that.
#[derive(Debug, PartialEq)]
pub struct ErrorDetails {
    pub icon: &'static str,
    pub title: &'static str,
    pub message: String,
    pub suggestion: &'static str,
}

pub fn classify_error(error: &str) -> ErrorDetails {
    if error.contains("500") || error.contains("Internal Server Error") {
        return ErrorDetails {
            icon: "⚠️",
            title: "Server Error",
            message: "The server encountered an error while processing your request. Please try again later.".to_string(),
            suggestion: "If the problem persists, contact support.",
        };
    }
    if error.contains("404") || error.contains("Not Found") {
        return ErrorDetails {
            icon: "🔍",
            title: "Not Found",
            message: "The requested resource could not be found.".to_string(),
            suggestion: "Please check your connection and try again.",
        };
    }
    if error.contains("network")
        || error.contains("Network")
        || error.contains("fetch")
        || error.contains("Connection")
    {
        return ErrorDetails {
            icon: "📡",
            title: "Connection Error",
            message: "Unable to connect to the server. Please check your internet connection."
                .to_string(),
            suggestion: "Make sure you are connected to the internet and try again.",
        };
    }
    ErrorDetails {
        icon: "❗",
        title: "Error",
        message: error.to_string(),
        suggestion: "Please try again or contact support if the problem persists.",
    }
}

/// The retry-capable error panel every page falls back to.
pub fn render_error_panel(error: &str) -> String {
    let details = classify_error(error);
    format!(
        "{} {}\n{}\n{}\n\nSend /retry to try again.",
        details.icon, details.title, details.message, details.suggestion
    )
}

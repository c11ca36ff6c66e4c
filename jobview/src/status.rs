/// Maps a job status token to a display class token.
///
/// Implementations must be total: any string gets a class, unknown ones included.
pub trait StatusClassifier {
    fn classify(&self, status: &str) -> String;
}

impl<F> StatusClassifier for F
where
    F: Fn(&str) -> String,
{
    fn classify(&self, status: &str) -> String {
        self(status)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Danger,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Danger => "danger",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    /// Anything not known to have finished or stalled is `Info`.
    pub fn of(status: &str) -> Self {
        let status = status.trim().to_ascii_lowercase();
        match status.as_str() {
            "succeeded" | "done" => Severity::Success,
            "failed" | "upstream_failed" | "unschedulable" => Severity::Danger,
            "stopped" | "stopping" | "skipped" | "warning" => Severity::Warning,
            _ => Severity::Info,
        }
    }
}

/// Default classifier, names classes after alert severities.
#[derive(Clone, Copy, Debug, Default)]
pub struct SeverityClassifier;

impl StatusClassifier for SeverityClassifier {
    fn classify(&self, status: &str) -> String {
        Severity::of(status).as_str().to_string()
    }
}

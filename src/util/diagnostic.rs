//! User-facing diagnostic messages.
//!
//! Staging failures and layout oddities are non-fatal, but they must not
//! vanish silently either: components report them as warning-level
//! diagnostics through an injected [`DiagnosticSink`], and callers decide
//! where those end up (stderr for the CLI, a buffer in tests).

use std::fmt;
use std::path::PathBuf;

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

/// Common suggestion messages for consistent reporting.
pub mod suggestions {
    /// Suggestion when the SDK tree is missing entirely.
    pub const SDK_MISSING: &str =
        "help: place the vendor SDK under ThirdParty/<Vendor>/ or set [vendor] root in capstan.toml";

    /// Suggestion when only part of the Windows artifact pair exists.
    pub const PARTIAL_WINDOWS_SDK: &str =
        "help: Windows needs both the import library (.lib) and the shared library (.dll)";

    /// Suggestion when staging could not refresh an artifact.
    pub const STAGING_SKIPPED: &str =
        "help: a previously staged copy may still be loaded; close the running binary and rebuild";
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
        }
    }
}

/// A diagnostic message with optional context and suggestions.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Primary message
    pub message: String,
    /// Severity level
    pub severity: Severity,
    /// Additional context lines
    pub context: Vec<String>,
    /// Suggested fixes
    pub suggestions: Vec<String>,
    /// Related location (file path)
    pub location: Option<PathBuf>,
}

impl Diagnostic {
    /// Create a new warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            severity: Severity::Warning,
            context: Vec::new(),
            suggestions: Vec::new(),
            location: None,
        }
    }

    /// Create a new note diagnostic.
    pub fn note(message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Note,
            ..Diagnostic::warning(message)
        }
    }

    /// Add context to the diagnostic.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Add a suggestion for fixing the issue.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Add a file location.
    pub fn with_location(mut self, path: impl Into<PathBuf>) -> Self {
        self.location = Some(path.into());
        self
    }

    /// Format the diagnostic for terminal output.
    pub fn format(&self, color: bool) -> String {
        let mut output = String::new();

        let severity_str = if color {
            match self.severity {
                Severity::Error => "\x1b[1;31merror\x1b[0m",
                Severity::Warning => "\x1b[1;33mwarning\x1b[0m",
                Severity::Note => "\x1b[1;36mnote\x1b[0m",
            }
        } else {
            match self.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
                Severity::Note => "note",
            }
        };

        output.push_str(&format!("{}: {}\n", severity_str, self.message));

        if let Some(ref path) = self.location {
            output.push_str(&format!("  --> {}\n", path.display()));
        }

        for ctx in &self.context {
            output.push_str(&format!("  - {}\n", ctx));
        }

        for suggestion in &self.suggestions {
            output.push_str(&format!("  {}\n", suggestion));
        }

        output
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(false))
    }
}

/// Where diagnostics go. Components take `&mut dyn DiagnosticSink` so the
/// CLI can print to stderr while tests capture into a buffer.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

/// Prints diagnostics to stderr.
#[derive(Debug, Default)]
pub struct StderrSink {
    /// Use ANSI colors
    pub color: bool,
}

impl DiagnosticSink for StderrSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        eprint!("{}", diagnostic.format(self.color));
    }
}

/// Collects diagnostics for inspection in tests.
#[derive(Debug, Default)]
pub struct CollectedSink {
    pub diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSink for CollectedSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

/// Unreadable or malformed `capstan.toml`.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum ConfigError {
    #[error("failed to read config: {}", path.display())]
    #[diagnostic(code(capstan::config::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {}", path.display())]
    #[diagnostic(
        code(capstan::config::parse),
        help("Check the TOML syntax; omit --config to use defaults")
    )]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_formatting() {
        let diag = Diagnostic::warning("failed to stage steam_api64.dll")
            .with_location("/proj/Binaries/Win64/steam_api64.dll")
            .with_context("Permission denied (os error 13)")
            .with_suggestion(suggestions::STAGING_SKIPPED);

        let output = diag.format(false);
        assert!(output.contains("warning: failed to stage"));
        assert!(output.contains("--> /proj/Binaries/Win64/steam_api64.dll"));
        assert!(output.contains("Permission denied"));
        assert!(output.contains("help: a previously staged copy"));
    }

    #[test]
    fn test_collected_sink() {
        let mut sink = CollectedSink::default();
        sink.emit(Diagnostic::warning("one"));
        sink.emit(Diagnostic::note("two"));

        assert_eq!(sink.diagnostics.len(), 2);
        assert_eq!(sink.diagnostics[0].severity, Severity::Warning);
        assert_eq!(sink.diagnostics[1].severity, Severity::Note);
    }
}

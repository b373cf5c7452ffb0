//! SDK layout inspection.
//!
//! The `doctor` command walks the same probes the resolver uses and
//! reports what it found and what the platform's completeness rule still
//! requires. An absent SDK is a reportable state, not a failure.
//!
//! ## Usage
//!
//! ```bash
//! capstan doctor                      # host platform
//! capstan doctor --platform Win64     # cross-inspection
//! ```

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::core::platform::Platform;
use crate::core::profile::{LinkRequirement, ProfileTable};
use crate::core::sdk;
use crate::resolver;
use crate::util::config::Config;
use crate::util::fs::relative_path;

/// Result of a single layout check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the check
    pub name: String,

    /// Whether the probed thing exists
    pub passed: bool,

    /// Human-readable status message
    pub message: String,

    /// Path that was probed (if applicable)
    pub path: Option<PathBuf>,

    /// Whether the completeness rule requires this artifact
    pub required: bool,
}

impl CheckResult {
    fn pass(name: impl Into<String>, message: impl Into<String>) -> Self {
        CheckResult {
            name: name.into(),
            passed: true,
            message: message.into(),
            path: None,
            required: true,
        }
    }

    fn fail(name: impl Into<String>, message: impl Into<String>) -> Self {
        CheckResult {
            passed: false,
            ..CheckResult::pass(name, message)
        }
    }

    fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }
}

/// Summary of the SDK layout for one platform.
#[derive(Debug, Clone)]
pub struct SdkReport {
    /// Vendor tree name
    pub vendor: String,

    /// Platform inspected
    pub platform: Platform,

    /// Probed SDK root
    pub sdk_root: PathBuf,

    /// Individual check results
    pub checks: Vec<CheckResult>,

    /// Whether the completeness rule is satisfied
    pub available: bool,

    /// Files actually present in the selected library directory
    pub library_dir_contents: Vec<PathBuf>,
}

impl SdkReport {
    /// Count of required checks that did not pass.
    pub fn required_missing_count(&self) -> usize {
        self.checks
            .iter()
            .filter(|c| c.required && !c.passed)
            .count()
    }
}

/// Inspect the SDK layout for a platform.
pub fn doctor(config: &Config, project_root: &Path, platform: Platform) -> SdkReport {
    let sdk_root = config.sdk_root_for(project_root);
    let descriptor = sdk::locate(&sdk_root);

    let table = ProfileTable::new(&config.vendor);
    let profile = table.profile_for(platform);
    let artifacts = resolver::resolve(&descriptor, profile);

    let mut checks = Vec::new();

    checks.push(if descriptor.present {
        CheckResult::pass("SDK root", "directory exists").with_path(sdk_root.clone())
    } else {
        CheckResult::fail("SDK root", "directory not found").with_path(sdk_root.clone())
    });

    if profile.requirement == LinkRequirement::Unsupported {
        checks.push(CheckResult::fail(
            "Platform",
            format!("no SDK layout known for {platform}"),
        ));
        return SdkReport {
            vendor: config.vendor.name.clone(),
            platform,
            sdk_root,
            checks,
            available: false,
            library_dir_contents: Vec::new(),
        };
    }

    let selected_dir = profile
        .lib_dir_candidates
        .iter()
        .map(|c| sdk_root.join(c))
        .find(|d| d.is_dir());

    checks.push(match &selected_dir {
        Some(dir) => CheckResult::pass(
            "Library directory",
            format!(
                "selected {}",
                relative_path(&sdk_root, dir).display()
            ),
        )
        .with_path(dir.clone()),
        None => CheckResult::fail(
            "Library directory",
            format!("none of {} exists", profile.lib_dir_candidates.join(", ")),
        ),
    });

    if let Some(expected) = &profile.import_lib {
        checks.push(artifact_check("Import library", expected, &artifacts.import_lib));
    }
    if let Some(expected) = &profile.shared_lib {
        checks.push(artifact_check("Shared library", expected, &artifacts.shared_lib));
    }

    checks.push(match &artifacts.include_dir {
        Some(dir) => CheckResult::pass("Include directory", "Include/ exists")
            .with_path(dir.clone())
            .optional(),
        None => CheckResult::fail("Include directory", "Include/ not found").optional(),
    });

    let library_dir_contents = selected_dir
        .as_ref()
        .map(|dir| list_files(dir))
        .unwrap_or_default();

    SdkReport {
        vendor: config.vendor.name.clone(),
        platform,
        sdk_root,
        available: profile.requirement.satisfied_by(&artifacts),
        checks,
        library_dir_contents,
    }
}

fn artifact_check(name: &str, expected: &str, found: &Option<PathBuf>) -> CheckResult {
    match found {
        Some(path) => {
            CheckResult::pass(name, format!("found {expected}")).with_path(path.clone())
        }
        None => CheckResult::fail(name, format!("{expected} missing")),
    }
}

/// Flat file listing of the selected library directory.
fn list_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .collect();
    files.sort();
    files
}

/// Format the report for display.
pub fn format_report(report: &SdkReport, verbose: bool) -> String {
    let mut output = String::new();

    writeln!(output, "Capstan Doctor").unwrap();
    writeln!(output, "==============\n").unwrap();
    writeln!(
        output,
        "Vendor: {} (root: {})",
        report.vendor,
        report.sdk_root.display()
    )
    .unwrap();
    writeln!(output, "Platform: {}\n", report.platform).unwrap();

    writeln!(output, "Checks:").unwrap();
    for check in &report.checks {
        let status = if check.passed { "[OK]" } else { "[--]" };
        let required = if check.required { "" } else { " (optional)" };

        writeln!(output, "  {} {}{}", status, check.name, required).unwrap();

        if verbose {
            writeln!(output, "      {}", check.message).unwrap();
            if let Some(path) = &check.path {
                writeln!(output, "      Path: {}", path.display()).unwrap();
            }
        }
    }

    if verbose && !report.library_dir_contents.is_empty() {
        writeln!(output, "\nLibrary directory contents:").unwrap();
        for file in &report.library_dir_contents {
            writeln!(output, "  {}", file.display()).unwrap();
        }
    }

    writeln!(output).unwrap();
    if report.available {
        writeln!(output, "SDK is available; the feature define will be 1.").unwrap();
    } else {
        let missing = report.required_missing_count();
        writeln!(
            output,
            "SDK is unavailable ({} required check(s) missing); the feature define will be 0.",
            missing
        )
        .unwrap();
    }

    output
}

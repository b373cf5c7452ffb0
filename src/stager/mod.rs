//! Best-effort staging of runtime artifacts.
//!
//! Runtime shared libraries get copied next to the produced binary so it
//! can load them. A copy that fails (destination locked by a running
//! process, permissions) is skipped, reported as a warning through the
//! injected sink, and never invalidates the plan: a previously staged
//! copy may still be present and valid, just potentially stale.

use crate::plan::{CopyOperation, LinkPlan};
use crate::util::diagnostic::{suggestions, Diagnostic, DiagnosticSink};
use crate::util::fs::{copy_file, ensure_dir};

/// What happened to one copy operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageStatus {
    /// Copied to the destination
    Staged,
    /// Destination already exists and the overwrite policy keeps it
    Preserved,
    /// Copy failed; the build continues without refreshing this artifact
    Skipped { reason: String },
}

/// Per-operation staging record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOutcome {
    pub operation: CopyOperation,
    pub status: StageStatus,
}

impl StageOutcome {
    pub fn is_staged(&self) -> bool {
        self.status == StageStatus::Staged
    }
}

/// Execute the plan's runtime copies.
///
/// Runs once per build, after the plan is finalized. Never fails and never
/// touches the plan: the availability flag computed before staging stands
/// regardless of what happens here.
pub fn stage(plan: &LinkPlan, sink: &mut dyn DiagnosticSink) -> Vec<StageOutcome> {
    plan.runtime_copies
        .iter()
        .map(|op| StageOutcome {
            operation: op.clone(),
            status: stage_one(op, sink),
        })
        .collect()
}

fn stage_one(op: &CopyOperation, sink: &mut dyn DiagnosticSink) -> StageStatus {
    if !op.overwrite && op.destination.exists() {
        tracing::debug!("keeping existing {}", op.destination.display());
        return StageStatus::Preserved;
    }

    let copy = || -> anyhow::Result<()> {
        if let Some(parent) = op.destination.parent() {
            ensure_dir(parent)?;
        }
        copy_file(&op.source, &op.destination)
    };

    match copy() {
        Ok(()) => {
            tracing::debug!(
                "staged {} -> {}",
                op.source.display(),
                op.destination.display()
            );
            StageStatus::Staged
        }
        Err(e) => {
            let reason = format!("{:#}", e);
            sink.emit(
                Diagnostic::warning(format!(
                    "failed to stage {}",
                    op.source
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| op.source.display().to_string())
                ))
                .with_location(op.destination.clone())
                .with_context(reason.clone())
                .with_suggestion(suggestions::STAGING_SKIPPED),
            );
            StageStatus::Skipped { reason }
        }
    }
}

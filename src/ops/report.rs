//! Printing scan results.
//!
//! All packages are printed first, then all errors, so results are never
//! interleaved with diagnostics.

use serde_json::json;

use crate::ops::scan_dirs::{FailedDirectory, ScanReport, ScannedPackage};
use crate::util::diagnostic::emit;
use crate::util::shell::{Shell, Status};

/// Format one package as `<dir> <name>: <dep> <dep> ...`.
pub fn format_package_line(scanned: &ScannedPackage) -> String {
    let mut line = format!(
        "{} {}:",
        scanned.dir.display(),
        scanned.package.name()
    );
    for dep in scanned.package.dependencies() {
        line.push(' ');
        line.push_str(dep);
    }
    line
}

/// JSON record for one package.
pub fn package_event(scanned: &ScannedPackage) -> serde_json::Value {
    json!({
        "reason": "package",
        "dir": scanned.dir.display().to_string(),
        "name": scanned.package.name(),
        "dependencies": scanned.package.dependencies(),
    })
}

/// JSON record for one failed directory.
pub fn error_event(failed: &FailedDirectory) -> serde_json::Value {
    json!({
        "reason": "error",
        "dir": failed.dir.display().to_string(),
        "kind": failed.error.kind(),
        "message": failed.error.to_string(),
    })
}

/// Print `report` through `shell`.
pub fn print_report(shell: &Shell, report: &ScanReport) {
    for scanned in &report.packages {
        if shell.is_json() {
            shell.json_event(&package_event(scanned));
        } else {
            shell.result_line(format_package_line(scanned));
        }
    }

    if shell.is_json() {
        for failed in &report.errors {
            shell.json_event(&error_event(failed));
        }
        return;
    }

    if report.has_errors() {
        eprintln!("errors:");
        for failed in &report.errors {
            emit(&failed.error.to_diagnostic(), shell.use_color());
        }
    }

    shell.verbose_status(
        Status::Finished,
        format!(
            "scanned {} directories, {} failed",
            report.len(),
            report.errors.len()
        ),
    );
}

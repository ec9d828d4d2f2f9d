mod checks;

use tracing::info;

use crate::app::AppContext;
use crate::domain::{DiagnosticReport, SDK_DIR};
use crate::ports::{ConfigurationStore, HostProbe, TemplateStore, WorkspaceStore};

pub use checks::{check_disk, check_dotnet, check_git, check_permissions, check_structure};

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// Run every check against the workspace root and assemble the report.
pub fn execute<W, T, C, P>(ctx: &AppContext<W, T, C, P>) -> DiagnosticReport
where
    W: WorkspaceStore,
    T: TemplateStore,
    C: ConfigurationStore,
    P: HostProbe,
{
    let mut report = DiagnosticReport::default();

    let dotnet = check_dotnet(ctx.probe());
    report.push_check(
        ".NET SDK",
        dotnet.success,
        if dotnet.success { "Installed" } else { "Not found or outdated" },
        Some(dotnet.version),
    );
    if !dotnet.success {
        report.push_suggestion(
            "Install .NET SDK 9.0 or higher from https://dotnet.microsoft.com/download",
        );
    }

    let git = check_git(ctx.probe());
    report.push_check(
        "Git",
        git.success,
        if git.success { "Installed" } else { "Not found" },
        Some(git.version),
    );
    if git.success && !git.configured {
        report.push_warning("Git is not configured");
        report.push_suggestion("Configure Git with: git config --global user.name \"Your Name\"");
        report.push_suggestion(
            "Configure Git with: git config --global user.email \"your@email.com\"",
        );
    }
    if !git.success {
        report.push_suggestion("Install Git from https://git-scm.com/downloads");
    }

    let structure = check_structure(ctx.workspace(), ctx.config_store());
    if structure.success {
        report.push_check(
            "Project Structure",
            true,
            "Complete",
            Some("All folders present".to_string()),
        );
    } else {
        let missing = structure.missing.join(", ");
        report.push_check(
            "Project Structure",
            false,
            format!("{} items missing", structure.missing.len()),
            Some(missing.clone()),
        );
        if structure.missing.iter().any(|item| item == &format!("{}/", SDK_DIR)) {
            report.push_suggestion("Initialize project with: mjcuadrado-net-sdk init");
        } else {
            report.push_warning(format!("Missing: {}", missing));
            report.push_suggestion(
                "Run 'mjcuadrado-net-sdk init --force' to recreate missing structure",
            );
        }
    }

    let disk = check_disk(ctx.workspace(), ctx.probe());
    report.push_check(
        "Disk Space",
        disk.success,
        if disk.success { "Sufficient" } else { "Insufficient" },
        Some(format!("{:.2} MB available", disk.available_bytes as f64 / BYTES_PER_MIB)),
    );
    if !disk.success {
        report.push_suggestion("Free up at least 100 MB of disk space");
    }

    let permissions = check_permissions(ctx.workspace());
    let (message, details) = if permissions.success {
        ("OK", "Can write to current directory")
    } else {
        ("Denied", "Cannot write to current directory")
    };
    report.push_check("Write Permissions", permissions.success, message, Some(details.to_string()));
    if !permissions.success {
        report.push_suggestion("Check directory permissions or run with appropriate privileges");
    }

    info!(
        root = %ctx.workspace().root().display(),
        failed = report.failed_count(),
        "diagnostic finished"
    );
    report
}

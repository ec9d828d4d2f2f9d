//! Doctor check results.

/// Minimum .NET SDK major version accepted by `doctor`.
pub const MIN_DOTNET_MAJOR: u32 = 9;

/// Minimum free disk space accepted by `doctor`.
pub const MIN_FREE_BYTES: u64 = 100 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotnetCheck {
    pub success: bool,
    /// Installed version, annotated when too old, or `Not installed`.
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitCheck {
    pub success: bool,
    pub version: String,
    /// `user.name` and `user.email` are both set.
    pub configured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureCheck {
    pub success: bool,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskCheck {
    pub success: bool,
    pub available_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionsCheck {
    pub success: bool,
}

/// One row of the doctor report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticCheck {
    pub name: String,
    pub success: bool,
    pub message: String,
    pub details: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticReport {
    pub checks: Vec<DiagnosticCheck>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
}

impl DiagnosticReport {
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.success)
    }

    pub fn failed_count(&self) -> usize {
        self.checks.iter().filter(|c| !c.success).count()
    }

    pub fn push_check(
        &mut self,
        name: impl Into<String>,
        success: bool,
        message: impl Into<String>,
        details: Option<String>,
    ) {
        self.checks.push(DiagnosticCheck {
            name: name.into(),
            success,
            message: message.into(),
            details,
        });
    }

    pub fn push_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    pub fn push_suggestion(&mut self, suggestion: impl Into<String>) {
        self.suggestions.push(suggestion.into());
    }
}

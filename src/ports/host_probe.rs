use std::path::Path;

/// Git identity read from the user's git configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitIdentity {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl GitIdentity {
    pub fn is_configured(&self) -> bool {
        let set = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        set(&self.name) && set(&self.email)
    }
}

/// Port for inspecting the host environment.
pub trait HostProbe {
    /// Run a program and return its stdout when it exits successfully.
    fn command_output(&self, program: &str, args: &[&str]) -> Option<String>;

    fn git_identity(&self) -> GitIdentity;

    /// Free bytes on the filesystem holding `path`.
    fn available_space(&self, path: &Path) -> Option<u64>;
}

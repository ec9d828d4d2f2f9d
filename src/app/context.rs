use crate::ports::{ConfigurationStore, HostProbe, TemplateStore, WorkspaceStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<W, T, C, P>
where
    W: WorkspaceStore,
    T: TemplateStore,
    C: ConfigurationStore,
    P: HostProbe,
{
    workspace: W,
    templates: T,
    config_store: C,
    probe: P,
}

impl<W, T, C, P> AppContext<W, T, C, P>
where
    W: WorkspaceStore,
    T: TemplateStore,
    C: ConfigurationStore,
    P: HostProbe,
{
    /// Create a new application context.
    pub fn new(workspace: W, templates: T, config_store: C, probe: P) -> Self {
        Self { workspace, templates, config_store, probe }
    }

    /// Get a reference to the workspace store.
    pub fn workspace(&self) -> &W {
        &self.workspace
    }

    /// Get a reference to the template store.
    pub fn templates(&self) -> &T {
        &self.templates
    }

    /// Get a reference to the configuration store.
    pub fn config_store(&self) -> &C {
        &self.config_store
    }

    /// Get a reference to the host probe.
    pub fn probe(&self) -> &P {
        &self.probe
    }
}

mod configuration_store;
mod host_probe;
mod template_store;
mod workspace_store;

pub use configuration_store::ConfigurationStore;
pub use host_probe::{GitIdentity, HostProbe};
pub use template_store::{ScaffoldFile, TemplateStore};
pub use workspace_store::WorkspaceStore;

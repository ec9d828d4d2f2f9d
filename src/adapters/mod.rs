pub mod embedded_template_store;
pub mod json_configuration_store;
pub mod system_host_probe;
pub mod workspace_filesystem;

pub use embedded_template_store::EmbeddedTemplateStore;
pub use json_configuration_store::JsonConfigurationStore;
pub use system_host_probe::SystemHostProbe;
pub use workspace_filesystem::FilesystemWorkspaceStore;

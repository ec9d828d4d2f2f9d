use crate::ports::HostProbe;

pub const TOOL_NAME: &str = "mjcuadrado-net-sdk";

/// Build and host information shown by `version`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    pub sdk_version: String,
    /// Installed .NET SDK version, when `dotnet` is on the path.
    pub dotnet_runtime: Option<String>,
    pub os: String,
    pub arch: String,
    pub profile: String,
}

pub fn execute<P: HostProbe>(probe: &P) -> VersionInfo {
    let dotnet_runtime = probe
        .command_output("dotnet", &["--version"])
        .map(|out| out.trim().to_string())
        .filter(|v| !v.is_empty());

    VersionInfo {
        sdk_version: env!("CARGO_PKG_VERSION").to_string(),
        dotnet_runtime,
        os: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
        profile: if cfg!(debug_assertions) { "debug" } else { "release" }.to_string(),
    }
}

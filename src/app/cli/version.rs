//! Version command implementation.

use comfy_table::Table;
use comfy_table::presets::UTF8_FULL;

use crate::app::commands::version::TOOL_NAME;

pub fn run_version(verbose: bool) {
    let info = crate::app::api::version_info();
    let dotnet = info.dotnet_runtime.as_deref().unwrap_or("not installed");

    println!("{} v{}", TOOL_NAME, info.sdk_version);
    println!(".NET {}", dotnet);

    if verbose {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["Property", "Value"]);
        table.add_row(vec!["SDK Version", info.sdk_version.as_str()]);
        table.add_row(vec![".NET Runtime", dotnet]);
        table.add_row(vec!["OS", info.os.as_str()]);
        table.add_row(vec!["Architecture", info.arch.as_str()]);
        table.add_row(vec!["Build", info.profile.as_str()]);
        println!();
        println!("{}", table);
    }
}

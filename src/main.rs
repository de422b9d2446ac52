use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;
mod table;

pub use cli::*;
pub use commands::*;
pub use domain::constants::*;
pub use domain::models::*;
pub use services::config::*;
pub use services::coordinator::*;
pub use services::dispatcher::*;
pub use services::logging::*;
pub use services::output::*;
pub use services::runner::*;
pub use table::*;

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(tool) = &cli.tool {
        config.crm.tool = tool.clone();
    }
    if let Some(node) = &cli.node_name {
        config.crm.node_name = Some(node.clone());
    }

    let runner = ProcessRunner;
    if handle_cluster_commands(&cli, &config, &runner)? {
        return Ok(());
    }
    if handle_configure_commands(&cli, &config, &runner)? {
        return Ok(());
    }
    anyhow::bail!("unhandled command")
}

use crate::*;

pub fn handle_cluster_commands(
    cli: &Cli,
    config: &ConfigFile,
    runner: &dyn CommandRunner,
) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Commands => {
            let infos: Vec<CommandInfo> = COMMAND_TABLE
                .iter()
                .map(|d| CommandInfo {
                    name: d.name.to_string(),
                    usage: d.usage.to_string(),
                    requires_coordinator: d.requires_coordinator,
                    options: d.option_names(),
                })
                .collect();
            print_out(cli.json, &infos, |c| {
                let dc = if c.requires_coordinator { "dc-only" } else { "any-node" };
                format!("{}\t{}\t{}", c.name, dc, c.usage.lines().next().unwrap_or(""))
            })?;
        }
        Commands::Dc => {
            let dc = DcQuery::new(
                runner,
                config.crm.dc_query.clone(),
                config.crm.node_name.clone(),
            );
            let status = dc.status();
            let ok = !matches!(status, CoordinatorStatus::CheckFailed { .. });
            print_one(cli.json, ok, status, |s| match s {
                CoordinatorStatus::Coordinator { node } => format!("{}: DC", node),
                CoordinatorStatus::NotCoordinator { node, coordinator } => {
                    format!("{}: not DC (DC is {})", node, coordinator)
                }
                CoordinatorStatus::CheckFailed { reason } => format!("unknown: {}", reason),
            })?;
        }
        _ => return Ok(false),
    }
    Ok(true)
}

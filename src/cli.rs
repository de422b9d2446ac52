use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "crmconf",
    version,
    about = "Configure a Pacemaker cluster through `crm configure`"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Print the crm command line instead of running it"
    )]
    pub dry_run: bool,
    #[arg(long, global = true, help = "Path or name of the crm binary")]
    pub tool: Option<String>,
    #[arg(
        long,
        global = true,
        help = "Local node name used for the DC check (default: hostname)"
    )]
    pub node_name: Option<String>,
    #[arg(
        long,
        global = true,
        help = "Config file (default: ~/.config/crmconf/config.toml)"
    )]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Display CIB objects
    Show {
        /// Object id, `type:<type>`, `tag:<tag>` or `related:<primitive>`;
        /// a single argument may hold a comma or space separated list
        filters: Vec<String>,
        #[arg(long, default_value_t = false)]
        xml: bool,
        #[arg(long, default_value_t = false)]
        changed: bool,
    },
    /// Set cluster properties (DC only)
    Property {
        /// KEY=VALUE pairs
        pairs: Vec<String>,
    },
    /// List the commands crmconf knows about
    Commands,
    /// Report whether this node is the designated controller
    Dc,
}

/// Splits filter arguments on commas and whitespace, so `"vip, type:node"`
/// and `vip, type:node` both yield `["vip", "type:node"]`.
pub fn split_filters(raw: &[String]) -> Vec<String> {
    raw.iter()
        .flat_map(|arg| arg.split(|c: char| c == ',' || c.is_whitespace()))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::split_filters;

    fn owned(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn comma_lists_are_split_and_trimmed() {
        assert_eq!(
            split_filters(&owned(&["vip, type:node"])),
            vec!["vip", "type:node"]
        );
        assert_eq!(
            split_filters(&owned(&["vip,", "type:node"])),
            vec!["vip", "type:node"]
        );
    }

    #[test]
    fn separate_tokens_pass_through() {
        assert_eq!(
            split_filters(&owned(&["related:vip", "tag:web"])),
            vec!["related:vip", "tag:web"]
        );
        assert!(split_filters(&owned(&[",", " "])).is_empty());
    }
}

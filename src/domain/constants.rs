pub const DEFAULT_TOOL: &str = "crm";
pub const SUBSYSTEM: &str = "configure";

/// Keyword keys with this prefix are injected by the calling framework
/// (e.g. `__pub_trace_id`) and never reach the cluster shell.
pub const BOOKKEEPING_PREFIX: &str = "__";

pub const DEFAULT_DC_QUERY: &[&str] = &["crmadmin", "-D"];

pub const CONFIG_RELATIVE_PATH: &str = ".config/crmconf/config.toml";

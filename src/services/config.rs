use crate::domain::constants::{CONFIG_RELATIVE_PATH, DEFAULT_DC_QUERY, DEFAULT_TOOL};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub crm: CrmSection,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CrmSection {
    #[serde(default = "default_tool")]
    pub tool: String,
    #[serde(default = "default_dc_query")]
    pub dc_query: Vec<String>,
    #[serde(default)]
    pub node_name: Option<String>,
}

impl Default for CrmSection {
    fn default() -> Self {
        Self {
            tool: default_tool(),
            dc_query: default_dc_query(),
            node_name: None,
        }
    }
}

fn default_tool() -> String {
    DEFAULT_TOOL.to_string()
}

fn default_dc_query() -> Vec<String> {
    DEFAULT_DC_QUERY.iter().map(|s| s.to_string()).collect()
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(CONFIG_RELATIVE_PATH))
}

/// Loads the config file, falling back to defaults when it does not exist.
/// An explicitly named file must exist.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<ConfigFile> {
    let path = match explicit {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("config file not found: {}", p.display());
            }
            p.to_path_buf()
        }
        None => match default_config_path() {
            Ok(p) if p.exists() => p,
            _ => {
                tracing::debug!("no config file; using defaults");
                return Ok(ConfigFile::default());
            }
        },
    };
    let raw = std::fs::read_to_string(&path)?;
    let config: ConfigFile = toml::from_str(&raw)
        .map_err(|e| anyhow::anyhow!("invalid config {}: {}", path.display(), e))?;
    if config.crm.dc_query.is_empty() {
        anyhow::bail!("invalid config {}: crm.dc_query is empty", path.display());
    }
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_file_uses_defaults() {
        let cfg: ConfigFile = toml::from_str("").unwrap();
        assert_eq!(cfg.crm.tool, "crm");
        assert_eq!(cfg.crm.dc_query, vec!["crmadmin", "-D"]);
        assert!(cfg.crm.node_name.is_none());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let cfg: ConfigFile = toml::from_str("[crm]\nnode_name = \"node1\"\n").unwrap();
        assert_eq!(cfg.crm.tool, "crm");
        assert_eq!(cfg.crm.node_name.as_deref(), Some("node1"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(toml::from_str::<ConfigFile>("[crm]\nshell = true\n").is_err());
        assert!(toml::from_str::<ConfigFile>("[pcs]\n").is_err());
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[crm]\ntool = \"/usr/sbin/crm\"\ndc_query = [\"crm_mon\", \"-1\"]\n",
        )
        .unwrap();
        let cfg = load_config(Some(&path)).expect("load");
        assert_eq!(cfg.crm.tool, "/usr/sbin/crm");
        assert_eq!(cfg.crm.dc_query, vec!["crm_mon", "-1"]);
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = TempDir::new().expect("temp dir");
        assert!(load_config(Some(&dir.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn empty_dc_query_is_an_error() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[crm]\ndc_query = []\n").unwrap();
        assert!(load_config(Some(&path)).is_err());
    }
}

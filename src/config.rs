use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PotluckConfig {
    pub database: Option<String>,
    pub port: Option<u16>,
    pub ttl_seconds: Option<u64>,
    pub event_title: Option<String>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("potluck.toml")
}

pub fn default_database_path_in(base: &Path) -> PathBuf {
    base.join(".potluck").join("potluck.db")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<PotluckConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: PotluckConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &PotluckConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("potluck.toml");
        assert!(load_config(Some(&path)).unwrap().is_none());
    }

    #[test]
    fn test_write_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("potluck.toml");

        let config = PotluckConfig {
            database: Some("party.db".to_string()),
            port: Some(8080),
            ttl_seconds: Some(5),
            event_title: Some("Friendsmas Potluck".to_string()),
        };
        write_config(&path, &config, false).unwrap();

        let loaded = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(loaded.database.as_deref(), Some("party.db"));
        assert_eq!(loaded.port, Some(8080));

        // Second write without force refuses to clobber
        assert!(write_config(&path, &config, false).is_err());
        assert!(write_config(&path, &config, true).is_ok());
    }
}

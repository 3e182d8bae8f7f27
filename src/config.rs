use std::{fs::File, path::PathBuf};

use clap::Parser;
use serde::Deserialize;

fn get_default_address() -> String {
    "127.0.0.1".into()
}

fn get_default_port() -> u16 {
    8080
}

fn get_default_database_url() -> String {
    "judge.db".into()
}

fn get_default_template_dir() -> PathBuf {
    "templates".into()
}

fn get_default_submitter_id() -> i32 {
    1
}

fn get_default_pool_size() -> u32 {
    8
}

/// Server config
#[derive(Clone, Debug, Deserialize)]
pub struct Server {
    #[serde(default = "get_default_address")]
    pub bind_address: String,
    #[serde(default = "get_default_port")]
    pub bind_port: u16,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind_address: get_default_address(),
            bind_port: get_default_port(),
        }
    }
}

/// How a new submission gets its id
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdAllocation {
    /// Let the store's autoincrement key assign it
    #[default]
    Sequence,
    /// `MAX(id) + 1`, computed and inserted under one write lock
    MaxPlusOne,
}

/// Startup configuration
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: Server,
    #[serde(default = "get_default_database_url")]
    pub database_url: String,
    #[serde(default = "get_default_template_dir")]
    pub template_dir: PathBuf,
    #[serde(default)]
    pub id_allocation: IdAllocation,
    /// Account recorded as the author of every submission
    #[serde(default = "get_default_submitter_id")]
    pub submitter_id: i32,
    #[serde(default = "get_default_pool_size")]
    pub pool_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: Server::default(),
            database_url: get_default_database_url(),
            template_dir: get_default_template_dir(),
            id_allocation: IdAllocation::default(),
            submitter_id: get_default_submitter_id(),
            pool_size: get_default_pool_size(),
        }
    }
}

#[derive(Parser)]
#[clap(about = "Web front end of the SQL judge")]
pub struct Args {
    /// Path of the configuration file in JSON format
    #[clap(short, long, value_parser = parse_config)]
    pub config: Option<Config>,

    /// Whether to flush persistent data
    #[clap(short, long)]
    pub flush_data: bool,
}

fn parse_config(path: &str) -> Result<Config, std::io::Error> {
    let file = File::open(PathBuf::from(path))?;
    let config: Config = serde_json::from_reader(file)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.server.bind_address, "127.0.0.1");
        assert_eq!(config.server.bind_port, 8080);
        assert_eq!(config.database_url, "judge.db");
        assert_eq!(config.template_dir, PathBuf::from("templates"));
        assert_eq!(config.id_allocation, IdAllocation::Sequence);
        assert_eq!(config.submitter_id, 1);
    }

    #[test]
    fn overrides() {
        let config: Config = serde_json::from_str(
            r#"{
                "server": { "bind_port": 9000 },
                "database_url": "/var/lib/judge/judge.db",
                "id_allocation": "max_plus_one",
                "submitter_id": 42,
                "pool_size": 2
            }"#,
        )
        .unwrap();
        assert_eq!(config.server.bind_address, "127.0.0.1");
        assert_eq!(config.server.bind_port, 9000);
        assert_eq!(config.database_url, "/var/lib/judge/judge.db");
        assert_eq!(config.id_allocation, IdAllocation::MaxPlusOne);
        assert_eq!(config.submitter_id, 42);
        assert_eq!(config.pool_size, 2);
    }

    #[test]
    fn unknown_allocation_is_rejected() {
        assert!(serde_json::from_str::<Config>(r#"{ "id_allocation": "random" }"#).is_err());
    }

    #[test]
    fn args_without_config() {
        let args = Args::try_parse_from(["sql-judge", "--flush-data"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.flush_data);
    }
}

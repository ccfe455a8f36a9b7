use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};
use tracing::warn;

pub const DATA_PATH_VAR: &str = "GEOVIS_DATA_PATH";
pub const BIND_VAR: &str = "GEOVIS_BIND";
pub const PORT_VAR: &str = "PORT";

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATA_FILE: &str = "data/riyadh_resturants_clean.csv";

/// Runtime settings for the service, read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_path: PathBuf,
    pub bind: IpAddr,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_DATA_FILE),
            bind: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Unparseable values keep their default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(path) = lookup(DATA_PATH_VAR).filter(|p| !p.trim().is_empty()) {
            cfg.data_path = PathBuf::from(path);
        }
        if let Some(raw) = lookup(BIND_VAR) {
            match raw.trim().parse() {
                Ok(addr) => cfg.bind = addr,
                Err(e) => {
                    warn!(value = %raw, "invalid {}: {}, using {}", BIND_VAR, e, cfg.bind)
                }
            }
        }
        if let Some(raw) = lookup(PORT_VAR) {
            match raw.trim().parse() {
                Ok(port) => cfg.port = port,
                Err(e) => {
                    warn!(value = %raw, "invalid {}: {}, using {}", PORT_VAR, e, cfg.port)
                }
            }
        }

        cfg
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct NodeConfig {
    pub bind_addr: SocketAddr,
    /// Durable snapshot file. `None` runs the registry purely in memory.
    pub snapshot_path: Option<PathBuf>,
    /// Periodic flush in addition to the one on graceful shutdown.
    pub auto_snapshot_interval_secs: Option<u64>,
    /// Delete the snapshot file once it has been loaded at startup.
    pub clear_snapshot_after_restore: bool,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            snapshot_path: Some(PathBuf::from("seeker.snap")),
            auto_snapshot_interval_secs: None,
            clear_snapshot_after_restore: false,
        }
    }
}

impl NodeConfig {
    /// Defaults overridden by `SEEKER_*` environment variables.
    ///
    /// An empty `SEEKER_SNAPSHOT_PATH` disables persistence.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut cfg = Self::default();

        if let Some(addr) = lookup("SEEKER_BIND_ADDR") {
            cfg.bind_addr = addr
                .parse()
                .map_err(|e| anyhow::anyhow!("SEEKER_BIND_ADDR={:?}: {}", addr, e))?;
        }
        if let Some(path) = lookup("SEEKER_SNAPSHOT_PATH") {
            cfg.snapshot_path = if path.is_empty() { None } else { Some(PathBuf::from(path)) };
        }
        if let Some(secs) = lookup("SEEKER_SNAPSHOT_INTERVAL_SECS") {
            let secs: u64 = secs
                .parse()
                .map_err(|e| anyhow::anyhow!("SEEKER_SNAPSHOT_INTERVAL_SECS={:?}: {}", secs, e))?;
            cfg.auto_snapshot_interval_secs = (secs > 0).then_some(secs);
        }
        if let Some(flag) = lookup("SEEKER_CLEAR_SNAPSHOT_AFTER_RESTORE") {
            cfg.clear_snapshot_after_restore = matches!(flag.as_str(), "1" | "true" | "yes");
        }

        Ok(cfg)
    }
}

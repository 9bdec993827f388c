//! LMDB environment setup.

use std::path::Path;

use heed::types::Bytes;
use heed::{Database, Env, EnvOpenOptions};

use crate::LmdbError;

/// Default maximum map size: 1 GiB, far beyond any realistic certificate
/// registry.
pub const DEFAULT_MAP_SIZE: usize = 1024 * 1024 * 1024;

/// Wraps the LMDB environment and all database handles.
pub struct LmdbEnvironment {
    pub(crate) env: Env,
    pub(crate) certificates: Database<Bytes, Bytes>,
}

impl LmdbEnvironment {
    /// Open or create an LMDB environment at the given path.
    pub fn open(path: &Path, map_size: usize) -> Result<Self, LmdbError> {
        std::fs::create_dir_all(path)?;
        // SAFETY: callers hold at most one environment handle per path at a time.
        let env = unsafe {
            EnvOpenOptions::new()
                .map_size(map_size)
                .max_dbs(1)
                .open(path)?
        };
        let mut wtxn = env.write_txn()?;
        let certificates = env.create_database(&mut wtxn, Some("certificates"))?;
        wtxn.commit()?;
        Ok(Self { env, certificates })
    }
}

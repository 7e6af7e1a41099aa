//! Where the directory's users come from.
//!
//! Either a JSON file of users (`--data`) or a seeded synthetic set
//! (`--records`, `--seed`). Every flag can also be set from the environment.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use log::info;

use crate::fake;
use crate::repo::InMemoryUserRepo;
use crate::user::User;

/// Store options shared by every subcommand.
#[derive(Debug, Clone, Args)]
pub struct StoreConfig {
    /// Number of synthetic users to generate when no data file is given
    #[arg(long, env = "ROLODEX_RECORDS", value_name = "N", default_value_t = 100, global = true)]
    pub records: usize,

    /// Seed for synthetic users (random when omitted)
    #[arg(long, env = "ROLODEX_SEED", value_name = "SEED", global = true)]
    pub seed: Option<u64>,

    /// JSON file holding an array of users; replaces the synthetic set
    #[arg(long, env = "ROLODEX_DATA", value_name = "FILE", global = true)]
    pub data: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            records: 100,
            seed: None,
            data: None,
        }
    }
}

impl StoreConfig {
    /// Reads the data file, or generates users when there is none.
    pub fn load_users(&self) -> anyhow::Result<Vec<User>> {
        match &self.data {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("failed to open data file {}", path.display()))?;
                let users: Vec<User> = serde_json::from_reader(BufReader::new(file))
                    .with_context(|| format!("failed to parse users from {}", path.display()))?;
                info!("loaded {} users from {}", users.len(), path.display());
                Ok(users)
            }
            None => {
                let seed = self.seed.unwrap_or_else(rand::random);
                info!("generating {} users with seed {seed}", self.records);
                Ok(fake::fake_users(self.records, seed))
            }
        }
    }

    /// Loads users and indexes them by id.
    pub fn build_repo(&self) -> anyhow::Result<InMemoryUserRepo> {
        Ok(InMemoryUserRepo::new(self.load_users()?))
    }
}

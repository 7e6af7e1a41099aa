//! Command-line front end.
//!
//! Each subcommand maps to one directory operation. Handlers return
//! serializable data; rendering happens once, in [`execute`], according to
//! `--output`.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use rolodex_seeker::{Criterion, FieldKind, MatchMode, Searchable};
use serde::Serialize;

use crate::config::StoreConfig;
use crate::error::RepoError;
use crate::output::{render, render_rows, table, OutputDestination, OutputMode};
use crate::repo::UserRepository;
use crate::service::UserService;
use crate::user::User;

#[derive(Debug, Parser)]
#[command(
    name = "rolodex",
    version,
    about = "Look up and search an in-memory user directory"
)]
pub struct Cli {
    #[command(flatten)]
    pub store: StoreConfig,

    /// Logging level: off, error, warn, info, debug, trace
    #[arg(
        long = "log-level",
        env = "ROLODEX_LOG",
        value_name = "LEVEL",
        default_value = "warn",
        global = true
    )]
    pub log_level: LevelFilter,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputMode::Text, global = true)]
    pub output: OutputMode,

    /// Write output to a file instead of stdout
    #[arg(long = "output-file", value_name = "FILE", global = true)]
    pub output_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Fetch one user by id
    Get { id: u64 },

    /// Fetch several users by id; unknown ids are skipped
    GetMany {
        #[arg(required = true)]
        ids: Vec<u64>,
    },

    /// Find users whose field matches a value
    Search {
        /// Field to match: fname, city, phone, height, Married
        field: String,

        /// Value to compare against, parsed according to the field's kind
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Match mode, e.g. CONTAINS, STARTS_WITH, GREATER_THAN, NOT
        #[arg(long, short)]
        mode: Option<String>,
    },

    /// List searchable fields with their kinds and modes
    Fields,
}

/// One row of the `fields` listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldInfo {
    pub field: &'static str,
    pub kind: FieldKind,
    pub default_mode: MatchMode,
    pub modes: Vec<MatchMode>,
}

impl FieldInfo {
    pub fn all() -> Vec<FieldInfo> {
        User::FIELDS
            .iter()
            .map(|f| FieldInfo {
                field: f.name(),
                kind: f.kind(),
                default_mode: f.kind().default_mode(),
                modes: f.kind().modes().collect(),
            })
            .collect()
    }
}

/// Builds the store from `cli` and writes the command's output to `out`
/// (or to `--output-file`).
pub fn run(cli: &Cli, out: &mut dyn Write) -> anyhow::Result<()> {
    let service = UserService::new(cli.store.build_repo()?);
    let rendered = execute(&cli.command, &service, cli.output)?;

    let destination = match &cli.output_file {
        Some(path) => OutputDestination::File(path.clone()),
        None => OutputDestination::Stdout,
    };
    destination
        .write_text(out, &rendered)
        .context("failed to write output")
}

/// Runs one command against `service` and renders the result.
pub fn execute<R: UserRepository>(
    command: &Command,
    service: &UserService<R>,
    mode: OutputMode,
) -> anyhow::Result<String> {
    let rendered = match command {
        Command::Get { id } => {
            let user = service.get_user(*id)?;
            render(&user, mode, |u| users_table(std::slice::from_ref(u)))?
        }
        Command::GetMany { ids } => {
            let users = service.get_users(ids)?;
            render_rows(&users, User::COLUMNS, mode, users_table)?
        }
        Command::Search { field, value, mode: match_mode } => {
            let criterion = criterion(field, value, match_mode.as_deref())?;
            let mut users = service.search_users(criterion)?;
            users.sort_by_key(|u| u.id);
            render_rows(&users, User::COLUMNS, mode, users_table)?
        }
        Command::Fields => render(&FieldInfo::all(), mode, |f| fields_table(f))?,
    };
    Ok(rendered.trim_end_matches('\n').to_string())
}

fn criterion(field: &str, value: &str, mode: Option<&str>) -> Result<Criterion, RepoError> {
    let criterion = Criterion::new(field, value);
    Ok(match mode {
        Some(name) => criterion.with_mode(name.parse::<MatchMode>()?),
        None => criterion,
    })
}

fn users_table(users: &[User]) -> String {
    if users.is_empty() {
        return "no users found".to_string();
    }
    let rows: Vec<Vec<String>> = users
        .iter()
        .map(|u| {
            vec![
                u.id.to_string(),
                u.first_name.clone(),
                u.city.clone(),
                u.phone_number.clone(),
                u.height.to_string(),
                u.married.to_string(),
            ]
        })
        .collect();
    table(&["ID", "FNAME", "CITY", "PHONE", "HEIGHT", "MARRIED"], &rows)
}

fn fields_table(fields: &[FieldInfo]) -> String {
    let rows: Vec<Vec<String>> = fields
        .iter()
        .map(|f| {
            let modes: Vec<&str> = f.modes.iter().map(|m| m.as_str()).collect();
            vec![
                f.field.to_string(),
                f.kind.to_string(),
                f.default_mode.to_string(),
                modes.join(", "),
            ]
        })
        .collect();
    table(&["FIELD", "KIND", "DEFAULT", "MODES"], &rows)
}

/// Maps a failure to the process exit code.
///
/// Directory errors use their [`ErrorKind`](crate::ErrorKind) code; anything
/// else (bad data file, I/O) exits with 1.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<RepoError>()
        .map_or(1, |e| e.kind().exit_code())
}

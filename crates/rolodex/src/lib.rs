//! Rolodex - an in-memory user directory.
//!
//! Users are held in an [`InMemoryUserRepo`] keyed by id and exposed through
//! [`UserService`]: fetch one, fetch many, and search by a single
//! [`Criterion`](rolodex_seeker::Criterion). Search semantics live in
//! the `rolodex-seeker` crate; this crate supplies the [`User`] record, its
//! routing table, the error taxonomy and the command-line front end.
//!
//! ```rust
//! use rolodex::{InMemoryUserRepo, UserService};
//! use rolodex_seeker::{Criterion, MatchMode};
//!
//! let service = UserService::new(InMemoryUserRepo::new(rolodex::fake::fake_users(50, 7)));
//! let tall = Criterion::new("height", "6.5").with_mode(MatchMode::GreaterThanOrEqual);
//! for user in service.search_users(tall)? {
//!     assert!(user.height >= 6.5);
//! }
//! # Ok::<(), rolodex::RepoError>(())
//! ```

pub mod cli;
pub mod config;
mod error;
pub mod fake;
pub mod output;
mod repo;
mod service;
mod user;

pub use error::{ErrorKind, RepoError};
pub use repo::{InMemoryUserRepo, UserRepository};
pub use service::UserService;
pub use user::User;

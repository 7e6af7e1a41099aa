//! The three operations exposed to callers, on top of any [`UserRepository`].

use log::debug;
use rolodex_seeker::Criterion;

use crate::error::RepoError;
use crate::repo::UserRepository;
use crate::user::User;

/// Front door of the directory. Owns its repository.
#[derive(Debug, Clone)]
pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: R) -> Self {
        UserService { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Looks up one user.
    pub fn get_user(&self, id: u64) -> Result<User, RepoError> {
        debug!("GetUser id={id}");
        self.repo.get_user_by_id(id)
    }

    /// Looks up several users; ids with no user are left out of the result.
    pub fn get_users(&self, ids: &[u64]) -> Result<Vec<User>, RepoError> {
        debug!("GetUsers ids={ids:?}");
        self.repo.get_users_by_ids(ids)
    }

    /// Returns the users matching `criteria`, in no particular order.
    pub fn search_users(&self, criteria: Criterion) -> Result<Vec<User>, RepoError> {
        debug!(
            "SearchUsers field={} value={:?} mode={:?}",
            criteria.field, criteria.value, criteria.match_mode
        );
        self.repo.search_users(&criteria)
    }
}

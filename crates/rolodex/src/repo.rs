//! Keyed user storage and the three directory operations.

use std::collections::HashMap;

use log::{debug, trace, warn};
use rolodex_seeker::Criterion;

use crate::error::RepoError;
use crate::user::User;

/// Read access to a user directory.
pub trait UserRepository {
    /// Fetches one user, failing with [`RepoError::UserNotFound`] on a miss.
    fn get_user_by_id(&self, id: u64) -> Result<User, RepoError>;

    /// Fetches the users that exist among `ids`, in request order.
    ///
    /// Missing ids are skipped, not reported.
    fn get_users_by_ids(&self, ids: &[u64]) -> Result<Vec<User>, RepoError>;

    /// Returns every user matching `criteria`.
    ///
    /// Order is unspecified. An invalid criterion fails the whole call.
    fn search_users(&self, criteria: &Criterion) -> Result<Vec<User>, RepoError>;
}

/// Users held in a hash map keyed by id. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepo {
    data: HashMap<u64, User>,
}

impl InMemoryUserRepo {
    /// Builds a store from `users`. A repeated id keeps the last user seen.
    pub fn new(users: impl IntoIterator<Item = User>) -> Self {
        let mut data = HashMap::new();
        for user in users {
            let id = user.id;
            if data.insert(id, user).is_some() {
                warn!("duplicate user id {id}; keeping the later record");
            }
        }
        InMemoryUserRepo { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl UserRepository for InMemoryUserRepo {
    fn get_user_by_id(&self, id: u64) -> Result<User, RepoError> {
        trace!("get_user_by_id id={id}");
        self.data
            .get(&id)
            .cloned()
            .ok_or(RepoError::UserNotFound(id))
    }

    fn get_users_by_ids(&self, ids: &[u64]) -> Result<Vec<User>, RepoError> {
        let users: Vec<User> = ids
            .iter()
            .filter_map(|id| self.data.get(id))
            .cloned()
            .collect();
        trace!(
            "get_users_by_ids requested={} found={}",
            ids.len(),
            users.len()
        );
        Ok(users)
    }

    fn search_users(&self, criteria: &Criterion) -> Result<Vec<User>, RepoError> {
        let matcher = criteria.compile::<User>()?;
        let users: Vec<User> = matcher
            .filter(self.data.values())
            .into_iter()
            .cloned()
            .collect();
        debug!(
            "search_users field={} mode={} value={:?} matched={} of {}",
            criteria.field,
            matcher.mode(),
            criteria.value,
            users.len(),
            self.data.len()
        );
        Ok(users)
    }
}

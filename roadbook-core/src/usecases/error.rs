use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Repo(repositories::Error::NotFound))
    }
}

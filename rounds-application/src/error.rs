use std::io;

use thiserror::Error;

use rounds_core::{repositories, usecases};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Parameter(#[from] usecases::Error),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
    #[error(transparent)]
    Map(#[from] rounds_map::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

use thiserror::Error;

use crate::note_store::StoreOp;

#[derive(Debug, Error)]
pub enum FilerError {
    #[error("note title is empty")]
    MissingTitle,
    #[error("could not read the selection: {0:#}")]
    Selection(#[source] anyhow::Error),
    #[error("note store failed during {operation}: {source:#}")]
    StoreFailure {
        operation: StoreOp,
        #[source]
        source: anyhow::Error,
    },
}

impl FilerError {
    pub fn store(operation: StoreOp, source: anyhow::Error) -> Self {
        FilerError::StoreFailure { operation, source }
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    /// The host supplied zero root nodes. Reported to the UI as a structured
    /// payload, not as a process failure.
    #[error("No elements selected")]
    EmptySelection,

    #[error("Error encoding snapshot document")]
    JsonError(#[from] serde_json::Error),
}

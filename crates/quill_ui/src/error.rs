use quill_editor::EditorError;
use quill_forms::SerializationError;

#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error(transparent)]
    Load(#[from] SerializationError),

    #[error("form cannot be edited: {0}")]
    Unsupported(#[from] EditorError),
}

pub type LaunchResult<T> = Result<T, LaunchError>;

#[derive(thiserror::Error, Debug)]
pub enum TaskError {
    #[error("Duplicate target name: {0}")]
    DuplicateTask(String),
    #[error("Unknown target: {0} (run `devtask help` to list targets)")]
    UnknownTarget(String),
    #[error("Connection failed: {0}")]
    Connection(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

pub type TaskResult<T> = Result<T, TaskError>;

use crate::model::TodoId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("Todo not found")]
    NotFound(TodoId),

    #[error("Cannot resolve working directory: {0}")]
    WorkingDir(#[source] std::io::Error),

    #[error("Id range is empty: no id can be drawn from 0..0")]
    EmptyIdRange,

    #[error("Cannot list todos directory {}: {source}", .path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write todo file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read todo file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error deleting todo file {}: {source}", .path.display())]
    Delete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TodoError {
    /// Environment failures that end the whole session rather than the
    /// current command.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            TodoError::WorkingDir(_)
                | TodoError::EmptyIdRange
                | TodoError::ListDir { .. }
                | TodoError::Write { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, TodoError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn io_err() -> io::Error {
        io::Error::new(io::ErrorKind::PermissionDenied, "denied")
    }

    #[test]
    fn not_found_message_is_fixed() {
        assert_eq!(TodoError::NotFound(TodoId(7)).to_string(), "Todo not found");
    }

    #[test]
    fn classifies_tiers() {
        assert!(TodoError::WorkingDir(io_err()).is_fatal());
        assert!(TodoError::EmptyIdRange.is_fatal());
        assert!(TodoError::Write {
            path: "todos/1".into(),
            source: io_err()
        }
        .is_fatal());
        assert!(TodoError::ListDir {
            path: "todos".into(),
            source: io_err()
        }
        .is_fatal());

        assert!(!TodoError::NotFound(TodoId(1)).is_fatal());
        assert!(!TodoError::Delete {
            path: "todos/1".into(),
            source: io_err()
        }
        .is_fatal());
        assert!(!TodoError::Read {
            path: "todos/1".into(),
            source: io_err()
        }
        .is_fatal());
    }

    #[test]
    fn delete_message_names_the_file() {
        let err = TodoError::Delete {
            path: PathBuf::from("todos/12"),
            source: io_err(),
        };
        assert_eq!(err.to_string(), "Error deleting todo file todos/12: denied");
    }
}

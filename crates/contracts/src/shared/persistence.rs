//! Save extension point used by every creation dialog.
//!
//! Dialogs hand their candidate record to a [`SaveHook`]. Until a real
//! store is plugged in, [`NotWired`] logs the record and reports
//! [`SaveOutcome::NotWired`].

use std::fmt::Debug;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Persisted,
    /// Accepted, but no store is connected yet
    NotWired,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error("record rejected: {0}")]
    Rejected(String),
    #[error("store unavailable: {0}")]
    Transport(String),
}

pub trait SaveHook<T>: Send + Sync {
    fn save(&self, record: T) -> Result<SaveOutcome, SaveError>;
}

/// Hook that only logs the candidate record
#[derive(Debug, Clone, Copy, Default)]
pub struct NotWired {
    pub collection: &'static str,
}

impl NotWired {
    pub const fn new(collection: &'static str) -> Self {
        Self { collection }
    }
}

impl<T: Debug> SaveHook<T> for NotWired {
    fn save(&self, record: T) -> Result<SaveOutcome, SaveError> {
        log::info!(
            "save to '{}' is not wired yet, discarding {:?}",
            self.collection,
            record
        );
        Ok(SaveOutcome::NotWired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Recording(Mutex<Vec<String>>);

    impl SaveHook<String> for Recording {
        fn save(&self, record: String) -> Result<SaveOutcome, SaveError> {
            if record.is_empty() {
                return Err(SaveError::Rejected("empty name".into()));
            }
            self.0.lock().unwrap().push(record);
            Ok(SaveOutcome::Persisted)
        }
    }

    #[test]
    fn test_not_wired_accepts_anything() {
        let hook = NotWired::new("customers");
        assert_eq!(hook.save("anything"), Ok(SaveOutcome::NotWired));
    }

    #[test]
    fn test_hooks_are_interchangeable() {
        let hooks: Vec<Box<dyn SaveHook<String>>> = vec![
            Box::new(NotWired::new("units")),
            Box::new(Recording(Mutex::new(vec![]))),
        ];
        let outcomes: Vec<_> = hooks.iter().map(|h| h.save("Kg".to_string())).collect();
        assert_eq!(
            outcomes,
            vec![Ok(SaveOutcome::NotWired), Ok(SaveOutcome::Persisted)]
        );
        assert_eq!(
            hooks[1].save(String::new()),
            Err(SaveError::Rejected("empty name".into()))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SaveError::Transport("timeout".into()).to_string(),
            "store unavailable: timeout"
        );
    }
}

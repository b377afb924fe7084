//! Error module for the Niihau Trie crate.
//!
//! Each component defines its own error enum; `NiihauError` aggregates them for
//! callers that mix trie operations with configuration and I/O. Failures can be
//! routed to a process-wide [`ErrorReporter`], which logs through `tracing` by default.

use std::fmt::{Display, Formatter};
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::data_structures::niihau_trie::NiihauTrieError;

pub mod config;

/// Result type alias used throughout the Niihau Trie crate.
pub type NiihauResult<T> = Result<T, NiihauError>;

/// Core error enum for the Niihau Trie crate.
#[derive(Error, Debug)]
pub enum NiihauError {
    /// Errors raised by trie operations: invalid words and malformed serialized input.
    #[error("Trie error: {0}")]
    Trie(#[from] NiihauTrieError),

    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/Deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: NiihauError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that occurred
    /// * `component` - The component where the error occurred
    pub fn new<S: Into<String>>(error: NiihauError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Report an error with context.
    fn report(&self, context: &ErrorContext);
}

/// A simple error reporter implementation that logs errors using the tracing framework.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: &ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}

static ERROR_REPORTER: Lazy<RwLock<Option<Arc<dyn ErrorReporter>>>> =
    Lazy::new(|| RwLock::new(None));

/// Set the global error reporter, replacing any previous one.
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) {
    let mut slot = ERROR_REPORTER.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    *slot = Some(reporter);
}

/// Report an error through the global reporter.
///
/// Falls back to standard error output if no reporter is configured.
pub fn report_error(context: &ErrorContext) {
    let slot = ERROR_REPORTER.read().unwrap_or_else(|poisoned| poisoned.into_inner());
    match slot.as_ref() {
        Some(reporter) => reporter.report(context),
        None => eprintln!("Error: {context}"),
    }
}

use thiserror::Error;

/// Configuration errors that stop the layout from being built.
#[derive(Error, Debug, PartialEq)]
pub enum LayoutError {
    #[error("container has no usable area ({width} x {height})")]
    EmptyContainer { width: f32, height: f32 },

    #[error("thought id '{0}' appears more than once")]
    DuplicateId(String),

    #[error("thought id '{0}' cannot be addressed; ids must be non-empty and untrimmed")]
    UnaddressableId(String),

    #[error("invalid view address: {0}")]
    Address(#[from] url::ParseError),
}

// src/utils/error.rs

//! The central error type for the zap codec.
//!
//! Every failure in the library is fatal to the current compress or
//! decompress call: a call either fully succeeds or reports exactly one
//! error and produces no further output.

use thiserror::Error;

/// The primary error type for all operations in the zap codec library.
#[derive(Error, Debug)]
pub enum ZapError {
    /// An error from the underlying byte source or sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// `top`/`pop` was called on an empty priority queue.
    #[error("priority queue underflow: {0}")]
    Underflow(&'static str),

    /// A bit read was attempted past the end of the input source.
    #[error("unexpected end of stream")]
    EndOfStream,

    /// The compressed stream is structurally invalid, or the input ran
    /// out before the transmitted symbol count was satisfied.
    #[error("corrupt stream: {0}")]
    CorruptStream(String),

    /// The input does not fit the 32-bit symbol count field.
    #[error("input too large for 32-bit symbol count: {0} bytes")]
    InputTooLarge(usize),
}

/// A specialized `Result` type for zap codec operations.
pub type Result<T> = std::result::Result<T, ZapError>;

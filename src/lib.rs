//! A byte-oriented Huffman compressor and decompressor.
//!
//! Given an arbitrary byte sequence, [`compress`] produces a
//! self-describing compressed stream: the serialized Huffman tree, the
//! original byte count, and the packed codes, zero-padded to a byte
//! boundary. [`decompress`] reconstructs the original bytes exactly.
//!
//! # Quick Start
//!
//! ```
//! use zap_codec::{compress_bytes, decompress_bytes};
//!
//! let data = b"abracadabra";
//! let compressed = compress_bytes(data)?;
//! let restored = decompress_bytes(&compressed)?;
//! assert_eq!(restored, data);
//! # Ok::<(), zap_codec::ZapError>(())
//! ```
//!
//! The alphabet is fixed at the 256 byte values; the whole input is
//! buffered in memory before encoding. Both pipelines are
//! single-threaded and own all of their state, so concurrent calls
//! never alias.

// Core modules
pub mod bitstream;
pub mod huffman;
pub mod pqueue;
pub mod utils;

// Public codec API
pub use huffman::{compress, compress_bytes, decompress, decompress_bytes};

// Advanced types (for custom encoding workflows)
pub use huffman::{build_tree, CodeTable, FrequencyTable, HuffmanNode};

// Error types
pub use utils::error::{Result, ZapError};

// Constants
pub const ZAP_VERSION: &str = "0.1.0";

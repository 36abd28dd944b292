pub mod code_table;
pub mod codec;
pub mod tree;

// Re-export commonly used codec functionality
pub use code_table::{Code, CodeTable};
pub use codec::{compress, compress_bytes, decompress, decompress_bytes};
pub use tree::{build_tree, FrequencyTable, HuffmanNode};

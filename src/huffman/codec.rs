// src/huffman/codec.rs

//! The compress and decompress pipelines.
//!
//! Compressed stream layout, MSB-first within each byte:
//!
//! 1. serialized Huffman tree (pre-order, one flag bit per node plus
//!    8 bits per leaf symbol)
//! 2. 32-bit unsigned original-byte count N
//! 3. N symbols' worth of packed codes, in original byte order
//! 4. zero padding to the next byte boundary
//!
//! Empty input is encoded as a sentinel single-leaf tree (placeholder
//! symbol 0) followed by N = 0; decoding sees N = 0 and emits nothing.

use crate::bitstream::{BitReader, BitWriter};
use crate::huffman::code_table::CodeTable;
use crate::huffman::tree::{self, FrequencyTable, HuffmanNode};
use crate::utils::error::{Result, ZapError};
use std::io::{Read, Write};
use tracing::debug;

/// Compresses everything readable from `input` and writes the
/// self-describing compressed stream to `output`.
///
/// The whole input is buffered in memory: the frequency pass needs the
/// full byte sequence before any code can be assigned.
pub fn compress<R: Read, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
    let mut data = Vec::new();
    input.read_to_end(&mut data)?;
    let compressed = compress_bytes(&data)?;
    output.write_all(&compressed)?;
    Ok(())
}

/// Compresses an in-memory byte sequence.
pub fn compress_bytes(data: &[u8]) -> Result<Vec<u8>> {
    if u32::try_from(data.len()).is_err() {
        return Err(ZapError::InputTooLarge(data.len()));
    }

    let freqs = FrequencyTable::from_bytes(data);
    let root = tree::build_tree(&freqs)?;
    let table = CodeTable::from_tree(&root);

    debug!(
        input_bytes = data.len(),
        distinct_symbols = freqs.distinct(),
        code_bits = table.encoded_bits(freqs.iter()),
        "compressing"
    );

    let mut writer = BitWriter::new(Vec::new());
    tree::serialize(&root, &mut writer)?;
    writer.put_u32(data.len() as u32)?;

    for &byte in data {
        // Every input byte is present in the frequency table, so a
        // missing code would be a bug, not bad input.
        let code = table
            .code(byte)
            .ok_or_else(|| ZapError::CorruptStream(format!("no code for symbol {}", byte)))?;
        for bit in code.iter().by_vals() {
            writer.put_bit(bit)?;
        }
    }

    writer.finish()
}

/// Decompresses a stream produced by [`compress`] and writes the
/// original bytes to `output`.
pub fn decompress<R: Read, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
    let decompressed = decompress_from(input)?;
    output.write_all(&decompressed)?;
    Ok(())
}

/// Decompresses an in-memory compressed byte sequence.
pub fn decompress_bytes(data: &[u8]) -> Result<Vec<u8>> {
    decompress_from(&mut std::io::Cursor::new(data))
}

fn decompress_from<R: Read>(input: &mut R) -> Result<Vec<u8>> {
    let mut reader = BitReader::new(input);

    let root = tree::deserialize(&mut reader).map_err(promote_eos)?;
    let count = reader.get_u32().map_err(promote_eos)? as usize;

    debug!(symbol_count = count, "decompressing");

    let mut out = Vec::with_capacity(count);

    // A single-leaf tree has no code bits to walk; the count alone
    // determines the output.
    if let HuffmanNode::Leaf { symbol, .. } = &root {
        out.resize(count, *symbol);
        return Ok(out);
    }

    // Termination is driven by the transmitted count, never by source
    // exhaustion: the final byte carries zero padding that must not be
    // read as code bits.
    for _ in 0..count {
        let mut node = &root;
        loop {
            match node {
                HuffmanNode::Leaf { symbol, .. } => {
                    out.push(*symbol);
                    break;
                }
                HuffmanNode::Internal { left, right, .. } => {
                    node = if reader.get_bit().map_err(promote_eos)? {
                        right
                    } else {
                        left
                    };
                }
            }
        }
    }

    Ok(out)
}

// Running out of input mid-decode means the stream is damaged, not that
// decoding is done; the count field is the only valid stop signal.
fn promote_eos(err: ZapError) -> ZapError {
    match err {
        ZapError::EndOfStream => {
            ZapError::CorruptStream("input exhausted before stream was complete".into())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_stream_for_aaab() {
        // tree: 0 | 1 'b' | 1 'a', then N=4, then codes 1,1,1,0, then
        // one padding bit.
        let compressed = compress_bytes(b"aaab").unwrap();
        assert_eq!(compressed, vec![0x58, 0xAC, 0x20, 0x00, 0x00, 0x00, 0x9C]);
        assert_eq!(decompress_bytes(&compressed).unwrap(), b"aaab");
    }

    #[test]
    fn test_empty_input_sentinel_stream() {
        // sentinel leaf: 1 + 00000000, then N=0, no code bits.
        let compressed = compress_bytes(b"").unwrap();
        assert_eq!(compressed, vec![0x80, 0x00, 0x00, 0x00, 0x00, 0x00]);
        assert_eq!(decompress_bytes(&compressed).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_single_symbol_run_uses_count_not_eof() {
        let data = vec![b'x'; 100];
        let compressed = compress_bytes(&data).unwrap();
        // tree (9 bits) + count (32 bits) + 100 one-bit codes = 141 bits.
        assert_eq!(compressed.len(), 18);
        assert_eq!(decompress_bytes(&compressed).unwrap(), data);
    }

    #[test]
    fn test_roundtrip_all_byte_values() {
        let data: Vec<u8> = (0u8..=255).cycle().take(4096).collect();
        let compressed = compress_bytes(&data).unwrap();
        assert_eq!(decompress_bytes(&compressed).unwrap(), data);
    }

    #[test]
    fn test_compression_is_deterministic() {
        let data = b"determinism is a property, not an accident".repeat(7);
        assert_eq!(
            compress_bytes(&data).unwrap(),
            compress_bytes(&data).unwrap()
        );
    }

    #[test]
    fn test_skewed_input_beats_fixed_width() {
        let mut data = vec![b'z'; 10_000];
        data.extend_from_slice(b"rare bytes");
        let compressed = compress_bytes(&data).unwrap();
        assert!((compressed.len() as u64) * 8 < (data.len() as u64) * 8);
    }

    #[test]
    fn test_truncated_stream_is_corrupt() {
        let compressed = compress_bytes(b"some reasonably sized input text").unwrap();
        let truncated = &compressed[..compressed.len() - 2];
        assert!(matches!(
            decompress_bytes(truncated),
            Err(ZapError::CorruptStream(_))
        ));
    }

    #[test]
    fn test_truncated_count_field_is_corrupt() {
        let compressed = compress_bytes(b"aaab").unwrap();
        // Cut inside the 32-bit count.
        assert!(matches!(
            decompress_bytes(&compressed[..4]),
            Err(ZapError::CorruptStream(_))
        ));
    }

    #[test]
    fn test_bottomless_tree_is_corrupt() {
        let zeros = vec![0u8; 128];
        assert!(matches!(
            decompress_bytes(&zeros),
            Err(ZapError::CorruptStream(_))
        ));
    }

    #[test]
    fn test_streaming_entry_points_match_byte_entry_points() {
        let data = b"channel and slice forms must agree";
        let mut compressed = Vec::new();
        compress(&mut &data[..], &mut compressed).unwrap();
        assert_eq!(compressed, compress_bytes(data).unwrap());

        let mut restored = Vec::new();
        decompress(&mut &compressed[..], &mut restored).unwrap();
        assert_eq!(restored, data);
    }
}

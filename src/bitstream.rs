// src/bitstream.rs

//! Bit-level reader and writer layered over byte sinks and sources.
//!
//! Bits are packed most-significant-bit first within each byte. These two
//! types are the only place the codec touches raw bytes; everything else
//! operates on bits or in-memory structures. The writer introduces zero
//! padding bits exactly once, when a partially filled byte is flushed.

use crate::utils::error::{Result, ZapError};
use std::io::{ErrorKind, Read, Write};

/// A bit-level writer for producing compressed data.
pub struct BitWriter<W: Write> {
    writer: W,
    current_byte: u8,
    bits_in_current: u8,
}

impl<W: Write> BitWriter<W> {
    /// Creates a new BitWriter over a byte sink.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            current_byte: 0,
            bits_in_current: 0,
        }
    }

    /// Writes a single bit, MSB first.
    pub fn put_bit(&mut self, bit: bool) -> Result<()> {
        if bit {
            self.current_byte |= 1 << (7 - self.bits_in_current);
        }
        self.bits_in_current += 1;

        if self.bits_in_current == 8 {
            self.writer.write_all(&[self.current_byte])?;
            self.current_byte = 0;
            self.bits_in_current = 0;
        }
        Ok(())
    }

    /// Writes the 8 bits of a byte, MSB first.
    pub fn put_byte(&mut self, byte: u8) -> Result<()> {
        for i in (0..8).rev() {
            self.put_bit((byte >> i) & 1 == 1)?;
        }
        Ok(())
    }

    /// Writes a fixed-width 32-bit unsigned value, MSB first.
    pub fn put_u32(&mut self, value: u32) -> Result<()> {
        for i in (0..32).rev() {
            self.put_bit((value >> i) & 1 == 1)?;
        }
        Ok(())
    }

    /// Flushes any partially filled byte, padding with zero bits.
    pub fn flush(&mut self) -> Result<()> {
        if self.bits_in_current > 0 {
            // High bits are already in place; the low bits stay zero.
            self.writer.write_all(&[self.current_byte])?;
            self.current_byte = 0;
            self.bits_in_current = 0;
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Flushes and returns the underlying sink.
    pub fn finish(mut self) -> Result<W> {
        self.flush()?;
        Ok(self.writer)
    }
}

/// A bit-level reader for consuming compressed data.
pub struct BitReader<R: Read> {
    reader: R,
    current_byte: u8,
    bits_remaining: u8,
}

impl<R: Read> BitReader<R> {
    /// Creates a new BitReader over a byte source.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            current_byte: 0,
            bits_remaining: 0,
        }
    }

    /// Reads a single bit, refilling the one-byte buffer on demand.
    ///
    /// Fails with [`ZapError::EndOfStream`] when a refill is attempted
    /// but the source has no byte left.
    pub fn get_bit(&mut self) -> Result<bool> {
        if self.bits_remaining == 0 {
            let mut byte = [0u8; 1];
            self.reader.read_exact(&mut byte).map_err(|e| {
                if e.kind() == ErrorKind::UnexpectedEof {
                    ZapError::EndOfStream
                } else {
                    ZapError::Io(e)
                }
            })?;
            self.current_byte = byte[0];
            self.bits_remaining = 8;
        }

        self.bits_remaining -= 1;
        Ok((self.current_byte >> self.bits_remaining) & 1 == 1)
    }

    /// Composes 8 bit reads into a byte, MSB first.
    pub fn get_byte(&mut self) -> Result<u8> {
        let mut byte = 0u8;
        for _ in 0..8 {
            byte = (byte << 1) | self.get_bit()? as u8;
        }
        Ok(byte)
    }

    /// Composes 32 bit reads into an unsigned value, MSB first.
    pub fn get_u32(&mut self) -> Result<u32> {
        let mut value = 0u32;
        for _ in 0..32 {
            value = (value << 1) | self.get_bit()? as u32;
        }
        Ok(value)
    }
}

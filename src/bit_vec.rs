use crate::error::{HuffmanError, Result};

/// Growable bit sequence packed MSB-first into bytes.
///
/// Unused low bits of the last byte stay zero; only `bit_count` says how
/// many bits are meaningful.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct BitVec {
    bits: Vec<u8>,
    bit_count: usize,
}

impl BitVec {
    pub fn new() -> Self {
        BitVec {
            bits: Vec::new(),
            bit_count: 0,
        }
    }

    pub fn with_capacity(bit_capacity: usize) -> Self {
        BitVec {
            bits: Vec::with_capacity(bit_capacity.div_ceil(8)),
            bit_count: 0,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    pub fn push_bit(&mut self, bit: bool) {
        let shift = 7 - self.bit_count % 8;
        if shift == 7 {
            self.bits.push(0);
        }
        if let Some(last) = self.bits.last_mut() {
            *last |= u8::from(bit) << shift;
        }
        self.bit_count += 1;
    }

    /// Bytes the packer can hold before reallocating.
    pub fn byte_capacity(&self) -> usize {
        self.bits.capacity()
    }

    pub fn push_bits(&mut self, bits: &[bool]) {
        for &bit in bits {
            self.push_bit(bit);
        }
    }

    /// Packed bytes and the number of valid bits in them.
    pub fn into_parts(self) -> (Vec<u8>, usize) {
        (self.bits, self.bit_count)
    }
}

/// Reads back exactly `bit_count` bits from packed bytes, MSB-first.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    bytes: &'a [u8],
    bit_count: usize,
    position: usize,
}

impl<'a> BitReader<'a> {
    /// Fails if `bit_count` exceeds the bits `bytes` can hold. Bits past
    /// `bit_count` are padding and never read.
    pub fn new(bytes: &'a [u8], bit_count: usize) -> Result<Self> {
        let available = bytes.len().saturating_mul(8);
        if bit_count > available {
            return Err(HuffmanError::InvalidBitCount {
                bit_count,
                available,
            });
        }
        Ok(BitReader {
            bytes,
            bit_count,
            position: 0,
        })
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.bit_count - self.position
    }

    pub fn read_bit(&mut self) -> Option<bool> {
        if self.position >= self.bit_count {
            return None;
        }
        let byte = self.bytes[self.position / 8];
        let bit = (byte >> (7 - self.position % 8)) & 1 == 1;
        self.position += 1;
        Some(bit)
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        self.read_bit()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl ExactSizeIterator for BitReader<'_> {}

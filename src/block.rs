/* This file is part of balloon-hash.
 *
 * balloon-hash is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * balloon-hash is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with balloon-hash.  If not, see <http://www.gnu.org/licenses/>.
 */

use zeroize::Zeroize;

/// A single output of the underlying digest: `H_LEN` bytes, the unit stored
/// in a [`Buffer`].
pub type Block = Vec<u8>;

/// The `space_cost`-block buffer the expand and mix phases operate over.
///
/// Zeroized on drop (§5: "SHOULD zeroise the buffer on drop if the platform
/// supports it").
pub struct Buffer {
    blocks: Vec<Block>,
}

impl Buffer {
    pub(crate) fn with_seed(seed: Block) -> Self {
        Self { blocks: vec![seed] }
    }

    pub(crate) fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub(crate) fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Index with wraparound: `buf[s - 1]` where `s == 0` resolves to the
    /// last block (§3 invariants, §9 "Wraparound at s=0").
    pub(crate) fn prev(&self, s: usize) -> &Block {
        let idx = if s == 0 { self.blocks.len() - 1 } else { s - 1 };
        &self.blocks[idx]
    }

    pub(crate) fn get(&self, s: usize) -> &Block {
        &self.blocks[s]
    }

    pub(crate) fn set(&mut self, s: usize, block: Block) {
        self.blocks[s] = block;
    }

    pub(crate) fn last(&self) -> &Block {
        self.blocks.last().expect("buffer is never empty")
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        for block in &mut self.blocks {
            block.zeroize();
        }
    }
}

/// XOR of two byte strings. Result length is `max(|a|, |b|)`; the shorter
/// operand is treated as left-zero-padded in 8-byte-word units up to the
/// longer one's length (§4.2). In the core algorithm every operand is an
/// equal-length [`Block`], where this degenerates to plain byte-wise XOR.
#[must_use]
pub fn xor(a: &[u8], b: &[u8]) -> Vec<u8> {
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let pad = longer.len() - shorter.len();

    longer
        .iter()
        .enumerate()
        .map(|(i, byte)| {
            let other = if i < pad { 0 } else { shorter[i - pad] };
            byte ^ other
        })
        .collect()
}

/// Interprets `block` as an unsigned little-endian integer of arbitrary
/// width and reduces it modulo `modulus` (§4.4 "Decoding the lookup index").
///
/// Processes bytes most-significant-first (i.e. from the end of the
/// little-endian block backwards) with Horner's rule in `u128` arithmetic,
/// which is exactly equivalent to reducing the full-width integer and avoids
/// ever materializing a value wider than 64 bits.
#[must_use]
pub(crate) fn decode_le_mod(block: &[u8], modulus: u64) -> u64 {
    assert!(modulus > 0, "modulus must be positive");
    let mut acc: u128 = 0;
    for &byte in block.iter().rev() {
        acc = (acc * 256 + u128::from(byte)) % u128::from(modulus);
    }
    acc as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor_equal_length_is_byte_wise() {
        assert_eq!(xor(&[0xff, 0x00], &[0x0f, 0xf0]), vec![0xf0, 0xf0]);
    }

    #[test]
    fn xor_with_self_is_zero() {
        let block = vec![1, 2, 3, 4, 5];
        assert_eq!(xor(&block, &block), vec![0, 0, 0, 0, 0]);
    }

    #[test]
    fn buffer_prev_wraps_at_zero() {
        let mut buf = Buffer::with_seed(vec![0]);
        buf.push(vec![1]);
        buf.push(vec![2]);
        assert_eq!(buf.prev(0), buf.last());
        assert_eq!(buf.prev(1), &vec![0]);
        assert_eq!(buf.prev(2), &vec![1]);
    }

    #[test]
    fn decode_le_mod_matches_little_endian_reading() {
        // 0x0100 little-endian read over [0x00, 0x01] is 256.
        assert_eq!(decode_le_mod(&[0x00, 0x01], 1000), 256);
        assert_eq!(decode_le_mod(&[0x00, 0x01], 7), 256 % 7);
    }

    #[test]
    fn decode_le_mod_is_always_less_than_modulus() {
        let block = [0xff; 32];
        for modulus in 1..20u64 {
            assert!(decode_le_mod(&block, modulus) < modulus);
        }
    }
}

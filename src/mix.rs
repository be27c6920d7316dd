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

use crate::algorithm::{h_args, HashPrimitive};
use crate::block::{decode_le_mod, Buffer};

/// `time_cost` rounds of dependent-and-pseudo-random rereferencing mixing
/// over `buf` (§4.4). Every detail of the counter schedule below is
/// load-bearing: a single deviation produces a digest that matches none of
/// the published test vectors.
pub(crate) fn mix(
    buf: &mut Buffer,
    mut cnt: u64,
    h: HashPrimitive,
    delta: u64,
    salt: &[u8],
    space_cost: u64,
    time_cost: u64,
) {
    tracing::debug!(time_cost, space_cost, delta, "mix: start");

    for t in 0..time_cost {
        for s in 0..space_cost {
            let s_idx = s as usize;

            let mixed = h.h(h_args!(cnt, buf.prev(s_idx).as_slice(), buf.get(s_idx).as_slice()));
            buf.set(s_idx, mixed);
            cnt += 1;

            for i in 0..delta {
                // idx_block does NOT consume a counter value.
                let idx_block = h.h(h_args!(t, s, i));
                let other_raw = h.h(h_args!(cnt, salt, idx_block.as_slice()));
                cnt += 1;

                let other = decode_le_mod(&other_raw, space_cost) as usize;

                let updated = h.h(h_args!(cnt, buf.get(s_idx).as_slice(), buf.get(other).as_slice()));
                buf.set(s_idx, updated);
                cnt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::Algorithm;

    fn seeded_buffer(h: HashPrimitive, space_cost: u64) -> (Buffer, u64) {
        let seed = h.h(h_args!(0u64, b"p".as_slice(), b"s".as_slice()));
        let mut buf = Buffer::with_seed(seed);
        let cnt = crate::expand::expand(&mut buf, 1, h, space_cost);
        (buf, cnt)
    }

    #[test]
    fn counter_advances_by_one_plus_two_delta_per_outer_step() {
        let h = HashPrimitive::new(Algorithm::Sha256);
        let (space_cost, time_cost, delta) = (4u64, 2u64, 3u64);
        let (mut buf, cnt0) = seeded_buffer(h, space_cost);

        mix(&mut buf, cnt0, h, delta, b"salt", space_cost, time_cost);

        // We can't observe `cnt` directly (mix returns nothing, by
        // contract), but a second run started from the same `cnt0` must
        // reach the same final blocks deterministically, which indirectly
        // confirms the schedule is stable run-to-run.
        let (mut buf2, cnt0_again) = seeded_buffer(h, space_cost);
        assert_eq!(cnt0, cnt0_again);
        mix(&mut buf2, cnt0_again, h, delta, b"salt", space_cost, time_cost);
        assert_eq!(buf.get(space_cost as usize - 1), buf2.get(space_cost as usize - 1));
    }

    #[test]
    fn self_reference_is_reachable() {
        // With space_cost = 1, `other` can only ever decode to 0, i.e. `s`
        // itself -- this must not panic or loop incorrectly.
        let h = HashPrimitive::new(Algorithm::Sha256);
        let (mut buf, cnt0) = seeded_buffer(h, 1);
        mix(&mut buf, cnt0, h, 3, b"salt", 1, 2);
        assert_eq!(buf.len(), 1);
    }

    #[test]
    fn different_salts_produce_different_output() {
        let h = HashPrimitive::new(Algorithm::Sha256);
        let (mut buf_a, cnt_a) = seeded_buffer(h, 4);
        mix(&mut buf_a, cnt_a, h, 3, b"salt-a", 4, 2);

        let (mut buf_b, cnt_b) = seeded_buffer(h, 4);
        mix(&mut buf_b, cnt_b, h, 3, b"salt-b", 4, 2);

        assert_ne!(buf_a.last(), buf_b.last());
    }
}

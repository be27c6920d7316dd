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
use crate::block::Buffer;

/// Fills `buf` (which on entry holds exactly the seed block) up to
/// `space_cost` blocks by hash-chaining from the seed, returning the
/// counter's new value.
///
/// `space_cost == 1` is a no-op: the loop never runs and `cnt` is returned
/// unchanged (§4.3).
pub(crate) fn expand(buf: &mut Buffer, mut cnt: u64, h: HashPrimitive, space_cost: u64) -> u64 {
    tracing::debug!(space_cost, cnt, "expand: start");

    for s in 1..space_cost {
        let s = s as usize;
        let block = h.h(h_args!(cnt, buf.prev(s).as_slice()));
        buf.push(block);
        cnt += 1;
    }

    cnt
}

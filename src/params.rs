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

use crate::error::BalloonError;

/// Rejects a zero parameter before any buffer allocation or hashing begins
/// (§7, §9 "Open question": the reference never validates, this crate does).
pub(crate) fn require_nonzero(name: &'static str, value: u64) -> Result<(), BalloonError> {
    if value == 0 {
        return Err(BalloonError::InvalidParameter { name });
    }
    Ok(())
}

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

use data_encoding::HEXLOWER;

use crate::algorithm::{h_args, Algorithm, HashPrimitive};
use crate::block::{Block, Buffer};
use crate::ct::ct_eq;
use crate::error::BalloonError;
use crate::expand::expand;
use crate::mix::mix;
use crate::params::require_nonzero;

/// Default parameters for the "friendly" wrappers (§4.5, §4.6): `s=16`,
/// `t=20`, `d=4` (single-core); `p=4` added for the M-core wrapper.
pub const FRIENDLY_SPACE_COST: u64 = 16;
pub const FRIENDLY_TIME_COST: u64 = 20;
pub const FRIENDLY_DELTA: u64 = 4;
pub const FRIENDLY_PARALLEL_COST: u64 = 4;

/// Default `delta` for the low-level API when a caller doesn't pick one
/// explicitly through [`BalloonHasher`] (§3 Parameters).
pub const DEFAULT_DELTA: u64 = 3;

/// Configurable entry point binding a digest [`Algorithm`] to the
/// `balloon`/`balloon_m`/`verify`/`verify_m` operations (§6, construction-time
/// digest choice). The free functions in this crate are thin wrappers around
/// `BalloonHasher::new(Algorithm::Sha256)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BalloonHasher {
    primitive: HashPrimitive,
}

impl BalloonHasher {
    #[must_use]
    pub const fn new(algorithm: Algorithm) -> Self {
        Self { primitive: HashPrimitive::new(algorithm) }
    }

    #[must_use]
    pub const fn algorithm(self) -> Algorithm {
        self.primitive.algorithm()
    }

    pub(crate) const fn primitive(self) -> HashPrimitive {
        self.primitive
    }

    /// `balloon(password, salt, space_cost, time_cost, delta) -> Block` (§4.5).
    pub fn hash(
        self,
        password: &[u8],
        salt: &[u8],
        space_cost: u64,
        time_cost: u64,
        delta: u64,
    ) -> Result<Block, BalloonError> {
        require_nonzero("space_cost", space_cost)?;
        require_nonzero("time_cost", time_cost)?;
        require_nonzero("delta", delta)?;

        let h = self.primitive;
        let seed = h.h(h_args!(0u64, password, salt));
        let mut buf = Buffer::with_seed(seed);

        let cnt = expand(&mut buf, 1, h, space_cost);
        mix(&mut buf, cnt, h, delta, salt, space_cost, time_cost);

        Ok(buf.last().clone())
    }

    /// `balloon_hash(password, salt) -> hex string`, fixing
    /// `space_cost=16, time_cost=20, delta=4` (§4.5).
    pub fn hash_friendly(self, password: &[u8], salt: &[u8]) -> Result<String, BalloonError> {
        let block = self.hash(password, salt, FRIENDLY_SPACE_COST, FRIENDLY_TIME_COST, FRIENDLY_DELTA)?;
        Ok(HEXLOWER.encode(&block))
    }

    /// `verify(expected_hex, password, salt, space_cost, time_cost, delta) -> bool` (§4.7).
    ///
    /// A hex string of the wrong length is rejected before any hashing or
    /// comparison happens; the recomputed digest is compared to `expected_hex`
    /// using a constant-time equality that does not short-circuit on the
    /// first differing byte.
    pub fn verify(
        self,
        expected_hex: &str,
        password: &[u8],
        salt: &[u8],
        space_cost: u64,
        time_cost: u64,
        delta: u64,
    ) -> Result<bool, BalloonError> {
        let expected_len = self.primitive.output_len() * 2;
        if expected_hex.len() != expected_len {
            return Err(BalloonError::InvalidHexLength { expected: expected_len, actual: expected_hex.len() });
        }

        let block = self.hash(password, salt, space_cost, time_cost, delta)?;
        let actual_hex = HEXLOWER.encode(&block);
        Ok(ct_eq(actual_hex.as_bytes(), expected_hex.as_bytes()))
    }
}

/// `balloon(password, salt, space_cost, time_cost, delta) -> Block`, over SHA-256 (§4.5, §6).
pub fn balloon(
    password: &[u8],
    salt: &[u8],
    space_cost: u64,
    time_cost: u64,
    delta: u64,
) -> Result<Block, BalloonError> {
    BalloonHasher::default().hash(password, salt, space_cost, time_cost, delta)
}

/// `balloon_hash(password, salt) -> hex string`, over SHA-256, fixing
/// `space_cost=16, time_cost=20, delta=4` (§4.5, §6).
pub fn balloon_hash(password: &[u8], salt: &[u8]) -> Result<String, BalloonError> {
    BalloonHasher::default().hash_friendly(password, salt)
}

/// `verify(expected_hex, password, salt, space_cost, time_cost, delta) -> bool`,
/// over SHA-256 (§4.7, §6).
pub fn verify(
    expected_hex: &str,
    password: &[u8],
    salt: &[u8],
    space_cost: u64,
    time_cost: u64,
    delta: u64,
) -> Result<bool, BalloonError> {
    BalloonHasher::default().verify(expected_hex, password, salt, space_cost, time_cost, delta)
}

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

use crate::algorithm::h_args;
use crate::balloon::{BalloonHasher, FRIENDLY_DELTA, FRIENDLY_PARALLEL_COST, FRIENDLY_SPACE_COST, FRIENDLY_TIME_COST};
use crate::block::{xor, Block};
use crate::ct::ct_eq;
use crate::error::{describe_panic, BalloonError};
use crate::params::require_nonzero;

impl BalloonHasher {
    /// `balloon_m(password, salt, space_cost, time_cost, parallel_cost, delta) -> Block` (§4.6).
    ///
    /// Lanes run to completion independently inside [`std::thread::scope`],
    /// one OS thread per lane, and are joined before the XOR-reduce and
    /// finalizing hash. A panicking lane aborts the whole call with
    /// [`BalloonError::WorkerFailure`]; no partial result is ever returned
    /// (§4.6 failure semantics, §5 "no cross-worker synchronization beyond
    /// join").
    pub fn hash_m(
        self,
        password: &[u8],
        salt: &[u8],
        space_cost: u64,
        time_cost: u64,
        parallel_cost: u64,
        delta: u64,
    ) -> Result<Block, BalloonError> {
        require_nonzero("space_cost", space_cost)?;
        require_nonzero("time_cost", time_cost)?;
        require_nonzero("parallel_cost", parallel_cost)?;
        require_nonzero("delta", delta)?;

        tracing::debug!(parallel_cost, "balloon_m: dispatching lanes");

        let lane_outputs: Vec<Block> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..parallel_cost)
                .map(|p| {
                    let hasher = self;
                    scope.spawn(move || {
                        let mut lane_salt = salt.to_vec();
                        lane_salt.extend_from_slice(&(p + 1).to_le_bytes());
                        hasher.hash(password, &lane_salt, space_cost, time_cost, delta)
                    })
                })
                .collect();

            handles
                .into_iter()
                .enumerate()
                .map(|(lane, handle)| match handle.join() {
                    Ok(result) => result,
                    Err(panic) => Err(BalloonError::WorkerFailure { lane: lane as u64, reason: describe_panic(&*panic) }),
                })
                .collect::<Result<Vec<Block>, BalloonError>>()
        })?;

        tracing::debug!("balloon_m: all lanes joined, combining");

        let combined = lane_outputs
            .into_iter()
            .reduce(|acc, lane| xor(&acc, &lane))
            .expect("parallel_cost >= 1 guarantees at least one lane output");

        Ok(self.primitive().h(h_args!(password, salt, combined.as_slice())))
    }

    /// `balloon_m_hash(password, salt) -> hex string`, fixing
    /// `space_cost=16, time_cost=20, parallel_cost=4, delta=4` (§4.6).
    pub fn hash_m_friendly(self, password: &[u8], salt: &[u8]) -> Result<String, BalloonError> {
        let block = self.hash_m(
            password,
            salt,
            FRIENDLY_SPACE_COST,
            FRIENDLY_TIME_COST,
            FRIENDLY_PARALLEL_COST,
            FRIENDLY_DELTA,
        )?;
        Ok(HEXLOWER.encode(&block))
    }

    /// `verify_m(expected_hex, password, salt, space_cost, time_cost, parallel_cost, delta) -> bool` (§4.7).
    pub fn verify_m(
        self,
        expected_hex: &str,
        password: &[u8],
        salt: &[u8],
        space_cost: u64,
        time_cost: u64,
        parallel_cost: u64,
        delta: u64,
    ) -> Result<bool, BalloonError> {
        let expected_len = self.primitive().output_len() * 2;
        if expected_hex.len() != expected_len {
            return Err(BalloonError::InvalidHexLength { expected: expected_len, actual: expected_hex.len() });
        }

        let block = self.hash_m(password, salt, space_cost, time_cost, parallel_cost, delta)?;
        let actual_hex = HEXLOWER.encode(&block);
        Ok(ct_eq(actual_hex.as_bytes(), expected_hex.as_bytes()))
    }
}

/// `balloon_m(password, salt, space_cost, time_cost, parallel_cost, delta) -> Block`, over SHA-256 (§4.6, §6).
pub fn balloon_m(
    password: &[u8],
    salt: &[u8],
    space_cost: u64,
    time_cost: u64,
    parallel_cost: u64,
    delta: u64,
) -> Result<Block, BalloonError> {
    BalloonHasher::default().hash_m(password, salt, space_cost, time_cost, parallel_cost, delta)
}

/// `balloon_m_hash(password, salt) -> hex string`, over SHA-256, fixing
/// `space_cost=16, time_cost=20, parallel_cost=4, delta=4` (§4.6, §6).
pub fn balloon_m_hash(password: &[u8], salt: &[u8]) -> Result<String, BalloonError> {
    BalloonHasher::default().hash_m_friendly(password, salt)
}

/// `verify_m(expected_hex, password, salt, space_cost, time_cost, parallel_cost, delta) -> bool`,
/// over SHA-256 (§4.7, §6).
pub fn verify_m(
    expected_hex: &str,
    password: &[u8],
    salt: &[u8],
    space_cost: u64,
    time_cost: u64,
    parallel_cost: u64,
    delta: u64,
) -> Result<bool, BalloonError> {
    BalloonHasher::default().verify_m(expected_hex, password, salt, space_cost, time_cost, parallel_cost, delta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::Algorithm;
    use crate::balloon::balloon;

    // §8 end-to-end vectors (SHA-256, lowercase hex).
    const VECTORS: &[(&[u8], &[u8], u64, u64, u64, u64, &str)] = &[
        (
            b"hunter42",
            b"examplesalt",
            1024,
            3,
            4,
            3,
            "1832bd8e5cbeba1cb174a13838095e7e66508e9bf04c40178990adbc8ba9eb6f",
        ),
        (b"", b"salt", 3, 3, 2, 3, "f8767fe04059cef67b4427cda99bf8bcdd983959dbd399a5e63ea04523716c23"),
        (b"password", b"", 3, 3, 1, 3, "498344ee9d31baf82cc93ebb3874fe0b76e164302c1cefa1b63a90a69afb9b4d"),
        (b"\x00", b"\x00", 3, 3, 1, 3, "d9e33c683451b21fb3720afbd78bf12518c1d4401fa39f054b052a145c968bb1"),
        (
            b"password",
            b"salt",
            1,
            1,
            16,
            3,
            "a67b383bb88a282aef595d98697f90820adf64582a4b3627c76b7da3d8bae915",
        ),
    ];

    #[test]
    fn matches_published_test_vectors() {
        for &(password, salt, space_cost, time_cost, parallel_cost, delta, expected) in VECTORS {
            let got = balloon_m(password, salt, space_cost, time_cost, parallel_cost, delta).unwrap();
            assert_eq!(HEXLOWER.encode(&got), expected, "vector mismatch for {password:?}/{salt:?}");
        }
    }

    #[test]
    fn single_lane_relates_to_balloon() {
        // balloon_m(p, s, sc, tc, 1, d) == H(p, s, balloon(p, s || LE8(1), sc, tc, d))
        let (password, salt, space_cost, time_cost, delta) = (b"password".as_slice(), b"salt".as_slice(), 4u64, 2u64, 3u64);

        let via_m = balloon_m(password, salt, space_cost, time_cost, 1, delta).unwrap();

        let mut lane_salt = salt.to_vec();
        lane_salt.extend_from_slice(&1u64.to_le_bytes());
        let lane_out = balloon(password, &lane_salt, space_cost, time_cost, delta).unwrap();
        let expected = crate::algorithm::HashPrimitive::new(Algorithm::Sha256)
            .h(h_args!(password, salt, lane_out.as_slice()));

        assert_eq!(via_m, expected);
    }

    #[test]
    fn balloon_m_hash_equals_balloon_m_with_friendly_defaults() {
        let via_wrapper = balloon_m_hash(b"password", b"salt").unwrap();
        let via_low_level = balloon_m(
            b"password",
            b"salt",
            FRIENDLY_SPACE_COST,
            FRIENDLY_TIME_COST,
            FRIENDLY_PARALLEL_COST,
            FRIENDLY_DELTA,
        )
        .unwrap();
        assert_eq!(via_wrapper, HEXLOWER.encode(&via_low_level));
    }

    #[test]
    fn xor_combine_is_order_independent() {
        // The combining XOR is commutative/associative; verify by combining
        // the same set of lane outputs in two different orders.
        let lanes: Vec<Block> = (0..4)
            .map(|p| {
                let mut lane_salt = b"salt".to_vec();
                lane_salt.extend_from_slice(&(p + 1u64).to_le_bytes());
                balloon(b"password", &lane_salt, 4, 2, 3).unwrap()
            })
            .collect();

        let forward = lanes.iter().cloned().reduce(|a, b| xor(&a, &b)).unwrap();
        let reversed = lanes.iter().rev().cloned().reduce(|a, b| xor(&a, &b)).unwrap();
        assert_eq!(forward, reversed);
    }

    #[test]
    fn zero_parameters_are_rejected() {
        assert!(matches!(
            balloon_m(b"p", b"s", 0, 1, 1, 1),
            Err(BalloonError::InvalidParameter { name: "space_cost" })
        ));
        assert!(matches!(
            balloon_m(b"p", b"s", 1, 0, 1, 1),
            Err(BalloonError::InvalidParameter { name: "time_cost" })
        ));
        assert!(matches!(
            balloon_m(b"p", b"s", 1, 1, 0, 1),
            Err(BalloonError::InvalidParameter { name: "parallel_cost" })
        ));
        assert!(matches!(
            balloon_m(b"p", b"s", 1, 1, 1, 0),
            Err(BalloonError::InvalidParameter { name: "delta" })
        ));
    }

    #[test]
    fn verify_m_accepts_matching_digest_and_rejects_mismatches() {
        let hex = balloon_m_hash(b"password", b"salt").unwrap();
        assert!(verify_m(
            &hex,
            b"password",
            b"salt",
            FRIENDLY_SPACE_COST,
            FRIENDLY_TIME_COST,
            FRIENDLY_PARALLEL_COST,
            FRIENDLY_DELTA
        )
        .unwrap());
        assert!(!verify_m(
            &hex,
            b"wrong",
            b"salt",
            FRIENDLY_SPACE_COST,
            FRIENDLY_TIME_COST,
            FRIENDLY_PARALLEL_COST,
            FRIENDLY_DELTA
        )
        .unwrap());
    }

    #[test]
    fn verify_m_rejects_wrong_hex_length() {
        let err = verify_m(
            "deadbeef",
            b"password",
            b"salt",
            FRIENDLY_SPACE_COST,
            FRIENDLY_TIME_COST,
            FRIENDLY_PARALLEL_COST,
            FRIENDLY_DELTA,
        )
        .unwrap_err();
        assert!(matches!(err, BalloonError::InvalidHexLength { expected: 64, actual: 8 }));
    }
}

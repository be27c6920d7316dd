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

/// Errors produced by the Balloon hashing core.
///
/// The algorithm itself has no recoverable failure modes once parameters are
/// accepted; every variant here is either a precondition rejected before any
/// hashing begins, or a fault surfaced from an M-core worker.
#[derive(thiserror::Error, Debug)]
pub enum BalloonError {
    /// `space_cost`, `time_cost`, `parallel_cost`, or `delta` was zero.
    #[error("invalid parameter: {name} must be >= 1, got 0")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
    },

    /// A hex string passed to `verify`/`verify_m` had the wrong length for
    /// the configured digest's output.
    #[error("invalid hex length: expected {expected} characters, got {actual}")]
    InvalidHexLength {
        /// Expected length in hex characters (`2 * H_LEN`).
        expected: usize,
        /// Actual length of the string that was passed in.
        actual: usize,
    },

    /// An M-core lane panicked or otherwise failed to produce a result.
    #[error("lane {lane} failed: {reason}")]
    WorkerFailure {
        /// Zero-based index of the failing lane.
        lane: u64,
        /// Description of the panic payload or join failure.
        reason: String,
    },
}

/// Extracts a human-readable message from a thread panic payload.
pub(crate) fn describe_panic(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "worker panicked with a non-string payload".to_string()
    }
}

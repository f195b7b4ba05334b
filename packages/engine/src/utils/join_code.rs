//! Join code generation for sessions.
//!
//! Join codes are 6-character strings using Crockford's Base32 alphabet,
//! short enough to read out loud and free of look-alike characters.

use rand::distributions::Uniform;
use rand::prelude::*;
use rand::rngs::OsRng;

const CROCKFORD: &[u8] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ"; // no I, L, O, U

pub const JOIN_CODE_LEN: usize = 6;

/// Generate a join code from the OS's cryptographically secure RNG.
pub fn generate_join_code() -> String {
    let mut rng = OsRng;
    let dist = Uniform::from(0..CROCKFORD.len());

    let mut s = String::with_capacity(JOIN_CODE_LEN);
    for _ in 0..JOIN_CODE_LEN {
        s.push(CROCKFORD[dist.sample(&mut rng)] as char);
    }
    s
}

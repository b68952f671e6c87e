//! Join code and API token generation.

use rand::Rng;

/// Characters used in playlist join codes.
pub const PLAYLIST_CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Characters used in event codes.
pub const EVENT_CODE_ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub const CODE_LENGTH: usize = 6;

/// Attempts made to find an unused code before giving up.
pub const MAX_CODE_ATTEMPTS: usize = 10;

pub const API_TOKEN_LENGTH: usize = 48;

/// Generates a random code of `CODE_LENGTH` characters drawn from `alphabet`.
///
/// Uniqueness is not checked here; callers verify against the store and retry.
pub fn generate_code(alphabet: &[u8]) -> String {
    random_string(alphabet, CODE_LENGTH)
}

/// Generates the bearer token a user authenticates API requests with.
pub fn generate_api_token() -> String {
    random_string(EVENT_CODE_ALPHABET, API_TOKEN_LENGTH)
}

fn random_string(alphabet: &[u8], length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())] as char)
        .collect()
}

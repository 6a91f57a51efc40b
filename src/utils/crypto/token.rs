//! Opaque token generation for confirmation and password-reset links

use base64::{Engine as _, engine::general_purpose};
use rand::Rng;

/// Length of every token this service mints: 32 random bytes encoded as
/// URL-safe base64 without padding.
pub const TOKEN_LEN: usize = 43;

/// Generate an unguessable URL-safe token.
///
/// Uniqueness is not checked here; the store's unique constraints reject a
/// collision on insert instead of silently overwriting.
pub fn generate_token() -> String {
    let mut rng = rand::thread_rng();
    let bytes: Vec<u8> = (0..32).map(|_| rng.r#gen()).collect();
    general_purpose::URL_SAFE_NO_PAD.encode(&bytes)
}

/// Cheap format precondition checked before any store lookup.
///
/// Anything that fails this cannot be a token we issued; callers map it to
/// the same invalid-token error as an unknown token.
pub fn is_well_formed(token: &str) -> bool {
    token.len() == TOKEN_LEN
        && token
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

use rand::Rng;

/// Length of every generated short key.
pub const SHORT_KEY_LEN: usize = 5;

/// Symbols a short key is drawn from.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generate a random key of `len` characters from [`ALPHABET`].
///
/// Draws from the thread-local generator, which is seeded once from the OS
/// and then shared by every call on that thread.
pub fn generate_short_key(len: usize) -> String {
    generate_short_key_with(&mut rand::thread_rng(), len)
}

/// Same as [`generate_short_key`] but with a caller-supplied generator.
pub fn generate_short_key_with<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

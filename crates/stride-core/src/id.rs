//! Workout identifier generation.

use rand::RngCore;

/// Generate an opaque 128-bit workout id, hex-encoded (32 chars).
pub fn new_workout_id() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

use rand::Rng;

use crate::models::constants::MAX_GALAXY_DIMENSION;
use crate::models::errors::{GameError, GameResult};
use crate::models::position::Position;
use crate::models::zone::{ContentPolicy, Zone};

/// Reject galaxies with a side of zero or above `MAX_GALAXY_DIMENSION`.
/// Within that range `width * height` and every coordinate fit comfortably.
pub fn check_dimensions(width: usize, height: usize) -> GameResult<()> {
    let in_range = |d: usize| (1..=MAX_GALAXY_DIMENSION).contains(&d);
    if !in_range(width) || !in_range(height) {
        return Err(GameError::InvalidConfig(format!(
            "galaxy size {}x{} must be between 1 and {} per side",
            width, height, MAX_GALAXY_DIMENSION
        )));
    }
    Ok(())
}

/// Generate every zone of a `width` x `height` galaxy, row by row from the
/// southern edge. The returned vector is indexed `y * width + x`.
pub fn generate_zones<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    policy: &ContentPolicy,
    rng: &mut R,
) -> GameResult<Vec<Zone>> {
    check_dimensions(width, height)?;
    let content = policy.distribution()?;

    let mut zones = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let position = Position::new(x as i32, y as i32);
            zones.push(Zone::generate(position, &content, rng));
        }
    }
    Ok(zones)
}

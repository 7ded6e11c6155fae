use crate::body::Body;

/// Advance every body by one unit of time with explicit Euler integration.
///
/// Position moves with the velocity from before the update, then the velocity
/// picks up the acceleration.
pub fn step(bodies: &mut [Body]) {
    for body in bodies.iter_mut() {
        body.position += body.velocity;
        body.velocity += body.acceleration;
    }
}

use crate::{PhysicsError, Real, Result, Vector3};
use log::{trace, warn};
use serde::{Deserialize, Serialize};

/// A point mass advanced through time with semi-implicit Euler integration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub position: Vector3,
    pub velocity: Vector3,

    /// Held constant across a step. Callers update it between steps
    /// to model gravity or other external influences.
    pub acceleration: Vector3,

    /// The amount of damping applied to linear motion.
    /// Damping is required to remove energy added through
    /// numerical instability in the integrator.
    ///
    /// The damping parameter controls how much velocity is left after one
    /// second of simulation. A value of 1 means that the particle keeps all of
    /// its velocity, and smaller values bleed it off faster. If the particle
    /// should not look like it is experiencing drag, values slightly less than 1
    /// are optimal. A value of 0.999 might be perfect, for example.
    pub damping: Real,

    /// Holds the inverse of the mass of the particle.
    ///
    /// It is more useful to hold the inverse mass because
    /// integration is simpler, and because in real-time
    /// simulation it is more useful to have objects with
    /// infinite mass (immovable) than zero mass
    /// (completely unstable in numerical simulation).
    inverse_mass: Real,
}

impl Particle {
    /// Creates an immovable particle. Give it a mass with
    /// [`Particle::set_mass`] or [`Particle::with_mass`] to let it move.
    pub fn new(position: Vector3, velocity: Vector3, acceleration: Vector3, damping: Real) -> Self {
        Self {
            position,
            velocity,
            acceleration,
            damping,
            inverse_mass: 0.0,
        }
    }

    pub fn with_mass(mut self, mass: Real) -> Result<Self> {
        self.set_mass(mass)?;
        Ok(self)
    }

    pub fn position(&self) -> Vector3 {
        self.position
    }

    pub fn set_position(&mut self, x: Real, y: Real, z: Real) {
        self.position = Vector3::new(x, y, z);
    }

    pub fn velocity(&self) -> Vector3 {
        self.velocity
    }

    pub fn set_velocity(&mut self, x: Real, y: Real, z: Real) {
        self.velocity = Vector3::new(x, y, z);
    }

    pub fn acceleration(&self) -> Vector3 {
        self.acceleration
    }

    pub fn set_acceleration(&mut self, x: Real, y: Real, z: Real) {
        self.acceleration = Vector3::new(x, y, z);
    }

    pub fn damping(&self) -> Real {
        self.damping
    }

    pub fn set_damping(&mut self, damping: Real) {
        self.damping = damping;
    }

    /// Sets the mass, which must be strictly positive.
    pub fn set_mass(&mut self, mass: Real) -> Result<()> {
        if mass > 0.0 {
            self.inverse_mass = mass.recip();
            Ok(())
        } else {
            Err(PhysicsError::InvalidArgument(format!(
                "mass must be a positive, non-zero value, got: {}",
                mass
            )))
        }
    }

    /// Returns the mass, which is infinite for immovable particles.
    pub fn mass(&self) -> Real {
        if self.inverse_mass == 0.0 {
            Real::INFINITY
        } else {
            self.inverse_mass.recip()
        }
    }

    /// Stores the inverse mass as given. Zero makes the particle immovable.
    pub fn set_inverse_mass(&mut self, inverse_mass: Real) {
        if inverse_mass < 0.0 {
            warn!(
                "Negative inverse mass {} makes the particle immovable",
                inverse_mass
            );
        }
        self.inverse_mass = inverse_mass;
    }

    pub fn inverse_mass(&self) -> Real {
        self.inverse_mass
    }

    pub fn has_finite_mass(&self) -> bool {
        self.inverse_mass > 0.0
    }

    /// Integrates the particle forward in time by the given amount.
    ///
    /// Position advances with the velocity from before this step, then the
    /// velocity picks up the acceleration and is scaled by `damping^duration`,
    /// so that several short steps decay the velocity about as much as one
    /// long step of the same total length.
    ///
    /// Immovable particles are left untouched. A non-positive `duration`
    /// fails with [`PhysicsError::InvalidArgument`].
    pub fn integrate(&mut self, duration: Real) -> Result<()> {
        if self.inverse_mass <= 0.0 {
            return Ok(());
        }

        if duration <= 0.0 {
            return Err(PhysicsError::InvalidArgument(format!(
                "duration must be a positive, non-zero value, got: {}",
                duration
            )));
        }

        // Update linear position
        self.position
            .add_scaled_vector_assign(self.velocity, duration);

        // Update linear velocity from the acceleration
        self.velocity
            .add_scaled_vector_assign(self.acceleration, duration);

        // Impose drag
        let drag = self.damping.powf(duration);
        self.velocity
            .component_product_assign(Vector3::new(drag, drag, drag));

        trace!(
            "Integrated particle over {}s: position {:?}, velocity {:?}",
            duration,
            self.position,
            self.velocity
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: Real = 1e-12;

    fn particle() -> Particle {
        Particle::new(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(1.0, -1.0, 2.0),
            Vector3::new(0.0, 1.0, -1.0),
            0.999,
        )
    }

    #[test]
    fn accessors() {
        let mut particle = particle();

        particle.set_position(0.0, 0.0, -1.0);
        assert_eq!(particle.position(), Vector3::new(0.0, 0.0, -1.0));

        particle.set_velocity(0.0, 0.0, -1.0);
        assert_eq!(particle.velocity(), Vector3::new(0.0, 0.0, -1.0));

        particle.set_acceleration(0.0, 0.0, -1.0);
        assert_eq!(particle.acceleration(), Vector3::new(0.0, 0.0, -1.0));

        particle.set_damping(0.99);
        assert_eq!(particle.damping(), 0.99);
    }

    #[test]
    fn new_particles_are_immovable() {
        let particle = particle();
        assert_eq!(particle.inverse_mass(), 0.0);
        assert!(!particle.has_finite_mass());
        assert_eq!(particle.mass(), Real::INFINITY);
    }

    #[test]
    fn set_mass() -> Result<()> {
        let mut particle = particle();
        particle.set_mass(1.0)?;
        assert_eq!(particle.mass(), 1.0);

        particle.set_mass(3.0)?;
        assert!((particle.mass() - 3.0).abs() < EPSILON);
        assert!((particle.inverse_mass() - 1.0 / 3.0).abs() < EPSILON);
        assert!(particle.has_finite_mass());
        Ok(())
    }

    #[test]
    fn set_mass_rejects_non_positive_mass() -> Result<()> {
        let mut particle = particle().with_mass(2.0)?;
        for &mass in &[0.0, -1.0, -0.001] {
            let result = particle.set_mass(mass);
            assert!(matches!(result, Err(PhysicsError::InvalidArgument(_))));
        }
        assert_eq!(particle.mass(), 2.0);
        Ok(())
    }

    #[test]
    fn zero_inverse_mass_means_infinite_mass() -> Result<()> {
        let mut particle = particle().with_mass(1.0)?;
        particle.set_inverse_mass(0.0);
        assert_eq!(particle.inverse_mass(), 0.0);
        assert_eq!(particle.mass(), Real::INFINITY);
        Ok(())
    }

    #[test]
    fn set_inverse_mass_stores_the_value_as_given() {
        let mut particle = particle();
        particle.set_inverse_mass(0.25);
        assert_eq!(particle.inverse_mass(), 0.25);
        assert_eq!(particle.mass(), 4.0);

        particle.set_inverse_mass(-1.0);
        assert_eq!(particle.inverse_mass(), -1.0);
        assert!(!particle.has_finite_mass());
    }

    #[test]
    fn integrate() -> Result<()> {
        let mut particle = particle().with_mass(1.0)?;
        let duration = 2.0;
        let velocity_adjustment = 0.999_f64.powf(duration);

        particle.integrate(duration)?;

        assert_eq!(particle.position.x, 3.0);
        assert_eq!(particle.position.y, 0.0);
        assert_eq!(particle.position.z, 7.0);

        assert_eq!(particle.velocity.x, velocity_adjustment);
        assert_eq!(particle.velocity.y, velocity_adjustment);
        assert_eq!(particle.velocity.z, 0.0);
        Ok(())
    }

    #[test]
    fn integrate_uses_velocity_from_before_the_step() -> Result<()> {
        let mut particle = Particle::new(
            Vector3::zero(),
            Vector3::zero(),
            Vector3::new(0.0, -10.0, 0.0),
            1.0,
        )
        .with_mass(1.0)?;

        particle.integrate(0.5)?;
        assert_eq!(particle.position, Vector3::zero());
        assert_eq!(particle.velocity, Vector3::new(0.0, -5.0, 0.0));

        particle.integrate(0.5)?;
        assert_eq!(particle.position, Vector3::new(0.0, -2.5, 0.0));
        assert_eq!(particle.velocity, Vector3::new(0.0, -10.0, 0.0));
        Ok(())
    }

    #[test]
    fn integrate_is_a_no_op_for_immovable_particles() -> Result<()> {
        let mut particle = particle();
        let before = particle.clone();

        for &duration in &[2.0, 0.0, -1.0] {
            particle.integrate(duration)?;
            assert_eq!(particle, before);
        }

        particle.set_inverse_mass(-0.5);
        particle.integrate(1.0)?;
        assert_eq!(particle.position, before.position);
        assert_eq!(particle.velocity, before.velocity);
        Ok(())
    }

    #[test]
    fn integrate_rejects_non_positive_duration() -> Result<()> {
        let mut particle = particle().with_mass(1.0)?;
        let before = particle.clone();

        for &duration in &[0.0, -0.016] {
            let result = particle.integrate(duration);
            assert!(matches!(result, Err(PhysicsError::InvalidArgument(_))));
        }
        assert_eq!(particle, before);
        Ok(())
    }
}

//! Tuning constants shared by every physics operation of a simulator.

use crate::float::Float;

/// Gravity, spring stiffness and damping for one simulation.
///
/// Each [`Simulator`](crate::Simulator) holds its own copy, so independent
/// chains in the same process can run with different tuning.
///
/// # Builder Pattern
/// ```
/// use bonespring::SimConfig;
///
/// let config: SimConfig<f32> = SimConfig::new()
///     .with_gravity_scale(30.0)
///     .with_spring_scale(200.0)
///     .with_damping_scale(10.0);
/// assert_eq!(config.spring_scale, 200.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimConfig<F: Float> {
    /// Downward acceleration added to every massive joint. Default: 200.
    pub gravity_scale: F,
    /// Spring constant pulling a bone back to its rest length. Default: 600.
    pub spring_scale: F,
    /// Damping on relative joint velocity, for bones and joint corrections. Default: 50.
    pub damping_scale: F,
}

impl<F: Float> SimConfig<F> {
    /// Create a config with the default tuning.
    pub fn new() -> Self {
        SimConfig {
            gravity_scale: F::from_f32(200.0),
            spring_scale: F::from_f32(600.0),
            damping_scale: F::from_f32(50.0),
        }
    }

    /// Use `explicit` when given, the default tuning otherwise.
    pub fn init(explicit: Option<Self>) -> Self {
        explicit.unwrap_or_else(Self::new)
    }

    /// Set the gravity magnitude.
    pub fn with_gravity_scale(mut self, gravity_scale: F) -> Self {
        self.gravity_scale = gravity_scale;
        self
    }

    /// Set the spring stiffness.
    pub fn with_spring_scale(mut self, spring_scale: F) -> Self {
        self.spring_scale = spring_scale;
        self
    }

    /// Set the damping coefficient.
    pub fn with_damping_scale(mut self, damping_scale: F) -> Self {
        self.damping_scale = damping_scale;
        self
    }

    /// Same tuning with gravity switched off.
    pub fn weightless(self) -> Self {
        self.with_gravity_scale(F::zero())
    }
}

impl<F: Float> Default for SimConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

//! Step observer trait for watching the two phases of a simulation step.

/// Hooks called by [`Simulator::step_observed`](crate::Simulator::step_observed).
///
/// Implement this to trace or profile a step. All methods default to no-ops.
pub trait StepObserver {
    /// Called once the spring force of every bone has been computed.
    fn on_forces_computed(&mut self, _bone_count: usize) {}

    /// Called after one bone has been corrected and integrated.
    fn on_bone_integrated(&mut self, _index: usize) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer. Used by [`Simulator::step`](crate::Simulator::step).
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Forwards step progress to the `log` facade.
#[cfg(feature = "log")]
pub struct LogStepObserver {
    step: u64,
}

#[cfg(feature = "log")]
impl LogStepObserver {
    pub fn new() -> Self {
        LogStepObserver { step: 0 }
    }

    /// Number of completed steps seen so far.
    pub fn steps(&self) -> u64 {
        self.step
    }
}

#[cfg(feature = "log")]
impl Default for LogStepObserver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "log")]
impl StepObserver for LogStepObserver {
    fn on_forces_computed(&mut self, bone_count: usize) {
        log::trace!("step {}: spring forces computed for {} bones", self.step, bone_count);
    }

    fn on_bone_integrated(&mut self, index: usize) {
        log::trace!("step {}: bone {} integrated", self.step, index);
    }

    fn on_step_complete(&mut self) {
        log::debug!("step {} complete", self.step);
        self.step += 1;
    }
}

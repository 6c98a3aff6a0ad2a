//! Flat ground line with floor friction, applied after a step.

use crate::bone::{Bone, Joint};
use crate::config::SimConfig;
use crate::float::Float;

/// Horizontal floor at `height`. Since `y` grows downward, a joint is below
/// ground when its `y` is greater than `height`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ground<F: Float> {
    pub height: F,
    /// Floor friction coefficient, relative to gravity.
    pub friction: F,
}

impl<F: Float> Ground<F> {
    pub fn new(height: F, friction: F) -> Self {
        Ground { height, friction }
    }

    /// Put joints that sank below the ground back on it. Velocities are kept.
    pub fn clamp(&self, bone: &mut Bone<F>) {
        for joint in [&mut bone.joint1, &mut bone.joint2] {
            if joint.pos.y > self.height {
                joint.pos.y = self.height;
            }
        }
    }

    /// Slow down joints resting on the ground by `friction * gravity_scale * dt`
    /// of horizontal speed, stopping them instead of reversing direction.
    /// Anchors are skipped.
    pub fn apply_friction(&self, bone: &mut Bone<F>, dt: F, gravity_scale: F) {
        let decel = self.friction * gravity_scale * dt;
        for joint in [&mut bone.joint1, &mut bone.joint2] {
            if self.touches(joint) && !joint.is_anchor() {
                let vx = joint.velocity.x;
                joint.velocity.x = if vx.abs() > decel {
                    vx - decel * vx.signum_of()
                } else {
                    F::zero()
                };
            }
        }
    }

    /// Friction then clamping for every bone.
    pub fn apply(&self, bones: &mut [Bone<F>], dt: F, config: &SimConfig<F>) {
        for bone in bones.iter_mut() {
            self.apply_friction(bone, dt, config.gravity_scale);
            self.clamp(bone);
        }
    }

    fn touches(&self, joint: &Joint<F>) -> bool {
        joint.pos.y >= self.height
    }
}

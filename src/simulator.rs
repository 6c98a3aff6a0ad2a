//! Spring-damper stepping for chains of bones.

use crate::bone::{Bone, BoneId, JointForces};
use crate::config::SimConfig;
use crate::float::Float;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Advances a caller-owned slice of bones.
///
/// The simulator only holds its tuning; bones and their links live in the
/// slice handed to each call, and links are indices into that slice.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Simulator<F: Float> {
    config: SimConfig<F>,
}

impl<F: Float> Simulator<F> {
    pub fn new(config: SimConfig<F>) -> Self {
        Simulator { config }
    }

    pub fn config(&self) -> &SimConfig<F> {
        &self.config
    }

    /// Spring-damper force along the bone axis.
    ///
    /// Positive force (stretched or separating bone) pulls joint1 towards
    /// joint2 and joint2 the opposite way. With coincident joints the axis
    /// falls back to `atan2(0, 0)`, i.e. +x.
    pub fn spring_force(&self, bone: &Bone<F>) -> JointForces<F> {
        let delta = bone.joint2.pos - bone.joint1.pos;
        let angle = F::atan2(delta.y, delta.x);
        let axis = Vec2::new(angle.cos(), angle.sin());

        let rel_vel = (bone.joint2.velocity - bone.joint1.velocity).dot(axis);
        let spring = self.config.spring_scale * (delta.length() - bone.rest_length());
        let damping = self.config.damping_scale * rel_vel;

        let along = axis.scale(spring + damping);
        JointForces { joint1: along, joint2: -along }
    }

    /// Soft pull of `parent.joint2` and `child.joint1` towards each other,
    /// split evenly between both bones and scaled by `dt`.
    ///
    /// When the two joints coincide there is no direction and positions are
    /// left alone; the velocity damping still applies.
    ///
    /// # Panics
    /// If either index is outside `bones` or both name the same bone.
    pub fn joint_correction(&self, bones: &mut [Bone<F>], parent: BoneId, child: BoneId, dt: F) {
        let (p, c) = pair_mut(bones, parent.0, child.0);

        let error = c.joint1.pos - p.joint2.pos;
        let magnitude = error.length();
        let direction = error.normalize_or_zero();
        let correction = direction.scale((magnitude - c.rest_length()) * F::half() * dt);
        p.joint2.pos -= correction;
        c.joint1.pos += correction;

        let nudge = (c.joint1.velocity - p.joint2.velocity)
            .scale(self.config.damping_scale * F::half() * dt);
        p.joint2.velocity += nudge;
        c.joint1.velocity -= nudge;
    }

    /// Gravity on every joint with mass.
    pub fn apply_gravity(&self, bone: &mut Bone<F>, dt: F) {
        let dv = self.config.gravity_scale * dt;
        for joint in [&mut bone.joint1, &mut bone.joint2] {
            if !joint.is_anchor() {
                joint.velocity.y += dv;
            }
        }
    }

    /// Accelerate every joint with mass by its share of `forces`.
    pub fn apply_force(&self, bone: &mut Bone<F>, forces: JointForces<F>, dt: F) {
        let pairs = [(&mut bone.joint1, forces.joint1), (&mut bone.joint2, forces.joint2)];
        for (joint, force) in pairs {
            if !joint.is_anchor() {
                joint.velocity += force.scale(dt / joint.mass);
            }
        }
    }

    /// Move both joints by their velocity. Anchors move too if something
    /// gave them velocity.
    pub fn apply_velocity(&self, bone: &mut Bone<F>, dt: F) {
        bone.joint1.pos += bone.joint1.velocity.scale(dt);
        bone.joint2.pos += bone.joint2.velocity.scale(dt);
    }

    /// Gravity, then forces, then positions.
    pub fn integrate(&self, bone: &mut Bone<F>, forces: JointForces<F>, dt: F) {
        self.apply_gravity(bone, dt);
        self.apply_force(bone, forces, dt);
        self.apply_velocity(bone, dt);
    }

    /// Update a single bone on its own: fresh spring force, corrections
    /// against its parent and child, then integration.
    ///
    /// Neighbours are not integrated. For whole chains use [`step`](Self::step),
    /// which keeps every bone's force independent of the corrections made
    /// during the same step.
    pub fn update_bone(&self, bones: &mut [Bone<F>], index: BoneId, dt: F) {
        let forces = self.spring_force(&bones[index.0]);
        self.correct_links(bones, index, dt);
        self.integrate(&mut bones[index.0], forces, dt);
    }

    /// Advance every bone by `dt` seconds.
    pub fn step(&self, bones: &mut [Bone<F>], dt: F) {
        self.step_observed(bones, dt, &mut NoOpStepObserver);
    }

    /// [`step`](Self::step) with progress reported to `observer`.
    ///
    /// All spring forces are computed before any bone moves. Bones are then
    /// corrected and integrated one at a time, in slice order.
    pub fn step_observed<O: StepObserver>(&self, bones: &mut [Bone<F>], dt: F, observer: &mut O) {
        let forces: AllocVec<JointForces<F>> =
            bones.iter().map(|b| self.spring_force(b)).collect();
        observer.on_forces_computed(bones.len());

        for (index, f) in forces.into_iter().enumerate() {
            self.correct_links(bones, BoneId(index), dt);
            self.integrate(&mut bones[index], f, dt);
            observer.on_bone_integrated(index);
        }

        observer.on_step_complete();
    }

    /// Joint corrections of one bone against its parent, then its child.
    pub fn correct_links(&self, bones: &mut [Bone<F>], index: BoneId, dt: F) {
        if let Some(parent) = bones[index.0].parent() {
            self.joint_correction(bones, parent, index, dt);
        }
        if let Some(child) = bones[index.0].child() {
            self.joint_correction(bones, index, child, dt);
        }
    }
}

impl<F: Float> Default for Simulator<F> {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    assert_ne!(a, b, "bone {} linked to itself", a);
    if a < b {
        let (head, tail) = items.split_at_mut(b);
        (&mut head[a], &mut tail[0])
    } else {
        let (head, tail) = items.split_at_mut(a);
        (&mut tail[0], &mut head[b])
    }
}

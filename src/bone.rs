//! Bones, their joints, and the parent/child wiring between them.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::{distance, Vec2};
use alloc::vec::Vec as AllocVec;

/// Index of a bone inside the caller-owned bone slice.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoneId(pub usize);

/// One endpoint of a bone.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Joint<F: Float> {
    pub pos: Vec2<F>,
    pub velocity: Vec2<F>,
    /// Mass of exactly 0 marks an anchor: gravity and spring forces never
    /// change its velocity.
    pub mass: F,
}

impl<F: Float> Joint<F> {
    pub fn new(pos: Vec2<F>, mass: F) -> Self {
        Joint { pos, velocity: Vec2::zero(), mass }
    }

    pub fn is_anchor(&self) -> bool {
        self.mass == F::zero()
    }
}

/// Forces acting on both joints of a bone for the current step.
///
/// Recomputed from scratch every step and never stored on the bone.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct JointForces<F: Float> {
    pub joint1: Vec2<F>,
    pub joint2: Vec2<F>,
}

/// A line segment with a mass at each end, held at its rest length by a
/// spring-damper.
#[derive(Clone, Debug, PartialEq)]
pub struct Bone<F: Float> {
    pub joint1: Joint<F>,
    pub joint2: Joint<F>,
    length: F,
    parent: Option<BoneId>,
    child: Option<BoneId>,
}

impl<F: Float> Bone<F> {
    /// Bone between two explicit positions. The rest length is measured here
    /// and never recomputed, except by [`connect`].
    pub fn new(joint1_pos: Vec2<F>, joint2_pos: Vec2<F>, joint1_mass: F, joint2_mass: F) -> Self {
        Bone {
            joint1: Joint::new(joint1_pos, joint1_mass),
            joint2: Joint::new(joint2_pos, joint2_mass),
            length: distance(joint1_pos, joint2_pos),
            parent: None,
            child: None,
        }
    }

    /// Bone that only knows where its far end is. Its joint1 and rest length
    /// are filled in when it is connected under a parent; until then it is
    /// degenerate (zero length).
    pub fn trailing(joint2_pos: Vec2<F>, joint1_mass: F, joint2_mass: F) -> Self {
        Self::new(joint2_pos, joint2_pos, joint1_mass, joint2_mass)
    }

    /// Set initial joint velocities.
    pub fn with_velocities(mut self, joint1: Vec2<F>, joint2: Vec2<F>) -> Self {
        self.joint1.velocity = joint1;
        self.joint2.velocity = joint2;
        self
    }

    /// Natural length of the spring.
    pub fn rest_length(&self) -> F {
        self.length
    }

    /// Current distance between the two joints.
    pub fn current_length(&self) -> F {
        distance(self.joint1.pos, self.joint2.pos)
    }

    /// Bone whose joint2 this bone's joint1 follows.
    pub fn parent(&self) -> Option<BoneId> {
        self.parent
    }

    /// Bone whose joint1 follows this bone's joint2.
    pub fn child(&self) -> Option<BoneId> {
        self.child
    }
}

/// Hang `child` under `parent`: the child's joint1 snaps onto the parent's
/// joint2 and the child's rest length is re-measured from there.
///
/// Connecting an already connected child re-parents it; the newest call
/// wins and the stale links left on the old parent, or on a child the new
/// parent held before, are cleared. Self links and cycles are rejected.
pub fn connect<F: Float>(
    bones: &mut [Bone<F>],
    parent: BoneId,
    child: BoneId,
) -> Result<(), PhysicsError> {
    let count = bones.len();
    for id in [parent, child] {
        if id.0 >= count {
            return Err(PhysicsError::BoneOutOfBounds { index: id.0, count });
        }
    }
    if parent == child {
        return Err(PhysicsError::SelfLink { index: child.0 });
    }

    let mut cursor = bones[parent.0].parent;
    let mut hops = 0;
    while let Some(ancestor) = cursor {
        if ancestor == child {
            return Err(PhysicsError::CycleDetected { parent: parent.0, child: child.0 });
        }
        hops += 1;
        if hops > count {
            break;
        }
        cursor = bones.get(ancestor.0).and_then(|b| b.parent);
    }

    if let Some(old) = bones[child.0].parent.filter(|&old| old != parent) {
        if let Some(old_parent) = bones.get_mut(old.0) {
            if old_parent.child == Some(child) {
                old_parent.child = None;
            }
        }
    }
    if let Some(displaced) = bones[parent.0].child.filter(|&c| c != child) {
        if let Some(displaced) = bones.get_mut(displaced.0) {
            if displaced.parent == Some(parent) {
                displaced.parent = None;
            }
        }
    }

    link(bones, parent, child);
    Ok(())
}

fn link<F: Float>(bones: &mut [Bone<F>], parent: BoneId, child: BoneId) {
    let anchor = bones[parent.0].joint2.pos;
    let c = &mut bones[child.0];
    c.parent = Some(parent);
    c.joint1.pos = anchor;
    c.length = distance(c.joint1.pos, c.joint2.pos);
    bones[parent.0].child = Some(child);
}

/// Build a connected chain of bones through `points`, one bone per
/// consecutive pair, every joint carrying `joint_mass`.
///
/// Fewer than two points yields an empty chain. Anchor a joint afterwards by
/// setting its mass to zero.
pub fn chain<F: Float>(points: &[Vec2<F>], joint_mass: F) -> AllocVec<Bone<F>> {
    let mut bones: AllocVec<Bone<F>> = points
        .windows(2)
        .map(|pair| Bone::new(pair[0], pair[1], joint_mass, joint_mass))
        .collect();
    for i in 1..bones.len() {
        link(&mut bones, BoneId(i - 1), BoneId(i));
    }
    bones
}

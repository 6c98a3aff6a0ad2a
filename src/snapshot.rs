//! Read-out of bone positions for renderers.

use crate::bone::{Bone, Joint};
use crate::float::Float;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Marker radius per unit of joint mass.
const RADIUS_PER_MASS: f32 = 3.0;
/// Fixed marker radius for anchors.
const ANCHOR_RADIUS: f32 = 3.0;

/// What a renderer needs to draw one bone: a line between the joints and a
/// circle at each end.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoneSegment<F: Float> {
    pub joint1: Vec2<F>,
    pub joint2: Vec2<F>,
    pub joint1_radius: F,
    pub joint2_radius: F,
}

impl<F: Float> BoneSegment<F> {
    pub fn of(bone: &Bone<F>) -> Self {
        BoneSegment {
            joint1: bone.joint1.pos,
            joint2: bone.joint2.pos,
            joint1_radius: marker_radius(&bone.joint1),
            joint2_radius: marker_radius(&bone.joint2),
        }
    }
}

/// Circle radius for a joint: `3 * mass` truncated to whole pixels.
///
/// Anchors, and any joint light enough to truncate to 0 (mass below 1/3),
/// get the fixed anchor marker instead.
pub fn marker_radius<F: Float>(joint: &Joint<F>) -> F {
    let radius = (F::from_f32(RADIUS_PER_MASS) * joint.mass).trunc();
    if radius == F::zero() {
        F::from_f32(ANCHOR_RADIUS)
    } else {
        radius
    }
}

/// One segment per bone, in slice order.
pub fn segments<F: Float>(bones: &[Bone<F>]) -> impl Iterator<Item = BoneSegment<F>> + '_ {
    bones.iter().map(BoneSegment::of)
}

/// Flat `[x1, y1, x2, y2, ...]` joint positions, four values per bone.
pub fn flat_positions<F: Float>(bones: &[Bone<F>]) -> AllocVec<F> {
    let mut out = AllocVec::with_capacity(bones.len() * 4);
    for bone in bones {
        out.push(bone.joint1.pos.x);
        out.push(bone.joint1.pos.y);
        out.push(bone.joint2.pos.x);
        out.push(bone.joint2.pos.y);
    }
    out
}

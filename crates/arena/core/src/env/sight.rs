use bitflags::bitflags;

use crate::math::Vec3;
use crate::state::Transform;

bitflags! {
    /// Physics layers a sight query is allowed to be blocked by.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct LayerMask: u8 {
        const WALLS    = 1 << 0;
        const PROPS    = 1 << 1;
        const ENTITIES = 1 << 2;
        const PICKUPS  = 1 << 3;

        /// Static geometry that occludes line of sight.
        const OBSTACLES = Self::WALLS.bits() | Self::PROPS.bits();
    }
}

/// Occlusion, field-of-view and range test seen from an eye transform.
pub trait SightOracle {
    /// True if an object at `target` is inside the eye's view cone and range
    /// and nothing on `mask` blocks the line between them.
    fn can_see_object(&self, eye: &Transform, target: &Transform, mask: LayerMask) -> bool;

    /// Same test for a bare point.
    fn can_see_position(&self, eye: &Transform, position: Vec3, mask: LayerMask) -> bool;

    /// Angle in degrees between the eye's facing and the direction to `position`.
    fn angle_to(&self, eye: &Transform, position: Vec3) -> f32 {
        eye.forward.angle_between(position - eye.position)
    }
}

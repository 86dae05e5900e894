use crate::drop_filter::AcceptancePolicy;

/// Extensions accepted out of the box.
pub(super) const DEFAULT_EXTENSIONS: [&str; 2] = ["csv", "xlsx"];

pub(super) fn default_policy() -> AcceptancePolicy {
    AcceptancePolicy::new(DEFAULT_EXTENSIONS)
}

/// Mid grey at half opacity.
pub(super) fn default_tint() -> [u8; 4] {
    [128, 128, 128, 128]
}

pub(super) fn default_corner_radius() -> f32 {
    10.0
}

pub(super) fn clamp_corner_radius(radius: f32) -> f32 {
    if radius.is_finite() {
        radius.clamp(0.0, 64.0)
    } else {
        default_corner_radius()
    }
}

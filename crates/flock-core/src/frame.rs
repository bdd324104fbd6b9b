//! Spatial frame: position plus an orthonormal forward/right/up basis.
//!
//! The steering engine writes a new forward vector every tick (from the
//! integrated velocity) and then re-derives right/up with [`Frame::orthogonalize`].
//! Without that step the basis drifts away from orthonormal over many ticks,
//! so orthogonalization is a per-tick invariant, not an optimization.

use glam::Vec3;

/// Position + orientation basis for one agent.
///
/// Right-handed: with the default basis, `right = cross(up, forward)` gives
/// `+X = cross(+Y, +Z)`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub position: Vec3,
    pub forward:  Vec3,
    pub right:    Vec3,
    pub up:       Vec3,
}

impl Frame {
    /// Create a frame at `position` with the canonical basis
    /// (forward +Z, up +Y, right +X).
    #[inline]
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            forward: Vec3::Z,
            right:   Vec3::X,
            up:      Vec3::Y,
        }
    }

    /// Re-derive right/up from the current forward via Gram–Schmidt.
    ///
    /// `up' = normalize(up - forward * dot(forward, up))`, falling back to
    /// world +Y when degenerate (forward parallel to up);
    /// `right' = normalize(cross(up', forward))`, falling back to world +X.
    /// Forward itself is left untouched.
    pub fn orthogonalize(&mut self) {
        let fwd_up_dot = self.forward.dot(self.up);

        let real_up = self.up - self.forward * fwd_up_dot;
        self.up = real_up.try_normalize().unwrap_or(Vec3::Y);

        let real_right = self.up.cross(self.forward);
        self.right = real_right.try_normalize().unwrap_or(Vec3::X);
    }
}

impl Default for Frame {
    fn default() -> Self {
        Frame::at(Vec3::ZERO)
    }
}

// ── Vector helpers ────────────────────────────────────────────────────────────

/// `normalize(v)` if `|v| > 0`, else the zero vector.
///
/// The explicit zero-length guard keeps degenerate geometry (target == pos,
/// empty accumulators) from propagating NaN.
#[inline]
pub fn normalize_or_zero(v: Vec3) -> Vec3 {
    v.try_normalize().unwrap_or(Vec3::ZERO)
}

/// Clamp `|v|` into `[min, max]`.  The zero vector is returned unchanged —
/// there is no direction to scale along.
#[inline]
pub fn clamp_magnitude(v: Vec3, min: f32, max: f32) -> Vec3 {
    let len = v.length();
    if len <= f32::EPSILON {
        return v;
    }
    if len > max {
        v * (max / len)
    } else if len < min {
        v * (min / len)
    } else {
        v
    }
}

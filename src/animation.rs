//! Looping easing tracks and per-group pose sampling.
//!
//! Every animation in the graphic is the same shape: three keyframe values
//! `[a, b, a]` swept over a fixed period with ease-in-out timing, repeated
//! forever. The host render loop owns time; it passes an elapsed-seconds
//! value into [`Track::value_at`] (or the higher-level pose samplers on the
//! scene types) each frame and applies the results. Nothing here schedules,
//! blocks, or retains state between samples.

use bezier_rs::{Bezier, TValue};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Timing curve applied to each half-cycle of a [`Track`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Ease {
    Linear,
    /// The CSS `ease-in-out` cubic Bézier (0.42, 0, 0.58, 1).
    #[default]
    InOut,
}

impl Ease {
    /// Maps a normalized progress `t` in `0.0..=1.0` onto the curve.
    ///
    /// `InOut` evaluates the Bézier parametrically and reads the y
    /// component, which keeps both endpoints and the midpoint exact.
    pub fn sample(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::InOut => {
                let curve =
                    Bezier::from_cubic_coordinates(0.0, 0.0, 0.42, 0.0, 0.58, 1.0, 1.0, 1.0);
                curve.evaluate(TValue::Parametric(t as f64)).y as f32
            }
        }
    }
}

/// The scalar property a [`Track`] drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    /// Group opacity, multiplied down the parent chain.
    Opacity,
    /// Uniform scale about the group pivot.
    Scale,
    /// Rotation about the group pivot, in degrees.
    RotationDegrees,
    /// Vertical offset in design units (y-down).
    OffsetY,
    /// Glow blur radius in pixels. Only used by [`GlowEffect`](crate::scene::GlowEffect).
    GlowBlur,
    /// Glow halo alpha. Only used by [`GlowEffect`](crate::scene::GlowEffect).
    GlowAlpha,
}

/// An infinitely repeating `a → b → a` keyframe loop.
///
/// The loop has no start or stop triggers: sampling wraps the supplied time
/// by `period_secs`, eases `keys[0] → keys[1]` over the first half-cycle and
/// `keys[1] → keys[2]` over the second. With `keys[2] == keys[0]` (every
/// track this crate builds) the loop wraps seamlessly.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub channel: Channel,
    pub keys: [f32; 3],
    /// Full cycle duration in seconds. Non-positive values freeze the track
    /// at `keys[0]` (a degenerate render, not an error).
    pub period_secs: f32,
    pub ease: Ease,
}

impl Track {
    pub fn new(channel: Channel, keys: [f32; 3], period_secs: f32) -> Self {
        Self {
            channel,
            keys,
            period_secs,
            ease: Ease::InOut,
        }
    }

    /// Samples the track at `time_secs` seconds since the host mounted the
    /// graphic.
    pub fn value_at(&self, time_secs: f32) -> f32 {
        if self.period_secs <= 0.0 {
            return self.keys[0];
        }
        let phase = (time_secs / self.period_secs).rem_euclid(1.0);
        let (from, to, local) = if phase < 0.5 {
            (self.keys[0], self.keys[1], phase * 2.0)
        } else {
            (self.keys[1], self.keys[2], (phase - 0.5) * 2.0)
        };
        from + (to - from) * self.ease.sample(local)
    }
}

/// The resolved transform/opacity bag for one group at one instant.
///
/// Hosts apply it as: translate by `offset`, then rotate/scale about
/// `pivot` (design space), then multiply opacity into the group's paint.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupPose {
    pub offset: Vec2,
    pub rotation_deg: f32,
    pub scale: f32,
    pub opacity: f32,
    pub pivot: Vec2,
}

impl GroupPose {
    /// The rest pose: identity transform, fully opaque.
    pub fn rest(pivot: Vec2) -> Self {
        Self {
            offset: Vec2::ZERO,
            rotation_deg: 0.0,
            scale: 1.0,
            opacity: 1.0,
            pivot,
        }
    }

    /// Rotation in radians, for hosts that compose `glam` transforms.
    pub fn rotation_radians(&self) -> f32 {
        self.rotation_deg.to_radians()
    }

    /// Folds one sampled track value into the pose.
    ///
    /// Glow channels never appear on groups and are ignored here.
    pub(crate) fn apply(&mut self, channel: Channel, value: f32) {
        match channel {
            Channel::Opacity => self.opacity = value,
            Channel::Scale => self.scale = value,
            Channel::RotationDegrees => self.rotation_deg = value,
            Channel::OffsetY => self.offset.y = value,
            Channel::GlowBlur | Channel::GlowAlpha => {}
        }
    }
}

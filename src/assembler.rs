//! Assembles a [`RobotGraphic`] from a [`GraphicConfig`].
//!
//! The entry point is [`GraphicAssembler`]. Construct it with a
//! [`GraphicConfig`] (or `Default`) and call
//! [`assemble`](GraphicAssembler::assemble) once; the result is read-only
//! scene data the host samples per frame.
//!
//! All geometry is authored on a fixed 200×300 design grid (y-down) and
//! lives in this module as constants, so the scene layer stays free of
//! robot-specific numbers.

use crate::animation::{Channel, Track};
use crate::color::Rgba;
use crate::scene::{
    GlowEffect, GroupKind, Placement, RobotGraphic, ShapeGroup, ShapePrimitive, StyledShape,
};
use glam::Vec2;

/// Fraction of `size` the footprint spans horizontally.
pub const FOOTPRINT_WIDTH_RATIO: f32 = 0.18;
/// Fraction of `size` the footprint spans vertically.
pub const FOOTPRINT_HEIGHT_RATIO: f32 = 0.25;

/// Period of the glow blur/alpha loop, as a ratio of `animation_speed`.
pub const GLOW_PERIOD_RATIO: f32 = 1.2;
/// Period of the whole-body opacity breathing loop.
pub const BREATH_PERIOD_RATIO: f32 = 1.0;
/// Period of the left/right leg swing loops.
pub const LEG_PERIOD_RATIO: f32 = 1.0;
/// Period of the eye ring scale pulse.
pub const EYE_RING_PERIOD_RATIO: f32 = 0.8;
/// Period of the center leg vertical bob.
pub const CENTER_LEG_PERIOD_RATIO: f32 = 0.8;
/// Period of the eye dot opacity pulse.
pub const EYE_DOT_PERIOD_RATIO: f32 = 0.6;

/// Leg swing amplitude about the hip, in degrees.
const LEG_SWING_DEG: f32 = 6.0;
/// Center leg bob amplitude, in design units.
const CENTER_BOB: f32 = 3.0;

const BODY_STROKE: f32 = 2.5;
const GUIDE_STROKE: f32 = 1.0;
const GUIDE_OPACITY: f32 = 0.6;
const JOINT_STROKE: f32 = 2.0;
const FOOT_STROKE: f32 = 2.0;

/// Configuration for one graphic build. Immutable per render instance.
///
/// No field is validated: zero or negative values yield a degenerate
/// (zero-size or frozen) description rather than an error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphicConfig {
    /// Overall bounding footprint scale in pixels. The rendered overlay is
    /// `0.18 × size` wide and `0.25 × size` tall.
    pub size: f32,
    /// Uniform stroke/fill/glow color.
    pub color: Rgba,
    /// Base loop period in seconds. Each animation derives its own period
    /// as a fixed ratio of this value.
    pub animation_speed: f32,
}

impl Default for GraphicConfig {
    fn default() -> Self {
        Self {
            size: 800.0,
            color: Rgba::GREEN,
            animation_speed: 2.0,
        }
    }
}

/// Builds the robot scene description from a configuration.
pub struct GraphicAssembler {
    config: GraphicConfig,
}

impl GraphicAssembler {
    pub fn new(config: GraphicConfig) -> Self {
        Self { config }
    }

    /// Produces the complete graphic: placement metadata, glow effect, and
    /// the six animated groups in paint order (chassis first, so legs and
    /// eye draw over the torso guide lines).
    pub fn assemble(&self) -> RobotGraphic {
        let speed = self.config.animation_speed;
        RobotGraphic {
            placement: Placement {
                right_px: 20.0,
                bottom_px: 60.0,
                width_px: self.config.size * FOOTPRINT_WIDTH_RATIO,
                height_px: self.config.size * FOOTPRINT_HEIGHT_RATIO,
                z_index: 50,
                pointer_events: false,
            },
            design_size: Vec2::new(200.0, 300.0),
            color: self.config.color,
            glow: GlowEffect {
                color: self.config.color,
                blur: Track::new(
                    Channel::GlowBlur,
                    [10.0, 20.0, 10.0],
                    speed * GLOW_PERIOD_RATIO,
                ),
                alpha: Track::new(
                    Channel::GlowAlpha,
                    [0.6, 0.9, 0.6],
                    speed * GLOW_PERIOD_RATIO,
                ),
            },
            groups: vec![
                self.chassis(),
                self.eye_ring(),
                self.eye_dot(),
                self.left_leg(),
                self.right_leg(),
                self.center_leg(),
            ],
        }
    }

    /// Torso outline plus internal guide lines. Carries the whole-body
    /// breathing loop every other group inherits through the parent chain.
    fn chassis(&self) -> ShapeGroup {
        let mut shapes = vec![StyledShape::stroked(
            ShapePrimitive::RoundedRect {
                center: Vec2::new(100.0, 110.0),
                half_size: Vec2::new(20.0, 60.0),
                corner_radius: 10.0,
            },
            BODY_STROKE,
        )];
        // Horizontal segmentation lines across the torso.
        for y in [70.0, 90.0, 110.0, 130.0, 150.0] {
            shapes.push(
                StyledShape::stroked(
                    ShapePrimitive::Line {
                        start: Vec2::new(80.0, y),
                        end: Vec2::new(120.0, y),
                    },
                    GUIDE_STROKE,
                )
                .with_opacity(GUIDE_OPACITY),
            );
        }
        // Vertical divisions, full torso height.
        for x in [90.0, 100.0, 110.0] {
            shapes.push(
                StyledShape::stroked(
                    ShapePrimitive::Line {
                        start: Vec2::new(x, 50.0),
                        end: Vec2::new(x, 170.0),
                    },
                    GUIDE_STROKE,
                )
                .with_opacity(GUIDE_OPACITY),
            );
        }
        ShapeGroup {
            kind: GroupKind::Chassis,
            parent: None,
            pivot: Vec2::ZERO,
            shapes,
            tracks: vec![Track::new(
                Channel::Opacity,
                [0.7, 1.0, 0.7],
                self.config.animation_speed * BREATH_PERIOD_RATIO,
            )],
        }
    }

    fn eye_ring(&self) -> ShapeGroup {
        let center = Vec2::new(100.0, 85.0);
        ShapeGroup {
            kind: GroupKind::EyeRing,
            parent: Some(GroupKind::Chassis),
            pivot: center,
            shapes: vec![StyledShape::stroked(
                ShapePrimitive::Circle {
                    center,
                    radius: 8.0,
                },
                JOINT_STROKE,
            )],
            tracks: vec![Track::new(
                Channel::Scale,
                [1.0, 1.1, 1.0],
                self.config.animation_speed * EYE_RING_PERIOD_RATIO,
            )],
        }
    }

    fn eye_dot(&self) -> ShapeGroup {
        let center = Vec2::new(100.0, 85.0);
        ShapeGroup {
            kind: GroupKind::EyeDot,
            parent: Some(GroupKind::Chassis),
            pivot: center,
            shapes: vec![StyledShape::filled(ShapePrimitive::Circle {
                center,
                radius: 3.0,
            })],
            tracks: vec![Track::new(
                Channel::Opacity,
                [0.3, 1.0, 0.3],
                self.config.animation_speed * EYE_DOT_PERIOD_RATIO,
            )],
        }
    }

    fn left_leg(&self) -> ShapeGroup {
        self.side_leg(GroupKind::LeftLeg, -1.0)
    }

    fn right_leg(&self) -> ShapeGroup {
        self.side_leg(GroupKind::RightLeg, 1.0)
    }

    /// One articulated side leg. `side` is −1 for left, +1 for right; the
    /// geometry mirrors about the torso centerline x = 100 and the swing
    /// track starts at the opposite extreme, so the two legs stay
    /// phase-inverted at every sampled time.
    fn side_leg(&self, kind: GroupKind, side: f32) -> ShapeGroup {
        let x = |offset: f32| 100.0 + side * offset;
        let hip = Vec2::new(x(20.0), 170.0);
        let knee = Vec2::new(x(45.0), 210.0);
        let ankle = Vec2::new(x(55.0), 250.0);
        let shapes = vec![
            StyledShape::stroked(
                ShapePrimitive::Line {
                    start: hip,
                    end: knee,
                },
                BODY_STROKE,
            ),
            StyledShape::stroked(
                ShapePrimitive::Circle {
                    center: knee,
                    radius: 5.0,
                },
                JOINT_STROKE,
            ),
            StyledShape::stroked(
                ShapePrimitive::Line {
                    start: knee,
                    end: ankle,
                },
                BODY_STROKE,
            ),
            StyledShape::stroked(
                ShapePrimitive::Triangle {
                    vertices: [
                        Vec2::new(x(65.0), 250.0),
                        Vec2::new(x(45.0), 250.0),
                        Vec2::new(x(50.0), 255.0),
                    ],
                },
                FOOT_STROKE,
            ),
        ];
        ShapeGroup {
            kind,
            parent: Some(GroupKind::Chassis),
            pivot: hip,
            shapes,
            tracks: vec![Track::new(
                Channel::RotationDegrees,
                [
                    side * LEG_SWING_DEG,
                    -side * LEG_SWING_DEG,
                    side * LEG_SWING_DEG,
                ],
                self.config.animation_speed * LEG_PERIOD_RATIO,
            )],
        }
    }

    /// Straight stabilizer limb with an elliptical foot pad, bobbing
    /// vertically instead of swinging.
    fn center_leg(&self) -> ShapeGroup {
        ShapeGroup {
            kind: GroupKind::CenterLeg,
            parent: Some(GroupKind::Chassis),
            pivot: Vec2::new(100.0, 170.0),
            shapes: vec![
                StyledShape::stroked(
                    ShapePrimitive::Line {
                        start: Vec2::new(100.0, 170.0),
                        end: Vec2::new(100.0, 240.0),
                    },
                    BODY_STROKE,
                ),
                StyledShape::stroked(
                    ShapePrimitive::Ellipse {
                        center: Vec2::new(100.0, 245.0),
                        half_size: Vec2::new(8.0, 3.0),
                    },
                    BODY_STROKE,
                ),
            ],
            tracks: vec![Track::new(
                Channel::OffsetY,
                [-CENTER_BOB, CENTER_BOB, -CENTER_BOB],
                self.config.animation_speed * CENTER_LEG_PERIOD_RATIO,
            )],
        }
    }
}

impl RobotGraphic {
    /// Convenience: assemble directly from a configuration.
    pub fn from_config(config: GraphicConfig) -> Self {
        GraphicAssembler::new(config).assemble()
    }
}

use crate::animation::{Channel, GroupPose, Track};
use crate::color::Rgba;
use bevy_math::Isometry2d;
use bevy_math::bounding::{Aabb2d, Bounded2d, BoundingCircle, BoundingVolume};
use bevy_math::primitives::{Circle, Ellipse, Rectangle, Segment2d, Triangle2d};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Identifies one of the six animated groups of the graphic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupKind {
    /// Torso outline, guide lines, and parent of every other group.
    /// Carries the whole-body opacity breathing loop.
    Chassis,
    /// Outer sensor ring, pulsing scale about its center.
    EyeRing,
    /// Inner sensor dot, pulsing opacity.
    EyeDot,
    /// Articulated left leg, swinging about its hip attachment.
    LeftLeg,
    /// Articulated right leg, phase-inverted against the left.
    RightLeg,
    /// Center stabilizer leg, bobbing vertically.
    CenterLeg,
}

/// A positioned 2D vector primitive on the design grid (y-down).
///
/// Fields are plain `Vec2`/`f32` so the whole scene serializes; use
/// [`to_bevy_primitive`](Self::to_bevy_primitive) to reach `bevy_math`
/// geometry for spatial queries.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ShapePrimitive {
    /// An axis-aligned rectangle with rounded corners, centered at `center`.
    RoundedRect {
        center: Vec2,
        half_size: Vec2,
        corner_radius: f32,
    },
    /// A straight stroke between two design-space points.
    Line { start: Vec2, end: Vec2 },
    Circle { center: Vec2, radius: f32 },
    Ellipse { center: Vec2, half_size: Vec2 },
    /// A triangle given by absolute design-space vertices.
    Triangle { vertices: [Vec2; 3] },
}

/// A type-erased wrapper so we can call [`Bounded2d`] on any variant.
#[derive(Clone, Copy, Debug)]
pub enum BevyPrimitive {
    Rectangle(Rectangle),
    Segment(Segment2d),
    Circle(Circle),
    Ellipse(Ellipse),
    Triangle(Triangle2d),
}

impl Bounded2d for BevyPrimitive {
    fn aabb_2d(&self, isometry: impl Into<Isometry2d>) -> Aabb2d {
        match self {
            Self::Rectangle(s) => s.aabb_2d(isometry),
            Self::Segment(s) => s.aabb_2d(isometry),
            Self::Circle(s) => s.aabb_2d(isometry),
            Self::Ellipse(s) => s.aabb_2d(isometry),
            Self::Triangle(s) => s.aabb_2d(isometry),
        }
    }

    fn bounding_circle(&self, isometry: impl Into<Isometry2d>) -> BoundingCircle {
        match self {
            Self::Rectangle(s) => s.bounding_circle(isometry),
            Self::Segment(s) => s.bounding_circle(isometry),
            Self::Circle(s) => s.bounding_circle(isometry),
            Self::Ellipse(s) => s.bounding_circle(isometry),
            Self::Triangle(s) => s.bounding_circle(isometry),
        }
    }
}

impl ShapePrimitive {
    /// Converts to the corresponding origin-centered `bevy_math` primitive
    /// plus the design-space translation that positions it.
    ///
    /// The rounded-rect corner radius is dropped here; it only affects the
    /// stroke path, not the bounds.
    pub fn to_bevy_primitive(self) -> (BevyPrimitive, Vec2) {
        match self {
            Self::RoundedRect {
                center, half_size, ..
            } => (BevyPrimitive::Rectangle(Rectangle { half_size }), center),
            Self::Line { start, end } => {
                (BevyPrimitive::Segment(Segment2d::new(start, end)), Vec2::ZERO)
            }
            Self::Circle { center, radius } => {
                (BevyPrimitive::Circle(Circle::new(radius)), center)
            }
            Self::Ellipse { center, half_size } => {
                (BevyPrimitive::Ellipse(Ellipse { half_size }), center)
            }
            Self::Triangle { vertices } => (
                BevyPrimitive::Triangle(Triangle2d::new(
                    vertices[0],
                    vertices[1],
                    vertices[2],
                )),
                Vec2::ZERO,
            ),
        }
    }

    /// Rest-pose axis-aligned bounds in design space.
    pub fn aabb(&self) -> Aabb2d {
        let (primitive, translation) = self.to_bevy_primitive();
        primitive.aabb_2d(Isometry2d::from_translation(translation))
    }
}

/// How a shape is painted. Every paint uses the graphic's single color.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PaintStyle {
    /// Outline only, no fill.
    Stroke { width: f32 },
    /// Solid fill, no outline.
    Fill,
}

/// One drawable primitive with its paint and static opacity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StyledShape {
    pub primitive: ShapePrimitive,
    pub paint: PaintStyle,
    /// Static per-shape opacity (guide lines sit at 0.6), multiplied with
    /// the sampled group opacity by the host.
    pub opacity: f32,
}

impl StyledShape {
    pub fn stroked(primitive: ShapePrimitive, width: f32) -> Self {
        Self {
            primitive,
            paint: PaintStyle::Stroke { width },
            opacity: 1.0,
        }
    }

    pub fn filled(primitive: ShapePrimitive) -> Self {
        Self {
            primitive,
            paint: PaintStyle::Fill,
            opacity: 1.0,
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

/// An independently transformable scene-graph node: a bag of shapes sharing
/// a pivot and a set of looping tracks.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShapeGroup {
    pub kind: GroupKind,
    /// Parent group in the nesting hierarchy. Opacity multiplies down this
    /// chain; transforms do not (each group animates independently).
    pub parent: Option<GroupKind>,
    /// Design-space point rotation and scale are applied about.
    pub pivot: Vec2,
    pub shapes: Vec<StyledShape>,
    pub tracks: Vec<Track>,
}

impl ShapeGroup {
    /// Samples every track and folds the values into a [`GroupPose`].
    ///
    /// Channels without a track stay at their rest value, so an
    /// opacity-only group still yields a usable identity transform.
    pub fn pose_at(&self, time_secs: f32) -> GroupPose {
        let mut pose = GroupPose::rest(self.pivot);
        for track in &self.tracks {
            pose.apply(track.channel, track.value_at(time_secs));
        }
        pose
    }

    /// The period of the track driving `channel`, if the group has one.
    pub fn period_of(&self, channel: Channel) -> Option<f32> {
        self.tracks
            .iter()
            .find(|t| t.channel == channel)
            .map(|t| t.period_secs)
    }
}

/// The pulsing drop-shadow halo behind the whole graphic.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GlowEffect {
    /// Halo color before the animated alpha is applied.
    pub color: Rgba,
    /// Blur radius loop, in pixels.
    pub blur: Track,
    /// Halo alpha loop.
    pub alpha: Track,
}

/// A sampled glow state for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GlowSample {
    pub blur_px: f32,
    pub color: Rgba,
}

impl GlowEffect {
    pub fn sample(&self, time_secs: f32) -> GlowSample {
        GlowSample {
            blur_px: self.blur.value_at(time_secs),
            color: self.color.with_alpha(self.alpha.value_at(time_secs)),
        }
    }
}

/// Where and how the host embeds the graphic in its container.
///
/// The graphic is a passive overlay: anchored to the container's
/// bottom-right corner, stacked above sibling content, and never
/// intercepting pointer input.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Inset from the container's right edge, in pixels.
    pub right_px: f32,
    /// Inset from the container's bottom edge, in pixels.
    pub bottom_px: f32,
    pub width_px: f32,
    pub height_px: f32,
    /// Stacking order relative to sibling content.
    pub z_index: i32,
    /// Always `false`: pointer input passes through to content beneath.
    pub pointer_events: bool,
}

/// The complete, engine-agnostic description of the animated robot graphic.
///
/// Built once from a [`GraphicConfig`](crate::assembler::GraphicConfig) and
/// read-only afterwards. Hosts draw `groups` in order (paint order), posing
/// each via [`pose_at`](Self::pose_at) with the elapsed time of their own
/// render loop. Dropping the value is the only teardown.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RobotGraphic {
    pub placement: Placement,
    /// Extent of the design grid all geometry is authored on (200×300).
    pub design_size: Vec2,
    /// The single color every stroke, fill, and glow uses.
    pub color: Rgba,
    pub glow: GlowEffect,
    /// Groups in paint order.
    pub groups: Vec<ShapeGroup>,
}

impl RobotGraphic {
    pub fn group(&self, kind: GroupKind) -> Option<&ShapeGroup> {
        self.groups.iter().find(|g| g.kind == kind)
    }

    /// Samples the local pose of one group.
    pub fn pose_at(&self, kind: GroupKind, time_secs: f32) -> Option<GroupPose> {
        self.group(kind).map(|g| g.pose_at(time_secs))
    }

    /// Effective opacity of a group: its own sampled opacity multiplied by
    /// every ancestor's, matching nested-group compositing.
    pub fn opacity_at(&self, kind: GroupKind, time_secs: f32) -> f32 {
        let mut opacity = 1.0;
        let mut cursor = Some(kind);
        while let Some(k) = cursor {
            let Some(group) = self.group(k) else { break };
            opacity *= group.pose_at(time_secs).opacity;
            cursor = group.parent;
        }
        opacity
    }

    pub fn glow_at(&self, time_secs: f32) -> GlowSample {
        self.glow.sample(time_secs)
    }

    /// Every drawable shape across all groups, in paint order.
    pub fn shapes(&self) -> impl Iterator<Item = &StyledShape> {
        self.groups.iter().flat_map(|g| g.shapes.iter())
    }

    /// Rest-pose bounds of all geometry on the design grid, or `None` for
    /// an empty scene.
    pub fn design_aabb(&self) -> Option<Aabb2d> {
        self.shapes()
            .map(|s| s.primitive.aabb())
            .reduce(|acc, aabb| acc.merge(&aabb))
    }
}

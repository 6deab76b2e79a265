// tests/graphic_assembly.rs
use glam::Vec2;
use wirebot::{
    Channel, GraphicConfig, GroupKind, PaintStyle, Rgba, RobotGraphic,
};

#[test]
fn test_default_config() {
    let config = GraphicConfig::default();
    assert_eq!(config.size, 800.0);
    assert_eq!(config.color, Rgba::GREEN);
    assert_eq!(config.color, Rgba::from_hex("#00FF00").unwrap());
    assert_eq!(config.animation_speed, 2.0);
}

#[test]
fn test_placement_and_footprint() {
    let robot = RobotGraphic::from_config(GraphicConfig::default());

    // Footprint: 0.18 × 800 = 144 wide, 0.25 × 800 = 200 tall.
    assert_eq!(robot.placement.width_px, 144.0);
    assert_eq!(robot.placement.height_px, 200.0);

    // Passive overlay: bottom-right anchored, stacked on top, and
    // transparent to pointer input.
    assert_eq!(robot.placement.right_px, 20.0);
    assert_eq!(robot.placement.bottom_px, 60.0);
    assert_eq!(robot.placement.z_index, 50);
    assert!(!robot.placement.pointer_events);

    // Footprint scales linearly with size.
    let small = RobotGraphic::from_config(GraphicConfig {
        size: 100.0,
        ..Default::default()
    });
    assert_eq!(small.placement.width_px, 18.0);
    assert_eq!(small.placement.height_px, 25.0);
}

#[test]
fn test_uniform_color() {
    let color = Rgba::from_hex("#FF8800").unwrap();
    let robot = RobotGraphic::from_config(GraphicConfig {
        color,
        ..Default::default()
    });

    // One color everywhere: the graphic's paint color and the glow halo
    // both carry the configured value.
    assert_eq!(robot.color, color);
    assert_eq!(robot.glow.color, color);

    // The sampled glow only varies alpha, never the base channels.
    let glow = robot.glow_at(0.0);
    assert_eq!((glow.color.r, glow.color.g, glow.color.b), (color.r, color.g, color.b));
}

#[test]
fn test_group_topology() {
    let robot = RobotGraphic::from_config(GraphicConfig::default());

    // Six groups in paint order, chassis first.
    assert_eq!(robot.groups.len(), 6);
    assert_eq!(robot.groups[0].kind, GroupKind::Chassis);

    // Chassis: torso outline + 5 horizontal + 3 vertical guide lines.
    assert_eq!(robot.group(GroupKind::Chassis).unwrap().shapes.len(), 9);
    assert_eq!(robot.group(GroupKind::EyeRing).unwrap().shapes.len(), 1);
    assert_eq!(robot.group(GroupKind::EyeDot).unwrap().shapes.len(), 1);
    // Each side leg: upper segment, knee joint, lower segment, foot.
    assert_eq!(robot.group(GroupKind::LeftLeg).unwrap().shapes.len(), 4);
    assert_eq!(robot.group(GroupKind::RightLeg).unwrap().shapes.len(), 4);
    // Center leg: shaft + foot pad.
    assert_eq!(robot.group(GroupKind::CenterLeg).unwrap().shapes.len(), 2);
    assert_eq!(robot.shapes().count(), 21);

    // Every non-chassis group nests under the chassis for opacity.
    for group in &robot.groups[1..] {
        assert_eq!(group.parent, Some(GroupKind::Chassis));
    }

    // The eye dot is the only filled shape; everything else is stroked.
    let filled = robot
        .shapes()
        .filter(|s| s.paint == PaintStyle::Fill)
        .count();
    assert_eq!(filled, 1);
}

#[test]
fn test_period_ratios() {
    // animation_speed = 2.0, so: glow 2.4s, breathing 2.0s, legs 2.0s,
    // eye ring 1.6s, center leg 1.6s, eye dot 1.2s.
    let robot = RobotGraphic::from_config(GraphicConfig::default());

    assert_eq!(robot.glow.blur.period_secs, 2.4);
    assert_eq!(robot.glow.alpha.period_secs, 2.4);

    let period = |kind, channel| {
        robot
            .group(kind)
            .unwrap()
            .period_of(channel)
            .unwrap()
    };
    assert_eq!(period(GroupKind::Chassis, Channel::Opacity), 2.0);
    assert_eq!(period(GroupKind::LeftLeg, Channel::RotationDegrees), 2.0);
    assert_eq!(period(GroupKind::RightLeg, Channel::RotationDegrees), 2.0);
    assert_eq!(period(GroupKind::EyeRing, Channel::Scale), 1.6);
    assert_eq!(period(GroupKind::CenterLeg, Channel::OffsetY), 1.6);
    assert_eq!(period(GroupKind::EyeDot, Channel::Opacity), 1.2);
}

#[test]
fn test_design_aabb() {
    let robot = RobotGraphic::from_config(GraphicConfig::default());

    // Rest-pose extents on the 200×300 grid:
    //   min x = 35 (left foot), min y = 50 (torso top),
    //   max x = 165 (right foot), max y = 255 (foot tips).
    let aabb = robot.design_aabb().unwrap();
    assert_eq!(aabb.min, Vec2::new(35.0, 50.0));
    assert_eq!(aabb.max, Vec2::new(165.0, 255.0));

    // Everything fits inside the declared design grid.
    assert_eq!(robot.design_size, Vec2::new(200.0, 300.0));
    assert!(aabb.min.cmpge(Vec2::ZERO).all());
    assert!(aabb.max.cmple(robot.design_size).all());
}

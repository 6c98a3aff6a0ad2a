use bonespring::{Bone, Ground, SimConfig, Vec2};

#[test]
fn clamp_puts_joints_back_on_ground() {
    let ground = Ground::new(400.0f32, 1.5);
    let mut bone = Bone::new(Vec2::new(10.0, 420.0), Vec2::new(60.0, 380.0), 1.0, 1.0);

    ground.clamp(&mut bone);

    assert_eq!(bone.joint1.pos, Vec2::new(10.0, 400.0));
    assert_eq!(bone.joint2.pos, Vec2::new(60.0, 380.0));
}

#[test]
fn clamp_is_idempotent() {
    let ground = Ground::new(400.0f32, 1.5);
    let mut once = Bone::new(Vec2::new(10.0, 431.5), Vec2::new(60.0, 400.0001), 1.0, 0.0);
    ground.clamp(&mut once);
    let mut twice = once.clone();
    ground.clamp(&mut twice);
    assert_eq!(once, twice);
}

#[test]
fn friction_slows_sliding_joint() {
    let ground = Ground::new(400.0f32, 1.5);
    let mut bone = Bone::new(Vec2::new(0.0, 400.0), Vec2::new(50.0, 400.0), 1.0, 4.0)
        .with_velocities(Vec2::new(10.0, 0.0), Vec2::new(-10.0, 0.0));

    ground.apply_friction(&mut bone, 0.01, 200.0);

    // 1.5 * 200 * 0.01 = 3, independent of mass
    assert!((bone.joint1.velocity.x - 7.0).abs() < 1e-5);
    assert!((bone.joint2.velocity.x + 7.0).abs() < 1e-5);
}

#[test]
fn friction_stops_instead_of_reversing() {
    let ground = Ground::new(400.0f32, 1.5);
    let mut bone = Bone::new(Vec2::new(0.0, 400.0), Vec2::new(50.0, 400.0), 1.0, 1.0)
        .with_velocities(Vec2::new(2.0, -5.0), Vec2::new(-0.5, 0.0));

    ground.apply_friction(&mut bone, 0.01, 200.0);

    assert_eq!(bone.joint1.velocity, Vec2::new(0.0, -5.0));
    assert_eq!(bone.joint2.velocity.x, 0.0);
}

#[test]
fn apply_runs_friction_then_clamp_on_every_bone() {
    let ground = Ground::new(100.0f64, 1.0);
    let config = SimConfig::new().with_gravity_scale(10.0);
    let mut bones = vec![
        Bone::new(Vec2::new(0.0, 120.0), Vec2::new(10.0, 50.0), 1.0, 1.0)
            .with_velocities(Vec2::new(5.0, 0.0), Vec2::new(5.0, 0.0)),
        Bone::new(Vec2::new(10.0, 50.0), Vec2::new(20.0, 100.0), 1.0, 1.0)
            .with_velocities(Vec2::new(5.0, 0.0), Vec2::new(5.0, 0.0)),
    ];

    ground.apply(&mut bones, 0.1, &config);

    assert_eq!(bones[0].joint1.pos.y, 100.0);
    assert!((bones[0].joint1.velocity.x - 4.0).abs() < 1e-12);
    assert_eq!(bones[0].joint2.velocity.x, 5.0);
    assert!((bones[1].joint2.velocity.x - 4.0).abs() < 1e-12);
}

use crate::qmap::{Vec2, Vec3};

#[test]
fn vec3_new_swaps_y_and_z() {
    let vec = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(vec.x, 1.0);
    assert_eq!(vec.y, 3.0);
    assert_eq!(vec.z, 2.0);
}

#[test]
fn vec3_from_components_keeps_order() {
    let vec = Vec3::from_components(1.0, 2.0, 3.0);
    assert_eq!((vec.x, vec.y, vec.z), (1.0, 2.0, 3.0));
}

#[test]
fn vec3_arithmetic_is_componentwise() {
    let a = Vec3::from_components(1.0, 2.0, 3.0);
    let b = Vec3::from_components(4.0, 5.0, 6.0);

    assert_eq!(a + b, Vec3::from_components(5.0, 7.0, 9.0));
    assert_eq!(b - a, Vec3::from_components(3.0, 3.0, 3.0));
    assert_eq!(a * 2.0, Vec3::from_components(2.0, 4.0, 6.0));
    assert_eq!(2.0 * a, a * 2.0);
    assert_eq!(b / 2.0, Vec3::from_components(2.0, 2.5, 3.0));
    assert_eq!(-a, Vec3::from_components(-1.0, -2.0, -3.0));
}

#[test]
fn vec3_dot_and_cross() {
    let x = Vec3::from_components(1.0, 0.0, 0.0);
    let y = Vec3::from_components(0.0, 1.0, 0.0);
    let z = Vec3::from_components(0.0, 0.0, 1.0);

    assert_eq!(x.dot(y), 0.0);
    assert_eq!(x.dot(x), 1.0);
    assert_eq!(x.cross(y), z);
    assert_eq!(y.cross(x), -z);
}

#[test]
fn vec2_arithmetic() {
    let a = Vec2::new(1.0, 2.0);
    let b = Vec2::new(3.0, 5.0);

    assert_eq!(a + b, Vec2::new(4.0, 7.0));
    assert_eq!(b - a, Vec2::new(2.0, 3.0));
    assert_eq!(a * 3.0, Vec2::new(3.0, 6.0));
    assert_eq!(0.5 * b, Vec2::new(1.5, 2.5));
    assert_eq!(b / 2.0, Vec2::new(1.5, 2.5));
    assert_eq!(-a, Vec2::new(-1.0, -2.0));
    assert_eq!(a.dot(b), 13.0);
}

#[test]
fn equality_is_exact() {
    let a = Vec3::from_components(0.1 + 0.2, 0.0, 0.0);
    let b = Vec3::from_components(0.3, 0.0, 0.0);
    assert_ne!(a, b);
}

#[test]
fn direction_constants() {
    assert_eq!(Vec3::UP, Vec3::from_components(0.0, 0.0, 1.0));
    assert_eq!(Vec3::DOWN, -Vec3::UP);
    assert_eq!(Vec3::FORWARD, Vec3::from_components(0.0, 1.0, 0.0));
    assert_eq!(Vec3::BACK, -Vec3::FORWARD);
    assert_eq!(Vec3::RIGHT, Vec3::from_components(1.0, 0.0, 0.0));
    assert_eq!(Vec3::LEFT, -Vec3::RIGHT);
    assert_eq!(Vec3::RIGHT.dot(Vec3::UP), 0.0);
}

// WebGL Utilities
// Helper functions shared by every scene
// - Column-major 4x4 matrices (identity, translation, perspective)
// - Surface preparation: viewport, clear color, depth test, clear

use super::backend::GlBackend;

/// Column-major 4x4 matrix, laid out the way `uniformMatrix4fv` expects it.
pub type Mat4 = [f32; 16];

#[rustfmt::skip]
pub const IDENTITY: Mat4 = [
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 1.0, 0.0,
    0.0, 0.0, 0.0, 1.0,
];

pub fn translation(x: f32, y: f32, z: f32) -> Mat4 {
    let mut m = IDENTITY;
    m[12] = x;
    m[13] = y;
    m[14] = z;
    m
}

/// Perspective projection for a symmetric frustum.
///
/// `angle` is the full field of view in degrees and must lie in (0, 180);
/// `z_near` and `z_far` must differ. The x and y scale terms use half the
/// cotangent of the half-angle, with the aspect ratio applied to y.
pub fn make_perspective(angle: f32, aspect: f32, z_near: f32, z_far: f32) -> Mat4 {
    debug_assert!(angle > 0.0 && angle < 180.0, "field of view out of range: {angle}");
    debug_assert!(z_far != z_near, "degenerate depth range");

    let t = (angle * 0.5).to_radians().tan();
    let depth = z_far - z_near;

    #[rustfmt::skip]
    let m = [
        0.5 / t, 0.0,            0.0,                          0.0,
        0.0,     0.5 * aspect / t, 0.0,                        0.0,
        0.0,     0.0,            -(z_far + z_near) / depth,    -1.0,
        0.0,     0.0,            -2.0 * z_far * z_near / depth, 0.0,
    ];
    m
}

/// Resets the whole drawing buffer before a scene is built.
pub fn prepare_surface<G: GlBackend>(gl: &G, width: u32, height: u32, clear_color: [f32; 4]) {
    let width = i32::try_from(width).unwrap_or(i32::MAX);
    let height = i32::try_from(height).unwrap_or(i32::MAX);
    gl.viewport(width, height);
    gl.clear_color(clear_color);
    gl.enable_depth_test();
    gl.clear();
}

use crate::error::GeometryError;

/// Number of cube faces.
pub const FACE_COUNT: usize = 6;

/// Corners per face. Faces are quads; triangulation happens via [`CUBE_INDICES`].
pub const CORNERS_PER_FACE: usize = 4;

/// Total vertices in the generated buffer (4 corners × 6 faces).
pub const VERTEX_COUNT: usize = FACE_COUNT * CORNERS_PER_FACE;

/// Floats per vertex: position (x, y, z) followed by color (r, g, b).
pub const COMPONENTS_PER_VERTEX: usize = 6;

/// A cube face, in the fixed order used by the template table and the color
/// table. `Face::Top as usize` is the face's index into both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Top = 0,
    Left = 1,
    Right = 2,
    Front = 3,
    Back = 4,
    Bottom = 5,
}

impl Face {
    /// All faces in table order.
    pub const ORDER: [Face; FACE_COUNT] = [
        Face::Top,
        Face::Left,
        Face::Right,
        Face::Front,
        Face::Back,
        Face::Bottom,
    ];
}

/// Unit-cube corner template: 24 positions in `[-1, 1]` on each axis,
/// grouped 4-at-a-time per face in [`Face::ORDER`]. Never mutated; the
/// generators scale a copy of this table.
#[rustfmt::skip]
pub const CUBE_CORNERS: [[f32; 3]; VERTEX_COUNT] = [
    // Top
    [-1.0,  1.0, -1.0],
    [-1.0,  1.0,  1.0],
    [ 1.0,  1.0,  1.0],
    [ 1.0,  1.0, -1.0],
    // Left
    [-1.0,  1.0,  1.0],
    [-1.0, -1.0,  1.0],
    [-1.0, -1.0, -1.0],
    [-1.0,  1.0, -1.0],
    // Right
    [ 1.0,  1.0,  1.0],
    [ 1.0, -1.0,  1.0],
    [ 1.0, -1.0, -1.0],
    [ 1.0,  1.0, -1.0],
    // Front
    [ 1.0,  1.0,  1.0],
    [ 1.0, -1.0,  1.0],
    [-1.0, -1.0,  1.0],
    [-1.0,  1.0,  1.0],
    // Back
    [ 1.0,  1.0, -1.0],
    [ 1.0, -1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [-1.0,  1.0, -1.0],
    // Bottom
    [-1.0, -1.0, -1.0],
    [-1.0, -1.0,  1.0],
    [ 1.0, -1.0,  1.0],
    [ 1.0, -1.0, -1.0],
];

/// Triangle index list for the corner template: two triangles per face,
/// wound counter-clockwise when viewed from outside the cube.
#[rustfmt::skip]
pub const CUBE_INDICES: [u16; 36] = [
    // Top
     0,  1,  2,
     0,  2,  3,
    // Left
     5,  4,  6,
     6,  4,  7,
    // Right
     8,  9, 10,
     8, 10, 11,
    // Front
    13, 12, 14,
    15, 14, 12,
    // Back
    16, 17, 18,
    16, 18, 19,
    // Bottom
    21, 20, 22,
    22, 20, 23,
];

/// Face color palette used by the hand-written demo buffers: grey top, pink
/// left, blue right, red front, green back, light blue bottom.
pub const TUTORIAL_FACE_COLORS: [[f32; 3]; FACE_COUNT] = [
    [0.50, 0.50, 0.50],
    [0.75, 0.25, 0.50],
    [0.25, 0.25, 0.75],
    [1.00, 0.00, 0.15],
    [0.00, 1.00, 0.15],
    [0.50, 0.50, 1.00],
];

/// Generates the interleaved cube vertex buffer: 144 floats, 24 vertices of
/// scaled position plus face color, in [`CUBE_CORNERS`] order.
///
/// The half-extent of the cube is `size / 10` — the normalization the demos
/// were authored against. [`cube_vertices_scaled`] applies a scale directly.
///
/// `colors` must hold exactly one RGB triple per face, in [`Face::ORDER`].
/// Color components are passed through unvalidated; interpretation is the
/// caller's concern. Degenerate sizes are accepted: `0.0` collapses the cube
/// to a point and negative values invert its orientation.
pub fn cube_vertices(size: f32, colors: &[[f32; 3]]) -> Result<Vec<f32>, GeometryError> {
    cube_vertices_scaled(size / 10.0, colors)
}

/// Same as [`cube_vertices`] but with `scale` used as the half-extent
/// directly, no `/ 10` divisor.
pub fn cube_vertices_scaled(scale: f32, colors: &[[f32; 3]]) -> Result<Vec<f32>, GeometryError> {
    if colors.len() != FACE_COUNT {
        return Err(GeometryError::InvalidColorTable { len: colors.len() });
    }

    let mut out = Vec::with_capacity(VERTEX_COUNT * COMPONENTS_PER_VERTEX);
    for (i, corner) in CUBE_CORNERS.iter().enumerate() {
        let color = colors[i / CORNERS_PER_FACE];
        out.push(corner[0] * scale);
        out.push(corner[1] * scale);
        out.push(corner[2] * scale);
        out.push(color[0]);
        out.push(color[1]);
        out.push(color[2]);
    }
    Ok(out)
}

/// Position-only stream (72 floats) for callers that bind positions and
/// colors as separate buffers. `scale` is the half-extent; pass `1.0` for
/// the unit cube the two-cube demo uses.
pub fn cube_positions(scale: f32) -> Vec<f32> {
    let mut out = Vec::with_capacity(VERTEX_COUNT * 3);
    for corner in &CUBE_CORNERS {
        out.push(corner[0] * scale);
        out.push(corner[1] * scale);
        out.push(corner[2] * scale);
    }
    out
}

/// Color-only stream (72 floats): each face color repeated once per corner,
/// matching [`cube_positions`] vertex for vertex.
pub fn face_color_stream(colors: &[[f32; 3]]) -> Result<Vec<f32>, GeometryError> {
    if colors.len() != FACE_COUNT {
        return Err(GeometryError::InvalidColorTable { len: colors.len() });
    }

    let mut out = Vec::with_capacity(VERTEX_COUNT * 3);
    for color in colors {
        for _ in 0..CORNERS_PER_FACE {
            out.extend_from_slice(color);
        }
    }
    Ok(out)
}

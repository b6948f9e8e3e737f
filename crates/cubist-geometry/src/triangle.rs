/// Floats per 2D vertex: position (x, y) followed by color (r, g, b).
pub const COMPONENTS_PER_VERTEX_2D: usize = 5;

/// Vertex data for the 2D "wing" demo: six position+color vertices forming
/// a triangle fan around the first vertex.
#[rustfmt::skip]
pub const TRIANGLE_VERTICES: [f32; 30] = [
    // X, Y        R, G, B
     0.0,  0.0,    1.0, 0.0, 0.0,
    -0.5,  0.5,    0.0, 1.0, 0.0,
    -0.3,  0.7,    0.0, 0.0, 1.0,

     0.0,  1.0,    1.0, 0.0, 0.0,
     0.3,  0.7,    0.0, 1.0, 0.0,
     0.5,  0.5,    0.0, 0.0, 1.0,
];

/// Triangle-list indices equivalent to drawing [`TRIANGLE_VERTICES`] as a
/// fan. Modern APIs dropped the fan topology, so the fan is triangulated
/// here once instead of in every backend.
pub const TRIANGLE_INDICES: [u16; 12] = [
    0, 1, 2,
    0, 2, 3,
    0, 3, 4,
    0, 4, 5,
];

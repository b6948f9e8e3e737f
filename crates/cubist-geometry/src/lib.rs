//! Procedural vertex buffer generation for the **cubist** demos.
//!
//! This crate is intentionally dependency-free so the generated buffers can
//! be consumed by any rendering backend (or inspected in tests) without
//! pulling in any engine or GPU code.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`cube`] | corner template, index table, `cube_vertices` generators |
//! | [`triangle`] | 2D fan demo data |
//! | [`error`] | `GeometryError` |
//!
//! # Quick start
//!
//! ```rust
//! use cubist_geometry::cube_vertices;
//!
//! let colors = [
//!     [1.0, 0.0, 0.0], // top
//!     [0.0, 1.0, 0.0], // left
//!     [0.0, 0.0, 1.0], // right
//!     [1.0, 1.0, 0.0], // front
//!     [0.0, 0.0, 0.0], // back
//!     [0.0, 1.0, 1.0], // bottom
//! ];
//!
//! let buffer = cube_vertices(15.0, &colors).unwrap();
//! assert_eq!(buffer.len(), 144);
//! assert_eq!(&buffer[..6], &[-1.5, 1.5, -1.5, 1.0, 0.0, 0.0]);
//! ```

pub mod cube;
pub mod error;
pub mod triangle;

pub use cube::{
    cube_positions, cube_vertices, cube_vertices_scaled, face_color_stream, Face, CUBE_CORNERS,
    CUBE_INDICES, TUTORIAL_FACE_COLORS,
};
pub use error::GeometryError;
pub use triangle::{TRIANGLE_INDICES, TRIANGLE_VERTICES};

#[cfg(test)]
mod cube_tests {
    use super::cube::*;
    use super::error::GeometryError;

    const COLORS: [[f32; 3]; 6] = [
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
        [1.0, 1.0, 0.0],
        [0.0, 0.0, 0.0],
        [0.0, 1.0, 1.0],
    ];

    #[test]
    fn output_length_is_144() {
        let v = cube_vertices(1.0, &COLORS).unwrap();
        assert_eq!(v.len(), VERTEX_COUNT * COMPONENTS_PER_VERTEX);
        assert_eq!(v.len(), 144);
    }

    #[test]
    fn first_vertex_matches_hand_computed_scenario() {
        // size 15 → half-extent 1.5; first corner is the top face at
        // (-1, 1, -1) carrying the top color.
        let v = cube_vertices(15.0, &COLORS).unwrap();
        assert_eq!(&v[..6], &[-1.5, 1.5, -1.5, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn doubling_size_doubles_positions_only() {
        let a = cube_vertices(7.0, &COLORS).unwrap();
        let b = cube_vertices(14.0, &COLORS).unwrap();
        for (i, (x, y)) in a.iter().zip(&b).enumerate() {
            if i % COMPONENTS_PER_VERTEX < 3 {
                assert_eq!(x * 2.0, *y, "position component {i}");
            } else {
                assert_eq!(x, y, "color component {i}");
            }
        }
    }

    #[test]
    fn every_face_corner_carries_its_face_color() {
        let v = cube_vertices(3.0, &COLORS).unwrap();
        for face in Face::ORDER {
            let f = face as usize;
            for corner in 0..CORNERS_PER_FACE {
                let base = (f * CORNERS_PER_FACE + corner) * COMPONENTS_PER_VERTEX;
                assert_eq!(&v[base + 3..base + 6], &COLORS[f], "{face:?} corner {corner}");
            }
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let a = cube_vertices(9.5, &COLORS).unwrap();
        let b = cube_vertices(9.5, &COLORS).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_size_collapses_positions_and_keeps_colors() {
        let v = cube_vertices(0.0, &COLORS).unwrap();
        for (i, c) in v.iter().enumerate() {
            if i % COMPONENTS_PER_VERTEX < 3 {
                assert_eq!(*c, 0.0);
            }
        }
        assert_eq!(&v[3..6], &COLORS[0]);
    }

    #[test]
    fn negative_size_mirrors_positions() {
        let pos = cube_vertices(10.0, &COLORS).unwrap();
        let neg = cube_vertices(-10.0, &COLORS).unwrap();
        for i in 0..VERTEX_COUNT {
            let base = i * COMPONENTS_PER_VERTEX;
            for c in 0..3 {
                assert_eq!(pos[base + c], -neg[base + c]);
            }
        }
    }

    #[test]
    fn short_color_table_is_rejected() {
        let err = cube_vertices(1.0, &COLORS[..5]).unwrap_err();
        assert_eq!(err, GeometryError::InvalidColorTable { len: 5 });
    }

    #[test]
    fn long_color_table_is_rejected() {
        let mut colors = COLORS.to_vec();
        colors.push([1.0, 1.0, 1.0]);
        let err = cube_vertices(1.0, &colors).unwrap_err();
        assert_eq!(err, GeometryError::InvalidColorTable { len: 7 });
    }

    #[test]
    fn out_of_range_colors_pass_through() {
        let loud = [[2.0, -1.0, 0.5]; 6];
        let v = cube_vertices(1.0, &loud).unwrap();
        assert_eq!(&v[3..6], &[2.0, -1.0, 0.5]);
    }

    #[test]
    fn scaled_variant_skips_the_divisor() {
        let via_size = cube_vertices(15.0, &COLORS).unwrap();
        let direct = cube_vertices_scaled(1.5, &COLORS).unwrap();
        assert_eq!(via_size, direct);
    }

    #[test]
    fn indices_stay_in_range_and_cover_each_face() {
        assert_eq!(CUBE_INDICES.len(), 36);
        for (i, idx) in CUBE_INDICES.iter().enumerate() {
            assert!((*idx as usize) < VERTEX_COUNT, "index {i} out of range");
            // Each face's two triangles only reference that face's corners.
            let face = i / 6;
            assert_eq!(*idx as usize / CORNERS_PER_FACE, face, "index {i} crosses faces");
        }
    }

    #[test]
    fn split_streams_match_interleaved_output() {
        let interleaved = cube_vertices_scaled(1.0, &COLORS).unwrap();
        let positions = cube_positions(1.0);
        let colors = face_color_stream(&COLORS).unwrap();

        assert_eq!(positions.len(), 72);
        assert_eq!(colors.len(), 72);
        for i in 0..VERTEX_COUNT {
            assert_eq!(&positions[i * 3..i * 3 + 3], &interleaved[i * 6..i * 6 + 3]);
            assert_eq!(&colors[i * 3..i * 3 + 3], &interleaved[i * 6 + 3..i * 6 + 6]);
        }
    }

    #[test]
    fn face_color_stream_validates_length() {
        let err = face_color_stream(&COLORS[..2]).unwrap_err();
        assert_eq!(err, GeometryError::InvalidColorTable { len: 2 });
    }
}

#[cfg(test)]
mod triangle_tests {
    use super::triangle::*;

    #[test]
    fn fan_triangulation_references_valid_vertices() {
        let vertex_count = TRIANGLE_VERTICES.len() / COMPONENTS_PER_VERTEX_2D;
        assert_eq!(vertex_count, 6);
        for idx in TRIANGLE_INDICES {
            assert!((idx as usize) < vertex_count);
        }
        // Every fan triangle pivots on vertex 0.
        for tri in TRIANGLE_INDICES.chunks(3) {
            assert_eq!(tri[0], 0);
        }
    }
}

use std::f32::consts::TAU;

use anyhow::Result;
use glam::{Mat4, Vec3};
use winit::event::WindowEvent;
use winit::window::WindowId;

use cubist_engine::camera::Camera;
use cubist_engine::core::{App, AppControl, FrameCtx};
use cubist_engine::render::{CameraMatrices, Mesh, MeshRenderer};
use cubist_geometry::{cube_positions, face_color_stream, CUBE_INDICES, TUTORIAL_FACE_COLORS};

/// Two unit cubes sharing one mesh on a violet background, both rotating
/// about the `(2, 1, 0)` axis: one at full speed translated up-left, one at
/// half speed translated down-right. One revolution every eight seconds.
pub struct TwoCubes {
    camera: Camera,
    renderer: MeshRenderer,
}

impl TwoCubes {
    pub fn new() -> Result<Self> {
        // Positions and colors come as two separate streams; the mesh
        // renderer wants them interleaved.
        let positions = cube_positions(1.0);
        let colors = face_color_stream(&TUTORIAL_FACE_COLORS)?;
        let mesh = Mesh::new(interleave(&positions, &colors), CUBE_INDICES.to_vec());

        Ok(Self {
            camera: Camera::default(),
            renderer: MeshRenderer::new(mesh),
        })
    }
}

impl App for TwoCubes {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        if super::is_escape(event) {
            AppControl::Exit
        } else {
            AppControl::Continue
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let angle = ctx.time.elapsed / 8.0 * TAU;
        let axis = Vec3::new(2.0, 1.0, 0.0).normalize();

        let models = [
            Mat4::from_translation(Vec3::new(-2.0, 1.0, 0.0)) * Mat4::from_axis_angle(axis, angle),
            Mat4::from_translation(Vec3::new(2.0, -1.0, 0.0))
                * Mat4::from_axis_angle(axis, angle / 2.0),
        ];

        let camera = CameraMatrices {
            view: self.camera.view(),
            proj: self.camera.projection(ctx.gpu.aspect_ratio()),
        };

        let renderer = &mut self.renderer;
        ctx.render([0.5, 0.4, 0.7], |rctx, target| {
            renderer.draw(rctx, target, &camera, &models);
        })
    }
}

fn interleave(positions: &[f32], colors: &[f32]) -> Vec<f32> {
    debug_assert_eq!(positions.len(), colors.len());
    positions
        .chunks_exact(3)
        .zip(colors.chunks_exact(3))
        .flat_map(|(p, c)| p.iter().chain(c).copied())
        .collect()
}

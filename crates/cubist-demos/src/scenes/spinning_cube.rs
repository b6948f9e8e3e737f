use std::f32::consts::TAU;

use anyhow::Result;
use glam::Mat4;
use winit::event::WindowEvent;
use winit::window::WindowId;

use cubist_engine::camera::Camera;
use cubist_engine::core::{App, AppControl, FrameCtx};
use cubist_engine::render::{CameraMatrices, Mesh, MeshRenderer};
use cubist_geometry::{cube_vertices, CUBE_INDICES};

/// Face color table for the generated cube: red top, green left, blue right,
/// yellow front, black back, cyan bottom.
const FACE_COLORS: [[f32; 3]; 6] = [
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 1.0, 0.0],
    [0.0, 0.0, 0.0],
    [0.0, 1.0, 1.0],
];

/// One generated cube tumbling about X and Y on a black background.
/// One full revolution every six seconds.
pub struct SpinningCube {
    camera: Camera,
    renderer: MeshRenderer,
}

impl SpinningCube {
    pub fn new() -> Result<Self> {
        let vertices = cube_vertices(15.0, &FACE_COLORS)?;
        let mesh = Mesh::new(vertices, CUBE_INDICES.to_vec());

        Ok(Self {
            camera: Camera::default(),
            renderer: MeshRenderer::new(mesh),
        })
    }
}

impl App for SpinningCube {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        if super::is_escape(event) {
            AppControl::Exit
        } else {
            AppControl::Continue
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let angle = ctx.time.elapsed / 6.0 * TAU;
        let model = Mat4::from_rotation_x(angle) * Mat4::from_rotation_y(angle);

        let camera = CameraMatrices {
            view: self.camera.view(),
            proj: self.camera.projection(ctx.gpu.aspect_ratio()),
        };

        let renderer = &mut self.renderer;
        ctx.render([0.0, 0.0, 0.0], |rctx, target| {
            renderer.draw(rctx, target, &camera, &[model]);
        })
    }
}

use winit::event::WindowEvent;
use winit::window::WindowId;

use cubist_engine::core::{App, AppControl, FrameCtx};
use cubist_engine::render::FlatRenderer;
use cubist_geometry::{TRIANGLE_INDICES, TRIANGLE_VERTICES};

/// Static 2D fan triangle on a black background. No matrices, no animation.
pub struct Triangle {
    renderer: FlatRenderer,
}

impl Triangle {
    pub fn new() -> Self {
        Self {
            renderer: FlatRenderer::new(
                TRIANGLE_VERTICES.to_vec(),
                TRIANGLE_INDICES.to_vec(),
            ),
        }
    }
}

impl App for Triangle {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        if super::is_escape(event) {
            AppControl::Exit
        } else {
            AppControl::Continue
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let renderer = &mut self.renderer;
        ctx.render([0.0, 0.0, 0.0], |rctx, target| {
            renderer.draw(rctx, target);
        })
    }
}

//! Demo scenes. Each scene owns its geometry and renderer and implements
//! the engine's `App` contract.

pub mod spinning_cube;
pub mod triangle;
pub mod two_cubes;

pub use spinning_cube::SpinningCube;
pub use triangle::Triangle;
pub use two_cubes::TwoCubes;

use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Escape closes any scene.
pub(crate) fn is_escape(event: &WindowEvent) -> bool {
    matches!(
        event,
        WindowEvent::KeyboardInput {
            event: KeyEvent {
                physical_key: PhysicalKey::Code(KeyCode::Escape),
                state: ElementState::Pressed,
                ..
            },
            ..
        }
    )
}

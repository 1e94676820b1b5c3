//! Orrery viewer application: window and event loop, fixed-timestep
//! simulation clock, mouse input, and scene buffer assembly.

pub mod game_loop;
pub mod input;
pub mod scene;
pub mod window;

pub use game_loop::{FIXED_DT, FrameClock, MAX_FRAME_TIME};
pub use input::MouseState;
pub use scene::{IDENTITY_SLOT, SceneBuffers};
pub use window::{OrreryApp, run};

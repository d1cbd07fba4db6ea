pub mod keyboard;
pub mod keys;
pub mod pointer;

pub use keyboard::wire_intro_keydown;
pub use pointer::wire_pointer_parallax;

pub mod pointer;
pub mod theme;

pub use pointer::wire_tilt;
pub use theme::wire_theme_observer;

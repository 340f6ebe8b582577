pub mod image;
pub mod input;
pub mod notification;
pub mod translation;

pub use image::*;
pub use input::*;
pub use notification::*;
pub use translation::*;

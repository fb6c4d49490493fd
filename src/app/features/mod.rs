pub mod navigation;
pub mod palette;
pub mod timer;

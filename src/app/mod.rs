// Application layer: the navigable pages and their terminal rendering.

pub mod pages;
pub mod render;

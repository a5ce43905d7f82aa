pub mod colour;
pub mod complex;
pub mod complex_grid;
pub mod pixel_colour_buffer;
pub mod resolution;
pub mod stability_field;
pub mod viewport;

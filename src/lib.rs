pub mod controllers;
pub mod core;
pub mod presenters;
pub mod storage;

pub use controllers::cli::{CliController, CliError, CliOptions, parse_args, prompt_colours};
pub use controllers::interactive::{
    ExplorerSession, FrameData, FramePresenterPort, InteractiveController, RenderConfig,
};
pub use core::colour_map::{ColourMap, ColourMapError, MappedColour, OutputMode};
pub use core::data::colour::{Colour, NamedColour};
pub use core::data::complex::Complex;
pub use core::data::pixel_colour_buffer::PixelColourBuffer;
pub use core::data::resolution::Resolution;
pub use core::data::stability_field::StabilityField;
pub use core::data::viewport::Viewport;
pub use core::engine::{FractalKind, FractalParameters, generate, generate_parallel};
pub use core::sampler::sample;
pub use core::viewport_controller::{FractionalRect, ViewportController};
pub use presenters::ppm::PpmFilePresenter;

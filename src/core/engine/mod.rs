pub mod escape_time;
pub mod parallel;
pub mod params;

pub use escape_time::{generate, point_stability};
pub use parallel::{generate_parallel, generate_parallel_cancelable};
pub use params::{FractalKind, FractalParameters, FractalParametersError};

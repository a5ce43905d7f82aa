use crate::core::colour_map::ColourMap;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;
use crate::core::engine::params::FractalParameters;

/// A snapshot of everything one render job needs.
///
/// Immutable by design; `PartialEq` enables change detection so callers
/// can skip resubmitting an identical request.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub viewport: Viewport,
    pub resolution: Resolution,
    pub params: FractalParameters,
    pub colour_map: ColourMap,
}

use crate::controllers::interactive::controller::InteractiveController;
use crate::controllers::interactive::ports::FramePresenterPort;
use crate::controllers::interactive::request::RenderConfig;
use crate::core::colour_map::ColourMap;
use crate::core::data::complex::Complex;
use crate::core::engine::params::FractalParameters;
use crate::core::viewport_controller::{
    FractionalRect, ViewportController, ViewportControllerError,
};
use std::sync::Arc;

/// Wires viewport state to the render worker.
///
/// The host event dispatcher translates its gestures into `zoom`/`pan`
/// calls here; each successful transition resubmits a render for the new
/// bounds. The core stays a set of pure state-transition functions — this
/// is the only place a view change triggers recomputation.
pub struct ExplorerSession {
    viewport_controller: ViewportController,
    params: FractalParameters,
    colour_map: ColourMap,
    controller: InteractiveController,
}

impl ExplorerSession {
    pub fn new(
        viewport_controller: ViewportController,
        params: FractalParameters,
        colour_map: ColourMap,
        presenter_port: Arc<dyn FramePresenterPort>,
    ) -> Self {
        Self {
            viewport_controller,
            params,
            colour_map,
            controller: InteractiveController::new(presenter_port),
        }
    }

    /// Submits a render of the current state; returns its generation.
    pub fn render(&self) -> u64 {
        let config = RenderConfig {
            viewport: self.viewport_controller.viewport(),
            resolution: self.viewport_controller.resolution(),
            params: self.params,
            colour_map: self.colour_map.clone(),
        };

        self.controller.submit_request(Arc::new(config))
    }

    pub fn zoom(
        &mut self,
        factor: f64,
        anchor: Option<Complex>,
    ) -> Result<u64, ViewportControllerError> {
        self.viewport_controller.zoom(factor, anchor)?;

        Ok(self.render())
    }

    pub fn pan(&mut self, visible: FractionalRect) -> Result<u64, ViewportControllerError> {
        self.viewport_controller.pan(visible)?;

        Ok(self.render())
    }

    pub fn set_params(&mut self, params: FractalParameters) -> u64 {
        self.params = params;

        self.render()
    }

    pub fn set_colour_map(&mut self, colour_map: ColourMap) -> u64 {
        self.colour_map = colour_map;

        self.render()
    }

    #[must_use]
    pub fn viewport_controller(&self) -> &ViewportController {
        &self.viewport_controller
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.controller.last_completed_generation()
    }
}

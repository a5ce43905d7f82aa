//! Interactive exploration layer.
//!
//! Ports & adapters around the core pipeline: a [`RenderConfig`] snapshot
//! goes in, completed frames come out through a [`FramePresenterPort`].
//! A single worker thread renders the latest request and abandons
//! superseded ones via the core's cancellation token.

mod controller;
pub mod events;
pub mod ports;
mod request;
mod session;

pub use controller::InteractiveController;
pub use events::FrameData;
pub use ports::FramePresenterPort;
pub use request::RenderConfig;
pub use session::ExplorerSession;

use crate::controllers::interactive::events::FrameData;

/// Receives completed frames from the render worker.
///
/// Implementations blit to a display surface, write to disk, or collect
/// frames in tests; the controller never sees what happens to a frame.
pub trait FramePresenterPort: Send + Sync {
    fn present(&self, frame: FrameData);
}

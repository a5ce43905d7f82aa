use crate::controllers::interactive::events::FrameData;
use crate::controllers::interactive::ports::FramePresenterPort;
use crate::controllers::interactive::request::RenderConfig;
use crate::core::cancellation::{CancelToken, Cancelled};
use crate::core::data::pixel_colour_buffer::PixelColourBuffer;
use crate::core::engine::parallel::generate_parallel_cancelable;
use crate::core::sampler::sample;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Instant;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, Arc<RenderConfig>)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter_port: Arc<dyn FramePresenterPort>,
}

/// Owns the render worker thread for interactive exploration.
///
/// Requests are coalesced: only the latest submission is held, and the
/// worker's cancel token trips as soon as a newer generation arrives, so a
/// superseded viewport stops computing instead of racing a stale frame
/// into the presenter.
pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(presenter_port: Arc<dyn FramePresenterPort>) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Queues a render, superseding any not-yet-started request and
    /// cancelling the in-flight one. Returns the request's generation.
    pub fn submit_request(&self, request: Arc<RenderConfig>) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self.shared.latest_request.lock().unwrap();
            *guard = Some((generation, request));
        }

        self.shared.wake.notify_one();

        generation
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, request) = {
                let mut guard = shared.latest_request.lock().unwrap();
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(req) = guard.take() {
                        break req;
                    }

                    guard = shared.wake.wait(guard).unwrap();
                }
            };

            let cancel_token = || {
                shared.shutdown.load(Ordering::Relaxed)
                    || job_generation != shared.generation.load(Ordering::Relaxed)
            };

            let start = Instant::now();

            let pixel_buffer = match Self::render_request(&request, &cancel_token) {
                Ok(buffer) => buffer,
                Err(Cancelled) => continue,
            };

            let render_duration = start.elapsed();

            // a newer request may have arrived during colour mapping
            if job_generation != shared.generation.load(Ordering::Acquire) {
                continue;
            }

            shared.presenter_port.present(FrameData {
                generation: job_generation,
                pixel_buffer,
                render_duration,
            });

            shared
                .last_completed_generation
                .store(job_generation, Ordering::Release);
        }
    }

    fn render_request<C: CancelToken>(
        request: &RenderConfig,
        cancel: &C,
    ) -> Result<PixelColourBuffer, Cancelled> {
        let grid = sample(&request.viewport, request.resolution);
        let field = generate_parallel_cancelable(grid, &request.params, cancel)?;

        if cancel.is_cancelled() {
            return Err(Cancelled);
        }

        Ok(request.colour_map.evaluate_field(&field))
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

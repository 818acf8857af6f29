use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::progress_data::ProgressData;
use crate::controllers::interactive::errors::render_error::RenderError;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::julia_sweep::JuliaSweep;
use crate::controllers::interactive::ports::presenter_port::PresenterPort;
use crate::controllers::interactive::task_queue::{Task, TaskQueue};
use crate::controllers::view::controller::ViewController;
use crate::core::actions::generate_raster::raster_job::{BatchOutcome, DEFAULT_BATCH_ROWS, RasterJob};
use crate::core::colour_mapping::kinds::ColourSchemeKind;
use crate::core::data::canvas_size::{CanvasSize, CanvasSizeError};
use crate::core::errors::ParameterError;
use crate::core::fractals::fractal_kinds::FractalKind;
use log::{debug, info, warn};
use std::time::Instant;

struct ActiveGeneration {
    generation: u64,
    job: RasterJob,
    started: Instant,
}

/// Single-threaded message loop driving renders and the Julia sweep.
///
/// Each row batch runs as its own queued task, so other work interleaves
/// between batches. Starting a generation supersedes the active one; the old
/// generation's queued batch is dropped when it comes up.
pub struct InteractiveController<P: PresenterPort> {
    view: ViewController,
    fractal: FractalKind,
    colour_scheme: ColourSchemeKind,
    batch_rows: u32,
    queue: TaskQueue,
    active: Option<ActiveGeneration>,
    generation: u64,
    sweep: JuliaSweep,
    presenter: P,
}

impl<P: PresenterPort> InteractiveController<P> {
    pub fn new(presenter: P, canvas: CanvasSize) -> Self {
        Self::with_batch_rows(presenter, canvas, DEFAULT_BATCH_ROWS)
    }

    pub fn with_batch_rows(presenter: P, canvas: CanvasSize, batch_rows: u32) -> Self {
        Self {
            view: ViewController::new(canvas),
            fractal: FractalKind::default(),
            colour_scheme: ColourSchemeKind::default(),
            batch_rows,
            queue: TaskQueue::new(),
            active: None,
            generation: 0,
            sweep: JuliaSweep::new(),
            presenter,
        }
    }

    /// Starts a new generation from a snapshot of the current settings.
    ///
    /// Returns its generation number.
    pub fn request_render(&mut self) -> u64 {
        self.generation += 1;
        let generation = self.generation;
        let settings = self.view.snapshot(self.fractal, self.colour_scheme);

        if let Some(superseded) = self.active.take() {
            debug!(
                "generation {} supersedes {}",
                generation, superseded.generation
            );
        }

        match RasterJob::with_batch_rows(settings, self.batch_rows) {
            Ok(job) => {
                info!("generation {} started: {}", generation, settings.fractal);
                self.active = Some(ActiveGeneration {
                    generation,
                    job,
                    started: Instant::now(),
                });
                self.queue.schedule(Task::RenderBatch { generation });
            }
            Err(err) => self.fail(generation, err.to_string()),
        }

        generation
    }

    /// Starts a generation only when none is in flight.
    pub fn request_render_if_idle(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }

        self.request_render();
        true
    }

    /// Processes one queued task. Returns `false` when the queue was empty.
    pub fn tick(&mut self) -> bool {
        let Some(task) = self.queue.next() else {
            return false;
        };

        match task {
            Task::RenderBatch { generation } => self.run_batch(generation),
            Task::SweepTick => self.run_sweep_tick(),
        }

        true
    }

    /// Processes up to `limit` tasks, stopping early once the queue drains.
    pub fn run_ticks(&mut self, limit: usize) -> usize {
        let mut processed = 0;

        while processed < limit && self.tick() {
            processed += 1;
        }

        processed
    }

    pub fn start_julia_sweep(&mut self) {
        if !self.sweep.start() {
            return;
        }

        info!("julia sweep started at angle {}", self.sweep.angle());
        self.queue.schedule(Task::SweepTick);
    }

    pub fn stop_julia_sweep(&mut self) {
        self.sweep.stop();

        let withdrawn = self.queue.withdraw(Task::SweepTick);
        info!("julia sweep stopped, {} pending tick(s) withdrawn", withdrawn);
    }

    pub fn zoom_in(&mut self, pixel_x: f64, pixel_y: f64, factor: f64) -> Result<(), ParameterError> {
        self.view.zoom_in(pixel_x, pixel_y, factor)
    }

    pub fn zoom_out(&mut self, pixel_x: f64, pixel_y: f64, factor: f64) -> Result<(), ParameterError> {
        self.view.zoom_out(pixel_x, pixel_y, factor)
    }

    pub fn pan(&mut self, delta_x: f64, delta_y: f64) -> Result<(), ParameterError> {
        self.view.pan(delta_x, delta_y)
    }

    pub fn reset_view(&mut self) {
        self.view.reset_view();
    }

    pub fn set_julia_params(&mut self, real: f64, imag: f64) {
        self.view.set_julia_params(real, imag);
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<(), ParameterError> {
        self.view.set_max_iterations(max_iterations)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), CanvasSizeError> {
        self.view.resize(width, height)
    }

    pub fn set_fractal_kind(&mut self, fractal: FractalKind) {
        self.fractal = fractal;
    }

    pub fn set_colour_scheme(&mut self, colour_scheme: ColourSchemeKind) {
        self.colour_scheme = colour_scheme;
    }

    #[must_use]
    pub fn view_controller(&self) -> &ViewController {
        &self.view
    }

    #[must_use]
    pub fn fractal_kind(&self) -> FractalKind {
        self.fractal
    }

    #[must_use]
    pub fn colour_scheme(&self) -> ColourSchemeKind {
        self.colour_scheme
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn is_sweeping(&self) -> bool {
        self.sweep.is_running()
    }

    /// Number of the most recently started generation, `0` before the first.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn queue(&self) -> &TaskQueue {
        &self.queue
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    fn run_batch(&mut self, generation: u64) {
        let outcome = match self.active.as_mut() {
            Some(active) if active.generation == generation => active.job.step(),
            _ => {
                debug!("dropping batch for stale generation {}", generation);
                return;
            }
        };

        match outcome {
            Ok(BatchOutcome::Pending { progress }) => {
                self.presenter.present(RenderEvent::Progress(ProgressData {
                    generation,
                    fraction: progress,
                }));
                self.queue.schedule(Task::RenderBatch { generation });
            }
            Ok(BatchOutcome::Complete) => {
                self.presenter.present(RenderEvent::Progress(ProgressData {
                    generation,
                    fraction: 1.0,
                }));
                self.finish();
            }
            Err(err) => self.fail(generation, err.to_string()),
        }
    }

    fn finish(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        let generation = active.generation;
        let render_duration = active.started.elapsed();

        match active.job.into_buffer() {
            Ok(pixel_buffer) => {
                info!("generation {} finished in {:?}", generation, render_duration);
                self.presenter.present(RenderEvent::Frame(FrameData {
                    generation,
                    pixel_buffer,
                    render_duration,
                }));
            }
            Err(err) => self.fail(generation, err.to_string()),
        }
    }

    fn fail(&mut self, generation: u64, message: String) {
        warn!("generation {} failed: {}", generation, message);
        self.active = None;
        self.presenter
            .present(RenderEvent::Error(RenderError { generation, message }));
    }

    fn run_sweep_tick(&mut self) {
        if !self.sweep.is_running() {
            return;
        }

        let julia = self.sweep.advance();
        self.view.set_julia_params(julia.real, julia.imag);

        if !self.request_render_if_idle() {
            debug!("sweep tick skipped render, generation {} busy", self.generation);
        }

        self.queue.schedule(Task::SweepTick);
    }
}

//! Interactive session: one game plus an optional paced simulation run.
//!
//! The core never sleeps. The app decides when the next batch is due and
//! runs it from `advance`, which the terminal loop calls every tick. Large
//! batches run on a worker thread so the terminal keeps redrawing.

use crate::constants::{BACKGROUND_BATCH_MIN, BATCH_DELAY_MS, DEFAULT_BATCH_SIZES};
use crate::error::SimResult;
use crate::game::{new_game, process_input, GamePhase, MontyGame, MontyInput};
use crate::simulator::{series_batches, BatchSummary, ConvergenceSeries, SeriesBatches};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// High-level actions produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Game(MontyInput),
    RunSimulation,
    NewGame,
    Quit,
    None,
}

type Batches = SeriesBatches<ChaCha8Rng>;
type BatchJob = JoinHandle<(Batches, Option<SimResult<BatchSummary>>)>;

/// Where the remaining batches are.
#[derive(Debug)]
enum BatchWork {
    Idle(Batches),
    Running { size: i64, job: BatchJob },
    Lost,
}

/// A convergence series being filled one batch at a time.
#[derive(Debug)]
pub struct SimulationRun {
    work: BatchWork,
    pub series: ConvergenceSeries,
    pub next_batch_at: Instant,
    pub error: Option<String>,
}

impl SimulationRun {
    pub fn is_finished(&self) -> bool {
        if self.error.is_some() {
            return true;
        }
        match &self.work {
            BatchWork::Idle(batches) => batches.remaining() == 0,
            BatchWork::Running { .. } => false,
            BatchWork::Lost => true,
        }
    }

    /// Size of the batch waiting to run or running now.
    pub fn pending_size(&self) -> Option<i64> {
        match &self.work {
            BatchWork::Idle(batches) => batches.peek_size(),
            BatchWork::Running { size, .. } => Some(*size),
            BatchWork::Lost => None,
        }
    }

    /// True while a batch is computing on the worker thread.
    pub fn is_running_in_background(&self) -> bool {
        matches!(self.work, BatchWork::Running { .. })
    }

    fn record(
        &mut self,
        result: Option<SimResult<BatchSummary>>,
        now: Instant,
        delay: Duration,
    ) -> bool {
        match result {
            Some(Ok(summary)) => {
                self.series.push(summary);
                self.next_batch_at = now + delay;
                true
            }
            Some(Err(e)) => {
                self.error = Some(e.to_string());
                false
            }
            None => false,
        }
    }
}

pub struct App {
    pub game: MontyGame,
    pub simulation: Option<SimulationRun>,
    pub batch_sizes: Vec<i64>,
    pub batch_delay: Duration,
    rng: ChaCha8Rng,
}

impl App {
    pub fn new(mut rng: ChaCha8Rng) -> Self {
        Self {
            game: new_game(&mut rng),
            simulation: None,
            batch_sizes: DEFAULT_BATCH_SIZES.to_vec(),
            batch_delay: Duration::from_millis(BATCH_DELAY_MS),
            rng,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Apply one action. Returns false when the app should exit.
    pub fn handle(&mut self, action: AppAction, now: Instant) -> bool {
        match action {
            AppAction::Game(input) => {
                process_input(&mut self.game, input, &mut self.rng);
            }
            AppAction::RunSimulation => {
                self.start_simulation(now);
            }
            AppAction::NewGame => self.new_game(),
            AppAction::Quit => return false,
            AppAction::None => {}
        }
        true
    }

    pub fn new_game(&mut self) {
        self.game = new_game(&mut self.rng);
        self.simulation = None;
    }

    /// Whether `R` does anything right now: the game is over and no run
    /// has been started for it.
    pub fn can_start_simulation(&self) -> bool {
        self.game.phase == GamePhase::Final && self.simulation.is_none()
    }

    /// Start the convergence run once the game is over. One run per game;
    /// a new game clears it. The first batch runs after one delay.
    pub fn start_simulation(&mut self, now: Instant) -> bool {
        if !self.can_start_simulation() {
            return false;
        }
        let stream = ChaCha8Rng::seed_from_u64(self.rng.gen());
        self.simulation = Some(SimulationRun {
            work: BatchWork::Idle(series_batches(&self.batch_sizes, stream)),
            series: ConvergenceSeries::new(),
            next_batch_at: now + self.batch_delay,
            error: None,
        });
        debug!(batches = self.batch_sizes.len(), "simulation started");
        true
    }

    pub fn is_simulating(&self) -> bool {
        self.simulation.as_ref().is_some_and(|run| !run.is_finished())
    }

    /// Run the next batch if it is due, or collect a finished background
    /// batch. Returns true if a summary was added.
    pub fn advance(&mut self, now: Instant) -> bool {
        let delay = self.batch_delay;
        let Some(run) = self.simulation.as_mut() else {
            return false;
        };
        if run.is_finished() || now < run.next_batch_at {
            return false;
        }

        match std::mem::replace(&mut run.work, BatchWork::Lost) {
            BatchWork::Idle(mut batches) => match batches.peek_size() {
                Some(size) if size >= BACKGROUND_BATCH_MIN => {
                    debug!(size, "batch moved to worker thread");
                    let job = std::thread::spawn(move || {
                        let result = batches.next();
                        (batches, result)
                    });
                    run.work = BatchWork::Running { size, job };
                    false
                }
                _ => {
                    let result = batches.next();
                    run.work = BatchWork::Idle(batches);
                    run.record(result, now, delay)
                }
            },
            BatchWork::Running { size, job } if !job.is_finished() => {
                run.work = BatchWork::Running { size, job };
                false
            }
            BatchWork::Running { size, job } => match job.join() {
                Ok((batches, result)) => {
                    run.work = BatchWork::Idle(batches);
                    run.record(result, now, delay)
                }
                Err(_) => {
                    warn!(size, "batch worker panicked");
                    run.error = Some(format!("worker for {} games panicked", size));
                    false
                }
            },
            BatchWork::Lost => false,
        }
    }

    /// Status line in the style of the game's messages.
    pub fn simulation_message(&self) -> Option<String> {
        let run = self.simulation.as_ref()?;
        Some(if let Some(ref e) = run.error {
            format!("Simulation stopped: {}", e)
        } else if let Some(size) = run.pending_size() {
            format!("Running simulation for {} games...", size)
        } else {
            "All simulations complete!".to_string()
        })
    }
}

//! The pipeline engine: one entry point per dashboard operation.
//!
//! RULES:
//!   - The engine holds no generated data between calls.
//!   - Every operation takes the next call number and derives a fresh
//!     RNG stream per generator slot from the RngBank.
//!   - "Now" is read once per operation from the engine's Clock.
//!
//! Same master seed + same clock + same call sequence = same output.

use crate::{
    agents::{AgentStatusReport, HealthReport},
    analysis::{AnalysisGenerator, DisasterAnalysis},
    claim::ClaimGenerator,
    client::ClientGenerator,
    clock::{Clock, SystemClock},
    config::PipelineConfig,
    error::{PipelineError, PipelineResult},
    event::{DisasterEvent, EventGenerator},
    rng::{GeneratorSlot, RngBank, SeededRng},
    view::{ClaimsByEventView, RevenueDashboardView, SimulationView},
};
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

pub struct PipelineEngine {
    pub config: PipelineConfig,
    rng_bank: RngBank,
    clock: Arc<dyn Clock>,
    calls: AtomicU64,
}

impl PipelineEngine {
    pub fn new(config: PipelineConfig, seed: u64, clock: Arc<dyn Clock>) -> Self {
        log::info!("Pipeline engine initialised (seed {seed})");
        Self {
            config,
            rng_bank: RngBank::new(seed),
            clock,
            calls: AtomicU64::new(0),
        }
    }

    /// Engine on the wall clock. Uses the configured seed, else `fallback_seed`.
    pub fn build(config: PipelineConfig, fallback_seed: u64) -> Self {
        let seed = config.seed.unwrap_or(fallback_seed);
        Self::new(config, seed, Arc::new(SystemClock))
    }

    pub fn seed(&self) -> u64 {
        self.rng_bank.master_seed()
    }

    /// Operations served so far.
    pub fn calls_served(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    fn next_call(&self) -> u64 {
        self.calls.fetch_add(1, Ordering::Relaxed)
    }

    fn rng(&self, slot: GeneratorSlot, call: u64) -> SeededRng {
        let rng = self.rng_bank.for_generator_at_call(slot, call);
        log::debug!("Call {call}: drawing from {} stream", rng.name);
        rng
    }

    pub fn health(&self) -> HealthReport {
        HealthReport::at(self.clock.now())
    }

    pub fn agent_status(&self) -> AgentStatusReport {
        AgentStatusReport::at(self.clock.now())
    }

    pub fn active_disasters(&self) -> Vec<DisasterEvent> {
        let call = self.next_call();
        let mut rng = self.rng(GeneratorSlot::Event, call);
        EventGenerator::generate_active(&mut rng, self.clock.now(), self.config.active_disasters)
    }

    pub fn disaster_analysis(&self, event_id: &str) -> DisasterAnalysis {
        let call = self.next_call();
        let mut rng = self.rng(GeneratorSlot::Analysis, call);
        AnalysisGenerator::generate(&mut rng, event_id)
    }

    /// Claims for `event_id`. Without a count, one is drawn from
    /// `config.default_claims`. A negative count, or one above
    /// `config.max_claims`, is rejected before any call is consumed.
    pub fn claims_for_event(
        &self,
        event_id: &str,
        count: Option<i64>,
    ) -> PipelineResult<ClaimsByEventView> {
        if let Some(n) = count {
            if n > i64::from(self.config.max_claims) {
                return Err(PipelineError::InvalidArgument {
                    name: "count",
                    reason: format!(
                        "claim count must be <= {}, got {n}",
                        self.config.max_claims
                    ),
                });
            }
        }
        let call = self.next_call();
        let mut rng = self.rng(GeneratorSlot::Claim, call);
        let count = match count {
            Some(n) => n,
            None => self.config.default_claims.draw(&mut rng) as i64,
        };
        let claims = ClaimGenerator::generate(&mut rng, self.clock.now(), event_id, count)?;
        Ok(ClaimsByEventView::from_claims(
            event_id,
            claims,
            self.config.claims_display_limit,
        ))
    }

    pub fn revenue_dashboard(&self) -> RevenueDashboardView {
        let call = self.next_call();
        let mut rng = self.rng(GeneratorSlot::Client, call);
        RevenueDashboardView::from_clients(ClientGenerator::generate(&mut rng, self.clock.now()))
    }

    /// One event, a claim batch against it, and the revenue engine's
    /// follow-up counts.
    pub fn simulate_new_disaster(&self) -> PipelineResult<SimulationView> {
        let call = self.next_call();
        let now = self.clock.now();

        let disaster = EventGenerator::generate(&mut self.rng(GeneratorSlot::Event, call), now);

        let mut sim_rng = self.rng(GeneratorSlot::Simulation, call);
        let claim_count = self.config.simulation_claims.draw(&mut sim_rng);
        let demos_sent = self.config.demos_sent.draw(&mut sim_rng) as u32;
        let trials_activated = self.config.trials_activated.draw(&mut sim_rng) as u32;

        let claims = ClaimGenerator::generate(
            &mut self.rng(GeneratorSlot::Claim, call),
            now,
            &disaster.event_id,
            claim_count as i64,
        )?;

        log::info!(
            "Simulated {} with {} claims, {} demos, {} trials",
            disaster.event_id,
            claims.len(),
            demos_sent,
            trials_activated
        );

        Ok(SimulationView::new(
            disaster,
            &claims,
            demos_sent,
            trials_activated,
            self.config.revenue_per_trial,
        ))
    }
}

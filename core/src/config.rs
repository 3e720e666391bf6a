use crate::{
    error::{PipelineError, PipelineResult},
    rng::EntropySource,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A closed `[min, max]` count range drawn from per request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

impl CountRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn draw<R: EntropySource>(&self, rng: &mut R) -> usize {
        rng.int_in(self.min as i64, self.max as i64) as usize
    }

    pub fn contains(&self, n: usize) -> bool {
        (self.min as usize..=self.max as usize).contains(&n)
    }

    fn validate(&self, field: &str) -> PipelineResult<()> {
        if self.min > self.max {
            return Err(PipelineError::Config(format!(
                "{field}: min ({}) exceeds max ({})",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Engine tuning. Every field has a default, so a config file only
/// needs the fields it overrides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PipelineConfig {
    /// Master seed. `None` means the caller picks one at startup.
    pub seed: Option<u64>,
    /// How many events the active-disaster feed returns.
    pub active_disasters: CountRange,
    /// Claim batch size when a claims request gives no count.
    pub default_claims: CountRange,
    /// Claim batch size for a simulated disaster.
    pub simulation_claims: CountRange,
    /// Claims included in the claims-by-event listing. Totals ignore it.
    pub claims_display_limit: usize,
    /// Largest claim batch a caller may request.
    pub max_claims: u32,
    pub demos_sent: CountRange,
    pub trials_activated: CountRange,
    /// Revenue booked per activated trial.
    pub revenue_per_trial: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            active_disasters: CountRange::new(2, 3),
            default_claims: CountRange::new(30, 80),
            simulation_claims: CountRange::new(40, 70),
            claims_display_limit: 20,
            max_claims: 10_000,
            demos_sent: CountRange::new(10, 20),
            trials_activated: CountRange::new(2, 5),
            revenue_per_trial: 1200,
        }
    }
}

impl PipelineConfig {
    /// Load from a JSON file and validate.
    pub fn load(path: impl AsRef<Path>) -> PipelineResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PipelineError::Config(format!("Cannot read {}: {e}", path.display()))
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> PipelineResult<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> PipelineResult<()> {
        self.active_disasters.validate("active_disasters")?;
        self.default_claims.validate("default_claims")?;
        self.simulation_claims.validate("simulation_claims")?;
        for (field, range) in [
            ("default_claims", self.default_claims),
            ("simulation_claims", self.simulation_claims),
        ] {
            if range.max > self.max_claims {
                return Err(PipelineError::Config(format!(
                    "{field}: max ({}) exceeds max_claims ({})",
                    range.max, self.max_claims
                )));
            }
        }
        self.demos_sent.validate("demos_sent")?;
        self.trials_activated.validate("trials_activated")?;
        Ok(())
    }

    /// Fixed seed for deterministic tests.
    pub fn default_test() -> Self {
        Self {
            seed: Some(42),
            ..Self::default()
        }
    }
}

/// Base cost of a single tower with no neighbours inside the penalty radius.
pub const TOWER_BASE_PENALTY: f64 = 170.0;

/// Exponential growth rate of a tower's cost per neighbouring tower.
pub const TOWER_CROWDING_RATE: f64 = 0.17;

/// Seed used by `PlannerBuilder` when none is supplied.
pub const DEFAULT_SEED: u64 = 0;

/// Penalty contributed by one tower that has `neighbours` other towers
/// within the penalty radius.
pub fn tower_penalty(neighbours: usize) -> f64 {
    TOWER_BASE_PENALTY * (TOWER_CROWDING_RATE * neighbours as f64).exp()
}

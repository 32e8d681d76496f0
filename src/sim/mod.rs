pub mod battle;
pub mod stages;
pub mod stats;
pub mod status;

pub use battle::{simulate_battle, simulate_battle_logged, BattleOutcome, Combatant, Winner};
pub use stats::{Nature, StatsSet};
pub use status::{StatusCondition, StatusKind};

//! In-battle stat stages: seven counters per combatant, each in [-6, 6],
//! with the two canonical stage-to-multiplier curves.

use phf::phf_map;
use serde::Serialize;

/// Stats that can be staged in battle. HP has no stage.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum BattleStat {
    Attack,
    Defense,
    SpAttack,
    SpDefense,
    Speed,
    Accuracy,
    Evasion,
}

impl BattleStat {
    fn index(self) -> usize {
        match self {
            BattleStat::Attack => 0,
            BattleStat::Defense => 1,
            BattleStat::SpAttack => 2,
            BattleStat::SpDefense => 3,
            BattleStat::Speed => 4,
            BattleStat::Accuracy => 5,
            BattleStat::Evasion => 6,
        }
    }

    fn label(self) -> &'static str {
        match self {
            BattleStat::Attack => "Attack",
            BattleStat::Defense => "Defense",
            BattleStat::SpAttack => "SpAttack",
            BattleStat::SpDefense => "SpDefense",
            BattleStat::Speed => "Speed",
            BattleStat::Accuracy => "Accuracy",
            BattleStat::Evasion => "Evasion",
        }
    }
}

/// Result of one requested stage change.
#[derive(Clone, Debug, Serialize)]
pub struct StageChange {
    pub message: String,
    /// True only if the stage actually moved; clamping at +-6 leaves it false.
    pub changed: bool,
    /// The delta that took effect after clamping.
    pub applied: i8,
}

/// Stage counters for one combatant, zeroed at battle start.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct StatStages([i8; 7]);

impl StatStages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stat: BattleStat) -> i8 {
        self.0[stat.index()]
    }

    pub fn reset(&mut self) {
        self.0 = [0; 7];
    }

    /// Apply a requested stage delta, clamping the result to [-6, 6].
    ///
    /// The message verb (rose/fell) follows the *requested* direction even
    /// when clamping cancels the effect; `changed` follows the actual delta.
    pub fn apply(&mut self, stat: BattleStat, delta: i8) -> StageChange {
        let current = self.0[stat.index()];
        let next = current.saturating_add(delta).clamp(-6, 6);
        self.0[stat.index()] = next;

        let applied = next - current;
        let rising = delta > 0;
        let message = if applied == 0 {
            format!(
                "{} won't go any {}!",
                stat.label(),
                if rising { "higher" } else { "lower" }
            )
        } else if applied.abs() >= 3 {
            format!(
                "{} {}!",
                stat.label(),
                if rising { "rose drastically" } else { "severely fell" }
            )
        } else if applied.abs() >= 2 {
            format!(
                "{} {}!",
                stat.label(),
                if rising { "sharply rose" } else { "harshly fell" }
            )
        } else {
            format!("{} {}!", stat.label(), if rising { "rose" } else { "fell" })
        };

        StageChange {
            message,
            changed: applied != 0,
            applied,
        }
    }
}

/// Multiplier for attack/defense/sp. attack/sp. defense/speed stages:
/// (2+s)/2 when s >= 0, 2/(2-s) when s < 0. Stage +6 -> 4.0, -6 -> 0.25.
pub fn stage_multiplier(stage: i8) -> f32 {
    let stage = stage.clamp(-6, 6);
    if stage >= 0 {
        (2 + stage as i32) as f32 / 2.0
    } else {
        2.0 / (2 - stage as i32) as f32
    }
}

/// Multiplier for accuracy/evasion stages: (3+s)/3 when s >= 0, 3/(3-s)
/// when s < 0. Stage +6 -> 3.0, -6 -> 1/3.
pub fn accuracy_multiplier(stage: i8) -> f32 {
    let stage = stage.clamp(-6, 6);
    if stage >= 0 {
        (3 + stage as i32) as f32 / 3.0
    } else {
        3.0 / (3 - stage as i32) as f32
    }
}

/// Scale a stat value by its stage; never drops below 1.
pub fn apply_stage_multiplier(base: u16, stage: i8) -> u16 {
    (base as f32 * stage_multiplier(stage)).floor().max(1.0) as u16
}

/// Final hit chance: base accuracy scaled up by the attacker's accuracy
/// stage and down by the defender's evasion stage, clamped to [0, 100].
pub fn effective_accuracy(base_accuracy: f32, attacker_accuracy: i8, defender_evasion: i8) -> f32 {
    let acc = accuracy_multiplier(attacker_accuracy);
    let eva = accuracy_multiplier(defender_evasion);
    (base_accuracy * acc / eva).clamp(0.0, 100.0)
}

/// Who a stage move acts on.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum EffectTarget {
    User,
    Opponent,
}

/// One stage move: the side it affects and the stage deltas it applies.
#[derive(Clone, Copy, Debug)]
pub struct StageMoveEffect {
    pub target: EffectTarget,
    pub changes: &'static [(BattleStat, i8)],
}

static STAGE_MOVES: phf::Map<&'static str, StageMoveEffect> = phf_map! {
    "swords-dance" => StageMoveEffect { target: EffectTarget::User, changes: &[(BattleStat::Attack, 2)] },
    "dragon-dance" => StageMoveEffect { target: EffectTarget::User, changes: &[(BattleStat::Attack, 1), (BattleStat::Speed, 1)] },
    "calm-mind" => StageMoveEffect { target: EffectTarget::User, changes: &[(BattleStat::SpAttack, 1), (BattleStat::SpDefense, 1)] },
    "nasty-plot" => StageMoveEffect { target: EffectTarget::User, changes: &[(BattleStat::SpAttack, 2)] },
    "agility" => StageMoveEffect { target: EffectTarget::User, changes: &[(BattleStat::Speed, 2)] },
    "double-team" => StageMoveEffect { target: EffectTarget::User, changes: &[(BattleStat::Evasion, 1)] },
    "growl" => StageMoveEffect { target: EffectTarget::Opponent, changes: &[(BattleStat::Attack, -1)] },
    "leer" => StageMoveEffect { target: EffectTarget::Opponent, changes: &[(BattleStat::Defense, -1)] },
    "tail-whip" => StageMoveEffect { target: EffectTarget::Opponent, changes: &[(BattleStat::Defense, -1)] },
    "sand-attack" => StageMoveEffect { target: EffectTarget::Opponent, changes: &[(BattleStat::Accuracy, -1)] },
    "screech" => StageMoveEffect { target: EffectTarget::Opponent, changes: &[(BattleStat::Defense, -2)] },
    "charm" => StageMoveEffect { target: EffectTarget::Opponent, changes: &[(BattleStat::Attack, -2)] },
};

/// Normalize a move name for table lookup: lowercase, whitespace to hyphens.
pub(crate) fn normalize_move_name(name: &str) -> String {
    name.trim()
        .to_ascii_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Look up a stage move by name. Unknown moves are a sentinel, not an error.
pub fn stage_move_effect(move_name: &str) -> Option<&'static StageMoveEffect> {
    STAGE_MOVES.get(normalize_move_name(move_name).as_str())
}

//! Status conditions: a per-combatant state machine with one active
//! condition at a time, resolved once per combatant per turn.

use phf::phf_map;
use rand::Rng;
use serde::Serialize;

/// Payload-free status discriminant, used by the move table and by callers
/// that inflict a condition.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum StatusKind {
    Paralysis,
    Burn,
    Poison,
    BadlyPoisoned,
    Sleep,
    Freeze,
    Confusion,
}

/// An active condition. Turn counters live inside the variant, so a
/// combatant can never carry two conditions or a stale counter.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum StatusCondition {
    Paralysis,
    Burn,
    Poison,
    BadlyPoisoned { elapsed_turns: u8 },
    Sleep { turns_remaining: u8 },
    Freeze,
    Confusion { turns_remaining: u8 },
}

/// Outcome of one status tick for a combatant.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct TurnStatus {
    pub can_act: bool,
    pub self_damage: u16,
    pub message: &'static str,
    /// True when the condition ended this tick; the holder clears it.
    pub cured: bool,
}

impl TurnStatus {
    fn acts() -> Self {
        Self {
            can_act: true,
            self_damage: 0,
            message: "",
            cured: false,
        }
    }
}

impl StatusCondition {
    /// Build a condition at onset, drawing any duration from the injected
    /// random source: sleep lasts 1-3 turns, confusion 1-4.
    pub fn on_inflict(kind: StatusKind, rng: &mut impl Rng) -> Self {
        match kind {
            StatusKind::Paralysis => StatusCondition::Paralysis,
            StatusKind::Burn => StatusCondition::Burn,
            StatusKind::Poison => StatusCondition::Poison,
            StatusKind::BadlyPoisoned => StatusCondition::BadlyPoisoned { elapsed_turns: 1 },
            StatusKind::Sleep => StatusCondition::Sleep {
                turns_remaining: rng.gen_range(1..=3),
            },
            StatusKind::Freeze => StatusCondition::Freeze,
            StatusKind::Confusion => StatusCondition::Confusion {
                turns_remaining: rng.gen_range(1..=4),
            },
        }
    }

    pub fn kind(&self) -> StatusKind {
        match self {
            StatusCondition::Paralysis => StatusKind::Paralysis,
            StatusCondition::Burn => StatusKind::Burn,
            StatusCondition::Poison => StatusKind::Poison,
            StatusCondition::BadlyPoisoned { .. } => StatusKind::BadlyPoisoned,
            StatusCondition::Sleep { .. } => StatusKind::Sleep,
            StatusCondition::Freeze => StatusKind::Freeze,
            StatusCondition::Confusion { .. } => StatusKind::Confusion,
        }
    }

    /// Message announced when the condition lands.
    pub fn onset_message(&self) -> &'static str {
        match self.kind() {
            StatusKind::Paralysis => "is paralyzed! It may not be able to move!",
            StatusKind::Burn => "was burned!",
            StatusKind::Poison => "was poisoned!",
            StatusKind::BadlyPoisoned => "was badly poisoned!",
            StatusKind::Sleep => "fell asleep!",
            StatusKind::Freeze => "was frozen solid!",
            StatusKind::Confusion => "became confused!",
        }
    }

    /// Resolve one turn of this condition.
    ///
    /// Self-damage is floor(max_hp * fraction); probabilities are uniform
    /// draws against the documented chances. When `cured` comes back true
    /// the holder transitions the condition to none.
    pub fn resolve_turn(&mut self, max_hp: u16, rng: &mut impl Rng) -> TurnStatus {
        match self {
            StatusCondition::Paralysis => {
                if rng.gen_bool(0.25) {
                    TurnStatus {
                        can_act: false,
                        self_damage: 0,
                        message: "is paralyzed! It can't move!",
                        cured: false,
                    }
                } else {
                    TurnStatus::acts()
                }
            }
            StatusCondition::Burn => TurnStatus {
                can_act: true,
                self_damage: max_hp / 16,
                message: "is hurt by its burn!",
                cured: false,
            },
            StatusCondition::Poison => TurnStatus {
                can_act: true,
                self_damage: max_hp / 8,
                message: "is hurt by poison!",
                cured: false,
            },
            StatusCondition::BadlyPoisoned { elapsed_turns } => {
                let damage = (max_hp as u32 * *elapsed_turns as u32 / 16) as u16;
                *elapsed_turns = elapsed_turns.saturating_add(1);
                TurnStatus {
                    can_act: true,
                    self_damage: damage,
                    message: "is hurt by poison!",
                    cured: false,
                }
            }
            StatusCondition::Sleep { turns_remaining } => {
                if *turns_remaining == 0 {
                    TurnStatus {
                        can_act: true,
                        self_damage: 0,
                        message: "woke up!",
                        cured: true,
                    }
                } else {
                    *turns_remaining -= 1;
                    TurnStatus {
                        can_act: false,
                        self_damage: 0,
                        message: "is fast asleep.",
                        cured: false,
                    }
                }
            }
            StatusCondition::Freeze => {
                if rng.gen_bool(0.2) {
                    TurnStatus {
                        can_act: true,
                        self_damage: 0,
                        message: "thawed out!",
                        cured: true,
                    }
                } else {
                    TurnStatus {
                        can_act: false,
                        self_damage: 0,
                        message: "is frozen solid!",
                        cured: false,
                    }
                }
            }
            StatusCondition::Confusion { turns_remaining } => {
                if *turns_remaining == 0 {
                    TurnStatus {
                        can_act: true,
                        self_damage: 0,
                        message: "snapped out of confusion!",
                        cured: true,
                    }
                } else {
                    *turns_remaining -= 1;
                    if rng.gen_bool(0.33) {
                        TurnStatus {
                            can_act: false,
                            self_damage: max_hp / 10,
                            message: "hurt itself in its confusion!",
                            cured: false,
                        }
                    } else {
                        TurnStatus::acts()
                    }
                }
            }
        }
    }
}

/// One status move: what it inflicts and its base accuracy. The hit roll is
/// resolved through the stage engine before the status is applied.
#[derive(Clone, Copy, Debug)]
pub struct StatusMoveEffect {
    pub status: StatusKind,
    pub accuracy: f32,
}

static STATUS_MOVES: phf::Map<&'static str, StatusMoveEffect> = phf_map! {
    "thunder-wave" => StatusMoveEffect { status: StatusKind::Paralysis, accuracy: 90.0 },
    "stun-spore" => StatusMoveEffect { status: StatusKind::Paralysis, accuracy: 75.0 },
    "will-o-wisp" => StatusMoveEffect { status: StatusKind::Burn, accuracy: 85.0 },
    "poison-powder" => StatusMoveEffect { status: StatusKind::Poison, accuracy: 75.0 },
    "toxic" => StatusMoveEffect { status: StatusKind::BadlyPoisoned, accuracy: 90.0 },
    "sleep-powder" => StatusMoveEffect { status: StatusKind::Sleep, accuracy: 75.0 },
    "hypnosis" => StatusMoveEffect { status: StatusKind::Sleep, accuracy: 60.0 },
    "confuse-ray" => StatusMoveEffect { status: StatusKind::Confusion, accuracy: 100.0 },
};

/// Look up a status move by name. Unknown moves are a sentinel, not an error.
pub fn status_move_effect(move_name: &str) -> Option<&'static StatusMoveEffect> {
    STATUS_MOVES.get(super::stages::normalize_move_name(move_name).as_str())
}

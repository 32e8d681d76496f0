//! Stat math: nature modifiers, the canonical stat formulas, and the
//! EV budget rules.

use crate::data::species;
use serde::{Deserialize, Serialize};

/// Per-stat EV cap.
pub const MAX_SINGLE_EV: u16 = 252;
/// Whole-spread EV budget.
pub const MAX_TOTAL_EV: u16 = 510;
/// Per-stat IV cap.
pub const MAX_IV: u16 = 31;

/// Spread order is fixed: hp, attack, defense, sp. attack, sp. defense, speed.
pub type Evs = [u8; 6];
pub type Ivs = [u8; 6];

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Nature {
    Hardy,
    Lonely,
    Brave,
    Adamant,
    Naughty,
    Bold,
    Docile,
    Relaxed,
    Impish,
    Lax,
    Timid,
    Hasty,
    Serious,
    Jolly,
    Naive,
    Modest,
    Mild,
    Quiet,
    Bashful,
    Rash,
    Calm,
    Gentle,
    Sassy,
    Careful,
    Quirky,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum Stat {
    Hp,
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
}

/// Nature multiplier for one stat: 1.1 boosted, 0.9 lowered, 1.0 otherwise.
/// HP is never affected by nature.
pub fn stat_modifier(nature: Nature, stat: Stat) -> f32 {
    match nature {
        Nature::Hardy | Nature::Docile | Nature::Serious | Nature::Bashful | Nature::Quirky => 1.0,
        Nature::Lonely => bonus(stat, Stat::Atk, Stat::Def),
        Nature::Brave => bonus(stat, Stat::Atk, Stat::Spe),
        Nature::Adamant => bonus(stat, Stat::Atk, Stat::Spa),
        Nature::Naughty => bonus(stat, Stat::Atk, Stat::Spd),
        Nature::Bold => bonus(stat, Stat::Def, Stat::Atk),
        Nature::Relaxed => bonus(stat, Stat::Def, Stat::Spe),
        Nature::Impish => bonus(stat, Stat::Def, Stat::Spa),
        Nature::Lax => bonus(stat, Stat::Def, Stat::Spd),
        Nature::Timid => bonus(stat, Stat::Spe, Stat::Atk),
        Nature::Hasty => bonus(stat, Stat::Spe, Stat::Def),
        Nature::Jolly => bonus(stat, Stat::Spe, Stat::Spa),
        Nature::Naive => bonus(stat, Stat::Spe, Stat::Spd),
        Nature::Modest => bonus(stat, Stat::Spa, Stat::Atk),
        Nature::Mild => bonus(stat, Stat::Spa, Stat::Def),
        Nature::Quiet => bonus(stat, Stat::Spa, Stat::Spe),
        Nature::Rash => bonus(stat, Stat::Spa, Stat::Spd),
        Nature::Calm => bonus(stat, Stat::Spd, Stat::Atk),
        Nature::Gentle => bonus(stat, Stat::Spd, Stat::Def),
        Nature::Sassy => bonus(stat, Stat::Spd, Stat::Spe),
        Nature::Careful => bonus(stat, Stat::Spd, Stat::Spa),
    }
}

fn bonus(stat: Stat, boosted: Stat, lowered: Stat) -> f32 {
    if stat == boosted {
        1.1
    } else if stat == lowered {
        0.9
    } else {
        1.0
    }
}

/// HP formula: floor((2*base + iv + floor(ev/4)) * level / 100) + level + 10.
pub fn calc_hp(base: u16, iv: u8, ev: u8, level: u8) -> u16 {
    let core = 2 * base as u32 + iv as u32 + ev as u32 / 4;
    (core * level as u32 / 100) as u16 + level as u16 + 10
}

/// Non-HP formula: floor(floor((2*base + iv + floor(ev/4)) * level / 100 + 5) * nature).
/// Integer division at each step; the nature multiplier is applied last and
/// the product floored, matching the canonical stat formula bit for bit.
pub fn calc_stat(base: u16, iv: u8, ev: u8, level: u8, nature_mod: f32) -> u16 {
    let core = 2 * base as u32 + iv as u32 + ev as u32 / 4;
    let intermediate = core * level as u32 / 100 + 5;
    (intermediate as f32 * nature_mod).floor() as u16
}

/// Boundary guard: levels outside [1, 100] are clamped, not rejected.
pub fn clamp_level(level: u16) -> u8 {
    level.clamp(1, 100) as u8
}

/// Boundary guard: each IV clamped to [0, 31].
pub fn clamp_ivs(raw: [u16; 6]) -> Ivs {
    let mut out = [0u8; 6];
    for (slot, &value) in out.iter_mut().zip(raw.iter()) {
        *slot = value.min(MAX_IV) as u8;
    }
    out
}

/// Clamp a candidate EV spread to the per-stat and total budgets.
///
/// Stats are processed in spread order; each value is first capped at 252,
/// then truncated to whatever remains of the 510 budget. Once the budget is
/// spent every later stat is zeroed. Over-budget input is never an error.
pub fn clamp_evs(raw: [u16; 6]) -> Evs {
    let mut out = [0u8; 6];
    let mut total = 0u16;
    for (slot, &value) in out.iter_mut().zip(raw.iter()) {
        let ev = value.min(MAX_SINGLE_EV).min(MAX_TOTAL_EV - total);
        *slot = ev as u8;
        total += ev;
    }
    out
}

/// Add earned EVs to an existing spread, respecting both caps.
///
/// Each gained stat receives as much of its yield as fits in the stat cap and
/// the remaining total budget; existing investment is never redistributed.
pub fn apply_ev_yield(current: Evs, gained: Evs) -> Evs {
    let mut out = current;
    let mut total: u16 = out.iter().map(|&ev| ev as u16).sum();
    for (slot, &amount) in out.iter_mut().zip(gained.iter()) {
        if total >= MAX_TOTAL_EV {
            break;
        }
        let room_in_stat = MAX_SINGLE_EV - *slot as u16;
        let room_in_total = MAX_TOTAL_EV - total;
        let gain = (amount as u16).min(room_in_stat).min(room_in_total);
        *slot += gain as u8;
        total += gain;
    }
    out
}

/// Effective stats derived from base stats, IVs, EVs, level, and nature.
/// Recomputed on demand; never persisted.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct StatsSet {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spa: u16,
    pub spd: u16,
    pub spe: u16,
}

impl StatsSet {
    pub fn from_base(base: &species::BaseStats, level: u8, evs: Evs, ivs: Ivs, nature: Nature) -> Self {
        Self {
            hp: calc_hp(base.hp, ivs[0], evs[0], level),
            atk: calc_stat(base.atk, ivs[1], evs[1], level, stat_modifier(nature, Stat::Atk)),
            def: calc_stat(base.def, ivs[2], evs[2], level, stat_modifier(nature, Stat::Def)),
            spa: calc_stat(base.spa, ivs[3], evs[3], level, stat_modifier(nature, Stat::Spa)),
            spd: calc_stat(base.spd, ivs[4], evs[4], level, stat_modifier(nature, Stat::Spd)),
            spe: calc_stat(base.spe, ivs[5], evs[5], level, stat_modifier(nature, Stat::Spe)),
        }
    }

    pub fn from_species(
        species: &str,
        level: u8,
        evs: Evs,
        ivs: Ivs,
        nature: Nature,
    ) -> Option<Self> {
        let data = species::get(species)?;
        Some(Self::from_base(&data.base_stats, level, evs, ivs, nature))
    }
}

/// Boundary entry point for the collection layer: validates level and spreads
/// before the formulas run.
pub fn compute_effective_stats(
    species: &str,
    level: u16,
    raw_evs: [u16; 6],
    raw_ivs: [u16; 6],
    nature: Nature,
) -> Option<StatsSet> {
    StatsSet::from_species(
        species,
        clamp_level(level),
        clamp_evs(raw_evs),
        clamp_ivs(raw_ivs),
        nature,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_stat_example() {
        // floor(floor((2*55 + 31 + 63) * 50 / 100 + 5) * 1.1)
        assert_eq!(calc_stat(55, 31, 252, 50, 1.1), 117);
        assert_eq!(calc_stat(55, 31, 252, 50, 1.0), 107);
        assert_eq!(calc_stat(55, 31, 252, 50, 0.9), 96);
    }

    #[test]
    fn pikachu_lv50_hardy_no_evs() {
        let set = StatsSet::from_species("pikachu", 50, [0; 6], [31; 6], Nature::Hardy)
            .expect("Pikachu data should be available");
        assert_eq!(set.hp, 110);
        assert_eq!(set.atk, 75);
        assert_eq!(set.def, 60);
        assert_eq!(set.spa, 70);
        assert_eq!(set.spd, 70);
        assert_eq!(set.spe, 110);
    }

    #[test]
    fn nature_modifiers() {
        assert!((stat_modifier(Nature::Adamant, Stat::Atk) - 1.1).abs() < f32::EPSILON);
        assert!((stat_modifier(Nature::Adamant, Stat::Spa) - 0.9).abs() < f32::EPSILON);
        assert_eq!(stat_modifier(Nature::Adamant, Stat::Def), 1.0);
        assert_eq!(stat_modifier(Nature::Hardy, Stat::Atk), 1.0);
        // HP is exempt for every nature.
        assert_eq!(stat_modifier(Nature::Brave, Stat::Hp), 1.0);
    }

    #[test]
    fn stat_formulas_are_monotonic() {
        for level in [1u8, 25, 50, 100] {
            assert!(calc_hp(45, 31, 0, level) >= calc_hp(45, 0, 0, level));
            assert!(calc_hp(45, 0, 252, level) >= calc_hp(45, 0, 0, level));
            assert!(calc_stat(45, 31, 0, level, 1.0) >= calc_stat(45, 0, 0, level, 1.0));
            assert!(calc_stat(45, 0, 252, level, 1.0) >= calc_stat(45, 0, 0, level, 1.0));
        }
        assert!(calc_hp(45, 15, 64, 60) >= calc_hp(45, 15, 64, 59));
        assert!(calc_stat(45, 15, 64, 60, 1.1) >= calc_stat(45, 15, 64, 59, 1.1));
    }

    #[test]
    fn ev_clamp_respects_both_caps() {
        let clamped = clamp_evs([999, 999, 999, 999, 999, 999]);
        assert_eq!(clamped, [252, 252, 6, 0, 0, 0]);
        assert!(clamped.iter().map(|&ev| ev as u16).sum::<u16>() <= MAX_TOTAL_EV);
    }

    #[test]
    fn ev_clamp_truncates_in_spread_order() {
        // Budget runs out inside spAttack; spDefense and speed get nothing.
        let clamped = clamp_evs([100, 252, 100, 252, 252, 252]);
        assert_eq!(clamped, [100, 252, 100, 58, 0, 0]);
    }

    #[test]
    fn ev_clamp_is_idempotent() {
        let once = clamp_evs([300, 252, 252, 252, 10, 0]);
        let raw_again: [u16; 6] = [
            once[0] as u16,
            once[1] as u16,
            once[2] as u16,
            once[3] as u16,
            once[4] as u16,
            once[5] as u16,
        ];
        assert_eq!(clamp_evs(raw_again), once);
    }

    #[test]
    fn ev_yield_respects_budget() {
        let spread = apply_ev_yield([250, 0, 0, 0, 0, 0], [10, 4, 0, 0, 0, 0]);
        assert_eq!(spread, [252, 4, 0, 0, 0, 0]);

        let full = apply_ev_yield([252, 252, 6, 0, 0, 0], [0, 0, 0, 8, 0, 0]);
        assert_eq!(full, [252, 252, 6, 0, 0, 0]);
    }

    #[test]
    fn level_and_iv_guards() {
        assert_eq!(clamp_level(0), 1);
        assert_eq!(clamp_level(101), 100);
        assert_eq!(clamp_ivs([40, 31, 0, 15, 99, 7]), [31, 31, 0, 15, 31, 7]);
    }
}

//! In-memory battle transcript. Events are pipe-delimited lines, cheap to
//! assert against in tests and exportable as JSON for callers.

use serde_json::json;

#[derive(Clone, Debug, Default)]
pub struct BattleLog {
    log: Vec<String>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log_turn(&mut self, turn: u32) {
        self.log.push(format!("|turn|{turn}"));
    }

    pub fn log_hit(&mut self, attacker: &str, target: &str, damage: u16, hp: u16, max_hp: u16) {
        self.log
            .push(format!("|hit|{attacker}|{target}|{damage}|{hp}/{max_hp}"));
    }

    pub fn log_status(&mut self, name: &str, message: &str) {
        self.log.push(format!("|status|{name}|{message}"));
    }

    pub fn log_status_damage(&mut self, name: &str, damage: u16, hp: u16, max_hp: u16) {
        self.log
            .push(format!("|status-damage|{name}|{damage}|{hp}/{max_hp}"));
    }

    pub fn log_stage(&mut self, name: &str, message: &str) {
        self.log.push(format!("|stage|{name}|{message}"));
    }

    pub fn log_faint(&mut self, name: &str) {
        self.log.push(format!("|faint|{name}"));
    }

    pub fn log_win(&mut self, winner: &str) {
        self.log.push(format!("|win|{winner}"));
    }

    pub fn log_tie(&mut self) {
        self.log.push("|tie|".to_string());
    }

    pub fn lines(&self) -> &[String] {
        &self.log
    }

    pub fn to_json(&self) -> serde_json::Value {
        json!({ "log": self.log })
    }
}

use std::path::PathBuf;

use thiserror::Error;

use crate::{credits::CreditLedger, types::Platform};

/// Launch token that unlocks owner mode. Client-side only: anyone who reads
/// the binary can find it. It exists for demo parity, not authorization.
pub const OWNER_TOKEN: &str = "studio-unlimited";

pub fn is_owner_token(token: &str) -> bool {
    token == OWNER_TOKEN
}

/// What the user submitted for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisInput {
    Idea(String),
    Video(PathBuf),
}

/// Why a submission was refused. `OutOfCredits` is the caller's cue to open
/// the pricing surface; the gate itself performs no UI side effect.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateError {
    #[error("an analysis is already running")]
    Busy,

    #[error("no platform selected")]
    NoPlatform,

    #[error("idea text is empty")]
    EmptyIdea,

    #[error("credit balance is exhausted")]
    OutOfCredits,
}

/// Per-session gate in front of the dispatcher: selected platform, credit
/// ledger, and an explicit one-in-flight guard. Exactly one analysis may be
/// running at a time; `begin` enforces that rather than any disabled button.
#[derive(Debug, Clone)]
pub struct Session {
    ledger: CreditLedger,
    platform: Option<Platform>,
    in_flight: bool,
}

impl Session {
    pub fn new(owner_mode: bool) -> Self {
        Self {
            ledger: CreditLedger::new(owner_mode),
            platform: None,
            in_flight: false,
        }
    }

    pub fn ledger(&self) -> &CreditLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut CreditLedger {
        &mut self.ledger
    }

    pub fn select_platform(&mut self, platform: Platform) {
        self.platform = Some(platform);
    }

    pub fn platform(&self) -> Option<Platform> {
        self.platform
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Check every precondition for a new analysis and, if all pass, mark
    /// the session in-flight. Returns the platform the audit targets.
    pub fn begin(&mut self, input: &AnalysisInput) -> Result<Platform, GateError> {
        if self.in_flight {
            return Err(GateError::Busy);
        }

        let platform = self.platform.ok_or(GateError::NoPlatform)?;

        if let AnalysisInput::Idea(idea) = input {
            if idea.trim().is_empty() {
                return Err(GateError::EmptyIdea);
            }
        }

        if !self.ledger.can_spend() {
            return Err(GateError::OutOfCredits);
        }

        self.in_flight = true;
        Ok(platform)
    }

    /// The dispatched analysis succeeded: release the guard and spend one
    /// credit.
    pub fn complete(&mut self) {
        self.in_flight = false;
        self.ledger.spend();
    }

    /// The dispatched analysis failed: release the guard, spend nothing.
    pub fn fail(&mut self) {
        self.in_flight = false;
    }
}

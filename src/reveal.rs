use std::collections::HashSet;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverSpec {
    pub threshold: f64,
    pub root_margin: &'static str,
}

pub const REVEAL_OBSERVER: ObserverSpec = ObserverSpec {
    threshold: 0.1,
    root_margin: "0px 0px -50px 0px",
};

pub const SKILL_BAR_OBSERVER: ObserverSpec = ObserverSpec {
    threshold: 0.5,
    root_margin: "0px",
};

pub const REVEAL_SELECTOR: &str = ".skill-category, .project-card, .stat, .contact-method";
pub const REVEALED_CLASS: &str = "animate-in";
pub const SKILL_BAR_SELECTOR: &str = ".skill-progress";
pub const SKILL_BAR_RESTORE_DELAY: Duration = Duration::from_millis(200);

/// Remembers which watched elements already received the revealed state.
/// Observation keeps running; only the first intersection counts.
#[derive(Debug, Default)]
pub struct RevealSet {
    revealed: HashSet<usize>,
}

impl RevealSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when `key` should be revealed now.
    pub fn on_entry(&mut self, key: usize, intersecting: bool) -> bool {
        intersecting && self.revealed.insert(key)
    }

    pub fn is_revealed(&self, key: usize) -> bool {
        self.revealed.contains(&key)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillBarPlan {
    /// Width applied immediately.
    pub reset_width: &'static str,
    /// Width restored after `delay`.
    pub target_width: String,
    pub delay: Duration,
}

/// One-shot fill animation per skill bar.
#[derive(Debug, Default)]
pub struct SkillBarTrigger {
    fired: HashSet<usize>,
}

impl SkillBarTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the animation plan on the first intersection of `key`; the
    /// caller stops observing the element once a plan is returned.
    pub fn on_entry(&mut self, key: usize, intersecting: bool, current_width: &str) -> Option<SkillBarPlan> {
        if !intersecting || !self.fired.insert(key) {
            return None;
        }

        Some(SkillBarPlan {
            reset_width: "0%",
            target_width: current_width.to_string(),
            delay: SKILL_BAR_RESTORE_DELAY,
        })
    }
}

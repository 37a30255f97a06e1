use std::collections::HashSet;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

pub const CARD_REVEAL: ObserverOptions = ObserverOptions {
    threshold: 0.1,
    root_margin: "0px 0px -50px 0px",
};

pub const SECTION_REVEAL: ObserverOptions = ObserverOptions {
    threshold: 0.1,
    root_margin: "0px 0px -10% 0px",
};

pub const METRICS_TRIGGER: ObserverOptions = ObserverOptions {
    threshold: 0.5,
    root_margin: "0px",
};

pub const REVEAL_KEY_ATTR: &str = "data-reveal-key";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealGroup {
    Card,
    Section,
}

impl RevealGroup {
    pub fn options(self) -> ObserverOptions {
        match self {
            Self::Card => CARD_REVEAL,
            Self::Section => SECTION_REVEAL,
        }
    }

    /// CSS selector of the elements observed for this group.
    pub fn selector(self) -> &'static str {
        match self {
            Self::Card => "[data-reveal-group=\"card\"]",
            Self::Section => "[data-reveal-group=\"section\"]",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Section => "section",
        }
    }
}

pub fn reveal_key(group: RevealGroup, id: &str) -> String {
    format!("{}:{id}", group.as_str())
}

/// Elements that have entered the viewport. Membership never reverts.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    revealed: HashSet<String>,
}

impl RevealTracker {
    pub fn mark_visible(&mut self, key: &str) -> bool {
        if self.revealed.contains(key) {
            return false;
        }
        self.revealed.insert(key.to_string())
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }
}

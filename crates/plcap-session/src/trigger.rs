//! One-shot subscriptions for the "first user interaction" retries.

/// Fires exactly once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OneShot {
    fired: bool,
}

impl OneShot {
    /// Returns `true` on the first call only.
    pub fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }

    #[must_use]
    pub fn has_fired(self) -> bool {
        self.fired
    }
}

/// Which interaction a one-shot retry listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Scroll,
    Click,
}

/// The scroll and click one-shots of a loaded page. They are armed once per
/// document load, not per client-side navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OneShotTriggers {
    scroll: OneShot,
    click: OneShot,
}

impl OneShotTriggers {
    pub fn fire(&mut self, interaction: Interaction) -> bool {
        match interaction {
            Interaction::Scroll => self.scroll.fire(),
            Interaction::Click => self.click.fire(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_interaction_fires_once_independently() {
        let mut triggers = OneShotTriggers::default();
        assert!(triggers.fire(Interaction::Scroll));
        assert!(!triggers.fire(Interaction::Scroll));
        assert!(triggers.fire(Interaction::Click));
        assert!(!triggers.fire(Interaction::Click));
    }
}

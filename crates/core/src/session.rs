use crate::domain::observation::Observation;

/// The most recent observation of this process, used to pre-fill the next
/// cycle's prompts. Owned by the shell and passed where needed.
#[derive(Clone, Debug, Default)]
pub struct SessionMemory {
    last: Option<Observation>,
}

impl SessionMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recall(&self) -> Option<&Observation> {
        self.last.as_ref()
    }

    /// Replaces whatever was stored. Callers validate before remembering.
    pub fn remember(&mut self, observation: Observation) {
        self.last = Some(observation);
    }
}

#[cfg(test)]
mod tests {
    use super::SessionMemory;
    use crate::domain::observation::Observation;

    #[test]
    fn fresh_memory_recalls_nothing() {
        assert!(SessionMemory::new().recall().is_none());
    }

    #[test]
    fn remember_then_recall_round_trips() {
        let mut memory = SessionMemory::new();
        let observation = Observation::new("Lisbon", 21.5, "Sunny");

        memory.remember(observation.clone());

        assert_eq!(memory.recall(), Some(&observation));
    }

    #[test]
    fn remember_overwrites_previous_observation() {
        let mut memory = SessionMemory::new();
        memory.remember(Observation::new("Lisbon", 21.5, "Sunny"));
        memory.remember(Observation::new("Reykjavik", -4.0, "Snow"));

        let recalled = memory.recall().expect("memory holds the latest observation");
        assert_eq!(recalled.city(), "Reykjavik");
        assert_eq!(recalled.temperature_c(), -4.0);
    }
}

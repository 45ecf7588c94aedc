/// One-way reveal state of a `.reveal` element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    /// Feed one intersection observation. Returns `true` exactly when this
    /// observation reveals the element.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        match (*self, intersecting) {
            (RevealState::Hidden, true) => {
                *self = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(self) -> bool {
        self == RevealState::Revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_never_reverts() {
        let mut state = RevealState::default();
        assert!(!state.observe(false));
        assert!(!state.is_revealed());

        assert!(state.observe(true));
        assert!(state.is_revealed());

        assert!(!state.observe(false));
        assert!(!state.observe(true));
        assert!(state.is_revealed());
    }
}

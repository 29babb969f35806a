use std::fmt;

/// Which arrangement the scene objects are heading for.
///
/// There is no in-between value: transitions come from the animator easing
/// toward whichever target the current mode selects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Formed,
    Chaos,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Formed => Mode::Chaos,
            Mode::Chaos => Mode::Formed,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Formed => f.write_str("formed"),
            Mode::Chaos => f.write_str("chaos"),
        }
    }
}

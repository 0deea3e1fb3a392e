use serde::{Deserialize, Serialize};

/// How a host constrains one measurement axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MeasureMode {
    /// The host dictates the size.
    Exact,
    /// No constraint; the component picks its intrinsic size.
    #[default]
    Unbounded,
    /// The component may pick any size up to the constraint.
    AtMost,
}

/// Constraint for one axis: a mode plus the size it applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MeasureSpec {
    pub mode: MeasureMode,
    pub size: i32,
}

impl MeasureSpec {
    #[must_use]
    pub const fn new(mode: MeasureMode, size: i32) -> Self {
        Self { mode, size }
    }

    #[must_use]
    pub const fn exact(size: i32) -> Self {
        Self::new(MeasureMode::Exact, size)
    }

    #[must_use]
    pub const fn at_most(size: i32) -> Self {
        Self::new(MeasureMode::AtMost, size)
    }

    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(MeasureMode::Unbounded, 0)
    }

    /// Resolves this constraint against the component's intrinsic size.
    #[must_use]
    pub fn resolve(self, intrinsic: i32) -> i32 {
        match self.mode {
            MeasureMode::Exact => self.size,
            MeasureMode::Unbounded => intrinsic,
            MeasureMode::AtMost => intrinsic.min(self.size),
        }
    }
}

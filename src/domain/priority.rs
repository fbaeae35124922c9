use super::error::DomainError;
use std::fmt;

/// Priority of a task or project according to the Eisenhower matrix.
///
/// The quadrant encodes (importance, urgency) as a pair:
/// 1 = important & urgent, 2 = important, 3 = urgent, 4 = neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Priority {
    quadrant: u8,
}

impl Priority {
    /// Default priority: not important, not urgent (quadrant 4)
    pub fn new() -> Self {
        Self { quadrant: 4 }
    }

    /// Priority for the given Eisenhower quadrant, 1 through 4
    pub fn from_quadrant(quadrant: i32) -> Result<Self, DomainError> {
        if !(1..=4).contains(&quadrant) {
            return Err(DomainError::InvalidPriorityLevel(quadrant));
        }
        Ok(Self {
            quadrant: quadrant as u8,
        })
    }

    pub fn quadrant(&self) -> u8 {
        self.quadrant
    }

    pub fn is_important(&self) -> bool {
        self.quadrant == 1 || self.quadrant == 2
    }

    /// Update importance, leaving urgency unchanged
    pub fn set_important(&mut self, important: bool) {
        if important && !self.is_important() {
            self.quadrant -= 2;
        } else if !important && self.is_important() {
            self.quadrant += 2;
        }
    }

    pub fn is_urgent(&self) -> bool {
        self.quadrant == 1 || self.quadrant == 3
    }

    /// Update urgency, leaving importance unchanged
    pub fn set_urgent(&mut self, urgent: bool) {
        if urgent && !self.is_urgent() {
            self.quadrant -= 1;
        } else if !urgent && self.is_urgent() {
            self.quadrant += 1;
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.quadrant {
            1 => "IMPORTANT & URGENT",
            2 => "IMPORTANT",
            3 => "URGENT",
            _ => "DEFAULT",
        };
        f.write_str(label)
    }
}

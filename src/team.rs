use std::fmt;

/// One row of the ranked tournament field.
///
/// Fields arrive sorted by descending strength (best team first); the
/// seed assigner consumes them in that order.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldEntry {
    pub school: String,

    /// Blended efficiency score used only for ranking the field.
    pub strength: f64,
}

impl FieldEntry {
    pub fn new(school: impl Into<String>, strength: f64) -> Self {
        FieldEntry {
            school: school.into(),
            strength,
        }
    }
}

impl fmt::Display for FieldEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2}", self.school, self.strength)
    }
}

//! Rotation instructions and their file-line rendering

/// Principal rotation axis offered by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Unit direction vector exactly as written to the configuration file.
    pub fn unit_vector(&self) -> &'static str {
        match self {
            Axis::X => "1 0 0",
            Axis::Y => "0 1 0",
            Axis::Z => "0 0 1",
        }
    }

    /// The single-letter code the operator types for this axis.
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One rotation instruction for the downstream dice game (Value Object)
///
/// Angle and vector text are carried verbatim from operator input. The file
/// format is raw pass-through; whether the tokens are numeric is the
/// consumer's concern, not enforced here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rotation {
    /// Rotation about a principal axis.
    AboutAxis { axis: Axis, angle: String },
    /// Rotation about a free direction vector (raw operator text).
    AboutVector { vector: String, angle: String },
    /// Sentinel: the consumer picks axis and angle itself.
    Random,
}

impl Rotation {
    /// Rotation about a principal axis by the given raw angle text.
    pub fn about_axis(axis: Axis, angle: impl Into<String>) -> Self {
        Rotation::AboutAxis {
            axis,
            angle: angle.into(),
        }
    }

    /// Rotation about a free direction vector by the given raw angle text.
    pub fn about_vector(vector: impl Into<String>, angle: impl Into<String>) -> Self {
        Rotation::AboutVector {
            vector: vector.into(),
            angle: angle.into(),
        }
    }

    /// Check if this is the `RANDOM` sentinel.
    pub fn is_random(&self) -> bool {
        matches!(self, Rotation::Random)
    }

    /// The `ROT` line exactly as it appears in the configuration file.
    ///
    /// Fixed rotations carry the `DEG` unit suffix; the sentinel carries
    /// neither angle nor unit.
    pub fn conf_line(&self) -> String {
        match self {
            Rotation::AboutAxis { axis, angle } => {
                format!("ROT {} {} DEG", axis.unit_vector(), angle)
            }
            Rotation::AboutVector { vector, angle } => {
                format!("ROT {} {} DEG", vector, angle)
            }
            Rotation::Random => "ROT RANDOM".to_string(),
        }
    }
}

impl std::fmt::Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.conf_line())
    }
}

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    /// A bare number (`0`, `1.5`).
    #[default]
    Number,
    /// CSS pixels.
    Px,
    /// Relative to the element's font size.
    Em,
    /// Relative to the root font size.
    Rem,
    /// Percentage of the parent's dimension.
    Percent,
    /// Percentage of viewport width.
    ViewWidth,
    /// Percentage of viewport height.
    ViewHeight,
    /// Automatic sizing based on content.
    Auto,
}

impl Unit {
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Number | Unit::Auto => "",
            Unit::Px => "px",
            Unit::Em => "em",
            Unit::Rem => "rem",
            Unit::Percent => "%",
            Unit::ViewWidth => "vw",
            Unit::ViewHeight => "vh",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Scalar {
    pub value: f64,
    pub unit: Unit,
}

impl Scalar {
    pub const AUTO: Self = Self {
        value: 0.0,
        unit: Unit::Auto,
    };
    pub const ZERO: Self = Self {
        value: 0.0,
        unit: Unit::Number,
    };

    pub fn px(value: f64) -> Self {
        Self {
            value,
            unit: Unit::Px,
        }
    }

    pub fn percent(value: f64) -> Self {
        Self {
            value,
            unit: Unit::Percent,
        }
    }

    pub fn is_auto(&self) -> bool {
        self.unit == Unit::Auto
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_auto() {
            return f.write_str("auto");
        }
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

/// Four-sided box values (margin or padding).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Edges {
    pub top: Scalar,
    pub right: Scalar,
    pub bottom: Scalar,
    pub left: Scalar,
}

impl Edges {
    pub fn all(value: Scalar) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn vertical_horizontal(vertical: Scalar, horizontal: Scalar) -> Self {
        Self {
            top: vertical,
            bottom: vertical,
            left: horizontal,
            right: horizontal,
        }
    }
}

impl fmt::Display for Edges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.top == self.bottom && self.left == self.right {
            if self.top == self.left {
                return write!(f, "{}", self.top);
            }
            return write!(f, "{} {}", self.top, self.right);
        }
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

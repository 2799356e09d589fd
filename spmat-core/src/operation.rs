//! Arithmetic operation selector

use crate::error::MatrixError;

/// The arithmetic operations supported between two sparse matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    /// All operations in menu order
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    /// Noun used in error messages
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "addition",
            Operation::Subtract => "subtraction",
            Operation::Multiply => "multiplication",
        }
    }

    /// Word joining the two input names in a result file name
    pub const fn file_infix(self) -> &'static str {
        match self {
            Operation::Add => "plus",
            Operation::Subtract => "minus",
            Operation::Multiply => "times",
        }
    }

    /// 1-based position in the interactive menu
    pub const fn menu_index(self) -> u8 {
        match self {
            Operation::Add => 1,
            Operation::Subtract => 2,
            Operation::Multiply => 3,
        }
    }

    /// Check whether operands of the given shapes can be combined
    pub const fn operands_compatible(self, left: (usize, usize), right: (usize, usize)) -> bool {
        match self {
            Operation::Add | Operation::Subtract => left.0 == right.0 && left.1 == right.1,
            Operation::Multiply => left.1 == right.0,
        }
    }

    /// Validate operand shapes and return the shape of the result
    pub const fn result_dimensions(
        self,
        left: (usize, usize),
        right: (usize, usize),
    ) -> Result<(usize, usize), MatrixError> {
        if !self.operands_compatible(left, right) {
            return Err(MatrixError::DimensionMismatch {
                operation: self,
                left,
                right,
            });
        }

        match self {
            Operation::Add | Operation::Subtract => Ok(left),
            Operation::Multiply => Ok((left.0, right.1)),
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Operation::Add => write!(f, "add"),
            Operation::Subtract => write!(f, "subtract"),
            Operation::Multiply => write!(f, "multiply"),
        }
    }
}

impl core::str::FromStr for Operation {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let is_one_of = |names: &[&str]| names.iter().any(|name| s.eq_ignore_ascii_case(name));

        if is_one_of(&["1", "add", "plus"]) {
            Ok(Operation::Add)
        } else if is_one_of(&["2", "subtract", "sub", "minus"]) {
            Ok(Operation::Subtract)
        } else if is_one_of(&["3", "multiply", "mul", "times"]) {
            Ok(Operation::Multiply)
        } else {
            Err(MatrixError::UnknownOperation)
        }
    }
}

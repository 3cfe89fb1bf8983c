//! The built-in function table.
//!
//! A closed, tagged enumeration rather than a registry of closures: dispatch
//! is a plain `match`, the supported set is checkable at compile time, and
//! the table is immutable process-wide.

/// Names accepted as function calls, for documentation and request
/// validation. Lookup itself goes through [`Function::from_name`] and is
/// case-sensitive.
pub const FUNCTION_NAMES: &[&str] = &[
    "sin", "cos", "tan", "cosec", "sec", "cot", "log", "log10", "log2", "sqrt", "max", "min",
];

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Cosec,
    Sec,
    Cot,
    /// Natural logarithm.
    Log,
    Log10,
    Log2,
    Sqrt,
    Max,
    Min,
}

impl Function {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Function::Sin),
            "cos" => Some(Function::Cos),
            "tan" => Some(Function::Tan),
            "cosec" => Some(Function::Cosec),
            "sec" => Some(Function::Sec),
            "cot" => Some(Function::Cot),
            "log" => Some(Function::Log),
            "log10" => Some(Function::Log10),
            "log2" => Some(Function::Log2),
            "sqrt" => Some(Function::Sqrt),
            "max" => Some(Function::Max),
            "min" => Some(Function::Min),
            _ => None,
        }
    }

    /// The fixed number of arguments the function consumes.
    pub fn arity(self) -> usize {
        match self {
            Function::Max | Function::Min => 2,
            _ => 1,
        }
    }

    /// Applies the function to exactly `arity` arguments. The caller
    /// enforces the arity before calling.
    pub fn apply(self, args: &[f64]) -> f64 {
        debug_assert_eq!(args.len(), self.arity());
        match self {
            Function::Sin => args[0].sin(),
            Function::Cos => args[0].cos(),
            Function::Tan => args[0].tan(),
            Function::Cosec => args[0].sin().recip(),
            Function::Sec => args[0].cos().recip(),
            Function::Cot => args[0].tan().recip(),
            Function::Log => args[0].ln(),
            Function::Log10 => args[0].log10(),
            Function::Log2 => args[0].log2(),
            Function::Sqrt => args[0].sqrt(),
            Function::Max => args[0].max(args[1]),
            Function::Min => args[0].min(args[1]),
        }
    }
}

use crate::error::InvalidBooleanLiteral;

const TRUTHY: [&str; 5] = ["yes", "true", "t", "y", "1"];
const FALSY: [&str; 5] = ["no", "false", "f", "n", "0"];

/// Something that can be read as a strict yes/no.
///
/// Native booleans pass through untouched; strings are matched
/// case-insensitively against the literal sets above.
pub trait BoolLiteral {
    fn to_bool(&self) -> Result<bool, InvalidBooleanLiteral>;
}

impl BoolLiteral for bool {
    fn to_bool(&self) -> Result<bool, InvalidBooleanLiteral> {
        Ok(*self)
    }
}

impl BoolLiteral for str {
    fn to_bool(&self) -> Result<bool, InvalidBooleanLiteral> {
        let lowered = self.to_lowercase();
        if TRUTHY.contains(&lowered.as_str()) {
            Ok(true)
        } else if FALSY.contains(&lowered.as_str()) {
            Ok(false)
        } else {
            Err(InvalidBooleanLiteral(self.to_string()))
        }
    }
}

impl BoolLiteral for String {
    fn to_bool(&self) -> Result<bool, InvalidBooleanLiteral> {
        self.as_str().to_bool()
    }
}

/// Parse a boolean or a boolean-ish string.
pub fn parse_bool<T: BoolLiteral + ?Sized>(v: &T) -> Result<bool, InvalidBooleanLiteral> {
    v.to_bool()
}

/// `clap` value parser: `#[arg(value_parser = bool_flag)]`.
pub fn bool_flag(raw: &str) -> Result<bool, InvalidBooleanLiteral> {
    parse_bool(raw)
}

use std::fmt;
use std::str::FromStr;

// One byte of the memory image, rendered as exactly two lowercase hex digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HexToken(u8);

impl HexToken {
    pub const ZERO: HexToken = HexToken(0x00);

    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub const fn to_u8(self) -> u8 {
        self.0
    }
}

impl fmt::Display for HexToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}", self.0)
    }
}

impl FromStr for HexToken {
    type Err = String;

    fn from_str(value: &str) -> Result<HexToken, String> {
        // from_str_radix alone would accept a sign prefix like "+f".
        if value.len() != 2 || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("Hex token must be two hex digits, but was {value:?}."));
        }

        u8::from_str_radix(value, 16)
            .map(HexToken)
            .map_err(|err| err.to_string())
    }
}

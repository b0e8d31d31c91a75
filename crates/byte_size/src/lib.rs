use std::fmt;
use std::str::FromStr;

/// Binary (power of 1024) byte units.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum ByteUnit {
    B,
    KB,
    MB,
    GB,
    TB,
    PB,
}

pub const ALL_UNITS: [ByteUnit; 6] = [
    ByteUnit::B,
    ByteUnit::KB,
    ByteUnit::MB,
    ByteUnit::GB,
    ByteUnit::TB,
    ByteUnit::PB,
];

impl ByteUnit {
    pub const fn bytes(self) -> u64 {
        match self {
            Self::B => 1,
            Self::KB => 1 << 10,
            Self::MB => 1 << 20,
            Self::GB => 1 << 30,
            Self::TB => 1 << 40,
            Self::PB => 1 << 50,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::B => "B",
            Self::KB => "KB",
            Self::MB => "MB",
            Self::GB => "GB",
            Self::TB => "TB",
            Self::PB => "PB",
        }
    }
}

impl fmt::Display for ByteUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ByteUnit {
    type Err = ByteSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = match s.trim().to_ascii_lowercase().as_str() {
            "b" => Self::B,
            "kb" | "kib" => Self::KB,
            "mb" | "mib" => Self::MB,
            "gb" | "gib" => Self::GB,
            "tb" | "tib" => Self::TB,
            "pb" | "pib" => Self::PB,
            _ => return Err(ByteSizeError::UnknownUnit(s.to_string())),
        };
        Ok(unit)
    }
}

#[derive(Debug, thiserror::Error, Eq, PartialEq)]
pub enum ByteSizeError {
    #[error("{count} {unit} does not fit in u64 bytes")]
    Overflow { count: u64, unit: ByteUnit },
    #[error("unknown byte unit: {0:?}")]
    UnknownUnit(String),
}

/// Whole number of `unit`s in `bytes`, rounded down.
///
/// `convert_bytes_to(2_147_483_648, ByteUnit::GB) == 2`.
#[inline]
pub fn convert_bytes_to(bytes: u64, unit: ByteUnit) -> u64 {
    bytes / unit.bytes()
}

/// Number of bytes in `count` `unit`s.
#[inline]
pub fn convert_to_bytes(count: u64, unit: ByteUnit) -> Result<u64, ByteSizeError> {
    count
        .checked_mul(unit.bytes())
        .ok_or(ByteSizeError::Overflow { count, unit })
}

// File: crates/chart-spec/src/ticks.rs
// Summary: Tick configuration enums shared by axes and color bars.

use serde::{Serialize, Serializer};

use crate::encoding::primitive_enum;

primitive_enum! {
    pub enum TickMode {
        Auto => "auto",
        Linear => "linear",
        Array => "array",
    }
}

primitive_enum! {
    /// Where tick marks are drawn. `Off` is the engine's empty string, which
    /// means "no ticks" and is emitted as-is.
    pub enum Ticks {
        Outside => "outside",
        Inside => "inside",
        Off => "",
    }
}

primitive_enum! {
    pub enum ExponentFormat {
        None => "none",
        LowerE => "e",
        UpperE => "E",
        Power => "power",
        Si => "SI",
        B => "B",
    }
}

primitive_enum! {
    /// Which tick labels carry the exponent, prefix or suffix.
    pub enum ShowTickAffix {
        All => "all",
        First => "first",
        Last => "last",
        None => "none",
    }
}

/// Tick step: a number, or a period code such as `"M1"` (monthly) or `"L0.5"`.
#[derive(Clone, Debug, PartialEq)]
pub enum DTick {
    Step(f64),
    Code(String),
}

impl DTick {
    /// Step of `n` months on a date axis.
    pub fn months(n: u32) -> Self { DTick::Code(format!("M{n}")) }
}

impl From<f64> for DTick {
    fn from(step: f64) -> Self { DTick::Step(step) }
}

impl Serialize for DTick {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            DTick::Step(v) => serializer.serialize_f64(*v),
            DTick::Code(c) => serializer.serialize_str(c),
        }
    }
}

// File: crates/chart-spec/src/types.rs
// Summary: Shared value types (data points, scalar-or-array values, anchors, margins) and size constants.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Serialize, Serializer};

use crate::encoding::primitive_enum;

/// Default figure width in pixels, as assumed by the engine.
pub const WIDTH: u32 = 700;
/// Default figure height in pixels, as assumed by the engine.
pub const HEIGHT: u32 = 450;

/// One data value on a coordinate array: number, category label, or date.
#[derive(Clone, Debug, PartialEq)]
pub enum Datum {
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl Serialize for Datum {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Datum::Int(n) => serializer.serialize_i64(*n),
            Datum::Float(f) => serializer.serialize_f64(*f),
            Datum::Text(s) => serializer.serialize_str(s),
            Datum::Date(d) => serializer.collect_str(&d.format("%Y-%m-%d")),
            Datum::DateTime(dt) => {
                // The engine parses "YYYY-MM-DD HH:MM:SS[.ffffff]".
                if dt.nanosecond() == 0 {
                    serializer.collect_str(&dt.format("%Y-%m-%d %H:%M:%S"))
                } else {
                    serializer.collect_str(&dt.format("%Y-%m-%d %H:%M:%S%.6f"))
                }
            }
        }
    }
}

impl From<f64> for Datum {
    fn from(v: f64) -> Self { Datum::Float(v) }
}

impl From<f32> for Datum {
    fn from(v: f32) -> Self { Datum::Float(v as f64) }
}

impl From<i64> for Datum {
    fn from(v: i64) -> Self { Datum::Int(v) }
}

impl From<i32> for Datum {
    fn from(v: i32) -> Self { Datum::Int(v as i64) }
}

impl From<usize> for Datum {
    fn from(v: usize) -> Self { Datum::Int(v as i64) }
}

impl From<&str> for Datum {
    fn from(v: &str) -> Self { Datum::Text(v.to_owned()) }
}

impl From<String> for Datum {
    fn from(v: String) -> Self { Datum::Text(v) }
}

impl From<NaiveDate> for Datum {
    fn from(v: NaiveDate) -> Self { Datum::Date(v) }
}

impl From<NaiveDateTime> for Datum {
    fn from(v: NaiveDateTime) -> Self { Datum::DateTime(v) }
}

/// Collect anything convertible into data values.
pub fn data<I, T>(values: I) -> Vec<Datum>
where
    I: IntoIterator<Item = T>,
    T: Into<Datum>,
{
    values.into_iter().map(Into::into).collect()
}

/// A value that applies either uniformly or per data point.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Dim<T> {
    Scalar(T),
    Vector(Vec<T>),
}

impl<T> Dim<T> {
    pub fn len(&self) -> usize {
        match self {
            Dim::Scalar(_) => 1,
            Dim::Vector(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

impl<T> From<Vec<T>> for Dim<T> {
    fn from(v: Vec<T>) -> Self { Dim::Vector(v) }
}

impl From<f64> for Dim<f64> {
    fn from(v: f64) -> Self { Dim::Scalar(v) }
}

primitive_enum! {
    /// Horizontal anchor of a positioned element.
    pub enum XAnchor {
        Auto => "auto",
        Left => "left",
        Center => "center",
        Right => "right",
    }
}

primitive_enum! {
    /// Vertical anchor of a positioned element.
    pub enum YAnchor {
        Auto => "auto",
        Top => "top",
        Middle => "middle",
        Bottom => "bottom",
    }
}

primitive_enum! {
    pub enum Orientation {
        Vertical => "v",
        Horizontal => "h",
    }
}

/// Plot margins, in pixels. Wire keys are the engine's single-letter abbreviations.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Margin {
    #[serde(rename = "l", skip_serializing_if = "Option::is_none")]
    pub left: Option<u32>,
    #[serde(rename = "r", skip_serializing_if = "Option::is_none")]
    pub right: Option<u32>,
    #[serde(rename = "t", skip_serializing_if = "Option::is_none")]
    pub top: Option<u32>,
    #[serde(rename = "b", skip_serializing_if = "Option::is_none")]
    pub bottom: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pad: Option<u32>,
    #[serde(rename = "autoexpand", skip_serializing_if = "Option::is_none")]
    pub auto_expand: Option<bool>,
}

impl Margin {
    /// Margins with all four sides set.
    pub fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left: Some(left), right: Some(right), top: Some(top), bottom: Some(bottom), ..Default::default() }
    }
}

/// Padding around a title block, in pixels.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Pad {
    #[serde(rename = "t", skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(rename = "r", skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
    #[serde(rename = "b", skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
    #[serde(rename = "l", skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
}

/// Fractional placement inside the plotting area.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Domain {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
}

//! Decoding of archiver retrieval payloads.
//!
//! The retrieval service answers a `getData.json` request with a JSON array
//! of records, one per signal:
//!
//! ```json
//! [{"meta": {"name": "LabS-MCAG:MC-MCU-06:PTPOffset"},
//!   "data": [{"secs": 1709208000, "nanos": 250000000, "val": 12.0}]}]
//! ```
//!
//! Only the first record is used. Every point must carry numeric `secs` and
//! `val` fields; `nanos` is optional. A single bad point rejects the whole
//! payload rather than being skipped or defaulted.

use crate::core::{Sample, Series};
use crate::error::{AnomalyError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::io::Read;

/// A decoded signal ready for detection.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalData {
    /// Signal name from the record metadata, if present.
    pub name: Option<String>,
    pub series: Series,
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    meta: RawMeta,
    data: Vec<RawPoint>,
}

#[derive(Debug, Default, Deserialize)]
struct RawMeta {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawPoint {
    secs: Option<Value>,
    nanos: Option<Value>,
    val: Option<Value>,
}

/// Decode a payload held in memory.
pub fn decode_payload(json: &str) -> Result<SignalData> {
    let records: Vec<RawRecord> = serde_json::from_str(json)?;
    decode_records(records)
}

/// Decode a payload from any reader, such as a file or response body.
pub fn decode_reader<R: Read>(reader: R) -> Result<SignalData> {
    let records: Vec<RawRecord> = serde_json::from_reader(reader)?;
    decode_records(records)
}

fn decode_records(records: Vec<RawRecord>) -> Result<SignalData> {
    let record = records.into_iter().next().ok_or(AnomalyError::EmptyData)?;

    let samples = record
        .data
        .iter()
        .enumerate()
        .map(|(index, point)| decode_point(index, point))
        .collect::<Result<Vec<Sample>>>()?;

    Ok(SignalData {
        name: record.meta.name,
        series: Series::from_samples(samples)?,
    })
}

fn decode_point(index: usize, point: &RawPoint) -> Result<Sample> {
    let secs = required_number(index, "secs", point.secs.as_ref())?;
    let val = required_number(index, "val", point.val.as_ref())?;
    let nanos = match point.nanos.as_ref() {
        Some(v) => number(index, "nanos", v)?,
        None => 0.0,
    };
    Ok(Sample::new(secs + nanos * 1e-9, val))
}

fn required_number(index: usize, field: &str, value: Option<&Value>) -> Result<f64> {
    let value = value.ok_or_else(|| AnomalyError::MalformedSample {
        index,
        reason: format!("missing field `{field}`"),
    })?;
    number(index, field, value)
}

fn number(index: usize, field: &str, value: &Value) -> Result<f64> {
    value.as_f64().ok_or_else(|| AnomalyError::MalformedSample {
        index,
        reason: format!("field `{field}` is not a number: {value}"),
    })
}

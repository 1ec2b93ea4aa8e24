//! Typed decoding of stored run documents.
//!
//! A stored run is a JSON object as written by the persistence layer:
//!
//! ```json
//! {
//!   "id": "run-42",
//!   "name": "Tuesday tempo",
//!   "samples": [
//!     { "latitude": 0.0, "longitude": 0.0, "timestamp": 0.0,
//!       "altitude": 50.0, "horizontalAccuracy": 5.0 }
//!   ],
//!   "heartRate": [ { "startTime": 0.0, "endTime": 5.0, "bpm": 120 } ]
//! }
//! ```
//!
//! Required fields are checked explicitly and reported as decode errors. The
//! only defaults are `name` (absent), `altitude` (0), `heartRate` (empty) and
//! a heart-rate sample's `endTime` (`startTime` + 5 s).

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{OptionExt, Result, TelemetryError};
use crate::heart_rate::HeartRateSample;
use crate::{GeoSample, GpsPoint};

/// Duration assumed for a heart-rate reading stored without an end time.
pub const DEFAULT_HEART_RATE_SAMPLE_SECONDS: f64 = 5.0;

const RUN: &str = "run";
const SAMPLE: &str = "sample";
const HEART_RATE: &str = "heart rate sample";

/// A decoded stored run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRun {
    pub id: String,
    pub name: Option<String>,
    pub samples: Vec<GeoSample>,
    pub heart_rate: Vec<HeartRateSample>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRun {
    id: Option<String>,
    name: Option<String>,
    samples: Option<Vec<RawSample>>,
    heart_rate: Option<Vec<RawHeartRate>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSample {
    latitude: Option<f64>,
    longitude: Option<f64>,
    timestamp: Option<f64>,
    altitude: Option<f64>,
    horizontal_accuracy: Option<f64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawHeartRate {
    start_time: Option<f64>,
    end_time: Option<f64>,
    bpm: Option<f64>,
}

impl RawSample {
    fn decode(self, index: usize) -> Result<GeoSample> {
        let point = GpsPoint::new(
            self.latitude.ok_or_missing(SAMPLE, "latitude")?,
            self.longitude.ok_or_missing(SAMPLE, "longitude")?,
        );
        if !point.is_valid() {
            return Err(TelemetryError::decode(
                SAMPLE,
                format!(
                    "sample {} has out-of-range coordinates ({}, {})",
                    index, point.latitude, point.longitude
                ),
            ));
        }

        let timestamp = self.timestamp.ok_or_missing(SAMPLE, "timestamp")?;
        let mut sample = GeoSample::new(point, timestamp, self.altitude.unwrap_or(0.0));
        sample.horizontal_accuracy = self.horizontal_accuracy;
        Ok(sample)
    }
}

impl RawHeartRate {
    fn decode(self, index: usize) -> Result<HeartRateSample> {
        let start = self.start_time.ok_or_missing(HEART_RATE, "startTime")?;
        let bpm = self.bpm.ok_or_missing(HEART_RATE, "bpm")?;
        if !(bpm > 0.0) || !bpm.is_finite() {
            return Err(TelemetryError::decode(
                HEART_RATE,
                format!("sample {} has invalid bpm {}", index, bpm),
            ));
        }
        let end = self
            .end_time
            .unwrap_or(start + DEFAULT_HEART_RATE_SAMPLE_SECONDS);
        Ok(HeartRateSample::new(start, end, bpm))
    }
}

/// Decode a stored run from JSON.
///
/// Samples must strictly increase in time.
pub fn decode_run(json: &str) -> Result<StoredRun> {
    let raw: RawRun = serde_json::from_str(json)?;
    decode_raw(raw).inspect_err(|e| warn!("[Documents] {}", e))
}

fn decode_raw(raw: RawRun) -> Result<StoredRun> {
    let id = raw.id.ok_or_missing(RUN, "id")?;
    if id.is_empty() {
        return Err(TelemetryError::decode(RUN, "empty `id`"));
    }

    let samples = raw
        .samples
        .ok_or_missing(RUN, "samples")?
        .into_iter()
        .enumerate()
        .map(|(i, s)| s.decode(i))
        .collect::<Result<Vec<_>>>()?;

    if let Some(i) = samples
        .windows(2)
        .position(|w| !(w[1].timestamp > w[0].timestamp))
    {
        return Err(TelemetryError::decode(
            RUN,
            format!("sample {} does not advance in time", i + 1),
        ));
    }

    let heart_rate = raw
        .heart_rate
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(i, s)| s.decode(i))
        .collect::<Result<Vec<_>>>()?;

    Ok(StoredRun {
        id,
        name: raw.name,
        samples,
        heart_rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_minimal_run() {
        let run = decode_run(
            r#"{"id":"r1","samples":[
                {"latitude":0,"longitude":0,"timestamp":0,"altitude":50},
                {"latitude":0,"longitude":0.01,"timestamp":60}
            ]}"#,
        )
        .unwrap();

        assert_eq!(run.id, "r1");
        assert_eq!(run.name, None);
        assert_eq!(run.samples.len(), 2);
        assert_eq!(run.samples[0].altitude, 50.0);
        assert_eq!(run.samples[1].altitude, 0.0);
        assert!(run.heart_rate.is_empty());
    }

    #[test]
    fn test_heart_rate_end_time_fallback() {
        let run = decode_run(
            r#"{"id":"r1","samples":[],"heartRate":[
                {"startTime":10,"endTime":12,"bpm":130},
                {"startTime":12,"bpm":140}
            ]}"#,
        )
        .unwrap();

        assert_eq!(run.heart_rate[0].duration(), 2.0);
        assert_eq!(run.heart_rate[1].end_time, 17.0);
    }

    #[test]
    fn test_missing_required_fields() {
        let err = decode_run(r#"{"samples":[]}"#).unwrap_err();
        assert!(err.to_string().contains("`id`"));

        let err = decode_run(r#"{"id":"r1"}"#).unwrap_err();
        assert!(err.to_string().contains("`samples`"));

        let err = decode_run(r#"{"id":"r1","samples":[{"latitude":0,"timestamp":0}]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("`longitude`"));

        let err = decode_run(r#"{"id":"r1","samples":[],"heartRate":[{"startTime":0}]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("`bpm`"));
    }

    #[test]
    fn test_invalid_values() {
        let err = decode_run(
            r#"{"id":"r1","samples":[{"latitude":95,"longitude":0,"timestamp":0}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, TelemetryError::Decode { .. }));

        let err = decode_run(
            r#"{"id":"r1","samples":[
                {"latitude":0,"longitude":0,"timestamp":5},
                {"latitude":0,"longitude":0.001,"timestamp":5}
            ]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("sample 1"));

        let err = decode_run(r#"{"id":"","samples":[]}"#).unwrap_err();
        assert!(matches!(err, TelemetryError::Decode { .. }));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(decode_run("{not json"), Err(TelemetryError::Json(_))));
    }
}

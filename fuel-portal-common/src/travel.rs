use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One record of a vehicle trip. The `date` and `total_km` fields are
/// assigned by the backend and never submitted by the client.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TravelLogEntry {
    pub date: NaiveDateTime,
    pub meter_start: f64,
    pub meter_end: f64,
    pub official_km: f64,
    pub private_km: f64,
    pub remarks: String,
    pub total_km: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreateTravelRequest {
    pub meter_start: f64,
    pub meter_end: f64,
    pub official_km: f64,
    pub private_km: f64,
    pub remarks: String,
}

impl CreateTravelRequest {
    /// Build a request from raw form input. Returns [None] if any of the
    /// numeric fields does not parse, leaving the caller to keep the form
    /// state untouched.
    pub fn parse(
        meter_start: &str,
        meter_end: &str,
        official_km: &str,
        private_km: &str,
        remarks: &str,
    ) -> Option<Self> {
        Some(Self {
            meter_start: parse_km(meter_start)?,
            meter_end: parse_km(meter_end)?,
            official_km: parse_km(official_km)?,
            private_km: parse_km(private_km)?,
            remarks: remarks.to_owned(),
        })
    }
}

fn parse_km(value: &str) -> Option<f64> {
    value.trim().parse().ok()
}

/// Display preview of the distance covered between two odometer readings.
/// Returns `0.0` unless both inputs parse as numbers, otherwise the
/// difference clamped at zero. The inputs themselves are not clamped, only
/// the result, and no rounding is applied. The authoritative total is
/// whatever the backend stores for the submitted entry.
pub fn compute_total_km(meter_start: &str, meter_end: &str) -> f64 {
    let (Some(start), Some(end)) = (parse_km(meter_start), parse_km(meter_end)) else {
        return 0.0;
    };
    let total = end - start;
    if total >= 0.0 {
        total
    } else {
        0.0
    }
}

#[cfg(test)]
mod test {
    use rstest::rstest;

    use super::{compute_total_km, CreateTravelRequest, TravelLogEntry};

    #[rstest]
    #[case::forward("100", "150", 50.0)]
    #[case::zero_distance("250", "250", 0.0)]
    #[case::backward_clamped("150", "100", 0.0)]
    #[case::fractional("100.5", "150.25", 49.75)]
    #[case::negative_inputs("-10", "-4", 6.0)]
    #[case::missing_start("", "80", 0.0)]
    #[case::missing_end("80", "", 0.0)]
    #[case::both_missing("", "", 0.0)]
    #[case::non_numeric("abc", "150", 0.0)]
    #[case::surrounding_whitespace(" 100 ", " 150 ", 50.0)]
    fn compute_total_km_should_clamp_result_only(
        #[case] meter_start: &str,
        #[case] meter_end: &str,
        #[case] expected: f64,
    ) {
        assert_eq!(compute_total_km(meter_start, meter_end), expected);
    }

    #[test]
    fn compute_total_km_should_preserve_float_precision() {
        let total = compute_total_km("0.1", "0.3");
        assert_eq!(total, 0.3 - 0.1);
    }

    #[test]
    fn create_request_should_parse_when_numeric_fields_valid() {
        let request = CreateTravelRequest::parse("100", "150", "30", "20", "site visit")
            .expect("Could not parse a valid travel form");

        assert_eq!(request.meter_start, 100.0);
        assert_eq!(request.meter_end, 150.0);
        assert_eq!(request.official_km, 30.0);
        assert_eq!(request.private_km, 20.0);
        assert_eq!(request.remarks, "site visit");
    }

    #[rstest]
    #[case::empty_meter_start("", "150", "30", "20")]
    #[case::non_numeric_official("100", "150", "thirty", "20")]
    #[case::empty_private("100", "150", "30", "")]
    fn create_request_should_not_parse_when_numeric_field_invalid(
        #[case] meter_start: &str,
        #[case] meter_end: &str,
        #[case] official_km: &str,
        #[case] private_km: &str,
    ) {
        let request =
            CreateTravelRequest::parse(meter_start, meter_end, official_km, private_km, "");
        assert!(request.is_none());
    }

    #[test]
    fn travel_log_entry_should_deserialize_from_backend_payload() {
        let payload = r#"{
            "date": "2024-05-01T08:30:00",
            "meter_start": 100.0,
            "meter_end": 150.0,
            "official_km": 30.0,
            "private_km": 20.0,
            "remarks": "site visit",
            "total_km": 50.0
        }"#;

        let entry: TravelLogEntry =
            serde_json::from_str(payload).expect("Could not deserialize travel log entry");

        assert_eq!(entry.total_km, 50.0);
        assert_eq!(entry.date.to_string(), "2024-05-01 08:30:00");
    }
}

//! Schedule table types.

use serde::{Deserialize, Serialize};

/// One employee's weekly shift-assignment record.
///
/// Wire keys are PascalCase except `score`. The backend identifies rows
/// positionally, so the struct carries no identifier field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleItem {
    /// Employee address, also the row's human-facing identifier.
    #[serde(rename = "Email")]
    pub email: String,
    /// Department label.
    #[serde(rename = "Department")]
    pub department: String,
    /// Works the Sunday-Tuesday block.
    #[serde(rename = "SunTue")]
    pub sun_tue: DayFlag,
    /// Works the Wednesday-Thursday block.
    #[serde(rename = "WedThu")]
    pub wed_thu: DayFlag,
    /// Works the Friday-Saturday block.
    #[serde(rename = "FriSat")]
    pub fri_sat: DayFlag,
    /// Assigned shift window.
    #[serde(rename = "Shift")]
    pub shift: Shift,
    /// Assignment score used by the backend's routing.
    pub score: f64,
}

impl Default for ScheduleItem {
    fn default() -> Self {
        Self {
            email: String::new(),
            department: String::new(),
            sun_tue: DayFlag::No,
            wed_thu: DayFlag::No,
            fri_sat: DayFlag::No,
            shift: Shift::Morning,
            score: 0.0,
        }
    }
}

/// Shift windows the backend accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Shift {
    /// 7am to 3pm.
    #[default]
    #[serde(rename = "7am-3pm")]
    Morning,
    /// 3pm to 11pm.
    #[serde(rename = "3pm-11pm")]
    Evening,
    /// 11pm to 7am.
    #[serde(rename = "11pm-7am")]
    Night,
    /// 10am to 6pm.
    #[serde(rename = "10am-6pm")]
    Midday,
}

impl Shift {
    /// All shift options, in the order the editor offers them.
    pub const ALL: [Self; 4] = [Self::Morning, Self::Evening, Self::Night, Self::Midday];

    /// The shift label as the backend spells it.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Morning => "7am-3pm",
            Self::Evening => "3pm-11pm",
            Self::Night => "11pm-7am",
            Self::Midday => "10am-6pm",
        }
    }
}

impl std::fmt::Display for Shift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Boolean-as-string flag for the weekday blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DayFlag {
    /// Works the block.
    Yes,
    /// Does not work the block.
    #[default]
    No,
}

impl DayFlag {
    /// Both options, in the order the editor offers them.
    pub const ALL: [Self; 2] = [Self::Yes, Self::No];

    /// The flag as the backend spells it.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

impl std::fmt::Display for DayFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Response envelope for `GET /api/schedule`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleResponse {
    /// Stored schedule rows, in backend order.
    pub schedule: Vec<ScheduleItem>,
}

/// Request envelope for `POST /api/schedule`.
///
/// Full-replace semantics: the supplied list overwrites the backend's
/// entire stored schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateScheduleRequest {
    /// Complete schedule to store.
    pub schedule: Vec<ScheduleItem>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_item() -> ScheduleItem {
        ScheduleItem {
            email: "a@x.com".to_string(),
            department: "IT".to_string(),
            sun_tue: DayFlag::No,
            wed_thu: DayFlag::Yes,
            fri_sat: DayFlag::No,
            shift: Shift::Morning,
            score: 0.0,
        }
    }

    #[test]
    fn test_item_serializes_pascal_case_keys() {
        let value = serde_json::to_value(sample_item()).unwrap();
        assert_eq!(value["Email"], "a@x.com");
        assert_eq!(value["Department"], "IT");
        assert_eq!(value["SunTue"], "No");
        assert_eq!(value["WedThu"], "Yes");
        assert_eq!(value["FriSat"], "No");
        assert_eq!(value["Shift"], "7am-3pm");
        assert_eq!(value["score"], 0.0);
    }

    #[test]
    fn test_item_round_trips_backend_payload() {
        let json = r#"{
            "Email": "a@x.com",
            "Department": "IT",
            "SunTue": "No",
            "WedThu": "Yes",
            "FriSat": "No",
            "Shift": "7am-3pm",
            "score": 0
        }"#;
        let item: ScheduleItem = serde_json::from_str(json).unwrap();
        assert_eq!(item, sample_item());
    }

    #[test]
    fn test_shift_labels() {
        assert_eq!(Shift::Morning.label(), "7am-3pm");
        assert_eq!(Shift::Evening.label(), "3pm-11pm");
        assert_eq!(Shift::Night.label(), "11pm-7am");
        assert_eq!(Shift::Midday.label(), "10am-6pm");
    }

    #[test]
    fn test_shift_serializes_to_label() {
        for shift in Shift::ALL {
            let value = serde_json::to_value(shift).unwrap();
            assert_eq!(value, shift.label());
        }
    }

    #[test]
    fn test_unknown_shift_is_rejected() {
        assert!(serde_json::from_str::<Shift>("\"9am-5pm\"").is_err());
    }

    #[test]
    fn test_day_flag_wire_strings() {
        assert_eq!(serde_json::to_value(DayFlag::Yes).unwrap(), "Yes");
        assert_eq!(serde_json::to_value(DayFlag::No).unwrap(), "No");
        assert!(serde_json::from_str::<DayFlag>("\"Maybe\"").is_err());
    }

    #[test]
    fn test_default_item_is_the_blank_row() {
        let item = ScheduleItem::default();
        assert!(item.email.is_empty());
        assert!(item.department.is_empty());
        assert_eq!(item.sun_tue, DayFlag::No);
        assert_eq!(item.wed_thu, DayFlag::No);
        assert_eq!(item.fri_sat, DayFlag::No);
        assert_eq!(item.shift, Shift::Morning);
        assert!((item.score - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_update_request_envelope_key() {
        let request = UpdateScheduleRequest {
            schedule: vec![sample_item()],
        };
        let value = serde_json::to_value(request).unwrap();
        assert!(value["schedule"].is_array());
        assert_eq!(value["schedule"][0]["Email"], "a@x.com");
    }

    #[test]
    fn test_schedule_response_tolerates_missing_key() {
        let empty: ScheduleResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.schedule.is_empty());
    }
}

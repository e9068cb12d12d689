//! Patient Data View Model
//!
//! Readings are converted into the unit selected by the query string and
//! timestamps into the selected timezone (UTC unless timezone-aware).

use crate::domain_models::{BgUnits, OperationKind};
use crate::state::AppState;
use blip_client::{PatientData, User};
use chrono_tz::Tz;

#[derive(Debug, Clone, PartialEq)]
pub struct ReadingRow {
    pub time: String,
    pub kind: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatientDataViewModel {
    pub patient: Option<User>,
    pub fetching_patient: bool,
    pub fetching_patient_data: bool,
    pub bg_units: BgUnits,
    pub timezone_name: Option<String>,
    pub rows: Vec<ReadingRow>,
}

impl PatientDataViewModel {
    pub fn from_state(state: &AppState, patient_id: &str) -> Self {
        let prefs = &state.root.query_prefs;
        let bg_units = prefs.bg_prefs.bg_units;
        let timezone_name = prefs
            .time_prefs
            .timezone_aware
            .then(|| prefs.time_prefs.timezone_name.clone())
            .flatten();

        let rows = state
            .blip
            .patient_data
            .get(patient_id)
            .map(|data| rows(data, bg_units, timezone_name.as_deref()))
            .unwrap_or_default();

        Self {
            patient: state.blip.all_users.get(patient_id).cloned(),
            fetching_patient: state
                .blip
                .working
                .in_progress(OperationKind::FetchingPatient),
            fetching_patient_data: state
                .blip
                .working
                .in_progress(OperationKind::FetchingPatientData),
            bg_units,
            timezone_name,
            rows,
        }
    }
}

fn rows(data: &PatientData, units: BgUnits, timezone: Option<&str>) -> Vec<ReadingRow> {
    let tz: Option<Tz> = timezone.and_then(|name| name.parse().ok());

    let mut data: Vec<_> = data.data.iter().collect();
    data.sort_by(|a, b| b.time.cmp(&a.time));

    data.into_iter()
        .map(|datum| {
            let time = match tz {
                Some(tz) => datum
                    .time
                    .with_timezone(&tz)
                    .format("%Y-%m-%d %H:%M %Z")
                    .to_string(),
                None => datum.time.format("%Y-%m-%d %H:%M UTC").to_string(),
            };
            let value = match (datum.value, datum.datum_type.as_str()) {
                (Some(v), "cbg" | "smbg") => format!("{} {}", units.convert_mg_dl(v), units.label()),
                (Some(v), _) => match &datum.units {
                    Some(u) => format!("{} {}", v, u),
                    None => v.to_string(),
                },
                (None, _) => "-".to_string(),
            };
            ReadingRow {
                time,
                kind: datum.datum_type.clone(),
                value,
            }
        })
        .collect()
}

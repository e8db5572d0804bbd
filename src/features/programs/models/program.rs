use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Program (event) document as stored
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Program {
    pub title: String,
    pub title_marathi: Option<String>,
    pub description: Option<String>,
    pub description_marathi: Option<String>,
    /// Stored as `YYYY-MM-DD`, which keeps lexical and date order equal
    pub event_date: Option<NaiveDate>,
    /// Free-form time of day, e.g. `10:30`
    pub event_time: Option<String>,
    pub location: Option<String>,
    pub location_marathi: Option<String>,
    pub image_url: Option<String>,
}

impl Program {
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.event_date.is_some_and(|date| date >= today)
    }
}

/// Image file received with a program form
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub data: Vec<u8>,
    pub file_name: String,
    pub content_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upcoming_includes_today() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        let program = |date: Option<NaiveDate>| Program {
            event_date: date,
            ..Default::default()
        };

        assert!(program(Some(today)).is_upcoming(today));
        assert!(program(today.succ_opt()).is_upcoming(today));
        assert!(!program(today.pred_opt()).is_upcoming(today));
        assert!(!program(None).is_upcoming(today));
    }
}

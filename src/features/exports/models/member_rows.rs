use chrono::NaiveDate;
use serde::Serialize;

use crate::features::members::models::Member;
use crate::shared::bilingual::{non_empty, prefer_marathi, prefer_marathi_or};
use crate::shared::constants::{DEFAULT_STATE, DEFAULT_STATE_ABBREVIATION, EMPTY_CELL};

/// Column headers of the member register, in sheet order
pub const REGISTER_HEADERS: [&str; 10] = [
    "अ.क्र.",
    "अनु.दिनांक",
    "सभासदाचे नाव",
    "गाव",
    "पोस्ट",
    "तालुका",
    "जिल्हा",
    "राज्य",
    "मोबाईल नंबर",
    "पत्ता",
];

fn date_cell(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| EMPTY_CELL.to_string())
}

fn text_cell(value: Option<&str>) -> String {
    non_empty(value).unwrap_or(EMPTY_CELL).to_string()
}

fn state_cell(member: &Member) -> String {
    if let Some(marathi) = non_empty(member.state_marathi.as_deref()) {
        return marathi.to_string();
    }
    match non_empty(member.state.as_deref()) {
        Some(DEFAULT_STATE) => DEFAULT_STATE_ABBREVIATION.to_string(),
        Some(state) => state.to_string(),
        None => EMPTY_CELL.to_string(),
    }
}

/// One line of the member register spreadsheet
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterRow {
    pub serial: usize,
    pub joining_date: String,
    pub name: String,
    pub village: String,
    pub post_office: String,
    pub taluka: String,
    pub district: String,
    pub state: String,
    pub mobile: String,
    pub address: String,
}

impl RegisterRow {
    /// `serial` is the 1-based position in the exported list
    pub fn new(serial: usize, member: &Member) -> Self {
        let pick = |marathi: &Option<String>, english: &Option<String>| {
            prefer_marathi_or(marathi.as_deref(), english.as_deref(), EMPTY_CELL).to_string()
        };

        Self {
            serial,
            joining_date: date_cell(member.joining_date),
            name: prefer_marathi_or(
                member.full_name_marathi.as_deref(),
                Some(member.full_name.as_str()),
                EMPTY_CELL,
            )
            .to_string(),
            village: pick(&member.city_marathi, &member.city),
            post_office: pick(&member.post_office_marathi, &member.post_office),
            taluka: pick(&member.taluka_marathi, &member.taluka),
            district: pick(&member.district_marathi, &member.district),
            state: state_cell(member),
            mobile: text_cell(member.mobile.as_deref()),
            address: pick(&member.address_line1_marathi, &member.address_line1),
        }
    }

    /// Text cells after the serial number, in header order
    pub fn text_cells(&self) -> [&str; 9] {
        [
            self.joining_date.as_str(),
            self.name.as_str(),
            self.village.as_str(),
            self.post_office.as_str(),
            self.taluka.as_str(),
            self.district.as_str(),
            self.state.as_str(),
            self.mobile.as_str(),
            self.address.as_str(),
        ]
    }
}

pub fn register_rows(members: &[Member]) -> Vec<RegisterRow> {
    members
        .iter()
        .enumerate()
        .map(|(index, member)| RegisterRow::new(index + 1, member))
        .collect()
}

/// One line of the printable member list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrintRow {
    pub name: String,
    pub address: String,
    pub city: String,
    pub taluka: String,
    pub district: String,
    pub mobile: String,
    pub joining_date: String,
}

impl From<&Member> for PrintRow {
    fn from(member: &Member) -> Self {
        let line1 = prefer_marathi(
            member.address_line1_marathi.as_deref(),
            member.address_line1.as_deref(),
        );
        let line2 = prefer_marathi(
            member.address_line2_marathi.as_deref(),
            member.address_line2.as_deref(),
        );
        let address = match (line1, line2) {
            (Some(l1), Some(l2)) => format!("{}, {}", l1, l2),
            (Some(l), None) | (None, Some(l)) => l.to_string(),
            (None, None) => String::new(),
        };
        let pick = |marathi: &Option<String>, english: &Option<String>| {
            prefer_marathi_or(marathi.as_deref(), english.as_deref(), EMPTY_CELL).to_string()
        };

        Self {
            name: prefer_marathi_or(
                member.full_name_marathi.as_deref(),
                Some(member.full_name.as_str()),
                EMPTY_CELL,
            )
            .to_string(),
            address,
            city: pick(&member.city_marathi, &member.city),
            taluka: pick(&member.taluka_marathi, &member.taluka),
            district: pick(&member.district_marathi, &member.district),
            mobile: text_cell(member.mobile.as_deref()),
            joining_date: date_cell(member.joining_date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member() -> Member {
        Member {
            full_name: "Ramesh Patil".to_string(),
            city: Some("Wagholi".to_string()),
            state: Some("Maharashtra".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_marathi_value_is_preferred() {
        let member = Member {
            full_name_marathi: Some("रमेश पाटील".to_string()),
            city_marathi: Some("वाघोली".to_string()),
            state_marathi: Some("महाराष्ट्र".to_string()),
            ..member()
        };

        let row = RegisterRow::new(1, &member);

        assert_eq!(row.name, "रमेश पाटील");
        assert_eq!(row.village, "वाघोली");
        assert_eq!(row.state, "महाराष्ट्र");
    }

    #[test]
    fn test_english_and_placeholders_when_marathi_missing() {
        let member = Member {
            full_name_marathi: Some(String::new()),
            ..member()
        };

        let row = RegisterRow::new(3, &member);

        assert_eq!(row.serial, 3);
        assert_eq!(row.name, "Ramesh Patil");
        assert_eq!(row.village, "Wagholi");
        assert_eq!(row.state, DEFAULT_STATE_ABBREVIATION);
        assert_eq!(row.post_office, EMPTY_CELL);
        assert_eq!(row.mobile, EMPTY_CELL);
        assert_eq!(row.joining_date, EMPTY_CELL);
        assert_eq!(row.address, EMPTY_CELL);
    }

    #[test]
    fn test_other_state_is_not_abbreviated() {
        let member = Member {
            state: Some("Karnataka".to_string()),
            ..member()
        };
        assert_eq!(RegisterRow::new(1, &member).state, "Karnataka");
    }

    #[test]
    fn test_serials_follow_display_order() {
        let members: Vec<Member> = ["Chetan", "Anil", "Bharat"]
            .iter()
            .map(|name| Member {
                full_name: name.to_string(),
                ..member()
            })
            .collect();

        let numbered: Vec<(usize, String)> = register_rows(&members)
            .into_iter()
            .map(|row| (row.serial, row.name))
            .collect();

        assert_eq!(
            numbered,
            vec![
                (1, "Chetan".to_string()),
                (2, "Anil".to_string()),
                (3, "Bharat".to_string()),
            ]
        );
    }

    #[test]
    fn test_print_row_joins_address_lines() {
        let member = Member {
            address_line1: Some("Main Road".to_string()),
            address_line2_marathi: Some("मंदिराजवळ".to_string()),
            joining_date: NaiveDate::from_ymd_opt(2024, 3, 15),
            ..member()
        };

        let row = PrintRow::from(&member);

        assert_eq!(row.address, "Main Road, मंदिराजवळ");
        assert_eq!(row.joining_date, "2024-03-15");
        assert_eq!(row.taluka, EMPTY_CELL);
    }

    type SetColumn = fn(&mut Member, Option<String>, Option<String>);

    /// Every bilingual member column as (label, setter for marathi and english)
    fn bilingual_columns() -> [(&'static str, SetColumn); 7] {
        [
            ("name", |m, mr, en| {
                m.full_name_marathi = mr;
                m.full_name = en.unwrap_or_default();
            }),
            ("village", |m, mr, en| {
                m.city_marathi = mr;
                m.city = en;
            }),
            ("post_office", |m, mr, en| {
                m.post_office_marathi = mr;
                m.post_office = en;
            }),
            ("taluka", |m, mr, en| {
                m.taluka_marathi = mr;
                m.taluka = en;
            }),
            ("district", |m, mr, en| {
                m.district_marathi = mr;
                m.district = en;
            }),
            ("state", |m, mr, en| {
                m.state_marathi = mr;
                m.state = en;
            }),
            ("address", |m, mr, en| {
                m.address_line1_marathi = mr;
                m.address_line1 = en;
            }),
        ]
    }

    fn register_cell<'a>(row: &'a RegisterRow, column: &str) -> Option<&'a str> {
        match column {
            "name" => Some(row.name.as_str()),
            "village" => Some(row.village.as_str()),
            "post_office" => Some(row.post_office.as_str()),
            "taluka" => Some(row.taluka.as_str()),
            "district" => Some(row.district.as_str()),
            "state" => Some(row.state.as_str()),
            "address" => Some(row.address.as_str()),
            _ => None,
        }
    }

    fn print_cell<'a>(row: &'a PrintRow, column: &str) -> Option<&'a str> {
        match column {
            "name" => Some(row.name.as_str()),
            "village" => Some(row.city.as_str()),
            "taluka" => Some(row.taluka.as_str()),
            "district" => Some(row.district.as_str()),
            "address" => Some(row.address.as_str()),
            _ => None,
        }
    }

    #[test]
    fn test_every_bilingual_column_prefers_marathi_then_english() {
        let cases = [
            (Some("मराठी"), Some("Goa"), "मराठी"),
            (None, Some("Goa"), "Goa"),
            (Some(""), Some("Goa"), "Goa"),
        ];

        for (column, set) in bilingual_columns() {
            for (marathi, english, expected) in cases {
                let mut member = Member::default();
                set(
                    &mut member,
                    marathi.map(str::to_string),
                    english.map(str::to_string),
                );

                let register = RegisterRow::new(1, &member);
                assert_eq!(
                    register_cell(&register, column),
                    Some(expected),
                    "register {} with marathi {:?}",
                    column,
                    marathi
                );

                let print = PrintRow::from(&member);
                if let Some(cell) = print_cell(&print, column) {
                    assert_eq!(
                        cell, expected,
                        "print {} with marathi {:?}",
                        column, marathi
                    );
                }
            }
        }
    }
}

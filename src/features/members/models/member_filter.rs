use chrono::NaiveDate;

use super::Member;

/// List filter over English district/taluka/city and the joining date.
///
/// Date bounds are inclusive. A member without a joining date never
/// matches once either bound is set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberFilter {
    pub district: Option<String>,
    pub taluka: Option<String>,
    pub city: Option<String>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}

fn field_matches(expected: &Option<String>, actual: &Option<String>) -> bool {
    match expected {
        Some(expected) => actual.as_deref() == Some(expected.as_str()),
        None => true,
    }
}

impl MemberFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, member: &Member) -> bool {
        if !field_matches(&self.district, &member.district)
            || !field_matches(&self.taluka, &member.taluka)
            || !field_matches(&self.city, &member.city)
        {
            return false;
        }

        if self.from_date.is_none() && self.to_date.is_none() {
            return true;
        }

        match member.joining_date {
            Some(date) => {
                self.from_date.map_or(true, |from| date >= from)
                    && self.to_date.map_or(true, |to| date <= to)
            }
            None => false,
        }
    }
}

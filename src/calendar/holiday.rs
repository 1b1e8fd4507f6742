use chrono::NaiveDate;
use serde::{
    Serialize,
    Deserialize
};

/// One occurrence of a registered holiday in a concrete year, with the
/// observed (weekend-shifted) date. Built on demand by the query
/// operations, never stored.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Holiday {
    pub name: String,
    pub date: NaiveDate
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_name_and_date() {
        let holiday = Holiday {
            name: "Christmas Day".to_owned(),
            date: NaiveDate::from_ymd_opt(2019, 12, 25).unwrap()
        };

        let json = serde_json::to_string(&holiday).unwrap();
        assert_eq!(json, r#"{"name":"Christmas Day","date":"2019-12-25"}"#);

        let parsed: Holiday = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, holiday);
    }
}

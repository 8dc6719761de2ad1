use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Time bucket size of the revenue report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    Day,
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl ReportPeriod {
    pub const ALL: [ReportPeriod; 5] = [
        ReportPeriod::Day,
        ReportPeriod::Week,
        ReportPeriod::Month,
        ReportPeriod::Quarter,
        ReportPeriod::Year,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportPeriod::Day => "day",
            ReportPeriod::Week => "week",
            ReportPeriod::Month => "month",
            ReportPeriod::Quarter => "quarter",
            ReportPeriod::Year => "year",
        }
    }

    /// First day of the bucket containing `date`. Weeks start on Monday.
    pub fn bucket_start(&self, date: NaiveDate) -> NaiveDate {
        match self {
            ReportPeriod::Day => date,
            ReportPeriod::Week => date
                .checked_sub_signed(Duration::days(i64::from(
                    date.weekday().num_days_from_monday(),
                )))
                .unwrap_or(NaiveDate::MIN),
            ReportPeriod::Month => NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date),
            ReportPeriod::Quarter => {
                let first_month = (date.month() - 1) / 3 * 3 + 1;
                NaiveDate::from_ymd_opt(date.year(), first_month, 1).unwrap_or(date)
            }
            ReportPeriod::Year => NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date),
        }
    }

    /// Start of the bucket following the one starting at `start`
    pub fn next_bucket(&self, start: NaiveDate) -> NaiveDate {
        let next = match self {
            ReportPeriod::Day => start.checked_add_signed(Duration::days(1)),
            ReportPeriod::Week => start.checked_add_signed(Duration::days(7)),
            ReportPeriod::Month => start.checked_add_months(Months::new(1)),
            ReportPeriod::Quarter => start.checked_add_months(Months::new(3)),
            ReportPeriod::Year => start.checked_add_months(Months::new(12)),
        };
        next.unwrap_or(NaiveDate::MAX)
    }

    /// Allowed values joined for error messages
    pub fn allowed_values() -> String {
        Self::ALL
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for ReportPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Parameter 'period' must be one of: {}.",
                    Self::allowed_values()
                )
            })
    }
}

impl std::fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_bucket_start() {
        // 2018-04-19 is a Thursday
        let date = d(2018, 4, 19);
        assert_eq!(ReportPeriod::Day.bucket_start(date), date);
        assert_eq!(ReportPeriod::Week.bucket_start(date), d(2018, 4, 16));
        assert_eq!(ReportPeriod::Month.bucket_start(date), d(2018, 4, 1));
        assert_eq!(ReportPeriod::Quarter.bucket_start(date), d(2018, 4, 1));
        assert_eq!(ReportPeriod::Year.bucket_start(date), d(2018, 1, 1));
        assert_eq!(ReportPeriod::Quarter.bucket_start(d(2017, 12, 31)), d(2017, 10, 1));
        // Sunday belongs to the week that started the Monday before
        assert_eq!(ReportPeriod::Week.bucket_start(d(2018, 4, 22)), d(2018, 4, 16));
    }

    #[test]
    fn test_week_start_is_clamped_at_the_earliest_date() {
        assert_eq!(ReportPeriod::Week.bucket_start(NaiveDate::MIN), NaiveDate::MIN);
    }

    #[test]
    fn test_next_bucket() {
        assert_eq!(ReportPeriod::Day.next_bucket(d(2016, 2, 28)), d(2016, 2, 29));
        assert_eq!(ReportPeriod::Week.next_bucket(d(2016, 12, 26)), d(2017, 1, 2));
        assert_eq!(ReportPeriod::Month.next_bucket(d(2016, 12, 1)), d(2017, 1, 1));
        assert_eq!(ReportPeriod::Quarter.next_bucket(d(2016, 10, 1)), d(2017, 1, 1));
        assert_eq!(ReportPeriod::Year.next_bucket(d(2016, 1, 1)), d(2017, 1, 1));
    }

    #[test]
    fn test_parse() {
        assert_eq!("quarter".parse::<ReportPeriod>(), Ok(ReportPeriod::Quarter));
        let err = "fortnight".parse::<ReportPeriod>().unwrap_err();
        assert_eq!(
            err,
            "Parameter 'period' must be one of: day, week, month, quarter, year."
        );
        assert_eq!(ReportPeriod::default(), ReportPeriod::Month);
    }
}

//! Reduces a 3-hourly forecast series to one sample per calendar day.

use crate::types::{DailyRepresentative, ForecastSeries};

/// Number of days shown after the current partial day
pub const FORECAST_DAYS: usize = 5;

/// Pick the warmest sample of each calendar day and return the days after the
/// first one, at most [`FORECAST_DAYS`] of them.
///
/// Days are bucketed in the series' own offset and kept in first-seen order.
/// Only a strictly warmer sample replaces a day's holder, so ties go to the
/// earliest sample. The first day is always dropped: it is the partial "today"
/// already covered by the current conditions.
pub fn aggregate(series: &ForecastSeries) -> Vec<DailyRepresentative> {
    let mut days: Vec<DailyRepresentative> = Vec::new();

    for sample in &series.samples {
        let date = series.calendar_day(sample.timestamp);

        match days.iter_mut().find(|day| day.date == date) {
            Some(day) => {
                if sample.temperature > day.temperature {
                    *day = DailyRepresentative::from_sample(date, sample);
                }
            }
            None => days.push(DailyRepresentative::from_sample(date, sample)),
        }
    }

    days.into_iter().skip(1).take(FORECAST_DAYS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WeatherSample;
    use chrono::{DateTime, Duration, FixedOffset, NaiveDate, TimeZone, Utc};

    fn sample(timestamp: DateTime<Utc>, temperature: f64, code: &str) -> WeatherSample {
        WeatherSample {
            timestamp,
            temperature,
            condition_code: code.to_string(),
            description: format!("{code} conditions"),
        }
    }

    /// `count` 3-hourly samples starting at `start`; temperature = hour of day
    fn three_hourly(start: DateTime<Utc>, count: usize) -> Vec<WeatherSample> {
        (0..count)
            .map(|i| {
                let ts = start + Duration::hours(3 * i as i64);
                let hour = f64::from(chrono::Timelike::hour(&ts));
                sample(ts, hour, "01d")
            })
            .collect()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_series() {
        assert!(aggregate(&ForecastSeries::utc(Vec::new())).is_empty());
    }

    #[test]
    fn test_single_day_yields_nothing() {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let series = ForecastSeries::utc(three_hourly(start, 8));
        assert!(aggregate(&series).is_empty());
    }

    #[test]
    fn test_full_series_returns_five_days_after_today() {
        // Typical provider payload: 40 points starting mid-afternoon
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 15, 0, 0).unwrap();
        let series = ForecastSeries::utc(three_hourly(start, 40));

        let days = aggregate(&series);
        assert_eq!(days.len(), 5);
        let dates: Vec<_> = days.iter().map(|d| d.date).collect();
        assert_eq!(
            dates,
            vec![
                date(2024, 6, 2),
                date(2024, 6, 3),
                date(2024, 6, 4),
                date(2024, 6, 5),
                date(2024, 6, 6)
            ]
        );
        // Warmest slot of a full day is 21:00; the last day ends at 12:00
        assert!(days[..4].iter().all(|d| d.temperature == 21.0));
        assert_eq!(days[4].temperature, 12.0);
    }

    #[test]
    fn test_never_includes_first_day() {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 21, 0, 0).unwrap();
        let mut samples = three_hourly(start, 20);
        // Make "today" the warmest point of the whole series
        samples[0].temperature = 99.0;
        let series = ForecastSeries::utc(samples);

        let days = aggregate(&series);
        assert!(days.iter().all(|d| d.date != date(2024, 6, 1)));
        assert!(days.iter().all(|d| d.temperature < 99.0));
    }

    #[test]
    fn test_at_most_five_strictly_ascending() {
        // Eight calendar days of data
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let series = ForecastSeries::utc(three_hourly(start, 64));

        let days = aggregate(&series);
        assert_eq!(days.len(), FORECAST_DAYS);
        assert!(days.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn test_selects_max_temperature_sample() {
        let today = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let morning = Utc.with_ymd_and_hms(2024, 6, 2, 9, 0, 0).unwrap();
        let afternoon = Utc.with_ymd_and_hms(2024, 6, 2, 15, 0, 0).unwrap();
        let series = ForecastSeries::utc(vec![
            sample(today, 18.0, "01d"),
            sample(morning, 15.0, "04d"),
            sample(afternoon, 22.0, "10d"),
        ]);

        let days = aggregate(&series);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].temperature, 22.0);
        assert_eq!(days[0].condition_code, "10d");
        assert_eq!(days[0].timestamp, afternoon);
    }

    #[test]
    fn test_ties_keep_earliest_sample() {
        let today = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let first = Utc.with_ymd_and_hms(2024, 6, 2, 12, 0, 0).unwrap();
        let second = Utc.with_ymd_and_hms(2024, 6, 2, 15, 0, 0).unwrap();
        let series = ForecastSeries::utc(vec![
            sample(today, 10.0, "01d"),
            sample(first, 20.0, "02d"),
            sample(second, 20.0, "03d"),
        ]);

        let days = aggregate(&series);
        assert_eq!(days[0].condition_code, "02d");
        assert_eq!(days[0].timestamp, first);
    }

    #[test]
    fn test_fewer_than_five_following_days() {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        // Three calendar days
        let series = ForecastSeries::utc(three_hourly(start, 24));
        assert_eq!(aggregate(&series).len(), 2);
    }

    #[test]
    fn test_day_boundaries_follow_series_offset() {
        // 22:00 UTC on June 1 is already June 2 in UTC+3
        let offset = FixedOffset::east_opt(3 * 3600).unwrap();
        let series = ForecastSeries::new(
            vec![
                sample(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(), 30.0, "01d"),
                sample(Utc.with_ymd_and_hms(2024, 6, 1, 22, 0, 0).unwrap(), 11.0, "01n"),
                sample(Utc.with_ymd_and_hms(2024, 6, 2, 9, 0, 0).unwrap(), 14.0, "02d"),
            ],
            offset,
        );

        let days = aggregate(&series);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].date, date(2024, 6, 2));
        assert_eq!(days[0].temperature, 14.0);

        // In UTC the late sample stays on June 1 and is dropped with it
        let utc_days = aggregate(&ForecastSeries::utc(series.samples.clone()));
        assert_eq!(utc_days.len(), 1);
        assert_eq!(utc_days[0].date, date(2024, 6, 2));
        assert_eq!(utc_days[0].temperature, 14.0);
    }

    #[test]
    fn test_same_weekday_a_week_apart_stays_separate() {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let later = start + Duration::days(7);
        let series = ForecastSeries::utc(vec![
            sample(start, 10.0, "01d"),
            sample(start + Duration::days(1), 12.0, "01d"),
            sample(later, 40.0, "01d"),
        ]);

        let days = aggregate(&series);
        assert_eq!(days.len(), 2);
        assert_eq!(days[1].date, date(2024, 6, 8));
    }
}

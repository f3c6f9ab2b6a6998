use chrono::{DateTime, Datelike, FixedOffset, Local, Offset, Utc, Weekday};

use crate::cli::{Language, TimezoneArg};

/// Fixed language and UTC offset used to render day and time labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayLocale {
    pub language: Language,
    pub offset: FixedOffset,
}

impl Default for DisplayLocale {
    fn default() -> Self {
        Self::utc(Language::English)
    }
}

impl DisplayLocale {
    pub fn new(language: Language, offset: FixedOffset) -> Self {
        Self { language, offset }
    }

    pub fn utc(language: Language) -> Self {
        Self::new(language, utc_offset())
    }

    /// `city_offset_secs` is only consulted for [`TimezoneArg::City`]; without
    /// it the locale falls back to the local offset.
    pub fn resolve(language: Language, zone: TimezoneArg, city_offset_secs: Option<i32>) -> Self {
        let offset = match zone {
            TimezoneArg::Utc => utc_offset(),
            TimezoneArg::City => city_offset_secs
                .and_then(FixedOffset::east_opt)
                .unwrap_or_else(local_offset),
            TimezoneArg::Local => local_offset(),
        };
        Self::new(language, offset)
    }

    fn localize(&self, timestamp: i64) -> Option<DateTime<FixedOffset>> {
        DateTime::from_timestamp(timestamp, 0).map(|utc| utc.with_timezone(&self.offset))
    }

    /// Weekday name only; the grouping key of the daily outlook.
    pub fn weekday_label(&self, timestamp: i64) -> String {
        self.localize(timestamp).map_or_else(
            || "--".to_string(),
            |dt| weekday_name(dt.weekday(), self.language).to_string(),
        )
    }

    /// 24-hour "HH:MM".
    pub fn time_label(&self, timestamp: i64) -> String {
        self.localize(timestamp).map_or_else(
            || "--:--".to_string(),
            |dt| dt.format("%H:%M").to_string(),
        )
    }
}

fn utc_offset() -> FixedOffset {
    Utc.fix()
}

fn local_offset() -> FixedOffset {
    Local::now().offset().fix()
}

fn weekday_name(day: Weekday, language: Language) -> &'static str {
    match language {
        Language::English => match day {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        },
        Language::Spanish => match day {
            Weekday::Mon => "lunes",
            Weekday::Tue => "martes",
            Weekday::Wed => "miércoles",
            Weekday::Thu => "jueves",
            Weekday::Fri => "viernes",
            Weekday::Sat => "sábado",
            Weekday::Sun => "domingo",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2026-02-12T10:00:00Z, a Thursday.
    const THURSDAY_10Z: i64 = 1_770_890_400;

    #[test]
    fn weekday_labels_follow_language() {
        let en = DisplayLocale::utc(Language::English);
        let es = DisplayLocale::utc(Language::Spanish);
        assert_eq!(en.weekday_label(THURSDAY_10Z), "Thursday");
        assert_eq!(es.weekday_label(THURSDAY_10Z), "jueves");
    }

    #[test]
    fn offset_can_move_label_to_next_day() {
        let plus_fifteen = FixedOffset::east_opt(15 * 3600).expect("offset");
        let locale = DisplayLocale::new(Language::English, plus_fifteen);
        assert_eq!(locale.weekday_label(THURSDAY_10Z), "Friday");
        assert_eq!(locale.time_label(THURSDAY_10Z), "01:00");
    }

    #[test]
    fn time_label_is_24_hour() {
        let locale = DisplayLocale::utc(Language::English);
        assert_eq!(locale.time_label(THURSDAY_10Z + 9 * 3600), "19:00");
    }

    #[test]
    fn city_zone_uses_reported_offset() {
        let locale = DisplayLocale::resolve(Language::English, TimezoneArg::City, Some(3600));
        assert_eq!(locale.offset.local_minus_utc(), 3600);

        let utc = DisplayLocale::resolve(Language::English, TimezoneArg::Utc, Some(3600));
        assert_eq!(utc.offset.local_minus_utc(), 0);
    }

    #[test]
    fn out_of_range_timestamp_renders_placeholder() {
        let locale = DisplayLocale::default();
        assert_eq!(locale.weekday_label(i64::MAX), "--");
        assert_eq!(locale.time_label(i64::MAX), "--:--");
    }
}

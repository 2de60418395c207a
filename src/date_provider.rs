use chrono::{DateTime, NaiveDate, SecondsFormat, Timelike, Utc};

/// Source of "now" for answer timestamps
pub trait DateProvider {
    fn get_current_time(&self) -> DateTime<Utc>;
}

/// Uses the system clock
pub struct SystemDateProvider;

impl DateProvider for SystemDateProvider {
    fn get_current_time(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Pins the calendar date while keeping the system time of day
pub struct OverrideDateProvider {
    override_date: NaiveDate,
}

impl OverrideDateProvider {
    pub fn new(override_date: NaiveDate) -> Self {
        Self { override_date }
    }
}

impl DateProvider for OverrideDateProvider {
    fn get_current_time(&self) -> DateTime<Utc> {
        let now = Utc::now();
        self.override_date
            .and_hms_nano_opt(now.hour(), now.minute(), now.second(), now.nanosecond())
            .unwrap_or_default()
            .and_utc()
    }
}

/// Always returns the same instant
pub struct FixedDateProvider {
    instant: DateTime<Utc>,
}

impl FixedDateProvider {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl DateProvider for FixedDateProvider {
    fn get_current_time(&self) -> DateTime<Utc> {
        self.instant
    }
}

/// Record timestamp: ISO-8601 UTC with milliseconds, e.g. `2024-05-01T08:30:00.000Z`
pub fn iso_timestamp(provider: &dyn DateProvider) -> String {
    provider
        .get_current_time()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

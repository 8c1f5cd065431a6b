pub trait TimeSource {
    // Unix milliseconds, reported to clients as fetchedAt
    fn current_millis(&self) -> i64;
}

#[derive(Clone)]
pub struct SystemTime {}

impl TimeSource for SystemTime {
    fn current_millis(&self) -> i64 {
        let now = time::OffsetDateTime::now_utc();

        (now.unix_timestamp_nanos() / 1_000_000) as i64
    }
}

/// Deterministic source for tests.
#[derive(Clone)]
pub struct FixedTime {
    pub millis: i64,
}

impl TimeSource for FixedTime {
    fn current_millis(&self) -> i64 {
        self.millis
    }
}

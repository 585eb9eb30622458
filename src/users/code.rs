use time::OffsetDateTime;

/// Builds a user code from the current UTC time.
///
/// Codes from calls landing in the same day and the same microsecond-scale
/// remainder collide; nothing here retries or checks for that.
pub fn generate_code() -> String {
    generate_code_at(OffsetDateTime::now_utc())
}

/// `YYYYMMDD` of `now` followed by its unix nanoseconds modulo one million, padded to six digits.
pub fn generate_code_at(now: OffsetDateTime) -> String {
    let suffix = now.unix_timestamp_nanos().rem_euclid(1_000_000);
    format!(
        "{:04}{:02}{:02}{:06}",
        now.year(),
        u8::from(now.month()),
        now.day(),
        suffix
    )
}

use chrono::NaiveDate;

/// New streak value after a visit on `today`.
///
/// A visit the day after the last one extends the streak, a repeat visit
/// on the same day leaves it alone, anything else starts over at one.
pub fn touch(streak: u32, last_visit: Option<NaiveDate>, today: NaiveDate) -> u32 {
    let Some(last) = last_visit else {
        return 1;
    };
    match today.signed_duration_since(last).num_days() {
        0 => streak,
        1 => streak.saturating_add(1),
        _ => 1,
    }
}

/// Percentage of `total` taken by `volume`, rounded to one decimal place.
///
/// Halves round away from zero. Returns `0.0` when `total` is zero; callers
/// drop zero-total periods before computing shares.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn round_share(volume: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let percent = volume as f64 / total as f64 * 100.0;
    (percent * 10.0).round() / 10.0
}

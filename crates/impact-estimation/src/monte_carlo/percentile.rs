/// Linear-interpolated percentile of `sorted` (ascending), `q` in [0, 100].
///
/// Rank `h = (n - 1) * q / 100`; the result interpolates between the order
/// statistics at `floor(h)` and `ceil(h)`. Returns NaN for an empty slice.
pub fn percentile(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let rank = (n - 1) as f64 * (q.clamp(0.0, 100.0) / 100.0);
            let lower = rank.floor() as usize;
            let upper = rank.ceil() as usize;
            let weight = rank - lower as f64;
            sorted[lower] + (sorted[upper] - sorted[lower]) * weight
        }
    }
}

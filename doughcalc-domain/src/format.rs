/// Fractional digits needed to print any `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Format a mass in grams with `precision` decimal places, e.g. `"123g"` or `"1.23g"`.
pub fn as_grams(n: f64, precision: usize) -> String {
    format!("{}g", fixed(n, precision))
}

/// Format a baker's percent.
///
/// Values at or above 10 round to a whole percent; smaller ones keep one decimal so that
/// salt, oil and yeast stay readable.
pub fn as_bakers_percent(n: f64) -> String {
    if n >= 10.0 {
        return format!("{}%", n.round());
    }
    format!("{}%", fixed(n, 1))
}

/// Fixed-point formatting that rounds exact ties away from zero.
///
/// `{:.*}` rounds an exact tie to even (`2.5` -> `"2"`); recipe cards have always shown `"3"`.
fn fixed(n: f64, precision: usize) -> String {
    let n = if is_exact_tie(n, precision) {
        if n.is_sign_negative() { n.next_down() } else { n.next_up() }
    } else {
        n
    };
    format!("{:.*}", precision, n)
}

fn is_exact_tie(n: f64, precision: usize) -> bool {
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, n);
    let Some((_, fraction)) = exact.split_once('.') else {
        return false;
    };
    let fraction = fraction.trim_end_matches('0');
    fraction.len() == precision + 1 && fraction.ends_with('5')
}

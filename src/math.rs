/// Kahan-Babushka-Neumaier compensated summation for reduced numerical error
///
/// <https://en.wikipedia.org/wiki/Kahan_summation_algorithm#Further_enhancements>
pub fn kbn_sum(values: impl IntoIterator<Item = f64>) -> f64 {
    let mut sum: f64 = 0.;
    let mut compensation: f64 = 0.;
    for value in values {
        let t = sum + value;
        compensation += if sum.abs() >= value.abs() {
            (sum - t) + value
        } else {
            (value - t) + sum
        };
        sum = t;
    }
    sum + compensation
}

#[cfg(test)]
#[test]
fn summation_is_compensated() {
    use std::f64::consts::*;
    let input = [FRAC_PI_8, FRAC_PI_2, FRAC_PI_6, FRAC_PI_3, FRAC_PI_4];
    let out = kbn_sum(input);

    assert_ne!(input.iter().sum::<f64>(), out);
    assert_eq!(out, 4.31968989868596570288)
}

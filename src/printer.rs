use crate::{Cluster, ClusterSet, Record};
use num_traits::Float;
use std::fmt::{Display, Formatter};

/// Significant digits kept when printing a coordinate.
const PRECISION: i32 = 6;

/// Formats a coordinate the way C's `%g` does: `PRECISION` significant digits with trailing
/// zeros dropped, switching to exponent notation when the decimal exponent is below -4 or at
/// least `PRECISION`.
pub(crate) fn format_general<T: Float>(value: T) -> String {
    let value = value.to_f64().unwrap_or(f64::NAN);
    if value.is_nan() {
        return String::from("nan");
    }
    if value.is_infinite() {
        return String::from(if value < 0.0 { "-inf" } else { "inf" });
    }
    if value == 0.0 {
        return String::from(if value.is_sign_negative() { "-0" } else { "0" });
    }

    // Rounding to the kept digits can carry into the next power of ten, so take the exponent
    // from the rounded scientific form
    let scientific = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.abs())
    } else {
        let decimals = (PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

impl<T: Float> Display for Record<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{},{}]", self.id, format_general(self.x), format_general(self.y))
    }
}

/// Members separated by single spaces, e.g. `1[0,0] 2[0,1]`.
impl<T: Float> Display for Cluster<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (n, record) in self.iter().enumerate() {
            if n > 0 {
                write!(f, " ")?;
            }
            write!(f, "{record}")?;
        }
        Ok(())
    }
}

/// The `Clusters:` report, one line per cluster.
impl<T: Float> Display for ClusterSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Clusters:")?;
        for (n, cluster) in self.iter().enumerate() {
            writeln!(f, "cluster {n}: {cluster}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_format() {
        assert_eq!("7[1.5,-2]", Record::new(7, 1.5_f32, -2.0).to_string());
    }

    #[test]
    fn report_format() {
        let records = vec![
            Record::new(1, 0.0_f32, 0.0),
            Record::new(2, 0.0, 1.0),
            Record::new(3, 5.0, 5.5),
        ];
        let mut set = ClusterSet::from_records(&records, 10).unwrap();
        set.merge_pair(0, 1).unwrap();
        assert_eq!(
            "Clusters:\ncluster 0: 1[0,0] 2[0,1]\ncluster 1: 3[5,5.5]\n",
            set.to_string()
        );
    }

    #[test]
    fn coordinates_keep_six_significant_digits() {
        assert_eq!("123.457", format_general(123.4567_f32));
        assert_eq!("0.1", format_general(0.1_f32));
        assert_eq!("663", format_general(663.0_f64));
        assert_eq!("999999", format_general(999999.0_f64));
    }

    #[test]
    fn large_and_small_coordinates_use_exponent() {
        assert_eq!("1e+07", format_general(1e7_f32));
        assert_eq!("1.23457e+06", format_general(1234567.0_f32));
        assert_eq!("1e+06", format_general(999999.5_f64));
        assert_eq!("0.0001", format_general(0.0001_f64));
        assert_eq!("1.5e-05", format_general(0.000015_f64));
        assert_eq!("-2.5e+10", format_general(-2.5e10_f64));
    }

    #[test]
    fn zero_and_non_finite_coordinates() {
        assert_eq!("0", format_general(0.0_f32));
        assert_eq!("-0", format_general(-0.0_f32));
        assert_eq!("inf", format_general(f64::INFINITY));
        assert_eq!("nan", format_general(f64::NAN));
    }

    #[test]
    fn report_rounds_coordinates() {
        let records = vec![Record::new(1, 123.4567_f32, 1e7), Record::new(2, 0.1, 1234567.0)];
        let set = ClusterSet::from_records(&records, 10).unwrap();
        assert_eq!(
            "Clusters:\ncluster 0: 1[123.457,1e+07]\ncluster 1: 2[0.1,1.23457e+06]\n",
            set.to_string()
        );
    }

    #[test]
    fn empty_cluster_prints_nothing() {
        let cluster: Cluster<f32> = Cluster::empty();
        assert_eq!("", cluster.to_string());
    }
}

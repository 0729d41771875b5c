//! Plain-text rendering of iteration records.

use std::fmt::{self, Display};

use crate::record::Iteration;

/// Formats recorded iterations as an aligned text table.
///
/// Columns are the iteration index, the estimate, the value at the estimate,
/// and the error measure in scientific notation. Nothing is printed; the
/// caller decides where the text goes.
///
/// ```rust
/// use numera_observers::{Recorder, Table};
/// use numera_solvers::equation::bisection;
///
/// let f = |x: f64| x - 1.2;
/// let config = bisection::Config::new(2, 1e-12).unwrap();
/// let mut recorder: Recorder<f64> = Recorder::new();
/// bisection::solve(&f, [1.0, 2.0], &config, &mut recorder).unwrap();
///
/// let text = Table::new(recorder.iterations()).precision(3).to_string();
/// assert_eq!(text.lines().count(), 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Table<'a, X, V = f64> {
    iterations: &'a [Iteration<X, V>],
    precision: usize,
}

impl<'a, X, V> Table<'a, X, V> {
    /// Creates a table with six digits after the decimal point.
    #[must_use]
    pub fn new(iterations: &'a [Iteration<X, V>]) -> Self {
        Self {
            iterations,
            precision: 6,
        }
    }

    /// Sets the number of digits after the decimal point.
    #[must_use]
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}

impl<X: Display, V: Display> Display for Table<'_, X, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = self.precision;
        let width = precision + 8;

        write!(
            f,
            "{:>5}  {:>width$}  {:>width$}  {:>10}",
            "iter", "estimate", "value", "error"
        )?;

        for it in self.iterations {
            let estimate = format!("{:.precision$}", it.estimate);
            let value = format!("{:.precision$}", it.value);
            write!(
                f,
                "\n{:>5}  {estimate:>width$}  {value:>width$}  {:>10.3e}",
                it.index, it.error
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use num_complex::Complex64;

    fn rows() -> Vec<Iteration<f64>> {
        vec![
            Iteration {
                index: 1,
                estimate: 1.5,
                value: 0.25,
                error: 0.5,
            },
            Iteration {
                index: 2,
                estimate: 1.416_666_666,
                value: 0.006_944_444,
                error: 0.058_823_53,
            },
        ]
    }

    #[test]
    fn renders_header_and_one_line_per_iteration() {
        let iterations = rows();
        let text = Table::new(&iterations).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("estimate"));
        assert!(lines[1].contains("1.500000"));
        assert!(lines[1].contains("5.000e-1"));
        assert!(lines[2].trim_start().starts_with('2'));
    }

    #[test]
    fn precision_controls_digits() {
        let iterations = rows();
        let text = Table::new(&iterations).precision(2).to_string();

        assert!(text.contains("1.42"));
        assert!(!text.contains("1.417"));
    }

    #[test]
    fn renders_complex_estimates() {
        let iterations = vec![Iteration {
            index: 1,
            estimate: Complex64::new(0.0, 1.0),
            value: Complex64::new(0.0, 0.0),
            error: 0.0,
        }];

        let text = Table::new(&iterations).precision(1).to_string();

        assert!(text.contains("0.0+1.0i"));
    }

    #[test]
    fn empty_record_is_just_a_header() {
        let iterations: Vec<Iteration<f64>> = Vec::new();
        assert_eq!(Table::new(&iterations).to_string().lines().count(), 1);
    }
}

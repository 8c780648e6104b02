//! CLI command implementations.

pub(crate) mod estimate;
pub(crate) mod rolling;
pub(crate) mod scales;

/// Writes `n` unit-range bars, one minute apart, to a CSV file.
#[cfg(test)]
pub(crate) fn write_unit_bars(path: &std::path::Path, n: usize) {
    use std::fmt::Write;

    let mut csv = String::from("timestamp,open,high,low,close\n");
    for i in 0..n {
        let (hour, minute) = (i / 60, i % 60);
        writeln!(csv, "2024-01-01T{hour:02}:{minute:02}:00Z,0.5,1.0,0.0,0.5").unwrap();
    }
    std::fs::write(path, csv).unwrap();
}

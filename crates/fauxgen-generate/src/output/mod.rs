//! Writers for generated samples.

pub mod csv;

use std::io::Write;

/// One generated value; `None` is an absent value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub index: usize,
    pub value: Option<String>,
}

/// Write one value per line. Absent values are written as empty lines.
pub fn write_samples_lines<W: Write>(mut writer: W, samples: &[Sample]) -> std::io::Result<()> {
    for sample in samples {
        writeln!(writer, "{}", sample.value.as_deref().unwrap_or_default())?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_output_keeps_absent_values() {
        let samples = vec![
            Sample {
                index: 0,
                value: Some("850 01".to_string()),
            },
            Sample {
                index: 1,
                value: None,
            },
        ];
        let mut out = Vec::new();
        write_samples_lines(&mut out, &samples).expect("write");
        assert_eq!(String::from_utf8(out).expect("utf8"), "850 01\n\n");
    }
}

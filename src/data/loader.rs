use std::path::Path;

use anyhow::{Context, Result};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a column of flux values from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv` – one record per value, first column used, no header
/// * anything else – whitespace / line delimited numbers (`flux_output.txt`)
///
/// Blank lines and `#` comments are skipped in both formats.
pub fn load_flux(path: &Path) -> Result<Vec<f64>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let values = match ext.as_str() {
        "csv" => load_csv(path),
        _ => load_text(path),
    }
    .with_context(|| format!("loading flux data from {}", path.display()))?;

    log::info!("Loaded {} flux values from {}", values.len(), path.display());
    Ok(values)
}

// ---------------------------------------------------------------------------
// Plain text loader
// ---------------------------------------------------------------------------

fn load_text(path: &Path) -> Result<Vec<f64>> {
    let text = std::fs::read_to_string(path).context("reading text file")?;
    parse_text(&text)
}

/// Parse whitespace-separated numbers, one or more per line.
///
/// `#` starts a comment that runs to end of line.  Tokens are parsed with
/// `f64::from_str`, so `nan` and `inf` are accepted.
pub fn parse_text(text: &str) -> Result<Vec<f64>> {
    let mut values = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let content = strip_comment(line);
        for tok in content.split_whitespace() {
            let v = tok
                .parse::<f64>()
                .with_context(|| format!("line {}: '{tok}' is not a number", line_no + 1))?;
            values.push(v);
        }
    }
    Ok(values)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(i) => &line[..i],
        None => line,
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: no header, value in the first column, extra columns ignored.
fn load_csv(path: &Path) -> Result<Vec<f64>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .context("opening CSV")?;

    let mut values = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {}", row_no + 1))?;
        let Some(cell) = record.get(0) else {
            continue;
        };
        if cell.is_empty() {
            continue;
        }
        let v = cell
            .parse::<f64>()
            .with_context(|| format!("CSV row {}: '{cell}' is not a number", row_no + 1))?;
        values.push(v);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parses_one_value_per_line() {
        let values = parse_text("1.5\n2\n3e2\n").unwrap();
        assert_eq!(values, vec![1.5, 2.0, 300.0]);
    }

    #[test]
    fn skips_blank_lines_and_comments() {
        let text = "# flux tally\n\n1.0  # first bin\n   \n2.0 3.0\n";
        assert_eq!(parse_text(text).unwrap(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn accepts_nan_spelling() {
        let values = parse_text("nan\n1\n").unwrap();
        assert!(values[0].is_nan());
        assert_eq!(values[1], 1.0);
    }

    #[test]
    fn reports_line_of_bad_token() {
        let err = parse_text("1.0\n2.0\nabc\n").unwrap_err();
        assert!(format!("{err:#}").contains("line 3: 'abc'"), "{err:#}");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flux_output.txt");
        let err = load_flux(&path).unwrap_err();
        assert!(format!("{err:#}").contains("flux_output.txt"));
    }

    #[test]
    fn loads_text_file() {
        let file = write_temp(".txt", "10\n20\n30\n");
        assert_eq!(load_flux(file.path()).unwrap(), vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn loads_first_csv_column() {
        let file = write_temp(".csv", "# value,err\n1.5, 0.1\n2.5,0.2\n\n3.5\n");
        assert_eq!(load_flux(file.path()).unwrap(), vec![1.5, 2.5, 3.5]);
    }

    #[test]
    fn csv_bad_cell_names_row() {
        let file = write_temp(".csv", "1.0\nx\n");
        let err = load_flux(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("'x' is not a number"), "{err:#}");
    }
}

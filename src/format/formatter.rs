use crate::core::error::{Error, ErrorKind, Result};

/// Keyword-list codec, picked per data source.
///
/// The file name only selects the encoding via its extension; no I/O happens here.
pub trait Formatter: Send + Sync {
    fn decode(&self, data: &[u8], file_name: &str) -> Result<Vec<String>>;

    fn encode(&self, keywords: &[String], file_name: &str) -> Result<Vec<u8>>;

    fn name(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Json,
    Txt,
    Csv,
    Yaml,
}

impl FileType {
    /// Extension after the last `.`; `None` when there is none or it is unknown
    pub fn detect(file_name: &str) -> Option<FileType> {
        let (_, ext) = file_name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(FileType::Json),
            "txt" => Some(FileType::Txt),
            "csv" => Some(FileType::Csv),
            "yaml" | "yml" => Some(FileType::Yaml),
            _ => None,
        }
    }

    pub fn require(file_name: &str) -> Result<FileType> {
        Self::detect(file_name).ok_or_else(|| {
            Error::new(
                ErrorKind::UnsupportedFormat,
                format!("cannot detect keyword file type of '{}'", file_name),
            )
        })
    }
}

pub(crate) fn as_text<'a>(data: &'a [u8], file_name: &str) -> Result<&'a str> {
    std::str::from_utf8(data).map_err(|e| {
        Error::new(ErrorKind::Parse, format!("'{}' is not valid UTF-8: {}", file_name, e))
    })
}

/// Non-blank lines, tolerating `\r\n`
pub(crate) fn text_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
}

/// CSV records with quoting handled by the reader. Rows may differ in
/// length; cells are trimmed and blank ones dropped.
pub(crate) fn csv_rows(data: &[u8]) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(data);

    let mut rows = Vec::new();
    for record in reader.records() {
        let row: Vec<String> = record?
            .iter()
            .filter(|cell| !cell.is_empty())
            .map(str::to_string)
            .collect();
        if !row.is_empty() {
            rows.push(row);
        }
    }
    Ok(rows)
}

/// A one-cell `header` row followed by all `cells` on a single row
pub(crate) fn csv_document(header: &str, cells: &[String]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(Vec::new());
    writer.write_record([header])?;
    if !cells.is_empty() {
        writer.write_record(cells)?;
    }
    writer
        .into_inner()
        .map_err(|e| Error::new(ErrorKind::Io, format!("CSV flush failed: {}", e.error())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_by_last_extension() {
        assert_eq!(FileType::detect("keywords.json"), Some(FileType::Json));
        assert_eq!(FileType::detect("archive.tar.csv"), Some(FileType::Csv));
        assert_eq!(FileType::detect("list.YML"), Some(FileType::Yaml));
        assert_eq!(FileType::detect("notes.txt"), Some(FileType::Txt));
        assert_eq!(FileType::detect("noextension"), None);
        assert_eq!(FileType::detect("keywords.xml"), None);
    }

    #[test]
    fn unknown_type_is_unsupported() {
        let err = FileType::require("keywords.toml").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnsupportedFormat);
    }

    #[test]
    fn csv_rows_drop_blank_cells() {
        let rows = csv_rows(b"a, b,,c\r\n\r\nd\n").unwrap();
        assert_eq!(rows, vec![vec!["a", "b", "c"], vec!["d"]]);
    }

    #[test]
    fn csv_cells_keep_quoted_commas() {
        let rows = csv_rows(b"\"new york, ny\",pool\n").unwrap();
        assert_eq!(rows, vec![vec!["new york, ny", "pool"]]);

        let doc = csv_document("keywords", &["a,b".to_string()]).unwrap();
        assert_eq!(doc, b"keywords\n\"a,b\"\n");
    }
}

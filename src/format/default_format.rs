use crate::core::error::Result;
use crate::format::formatter::{as_text, csv_document, csv_rows, text_lines, FileType, Formatter};

/// Plain list of keywords.
///
/// - json: `["keyword1", "keyword2"]`
/// - txt: one keyword per line
/// - csv: a header row (skipped on read), then keywords in any number of cells
/// - yaml: `- keyword1`
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFormat;

const CSV_HEADER: &str = "keywords";

impl Formatter for DefaultFormat {
    fn decode(&self, data: &[u8], file_name: &str) -> Result<Vec<String>> {
        match FileType::require(file_name)? {
            FileType::Json => Ok(serde_json::from_slice(data)?),
            FileType::Yaml => Ok(serde_yaml::from_slice(data)?),
            FileType::Txt => {
                let text = as_text(data, file_name)?;
                Ok(text_lines(text).map(str::to_string).collect())
            }
            FileType::Csv => Ok(csv_rows(data)?.into_iter().skip(1).flatten().collect()),
        }
    }

    fn encode(&self, keywords: &[String], file_name: &str) -> Result<Vec<u8>> {
        match FileType::require(file_name)? {
            FileType::Json => Ok(serde_json::to_vec(keywords)?),
            FileType::Yaml => Ok(serde_yaml::to_string(keywords)?.into_bytes()),
            FileType::Txt => Ok(keywords.join("\n").into_bytes()),
            FileType::Csv => csv_document(CSV_HEADER, keywords),
        }
    }

    fn name(&self) -> &str {
        "default"
    }
}

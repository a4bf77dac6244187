use serde::{Serialize, Deserialize};
use crate::core::error::Result;
use crate::format::formatter::{as_text, csv_document, csv_rows, text_lines, FileType, Formatter};

const HEADER: &str = "keywords";

/// Wire shape of the json/yaml documents
#[derive(Debug, Default, Serialize, Deserialize)]
struct KeywordList {
    #[serde(default)]
    keywords: Vec<String>,
}

/// Keywords wrapped in a top level `keywords` object.
///
/// json: `{"keywords": ["keyword1", "keyword2"]}`, yaml likewise.
/// txt and csv carry a `keywords` header line, dropped on read when present.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordListFormat;

impl Formatter for KeywordListFormat {
    fn decode(&self, data: &[u8], file_name: &str) -> Result<Vec<String>> {
        match FileType::require(file_name)? {
            FileType::Json => {
                let list: KeywordList = serde_json::from_slice(data)?;
                Ok(list.keywords)
            }
            FileType::Yaml => {
                let list: KeywordList = serde_yaml::from_slice(data)?;
                Ok(list.keywords)
            }
            FileType::Txt => {
                let text = as_text(data, file_name)?;
                let mut lines = text_lines(text).peekable();
                if lines.peek() == Some(&HEADER) {
                    lines.next();
                }
                Ok(lines.map(str::to_string).collect())
            }
            FileType::Csv => {
                let mut rows = csv_rows(data)?;
                if rows.first().is_some_and(|row| row.len() == 1 && row[0] == HEADER) {
                    rows.remove(0);
                }
                Ok(rows.into_iter().flatten().collect())
            }
        }
    }

    fn encode(&self, keywords: &[String], file_name: &str) -> Result<Vec<u8>> {
        match FileType::require(file_name)? {
            FileType::Json => {
                let list = KeywordList { keywords: keywords.to_vec() };
                Ok(serde_json::to_vec(&list)?)
            }
            FileType::Yaml => {
                let list = KeywordList { keywords: keywords.to_vec() };
                Ok(serde_yaml::to_string(&list)?.into_bytes())
            }
            FileType::Txt => {
                let mut text = String::from(HEADER);
                for keyword in keywords {
                    text.push('\n');
                    text.push_str(keyword);
                }
                text.push('\n');
                Ok(text.into_bytes())
            }
            FileType::Csv => csv_document(HEADER, keywords),
        }
    }

    fn name(&self) -> &str {
        "keyword_list"
    }
}

use std::fmt::{Display, Write};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationResults {
    pub errors: Vec<ValidationItem>,
    pub warnings: Vec<ValidationItem>,
    pub passed_checks: Vec<ValidationItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationItem {
    #[serde(rename = "type")]
    pub item_type: String,
    pub message: String,
    pub detail: Option<String>,
    pub inner_validation_results: Option<ValidationResults>,
}

impl ValidationResults {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn summary(&self) -> String {
        if self.is_valid() {
            format!(
                "Validation results: {} passed checks, {} warnings",
                self.passed_checks.len(),
                self.warnings.len()
            )
        } else {
            format!("Validation results: {} errors", self.errors.len())
        }
    }

    fn write_indented(&self, output: &mut String, indent: usize) -> std::fmt::Result {
        let sections = [
            ("Errors", &self.errors),
            ("Warnings", &self.warnings),
            ("Passed checks", &self.passed_checks),
        ];

        for (title, items) in sections.into_iter().filter(|(_, items)| !items.is_empty()) {
            writeln!(output, "{:indent$}{title}:", "")?;
            for item in items {
                write!(output, "{:indent$}- {}", "", item.message)?;
                if let Some(detail) = &item.detail {
                    write!(output, " ({detail})")?;
                }
                writeln!(output)?;
                if let Some(inner) = &item.inner_validation_results {
                    inner.write_indented(output, indent + 2)?;
                }
            }
        }

        Ok(())
    }
}

impl Display for ValidationResults {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut report = String::new();
        writeln!(report, "{}", self.summary())?;
        self.write_indented(&mut report, 0)?;
        f.write_str(report.trim_end())
    }
}

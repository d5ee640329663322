//! Report model: titled sections of text lines and tables

use crate::error::Result;
use crate::table::ReportTable;
use mathlog_stats::{SessionTrend, TwoSampleComparison};
use serde::{Deserialize, Serialize};

/// One piece of section content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Block {
    Text(String),
    Table(ReportTable),
}

/// A titled report section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub blocks: Vec<Block>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    pub fn text(&mut self, line: impl Into<String>) {
        self.blocks.push(Block::Text(line.into()));
    }

    pub fn table(&mut self, table: ReportTable) {
        self.blocks.push(Block::Table(table));
    }

    /// Text lines in order
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Text(line) => Some(line.as_str()),
            Block::Table(_) => None,
        })
    }

    /// Tables in order
    pub fn tables(&self) -> impl Iterator<Item = &ReportTable> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Table(table) => Some(table),
            Block::Text(_) => None,
        })
    }

    /// Find a table by title
    pub fn find_table(&self, title: &str) -> Option<&ReportTable> {
        self.tables().find(|t| t.title == title)
    }

    pub fn render(&self) -> String {
        let rule = "=".repeat(50);
        let mut out = format!("{rule}\n{}\n{rule}\n", self.title);
        for block in &self.blocks {
            match block {
                Block::Text(line) => {
                    out.push_str(line);
                    out.push('\n');
                }
                Block::Table(table) => {
                    out.push_str(&table.render());
                    out.push('\n');
                }
            }
        }
        out
    }
}

/// Everything one analysis run produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Number of records analysed
    pub records: usize,
    pub sections: Vec<Section>,
    /// Early/late comparison, absent when a group was too small
    pub comparison: Option<TwoSampleComparison>,
    /// Headline conclusions, also shown in their sections
    pub findings: Vec<String>,
    pub trend: SessionTrend,
    /// Where the learning curve was written, if it was
    pub chart_path: Option<String>,
}

impl AnalysisReport {
    /// Find a section by title
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// Plain-text report for the console
    pub fn render(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            out.push_str(&section.render());
            out.push('\n');
        }
        if let Some(path) = &self.chart_path {
            out.push_str(&format!("Learning curve saved to {}\n", path));
        }
        out
    }

    /// Serialize the report to JSON; undefined numbers become `null`
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

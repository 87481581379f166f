//! Report model shared by the runner and the formatter.

use serde::Serialize;

use crate::analyzer::{check_line, LineAnalysis};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub files: Vec<FileReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub name: String,
    pub sentences: Vec<SentenceReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentenceReport {
    /// 1-based, counting non-empty lines only
    pub number: usize,
    #[serde(flatten)]
    pub analysis: LineAnalysis,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub files: usize,
    pub sentences: usize,
    pub invalid_sentences: usize,
}

impl FileReport {
    /// Checks every non-empty line of `source`.
    pub fn from_source(name: impl Into<String>, source: &str) -> Self {
        Self::from_lines(name, source.lines())
    }

    pub fn from_lines<'a>(
        name: impl Into<String>,
        lines: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let mut file = Self::new(name);
        for line in lines.into_iter().filter(|line| !line.is_empty()) {
            file.push_line(line);
        }
        file
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sentences: Vec::new(),
        }
    }

    /// Checks `line` as the next sentence and returns its result.
    pub fn push_line(&mut self, line: &str) -> &SentenceReport {
        let sentence = SentenceReport {
            number: self.sentences.len() + 1,
            analysis: check_line(line),
        };
        self.sentences.push(sentence);
        &self.sentences[self.sentences.len() - 1]
    }

    pub fn invalid_sentences(&self) -> usize {
        self.sentences
            .iter()
            .filter(|s| !s.analysis.is_valid())
            .count()
    }
}

impl Report {
    pub fn summary(&self) -> Summary {
        Summary {
            files: self.files.len(),
            sentences: self.files.iter().map(|f| f.sentences.len()).sum(),
            invalid_sentences: self.files.iter().map(FileReport::invalid_sentences).sum(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.summary().invalid_sentences > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_lines_are_not_sentences() {
        let file = FileReport::from_source("1.txt", "x = 1\n\ny 2\r\n\n");
        assert_eq!(file.sentences.len(), 2);
        assert_eq!(file.sentences[0].number, 1);
        assert_eq!(file.sentences[1].number, 2);
        assert_eq!(file.sentences[1].analysis.line, "y 2");
        assert_eq!(file.invalid_sentences(), 1);
    }

    #[test]
    fn test_push_line_numbers_sentences() {
        let mut file = FileReport::new("1.txt");
        assert_eq!(file.push_line("x = 1").number, 1);

        let second = file.push_line("x = 1.");
        assert_eq!(second.number, 2);
        assert!(!second.analysis.is_valid());
        assert_eq!(file.sentences.len(), 2);
    }

    #[test]
    fn test_summary() {
        let report = Report {
            files: vec![
                FileReport::from_source("1.txt", "x = 1\nx = 1."),
                FileReport::from_source("2.txt", "a = b"),
            ],
        };
        assert_eq!(
            report.summary(),
            Summary {
                files: 2,
                sentences: 3,
                invalid_sentences: 1
            }
        );
        assert!(report.has_errors());
        assert!(!Report::default().has_errors());
    }
}

use std::fmt::Write;

use crate::config::ReportConfig;
use crate::formatter::error::FormatterError;
use crate::report::{FileReport, Report, SentenceReport};

const FILE_RULE: &str = "####################";
const SENTENCE_RULE: &str = "==========";

pub struct FormatterVisitor {
    config: ReportConfig,
    output: String,
}

impl FormatterVisitor {
    pub fn new(config: ReportConfig) -> Self {
        Self {
            config,
            output: String::new(),
        }
    }

    pub fn format_report(&mut self, report: &Report) -> Result<String, FormatterError> {
        for file in &report.files {
            self.format_file(file)?;
        }
        Ok(std::mem::take(&mut self.output))
    }

    fn format_file(&mut self, file: &FileReport) -> Result<(), FormatterError> {
        writeln!(self.output, "{} {} {}", FILE_RULE, file.name, FILE_RULE)?;
        for sentence in &file.sentences {
            self.format_sentence(sentence)?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    fn format_sentence(&mut self, sentence: &SentenceReport) -> Result<(), FormatterError> {
        let analysis = &sentence.analysis;

        writeln!(self.output, "{} Sentence {}:", SENTENCE_RULE, sentence.number)?;
        writeln!(self.output, " Sentence: {}", analysis.line)?;
        writeln!(self.output)?;

        if analysis.is_valid() {
            writeln!(self.output, " --syntactically correct sentence--")?;
        }
        for error in &analysis.errors {
            writeln!(self.output, " {}", error.message)?;
            writeln!(self.output, " Parsed: {}", analysis.line)?;
            writeln!(self.output, " Error:  {}", error.caret_line)?;
        }
        writeln!(self.output)?;

        if self.config.show_lexer_output {
            let tokens: Vec<String> = analysis.tokens.iter().map(|t| t.to_string()).collect();
            writeln!(self.output, " Lexical analyzer output: [{}]", tokens.join(", "))?;
            writeln!(self.output)?;
        }
        Ok(())
    }
}

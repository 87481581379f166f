//! Batch driver over numbered input files (`1.txt`, `2.txt`, ...).
//!
//! Scanning starts at the configured first number and stops at the first number
//! whose file does not exist. Each file's non-empty lines are checked
//! independently and the combined report is written to the output file.

use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use tracing::{debug, info};

use crate::{
    config::CheckerConfig,
    error::{CheckerError, CheckerResult},
    formatter::Formatter,
    report::{FileReport, Report},
};

const BANNER_RULE: &str = "####################";

pub struct Runner {
    config: CheckerConfig,
}

impl Runner {
    pub fn new(config: CheckerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Numbered input files present in the input directory, in order.
    pub fn discover(&self) -> CheckerResult<Vec<(usize, PathBuf)>> {
        if !self.config.input_dir.is_dir() {
            return Err(CheckerError::InputDirNotFound(self.config.input_dir.clone()));
        }

        let files: Vec<_> = (self.config.first_file_number..)
            .map(|number| (number, self.config.input_path(number)))
            .take_while(|(_, path)| path.is_file())
            .collect();
        info!(
            "found {} input file(s) in {}",
            files.len(),
            self.config.input_dir.display()
        );
        Ok(files)
    }

    /// Checks every discovered file, echoing progress to stdout when enabled.
    pub fn run(&self) -> CheckerResult<Report> {
        let stdout = io::stdout();
        let mut console = stdout.lock();
        self.run_with_console(&mut console)
    }

    pub fn run_with_console<W: Write>(&self, console: &mut W) -> CheckerResult<Report> {
        let mut report = Report::default();

        for (number, path) in self.discover()? {
            let name = format!("{}.{}", number, self.config.input_extension);
            if self.config.progress {
                writeln!(console, "\n{} {} {}", BANNER_RULE, name, BANNER_RULE)?;
            }

            let source = fs::read_to_string(&path).map_err(|source| CheckerError::ReadInput {
                path: path.clone(),
                source,
            })?;
            debug!("checking {}", path.display());

            let mut file = FileReport::new(name);
            for line in source.lines().filter(|line| !line.is_empty()) {
                if self.config.progress {
                    writeln!(console, "  Now parsing:  {}", line)?;
                }
                let sentence = file.push_line(line);
                if self.config.progress && !sentence.analysis.is_valid() {
                    writeln!(console, "    ERRORS FOUND")?;
                }
            }
            report.files.push(file);
        }

        let summary = report.summary();
        info!(
            "checked {} sentence(s) in {} file(s), {} with errors",
            summary.sentences, summary.files, summary.invalid_sentences
        );
        Ok(report)
    }

    /// Formats `report` and writes it to the configured output file.
    pub fn write_report(&self, report: &Report) -> CheckerResult<PathBuf> {
        let formatter = Formatter::new(self.config.report.clone());
        let output = formatter.format(report)?;

        fs::write(&self.config.output_file, output)?;
        info!("report written to {}", self.config.output_file.display());
        Ok(self.config.output_file.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn runner_in(dir: &TempDir) -> Runner {
        Runner::new(CheckerConfig {
            input_dir: dir.path().to_path_buf(),
            output_file: dir.path().join("parser_output.txt"),
            ..Default::default()
        })
    }

    #[test]
    fn test_discover_stops_at_gap() {
        let dir = TempDir::new().unwrap();
        for name in ["1.txt", "2.txt", "4.txt"] {
            fs::write(dir.path().join(name), "x = 1\n").unwrap();
        }

        let files = runner_in(&dir).discover().unwrap();
        let numbers: Vec<usize> = files.iter().map(|(n, _)| *n).collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn test_missing_input_dir() {
        let runner = Runner::new(CheckerConfig {
            input_dir: PathBuf::from("/definitely/not/here"),
            ..Default::default()
        });
        assert!(matches!(
            runner.discover(),
            Err(CheckerError::InputDirNotFound(_))
        ));
    }

    #[test]
    fn test_console_progress() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("1.txt"), "x = 1\nx 1\n").unwrap();

        let mut console = Vec::new();
        let report = runner_in(&dir).run_with_console(&mut console).unwrap();
        let console = String::from_utf8(console).unwrap();

        assert_eq!(report.summary().invalid_sentences, 1);
        assert_eq!(
            console,
            "\n#################### 1.txt ####################\n  Now parsing:  x = 1\n  Now parsing:  x 1\n    ERRORS FOUND\n"
        );
    }

    #[test]
    fn test_quiet_run() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("1.txt"), "x = 1\n").unwrap();

        let mut runner = runner_in(&dir);
        runner.config.progress = false;
        let mut console = Vec::new();
        runner.run_with_console(&mut console).unwrap();
        assert!(console.is_empty());
    }
}

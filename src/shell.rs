//! Interactive line-command session.
//!
//! Owns the session [`Corpus`] and drives it from text commands, one per
//! line. Failed commands print a warning and the session keeps going.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::{
    checker::{self, CheckOutcome},
    config::CheckerConfig,
    corpus::Corpus,
    error::{CheckError, Result},
    report::{format_percent, write_report},
    upload::read_upload,
};

pub const HELP: &str = "\
commands:
  submit <text>      set the assignment text
  load <path>        set the assignment text from a .txt file
  add <path>         add a reference from a .txt file
  paste <text>       add pasted text as a reference
  list               show current references
  clear              remove all references
  threshold <0-100>  set the similarity highlight threshold
  check              run the plagiarism check
  report [path]      write the last report (default plagiarism_report.txt)
  help               show this message
  quit               leave the session";

/// whether the session continues after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Default)]
pub struct Shell {
    pub corpus: Corpus,
    pub config: CheckerConfig,
    last_outcome: Option<CheckOutcome>,
}

impl Shell {
    pub fn new(config: CheckerConfig) -> Self {
        Self {
            corpus: Corpus::new(),
            config,
            last_outcome: None,
        }
    }

    pub fn last_outcome(&self) -> Option<&CheckOutcome> {
        self.last_outcome.as_ref()
    }

    /// Read commands until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        writeln!(out, "📚 Enhanced Assignment Plagiarism Checker (type `help`)")?;
        for line in input.lines() {
            if self.execute(&line?, out)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Execute one command line
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let line = line.trim();
        let (cmd, arg) = match line.split_once(char::is_whitespace) {
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (line, ""),
        };
        let result = match cmd {
            "" => Ok(()),
            "submit" => {
                self.corpus.set_submission(arg);
                writeln!(out, "Assignment text set ({} words).", arg.split_whitespace().count())?;
                Ok(())
            }
            "load" => self.load(arg, out)?,
            "add" => self.add(arg, out)?,
            "paste" => {
                match self.corpus.add_pasted_reference(arg) {
                    Some(_) => writeln!(out, "Reference added successfully.")?,
                    None => writeln!(out, "warning: nothing to add, pasted text is blank")?,
                }
                Ok(())
            }
            "list" => {
                if self.corpus.references().is_empty() {
                    writeln!(out, "No references.")?;
                } else {
                    writeln!(out, "📚 Current References:")?;
                    for line in self.corpus.reference_listing() {
                        writeln!(out, "{line}")?;
                    }
                }
                Ok(())
            }
            "clear" => {
                self.corpus.clear_references();
                writeln!(out, "All references cleared.")?;
                Ok(())
            }
            "threshold" => self.threshold(arg, out)?,
            "check" => self.check(out)?,
            "report" => self.report(arg, out)?,
            "help" => {
                writeln!(out, "{HELP}")?;
                Ok(())
            }
            "quit" | "exit" => return Ok(Flow::Quit),
            other => {
                writeln!(out, "warning: unknown command `{other}` (type `help`)")?;
                Ok(())
            }
        };
        if let Err(e) = result {
            writeln!(out, "warning: {e}")?;
        }
        Ok(Flow::Continue)
    }

    fn load<W: Write>(&mut self, arg: &str, out: &mut W) -> io::Result<Result<()>> {
        Ok(match read_upload(arg) {
            Ok((name, text)) => {
                self.corpus.set_submission(text);
                writeln!(out, "Assignment loaded from {name}.")?;
                Ok(())
            }
            Err(e) => Err(e),
        })
    }

    fn add<W: Write>(&mut self, arg: &str, out: &mut W) -> io::Result<Result<()>> {
        Ok(match read_upload(arg) {
            Ok((name, text)) => {
                writeln!(out, "Reference {name} added.")?;
                self.corpus.add_reference(name, text);
                Ok(())
            }
            Err(e) => Err(e),
        })
    }

    fn threshold<W: Write>(&mut self, arg: &str, out: &mut W) -> io::Result<Result<()>> {
        let parsed = arg
            .parse::<u8>()
            .map_err(|e| CheckError::Config(format!("threshold {arg:?}: {e}")))
            .and_then(|percent| {
                CheckerConfig::builder()
                    .highlight_threshold(percent)
                    .top_terms(self.config.top_terms)
                    .report_file_name(self.config.report_file_name.clone())
                    .build()
            });
        Ok(match parsed {
            Ok(config) => {
                self.config = config;
                writeln!(out, "Highlight threshold set to {}%.", self.config.highlight_threshold)?;
                Ok(())
            }
            Err(e) => Err(e),
        })
    }

    fn check<W: Write>(&mut self, out: &mut W) -> io::Result<Result<()>> {
        let outcome = match checker::run(&self.corpus, &self.config) {
            Ok(outcome) => outcome,
            Err(e) => return Ok(Err(e)),
        };
        write_outcome(&outcome, &self.config, out)?;
        self.last_outcome = Some(outcome);
        Ok(Ok(()))
    }

    fn report<W: Write>(&mut self, arg: &str, out: &mut W) -> io::Result<Result<()>> {
        let Some(outcome) = &self.last_outcome else {
            writeln!(out, "warning: run `check` before downloading a report")?;
            return Ok(Ok(()));
        };
        let path = if arg.is_empty() {
            PathBuf::from(&self.config.report_file_name)
        } else {
            PathBuf::from(arg)
        };
        Ok(match write_report(&path, &outcome.report_text()) {
            Ok(()) => {
                writeln!(out, "📄 Report saved to {}", path.display())?;
                Ok(())
            }
            Err(e) => Err(e),
        })
    }
}

/// Print results, classification and analysis of one check
pub fn write_outcome<W: Write>(outcome: &CheckOutcome, config: &CheckerConfig, out: &mut W) -> io::Result<()> {
    writeln!(out, "📊 Similarity Results")?;
    // results are sorted, so the highlighted ones form a prefix
    let marked = outcome.highlighted(config).count();
    for (i, result) in outcome.results.iter().enumerate() {
        let mark = if i < marked { " ◀" } else { "" };
        writeln!(
            out,
            "{} — Similarity: {}%{mark}",
            result.reference_name,
            format_percent(result.score)
        )?;
    }
    writeln!(out, "{}", outcome.classification.message())?;

    let summary = &outcome.summary;
    writeln!(out, "📈 Assignment Analysis")?;
    writeln!(out, "- Word Count: {}", summary.word_count)?;
    writeln!(out, "- Sentence Count: {}", summary.sentence_count)?;
    writeln!(out, "- Flesch-Kincaid Grade Level: {}", crate::utils::format_float(summary.readability_grade))?;
    writeln!(out, "- Top Terms: {}", summary.key_terms.join(", "))?;
    Ok(())
}

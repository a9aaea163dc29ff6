//! CLI for the assignment plagiarism checker.

use std::io;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser as _;
use plagiarism_checker::{
    checker, report::write_report, shell::{write_outcome, Shell}, upload::read_upload, CheckerConfig, Corpus,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut config = CheckerConfig::from_env().context("reading environment configuration")?;

    match args.command {
        Command::Check {
            submission,
            text,
            references,
            paste,
            threshold,
            report,
            json,
        } => {
            if let Some(percent) = threshold {
                config = CheckerConfig::builder()
                    .highlight_threshold(percent)
                    .top_terms(config.top_terms)
                    .report_file_name(config.report_file_name)
                    .build()?;
            }
            let mut corpus = Corpus::new();
            if let Some(path) = submission {
                let (_, content) = read_upload(&path)
                    .with_context(|| format!("loading submission {}", path.display()))?;
                corpus.set_submission(content);
            } else if let Some(text) = text {
                corpus.set_submission(text);
            }
            for path in references {
                let (name, content) = read_upload(&path)
                    .with_context(|| format!("loading reference {}", path.display()))?;
                corpus.add_reference(name, content);
            }
            for text in paste {
                corpus.add_pasted_reference(text);
            }
            check(&corpus, &config, report, json)?;
        }
        Command::Shell => {
            let mut shell = Shell::new(config);
            let stdin = io::stdin();
            shell.run(stdin.lock(), &mut io::stdout())?;
        }
    }

    Ok(())
}

fn check(corpus: &Corpus, config: &CheckerConfig, report: Option<Option<PathBuf>>, json: bool) -> anyhow::Result<()> {
    let outcome = checker::run(corpus, config)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        write_outcome(&outcome, config, &mut io::stdout())?;
    }
    if let Some(path) = report {
        let path = path.unwrap_or_else(|| PathBuf::from(&config.report_file_name));
        write_report(&path, &outcome.report_text())?;
        eprintln!("📄 Report saved to {}", path.display());
    }
    Ok(())
}

#[derive(clap::Parser)]
#[command(name = "plagiarism-checker")]
#[command(about = "Compare an assignment against reference documents with TF-IDF cosine similarity")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Run one check and exit
    Check {
        /// Assignment file (.txt)
        #[arg(short, long, conflicts_with = "text")]
        submission: Option<PathBuf>,

        /// Assignment text given directly
        #[arg(short, long)]
        text: Option<String>,

        /// Reference files (.txt)
        #[arg(short, long = "reference")]
        references: Vec<PathBuf>,

        /// Reference text given directly, named "Manual Ref n"
        #[arg(short, long)]
        paste: Vec<String>,

        /// Similarity highlight threshold in percent
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        threshold: Option<u8>,

        /// Write the plain-text report (default: plagiarism_report.txt)
        #[arg(long, num_args = 0..=1)]
        report: Option<Option<PathBuf>>,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive session reading commands from stdin
    Shell,
}

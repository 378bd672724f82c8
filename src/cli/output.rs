use crate::cli::OutputFormat;
use colored::*;
use seqpair_bio::alignment::Alignment;
use seqpair_bio::seed::Extension;
use serde::Serialize;

#[derive(Serialize)]
struct AlignmentReport<'a> {
    #[serde(flatten)]
    alignment: &'a Alignment,
    identity: f64,
    gaps: usize,
}

pub fn print_alignment(alignment: &Alignment, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let report = AlignmentReport {
                alignment,
                identity: alignment.identity(),
                gaps: alignment.gaps(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            println!("{} {}", "Score:".bold(), alignment.score);
            if !alignment.is_empty() {
                println!("{}", alignment);
            }
            println!(
                "{} {:.1}%  {} {}",
                "Identity:".bold(),
                alignment.identity() * 100.0,
                "Gaps:".bold(),
                alignment.gaps()
            );
        }
    }
    Ok(())
}

pub fn print_extensions(extensions: &[Extension], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(extensions)?),
        OutputFormat::Text => {
            if extensions.is_empty() {
                println!("{}", "No extensions found".yellow());
                return Ok(());
            }

            let noun = if extensions.len() == 1 { "extension" } else { "extensions" };
            println!("{} {}", extensions.len().to_string().bold(), noun);
            println!("{:>8} {:>8} {:>6}  {}", "subject", "query", "length", "text");
            for extension in extensions {
                println!(
                    "{:>8} {:>8} {:>6}  {}",
                    extension.subject_pos,
                    extension.query_pos,
                    extension.text.len(),
                    extension.text_str()
                );
            }
        }
    }
    Ok(())
}

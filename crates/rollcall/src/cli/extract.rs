use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use chrono::Utc;
use console::style;

use rollcall_core::{Corpus, ExtractionReport, NamePipeline};

use super::{load_config, ExtractArgs};
use crate::discovery;
use crate::export::ExportDocument;

pub fn run(cwd: &Path, args: &ExtractArgs) -> Result<()> {
    let mut config = load_config(cwd, args.config.as_deref())?;
    if let Some(min) = args.min_frequency {
        config.min_frequency = min;
    }
    if let Some(matcher) = args.matcher {
        config.matcher = matcher.into();
    }
    let pipeline = NamePipeline::new(config)?;

    let root = cwd.join(&args.root);
    let files = discovery::sample(discovery::discover(&root, &args.pattern)?, args.sample);
    if files.is_empty() {
        bail!(
            "no transcripts matching {} under {}",
            args.pattern,
            root.display()
        );
    }
    eprintln!(
        "{} Reading {} transcripts from {}",
        style("●").blue(),
        files.len(),
        root.display()
    );

    let corpus = Corpus::from_paths(&files);
    let stats = corpus.stats();
    for path in &stats.skipped {
        eprintln!("  {} skipped {}", style("!").yellow(), path.display());
    }

    let report = pipeline.run_corpus(&corpus);
    let document = ExportDocument::build(&report, pipeline.config(), &stats, Utc::now());

    let json_path = output_path(cwd, &args.output_prefix, "json");
    let csv_path = output_path(cwd, &args.output_prefix, "csv");
    document.write_json(&json_path)?;
    document.write_csv(&csv_path)?;

    print_summary(&report, args.top);
    eprintln!("  Wrote {}", json_path.display());
    eprintln!("  Wrote {}", csv_path.display());

    Ok(())
}

fn output_path(cwd: &Path, prefix: &str, extension: &str) -> PathBuf {
    cwd.join(format!("{prefix}.{extension}"))
}

fn print_summary(report: &ExtractionReport, top: usize) {
    let counts = &report.counts;
    eprintln!(
        "{} {} names from {} title-prefixed candidates",
        style("●").green(),
        style(counts.clusters).bold(),
        counts.titled
    );
    eprintln!(
        "  Frequent: {}  Validated: {}  Rejected: {}",
        counts.frequent,
        counts.validated,
        report.validation.rejected.len()
    );

    let summary = report.confidence_summary();
    eprintln!(
        "  Confidence: {} high, {} medium, {} low",
        summary.high, summary.medium, summary.low
    );

    if report.is_empty() {
        eprintln!("  {}", style("No names found").dim());
        return;
    }

    eprintln!();
    for (rank, cluster) in report.clusters_by_frequency().into_iter().take(top).enumerate() {
        let aliases: Vec<&str> = cluster.aliases().collect();
        if aliases.is_empty() {
            eprintln!("  {:>3}. {} ({})", rank + 1, cluster.canonical, cluster.total_count);
        } else {
            eprintln!(
                "  {:>3}. {} ({}) {}",
                rank + 1,
                cluster.canonical,
                cluster.total_count,
                style(format!("aka {}", aliases.join(", "))).dim()
            );
        }
    }
}

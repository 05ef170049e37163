//! JSON and CSV renderings of an extraction run.
//!
//! The JSON document is the lossless form: each entity keeps its full variant
//! list, canonical spelling first, so it reads back into the same clusters. The
//! CSV lists only the alternate spellings, matching the spreadsheet layout the
//! transcript team already uses.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rollcall_core::{
    CanonicalCluster, ConfidenceLevel, CorpusStats, ExtractionReport, MatcherKind, PipelineConfig,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub metadata: Metadata,
    pub summary_statistics: SummaryStatistics,
    pub entities: Vec<EntityRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub extraction_date: DateTime<Utc>,
    pub total_files_processed: usize,
    pub files_skipped: usize,
    pub total_characters_processed: usize,
    pub min_frequency_threshold: u32,
    pub total_names_found: usize,
    pub extraction_settings: ExtractionSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionSettings {
    pub max_words_per_name: usize,
    pub similarity_threshold: f64,
    pub length_ratio_floor: f64,
    pub matcher: MatcherKind,
    pub titles: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub high_confidence: usize,
    pub medium_confidence: usize,
    pub low_confidence: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub name: String,
    pub frequency: u64,
    pub confidence_level: ConfidenceLevel,
    /// Every merged spelling, canonical first.
    pub variants: Vec<String>,
}

impl EntityRecord {
    fn from_cluster(cluster: &CanonicalCluster, level: ConfidenceLevel) -> Self {
        Self {
            name: cluster.canonical.clone(),
            frequency: cluster.total_count,
            confidence_level: level,
            variants: cluster.variants.clone(),
        }
    }

    /// Variants other than the canonical name.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.variants
            .iter()
            .map(String::as_str)
            .filter(move |v| *v != self.name)
    }
}

impl ExportDocument {
    pub fn build(
        report: &ExtractionReport,
        config: &PipelineConfig,
        corpus: &CorpusStats,
        extracted_at: DateTime<Utc>,
    ) -> Self {
        let entities: Vec<EntityRecord> = report
            .clusters_by_frequency()
            .into_iter()
            .map(|c| EntityRecord::from_cluster(c, report.confidence_of(c)))
            .collect();

        let summary = report.confidence_summary();

        Self {
            metadata: Metadata {
                extraction_date: extracted_at,
                total_files_processed: corpus.sources,
                files_skipped: corpus.skipped.len(),
                total_characters_processed: corpus.characters,
                min_frequency_threshold: config.min_frequency,
                total_names_found: entities.len(),
                extraction_settings: ExtractionSettings {
                    max_words_per_name: config.max_name_words,
                    similarity_threshold: config.similarity_threshold,
                    length_ratio_floor: config.length_ratio_floor,
                    matcher: config.matcher,
                    titles: config.titles.clone(),
                },
            },
            summary_statistics: SummaryStatistics {
                high_confidence: summary.high,
                medium_confidence: summary.medium,
                low_confidence: summary.low,
            },
            entities,
        }
    }

    /// Rebuild the clusters this document was produced from.
    pub fn clusters(&self) -> Vec<CanonicalCluster> {
        self.entities
            .iter()
            .map(|e| CanonicalCluster {
                canonical: e.name.clone(),
                total_count: e.frequency,
                variants: e.variants.clone(),
            })
            .collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?)
            .with_context(|| format!("failed to write {}", path.display()))
    }

    pub fn read_json(path: &Path) -> Result<Self> {
        let data =
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json(&data)
    }

    pub fn to_csv(&self) -> String {
        let mut out = String::from("Name,Frequency,Variants,Confidence_Level\n");
        for entity in &self.entities {
            let aliases = entity.aliases().collect::<Vec<_>>().join("; ");
            let _ = writeln!(
                out,
                "{},{},{},{}",
                csv_field(&entity.name),
                entity.frequency,
                csv_field(&aliases),
                entity.confidence_level.label()
            );
        }
        out
    }

    pub fn write_csv(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_csv())
            .with_context(|| format!("failed to write {}", path.display()))
    }
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rollcall_core::{Corpus, NamePipeline};

    use super::*;

    fn sample_document() -> ExportDocument {
        let mut corpus = Corpus::new();
        corpus.push_text(&"Representative Garcia Smith. ".repeat(6));
        corpus.push_text(&"Representative Garcia. ".repeat(4));
        corpus.push_text(&"Senator Dell'Aqua. ".repeat(3));

        let config = PipelineConfig::default();
        let report = NamePipeline::new(config.clone()).unwrap().run_corpus(&corpus);
        let at = Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).unwrap();
        ExportDocument::build(&report, &config, &corpus.stats(), at)
    }

    #[test]
    fn build_orders_entities_and_fills_metadata() {
        let doc = sample_document();

        assert_eq!(doc.metadata.total_files_processed, 3);
        assert_eq!(doc.metadata.total_names_found, 2);
        assert_eq!(doc.metadata.min_frequency_threshold, 3);
        assert_eq!(doc.entities[0].name, "Garcia Smith");
        assert_eq!(doc.entities[0].frequency, 10);
        assert_eq!(doc.entities[0].confidence_level, ConfidenceLevel::High);
        assert_eq!(doc.entities[1].name, "Dell'Aqua");
        assert_eq!(doc.summary_statistics.high_confidence, 1);
        assert_eq!(doc.summary_statistics.medium_confidence, 1);
    }

    #[test]
    fn json_preserves_variant_order() {
        let doc = sample_document();
        let restored = ExportDocument::from_json(&doc.to_json().unwrap()).unwrap();

        assert_eq!(restored, doc);
        assert_eq!(restored.clusters()[0].variants, vec!["Garcia Smith", "Garcia"]);
    }

    #[test]
    fn json_file_round_trips_on_disk() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("names.json");
        let doc = sample_document();

        doc.write_json(&path).unwrap();
        let restored = ExportDocument::read_json(&path).unwrap();

        assert_eq!(restored, doc);
        assert!(ExportDocument::read_json(&tmp.path().join("absent.json")).is_err());
    }

    #[test]
    fn json_uses_snake_case_levels() {
        let json = sample_document().to_json().unwrap();
        assert!(json.contains("\"confidence_level\": \"high\""));
        assert!(json.contains("\"extraction_date\": \"2026-01-15T09:30:00Z\""));
    }

    #[test]
    fn csv_lists_aliases_only() {
        let csv = sample_document().to_csv();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "Name,Frequency,Variants,Confidence_Level");
        assert_eq!(lines[1], "Garcia Smith,10,Garcia,High");
        assert_eq!(lines[2], "Dell'Aqua,3,,Medium");
    }

    #[test]
    fn csv_quotes_special_characters() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a, b"), "\"a, b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}

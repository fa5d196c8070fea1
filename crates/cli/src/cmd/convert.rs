//! Convert command: markdown topics to content modules.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::Utc;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use mdcards_core::artifact::{render_module, write_module};
use mdcards_core::config::types::ResolvedConfig;
use mdcards_core::deck::{ParseOptions, ParsedTopic, parse_topic};
use mdcards_core::ids::is_valid_topic_id;
use mdcards_core::meta::{TopicIndex, TopicMeta};
use mdcards_core::sources::{SourceDocument, discover_sources, source_for_topic};

use crate::ConvertArgs;

/// Outcome for one source document.
#[derive(Debug, Serialize)]
pub struct DocumentReport {
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DocumentReport {
    fn new(source: String) -> Self {
        Self { source, topic_id: None, output: None, warnings: Vec::new(), error: None }
    }

    fn failed(&self) -> bool {
        self.error.is_some()
    }
}

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &ConvertArgs) {
    let rc = super::load_config(config, profile, "convert");

    let paths = match collect_sources(&rc, &args.target) {
        Ok(p) => p,
        Err(msg) => {
            println!("FAIL mdc convert");
            println!("{msg}");
            std::process::exit(1);
        }
    };
    info!("Converting {} topic(s) from {}", paths.len(), rc.markdown_dir.display());

    let (mut reports, parsed) = parse_all(&paths, &rc.parsing);
    let topics = write_all(&rc, &mut reports, parsed);

    let mut index_error = None;
    if !topics.is_empty() {
        if let Err(e) = update_index(&rc.meta_file, &topics) {
            warn!("Topic index not updated: {e}");
            index_error = Some(e);
        }
    }

    let failed = reports.iter().filter(|r| r.failed()).count();
    let ok = failed == 0 && index_error.is_none();

    if args.json {
        match serde_json::to_string_pretty(&reports) {
            Ok(json) => println!("{json}"),
            Err(e) => println!("failed to serialize report: {e}"),
        }
    } else {
        println!("{} mdc convert", if ok { "OK  " } else { "FAIL" });
        for report in &reports {
            match (&report.error, &report.output) {
                (Some(err), _) => println!("  {}: {err}", report.source),
                (None, Some(out)) => println!("  {} -> {}", report.source, out.display()),
                (None, None) => {}
            }
            for w in &report.warnings {
                println!("    warning: {w}");
            }
        }
        if let Some(e) = &index_error {
            println!("topic index: {e}");
        }
        println!("converted: {}, failed: {}", reports.len() - failed, failed);
    }

    if !ok {
        std::process::exit(1);
    }
}

fn collect_sources(rc: &ResolvedConfig, target: &str) -> Result<Vec<PathBuf>, String> {
    if target.eq_ignore_ascii_case("all") {
        let files = discover_sources(&rc.markdown_dir).map_err(|e| e.to_string())?;
        if files.is_empty() {
            return Err(format!("no markdown files in {}", rc.markdown_dir.display()));
        }
        return Ok(files);
    }
    if !is_valid_topic_id(target) {
        return Err(format!("invalid topic id '{target}'"));
    }
    source_for_topic(&rc.markdown_dir, target).map(|p| vec![p]).map_err(|e| e.to_string())
}

/// Load and parse every source in parallel, then fail ids claimed twice.
fn parse_all(
    paths: &[PathBuf],
    options: &ParseOptions,
) -> (Vec<DocumentReport>, Vec<Option<(SourceDocument, ParsedTopic)>>) {
    let results: Vec<_> = paths
        .par_iter()
        .map(|path| -> Result<(SourceDocument, ParsedTopic), String> {
            let source = SourceDocument::load(path).map_err(|e| e.to_string())?;
            let topic = parse_topic(&source, options).map_err(|e| e.to_string())?;
            if !is_valid_topic_id(&topic.topic_id) {
                return Err(format!(
                    "topicId '{}' may only contain letters, digits, '_' and '-'",
                    topic.topic_id
                ));
            }
            Ok((source, topic))
        })
        .collect();

    let mut claimed: HashMap<&str, Vec<usize>> = HashMap::new();
    for (i, result) in results.iter().enumerate() {
        if let Ok((_, topic)) = result {
            claimed.entry(topic.topic_id.as_str()).or_default().push(i);
        }
    }
    let duplicates: HashMap<usize, String> = claimed
        .iter()
        .filter(|(_, owners)| owners.len() > 1)
        .flat_map(|(id, owners)| owners.iter().map(move |&i| (i, (*id).to_string())))
        .collect();

    let mut reports = Vec::with_capacity(paths.len());
    let mut parsed = Vec::with_capacity(paths.len());
    for (i, (path, result)) in paths.iter().zip(results).enumerate() {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let mut report = DocumentReport::new(name);

        match result {
            Ok(_) if duplicates.contains_key(&i) => {
                report.error =
                    Some(format!("topicId '{}' is used by more than one file", duplicates[&i]));
                parsed.push(None);
            }
            Ok((source, topic)) => {
                report.topic_id = Some(topic.topic_id.clone());
                report.warnings = topic.warnings.iter().map(ToString::to_string).collect();
                parsed.push(Some((source, topic)));
            }
            Err(e) => {
                report.error = Some(e);
                parsed.push(None);
            }
        }
        reports.push(report);
    }
    (reports, parsed)
}

/// Write modules one at a time and return index entries for the successes.
fn write_all(
    rc: &ResolvedConfig,
    reports: &mut [DocumentReport],
    parsed: Vec<Option<(SourceDocument, ParsedTopic)>>,
) -> Vec<TopicMeta> {
    let now = Utc::now();
    let mut topics = Vec::new();

    for (report, item) in reports.iter_mut().zip(parsed) {
        let Some((source, topic)) = item else { continue };
        for w in &report.warnings {
            warn!("{}: {w}", source.name);
        }

        let written = render_module(&topic.topic_id, &source.name, &topic.deck, now)
            .map_err(|e| e.to_string())
            .and_then(|text| {
                write_module(&rc.content_dir, &topic.topic_id, &text).map_err(|e| e.to_string())
            });

        match written {
            Ok(path) => {
                info!("{} -> {}", source.name, path.display());
                report.output = Some(path);
                topics.push(TopicMeta {
                    id: topic.topic_id,
                    title: topic.title,
                    description: topic.description,
                });
            }
            Err(e) => report.error = Some(e),
        }
    }
    topics
}

fn update_index(meta_file: &Path, topics: &[TopicMeta]) -> Result<(), String> {
    let mut index = TopicIndex::load(meta_file).map_err(|e| e.to_string())?;
    if index.merge(topics) {
        index.save(meta_file, Utc::now()).map_err(|e| e.to_string())?;
        info!("Updated topic index {}", meta_file.display());
    }
    Ok(())
}

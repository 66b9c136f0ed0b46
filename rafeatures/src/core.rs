//! Sketch processing pipeline shared by the CLI and library users.
//! No IDE dependencies: the sketch is a file, the sketchbook a directory.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::features::{detect, DetectedFeature, DetectedFeatureSet};
use crate::generator::{render_features_with_banner, render_labels_with_banner, Banner};
use crate::labels::{build_defaults, scan, LabelDictionary, LabelEvent};
use crate::rules::{load_rules, parse_rules, FeatureRule, RulesFetcher, DEFAULT_RULES_URL};
use crate::version::{code_version, read_library_version, LibraryVersion};

#[derive(Debug, thiserror::Error)]
pub enum RaFeaturesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Sketch not found: {0}")]
    SketchNotFound(PathBuf),
    #[error("Missing feature rules file {path}. Download it manually from {url} and save it there")]
    MissingRules { path: PathBuf, url: String },
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where everything lives inside an Arduino sketchbook.
#[derive(Debug, Clone)]
pub struct SketchbookLayout {
    root: PathBuf,
}

impl SketchbookLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn features_dir(&self) -> PathBuf {
        self.root.join("libraries").join("ReefAngel_Features")
    }

    pub fn features_header(&self) -> PathBuf {
        self.features_dir().join("ReefAngel_Features.h")
    }

    pub fn labels_dir(&self) -> PathBuf {
        self.root.join("libraries").join("RA_CustomLabels")
    }

    pub fn labels_header(&self) -> PathBuf {
        self.labels_dir().join("RA_CustomLabels.h")
    }

    pub fn update_dir(&self) -> PathBuf {
        self.root.join("update")
    }

    /// Cached copy of the master rule table.
    pub fn rules_file(&self) -> PathBuf {
        self.update_dir().join("feature.txt")
    }

    pub fn library_header(&self) -> PathBuf {
        self.root.join("libraries").join("ReefAngel").join("ReefAngel.h")
    }
}

/// Options for a processing run.
#[derive(Clone, Debug)]
pub struct ProcessOptions {
    pub sketchbook: PathBuf,
    /// Use this rule table instead of the sketchbook cache. Never downloaded.
    pub rules_file: Option<PathBuf>,
    pub rules_url: String,
    pub offline: bool,
    /// Render without creating directories or writing headers
    pub dry_run: bool,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            sketchbook: PathBuf::from("."),
            rules_file: None,
            rules_url: DEFAULT_RULES_URL.to_string(),
            offline: false,
            dry_run: false,
        }
    }
}

impl ProcessOptions {
    pub fn layout(&self) -> SketchbookLayout {
        SketchbookLayout::new(&self.sketchbook)
    }

    pub fn rules_path(&self) -> PathBuf {
        self.rules_file
            .clone()
            .unwrap_or_else(|| self.layout().rules_file())
    }
}

/// Everything derived from one sketch text.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    pub features: DetectedFeatureSet,
    pub labels: LabelDictionary,
    pub label_events: Vec<LabelEvent>,
    pub features_header: String,
    pub labels_header: String,
}

/// Detect, scan and render. No I/O.
pub fn process_source(source: &str, sketch_name: &str, rules: &[FeatureRule]) -> ProcessOutput {
    process_source_with_banner(source, rules, &Banner::now(sketch_name))
}

pub fn process_source_with_banner(
    source: &str,
    rules: &[FeatureRule],
    banner: &Banner,
) -> ProcessOutput {
    let features = detect(source, rules);

    let mut labels = build_defaults();
    let label_events = scan(source, &mut labels);

    let features_header = render_features_with_banner(features.symbols(), banner);
    let labels_header = render_labels_with_banner(&labels, banner);

    ProcessOutput {
        features,
        labels,
        label_events,
        features_header,
        labels_header,
    }
}

/// Summary of a run, for display or JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessReport {
    pub sketch: PathBuf,
    pub rules_loaded: usize,
    pub features: Vec<DetectedFeature>,
    pub label_events: Vec<LabelEvent>,
    pub features_path: PathBuf,
    pub labels_path: PathBuf,
    pub library_version: Option<LibraryVersion>,
    pub code_version: Option<String>,
    pub written: bool,
}

impl ProcessReport {
    pub fn defines(&self) -> impl Iterator<Item = &str> {
        self.features.iter().map(|f| f.symbol.as_str())
    }

    pub fn unknown_labels(&self) -> impl Iterator<Item = &LabelEvent> {
        self.label_events.iter().filter(|e| e.is_unknown())
    }

    pub fn overridden_labels(&self) -> impl Iterator<Item = &LabelEvent> {
        self.label_events.iter().filter(|e| !e.is_unknown())
    }
}

fn has_rules_file(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|m| m.is_file() && m.len() > 0)
        .unwrap_or(false)
}

fn create_dir(path: &Path) -> Result<(), RaFeaturesError> {
    if !path.exists() {
        tracing::info!("Creating missing folder {}", path.display());
    }
    std::fs::create_dir_all(path).map_err(|source| RaFeaturesError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<(), RaFeaturesError> {
    std::fs::write(path, contents).map_err(|source| RaFeaturesError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Core processing API used by the CLI.
pub struct RaFeaturesCore;

impl RaFeaturesCore {
    /// Create the output folders and load the rule table, downloading it at
    /// most once. A dry run keeps a downloaded table in memory instead of
    /// caching it in the sketchbook.
    pub async fn ensure_prerequisites(
        options: &ProcessOptions,
        fetcher: Option<&dyn RulesFetcher>,
    ) -> Result<Vec<FeatureRule>, RaFeaturesError> {
        let layout = options.layout();
        if !options.dry_run {
            create_dir(&layout.labels_dir())?;
            create_dir(&layout.features_dir())?;
        }

        let rules_path = options.rules_path();
        if has_rules_file(&rules_path) {
            return Ok(load_rules(&rules_path));
        }
        tracing::error!("Missing feature rules file {}", rules_path.display());

        let fetcher = fetcher.filter(|_| !options.offline && options.rules_file.is_none());
        if let Some(fetcher) = fetcher {
            match fetcher.fetch().await {
                Ok(body) if options.dry_run => {
                    tracing::info!("Downloaded {} (dry run, not cached)", fetcher.source());
                    if !body.is_empty() {
                        return Ok(parse_rules(&body));
                    }
                }
                Ok(body) => {
                    create_dir(&layout.update_dir())?;
                    write_file(&rules_path, &body)?;
                    tracing::info!("Downloaded {} to {}", fetcher.source(), rules_path.display());
                    if has_rules_file(&rules_path) {
                        return Ok(load_rules(&rules_path));
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to download feature rules automatically: {}", e);
                }
            }
        }

        Err(RaFeaturesError::MissingRules {
            path: rules_path,
            url: options.rules_url.clone(),
        })
    }

    /// Write both headers, features first. A failure on the labels header
    /// leaves the features header in place.
    pub fn persist(
        layout: &SketchbookLayout,
        output: &ProcessOutput,
    ) -> Result<(), RaFeaturesError> {
        let features_path = layout.features_header();
        write_file(&features_path, &output.features_header)?;
        tracing::info!("Wrote {}", features_path.display());

        let labels_path = layout.labels_header();
        write_file(&labels_path, &output.labels_header)?;
        tracing::info!("Wrote {}", labels_path.display());
        Ok(())
    }

    /// Full run: prerequisites, rules, sketch, detection, labels, headers.
    pub async fn run(
        sketch: &Path,
        options: &ProcessOptions,
        fetcher: Option<&dyn RulesFetcher>,
    ) -> Result<ProcessReport, RaFeaturesError> {
        let layout = options.layout();
        let library_version = read_library_version(&layout.library_header());

        let rules = Self::ensure_prerequisites(options, fetcher).await?;

        if !sketch.is_file() {
            return Err(RaFeaturesError::SketchNotFound(sketch.to_path_buf()));
        }
        let source = std::fs::read_to_string(sketch)?;
        let sketch_name = sketch
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let code_version = code_version(&source);
        tracing::info!("User Code Version: {}", code_version.as_deref().unwrap_or("NONE"));

        tracing::info!("Processing {} for Features and Labels", sketch_name);
        let output = process_source(&source, &sketch_name, &rules);

        if !options.dry_run {
            Self::persist(&layout, &output)?;
        }

        Ok(ProcessReport {
            sketch: sketch.to_path_buf(),
            rules_loaded: rules.len(),
            features: output.features.features().to_vec(),
            label_events: output.label_events,
            features_path: layout.features_header(),
            labels_path: layout.labels_header(),
            library_version,
            code_version,
            written: !options.dry_run,
        })
    }

    /// [`RaFeaturesCore::run`] on a private single-threaded runtime, for
    /// callers without one.
    pub fn run_blocking(
        sketch: &Path,
        options: &ProcessOptions,
        fetcher: Option<&dyn RulesFetcher>,
    ) -> Result<ProcessReport, RaFeaturesError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(Self::run(sketch, options, fetcher))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_paths() {
        let layout = SketchbookLayout::new("/sb");
        assert_eq!(
            layout.features_header(),
            PathBuf::from("/sb/libraries/ReefAngel_Features/ReefAngel_Features.h")
        );
        assert_eq!(
            layout.labels_header(),
            PathBuf::from("/sb/libraries/RA_CustomLabels/RA_CustomLabels.h")
        );
        assert_eq!(layout.rules_file(), PathBuf::from("/sb/update/feature.txt"));
    }

    #[test]
    fn test_rules_path_override() {
        let options = ProcessOptions {
            rules_file: Some(PathBuf::from("custom.txt")),
            ..Default::default()
        };
        assert_eq!(options.rules_path(), PathBuf::from("custom.txt"));
        assert_eq!(
            ProcessOptions::default().rules_path(),
            PathBuf::from("./update/feature.txt")
        );
    }

    #[test]
    fn test_process_source_label_annotation() {
        let output = process_source("// RA_LABEL LABEL_PH=Acidity\n", "Reef.ino", &[]);
        assert!(output
            .labels_header
            .contains("const char LABEL_PH[] PROGMEM = \"Acidity\";"));
        let defines: Vec<_> = output.features.symbols().collect();
        assert_eq!(defines, vec!["WDT", "VersionMenu", "SIMPLE_MENU"]);
        assert_eq!(output.label_events.len(), 1);
    }
}

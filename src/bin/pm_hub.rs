// PM Standards Hub command line
//
// Usage: pm_hub <COMMAND> [--json] [--standards FILE] [--references FILE] [--base-url URL]
//
// Configuration comes from PM_HUB_* environment variables; flags override them.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use pm_standards_hub::export::{
    comparison_file_name, recommendation_file_name, render_comparison, render_recommendation, write_artifact,
    ComparisonReport, RecommendationReport,
};
use pm_standards_hub::{
    Duration, ExportFormat, HubConfig, JsonFormatter, ProjectProfile, ProjectType, ReferenceItem, ReferenceStandard,
    RiskLevel, StandardId, StandardsHub,
};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "pm_hub", version, about = "Search, compare and export PMBOK 7, PRINCE2 and ISO 21502 guidance")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    /// Standards corpus file (overrides PM_HUB_STANDARDS)
    #[arg(long, global = true)]
    standards: Option<PathBuf>,
    /// Reference corpus file (overrides PM_HUB_REFERENCES)
    #[arg(long, global = true)]
    references: Option<PathBuf>,
    /// Base for document links (overrides PM_HUB_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lists comparable topics.
    Topics {
        /// Only topics covered by every standard
        #[arg(long)]
        common: bool,
        /// Suggest topics whose title matches this text
        #[arg(long)]
        suggest: Option<String>,
    },
    /// Searches all standards for a keyword.
    Search { query: String },
    /// Compares a topic across standards.
    Compare {
        topic: String,
        /// Standard to include (repeatable); defaults to all three
        #[arg(long = "standard")]
        standards: Vec<StandardId>,
    },
    /// Lists references for a topic.
    Refs {
        topic: String,
        #[arg(long)]
        standard: Option<ReferenceStandard>,
    },
    /// Searches references by keyword.
    FindRefs { query: String },
    /// Filters the bibliography.
    Bibliography {
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long)]
        standard: Option<ReferenceStandard>,
        #[arg(long)]
        topic: Option<String>,
        /// Show per-topic counts instead of entries
        #[arg(long)]
        stats: bool,
    },
    /// Generates a tailored process recommendation.
    Recommend(ProfileArgs),
    /// Exports a comparison to a file.
    ExportComparison {
        topic: String,
        #[arg(long = "standard")]
        standards: Vec<StandardId>,
        #[arg(long, value_enum, default_value = "pdf")]
        format: ExportFormat,
        /// Output directory (overrides PM_HUB_OUTPUT_DIR)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Exports a recommendation to a file.
    ExportRecommendation {
        #[command(flatten)]
        profile: ProfileArgs,
        #[arg(long, value_enum, default_value = "pdf")]
        format: ExportFormat,
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

#[derive(clap::Args, Debug)]
struct ProfileArgs {
    #[arg(long = "type")]
    project_type: ProjectType,
    #[arg(long)]
    duration: Duration,
    #[arg(long)]
    risk: RiskLevel,
}

impl ProfileArgs {
    fn profile(&self) -> ProjectProfile {
        ProjectProfile::new(self.project_type, self.duration, self.risk)
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pm_standards_hub=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = HubConfig::from_env();
    if let Some(path) = cli.standards.clone() {
        config.standards_path = Some(path);
    }
    if let Some(path) = cli.references.clone() {
        config.references_path = Some(path);
    }
    if let Some(base) = cli.base_url.clone() {
        config.base_url = base;
    }

    let hub = StandardsHub::from_config(&config).context("Failed to load corpora")?;

    match &cli.command {
        Commands::Topics { common, suggest } => {
            let topics = match suggest {
                Some(q) => hub.suggest_topics(q),
                None if *common => hub.common_topics(),
                None => pm_standards_hub::topics::all_topics(&hub.corpus),
            };
            if cli.json {
                return print_json(&topics);
            }
            for t in &topics {
                println!("{:<28} {}", t.id, t.title);
            }
        }

        Commands::Search { query } => {
            let hits = hub.search(query);
            if cli.json {
                return print_json(&hits);
            }
            if hits.is_empty() {
                println!("No results for '{}'", query);
            }
            for hit in &hits {
                println!("[{:>3}] {} / {}", hit.relevance, hit.standard_name, hit.section_title);
                println!("      {}", hit.excerpt);
            }
        }

        Commands::Compare { topic, standards } => {
            let result = hub
                .compare(topic, standards)
                .with_context(|| format!("Topic '{}' is not covered by every selected standard", topic))?;
            if cli.json {
                return print_json(&ComparisonReport::new(&result));
            }
            println!("Comparison: {}\n", result.topic);
            for (id, view) in result.views() {
                println!("{}: {}", id.label(), view.title);
                println!("  {}\n", view.content);
            }
            print_list("Similarities", &result.analysis.similarities);
            print_list("Differences", &result.analysis.differences);
            println!("Unique Points:");
            for unique in &result.analysis.unique_points {
                println!("  {}:", unique.standard.label());
                for point in &unique.points {
                    println!("    - {}", point);
                }
            }
        }

        Commands::Refs { topic, standard } => {
            let refs = hub.references_for_topic(topic, *standard);
            print_references(&hub, &refs, cli.json)?;
        }

        Commands::FindRefs { query } => {
            let refs = hub.search_references(query);
            print_references(&hub, &refs, cli.json)?;
        }

        Commands::Bibliography { query, standard, topic, stats } => {
            if *stats {
                let stats = hub.references.topic_statistics();
                if cli.json {
                    return print_json(&stats);
                }
                println!("{:<28} {:>5} {:>5} {:>7} {:>5} {:>7}", "topic", "total", "pmbok", "prince2", "iso", "general");
                for s in &stats {
                    println!(
                        "{:<28} {:>5} {:>5} {:>7} {:>5} {:>7}",
                        s.topic_id, s.total, s.pmbok, s.prince2, s.iso, s.general
                    );
                }
            } else {
                let refs = hub.references.filter(query, *standard, topic.as_deref());
                print_references(&hub, &refs, cli.json)?;
            }
        }

        Commands::Recommend(args) => {
            let report = RecommendationReport::new(args.profile());
            if cli.json {
                return print_json(&report);
            }
            println!("{}", report.recommendation);
        }

        Commands::ExportComparison { topic, standards, format, out_dir } => {
            let result = hub
                .compare(topic, standards)
                .with_context(|| format!("Topic '{}' is not covered by every selected standard", topic))?;
            let bytes = render_comparison(&result, *format, Utc::now())?;
            let dir = out_dir.clone().unwrap_or_else(|| config.output_dir.clone());
            let path = write_artifact(&dir, &comparison_file_name(topic, *format), &bytes)?;
            println!("{}", path.display());
        }

        Commands::ExportRecommendation { profile, format, out_dir } => {
            let bytes = render_recommendation(&profile.profile(), *format, Utc::now())?;
            let dir = out_dir.clone().unwrap_or_else(|| config.output_dir.clone());
            let path = write_artifact(&dir, &recommendation_file_name(*format), &bytes)?;
            println!("{}", path.display());
        }
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", JsonFormatter::format(value).context("Failed to serialize output")?);
    Ok(())
}

fn print_list(title: &str, items: &[String]) {
    println!("{}:", title);
    if items.is_empty() {
        println!("  (none)");
    }
    for (i, item) in items.iter().enumerate() {
        println!("  {}. {}", i + 1, item);
    }
    println!();
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LinkedReference<'a> {
    #[serde(flatten)]
    item: &'a ReferenceItem,
    link: String,
}

fn print_references(hub: &StandardsHub, refs: &[&ReferenceItem], json: bool) -> Result<()> {
    if json {
        let linked: Vec<LinkedReference> = refs
            .iter()
            .map(|&item| LinkedReference {
                item,
                link: hub.document_link(item),
            })
            .collect();
        return print_json(&linked);
    }
    if refs.is_empty() {
        println!("No references found");
    }
    for item in refs {
        let page = if item.is_url() { String::new() } else { format!(" p.{}", item.page) };
        println!("[{}] {}{}", item.standard_id.as_str(), item.title, page);
        println!("      {}", hub.document_link(item));
    }
    Ok(())
}

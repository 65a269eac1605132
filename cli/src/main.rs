//! ntriples-rules CLI: converts JSON-lines triple records into N-Triples
//!
//! Reads a rules file and a stream of `{"subject", "predicate", "object"}`
//! records, and writes one enhanced triple per line.

mod config;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use config::{stream_path, InvalidPolicy, RunConfig, TripleFormat};
use ntriples_rules::{enhance_batch, EnhanceOptions, Ruleset, Triple};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ntriples-rules", version, about = "Rules-driven N-Triples conversion")]
struct Cli {
    /// Rules file
    #[arg(long, global = true, env = "NTRIPLES_RULES")]
    rules: Option<PathBuf>,

    /// Output format for inspection commands
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert JSON-lines triples to N-Triples
    Convert {
        /// Input file, `-` for stdin
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output file, `-` for stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Invalid timestamp handling
        #[arg(long, value_enum, default_value = "fail")]
        on_invalid: InvalidPolicy,

        /// Enhance triples in parallel
        #[arg(long)]
        parallel: bool,

        /// Encoding of the converted triples
        #[arg(long = "emit", value_enum, default_value = "ntriples")]
        emit: TripleFormat,
    },
    /// Show the parsed rules
    Inspect,
    /// Show the effective kind of each predicate
    Resolve {
        /// Predicate CURIEs
        #[arg(required = true)]
        predicates: Vec<String>,
    },
}

/// Outcome of a conversion run
#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    written: usize,
    skipped: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.rules {
        Some(rules) => run(rules, cli.command, &cli.format),
        None => Err(anyhow::anyhow!("no rules file given (use --rules or NTRIPLES_RULES)")),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(rules: PathBuf, command: Commands, format: &OutputFormat) -> anyhow::Result<()> {
    let ruleset = Ruleset::from_file(&rules)
        .with_context(|| format!("reading rules file {}", rules.display()))?;

    match command {
        Commands::Convert { input, output, on_invalid, parallel, emit } => {
            let config = RunConfig {
                input: stream_path(input),
                output: stream_path(output),
                on_invalid,
                parallel,
                format: emit,
                ..RunConfig::new(rules)
            };
            run_convert(&ruleset, &config)
        }
        Commands::Inspect => run_inspect(&ruleset, format),
        Commands::Resolve { predicates } => run_resolve(&ruleset, &predicates, format),
    }
}

fn run_convert(ruleset: &Ruleset, config: &RunConfig) -> anyhow::Result<()> {
    info!("Converting with rules {}", config.rules.display());

    let reader: Box<dyn BufRead> = match &config.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let writer: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    let triples = read_triples(reader)?;
    let summary = convert(ruleset, &triples, BufWriter::new(writer), config)?;
    info!("Wrote {} triples, skipped {}", summary.written, summary.skipped);
    Ok(())
}

/// Parse JSON-lines triple records, skipping blank lines
fn read_triples(reader: impl BufRead) -> anyhow::Result<Vec<Triple>> {
    let mut triples = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let triple: Triple = serde_json::from_str(&line)
            .with_context(|| format!("invalid triple record on line {}", index + 1))?;
        triples.push(triple);
    }
    Ok(triples)
}

fn convert(
    ruleset: &Ruleset,
    triples: &[Triple],
    mut writer: impl Write,
    config: &RunConfig,
) -> anyhow::Result<Summary> {
    let options = EnhanceOptions { parallel: config.parallel };
    let mut summary = Summary::default();

    for (index, result) in enhance_batch(ruleset, triples, &options).into_iter().enumerate() {
        match result {
            Ok(triple) => {
                match config.format {
                    TripleFormat::Ntriples => writeln!(writer, "{}", triple)?,
                    TripleFormat::Json => writeln!(writer, "{}", serde_json::to_string(&triple)?)?,
                }
                summary.written += 1;
            }
            Err(e) => match config.on_invalid {
                InvalidPolicy::Fail => bail!("record {}: {}", index + 1, e),
                InvalidPolicy::Skip => {
                    warn!("Skipping record {}: {}", index + 1, e);
                    summary.skipped += 1;
                }
            },
        }
    }

    writer.flush()?;
    Ok(summary)
}

fn run_inspect(ruleset: &Ruleset, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let predicates: Vec<serde_json::Value> = ruleset
                .predicates
                .values()
                .map(|rule| {
                    serde_json::json!({
                        "curie": rule.curie,
                        "kind": rule.kind.as_token(),
                        "lang": rule.localized,
                        "many": rule.many,
                    })
                })
                .collect();
            let defaults: Vec<serde_json::Value> = ruleset
                .defaults
                .iter()
                .map(|rule| serde_json::json!({ "kind": rule.kind.as_token(), "pattern": rule.pattern.as_str() }))
                .collect();
            let doc = serde_json::json!({
                "language": ruleset.language,
                "prefixes": ruleset.prefixes,
                "predicates": predicates,
                "defaults": defaults,
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        OutputFormat::Table => {
            println!("Language: {}", ruleset.language);

            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Prefix", "Namespace"]);
            for ns in ruleset.prefixes.iter() {
                table.add_row(vec![ns.prefix.clone(), ns.iri.clone()]);
            }
            println!("{}", table);

            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Predicate", "Kind", "Lang", "Many"]);
            for rule in ruleset.predicates.values() {
                table.add_row(vec![
                    rule.curie.clone(),
                    rule.kind.to_string(),
                    rule.localized.to_string(),
                    rule.many.to_string(),
                ]);
            }
            println!("{}", table);

            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Default", "Pattern"]);
            for rule in &ruleset.defaults {
                table.add_row(vec![rule.kind.to_string(), rule.pattern.to_string()]);
            }
            println!("{}", table);
        }
    }

    Ok(())
}

fn run_resolve(ruleset: &Ruleset, predicates: &[String], format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> = predicates
                .iter()
                .map(|p| {
                    serde_json::json!({
                        "predicate": p,
                        "iri": ruleset.prefixes.inflate(p),
                        "kind": ruleset.resolve(p).as_token(),
                        "many": ruleset.is_many(p),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Predicate", "IRI", "Kind", "Many"]);
            for p in predicates {
                table.add_row(vec![
                    p.clone(),
                    ruleset.prefixes.inflate(p),
                    ruleset.resolve(p).to_string(),
                    ruleset.is_many(p).to_string(),
                ]);
            }
            println!("{}", table);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntriples_rules::parse_rules;

    fn rules() -> Ruleset {
        parse_rules("@prefix ui http://mysite.com/ui/\nui:someDate date\nui:n integer")
    }

    fn render(triples: &[Triple], config: &RunConfig) -> anyhow::Result<(Summary, String)> {
        let mut out = Vec::new();
        let summary = convert(&rules(), triples, &mut out, config)?;
        Ok((summary, String::from_utf8(out)?))
    }

    #[test]
    fn test_read_triples() {
        let input = "{\"subject\":\"ui:a\",\"predicate\":\"ui:n\",\"object\":\"1\"}\n\n\
                     {\"subject\":\"ui:b\",\"predicate\":\"ui:n\",\"object\":\"2\"}\n";
        let triples = read_triples(input.as_bytes()).unwrap();
        assert_eq!(triples.len(), 2);
        assert_eq!(triples[1], Triple::new("ui:b", "ui:n", "2"));
    }

    #[test]
    fn test_read_triples_rejects_bad_record() {
        assert!(read_triples("{\"subject\":\"ui:a\"}\n".as_bytes()).is_err());
    }

    #[test]
    fn test_convert_ntriples() {
        let triples = vec![Triple::new("ui:a", "ui:someDate", "2018-11-18")];
        let (summary, out) = render(&triples, &RunConfig::new("rules.txt")).unwrap();
        assert_eq!(summary, Summary { written: 1, skipped: 0 });
        assert_eq!(
            out,
            "<http://mysite.com/ui/a> <http://mysite.com/ui/someDate> \
             \"2018-11-18\"^^<http://www.w3.org/2001/XMLSchema#date> .\n"
        );
    }

    #[test]
    fn test_convert_fail_policy() {
        let triples = vec![
            Triple::new("ui:a", "ui:n", "1"),
            Triple::new("ui:a", "ui:someDate", "never"),
        ];
        assert!(render(&triples, &RunConfig::new("rules.txt")).is_err());
    }

    #[test]
    fn test_convert_skip_policy() {
        let triples = vec![
            Triple::new("ui:a", "ui:someDate", "never"),
            Triple::new("ui:a", "ui:n", "1"),
        ];
        let config = RunConfig {
            on_invalid: InvalidPolicy::Skip,
            parallel: true,
            ..RunConfig::new("rules.txt")
        };
        let (summary, out) = render(&triples, &config).unwrap();
        assert_eq!(summary, Summary { written: 1, skipped: 1 });
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn test_convert_json() {
        let triples = vec![Triple::new("ui:a", "ui:n", "7")];
        let config = RunConfig {
            format: TripleFormat::Json,
            ..RunConfig::new("rules.txt")
        };
        let (_, out) = render(&triples, &config).unwrap();
        let triple: Triple = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(triple.object, "\"7\"^^<http://www.w3.org/2001/XMLSchema#integer>");
    }

    #[test]
    fn test_convert_flags() {
        let cli = Cli::try_parse_from([
            "ntriples-rules",
            "--rules",
            "rules.txt",
            "convert",
            "--emit",
            "json",
            "--on-invalid",
            "skip",
        ])
        .unwrap();
        match cli.command {
            Commands::Convert { emit, on_invalid, parallel, .. } => {
                assert_eq!(emit, TripleFormat::Json);
                assert_eq!(on_invalid, InvalidPolicy::Skip);
                assert!(!parallel);
            }
            _ => panic!("expected convert"),
        }

        let cli = Cli::try_parse_from(["ntriples-rules", "convert"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Convert { emit: TripleFormat::Ntriples, .. }
        ));

        // `--format` selects the inspection output, not the triple encoding
        assert!(Cli::try_parse_from(["ntriples-rules", "convert", "--format", "ntriples"]).is_err());
        assert!(Cli::try_parse_from(["ntriples-rules", "--format", "json", "inspect"]).is_ok());
    }

    #[test]
    fn test_stream_path() {
        assert_eq!(stream_path(Some(PathBuf::from("-"))), None);
        assert_eq!(
            stream_path(Some(PathBuf::from("in.jsonl"))),
            Some(PathBuf::from("in.jsonl"))
        );
        assert_eq!(stream_path(None), None);
    }

    #[test]
    fn test_run_convert_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.jsonl");
        let output = dir.path().join("out.nt");
        std::fs::write(&input, "{\"subject\":\"ui:a\",\"predicate\":\"ui:n\",\"object\":\"x\"}\n").unwrap();

        let config = RunConfig {
            input: Some(input),
            output: Some(output.clone()),
            ..RunConfig::new("rules.txt")
        };
        run_convert(&rules(), &config).unwrap();

        let written = std::fs::read_to_string(output).unwrap();
        assert_eq!(
            written,
            "<http://mysite.com/ui/a> <http://mysite.com/ui/n> \
             \"0\"^^<http://www.w3.org/2001/XMLSchema#integer> .\n"
        );
    }
}

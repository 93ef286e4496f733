use std::io::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use pathgrind_core::report::{CalltreeWriter, GraphWriter, PathIndex, ReportConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Graph,
    Calltree,
}

#[derive(Debug)]
struct Options {
    input: PathBuf,
    output: Option<PathBuf>,
    format: Format,
    min_percent: f64,
    print_file: bool,
    unit_scale: f64,
}

impl Options {
    fn parse(args: &[String]) -> Option<Self> {
        let mut input = None;
        let mut output = None;
        let mut format = Format::Graph;
        let mut min_percent = 0.0;
        let mut print_file = false;
        let mut unit_scale = 1.0;

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--graph" => format = Format::Graph,
                "--calltree" => format = Format::Calltree,
                "--file-info" => print_file = true,
                "--min-percent" => min_percent = iter.next()?.parse().ok()?,
                "--scale" => unit_scale = iter.next()?.parse().ok()?,
                "-o" | "--output" => output = Some(PathBuf::from(iter.next()?)),
                _ if arg.starts_with('-') => return None,
                _ if input.is_some() => return None,
                _ => input = Some(PathBuf::from(arg)),
            }
        }

        Some(Self {
            input: input?,
            output,
            format,
            min_percent,
            print_file,
            unit_scale,
        })
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(opts) = Options::parse(&args) else {
        eprintln!(
            "Usage: pathgrind <profile> [--graph|--calltree] [--min-percent <pct>] \
             [--scale <factor>] [--file-info] [-o <path>]"
        );
        std::process::exit(1);
    };

    let data = std::fs::read(&opts.input)
        .with_context(|| format!("reading {}", opts.input.display()))?;
    let profile = pathgrind_core::parsers::parse_auto(&data)?;

    let config = ReportConfig {
        min_percent: opts.min_percent,
        print_file: opts.print_file,
        unit_scale: opts.unit_scale,
    };

    let mut report = String::new();
    match opts.format {
        Format::Graph => GraphWriter::new(config).write_profile(&profile, &mut report)?,
        Format::Calltree => {
            // One index per run: suffixes are stable within a report but
            // never carried across runs.
            let mut index = PathIndex::new();
            CalltreeWriter::new(config).write_profile(&profile, &mut index, &mut report)?;
        }
    }

    match &opts.output {
        Some(path) => std::fs::write(path, &report)
            .with_context(|| format!("writing {}", path.display()))?,
        None => std::io::stdout().lock().write_all(report.as_bytes())?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Option<Options> {
        let owned: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        Options::parse(&owned)
    }

    #[test]
    fn defaults_to_graph_format() {
        let opts = parse(&["profile.folded"]).unwrap();
        assert_eq!(opts.format, Format::Graph);
        assert_eq!(opts.min_percent, 0.0);
        assert!(!opts.print_file);
        assert!(opts.output.is_none());
    }

    #[test]
    fn parses_full_invocation() {
        let opts = parse(&[
            "--calltree",
            "p.json",
            "--min-percent",
            "2.5",
            "--scale",
            "1000000",
            "--file-info",
            "-o",
            "out.calltree",
        ])
        .unwrap();
        assert_eq!(opts.format, Format::Calltree);
        assert_eq!(opts.min_percent, 2.5);
        assert_eq!(opts.unit_scale, 1_000_000.0);
        assert!(opts.print_file);
        assert_eq!(opts.output.as_deref(), Some(std::path::Path::new("out.calltree")));
    }

    #[test]
    fn rejects_bad_invocations() {
        assert!(parse(&[]).is_none());
        assert!(parse(&["--min-percent", "abc", "p"]).is_none());
        assert!(parse(&["--unknown", "p"]).is_none());
        assert!(parse(&["a", "b"]).is_none());
    }
}

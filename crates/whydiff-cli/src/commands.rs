use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use serde::Serialize;
use tracing::debug;
use whydiff_engine::{
    guard, CollectionDiffResult, DiffConfig, DiffEngine, DiffResult, EnhancedDiffResult, Value,
};

use crate::cli::*;

/// Run the parsed command. Returns `true` when a difference was found.
pub fn run_command(cli: Cli) -> anyhow::Result<bool> {
    let config = match &cli.config {
        Some(path) => DiffConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => DiffConfig::default(),
    };
    debug!(?config, "engine configured");
    let engine = DiffEngine::new(config);

    let output = match cli.command {
        Command::Bytes(args) => cmd_bytes(&engine, args, &cli.format)?,
        Command::Chars(args) => cmd_chars(&engine, args, &cli.format)?,
        Command::Lines(args) => cmd_lines(&engine, args, &cli.format)?,
        Command::Contains(args) => cmd_contains(&engine, args, &cli.format)?,
        Command::Len(args) => cmd_len(&engine, args, &cli.format)?,
    };
    println!("{}", output.text);
    Ok(output.differs)
}

pub struct Output {
    pub text: String,
    pub differs: bool,
}

fn cmd_bytes(engine: &DiffEngine, args: ScalarArgs, format: &OutputFormat) -> anyhow::Result<Output> {
    let got = read_bytes(&args.got)?;
    let want = read_bytes(&args.want)?;
    let result = match args.window {
        Some(window) => engine.scalar_diff_with_context(&got, &want, window),
        None => engine.scalar_diff(&got, &want),
    };
    emit(&result, format, result.has_diff, render_scalar)
}

fn cmd_chars(engine: &DiffEngine, args: ScalarArgs, format: &OutputFormat) -> anyhow::Result<Output> {
    let got = read_text(&args.got)?;
    let want = read_text(&args.want)?;
    let result = match args.window {
        Some(window) => engine.scalar_diff_codepoints_with_context(&got, &want, window),
        None => engine.scalar_diff_codepoints(&got, &want),
    };
    emit(&result, format, result.has_diff, render_scalar)
}

fn cmd_lines(engine: &DiffEngine, args: LinesArgs, format: &OutputFormat) -> anyhow::Result<Output> {
    let got = read_text(&args.got)?;
    let want = read_text(&args.want)?;
    let result = match args.context {
        Some(context) => engine.enhanced_line_diff(&got, &want, context),
        None => engine.enhanced_diff(&got, &want),
    };
    // Oversized inputs are never segmented, not even for the headline.
    let summary = guard::size_exceeded(&got, &want, engine.config())
        .is_none()
        .then(|| engine.line_diff(&got, &want));
    match format {
        OutputFormat::Json => Ok(Output {
            text: serde_json::to_string_pretty(&LinesReport {
                line: summary.as_ref(),
                views: &result,
            })?,
            differs: result.has_diff,
        }),
        OutputFormat::Text => Ok(Output {
            text: render_lines(summary.as_ref(), &result),
            differs: result.has_diff,
        }),
    }
}

fn cmd_contains(engine: &DiffEngine, args: ContainsArgs, format: &OutputFormat) -> anyhow::Result<Output> {
    let container = parse_value(&args.container, "container")?;
    let item = parse_value(&args.item, "item")?;
    let result = engine.collection_contains_diff(&container, &item);
    emit(&result, format, result.has_diff, render_collection)
}

fn cmd_len(engine: &DiffEngine, args: LenArgs, format: &OutputFormat) -> anyhow::Result<Output> {
    let container = parse_value(&args.container, "container")?;
    let result = engine.collection_length_diff(&container, args.expected);
    emit(&result, format, result.has_diff, render_collection)
}

#[derive(Serialize)]
struct LinesReport<'a> {
    line: Option<&'a DiffResult>,
    views: &'a EnhancedDiffResult,
}

fn emit<T: Serialize>(
    result: &T,
    format: &OutputFormat,
    differs: bool,
    render: fn(&T) -> String,
) -> anyhow::Result<Output> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(result)?,
        OutputFormat::Text => render(result),
    };
    Ok(Output { text, differs })
}

fn read_bytes(path: &Path) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}

fn read_text(path: &Path) -> anyhow::Result<String> {
    let bytes = read_bytes(path)?;
    String::from_utf8(bytes).with_context(|| format!("{} is not valid UTF-8", path.display()))
}

fn parse_value(literal: &str, what: &str) -> anyhow::Result<Value> {
    let json: serde_json::Value = serde_json::from_str(literal)
        .with_context(|| format!("{what} is not a JSON literal: {literal}"))?;
    Ok(Value::from(json))
}

fn no_difference() -> String {
    format!("{} No difference.", "✓".green().bold())
}

fn render_scalar(result: &DiffResult) -> String {
    if !result.has_diff {
        return no_difference();
    }
    let mut out = format!("{} {}", "✗".red().bold(), result.summary.bold());
    out.push_str(&format!("\n  {}", result.context));
    out
}

fn render_lines(summary: Option<&DiffResult>, result: &EnhancedDiffResult) -> String {
    if !result.has_diff {
        return format!("{}\n\n{}", no_difference(), result.side_by_side_diff);
    }

    let headline = match summary {
        Some(line) if line.has_diff => line.summary.clone(),
        _ => "inputs differ".to_string(),
    };
    let mut out = format!("{} {}", "✗".red().bold(), headline.bold());
    if let Some(line) = result.line_number {
        out.push_str(&format!(" ({} {})", "line".dimmed(), line.to_string().yellow()));
    }
    out.push_str(&format!("\n\n{}\n", result.context_lines));

    if !result.unified_diff.is_empty() {
        out.push('\n');
        for line in result.unified_diff.lines() {
            let colored = if line.starts_with("@@") {
                line.cyan().to_string()
            } else if line.starts_with("---") || line.starts_with("+++") {
                line.bold().to_string()
            } else if line.starts_with('-') {
                line.red().to_string()
            } else if line.starts_with('+') {
                line.green().to_string()
            } else {
                line.to_string()
            };
            out.push_str(&colored);
            out.push('\n');
        }
    }

    out.push('\n');
    out.push_str(&result.side_by_side_diff);
    out
}

fn render_collection(result: &CollectionDiffResult) -> String {
    if !result.has_diff {
        return no_difference();
    }
    let mut out = format!(
        "{} {} [{}]",
        "✗".red().bold(),
        result.summary.bold(),
        result.collection_type.to_string().cyan()
    );
    for line in result.detail.lines() {
        out.push_str(&format!("\n  {line}"));
    }
    if result.truncated {
        out.push_str(&format!("\n  {}", "(content truncated)".dimmed()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_temp(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn bytes_reports_position() {
        plain();
        let dir = tempfile::tempdir().unwrap();
        let got = write_temp(&dir, "got", "hello");
        let want = write_temp(&dir, "want", "help!");
        let out = cmd_bytes(
            &DiffEngine::default(),
            ScalarArgs { got, want, window: None },
            &OutputFormat::Text,
        )
        .unwrap();
        assert!(out.differs);
        assert!(out.text.contains("string values differ at position 3"));
        assert!(out.text.contains("hello vs help!"));
    }

    #[test]
    fn identical_files_do_not_differ() {
        plain();
        let dir = tempfile::tempdir().unwrap();
        let got = write_temp(&dir, "got", "same\n");
        let want = write_temp(&dir, "want", "same\n");
        let out = cmd_lines(
            &DiffEngine::default(),
            LinesArgs { got, want, context: None },
            &OutputFormat::Text,
        )
        .unwrap();
        assert!(!out.differs);
        assert!(out.text.contains("No difference."));
        assert!(out.text.contains("Got"));
    }

    #[test]
    fn lines_json_contains_views() {
        let dir = tempfile::tempdir().unwrap();
        let got = write_temp(&dir, "got", "a\nb\nc");
        let want = write_temp(&dir, "want", "a\nx\nc");
        let out = cmd_lines(
            &DiffEngine::default(),
            LinesArgs { got, want, context: Some(1) },
            &OutputFormat::Json,
        )
        .unwrap();
        let json: serde_json::Value = serde_json::from_str(&out.text).unwrap();
        assert_eq!(json["line"]["line_number"], 2);
        assert_eq!(json["views"]["has_diff"], true);
        assert!(json["views"]["unified_diff"].as_str().unwrap().contains("-b\n+x"));
    }

    #[test]
    fn oversized_lines_skip_the_line_summary() {
        let dir = tempfile::tempdir().unwrap();
        let got = write_temp(&dir, "got", "a\nb\nc\nd");
        let want = write_temp(&dir, "want", "a\nb\nc\nX");
        let engine = DiffEngine::new(DiffConfig {
            max_input_bytes: 4,
            ..DiffConfig::default()
        });
        let out = cmd_lines(
            &engine,
            LinesArgs { got, want, context: None },
            &OutputFormat::Json,
        )
        .unwrap();
        assert!(out.differs);
        let json: serde_json::Value = serde_json::from_str(&out.text).unwrap();
        assert!(json["line"].is_null());
        assert!(json["views"]["line_number"].is_null());
        assert!(json["views"]["context_lines"]
            .as_str()
            .unwrap()
            .starts_with("input too large for line diff"));
    }

    #[test]
    fn chars_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let got = dir.path().join("bin");
        std::fs::write(&got, [0xff, 0xfe]).unwrap();
        let want = write_temp(&dir, "want", "ok");
        let err = cmd_chars(
            &DiffEngine::default(),
            ScalarArgs { got, want, window: None },
            &OutputFormat::Text,
        );
        assert!(err.is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = read_bytes(Path::new("/definitely/not/here")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn contains_from_json_literals() {
        plain();
        let out = cmd_contains(
            &DiffEngine::default(),
            ContainsArgs { container: "[1,2,3]".into(), item: "9".into() },
            &OutputFormat::Text,
        )
        .unwrap();
        assert!(out.differs);
        assert!(out.text.contains("[1 2 3]"));
        assert!(out.text.contains("[slice]"));
    }

    #[test]
    fn len_json_output() {
        let out = cmd_len(
            &DiffEngine::default(),
            LenArgs { container: r#"{"a":1,"b":2}"#.into(), expected: 2 },
            &OutputFormat::Json,
        )
        .unwrap();
        assert!(!out.differs);
        let json: serde_json::Value = serde_json::from_str(&out.text).unwrap();
        assert_eq!(json["collection_type"], "map");
        assert_eq!(json["summary"], "");
    }

    #[test]
    fn bad_json_literal_is_an_error() {
        let err = parse_value("[1,", "container").unwrap_err();
        assert!(err.to_string().contains("container is not a JSON literal"));
    }
}

//! Score one article from a file (or stdin) and print the JSON `AnalysisResult`.
//!
//! Usage: `score_text [ARTICLE_PATH] [SUMMARY_PATH]`; `-` or no path reads stdin.

use std::io::Read;

use anyhow::Context;
use article_quality_analyzer::{config::ENV_DEV_LOG, evaluate, init_tracing};

fn read_source(path: Option<&str>) -> anyhow::Result<String> {
    match path {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading article from stdin")?;
            Ok(buf)
        }
        Some(p) => std::fs::read_to_string(p).with_context(|| format!("reading {p}")),
    }
}

fn main() -> anyhow::Result<()> {
    let dev_log = std::env::var(ENV_DEV_LOG).is_ok_and(|v| v == "1");
    init_tracing(dev_log);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let text = read_source(args.first().map(String::as_str))?;
    let summary = args
        .get(1)
        .map(|p| std::fs::read_to_string(p).with_context(|| format!("reading {p}")))
        .transpose()?;

    let result = evaluate(&text, summary.as_deref());
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

use anyhow::{Context, Result};
use comfy_table::Table;

use triage_cli::pipeline::{RuleOptions, build_rules, run_dataset};
use triage_clean::MissingValueRules;
use triage_report::write_report_json;

use crate::cli::CheckArgs;
use crate::summary::apply_table_style;
use crate::types::CheckResult;

pub fn run_check(args: &CheckArgs) -> Result<CheckResult> {
    let rules = build_rules(&RuleOptions {
        extra_tokens: args.rules.clone(),
        no_default_rules: args.no_default_rules,
        empty_as_missing: args.empty_as_missing,
        ignore_case: args.ignore_case,
        trim_tokens: args.trim_tokens,
    });
    let report = run_dataset(&args.dataset, &rules)?;
    if let Some(path) = &args.report {
        write_report_json(path, &report).context("write report file")?;
    }
    Ok(CheckResult {
        report,
        report_path: args.report.clone(),
    })
}

pub fn run_rules() -> Result<()> {
    let standard = MissingValueRules::standard();
    let mut table = Table::new();
    table.set_header(vec!["Token", "Default", "Enabled by"]);
    apply_table_style(&mut table);
    for token in standard.tokens() {
        table.add_row(vec![format!("{token:?}"), "yes".to_string(), "-".to_string()]);
    }
    table.add_row(vec![
        "\"\"".to_string(),
        "no".to_string(),
        "--empty-as-missing".to_string(),
    ]);
    table.add_row(vec![
        "<custom>".to_string(),
        "no".to_string(),
        "--rule <TOKEN>".to_string(),
    ]);
    println!("{table}");
    println!("Matching is exact and case-sensitive; see --ignore-case and --trim-tokens.");
    Ok(())
}

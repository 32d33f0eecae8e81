//! Command routing and execution

use crate::app::AppConfig;
use crate::cli::args::{Commands, MonoidKind, Step};
use crate::cli::values::{parse_bool, parse_int, parse_int_list, parse_string};
use crate::endo::Endo;
use crate::error::Result as MonoidalResult;
use crate::fold::{fold_identity, fold_with_seed};
use crate::laws::{check_monoid_laws, LawConfig, LawReport};
use crate::monoid::Monoid;
use crate::wrappers::{All, Any, Max, Min, Product, Sum};
use anyhow::Result;
use serde::Serialize;
use serde_json::{json, Value};
use std::fmt::Debug;
use tracing::{debug, info};

/// Execute a CLI command, returning the text to print on stdout.
pub fn execute_command(command: Commands, config: &AppConfig) -> Result<String> {
    match command {
        Commands::Fold {
            monoid,
            values,
            seed,
            json,
        } => run_fold(monoid, &values, seed.as_deref(), json),
        Commands::Pipeline { input, steps, json } => run_pipeline(input, &steps, json),
        Commands::Laws { monoid, values } => {
            let file = config.load_file()?;
            run_laws(monoid, &values, &file.laws)
        }
    }
}

fn run_fold(monoid: MonoidKind, values: &[String], seed: Option<&str>, json: bool) -> Result<String> {
    debug!("Folding {} values under {}", values.len(), monoid.name());

    let result = match monoid {
        MonoidKind::Sum => fold_values(values, seed, |s| parse_int(s).map(Sum))?,
        MonoidKind::Product => fold_values(values, seed, |s| parse_int(s).map(Product))?,
        MonoidKind::All => fold_values(values, seed, |s| parse_bool(s).map(All))?,
        MonoidKind::Any => fold_values(values, seed, |s| parse_bool(s).map(Any))?,
        MonoidKind::Max => fold_values(values, seed, |s| parse_int(s).map(Max))?,
        MonoidKind::Min => fold_values(values, seed, |s| parse_int(s).map(Min))?,
        MonoidKind::Concat => fold_values(values, seed, parse_string)?,
        MonoidKind::List => fold_values(values, seed, parse_int_list)?,
    };

    if json {
        let output = json!({
            "monoid": monoid.name(),
            "count": values.len(),
            "result": result,
        });
        Ok(serde_json::to_string_pretty(&output)?)
    } else {
        Ok(render_plain(&result))
    }
}

/// Parse every value (and the optional seed), then fold.
fn fold_values<M, F>(raw: &[String], seed: Option<&str>, parse: F) -> Result<Value>
where
    M: Monoid + Serialize,
    F: Fn(&str) -> MonoidalResult<M>,
{
    let values = raw
        .iter()
        .map(|s| parse(s))
        .collect::<MonoidalResult<Vec<M>>>()?;

    let result = match seed {
        Some(seed) => fold_with_seed(values, parse(seed)?),
        None => fold_identity(values),
    };
    Ok(serde_json::to_value(result)?)
}

fn run_pipeline(input: i64, steps: &[Step], json: bool) -> Result<String> {
    let pipeline: Endo<i64> = fold_identity(steps.iter().map(|step| step_endo(*step)));
    let result = pipeline.apply(input);
    debug!("Pipeline of {} steps mapped {} to {}", steps.len(), input, result);

    if json {
        let names: Vec<&str> = steps.iter().map(|step| step.name()).collect();
        let output = json!({
            "input": input,
            "steps": names,
            "result": result,
        });
        Ok(serde_json::to_string_pretty(&output)?)
    } else {
        Ok(result.to_string())
    }
}

fn step_endo(step: Step) -> Endo<i64> {
    match step {
        Step::Inc => Endo::new(|x: i64| x.wrapping_add(1)),
        Step::Dec => Endo::new(|x: i64| x.wrapping_sub(1)),
        Step::Double => Endo::new(|x: i64| x.wrapping_mul(2)),
        Step::Square => Endo::new(|x: i64| x.wrapping_mul(x)),
        Step::Negate => Endo::new(|x: i64| x.wrapping_neg()),
    }
}

fn run_laws(monoid: MonoidKind, values: &[String], config: &LawConfig) -> Result<String> {
    let raw: Vec<String> = if values.is_empty() {
        default_samples(monoid).iter().map(|s| s.to_string()).collect()
    } else {
        values.to_vec()
    };

    let report = match monoid {
        MonoidKind::Sum => check_values(&raw, config, |s| parse_int(s).map(Sum))?,
        MonoidKind::Product => check_values(&raw, config, |s| parse_int(s).map(Product))?,
        MonoidKind::All => check_values(&raw, config, |s| parse_bool(s).map(All))?,
        MonoidKind::Any => check_values(&raw, config, |s| parse_bool(s).map(Any))?,
        MonoidKind::Max => check_values(&raw, config, |s| parse_int(s).map(Max))?,
        MonoidKind::Min => check_values(&raw, config, |s| parse_int(s).map(Min))?,
        MonoidKind::Concat => check_values(&raw, config, parse_string)?,
        MonoidKind::List => check_values(&raw, config, parse_int_list)?,
    };

    info!(
        "{}: {} associativity checks, {} identity checks",
        monoid.name(),
        report.associativity_checked,
        report.identity_checked
    );

    let summary = format!(
        "{}: {} associativity checks, {} identity checks, {} violations",
        monoid.name(),
        report.associativity_checked,
        report.identity_checked,
        report.violations.len()
    );
    report.into_result()?;
    Ok(summary)
}

fn check_values<M, F>(raw: &[String], config: &LawConfig, parse: F) -> MonoidalResult<LawReport>
where
    M: Monoid + Clone + PartialEq + Debug,
    F: Fn(&str) -> MonoidalResult<M>,
{
    let samples = raw
        .iter()
        .map(|s| parse(s))
        .collect::<MonoidalResult<Vec<M>>>()?;
    check_monoid_laws(&samples, config)
}

fn default_samples(monoid: MonoidKind) -> &'static [&'static str] {
    match monoid {
        MonoidKind::Sum | MonoidKind::Product | MonoidKind::Max | MonoidKind::Min => {
            &["0", "1", "-1", "7", "9223372036854775807", "-9223372036854775808"]
        }
        MonoidKind::All | MonoidKind::Any => &["true", "false"],
        MonoidKind::Concat => &["", "a", "bc", "déjà"],
        MonoidKind::List => &["[]", "[1]", "[2, 3]"],
    }
}

/// Strings print raw; everything else prints as compact JSON.
fn render_plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

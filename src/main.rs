mod program;
mod schedule;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::{Local, Timelike};
use clap::Parser;
use serde::Serialize;

use crate::program::{ProgramPreset, builtin_catalog, find_program, load_program_catalog};
use crate::schedule::clock::{
    format_clock_time, format_duration, parse_clock_time, parse_duration,
};
use crate::schedule::planner::{compute_schedule, quantize_delay};

#[derive(Parser, Debug)]
#[command(
    name = "washplan",
    version,
    about = "Delay-start planner for timed appliance programs"
)]
struct Cli {
    #[arg(long)]
    finish: Option<String>,

    #[arg(long, conflicts_with = "program")]
    duration: Option<String>,

    #[arg(long)]
    program: Option<String>,

    #[arg(long)]
    now: Option<String>,

    #[arg(long)]
    programs: Option<PathBuf>,

    #[arg(long)]
    list_programs: bool,

    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Serialize)]
struct PlanReport {
    now: String,
    duration_minutes: i32,
    delay_minutes: i32,
    delay: String,
    start: String,
    finish: String,
    panel_delay_minutes: i32,
    panel_delay: String,
    panel_start: String,
    panel_finish: String,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let catalog = match cli.programs.as_deref() {
        Some(path) => load_program_catalog(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => builtin_catalog()?,
    };

    if cli.list_programs {
        print_catalog(&catalog);
        return Ok(());
    }

    let Some(finish_text) = cli.finish.as_deref() else {
        bail!("--finish is required unless --list-programs is given");
    };
    let finish_minutes = parse_clock_time(finish_text)
        .with_context(|| format!("invalid --finish '{finish_text}', expected HH:MM"))?;

    let duration_minutes = match (cli.duration.as_deref(), cli.program.as_deref()) {
        (Some(text), _) => parse_duration(text).with_context(|| {
            format!("invalid --duration '{text}', expected H:MM, HH:MM, or whole hours")
        })?,
        (None, Some(label)) => {
            let preset = find_program(&catalog, label).with_context(|| {
                format!("unknown program '{label}'; use --list-programs to see the catalog")
            })?;
            preset.duration_minutes
        }
        (None, None) => bail!("either --duration or --program is required"),
    };

    let now_minutes = match cli.now.as_deref() {
        Some(text) => parse_clock_time(text)
            .with_context(|| format!("invalid --now '{text}', expected HH:MM"))?,
        None => local_now_minutes(),
    };

    let plan = compute_schedule(now_minutes, duration_minutes, finish_minutes)?;
    let panel_delay = quantize_delay(plan.delay_minutes);
    let panel_start = now_minutes + panel_delay;
    let panel_finish = panel_start + duration_minutes;

    let report = PlanReport {
        now: format_clock_time(now_minutes),
        duration_minutes,
        delay_minutes: plan.delay_minutes,
        delay: format_duration(plan.delay_minutes),
        start: format_clock_time(plan.start_minutes),
        finish: format_clock_time(plan.finish_minutes),
        panel_delay_minutes: panel_delay,
        panel_delay: format_duration(panel_delay),
        panel_start: format_clock_time(panel_start),
        panel_finish: format_clock_time(panel_finish),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Now {}, program runtime {}",
        report.now,
        format_duration(report.duration_minutes)
    );
    println!(
        "Exact: {} delay -> start at {}, finish at ~{}",
        report.delay, report.start, report.finish
    );
    println!(
        "Panel: {} delay -> start at {}, finish at ~{}",
        report.panel_delay, report.panel_start, report.panel_finish
    );
    println!("Panel delays use 30 min steps up to 10 h, then 1 h steps up to 24 h.");
    Ok(())
}

fn print_catalog(catalog: &[ProgramPreset]) {
    for preset in catalog {
        println!(
            "{:<18} {:>6}  ({})",
            preset.label,
            preset.duration_text,
            format_duration(preset.duration_minutes)
        );
    }
}

fn local_now_minutes() -> i32 {
    let time = Local::now().time();
    (time.hour() * 60 + time.minute()) as i32
}

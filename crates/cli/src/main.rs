use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gjk2d::shapes::rand::{draw_offset_pair, RadialCfg, ReplayToken};
use gjk2d::shapes::Polygon;
use gjk2d::{collision_report, pt, Report, SearchCfg, Verdict};
use serde_json::json;
use tracing_subscriber::fmt::SubscriberBuilder;

mod shape_file;

#[derive(Parser)]
#[command(name = "gjk-cli")]
#[command(about = "Convex shape intersection queries (GJK)")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Test two shapes loaded from JSON files
    Check {
        #[arg(long)]
        a: String,
        #[arg(long)]
        b: String,
        #[arg(long, default_value_t = SearchCfg::default().limit)]
        limit: usize,
    },
    /// Run the two-triangle example
    Demo {
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Draw random polygon pairs and cross-check against the Minkowski hull
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 100)]
        count: u64,
        #[arg(long, default_value_t = SearchCfg::default().limit)]
        limit: usize,
        /// Half-width of the box the second polygon's offset is drawn from
        #[arg(long, default_value_t = 3.0)]
        spread: f64,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Check { a, b, limit } => check(a, b, limit),
        Action::Demo { limit } => demo(limit),
        Action::Sample {
            seed,
            count,
            limit,
            spread,
        } => sample(seed, count, limit, spread),
    }
}

fn report_json(report: Report, limit: usize) -> serde_json::Value {
    json!({
        "intersects": report.intersects(),
        "verdict": report.verdict.as_str(),
        "iterations": report.iterations,
        "limit": limit,
    })
}

fn check(a: String, b: String, limit: usize) -> Result<()> {
    tracing::info!(a = %a, b = %b, limit, "check");
    let (spec_a, shape_a) = shape_file::load(&a)?;
    let (spec_b, shape_b) = shape_file::load(&b)?;
    let report = collision_report(limit, &*shape_a, &*shape_b);
    tracing::info!(
        a = spec_a.kind(),
        b = spec_b.kind(),
        verdict = %report.verdict,
        "result"
    );
    println!("{}", serde_json::to_string_pretty(&report_json(report, limit))?);
    Ok(())
}

fn demo(limit: usize) -> Result<()> {
    tracing::info!(limit, "demo");
    let a = Polygon::new(vec![pt(-15.0, -10.0), pt(0.0, 15.0), pt(12.0, -5.0)])?;
    let b = Polygon::new(vec![pt(-9.0, 13.0), pt(6.0, 13.0), pt(-2.0, 22.0)])?;
    let report = collision_report(limit, &a, &b);
    println!("{}", serde_json::to_string_pretty(&report_json(report, limit))?);
    Ok(())
}

fn sample(seed: u64, count: u64, limit: usize, spread: f64) -> Result<()> {
    tracing::info!(seed, count, limit, spread, "sample");
    let cfg = RadialCfg::default();
    let origin = pt(0.0, 0.0);
    let (mut intersecting, mut separated, mut inconclusive, mut mismatches) = (0, 0, 0, 0);
    for index in 0..count {
        let (a, b) = draw_offset_pair(cfg, ReplayToken { seed, index }, spread)
            .with_context(|| format!("degenerate draw at index {index}"))?;
        let report = collision_report(limit, &a, &b);
        match report.verdict {
            Verdict::Intersecting => intersecting += 1,
            Verdict::Separated => separated += 1,
            Verdict::Inconclusive => inconclusive += 1,
        }
        let m = a.minkowski_difference(&b);
        let reference = m.contains_eps(origin, 1e-9);
        let clear_cut = reference == m.contains_eps(origin, -1e-9);
        if clear_cut && report.verdict != Verdict::Inconclusive && report.intersects() != reference
        {
            mismatches += 1;
            tracing::warn!(index, verdict = %report.verdict, reference, "mismatch");
        }
    }
    let summary = json!({
        "seed": seed,
        "pairs": count,
        "limit": limit,
        "intersecting": intersecting,
        "separated": separated,
        "inconclusive": inconclusive,
        "mismatches": mismatches,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

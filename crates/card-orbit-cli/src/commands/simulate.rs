use std::path::PathBuf;

use anyhow::{Context, Result};
use card_orbit::card_orbit_core::theme::CardStyle;
use card_orbit::{AppConfig, ArrangementKind, DatasetSource, JsonRowsSource, Pipeline, StaticSource};
use clap::Args;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// JSON rows file (overrides `dataset.path` in config)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Use this many placeholder cards when no dataset file is given
    #[arg(long, default_value_t = 120)]
    pub placeholders: usize,

    /// Initial arrangement (overrides config)
    #[arg(long, value_parser = super::parse_kind)]
    pub arrangement: Option<ArrangementKind>,

    /// Arrangement to switch to mid-run
    #[arg(long, value_parser = super::parse_kind)]
    pub switch_to: Option<ArrangementKind>,

    /// Simulated time of the switch, in milliseconds
    #[arg(long, default_value_t = 3000.0)]
    pub switch_at_ms: f64,

    /// Simulated frame rate
    #[arg(long, default_value_t = 60.0)]
    pub fps: f64,

    /// Total simulated time, in milliseconds
    #[arg(long, default_value_t = 10_000.0)]
    pub duration_ms: f64,
}

#[derive(Serialize)]
struct CardSummary {
    name: String,
    country: String,
    background: String,
    position: [f64; 3],
}

#[derive(Serialize)]
struct SimulationSummary {
    cards: usize,
    frames: u64,
    renders: u64,
    selected: Option<ArrangementKind>,
    settled: bool,
    scene_rotation_y: f64,
    sample: Vec<CardSummary>,
}

pub async fn run(args: SimulateArgs, config: &AppConfig) -> Result<()> {
    anyhow::ensure!(
        args.fps.is_finite() && args.fps > 0.0,
        "fps must be positive, got {}",
        args.fps
    );

    let mut config = config.clone();
    if let Some(kind) = args.arrangement {
        config.animation.initial_arrangement = kind;
    }

    let source: Box<dyn DatasetSource> = match args.data.or_else(|| config.dataset.path.clone()) {
        Some(path) => Box::new(JsonRowsSource::new(path).skip_rows(config.dataset.skip_rows)),
        None => Box::new(StaticSource::placeholders(args.placeholders)),
    };

    let mut scene = Pipeline::run(&config, source.as_ref(), 0.0)
        .await
        .context("Failed to build the scene")?;

    let step = 1000.0 / args.fps;
    let mut renders = 0u64;
    let mut switched = args.switch_to.is_none();
    let mut now = 0.0;

    while now <= args.duration_ms {
        scene.start_initial_if_due(now)?;

        if !switched && now >= args.switch_at_ms {
            if let Some(kind) = args.switch_to {
                scene.viewport.select(kind, now)?;
            }
            switched = true;
        }

        let report = scene.viewport.frame(now, &mut || renders += 1);
        if report.finished {
            tracing::debug!(at_ms = now, "transition settled");
        }
        now += step;
    }

    let viewport = &scene.viewport;
    let sample = viewport
        .registry()
        .items()
        .iter()
        .take(5)
        .map(|item| CardSummary {
            name: item.record.name.clone(),
            country: item.record.country.clone(),
            background: CardStyle::for_record(&item.record).background,
            position: item.pose.position.to_array(),
        })
        .collect();

    let summary = SimulationSummary {
        cards: viewport.registry().len(),
        frames: viewport.frames(),
        renders,
        selected: viewport.selected(),
        settled: !viewport.engine().is_active(),
        scene_rotation_y: viewport.scene_rotation_y(),
        sample,
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

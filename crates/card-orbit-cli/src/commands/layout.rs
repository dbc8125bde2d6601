use anyhow::Result;
use card_orbit::card_orbit_core::layout;
use card_orbit::{AppConfig, ArrangementKind, Pose};
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct LayoutArgs {
    /// Arrangement to compute (table, sphere, helix, grid, pyramid)
    #[arg(long, value_parser = super::parse_kind)]
    pub kind: ArrangementKind,

    /// Number of cards
    #[arg(long)]
    pub count: usize,

    /// Seed for the pyramid's random placement (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Helix radius (overrides config)
    #[arg(long)]
    pub helix_radius: Option<f64>,
}

#[derive(Serialize)]
struct LayoutOutput<'a> {
    kind: ArrangementKind,
    count: usize,
    poses: &'a [Pose],
}

pub fn run(args: LayoutArgs, config: &AppConfig) -> Result<()> {
    let mut params = config.layout_params();
    if let Some(radius) = args.helix_radius {
        anyhow::ensure!(
            radius.is_finite() && radius > 0.0,
            "helix radius must be positive, got {}",
            radius
        );
        params.helix_radius = radius;
    }

    let mut rng = match args.seed.or(config.animation.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let poses = layout::compute(args.kind, args.count, &params, &mut rng);
    tracing::info!(kind = %args.kind, count = args.count, "layout computed");

    let output = LayoutOutput {
        kind: args.kind,
        count: poses.len(),
        poses: &poses,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

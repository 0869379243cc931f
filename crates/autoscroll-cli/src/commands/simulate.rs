use std::time::Duration;

use anyhow::{anyhow, bail, Result};
use clap::Args;
use tracing::debug;

use autoscroll_core::{
    sim::{sample, step, FrameSample, ManualPlatform, SimulatedTarget},
    AppConfig, AutoScroller, InputEvent, ScrollTarget,
};

use super::BoundaryArg;

#[derive(Debug, Args)]
pub struct SimulateArgs {
    /// Scroll speed in pixels per second (defaults to the config value)
    #[arg(long)]
    pub speed: Option<f64>,
    /// Interval between simulated frames
    #[arg(long, default_value_t = 16)]
    pub frame_ms: u64,
    /// How long to simulate
    #[arg(long, default_value_t = 10.0)]
    pub seconds: f64,
    /// Total scrollable content height
    #[arg(long, default_value_t = 5000.0)]
    pub extent: f64,
    /// Visible viewport height
    #[arg(long, default_value_t = 800.0)]
    pub visible: f64,
    /// What to do at the end of the content
    #[arg(long, value_enum)]
    pub boundary: Option<BoundaryArg>,
    /// Inject a wheel interaction at this time (repeatable)
    #[arg(long = "interact-at", value_name = "SECS")]
    pub interact_at: Vec<f64>,
    /// Print one JSON sample per frame instead of a summary
    #[arg(long)]
    pub json: bool,
}

/// Outcome of a headless run
#[derive(Debug)]
pub struct Simulation {
    pub samples: Vec<FrameSample>,
    pub max_offset: f64,
    pub interactions: usize,
}

pub fn run(config: &AppConfig, args: &SimulateArgs) -> Result<()> {
    let simulation = simulate(config, args)?;

    if args.json {
        for sample in &simulation.samples {
            println!("{}", serde_json::to_string(sample)?);
        }
        return Ok(());
    }

    print_summary(&simulation, args);
    Ok(())
}

pub fn simulate(config: &AppConfig, args: &SimulateArgs) -> Result<Simulation> {
    if args.frame_ms == 0 {
        bail!("--frame-ms must be at least 1");
    }
    let Ok(total) = Duration::try_from_secs_f64(args.seconds) else {
        bail!("--seconds must be a non-negative number of seconds");
    };
    if !(args.extent.is_finite() && args.visible.is_finite()) {
        bail!("--extent and --visible must be finite");
    }

    let mut scroll_config = config.autoscroll.clone();
    if let Some(speed) = args.speed {
        scroll_config.speed = speed;
    }
    if let Some(boundary) = args.boundary {
        scroll_config.boundary = boundary.into();
    }

    let mut interactions = args
        .interact_at
        .iter()
        .map(|secs| {
            Duration::try_from_secs_f64(*secs)
                .map_err(|_| anyhow!("--interact-at {} is not a usable time", secs))
        })
        .collect::<Result<Vec<_>>>()?;
    interactions.sort();
    let interaction_count = interactions.len();
    let mut pending = interactions.into_iter().peekable();

    let target = SimulatedTarget::new(args.extent.max(0.0), args.visible.max(0.0));
    let max_offset = target.max_offset();
    let mut scroller = AutoScroller::new(scroll_config, target, ManualPlatform::new());
    scroller.start();

    let dt = Duration::from_millis(args.frame_ms);
    let mut elapsed = Duration::ZERO;
    let mut samples = Vec::new();

    while elapsed + dt <= total {
        while pending.next_if(|at| *at <= elapsed).is_some() {
            debug!(at_ms = elapsed.as_millis() as u64, "simulated interaction");
            scroller.handle_input(&InputEvent::Wheel);
        }
        step(&mut scroller, dt);
        elapsed += dt;
        samples.push(sample(&scroller));
    }

    let _ = scroller.teardown();

    Ok(Simulation {
        samples,
        max_offset,
        interactions: interaction_count,
    })
}

fn print_summary(simulation: &Simulation, args: &SimulateArgs) {
    let frames = simulation.samples.len();
    let active = simulation.samples.iter().filter(|s| s.active).count();
    let suspended = simulation.samples.iter().filter(|s| s.suspended).count();

    println!(
        "Simulated {:.2}s in {} frames of {}ms",
        args.seconds, frames, args.frame_ms
    );

    let Some(last) = simulation.samples.last() else {
        println!("  (nothing to report)");
        return;
    };

    println!(
        "  Final offset:   {:.0} of {:.0}",
        last.offset, simulation.max_offset
    );
    if last.at_ms > 0.0 {
        println!(
            "  Average rate:   {:.1} px/s",
            last.offset / (last.at_ms / 1000.0)
        );
    }
    println!("  Active frames:  {}/{}", active, frames);
    println!(
        "  Paused frames:  {} ({} interaction(s))",
        suspended, simulation.interactions
    );
    println!(
        "  Final state:    {}",
        if last.active {
            "scrolling"
        } else if last.suspended {
            "paused"
        } else {
            "stopped"
        }
    );
}

pub mod config;
pub mod run;
pub mod simulate;

use autoscroll_core::{BoundaryStrategy, TargetKind};
use clap::ValueEnum;

/// `--boundary` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BoundaryArg {
    Stop,
    Loop,
    Bounce,
}

impl From<BoundaryArg> for BoundaryStrategy {
    fn from(arg: BoundaryArg) -> Self {
        match arg {
            BoundaryArg::Stop => BoundaryStrategy::Stop,
            BoundaryArg::Loop => BoundaryStrategy::Loop,
            BoundaryArg::Bounce => BoundaryStrategy::Bounce,
        }
    }
}

/// `--target` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TargetArg {
    Page,
    Panel,
}

impl From<TargetArg> for TargetKind {
    fn from(arg: TargetArg) -> Self {
        match arg {
            TargetArg::Page => TargetKind::Page,
            TargetArg::Panel => TargetKind::Panel,
        }
    }
}

//! Frame writers for `simulate`.

use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;
use sl_core::Lanes4;
use sl_spring::SpringState;

use crate::error::CliResult;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

/// One sampled frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Frame {
    pub t: f64,
    pub position: Lanes4,
    pub velocity: Lanes4,
}

impl From<(f64, SpringState)> for Frame {
    fn from((t, state): (f64, SpringState)) -> Self {
        Self {
            t,
            position: state.position,
            velocity: state.velocity,
        }
    }
}

pub fn write_frames<W: Write>(
    out: &mut W,
    format: OutputFormat,
    frames: impl IntoIterator<Item = Frame>,
) -> CliResult<()> {
    match format {
        OutputFormat::Csv => write_csv(out, frames),
        OutputFormat::Json => {
            let frames: Vec<Frame> = frames.into_iter().collect();
            serde_json::to_writer_pretty(&mut *out, &frames)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

fn write_csv<W: Write>(out: &mut W, frames: impl IntoIterator<Item = Frame>) -> CliResult<()> {
    writeln!(out, "t,x0,x1,x2,x3,v0,v1,v2,v3")?;
    for f in frames {
        let [x0, x1, x2, x3] = f.position.to_array();
        let [v0, v1, v2, v3] = f.velocity.to_array();
        writeln!(
            out,
            "{},{},{},{},{},{},{},{},{}",
            f.t, x0, x1, x2, x3, v0, v1, v2, v3
        )?;
    }
    Ok(())
}

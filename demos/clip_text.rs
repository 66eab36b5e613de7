//! Headless clip demo.
//!
//! ```text
//! cargo run --example clip_text -- <subject> <clip> [operation] [subject-fill] [clip-fill]
//! ```
//!
//! `<subject>` and `<clip>` are files in the coordinate text format, or the
//! text itself when the argument starts with `(`. The operation defaults to
//! `xor` and both fill rules to `even-odd`. Fractional coordinates are
//! rounded to the nearest integer, not truncated.
//!
//! ```text
//! cargo run --example clip_text -- "(0 0 4 0 4 4 0 4)" "(2 2 6 2 6 6 2 6)" union non-zero
//! ```

use std::error::Error;
use std::fs;

use geoclip::operations::query::Area;
use geoclip::text::{format_paths, parse_paths};
use geoclip::{Clip, ClipOperation, FillRule, PathSet};
use tracing::info;

fn main() -> Result<(), Box<dyn Error>> {
    // Default: WARN for everything, INFO for geoclip and this demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=geoclip=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("clip_text=info".parse().unwrap_or_default())
        .add_directive("geoclip=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        eprintln!("usage: clip_text <subject> <clip> [operation] [subject-fill] [clip-fill]");
        std::process::exit(2);
    }

    let subject = load_paths(&args[0])?;
    let clip = load_paths(&args[1])?;
    let operation: ClipOperation = args
        .get(2)
        .map_or(Ok(ClipOperation::Xor), |s| s.parse())?;
    let subject_fill: FillRule = args.get(3).map_or(Ok(FillRule::EvenOdd), |s| s.parse())?;
    let clip_fill: FillRule = args.get(4).map_or(Ok(FillRule::EvenOdd), |s| s.parse())?;

    info!(
        %operation,
        %subject_fill,
        %clip_fill,
        subject_paths = subject.len(),
        clip_paths = clip.len(),
        "clipping"
    );

    let result = Clip::new(&subject, &clip, operation)
        .with_fill_rules(subject_fill, clip_fill)
        .execute()?;

    print!("{}", format_paths(&result));

    let subject_area = Area::new(&subject).with_fill_rule(subject_fill).execute()?;
    let clip_area = Area::new(&clip).with_fill_rule(clip_fill).execute()?;
    info!(
        subject_area,
        clip_area,
        result_area = result.signed_area(),
        paths = result.len(),
        "done"
    );
    if let Some(bounds) = result.bounds() {
        info!(
            min_x = bounds.min.x,
            min_y = bounds.min.y,
            max_x = bounds.max.x,
            max_y = bounds.max.y,
            "result bounds"
        );
    }
    Ok(())
}

fn load_paths(arg: &str) -> Result<PathSet, Box<dyn Error>> {
    let text = if arg.trim_start().starts_with('(') {
        arg.to_string()
    } else {
        fs::read_to_string(arg)?
    };
    Ok(parse_paths(&text)?)
}

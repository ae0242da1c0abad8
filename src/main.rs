use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;

use yeardots::{calculate_grid, calendar, render, RenderRequest};

/// Render a year-progress dot grid to a PNG wallpaper.
#[derive(Parser, Debug)]
#[command(name = "yeardots", version, about)]
struct Args {
    /// Canvas width in pixels (clamped to 100..=4000)
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels (clamped to 100..=8000)
    #[arg(long)]
    height: Option<u32>,

    /// Background color as six hex digits, e.g. 101018
    #[arg(long, value_name = "HEX")]
    bg_color: Option<String>,

    /// Color for days already gone
    #[arg(long, value_name = "HEX")]
    primary: Option<String>,

    /// Color for days still to come
    #[arg(long, value_name = "HEX")]
    secondary: Option<String>,

    /// Color for today's dot and the caption
    #[arg(long, value_name = "HEX")]
    accent: Option<String>,

    /// Output path
    #[arg(long, default_value = "year.png")]
    out: PathBuf,

    /// Render as if it were this day of the year (1-indexed) instead of
    /// today; useful for reproducible output
    #[arg(long)]
    day: Option<u32>,

    /// Render for this year instead of the current one
    #[arg(long)]
    year: Option<i32>,

    /// Print the computed grid layout as JSON and exit without rendering
    #[arg(long)]
    layout_json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let request = RenderRequest::from_parts(
        args.width,
        args.height,
        args.bg_color.as_deref(),
        args.primary.as_deref(),
        args.secondary.as_deref(),
        args.accent.as_deref(),
    );

    let (today_year, today_day, _) = calendar::today();
    let year = args.year.unwrap_or(today_year);
    let total_days = calendar::days_in_year(year);
    let current_day = args.day.unwrap_or(today_day);
    if current_day < 1 || current_day > total_days {
        bail!("--day {current_day} is out of range for {year} (1..={total_days})");
    }

    if args.layout_json {
        let grid = calculate_grid(request.width, request.height, total_days);
        println!("{}", serde_json::to_string_pretty(&grid)?);
        return Ok(());
    }

    log::info!(
        "rendering {}x{} wallpaper for day {current_day}/{total_days}",
        request.width,
        request.height
    );
    let wallpaper = render(&request, current_day, total_days)?;
    fs::write(&args.out, &wallpaper.png_data)
        .with_context(|| format!("failed to write {}", args.out.display()))?;
    log::info!("wrote {} ({} bytes)", args.out.display(), wallpaper.png_data.len());

    Ok(())
}

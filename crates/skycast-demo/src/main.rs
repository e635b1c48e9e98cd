// File: crates/skycast-demo/src/main.rs
// Summary: Demo renders the dashboard to SVG, optionally replacing hourly data from CSV.

mod mock;

use anyhow::{Context, Result};
use skycast_core::model::HourlyEntry;
use skycast_core::{Dashboard, Extent};
use skycast_render_svg::SvgDocument;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    // Accept an optional hourly CSV path and an optional city override:
    //   skycast-demo [hourly.csv] [--city NAME]
    let mut csv_path: Option<PathBuf> = None;
    let mut city: Option<String> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--city" {
            city = args.next();
        } else {
            csv_path = Some(PathBuf::from(arg));
        }
    }

    let mut report = mock::washington_dc();
    if let Some(path) = &csv_path {
        let hours = load_hourly_csv(path)
            .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
        println!("Loaded {} hourly rows from {}", hours.len(), path.display());
        if hours.is_empty() {
            anyhow::bail!("no hourly rows loaded — check headers/delimiter.");
        }
        report.hourly_forecast = hours;
    }

    let mut dashboard = Dashboard::new(report, Extent::default());
    let mut doc = SvgDocument::new();

    if let Some(name) = city {
        println!("City changed to: {name}");
        dashboard.set_city(name, &mut doc)?;
    } else {
        dashboard.show(&mut doc)?;
    }

    let out = PathBuf::from("target/out/dashboard.svg");
    doc.save(&out)?;
    println!("Wrote {}", out.display());

    // Re-render at a wider extent; the series is untouched, only geometry
    // rescales.
    dashboard.resize(Extent::new(900.0, 240.0), &mut doc)?;
    let out_wide = PathBuf::from("target/out/dashboard_wide.svg");
    doc.save(&out_wide)?;
    println!("Wrote {}", out_wide.display());

    Ok(())
}

/// Load hourly forecast rows from a CSV with time/temp/precip columns.
/// Header names are sniffed case-insensitively; rows missing a temperature
/// are skipped.
fn load_hourly_csv(path: &Path) -> Result<Vec<HourlyEntry>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();

    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want {
                    return Some(i);
                }
            }
        }
        None
    };

    let i_time = idx(&["time", "hour", "label"]);
    let i_temp = idx(&["temp", "temperature"]);
    let i_precip = idx(&["precip", "precipitation", "pop", "rain"]);

    if i_temp.is_none() {
        println!("Warning: no temp/temperature column found.");
    }

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let time = i_time
            .and_then(|ix| rec.get(ix))
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|| format!("+{row}h"));
        let temp = i_temp
            .and_then(|ix| rec.get(ix))
            .and_then(|s| s.trim().parse::<f64>().ok());
        let precip = i_precip
            .and_then(|ix| rec.get(ix))
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(0);

        if let Some(temp) = temp {
            out.push(HourlyEntry { time, temp, precip });
        }
    }
    Ok(out)
}

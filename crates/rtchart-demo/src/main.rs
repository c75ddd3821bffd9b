// File: crates/rtchart-demo/src/main.rs
// Summary: Demo loads response-time samples (CSV or JSON) and renders idle, hovered and zoomed charts to PNG/SVG.

use anyhow::{Context, Result};
use rtchart_core::theme;
use rtchart_core::{Chart, ChartOptions, PointerEvent, PointerSample, RawSample, Sample};
use rtchart_render_skia::{render_png, RasterOptions};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Usage: rtchart-demo [samples.csv|samples.json|-] [theme] [width]
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "-".to_string());
    let theme_name = args.next().unwrap_or_else(|| "light".to_string());
    let width: f32 = match args.next() {
        Some(w) => w.parse().with_context(|| format!("invalid width '{w}'"))?,
        None => 960.0,
    };

    let mut chart = Chart::new(ChartOptions::with_local_offset(), theme::find(&theme_name));
    if input == "-" {
        let samples = synthetic_day();
        tracing::info!(count = samples.len(), "using synthetic samples");
        chart.set_samples(&samples);
    } else {
        let path = resolve_path(&input)?;
        let raw = load_samples(&path).with_context(|| format!("failed to load '{}'", path.display()))?;
        tracing::info!(file = %path.display(), records = raw.len(), "loaded samples");
        chart.set_raw_samples(&raw);
    }
    chart.resize(width);

    let geo = chart.geometry();
    tracing::info!(
        points = geo.points.len(),
        segments = geo.segmentation.segments.len(),
        gaps = geo.gaps.len(),
        "geometry ready"
    );

    let raster = if chart.theme().dark { RasterOptions::for_dark() } else { RasterOptions::default() };
    let out = out_dir()?;

    write_pair(&chart, &raster, &out, "idle")?;

    // Hover roughly a third of the way across the plot.
    let plot = chart.geometry().plot;
    let x = plot.left + plot.width() / 3.0;
    chart.pointer(PointerEvent::Move(PointerSample::mouse(x, plot.center_y())));
    if chart.hover().is_hovering() {
        write_pair(&chart, &raster, &out, "hover")?;
    } else {
        tracing::warn!(x, "no point within hit radius; skipping hover render");
    }
    chart.pointer(PointerEvent::Leave);

    chart.zoom_in();
    chart.pan_right();
    write_pair(&chart, &raster, &out, "zoomed")?;

    Ok(())
}

fn write_pair(chart: &Chart, raster: &RasterOptions, dir: &Path, suffix: &str) -> Result<()> {
    let draw = chart.draw_list();
    let png = dir.join(format!("response_time_{suffix}.png"));
    render_png(&draw, raster, &png).with_context(|| format!("rendering {}", png.display()))?;
    let svg = png.with_extension("svg");
    std::fs::write(&svg, draw.to_svg()).with_context(|| format!("writing {}", svg.display()))?;
    println!("Wrote {} and {}", png.display(), svg.display());
    Ok(())
}

fn out_dir() -> Result<PathBuf> {
    let out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).with_context(|| format!("creating {}", out.display()))?;
    Ok(out)
}

fn resolve_path(raw: &str) -> Result<PathBuf> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// `.json` files hold an array of `{ "value", "datetime" }` records; anything
/// else is read as CSV with `datetime` and `value` columns.
fn load_samples(path: &Path) -> Result<Vec<RawSample>> {
    let is_json = path.extension().and_then(|e| e.to_str()).is_some_and(|e| e.eq_ignore_ascii_case("json"));
    if is_json {
        let text = std::fs::read_to_string(path)?;
        return Ok(serde_json::from_str(&text)?);
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_time = idx(&["datetime", "timestamp", "time", "date"])
        .ok_or_else(|| anyhow::anyhow!("no datetime column in {:?}", headers))?;
    let i_value = idx(&["value", "response_time", "ms", "latency"])
        .ok_or_else(|| anyhow::anyhow!("no value column in {:?}", headers))?;

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let value = rec.get(i_value).and_then(|s| s.parse::<f64>().ok());
        match (rec.get(i_time), value) {
            (Some(datetime), Some(value)) => out.push(RawSample { value, datetime: datetime.to_string() }),
            _ => tracing::warn!(row, "skipping row without datetime/value"),
        }
    }
    Ok(out)
}

/// One day at five-minute cadence ending now, with a 90 minute outage.
fn synthetic_day() -> Vec<Sample> {
    let now = chrono::Utc::now().timestamp_millis();
    let step = 5 * 60_000;
    let start = now - 24 * 60 * 60_000;
    (0..288i64)
        .filter(|i| !(150..168).contains(i))
        .map(|i| {
            let base = 180.0 + 60.0 * ((i as f64) / 20.0).sin();
            let spike = if i % 47 == 0 { 1_400.0 } else { 0.0 };
            Sample::new(start + i * step, base + spike)
        })
        .collect()
}

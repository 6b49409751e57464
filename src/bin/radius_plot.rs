use clap::Parser;
use csv::ReaderBuilder;
use plotters::prelude::*;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render damage-radius curves from an impact sweep CSV"
)]
struct Cli {
    #[arg(long)]
    input: String,
    #[arg(long, default_value = "artifacts/radii.png")]
    output: PathBuf,
    #[arg(long, default_value_t = 1200)]
    width: u32,
    #[arg(long, default_value_t = 900)]
    height: u32,
}

#[derive(Debug, Clone, Copy)]
struct Point {
    energy_mt: f64,
    fireball_km: f64,
    blast_km: f64,
    thermal_km: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut points = read_points(&cli.input)?;
    if points.is_empty() {
        return Err(anyhow::anyhow!("No usable rows in the provided CSV"));
    }
    points.sort_by(|a, b| a.energy_mt.partial_cmp(&b.energy_mt).unwrap());

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_str = cli
        .output
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Output path contains invalid UTF-8"))?;

    let font_family = select_font_family();
    let caption_font = FontDesc::new(font_family, 24.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family, 18.0, FontStyle::Normal);

    // Energies span orders of magnitude across a sweep, so plot log10(E).
    let x_min = points.first().map(|p| p.energy_mt.log10()).unwrap_or(0.0);
    let x_max = points.last().map(|p| p.energy_mt.log10()).unwrap_or(1.0);
    let y_max = points
        .iter()
        .map(|p| p.thermal_km.max(p.blast_km).max(p.fireball_km))
        .fold(0.0_f64, f64::max)
        .max(1.0);

    let root = BitMapBackend::new(output_str, (cli.width, cli.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Damage radii vs impact energy", caption_font)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(x_min..x_max.max(x_min + 1e-6), 0.0..y_max * 1.05)?;

    chart
        .configure_mesh()
        .x_desc("Energy (Mt TNT, log scale)")
        .y_desc("Radius (km)")
        .label_style(label_font.clone())
        .x_labels(8)
        .y_labels(8)
        .x_label_formatter(&|v| format!("{:.1e}", 10.0_f64.powf(*v)))
        .draw()?;

    let series: [(&str, RGBColor, fn(&Point) -> f64); 3] = [
        ("Fireball", RGBColor(220, 60, 60), |p| p.fireball_km),
        ("Blast wave", RGBColor(240, 140, 40), |p| p.blast_km),
        ("Thermal", RGBColor(40, 100, 220), |p| p.thermal_km),
    ];

    for (name, color, pick) in series {
        chart
            .draw_series(LineSeries::new(
                points.iter().map(|p| (p.energy_mt.log10(), pick(p))),
                color.stroke_width(2),
            ))?
            .label(name)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK)
        .label_font(label_font)
        .draw()?;

    root.present()?;
    Ok(())
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}

fn read_points(path: &str) -> anyhow::Result<Vec<Point>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = rdr.headers()?.clone();
    let energy_idx = column(&headers, "kinetic_energy_mt")?;
    let fireball_idx = column(&headers, "fireball_radius_km")?;
    let blast_idx = column(&headers, "blast_radius_km")?;
    let thermal_idx = column(&headers, "thermal_radiation_radius_km")?;

    let mut points = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let energy_mt: f64 = field(&record, energy_idx)?;
        if !energy_mt.is_finite() || energy_mt <= 0.0 {
            continue;
        }
        points.push(Point {
            energy_mt,
            fireball_km: field(&record, fireball_idx)?,
            blast_km: field(&record, blast_idx)?,
            thermal_km: field(&record, thermal_idx)?,
        });
    }
    Ok(points)
}

fn column(headers: &csv::StringRecord, name: &str) -> anyhow::Result<usize> {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(name))
        .ok_or_else(|| anyhow::anyhow!("CSV missing '{}' column", name))
}

fn field(record: &csv::StringRecord, idx: usize) -> anyhow::Result<f64> {
    record
        .get(idx)
        .ok_or_else(|| anyhow::anyhow!("CSV row shorter than header"))?
        .trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("Bad numeric field: {}", e))
}

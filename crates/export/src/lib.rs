//! Export helpers for CSV and JSON artifacts.

pub mod table {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    use meteor_physics::{ImpactParameters, ImpactResult};

    pub const HEADER: &str = "scenario,diameter_m,velocity_km_s,angle_deg,density_kg_m3,kinetic_energy_mt,crater_diameter_km,crater_depth_km,fireball_radius_km,blast_radius_km,thermal_radiation_radius_km,seismic_magnitude";

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the standard impact-table CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row pairing a scenario label with its input and output.
    #[derive(Debug, Clone)]
    pub struct Record<'a> {
        pub scenario: &'a str,
        pub params: &'a ImpactParameters,
        pub result: &'a ImpactResult,
    }

    impl<'a> Record<'a> {
        /// Serialize the record to CSV, matching the standard header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{},{:.3},{:.3},{:.2},{:.1},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.3}",
                self.scenario,
                self.params.diameter_m,
                self.params.velocity_km_s,
                self.params.angle_deg,
                self.params.density_kg_m3,
                self.result.kinetic_energy_megatons,
                self.result.crater_diameter_km,
                self.result.crater_depth_km,
                self.result.fireball_radius_km,
                self.result.blast_radius_km,
                self.result.thermal_radiation_radius_km,
                self.result.seismic_magnitude,
            )
        }
    }
}

pub mod report {
    use std::fs::{self, File};
    use std::io;
    use std::path::Path;

    use chrono::Utc;
    use serde::Serialize;
    use serde_json::to_writer_pretty;

    use meteor_physics::{ImpactParameters, ImpactResult};

    /// Run metadata recorded alongside the numbers.
    #[derive(Debug)]
    pub struct Metadata<'a> {
        pub scenario: &'a str,
        pub profile: &'a str,
    }

    #[derive(Serialize)]
    struct ReportSidecar<'a> {
        scenario: &'a str,
        profile: &'a str,
        generated_utc: String,
        parameters: ParameterBlock,
        effects: EffectBlock,
    }

    #[derive(Serialize)]
    struct ParameterBlock {
        diameter_m: f64,
        velocity_km_s: f64,
        angle_deg: f64,
        density_kg_m3: f64,
    }

    #[derive(Serialize)]
    struct EffectBlock {
        kinetic_energy_megatons: f64,
        crater_diameter_km: f64,
        crater_depth_km: f64,
        fireball_radius_km: f64,
        blast_radius_km: f64,
        thermal_radiation_radius_km: f64,
        seismic_magnitude: f64,
    }

    /// Write a pretty-printed JSON report for one impact run.
    pub fn write_report(
        output: &Path,
        meta: &Metadata<'_>,
        params: &ImpactParameters,
        result: &ImpactResult,
    ) -> io::Result<()> {
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let sidecar = ReportSidecar {
            scenario: meta.scenario,
            profile: meta.profile,
            generated_utc: Utc::now().to_rfc3339(),
            parameters: ParameterBlock {
                diameter_m: params.diameter_m,
                velocity_km_s: params.velocity_km_s,
                angle_deg: params.angle_deg,
                density_kg_m3: params.density_kg_m3,
            },
            effects: EffectBlock {
                kinetic_energy_megatons: result.kinetic_energy_megatons,
                crater_diameter_km: result.crater_diameter_km,
                crater_depth_km: result.crater_depth_km,
                fireball_radius_km: result.fireball_radius_km,
                blast_radius_km: result.blast_radius_km,
                thermal_radiation_radius_km: result.thermal_radiation_radius_km,
                seismic_magnitude: result.seismic_magnitude,
            },
        };

        to_writer_pretty(File::create(output)?, &sidecar)?;
        Ok(())
    }
}

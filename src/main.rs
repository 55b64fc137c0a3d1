//! Project a decal onto an OBJ model and write the decal mesh as OBJ.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use decal_mesh::config::DEFAULT_WELD_TOLERANCE;
use decal_mesh::prelude::*;

/// Decal mesh generator
///
/// Clips the triangles of a model against a decal volume and writes the
/// welded, UV-mapped result.
#[derive(Parser, Debug)]
#[command(name = "decal-mesh")]
#[command(about = "Project a decal onto an OBJ model", long_about = None)]
#[command(version)]
struct Cli {
    /// Source model (Wavefront OBJ)
    input: PathBuf,

    /// Projection axis: x, y or z
    #[arg(long, default_value = "z")]
    axis: ProjectionAxis,

    /// Skip triangles facing away from the projection axis
    #[arg(long)]
    exclude_back_facing: bool,

    /// Decal center as x,y,z
    #[arg(long, value_parser = parse_vec3, default_value = "0,0,0", allow_hyphen_values = true)]
    position: Vec3,

    /// Decal rotation in degrees as x,y,z
    #[arg(long, value_parser = parse_vec3, default_value = "0,0,0", allow_hyphen_values = true)]
    rotation: Vec3,

    /// Decal volume size as x,y,z
    #[arg(long, value_parser = parse_vec3, default_value = "1,1,1", allow_hyphen_values = true)]
    scale: Vec3,

    /// Distance under which output vertices are merged
    #[arg(long, default_value_t = DEFAULT_WELD_TOLERANCE)]
    tolerance: f32,

    /// Write the decal mesh here instead of printing a summary
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn transform(&self) -> Transform {
        let degrees = self.rotation;
        let mut transform = Transform::new();
        transform
            .set_position(self.position)
            .set_rotation(Vec3::new(
                degrees.x.to_radians(),
                degrees.y.to_radians(),
                degrees.z.to_radians(),
            ))
            .set_scale(self.scale);
        transform
    }
}

fn parse_vec3(value: &str) -> Result<Vec3, String> {
    let parts = value
        .split(',')
        .map(|p| p.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("'{value}': {e}"))?;
    match parts[..] {
        [x, y, z] => Ok(Vec3::new(x, y, z)),
        _ => Err(format!("expected x,y,z, got '{value}'")),
    }
}

fn run(cli: &Cli) -> DecalResult<()> {
    let config = DecalBuildConfig::with_weld_tolerance(cli.tolerance);
    let mut builder = DecalMeshBuilder::with_config(config)?;

    let model = SourceModel::from_obj("input", &cli.input)?;
    tracing::info!(
        path = %cli.input.display(),
        meshes = model.mesh_count(),
        triangles = model.triangle_count(),
        "Loaded source model"
    );

    let projector =
        DecalProjector::new(cli.transform(), cli.axis).excluding_back_faces(cli.exclude_back_facing);

    let Some(mesh) = projector.build(&mut builder, &[model])? else {
        tracing::warn!("Decal does not touch the model; nothing written");
        return Ok(());
    };

    let stats = builder.stats();
    tracing::info!(
        back_facing = stats.back_facing,
        contained = stats.contained,
        rejected = stats.rejected,
        clipped = stats.clipped,
        "Triangle classification"
    );

    match &cli.output {
        Some(path) => {
            mesh.save_obj(path)?;
            tracing::info!(path = %path.display(), "Wrote decal mesh");
        }
        None => println!(
            "{} vertices, {} triangles, bounds {:?} .. {:?}",
            mesh.vertex_count(),
            mesh.triangle_count(),
            mesh.bounds.min,
            mesh.bounds.max
        ),
    }
    Ok(())
}

fn main() -> ExitCode {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "decal_mesh=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

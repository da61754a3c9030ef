//! # Tessel CLI
//!
//! Command-line interface for the Tessel engine.
//!
//! ## Commands
//! - `generate` - Build a procedural mesh and report its statistics
//! - `camera` - Build a camera and print its matrices
//! - `batch` - Generate every shape in parallel and push them through a
//!   headless backend

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rayon::prelude::*;
use serde::Serialize;
use tessel_geometry::{Aabb, Plane, Quad, Sphere, Triangle};
use tessel_math::{Axis, Mat4f, Vec3f, Vector, vec3};
use tessel_render::{
    BackendStats, Camera, CameraConfig, HeadlessBackend, Mesh, RenderMode,
};

/// Tessel Engine CLI
#[derive(Parser)]
#[command(name = "tessel")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a procedural mesh
    Generate {
        /// Shape to generate
        shape: ShapeKind,

        #[command(flatten)]
        params: ShapeParams,

        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a camera and print its matrices
    Camera {
        /// JSON camera configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Frame width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Frame height in pixels
        #[arg(long)]
        height: Option<u32>,

        /// Vertical field of view in degrees
        #[arg(long)]
        fov: Option<f32>,

        /// Near clip plane
        #[arg(long)]
        near: Option<f32>,

        /// Far clip plane
        #[arg(long)]
        far: Option<f32>,

        /// Camera position, as `x,y,z`
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        position: Option<Vec3f>,

        /// Point to look at, as `x,y,z`
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        look_at: Option<Vec3f>,

        /// Print the matrices as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate every shape in parallel and draw them headlessly
    Batch {
        #[command(flatten)]
        params: ShapeParams,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Procedural shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    Plane,
    Triangle,
    Quad,
    #[value(name = "box")]
    #[serde(rename = "box")]
    Cuboid,
    UvSphere,
    Icosphere,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Plane,
        ShapeKind::Triangle,
        ShapeKind::Quad,
        ShapeKind::Cuboid,
        ShapeKind::UvSphere,
        ShapeKind::Icosphere,
    ];
}

/// Render modes accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderModeArg {
    Points,
    Lines,
    Triangles,
}

impl From<RenderModeArg> for RenderMode {
    fn from(mode: RenderModeArg) -> Self {
        match mode {
            RenderModeArg::Points => RenderMode::Points,
            RenderModeArg::Lines => RenderMode::Lines,
            RenderModeArg::Triangles => RenderMode::Triangles,
        }
    }
}

/// Shape parameters shared by `generate` and `batch`
#[derive(Debug, Clone, Args)]
pub struct ShapeParams {
    /// Sphere radius
    #[arg(long, default_value = "1.0")]
    pub radius: f32,

    /// UV sphere segments around the vertical axis
    #[arg(long, default_value = "16")]
    pub width_count: u32,

    /// UV sphere rings from pole to pole
    #[arg(long, default_value = "8")]
    pub height_count: u32,

    /// Icosphere subdivision level
    #[arg(long, default_value = "0")]
    pub subdiv: u32,

    /// Half-width of planes, triangles, quads and boxes
    #[arg(long, default_value = "1.0")]
    pub width: f32,

    /// Half-height of boxes
    #[arg(long, default_value = "1.0")]
    pub height: f32,

    /// Half-depth of planes, triangles, quads and boxes
    #[arg(long, default_value = "1.0")]
    pub depth: f32,

    /// Primitive assembly mode
    #[arg(long, value_enum, default_value = "triangles")]
    pub render_mode: RenderModeArg,
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            radius: 1.0,
            width_count: 16,
            height_count: 8,
            subdiv: 0,
            width: 1.0,
            height: 1.0,
            depth: 1.0,
            render_mode: RenderModeArg::Triangles,
        }
    }
}

/// Bounding box as plain arrays
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundsReport {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

impl From<&Aabb> for BoundsReport {
    fn from(aabb: &Aabb) -> Self {
        Self {
            min: aabb.left_bottom_back.into_array(),
            max: aabb.right_top_front.into_array(),
        }
    }
}

/// Statistics of a generated mesh
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshStats {
    pub shape: ShapeKind,
    pub render_mode: RenderMode,
    pub vertices: usize,
    pub triangles: usize,
    pub bounding_box: BoundsReport,
}

impl MeshStats {
    pub fn new(shape: ShapeKind, mesh: &Mesh) -> Self {
        Self {
            shape,
            render_mode: mesh
                .submeshes()
                .first()
                .map(|submesh| submesh.render_mode())
                .unwrap_or_default(),
            vertices: mesh.recover_vertex_count(),
            triangles: mesh.recover_triangle_count(),
            bounding_box: mesh.bounding_box().into(),
        }
    }
}

/// Result of the `batch` command
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub shapes: Vec<MeshStats>,
    pub backend: BackendStats,
}

/// Camera matrices as plain rows
#[derive(Debug, Clone, Serialize)]
pub struct CameraReport {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

/// Parse a vector written as `x,y,z`
pub fn parse_vec3(value: &str) -> Result<Vec3f, String> {
    let components = value
        .split(',')
        .map(|part| part.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| format!("invalid number in '{value}': {err}"))?;

    Vec3f::try_from(components.as_slice()).map_err(|err| err.to_string())
}

/// Build the mesh of a shape
pub fn build_mesh(shape: ShapeKind, params: &ShapeParams) -> Mesh {
    let mode = RenderMode::from(params.render_mode);
    let (width, height, depth) = (params.width, params.height, params.depth);

    match shape {
        ShapeKind::Plane => Mesh::from_plane(&Plane::new(0.0, Axis::Y), width, depth, mode),
        ShapeKind::Triangle => Mesh::from_triangle(
            &Triangle::new(vec3(-width, 0.0, depth), vec3(width, 0.0, depth), vec3(0.0, 0.0, -depth)),
            mode,
        ),
        ShapeKind::Quad => Mesh::from_quad(
            &Quad::new(
                vec3(-width, depth, 0.0),
                vec3(width, depth, 0.0),
                vec3(width, -depth, 0.0),
                vec3(-width, -depth, 0.0),
            ),
            mode,
        ),
        ShapeKind::Cuboid => Mesh::from_aabb(
            &Aabb::from_center_half_extents(Vec3f::ZERO, vec3(width, height, depth)),
            mode,
        ),
        ShapeKind::UvSphere => Mesh::from_uv_sphere(
            &Sphere::new(Vec3f::ZERO, params.radius),
            params.width_count,
            params.height_count,
            mode,
        ),
        ShapeKind::Icosphere => {
            Mesh::from_icosphere(&Sphere::new(Vec3f::ZERO, params.radius), params.subdiv, mode)
        }
    }
}

/// Generate every shape in parallel, then upload and draw them in order
pub fn run_batch(params: &ShapeParams) -> Result<BatchReport> {
    let meshes: Vec<(ShapeKind, Mesh)> = ShapeKind::ALL
        .par_iter()
        .map(|&shape| (shape, build_mesh(shape, params)))
        .collect();

    let mut backend = HeadlessBackend::new();
    let mut shapes = Vec::with_capacity(meshes.len());

    for (shape, mesh) in &meshes {
        mesh.load(&mut backend)
            .with_context(|| format!("Failed to load {shape:?} mesh"))?;
        mesh.draw(&mut backend)
            .with_context(|| format!("Failed to draw {shape:?} mesh"))?;
        shapes.push(MeshStats::new(*shape, mesh));
    }

    Ok(BatchReport {
        shapes,
        backend: backend.stats().clone(),
    })
}

/// Read a camera configuration from a JSON file
pub fn load_camera_config(path: &Path) -> Result<CameraConfig> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open camera config {}", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse camera config {}", path.display()))?;
    Ok(config)
}

fn print_stats(stats: &MeshStats) {
    println!(
        "{:<10} {:>8} vertices {:>8} triangles  bounds {:?} -> {:?}",
        format!("{:?}", stats.shape),
        stats.vertices,
        stats.triangles,
        stats.bounding_box.min,
        stats.bounding_box.max
    );
}

fn print_matrix(name: &str, matrix: &Mat4f) {
    println!("{name}:");
    for row in matrix.rows() {
        println!("  {}", Vector::new(*row));
    }
}

/// Execute the CLI command
pub fn execute(cli: Cli) -> Result<()> {
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    match cli.command {
        Commands::Generate { shape, params, json } => {
            log::info!("Generating {:?}...", shape);
            let mesh = build_mesh(shape, &params);
            let stats = MeshStats::new(shape, &mesh);

            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print_stats(&stats);
            }
        }

        Commands::Camera {
            config,
            width,
            height,
            fov,
            near,
            far,
            position,
            look_at,
            json,
        } => {
            let mut camera_config = match config {
                Some(path) => load_camera_config(&path)?,
                None => CameraConfig::default(),
            };

            if let Some(width) = width {
                camera_config.frame_width = width;
            }
            if let Some(height) = height {
                camera_config.frame_height = height;
            }
            if let Some(fov) = fov {
                camera_config.field_of_view_degrees = fov;
            }
            if let Some(near) = near {
                camera_config.near_plane = near;
            }
            if let Some(far) = far {
                camera_config.far_plane = far;
            }
            if let Some(position) = position {
                camera_config.position = position.into_array();
            }

            let mut camera = Camera::new(camera_config).context("Invalid camera configuration")?;
            if let Some(target) = look_at {
                log::info!("Looking at {}", target);
                camera.compute_look_at(target, Axis::Y);
            }

            if json {
                let report = CameraReport {
                    view: *camera.view_matrix().rows(),
                    projection: *camera.projection_matrix().rows(),
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_matrix("View", camera.view_matrix());
                print_matrix("Projection", camera.projection_matrix());
            }
        }

        Commands::Batch { params, json } => {
            log::info!("Generating {} shapes...", ShapeKind::ALL.len());
            let report = run_batch(&params)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for stats in &report.shapes {
                    print_stats(stats);
                }
                let totals = &report.backend;
                println!(
                    "Backend: {} uploads, {} draw calls, {} triangles, {} bytes",
                    totals.uploads, totals.draw_calls, totals.triangles, totals.bytes_uploaded
                );
            }
            log::info!("Batch complete!");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse() {
        let cli = Cli::parse_from(["tessel", "generate", "icosphere"]);
        assert!(matches!(
            cli.command,
            Commands::Generate {
                shape: ShapeKind::Icosphere,
                json: false,
                ..
            }
        ));
    }

    #[test]
    fn test_generate_command() {
        let cli = Cli::parse_from([
            "tessel",
            "-v",
            "generate",
            "uv-sphere",
            "--width-count",
            "32",
            "--height-count",
            "16",
            "--render-mode",
            "lines",
            "--json",
        ]);
        assert!(cli.verbose);
        if let Commands::Generate { shape, params, json } = cli.command {
            assert_eq!(shape, ShapeKind::UvSphere);
            assert_eq!(params.width_count, 32);
            assert_eq!(params.height_count, 16);
            assert_eq!(params.render_mode, RenderModeArg::Lines);
            assert_eq!(params.radius, 1.0);
            assert!(json);
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn test_box_shape_name() {
        let cli = Cli::parse_from(["tessel", "generate", "box", "--height", "2"]);
        if let Commands::Generate { shape, params, .. } = cli.command {
            assert_eq!(shape, ShapeKind::Cuboid);
            assert_eq!(params.height, 2.0);
        } else {
            panic!("Expected Generate command");
        }
        assert_eq!(serde_json::to_string(&ShapeKind::Cuboid).unwrap(), "\"box\"");
        assert_eq!(serde_json::to_string(&ShapeKind::UvSphere).unwrap(), "\"uv-sphere\"");
    }

    #[test]
    fn test_negative_extents() {
        let cli = Cli::parse_from(["tessel", "generate", "box", "--width=-1", "--depth=-2"]);
        let Commands::Generate { shape, params, .. } = cli.command else {
            panic!("Expected Generate command");
        };

        let stats = MeshStats::new(shape, &build_mesh(shape, &params));
        assert_eq!(stats.vertices, 8);
        assert_eq!(
            stats.bounding_box,
            BoundsReport {
                min: [-1.0, -1.0, -2.0],
                max: [1.0, 1.0, 2.0],
            }
        );

        let params = ShapeParams {
            radius: -1.0,
            ..ShapeParams::default()
        };
        let stats = MeshStats::new(ShapeKind::Icosphere, &build_mesh(ShapeKind::Icosphere, &params));
        assert_eq!(stats.vertices, 12);
    }

    #[test]
    fn test_camera_command() {
        let cli = Cli::parse_from([
            "tessel",
            "camera",
            "--width",
            "640",
            "--position",
            "0,-1,5",
            "--look-at",
            "0,0,0",
        ]);
        if let Commands::Camera {
            width,
            position,
            look_at,
            config,
            ..
        } = cli.command
        {
            assert_eq!(width, Some(640));
            assert_eq!(position, Some(vec3(0.0, -1.0, 5.0)));
            assert_eq!(look_at, Some(Vec3f::ZERO));
            assert!(config.is_none());
        } else {
            panic!("Expected Camera command");
        }
    }

    #[test]
    fn test_parse_vec3() {
        assert_eq!(parse_vec3("1, 2.5, -3").unwrap(), vec3(1.0, 2.5, -3.0));
        assert!(parse_vec3("1,2").unwrap_err().contains("expected 3 values, found 2"));
        assert!(parse_vec3("1,x,3").is_err());
    }

    #[test]
    fn test_build_mesh_stats() {
        let params = ShapeParams {
            width_count: 8,
            height_count: 4,
            ..ShapeParams::default()
        };

        let stats = MeshStats::new(ShapeKind::UvSphere, &build_mesh(ShapeKind::UvSphere, &params));
        assert_eq!(stats.vertices, 9 * 5);
        assert_eq!(stats.triangles, (6 * 8 + 6 * 8 * 2) / 3);

        let stats = MeshStats::new(ShapeKind::Cuboid, &build_mesh(ShapeKind::Cuboid, &params));
        assert_eq!(stats.vertices, 8);
        assert_eq!(stats.triangles, 12);
        assert_eq!(
            stats.bounding_box,
            BoundsReport {
                min: [-1.0; 3],
                max: [1.0; 3],
            }
        );
    }

    #[test]
    fn test_run_batch() {
        let report = run_batch(&ShapeParams::default()).unwrap();

        assert_eq!(report.shapes.len(), ShapeKind::ALL.len());
        let shapes: Vec<ShapeKind> = report.shapes.iter().map(|s| s.shape).collect();
        assert_eq!(shapes, ShapeKind::ALL.to_vec());

        let triangles: usize = report.shapes.iter().map(|s| s.triangles).sum();
        assert_eq!(report.backend.uploads, 6);
        assert_eq!(report.backend.draw_calls, 6);
        assert_eq!(report.backend.triangles, triangles as u64);
    }

    #[test]
    fn test_load_camera_config() {
        let path = std::env::temp_dir().join(format!("tessel-camera-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "frame_width": 320, "frame_height": 240, "near_plane": 0.5 }"#)
            .unwrap();

        let config = load_camera_config(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.frame_width, 320);
        assert_eq!(config.near_plane, 0.5);
        assert_eq!(config.far_plane, CameraConfig::default().far_plane);

        assert!(load_camera_config(Path::new("/nonexistent/camera.json")).is_err());
    }
}

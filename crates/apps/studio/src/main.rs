//! Headless project manager for Voxelsmith scenes
//!
//! Lists, inspects, creates and deletes saved projects from the command
//! line, without the rendering front end.

mod config;

use anyhow::Context;
use clap::{Parser, Subcommand};
use config::StudioConfig;
use project::{FileProjectStore, Project, ProjectStore};
use scene::{Color, Voxel};
use session::{CommitMode, EditorSession};
use std::path::PathBuf;
use voxelsmith_llm::parse_generated;

#[derive(Parser)]
#[command(name = "studio", about = "Voxelsmith project manager", version)]
struct Cli {
    /// Override the projects directory
    #[arg(long, global = true)]
    projects_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List saved projects, newest first
    List,
    /// Show one project's scene summary
    Show { id: String },
    /// Create and save an empty project
    New { name: String },
    /// Delete a project
    Delete { id: String },
    /// Show the studio configuration, optionally updating it
    Config {
        /// Persist a new projects directory to studio.toml
        #[arg(long)]
        set_projects_dir: Option<PathBuf>,
    },
    /// Import generated model output into a project
    ///
    /// Reads raw generator output (prose and code fences are fine), stages
    /// the voxel list, optionally recolors it, and commits.
    Import {
        /// Project name for the imported scene
        name: String,
        /// File holding the generator's raw output
        file: PathBuf,
        /// Recolor the generated voxels toward this hex color
        #[arg(long)]
        recolor: Option<String>,
        /// Append to an existing project instead of creating a new scene
        #[arg(long)]
        append_to: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = StudioConfig::load();

    // Handled before the store opens: inspecting the configuration should
    // not create the projects directory as a side effect.
    if let Command::Config { set_projects_dir } = &cli.command {
        if let Some(dir) = set_projects_dir {
            config.projects_dir = Some(dir.clone());
            config.save().context("saving studio.toml")?;
            println!("Configuration saved");
        }
        println!("projects dir:  {}", config.projects_dir().display());
        println!("grid size:     {}", config.grid_size);
        println!("grid density:  {}", config.grid_density);
        println!("default color: {}", config.default_color);
        return Ok(());
    }

    let dir = cli.projects_dir.unwrap_or_else(|| config.projects_dir());
    let store = FileProjectStore::open(&dir)
        .with_context(|| format!("opening project store at {}", dir.display()))?;

    match cli.command {
        Command::List => {
            let projects = store.list()?;
            if projects.is_empty() {
                println!("No projects in {}", dir.display());
                return Ok(());
            }
            for p in projects {
                println!(
                    "{}  {:<24} {:>6} voxels  {}",
                    p.id,
                    p.name,
                    p.voxels.len(),
                    format_timestamp(p.timestamp)
                );
            }
        }
        Command::Show { id } => {
            let project = store
                .get(&id)?
                .with_context(|| format!("no project with id {id}"))?;
            show_project(&project);
        }
        Command::New { name } => {
            let default_color = Color::from_hex(&config.default_color)
                .context("default_color in studio.toml is not a valid hex color")?;
            let session = EditorSession::new(config.grid_size, config.grid_density, default_color);
            let project = Project::new(
                &name,
                session.voxels().to_vec(),
                session.grid_size(),
                session.grid_density(),
                session.current_color(),
            );
            store.put(&project)?;
            println!("Created project '{}' ({})", project.name, project.id);
        }
        Command::Delete { id } => {
            store.delete(&id)?;
            println!("Deleted {id}");
        }
        Command::Config { .. } => unreachable!("handled before the store opens"),
        Command::Import {
            name,
            file,
            recolor,
            append_to,
        } => {
            let default_color = Color::from_hex(&config.default_color)
                .context("default_color in studio.toml is not a valid hex color")?;
            let mut session =
                EditorSession::new(config.grid_size, config.grid_density, default_color);

            let existing = match &append_to {
                Some(id) => {
                    let p = store
                        .get(id)?
                        .with_context(|| format!("no project with id {id}"))?;
                    session.load(p.voxels.clone(), p.grid_size, p.grid_density, p.current_color);
                    Some(p)
                }
                None => None,
            };

            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let points = parse_generated(&text, session.grid_size() / 2)?;
            let voxels: Vec<Voxel> = points.iter().filter_map(|p| p.to_voxel()).collect();
            if voxels.is_empty() {
                println!("No usable voxels in {}, nothing imported", file.display());
                return Ok(());
            }

            session.stage_preview(voxels);
            if let Some(hex) = &recolor {
                let target = Color::from_hex(hex)
                    .with_context(|| format!("--recolor {hex} is not a valid hex color"))?;
                session.recolor_preview(Some(target));
            }
            let mode = if existing.is_some() {
                CommitMode::Append
            } else {
                CommitMode::Replace
            };
            session.commit_preview(mode);

            let project = match existing {
                Some(p) => Project::with_id(
                    p.id,
                    name,
                    session.voxels().to_vec(),
                    session.grid_size(),
                    session.grid_density(),
                    session.current_color(),
                ),
                None => Project::new(
                    name,
                    session.voxels().to_vec(),
                    session.grid_size(),
                    session.grid_density(),
                    session.current_color(),
                ),
            };
            store.put(&project)?;
            println!(
                "Imported {} voxels into '{}' ({})",
                project.voxels.len(),
                project.name,
                project.id
            );
        }
    }

    Ok(())
}

fn show_project(project: &Project) {
    println!("{} ({})", project.name, project.id);
    println!("  saved:   {}", format_timestamp(project.timestamp));
    println!("  grid:    {} @ density {}", project.grid_size, project.grid_density);
    println!("  color:   {}", project.current_color);
    println!("  voxels:  {}", project.voxels.len());

    if let Some((min, max)) = bounds(project) {
        println!("  bounds:  {min} .. {max}");
    }

    let mut colors: Vec<String> = project.voxels.iter().map(|v| v.color.to_hex()).collect();
    colors.sort();
    colors.dedup();
    println!("  palette: {}", colors.join(" "));
}

fn bounds(project: &Project) -> Option<(glam::IVec3, glam::IVec3)> {
    let first = project.voxels.first()?.position;
    let mut min = first;
    let mut max = first;
    for v in &project.voxels {
        min = min.min(v.position);
        max = max.max(v.position);
    }
    Some((min, max))
}

fn format_timestamp(millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| millis.to_string())
}

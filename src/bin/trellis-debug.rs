use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::Path;
use tracing::info;
use trellis::trellis_layout::{ContentSize, LayoutConfig, Remainder};
use trellis::trellis_render::RenderCommand;
use trellis::{load_scene, render_once, tree_json, tree_text};

#[derive(Parser)]
#[command(name = "trellis-debug")]
#[command(about = "Lay out a JSON scene for one frame and print the resulting geometry")]
struct Args {
    /// Path to the scene .json file
    scene_file: String,

    /// Output format (tree, json, commands)
    #[arg(long, default_value = "tree")]
    format: String,

    /// Save output to file instead of stdout
    #[arg(long)]
    output: Option<String>,

    /// Override the root width
    #[arg(long)]
    width: Option<f32>,

    /// Override the root height
    #[arg(long)]
    height: Option<f32>,

    /// Leftover flex pixels (floor, spread)
    #[arg(long, default_value = "floor")]
    remainder: String,

    /// Stack content size when nothing is declared (extent, zero)
    #[arg(long, default_value = "extent")]
    content_size: String,

    /// Do not clamp flex results to min/max sizes
    #[arg(long)]
    no_clamp: bool,

    /// Treat negative interior space as an error
    #[arg(long)]
    strict: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout stays parseable
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if args.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    if !Path::new(&args.scene_file).exists() {
        anyhow::bail!("Scene file not found: {}", args.scene_file);
    }

    let config = layout_config(&args)?;
    info!("Loading scene: {}", args.scene_file);
    let scene = load_scene(&args.scene_file)?;
    if let Some(title) = &scene.title {
        info!("Scene title: {}", title);
    }

    let mut tree = scene.build_tree()?;
    if let Some(root) = tree.root() {
        let node = tree.node_mut(root)?;
        if let Some(width) = args.width {
            node.size.x = width;
            node.actual_size.x = width;
        }
        if let Some(height) = args.height {
            node.size.y = height;
            node.actual_size.y = height;
        }
    }

    let (report, recorder) = render_once(&mut tree, config)?;
    info!(
        "Rendered {} nodes ({} layout errors)",
        report.rendered.len(),
        report.layout_errors.len()
    );

    let output_text = match args.format.as_str() {
        "tree" => tree_text(&tree),
        "json" => tree_json(&tree)?,
        "commands" => command_text(recorder.commands()),
        _ => anyhow::bail!("Unknown format: {}. Use 'tree', 'json', or 'commands'", args.format),
    };

    if let Some(output_file) = args.output {
        fs::write(&output_file, output_text)
            .with_context(|| format!("Failed to write to file: {}", output_file))?;
        info!("Output written to: {}", output_file);
    } else {
        print!("{}", output_text);
    }

    Ok(())
}

fn layout_config(args: &Args) -> Result<LayoutConfig> {
    let remainder = match args.remainder.as_str() {
        "floor" => Remainder::Floor,
        "spread" => Remainder::Spread,
        other => anyhow::bail!("Unknown remainder policy: {}. Use 'floor' or 'spread'", other),
    };
    let content_size = match args.content_size.as_str() {
        "extent" => ContentSize::Extent,
        "zero" => ContentSize::Zero,
        other => anyhow::bail!("Unknown content size policy: {}. Use 'extent' or 'zero'", other),
    };

    Ok(LayoutConfig::new()
        .with_remainder(remainder)
        .with_content_size(content_size)
        .with_clamp_to_bounds(!args.no_clamp)
        .with_strict(args.strict))
}

fn command_text(commands: &[RenderCommand]) -> String {
    let mut output = String::new();
    for command in commands {
        match command {
            RenderCommand::DrawRect {
                node,
                position,
                size,
                depth,
            } => {
                output.push_str(&format!(
                    "{}rect #{} at ({:.0},{:.0}) size ({:.0},{:.0})\n",
                    "  ".repeat(*depth),
                    node,
                    position.x,
                    position.y,
                    size.x,
                    size.y
                ));
            }
        }
    }
    output
}

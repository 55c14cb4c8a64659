use std::path::Path;

use anyhow::Result;
use clap::Parser;

use gitversion_gen::config::{self, Config};
use gitversion_gen::provider::VersionInfoProvider;
use gitversion_gen::version_info::VersionInfo;
use gitversion_gen::{formatter, output, rename, ui};

#[derive(clap::Parser)]
#[command(
    name = "gitversion-gen",
    about = "Render templates and version-stamp artifacts from gitversion output"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Run the version tool and render a template with its fields
    Generate {
        /// Template file with {key} placeholders
        template: String,

        #[arg(short, long, help = "Write result here instead of stdout")]
        output: Option<String>,
    },
    /// Run the version tool and rename an artifact with the friendly version
    Rename {
        /// Artifact file to rename
        artifact: String,

        #[arg(short, long, help = "Project name prefix for the new filename")]
        project: Option<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    let info = match fetch_version_info(&config) {
        Ok(info) => info,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let result = match &args.command {
        Command::Generate { template, output } => {
            run_generate(&info, template, output.as_deref())
        }
        Command::Rename { artifact, project } => {
            run_rename(&config, &info, artifact, project.as_deref())
        }
    };

    if let Err(e) = result {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}

/// Runs the external version tool and attaches the derived friendly version.
fn fetch_version_info(config: &Config) -> gitversion_gen::Result<VersionInfo> {
    let provider = VersionInfoProvider::new(&config.tool.command);
    ui::display_status(&format!("Executing: {}", provider.command()));
    provider.fetch()?.with_friendly_version()
}

fn run_generate(
    info: &VersionInfo,
    template_path: &str,
    output_path: Option<&str>,
) -> gitversion_gen::Result<()> {
    let template = std::fs::read_to_string(template_path)
        .map_err(|e| std::io::Error::new(e.kind(), format!("{}: {}", template_path, e)))?;
    let rendered = formatter::render_template(&template, info)?;

    match output_path {
        Some(path) => {
            if output::update_file(Path::new(path), &rendered)? {
                ui::display_success(&format!("Updated {}", path));
            } else {
                ui::display_status(&format!("{} is up to date", path));
            }
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

fn run_rename(
    config: &Config,
    info: &VersionInfo,
    artifact: &str,
    project: Option<&str>,
) -> gitversion_gen::Result<()> {
    let project = match project.or(config.project.name.as_deref()) {
        Some(name) => name,
        None => {
            return Err(gitversion_gen::VersionGenError::config(
                "no project name given; pass --project or set [project] name in gitversion-gen.toml",
            ));
        }
    };

    let friendly = info.friendly_version()?;
    let renamed = rename::rename_artifact(Path::new(artifact), project, &friendly)?;
    ui::display_rename(artifact, &renamed.display().to_string());

    Ok(())
}

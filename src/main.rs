use clap::{Parser, Subcommand};
use skill_share::core::{package, skill};
use skill_share::utils::logger;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "skill-share")]
#[command(about = "Package and share Claude skills as portable archives")]
struct Cli {
    #[arg(long, global = true, help = "Enable verbose output")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Package a Claude skill directory into a shareable archive
    Pack {
        skill_path: PathBuf,
        archive: PathBuf,
    },
    /// Extract a Claude skill archive to a local directory
    ///
    /// Without a destination, skills are extracted to
    /// ~/.claude/skills/<skill-name>.
    Unpack {
        archive: PathBuf,
        dest: Option<PathBuf>,
    },
    /// Validate a Claude skill directory
    Validate { skill_path: PathBuf },
}

fn main() {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);

    if let Err(e) = run(cli.command) {
        tracing::error!("Command failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> skill_share::Result<()> {
    match command {
        Commands::Pack { skill_path, archive } => {
            let abs_path = std::fs::canonicalize(&skill_path)?;
            println!("Packaging skill from: {}", abs_path.display());

            let metadata = package::pack_skill(&abs_path, &archive)?;
            println!("Skill: {}", metadata.name);
            println!("Description: {}", metadata.description);
            println!("Successfully packed skill!");
            println!("Archive: {}", archive.display());
        }
        Commands::Unpack { archive, dest } => {
            println!("Extracting skill from {}...", archive.display());

            let config = package::read_archive_config(&archive)?;
            if let Some(name) = config.skill_name() {
                println!("Skill: {}", name);
            }
            if let Some(description) = config.skill_description() {
                println!("Description: {}", description);
            }

            let dest_path = package::unpack_skill(&archive, dest.as_deref())?;
            println!("Successfully unpacked skill to: {}", dest_path.display());
        }
        Commands::Validate { skill_path } => {
            let metadata = skill::validate_skill_directory(&skill_path)?;
            println!("Skill: {}", metadata.name);
            println!("Description: {}", metadata.description);
            println!("Skill directory is valid");
        }
    }

    Ok(())
}

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "skill-runner")]
#[command(about = "Example skill script demonstrating executable code in skills")]
pub struct CliConfig {
    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Extra positional arguments are accepted and ignored so callers can
    /// invoke the script however their harness does.
    #[arg(trailing_var_arg = true, hide = true)]
    pub ignored: Vec<String>,
}

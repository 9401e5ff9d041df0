use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use prompt_refine::{Mode, RefinerConfig, Session};

/// Rewrite a prompt so the answering model cites verifiable sources
#[derive(Debug, Parser)]
#[command(name = "prompt-refine", version)]
struct Cli
{   /// Prompt text; read from stdin when omitted
    text: Option<String>

  , /// Let the chat-completion provider restructure the prompt
    #[arg(long)]
    remote: bool

  , /// Do not append the operating instructions to remote results
    #[arg(long)]
    no_instructions: bool

  , /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>

  , /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool
}

fn load_config(cli: &Cli) -> Result<RefinerConfig, prompt_refine::Error>
{   let mut config = match &cli.config
    {   Some(path) => RefinerConfig::from_json_file(path)?
      , None => RefinerConfig::default()
    };
    if cli.no_instructions
    {   config.append_operating_instructions = false;
    }
    Ok(config)
}

fn init_logging(verbose: bool)
{   let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(
      env_logger::Env::default().default_filter_or(default_level)
    ).init();
}

fn read_input(cli: &Cli) -> std::io::Result<String>
{   match &cli.text
    {   Some(text) => Ok(text.clone())
      , None => {
          let mut buf = String::new();
          std::io::stdin().read_to_string(&mut buf)?;
          Ok(buf)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode
{   let cli = Cli::parse();

    let config = match load_config(&cli)
    {   Ok(config) => config
      , Err(e) => {
          init_logging(cli.verbose);
          eprintln!("{}", e);
          return ExitCode::FAILURE;
        }
    };
    init_logging(cli.verbose || config.verbose.unwrap_or(false));

    let input = match read_input(&cli)
    {   Ok(input) => input
      , Err(e) => {
          debug!("Failed to read stdin: {}", e);
          eprintln!("{}", e);
          return ExitCode::FAILURE;
        }
    };

    let transformer = match prompt_refine::transformer_from_config(&config)
    {   Ok(transformer) => transformer
      , Err(e) => {
          eprintln!("{}", e);
          return ExitCode::FAILURE;
        }
    };

    let mode = if cli.remote { Mode::Remote } else { Mode::Local };
    let mut session = Session::new();
    session.set_input(&input);

    if !session.submit(&transformer, mode).await
    {   debug!("Nothing to refine");
        return ExitCode::SUCCESS;
    }

    match (session.output(), session.error())
    {   (_, Some(message)) => {
          eprintln!("{}", message);
          ExitCode::FAILURE
        }
      , (Some(text), None) => {
          println!("{}", text);
          ExitCode::SUCCESS
        }
      , (None, None) => ExitCode::FAILURE
    }
}

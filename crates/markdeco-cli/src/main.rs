use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use markdeco_config::Config;
use markdeco_engine::{BlockText, PositionUnit, highlight, lex, parse_json, parse_with};
use serde_json::Value;
use std::{fs, io::Read, path::PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum UnitArg {
    Utf16,
    Chars,
    Bytes,
}

impl From<UnitArg> for PositionUnit {
    fn from(unit: UnitArg) -> Self {
        match unit {
            UnitArg::Utf16 => PositionUnit::Utf16,
            UnitArg::Chars => PositionUnit::Chars,
            UnitArg::Bytes => PositionUnit::Bytes,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "markdeco")]
#[command(about = "Print markdown node, mark and syntax spans in document coordinates")]
struct Cli {
    /// Input file, stdin when omitted
    file: Option<PathBuf>,

    /// Position of the first block (overrides `base_offset` from the config)
    #[arg(short, long)]
    offset: Option<usize>,

    /// How one character of text is counted
    #[arg(short, long, value_enum)]
    unit: Option<UnitArg>,

    /// Input is a token tree in JSON instead of markdown
    #[arg(long, conflicts_with_all = ["lex", "per_line"])]
    tokens: bool,

    /// Print the token tree instead of parsing it
    #[arg(long, conflicts_with = "per_line")]
    lex: bool,

    /// Treat every line as its own host block and print the highlights
    #[arg(long)]
    per_line: bool,

    /// Config file to use instead of ~/.config/markdeco/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    no_strikethrough: bool,

    #[arg(long)]
    no_task_lists: bool,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,
}

impl Cli {
    fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => match Config::load_from_path(path)? {
                Some(config) => Ok(config),
                None => bail!("Config file '{}' does not exist", path.display()),
            },
            None => Ok(Config::load()?.unwrap_or_default()),
        }
    }

    /// Command-line flags win over whatever the config file says.
    fn apply(&self, mut config: Config) -> Config {
        if let Some(offset) = self.offset {
            config.base_offset = offset;
        }
        if let Some(unit) = self.unit {
            config.parse.unit = unit.into();
        }
        if self.no_strikethrough {
            config.parse.strikethrough = false;
        }
        if self.no_task_lists {
            config.parse.task_lists = false;
        }
        config
    }

    fn read_input(&self) -> Result<String> {
        match &self.file {
            Some(path) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read '{}'", path.display())),
            None => {
                let mut input = String::new();
                std::io::stdin()
                    .read_to_string(&mut input)
                    .context("Failed to read stdin")?;
                Ok(input)
            }
        }
    }

    fn run(&self, config: &Config, input: &str) -> Result<Value> {
        let options = &config.parse;
        let output = if self.lex {
            serde_json::to_value(lex(input, options))?
        } else if self.tokens {
            let offset = i64::try_from(config.base_offset)?;
            serde_json::to_value(parse_json(input, offset, options)?)?
        } else if self.per_line {
            let blocks: Vec<BlockText> = BlockText::per_line(input, options)
                .into_iter()
                .map(|block| BlockText::new(block.offset + config.base_offset, block.text))
                .collect();
            serde_json::to_value(highlight(&blocks, options))?
        } else {
            serde_json::to_value(parse_with(input, config.base_offset, options))?
        };
        Ok(output)
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only JSON
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = cli.apply(cli.load_config()?);
    log::debug!("Effective config: {config:?}");

    let input = cli.read_input()?;
    let output = cli.run(&config, &input)?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{json}");
    Ok(())
}

//! # twtr CLI
//!
//! Command-line interface for the twtr microblogging client.
//!
//! Copyright (c) 2025 twtr authors. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;

use twtr::commands;

const GLOBAL_HELP: &str = "\
Configuration:
  The config lives at <platform config dir>/twtxt/config (override with
  --config). Run `twtr quickstart` to create it interactively.

Feed format:
  Your feed is a plain text file, one post per line:
    2016-02-03T23:05:00+01:00<TAB>welcome to twtxt!
  Comment lines start with '#' and may carry `# key = value` metadata.

Getting Started:
  twtr quickstart                 Set up nick, twtfile and twturl
  twtr tweet \"Hello world\"        Append a post to your feed
  twtr follow alice URL           Subscribe to a feed
  twtr timeline                   Show your timeline";

#[derive(Parser)]
#[command(name = "twtr")]
#[command(version)]
#[command(about = "Decentralized, minimalist microblogging for hackers")]
#[command(
    long_about = "twtr is a client for twtxt, the decentralized, minimalist microblogging \
service for hackers. Your posts live in a plain text file that you publish at a URL of \
your choosing; you follow people by fetching their files. No accounts, no servers, no \
lock-in — just text."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    /// Use a custom configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Quickstart wizard for setting up twtr
    #[command(
        long_about = "Interactive first-run wizard.\n\n\
Asks for your nickname, the path of your twtxt file, and the URL it will be \
published at, then writes the config file and creates the twtxt file.",
        after_help = "Examples:\n  \
twtr quickstart                 Set up the default config\n  \
twtr quickstart --force         Start over, discarding the existing config"
    )]
    Quickstart {
        /// Overwrite an existing configuration
        #[arg(long)]
        force: bool,
    },

    /// Append a new tweet to your twtxt file
    #[command(
        long_about = "Append a new post to your twtxt file.\n\n\
The post is timestamped now and written as a single line; literal tabs and \
newlines are escaped. If configured, pre_tweet_hook runs before the append \
(aborting on failure) and post_tweet_hook after — useful to pull/push the \
file from a web server.",
        after_help = "Examples:\n  \
twtr tweet \"Hello, twtxt world!\"\n  \
twtr tweet \"Multi\nline posts are escaped\""
    )]
    Tweet {
        /// Text of the post
        text: String,
    },

    /// Retrieve your personal timeline
    #[command(
        long_about = "Show the merged timeline of your own feed and everyone you follow.\n\n\
Remote feeds are fetched over HTTP(S) honoring the configured timeout; \
unreachable or corrupt feeds are skipped with a warning. The limit_timeline \
most recent posts are shown, ordered per the sorting option, with relative \
or absolute timestamps per use_abs_time.",
        after_help = "Examples:\n  \
twtr timeline                   Show the newest posts first (default)\n  \
twtr config set sorting ascending && twtr timeline\n  \
twtr config set porcelain true && twtr timeline   Machine-readable output"
    )]
    Timeline,

    /// View a source that you follow
    #[command(
        long_about = "Show the posts of a single feed.\n\n\
The argument is either a nickname from your followings or an ad-hoc feed \
URL or local path. Posts are limited, sorted and rendered like the \
timeline; unlike the timeline, an unreachable or corrupt feed is an error.",
        after_help = "Examples:\n  \
twtr view alice                 View a followed source by nickname\n  \
twtr view https://example.org/bob.txt   View a feed you don't follow"
    )]
    View {
        /// Nickname or feed URL (or local path) of the source
        source: String,
    },

    /// Add a new source to your followings
    #[command(after_help = "Examples:\n  \
twtr follow bob https://example.org/bob.txt\n  \
twtr follow bob https://example.org/new-bob.txt --replace")]
    Follow {
        /// Nickname for the source
        nick: String,

        /// Feed URL (or local path) of the source
        url: String,

        /// Replace the URL if the nickname is already followed
        #[arg(long)]
        replace: bool,
    },

    /// Remove an existing source from your followings
    Unfollow {
        /// Nickname of the source
        nick: String,
    },

    /// Return the list of sources you're following
    Following,

    /// Show or modify the configuration
    #[command(after_help = "Examples:\n  \
twtr config                     Show the resolved configuration\n  \
twtr config get nick            Print a single option\n  \
twtr config set nick buckket    Update an option\n  \
twtr config path                Print the config file location")]
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the value of a single option
    Get {
        /// Option key, e.g. `nick` or `limit_timeline`
        key: String,
    },

    /// Set a single option and save the config
    Set {
        /// Option key, e.g. `nick` or `limit_timeline`
        key: String,

        /// New value
        value: String,
    },

    /// Print the config file location
    Path,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let override_path = cli.config.as_deref();

    match cli.command {
        Commands::Quickstart { force } => {
            let path = commands::resolve_config_path(override_path)?;
            commands::quickstart(&path, force)
        }

        Commands::Tweet { text } => {
            let (config, _) = commands::load_config(override_path)?;
            commands::tweet(&config, &text)
        }

        Commands::Timeline => {
            let (config, _) = commands::load_config(override_path)?;
            commands::timeline(&config)
        }

        Commands::View { source } => {
            let (config, _) = commands::load_config(override_path)?;
            commands::view(&config, &source)
        }

        Commands::Follow {
            nick,
            url,
            replace,
        } => {
            let (mut config, path) = commands::load_config(override_path)?;
            commands::follow(&mut config, &path, &nick, &url, replace)
        }

        Commands::Unfollow { nick } => {
            let (mut config, path) = commands::load_config(override_path)?;
            commands::unfollow(&mut config, &path, &nick)
        }

        Commands::Following => {
            let (config, _) = commands::load_config(override_path)?;
            commands::following(&config)
        }

        Commands::Config { action } => match action {
            None => {
                let (config, _) = commands::load_config(override_path)?;
                commands::show_config(&config)
            }
            Some(ConfigAction::Get { key }) => {
                let (config, _) = commands::load_config(override_path)?;
                commands::config_get(&config, &key)
            }
            Some(ConfigAction::Set { key, value }) => {
                let (mut config, path) = commands::load_config(override_path)?;
                commands::config_set(&mut config, &path, &key, &value)
            }
            Some(ConfigAction::Path) => {
                let path = commands::resolve_config_path(override_path)?;
                commands::config_path(&path)
            }
        },
    }
}

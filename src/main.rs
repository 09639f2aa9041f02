use std::io::Write;

use anyhow::Result;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mkver::cli::{self, RunArgs};
use mkver::domain::{ConfigOverrides, Profile};
use mkver::environment::ProcessEnvironment;
use mkver::git::{CommandRepository, Git2Repository, ProcessRunner, Repository};
use mkver::ui;

#[derive(clap::Parser)]
#[command(
    name = "mkver",
    version,
    about = "Calculates application version by enriching the original one with various information"
)]
struct Args {
    #[arg(
        long,
        visible_alias = "auto-pilot",
        value_name = "PROFILE",
        help = "Use a pre-defined configuration: app (or default), docker, gradle, npm, helm"
    )]
    profile: Option<Profile>,

    #[arg(long, value_name = "NAME", help = "Resolve version from env variable")]
    env: Option<String>,

    #[arg(long, value_name = "PATH", help = "Resolve version from gradle properties file")]
    gradle: Option<String>,

    #[arg(
        long,
        num_args = 0..=1,
        default_missing_value = "true",
        value_name = "BOOL",
        help = "Include git sha into the version"
    )]
    git_sha: Option<bool>,

    #[arg(
        long,
        num_args = 0..=1,
        default_missing_value = "true",
        value_name = "BOOL",
        help = "Include git ref into the version"
    )]
    git_ref: Option<bool>,

    #[arg(long, value_name = "REGEX", help = "Ignore branches for git-ref (repeatable)")]
    git_ref_ignore: Vec<String>,

    #[arg(
        long,
        num_args = 0..=1,
        default_missing_value = "rc.",
        value_name = "TAG",
        help = "Include build number into the version, prefixed with TAG (empty disables)"
    )]
    git_build_num: Option<String>,

    #[arg(
        long,
        value_name = "REGEX",
        help = "Only add the build number on matching branches (repeatable)"
    )]
    git_build_num_branch: Vec<String>,

    #[arg(
        long,
        num_args = 0..=1,
        default_missing_value = "true",
        value_name = "BOOL",
        help = "Keep everything after the first '-' as the qualifier"
    )]
    full_qualifier: Option<bool>,

    #[arg(long, help = "Resolve branch and sha with libgit2 instead of the git executable")]
    libgit2: bool,

    #[arg(
        long,
        value_name = "TEXT",
        help = "Render a template with {{.Origin}}, {{.GitBranch}} and {{.GitSha}} instead"
    )]
    template: Option<String>,

    #[arg(short, long, value_name = "PATH", help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Do not read any mkver.toml")]
    no_config: bool,

    #[arg(short, long, help = "Log resolution details to stderr")]
    verbose: bool,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        let list = |values: &Vec<String>| (!values.is_empty()).then(|| values.clone());

        ConfigOverrides {
            profile: self.profile,
            env: self.env.clone(),
            gradle_file: self.gradle.clone(),
            include_sha: self.git_sha,
            include_branch_ref: self.git_ref,
            branch_ref_ignore: list(&self.git_ref_ignore),
            build_num_tag: self.git_build_num.clone(),
            build_num_branch_allow: list(&self.git_build_num_branch),
            full_qualifier: self.full_qualifier,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "mkver=debug" } else { "mkver=warn" };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("MKVER_LOG").unwrap_or_else(|_| default_filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false),
        )
        .init();
}

fn open_repository(args: &Args, working_dir: &std::path::Path) -> Box<dyn Repository> {
    if args.libgit2 {
        match Git2Repository::open(working_dir) {
            Ok(repo) => return Box::new(repo),
            Err(e) => warn!("Cannot open repository with libgit2, using git instead: {}", e),
        }
    }
    Box::new(CommandRepository::new(ProcessRunner))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let working_dir = std::env::current_dir()?;
    let repo = open_repository(&args, &working_dir);

    let run_args = RunArgs {
        config_path: args.config.clone(),
        no_config: args.no_config,
        overrides: args.overrides(),
        template: args.template.clone(),
        working_dir,
    };

    let outcome = match cli::run(&run_args, &ProcessEnvironment, repo.as_ref()) {
        Ok(outcome) => outcome,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    for warning in &outcome.warnings {
        warn!("{}", warning);
    }

    let mut stdout = std::io::stdout();
    write!(stdout, "{}", outcome.version)?;
    stdout.flush()?;

    Ok(())
}

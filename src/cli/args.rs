use clap::Parser;

/// There are no flags and no subcommands: invoking the binary performs
/// the full generate cycle. Clap still provides `--help` and `--version`.
#[derive(Parser)]
#[command(name = "accomplish")]
#[command(about = "Render a plain-text task list into a static HTML page")]
#[command(long_about = "accomplish - As minimal a task list as possible

Reads the 'tasks' file in the current directory, classifies each
blank-line-separated block by its leading priority marker, and writes
index.html and style.css into a fresh public/ directory.

TASK FILE FORMAT:

  ! Superduper important task
    due in the morning.

  ? Not sure if I want to do this.

  * This has to be done, eventually.

Markers: ! important, * normal, ? optional. Task text may contain
markdown; blocks without a recognized marker are skipped. Point a web
server at public/ to publish the list.")]
#[command(version)]
pub struct Cli {}

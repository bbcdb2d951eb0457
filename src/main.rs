use docopt::Docopt;
use itertools::Itertools;
use maze_model::{
    cells::Cell,
    roles::Role,
    units::{CellIndex, ColumnIndex, RowIndex},
    walls::WallFlags,
};
use serde_derive::Deserialize;
use std::{
    convert::TryFrom,
    env,
    io,
    io::prelude::*,
    process,
};
use tracing::{info, info_span, warn, Level, Subscriber};
use tracing_subscriber::util::SubscriberInitExt;

const USAGE: &str = "Maze model

Usage:
    maze_model_driver -h | --help
    maze_model_driver walls <walls>
    maze_model_driver cell <index> <row> <column> [--walls=<walls>] [--role=<role>]
    maze_model_driver table
    maze_model_driver roles

Options:
    -h --help          Show this screen.
    --walls=<walls>    Walls around the cell as |-separated names, e.g. TOP|LEFT [default: EMPTY].
    --role=<role>      One of NONE, ENEMY, ENTRANCE, EXIT, EXTERIOR, REWARD or WALL [default: NONE].
";
#[derive(Debug, Deserialize)]
struct ModelArgs {
    cmd_walls: bool,
    cmd_cell: bool,
    cmd_table: bool,
    cmd_roles: bool,
    arg_walls: String,
    arg_index: Option<usize>,
    arg_row: Option<usize>,
    arg_column: Option<usize>,
    flag_walls: String,
    flag_role: String,
}

mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Model(::maze_model::errors::Error, ::maze_model::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() {

    log_subscriber().init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(ref e) = run(env::args(), &mut out) {
        // Usage errors, --help included, print the usage text and pick their own exit code.
        if let ErrorKind::DocOptFailure(ref usage_error) = *e.kind() {
            usage_error.exit();
        }
        if let Some(message) = failure_message(e) {
            eprintln!("error: {}", message);
            process::exit(1);
        }
    }
}

fn log_subscriber() -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(io::stderr)
        .finish()
}

/// One line naming the error and its causes. `None` when stdout was closed under us
/// (e.g. piped into `head`), which is not worth reporting.
fn failure_message(e: &Error) -> Option<String> {
    match *e.kind() {
        ErrorKind::Io(ref io_error) if io_error.kind() == io::ErrorKind::BrokenPipe => None,
        _ => Some(e.iter().map(|cause| cause.to_string()).join(": ")),
    }
}

fn run<I, S, W>(argv: I, out: &mut W) -> Result<()>
    where I: IntoIterator<Item = S>,
          S: AsRef<str>,
          W: Write
{
    let args: ModelArgs = Docopt::new(USAGE).and_then(|d| d.argv(argv).deserialize())?;

    let span = info_span!("maze_model_driver");
    let _guard = span.enter();
    info!(?args, "parsed arguments");

    if args.cmd_walls {
        let walls: WallFlags = args.arg_walls.parse()?;
        write_walls(out, walls)?;
    } else if args.cmd_cell {
        let cell = build_cell(&args)?;
        if cell.role() == Role::Wall && cell.walls().is_empty() {
            warn!(cell = %cell, "cell labelled WALL has no walls set");
        }
        writeln!(out, "{}", cell)?;
        write_walls(out, cell.walls())?;
    } else if args.cmd_table {
        write_table(out)?;
    } else if args.cmd_roles {
        for role in Role::ALL.iter() {
            writeln!(out, "{} {}", role.value(), role)?;
        }
    }

    Ok(())
}

fn build_cell(args: &ModelArgs) -> Result<Cell> {
    let index = args.arg_index.ok_or("missing <index>")?;
    let row = args.arg_row.ok_or("missing <row>")?;
    let column = args.arg_column.ok_or("missing <column>")?;
    let walls: WallFlags = args.flag_walls
        .parse()
        .chain_err(|| format!("Bad --walls value {}", args.flag_walls))?;
    let role: Role = args.flag_role
        .parse()
        .chain_err(|| format!("Bad --role value {}", args.flag_role))?;

    Ok(Cell::with_role(CellIndex(index), RowIndex(row), ColumnIndex(column), walls, role))
}

fn write_walls<W: Write>(out: &mut W, walls: WallFlags) -> Result<()> {
    writeln!(out, "walls: {} ({:#06b})", walls, walls.bits())?;
    writeln!(out, "openings: {}", walls.openings())?;
    writeln!(out,
             "corner: {}, dead end: {}, intersection: {}",
             walls.corner(),
             walls.dead_end(),
             walls.intersection())?;
    Ok(())
}

fn write_table<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{:>4}  {:<28} {:<7} {:<9} {}", "bits", "walls", "corner", "dead end", "intersection")?;
    for bits in 0..16u8 {
        let walls = WallFlags::try_from(bits)?;
        writeln!(out,
                 "{:>4}  {:<28} {:<7} {:<9} {}",
                 bits,
                 walls,
                 walls.corner(),
                 walls.dead_end(),
                 walls.intersection())?;
    }
    Ok(())
}

//! sqlcanon CLI
//!
//! Command-line tool for formatting and inspecting SQL.

use std::collections::BTreeSet;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use sqlcanon_core::ast::{SelectClause, Table};
use sqlcanon_core::{
    parse_expression, parse_file, parse_statement, AstListener, AstWalker, Dialect, Expression,
    File, SqlPrinter, Statement,
};

/// Dialect-aware SQL formatter.
#[derive(Parser)]
#[command(name = "sqlcanon")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Built-in dialect name (default, ansi, hive, mysql).
    #[arg(short, long, env = "SQLCANON_DIALECT")]
    dialect: Option<String>,

    /// JSON file describing the meaning of each quote character.
    #[arg(long)]
    dialect_config: Option<PathBuf>,

    /// Fail on the first syntax error instead of recovering.
    #[arg(short, long)]
    strict: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the input as canonical SQL.
    Format(Input),

    /// Verify that formatting the input is stable.
    Check(Input),

    /// Print the parsed AST as JSON.
    Ast(Input),

    /// List the tables the input reads from.
    Tables(Input),
}

#[derive(clap::Args)]
struct Input {
    /// What the input contains.
    #[arg(short, long, value_enum, default_value_t = Mode::File)]
    mode: Mode,

    /// Input file (stdin if not specified or `-`).
    path: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    File,
    Statement,
    Expression,
}

/// The result of parsing in one of the three modes.
enum Parsed {
    File(File),
    Statement(Statement),
    Expression(Expression),
}

impl Parsed {
    fn parse(sql: &str, mode: Mode, strict: bool, dialect: Dialect) -> anyhow::Result<Self> {
        let parsed = match mode {
            Mode::File => Self::File(parse_file(sql, strict, dialect)?),
            Mode::Statement => Self::Statement(parse_statement(sql, strict, dialect)?),
            Mode::Expression => Self::Expression(parse_expression(sql, strict, dialect)?),
        };
        Ok(parsed)
    }

    fn to_sql(&self, dialect: Dialect) -> String {
        match self {
            Self::File(file) => SqlPrinter::with_dialect(file, dialect),
            Self::Statement(statement) => SqlPrinter::with_dialect(statement, dialect),
            Self::Expression(expression) => SqlPrinter::with_dialect(expression, dialect),
        }
    }

    fn to_json(&self) -> serde_json::Result<String> {
        match self {
            Self::File(file) => serde_json::to_string_pretty(file),
            Self::Statement(statement) => serde_json::to_string_pretty(statement),
            Self::Expression(expression) => serde_json::to_string_pretty(expression),
        }
    }

    fn walk(&self, listener: &mut dyn AstListener) {
        let mut walker = AstWalker::new(listener);
        match self {
            Self::File(file) => walker.walk_file(file),
            Self::Statement(statement) => walker.walk_statement(statement),
            Self::Expression(expression) => walker.walk_expression(expression),
        }
    }
}

impl PartialEq for Parsed {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::File(a), Self::File(b)) => a == b,
            (Self::Statement(a), Self::Statement(b)) => a == b,
            (Self::Expression(a), Self::Expression(b)) => a == b,
            _ => false,
        }
    }
}

/// Collects referenced tables, leaving out names bound by `WITH`.
#[derive(Default)]
struct TableCollector {
    tables: BTreeSet<String>,
    ctes: BTreeSet<String>,
}

impl AstListener for TableCollector {
    fn enter_select_clause(&mut self, node: &SelectClause) {
        self.ctes
            .extend(node.ctes.iter().filter_map(|cte| cte.alias.clone()));
    }

    fn enter_table(&mut self, node: &Table) {
        self.tables.insert(SqlPrinter::from(&node.identifier));
    }
}

impl TableCollector {
    fn into_tables(self) -> Vec<String> {
        let Self { tables, ctes } = self;
        tables
            .into_iter()
            .filter(|table| !ctes.contains(table))
            .collect()
    }
}

fn resolve_dialect(cli: &Cli) -> anyhow::Result<Dialect> {
    if let Some(path) = &cli.dialect_config {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading dialect config {}", path.display()))?;
        let dialect = serde_json::from_str(&text)
            .with_context(|| format!("parsing dialect config {}", path.display()))?;
        return Ok(dialect);
    }
    match &cli.dialect {
        None => Ok(Dialect::DEFAULT),
        Some(name) => Dialect::preset(name).with_context(|| {
            let known: Vec<_> = Dialect::preset_names().collect();
            format!("unknown dialect '{name}' (expected one of: {})", known.join(", "))
        }),
    }
}

/// Prints `parsed`, parses the output again and prints that, failing unless
/// both the tree and the text come back unchanged.
fn check_stable(parsed: &Parsed, mode: Mode, dialect: Dialect) -> anyhow::Result<()> {
    let printed = parsed.to_sql(dialect);
    let second = Parsed::parse(&printed, mode, true, dialect)
        .context("formatted output does not parse")?;
    if *parsed != second {
        bail!("formatted output parses to a different tree");
    }
    let reprinted = second.to_sql(dialect);
    if printed != reprinted {
        bail!("formatting is not stable:\n{printed}\n---\n{reprinted}");
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        _ => {
            let mut sql = String::new();
            std::io::stdin()
                .read_to_string(&mut sql)
                .context("reading stdin")?;
            Ok(sql)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let dialect = resolve_dialect(&cli)?;
    debug!(?dialect, "resolved dialect");

    match &cli.command {
        Commands::Format(input) => {
            let sql = read_input(input.path.as_deref())?;
            let parsed = Parsed::parse(&sql, input.mode, cli.strict, dialect)?;
            println!("{}", parsed.to_sql(dialect));
        }

        Commands::Check(input) => {
            let sql = read_input(input.path.as_deref())?;
            let first = Parsed::parse(&sql, input.mode, cli.strict, dialect)?;
            check_stable(&first, input.mode, dialect)?;
            info!("formatting is stable");
        }

        Commands::Ast(input) => {
            let sql = read_input(input.path.as_deref())?;
            let parsed = Parsed::parse(&sql, input.mode, cli.strict, dialect)?;
            println!("{}", parsed.to_json()?);
        }

        Commands::Tables(input) => {
            let sql = read_input(input.path.as_deref())?;
            let parsed = Parsed::parse(&sql, input.mode, cli.strict, dialect)?;
            let mut collector = TableCollector::default();
            parsed.walk(&mut collector);
            for table in collector.into_tables() {
                println!("{table}");
            }
        }
    }

    Ok(())
}

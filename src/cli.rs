use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::expression::Expression;
use crate::generator::constants::{DEFAULT_MAX_OPERAND, DEFAULT_MIN_OPERAND};
use crate::generator::{ExpressionGenerator, validate_count, validate_depth};
use crate::output::{
    CleanPlan, DEFAULT_OUTPUT_DIR, DEFAULT_PDF_TIMEOUT, PdfOutcome, clean, compile_pdf,
    normalize_tex_filename, numbered_filename, plan_clean, write_document,
};
use crate::tree::{DocumentSpec, render_document};

/// Files listed before asking to confirm a clean
const CLEAN_PREVIEW_LIMIT: usize = 4;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Derivata - Generate arithmetic expressions and visualize them as LaTeX trees
#[derive(Parser, Debug)]
#[command(name = "derivata")]
#[command(about = "Generate arithmetic expressions and visualize them as LaTeX trees")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: CliCommand,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate an arithmetic expression tree
    Generate(GenerateArgs),
    /// Clean the output folder
    Clean(CleanArgs),
    /// Print sample expressions without writing any files
    Demo,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Target value for the arithmetic expression
    #[arg(short, long, default_value_t = 42, allow_negative_numbers = true)]
    pub target: i64,

    /// Depth of the expression tree (number of operation levels)
    #[arg(short, long, default_value_t = 2, allow_negative_numbers = true)]
    pub depth: i64,

    /// Smallest randomly drawn operand
    #[arg(long, default_value_t = DEFAULT_MIN_OPERAND, allow_negative_numbers = true)]
    pub min_operand: i64,

    /// Largest randomly drawn operand
    #[arg(long, default_value_t = DEFAULT_MAX_OPERAND, allow_negative_numbers = true)]
    pub max_operand: i64,

    /// Number of expressions to generate
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,

    /// Seed for reproducible output
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Output filename (in the output folder)
    #[arg(short, long, default_value = "tree.tex")]
    pub output: String,

    /// Output folder
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub out_dir: PathBuf,

    /// Skip PDF compilation
    #[arg(long)]
    pub no_pdf: bool,

    /// Parenthesize every operation in printed expressions
    #[arg(long)]
    pub parens: bool,
}

#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub force: bool,

    /// Show what would be deleted without actually deleting
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Output folder
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub out_dir: PathBuf,
}

/// Validated settings for the generate command
#[derive(Debug)]
pub struct GenerateConfig {
    pub target: i64,
    pub depth: i64,
    pub count: usize,
    pub seed: Option<u64>,
    pub generator: ExpressionGenerator,
    pub output: String,
    pub out_dir: PathBuf,
    pub compile_pdf: bool,
    pub parens: bool,
}

impl TryFrom<GenerateArgs> for GenerateConfig {
    type Error = anyhow::Error;

    fn try_from(args: GenerateArgs) -> Result<Self> {
        validate_depth(args.depth).context("Invalid depth")?;
        validate_count(args.count).context("Invalid count")?;
        let generator = ExpressionGenerator::new(args.min_operand, args.max_operand)
            .context("Invalid operand range")?;
        let output = normalize_tex_filename(&args.output).context("Invalid output filename")?;

        Ok(GenerateConfig {
            target: args.target,
            depth: args.depth,
            count: args.count,
            seed: args.seed,
            generator,
            output,
            out_dir: args.out_dir,
            compile_pdf: !args.no_pdf,
            parens: args.parens,
        })
    }
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    init_logging(&args.log_level)?;

    match args.command {
        CliCommand::Generate(generate_args) => {
            run_generate(&GenerateConfig::try_from(generate_args)?)
        }
        CliCommand::Clean(clean_args) => run_clean(&clean_args),
        CliCommand::Demo => run_demo(),
    }
}

fn run_generate(config: &GenerateConfig) -> Result<()> {
    println!("Generating arithmetic expression tree:");
    println!("  Target value: {}", config.target);
    println!("  Depth: {}", config.depth);
    println!("  Output: {}", config.output);
    println!(
        "  Operands: {} to {}",
        config.generator.min_operand(),
        config.generator.max_operand()
    );
    if config.count > 1 {
        println!("  Count: {}", config.count);
    }
    println!();

    let seed = config.seed.unwrap_or_else(rand::random);
    info!("Using seed {}", seed);

    let trees = if config.count == 1 {
        let mut rng = StdRng::seed_from_u64(seed);
        vec![config.generator.generate(config.target, config.depth, &mut rng)?]
    } else {
        config
            .generator
            .generate_many_parallel(config.target, config.depth, config.count, seed)?
    };

    for (index, tree) in trees.iter().enumerate() {
        let filename = if config.count == 1 {
            config.output.clone()
        } else {
            numbered_filename(&config.output, index + 1)
        };
        emit_tree(config, tree, &filename)?;
    }

    Ok(())
}

fn emit_tree(config: &GenerateConfig, tree: &Expression, filename: &str) -> Result<()> {
    let result = tree.evaluate().context("Generated expression could not be evaluated")?;
    println!("Generated expression: {}", tree.render(config.parens));
    println!("Result: {}", result);

    let document = render_document(&DocumentSpec::for_expression(tree, config.parens));
    let path = write_document(&config.out_dir, filename, &document)?;
    print_success(&format!("LaTeX tree written to '{}'", path.display()));

    if config.compile_pdf {
        report_pdf(&path)?;
    }
    Ok(())
}

fn report_pdf(tex_path: &Path) -> Result<()> {
    match compile_pdf(tex_path, DEFAULT_PDF_TIMEOUT)? {
        PdfOutcome::Compiled(pdf) => {
            print_success(&format!("PDF compiled successfully: {}", pdf.display()));
        }
        PdfOutcome::Failed { hint } => {
            print_failure("LaTeX compilation failed. Check the log file for details.");
            if let Some(hint) = hint {
                println!("  Hint: {}", hint);
            }
        }
        PdfOutcome::NotInstalled => {
            print_failure(
                "pdflatex not found. Install with: sudo apt-get install texlive-latex-base",
            );
        }
        PdfOutcome::TimedOut => print_failure("LaTeX compilation timed out"),
    }
    Ok(())
}

fn run_clean(args: &CleanArgs) -> Result<()> {
    let dir_name = args.out_dir.display();

    let files = match plan_clean(&args.out_dir)? {
        CleanPlan::MissingDir => {
            print_success(&format!("{} folder doesn't exist - nothing to clean", dir_name));
            return Ok(());
        }
        CleanPlan::Empty => {
            print_success(&format!("{} folder is already empty", dir_name));
            return Ok(());
        }
        CleanPlan::Files(files) => files,
    };

    if !args.force {
        println!("Delete {} file(s) from {}:", files.len(), dir_name);
        for line in clean_preview(&files) {
            println!("{}", line);
        }
        if !confirm("Continue?")? {
            println!("Cancelled");
            return Ok(());
        }
    }

    if args.dry_run {
        for path in &files {
            println!("  Would delete: {}", display_name(path));
        }
    }

    let report = clean(&files, args.dry_run);
    if !report.is_success() {
        print_failure("Errors occurred:");
        for (path, err) in &report.failures {
            eprintln!("  {}: {}", display_name(path), err);
        }
        return Err(anyhow!("failed to delete {} file(s)", report.failures.len()));
    }

    if args.dry_run {
        print_success(&format!(
            "Dry run: would clean {} file(s) from {}",
            report.removed.len(),
            dir_name
        ));
    } else {
        print_success(&format!("Cleaned {} file(s) from {}", report.removed.len(), dir_name));
    }
    Ok(())
}

fn run_demo() -> Result<()> {
    let generator = ExpressionGenerator::default();
    let mut rng = rand::thread_rng();

    println!("Generating arithmetic expressions that equal 42:\n");
    for depth in 0..=3 {
        let expr = generator.generate(42, depth, &mut rng)?;
        println!("Depth {}: {} = {}", depth, expr.render(true), expr.evaluate()?);
    }

    println!("\n{}\n", "=".repeat(50));
    println!("Multiple expressions with depth 3:\n");

    let expressions = generator.generate_many(100, 3, 5, &mut rng)?;
    for (i, expr) in expressions.iter().enumerate() {
        println!("{}. {} = {}", i + 1, expr.render(false), expr.evaluate()?);
    }
    Ok(())
}

/// Numbered listing of the first few files, with a trailer for the rest
fn clean_preview(files: &[PathBuf]) -> Vec<String> {
    let mut lines: Vec<String> = files
        .iter()
        .take(CLEAN_PREVIEW_LIMIT)
        .enumerate()
        .map(|(i, path)| format!("  {}. {}", i + 1, display_name(path)))
        .collect();
    if files.len() > CLEAN_PREVIEW_LIMIT {
        lines.push(format!("  ... and {} more", files.len() - CLEAN_PREVIEW_LIMIT));
    }
    lines
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;
    debug!("Confirmation answer: {:?}", answer.trim());
    Ok(is_affirmative(&answer))
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

fn print_success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

fn print_failure(msg: &str) {
    println!("{} {}", "✗".red(), msg);
}

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use gumdrop::Options;

use wordmend::dictionary::Dictionary;
use wordmend::speller::suggestion::Correction;
use wordmend::speller::WordListSpeller;

trait OutputWriter {
    fn write_correction(&mut self, correction: Correction) -> anyhow::Result<()>;
    fn finish(&mut self) -> anyhow::Result<()>;
}

struct TsvWriter {
    writer: csv::Writer<std::fs::File>,
}

impl TsvWriter {
    fn create(path: &Path) -> anyhow::Result<TsvWriter> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .from_path(path)
            .with_context(|| format!("cannot create output file {}", path.display()))?;
        writer.write_record(["File_Error", "Corrected"])?;

        Ok(TsvWriter { writer })
    }
}

impl OutputWriter for TsvWriter {
    fn write_correction(&mut self, correction: Correction) -> anyhow::Result<()> {
        self.writer.write_record([
            correction.original.as_str(),
            correction.corrected.as_str(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

struct JsonWriter {
    results: Vec<Correction>,
}

impl JsonWriter {
    fn new() -> JsonWriter {
        JsonWriter { results: vec![] }
    }
}

impl OutputWriter for JsonWriter {
    fn write_correction(&mut self, correction: Correction) -> anyhow::Result<()> {
        self.results.push(correction);
        Ok(())
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(&self.results)?);
        Ok(())
    }
}

#[derive(Debug, Options)]
struct Args {
    #[options(help = "print help message")]
    help: bool,

    #[options(command)]
    command: Option<Command>,
}

#[derive(Debug, Options)]
enum Command {
    #[options(help = "correct a file of error tokens against a reference word list")]
    Correct(CorrectArgs),

    #[options(help = "check whether words are members of the reference word list")]
    Check(CheckArgs),
}

#[derive(Debug, Options)]
struct CorrectArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(default = "reference.txt", help = "reference word list, one word per line")]
    reference: PathBuf,

    #[options(default = "errors.txt", help = "error tokens to correct, one per line")]
    errors: PathBuf,

    #[options(default = "corrected_output.txt", help = "tab-separated output file")]
    output: PathBuf,

    #[options(no_short, long = "json", help = "print results as JSON to stdout instead")]
    use_json: bool,
}

#[derive(Debug, Options)]
struct CheckArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(default = "reference.txt", help = "reference word list, one word per line")]
    reference: PathBuf,

    #[options(free, help = "words to be checked")]
    inputs: Vec<String>,
}

fn read_lines(path: &Path) -> anyhow::Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    Ok(text.lines().map(|x| x.trim().to_string()).collect())
}

fn correct(args: CorrectArgs) -> anyhow::Result<()> {
    let dictionary = Dictionary::open(&args.reference)?;
    let speller = WordListSpeller::new(dictionary);
    let errors = read_lines(&args.errors)?;

    // All corrections are computed before the sink is opened, so a
    // resource-access failure never leaves partial output behind.
    let corrections: Vec<Correction> = errors.iter().map(|word| speller.correct(word)).collect();

    let mut writer: Box<dyn OutputWriter> = if args.use_json {
        Box::new(JsonWriter::new())
    } else {
        Box::new(TsvWriter::create(&args.output)?)
    };

    for correction in corrections {
        writer.write_correction(correction)?;
    }
    writer.finish()?;

    if !args.use_json {
        println!("Correction complete. Output saved to {}", args.output.display());
    }

    Ok(())
}

fn check(args: CheckArgs) -> anyhow::Result<()> {
    let dictionary = Dictionary::open(&args.reference)?;
    let speller = WordListSpeller::new(dictionary);

    let words: Vec<String> = if args.inputs.is_empty() {
        eprintln!("Reading from stdin...");
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("reading stdin")?;
        buffer
            .trim()
            .split('\n')
            .map(|x| x.trim().to_string())
            .collect()
    } else {
        args.inputs
    };

    for word in words {
        println!(
            "Input: {}\t\t[{}]",
            &word,
            if speller.is_correct(&word) {
                "CORRECT"
            } else {
                "INCORRECT"
            }
        );
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let args = Args::parse_args_default_or_exit();

    match args.command {
        None => Ok(()),
        Some(Command::Correct(args)) => correct(args),
        Some(Command::Check(args)) => check(args),
    }
}

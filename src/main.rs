//! pyskel's main application entry point.
//! Parses the command line, sets up logging and runs the scaffolder in the
//! current directory.

use pyskel::{
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    logger::init_logger,
    options::Options,
    prompt::{DialoguerPrompter, PresetPrompter, Prompter},
    scaffold::Scaffolder,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    let prompt: Box<dyn Prompter> = match &args.description {
        Some(description) => Box::new(PresetPrompter::new(description.as_str())),
        None => Box::new(DialoguerPrompter::new()),
    };

    let root = std::env::current_dir()?;
    let scaffolder = Scaffolder::new(root.clone(), Options::from(&args), &*prompt);
    let report = scaffolder.run()?;

    for (action, path) in &report.entries {
        let path = path.strip_prefix(&root).unwrap_or(path);
        println!("{}: '{}'", action, path.display());
    }
    println!("Project '{}' scaffolded successfully.", scaffolder.options().name);
    Ok(())
}

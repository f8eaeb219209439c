use clap::Parser;
use ollama_imagegen::{
    batch_generate_images,
    logger::{self, LogLevel, LoggerConfig},
    BatchGenerateImageConfig, GenerationOptions, ImageWriter, OllamaConfig,
};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "ollama-imagegen")]
#[command(about = "Generate images from prompts with a local Ollama server")]
struct Args {
    /// Prompts to render, in order
    #[arg(required = true)]
    prompts: Vec<String>,

    /// Images per prompt
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Ollama base URL (falls back to OLLAMA_HOST, then http://localhost:11434)
    #[arg(long)]
    host: Option<String>,

    /// Model name (falls back to OLLAMA_MODEL, then x/flux2-klein:4b)
    #[arg(short, long)]
    model: Option<String>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    #[arg(long)]
    steps: Option<u32>,

    #[arg(long)]
    seed: Option<i64>,

    #[arg(long)]
    negative_prompt: Option<String>,

    /// Where generated PNGs are written
    #[arg(short, long, default_value = "output")]
    output_dir: PathBuf,

    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn options(&self) -> Option<GenerationOptions> {
        let mut options = GenerationOptions::new();
        if let Some(width) = self.width {
            options = options.width(width);
        }
        if let Some(height) = self.height {
            options = options.height(height);
        }
        if let Some(steps) = self.steps {
            options = options.steps(steps);
        }
        if let Some(seed) = self.seed {
            options = options.seed(seed);
        }
        if let Some(negative_prompt) = &self.negative_prompt {
            options = options.negative_prompt(negative_prompt.clone());
        }

        (!options.is_empty()).then_some(options)
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let dotenv_loaded = dotenv::dotenv().is_ok();

    let level = if args.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    if let Err(e) = logger::init_with_config(LoggerConfig::new().with_level(level)) {
        eprintln!("{}", e);
    }
    if dotenv_loaded {
        log::debug!(".env file loaded");
    }

    if let Err(e) = run(args).await {
        log::error!("❌ Batch error: {}", e);
        process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let ollama = OllamaConfig {
        host: args.host.clone(),
        model: args.model.clone(),
    }
    .or(&OllamaConfig::from_env());
    ollama.validate()?;

    let mut config = BatchGenerateImageConfig::new(args.prompts.clone())
        .with_count_per_prompt(args.count)
        .with_host(ollama.resolved_host())
        .with_model(ollama.resolved_model())
        .on_progress(|completed, total| {
            log::info!("🖼️  Progress: {}/{} images generated", completed, total);
        });
    config.options = args.options();

    log::info!("🎨 Batch generating images...");
    log::info!("   Host: {}", ollama.resolved_host());
    log::info!("   Model: {}", ollama.resolved_model());
    log::info!(
        "   Prompts: {} x {} = {} images",
        config.prompts.len(),
        config.count_per_prompt,
        config.total()?
    );
    if let Some(options) = &config.options {
        log::info!("   Options: {}", serde_json::to_string(options)?);
    }

    let mut timer = logger::timer("Batch generation");
    let batch = batch_generate_images(config).await?;
    timer.stop();

    let writer = ImageWriter::new(&args.output_dir);
    for entry in &batch {
        println!("\nPrompt: \"{}\"", entry.prompt);
        for (i, result) in entry.results.iter().enumerate() {
            match writer.save(result)? {
                Some(path) => println!("  [{}] Saved to: {}", i + 1, path.display()),
                None => println!("  [{}] No image returned.", i + 1),
            }
        }
    }

    Ok(())
}

use crate::prelude::{println, *};

#[derive(Debug, clap::Args)]
pub struct RenderOptions {
    /// Path to a file with the report text; reads stdin when omitted
    pub input: Option<std::path::PathBuf>,

    /// Output path for the rendered PDF
    #[clap(short, long, default_value = "outputs/final_report.pdf")]
    pub output: std::path::PathBuf,

    /// Output result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, serde::Serialize)]
pub struct RenderOutput {
    pub path: String,
    pub bytes: u64,
}

pub async fn render(options: RenderOptions, _global: crate::Global) -> Result<()> {
    let text = match &options.input {
        Some(path) => std::fs::read_to_string(path)
            .wrap_err_with(|| f!("failed to read {}", path.display()))?,
        None => {
            use std::io::Read;
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    // pdf rendering is synchronous
    let saved = tokio::task::spawn_blocking({
        let output = options.output.clone();
        move || pdf::render_report(&text, &output)
    })
    .await??;

    let bytes = std::fs::metadata(&saved)?.len();

    if options.json {
        let output = RenderOutput {
            path: saved.display().to_string(),
            bytes,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Saved PDF to: {} ({} bytes)", saved.display(), bytes);
    }

    Ok(())
}

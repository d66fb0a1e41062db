use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use indicatif::ProgressBar;
use reportforge_core::crew;
use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers::openai;

use crate::mail::{self, SmtpConfig};
use crate::search::{BraveSearch, SearchConfig, WebSearchTool};

mod render;

#[derive(Debug, clap::Parser)]
#[command(name = "report")]
#[command(about = "Generate and deliver research reports")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Run the research crew and save the report as a PDF
    #[clap(name = "run")]
    Run(RunOptions),

    /// Render existing report text into a paginated PDF
    #[clap(name = "render")]
    Render(render::RenderOptions),
}

#[derive(Debug, clap::Parser)]
pub struct RunOptions {
    /// Topic to research
    #[clap(default_value = "NYC Real Estate Market")]
    pub topic: String,

    /// Output path for the rendered PDF
    #[clap(short, long, default_value = "outputs/final_report.pdf")]
    pub output: std::path::PathBuf,

    /// OpenAI API key
    #[clap(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: String,

    /// Model used by the crew agents
    #[clap(long, env = "REPORTFORGE_MODEL", default_value = "gpt-4o-mini")]
    pub model: String,

    /// Brave Search API key; the researcher runs without web search when absent
    #[clap(long, env = "BRAVE_API_KEY", hide_env_values = true)]
    pub brave_api_key: Option<String>,

    /// Email the finished report to this address
    #[clap(long, env = "RECEIVER_EMAIL")]
    pub email_to: Option<String>,

    /// SMTP server host
    #[clap(long, env = "SMTP_SERVER", default_value = "smtp.gmail.com")]
    pub smtp_server: String,

    /// SMTP server port
    #[clap(long, env = "SMTP_PORT", default_value = "587")]
    pub smtp_port: u16,

    /// Sender email address
    #[clap(long, env = "SENDER_EMAIL")]
    pub sender_email: Option<String>,

    /// Sender password or app token
    #[clap(long, env = "SENDER_PASSWORD", hide_env_values = true)]
    pub sender_password: Option<String>,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Run(options) => execute(options, global).await,
        Commands::Render(options) => render::render(options, global).await,
    }
}

async fn execute(options: RunOptions, global: crate::Global) -> Result<()> {
    let as_of = chrono::Local::now().date_naive().to_string();

    log::info!("Starting crew workflow for topic: {}", options.topic);
    let report_text = run_crew(&options, &as_of, global.verbose).await?;

    let header = crew::report_header(&options.topic, &as_of);
    let full_text = f!("{header}{report_text}");

    let saved = tokio::task::spawn_blocking({
        let output = options.output.clone();
        move || pdf::render_report(&full_text, &output)
    })
    .await??;

    println!("Saved PDF to: {}", saved.display().to_string().cyan());

    if let Some(to) = &options.email_to {
        let smtp = smtp_config(&options)?;
        let body = "Hello,\n\nPlease find attached the latest research report generated \
                    by the multi-agent workflow.\n\nBest regards,\nYour AI Assistant";
        mail::send_report(&smtp, to, "Automated Research Report", body, &saved)?;
        println!("Email with report sent successfully to {}", to.green());
    }

    Ok(())
}

/// Run the four crew tasks sequentially, each task receiving the previous
/// task's output as context. Only the researcher carries the search tool.
async fn run_crew(options: &RunOptions, as_of: &str, verbose: bool) -> Result<String> {
    let client = create_client(&options.openai_api_key)?;

    let agents = crew::agents();
    let tasks = crew::tasks();

    let mut context: Option<String> = None;

    for (index, (agent_spec, task)) in agents.iter().zip(tasks.iter()).enumerate() {
        let preamble = crew::build_preamble(agent_spec, &options.topic, as_of);
        let prompt = crew::build_task_prompt(task, &options.topic, as_of, context.as_deref());

        if verbose {
            eprintln!(
                "{} {}",
                "Running task for".green(),
                agent_spec.name.bright_white().bold()
            );
            eprintln!("Prompt length: {} chars", prompt.len());
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_message(f!("{} working...", agent_spec.name));
        spinner.enable_steady_tick(std::time::Duration::from_millis(120));

        let agent = {
            let builder = client.agent(&options.model).preamble(&preamble);
            if index == 0 {
                if let Some(api_key) = &options.brave_api_key {
                    let provider = BraveSearch::new(SearchConfig {
                        api_key: api_key.clone(),
                        count: 3,
                    });
                    builder.tool(WebSearchTool::new(provider)).build()
                } else {
                    builder.build()
                }
            } else {
                builder.build()
            }
        };

        let output = agent
            .prompt(&prompt)
            .max_turns(6)
            .await
            .map_err(|e| eyre!("Task for {} failed: {}", agent_spec.name, e));

        spinner.finish_and_clear();

        let output = output?;
        log::info!("Task {} completed ({} chars)", index + 1, output.len());
        context = Some(output);
    }

    context.ok_or_eyre("crew produced no output")
}

fn create_client(api_key: &str) -> Result<openai::Client> {
    openai::Client::builder()
        .api_key(api_key)
        .build()
        .map_err(|e| eyre!("Failed to create OpenAI client: {}", e))
}

fn smtp_config(options: &RunOptions) -> Result<SmtpConfig> {
    let sender = options
        .sender_email
        .clone()
        .ok_or_eyre("Email credentials not found. Set SENDER_EMAIL and SENDER_PASSWORD")?;
    let password = options
        .sender_password
        .clone()
        .ok_or_eyre("Email credentials not found. Set SENDER_EMAIL and SENDER_PASSWORD")?;

    Ok(SmtpConfig {
        server: options.smtp_server.clone(),
        port: options.smtp_port,
        sender,
        password,
    })
}

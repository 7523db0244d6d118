use crate::error::{CliError, Result, ResultExt};
use crate::progress::{format_duration, RequestProgress};
use crate::ui;
use safe_call::{ApiRequest, Outcome, SafeCallConfig, SafeCaller, TransportConfig};
use serde_json::Value;
use std::path::Path;
use tokio::runtime::Runtime;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ProbeArgs {
    pub path: String,
    pub method: String,
    pub data: Option<String>,
    pub headers: Vec<String>,
    pub config_path: String,
    pub base_url: Option<String>,
    pub verbose: bool,
}

/// Run one probe and return its outcome so the caller can pick an exit code
pub fn execute(args: ProbeArgs) -> Result<Outcome<Value>> {
    crate::logging::init(args.verbose);

    let rt = Runtime::new().with_context(|| "Failed to create async runtime")?;

    rt.block_on(execute_async(args))
}

async fn execute_async(args: ProbeArgs) -> Result<Outcome<Value>> {
    let config = resolve_config(&args)?;
    let request = build_request(&args.method, &args.path, args.data.as_deref(), &args.headers)?;

    if args.verbose {
        ui::field("Base URL", &config.transport.base_url);
        ui::field("Request", &format!("{} {}", request.method, request.path));
    }

    let caller = SafeCaller::from_config(&config)?;

    let progress = RequestProgress::start(&format!("{} {}", request.method, request.path));
    let result = caller.call::<Value>(&request).await;
    let elapsed = progress.finish();
    debug!(elapsed_ms = elapsed.as_millis() as u64, "probe finished");

    let outcome = result?;
    render_outcome(&outcome);
    ui::field("Elapsed", &format_duration(elapsed));

    Ok(outcome)
}

/// Load the config file, falling back to `--base-url` when there is none
fn resolve_config(args: &ProbeArgs) -> Result<SafeCallConfig> {
    let config_path = Path::new(&args.config_path);

    let mut config = if config_path.exists() {
        SafeCallConfig::load_with_validation(config_path)
            .with_context(|| format!("Failed to load {}", config_path.display()))?
    } else if let Some(base_url) = &args.base_url {
        SafeCallConfig {
            transport: TransportConfig::new(base_url.clone()),
        }
    } else {
        return Err(CliError::Other(format!(
            "Configuration file {} not found. Run `safe-call init` to create one or pass --base-url",
            config_path.display()
        )));
    };

    if let Some(base_url) = &args.base_url {
        config.transport.base_url = base_url.clone();
    }
    config.validate()?;

    Ok(config)
}

fn build_request(
    method: &str,
    path: &str,
    data: Option<&str>,
    headers: &[String],
) -> Result<ApiRequest> {
    let mut request = ApiRequest::new(method, path)?;

    if let Some(data) = data {
        let body: Value =
            serde_json::from_str(data).with_context(|| "Request body is not valid JSON")?;
        request = request.with_body(body);
    }

    for raw in headers {
        let (name, value) = parse_header(raw)?;
        request = request.with_header(name, value);
    }

    Ok(request)
}

fn parse_header(raw: &str) -> Result<(String, String)> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| CliError::Other(format!("Invalid header '{raw}'. Expected 'Name: value'")))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(CliError::Other(format!("Invalid header '{raw}'. Header name is empty")));
    }

    Ok((name.to_string(), value.trim().to_string()))
}

fn render_outcome(outcome: &Outcome<Value>) {
    match outcome {
        Outcome::Success(response) => {
            ui::success_message("Success");
            match serde_json::to_string_pretty(response) {
                Ok(json) => ui::block(&json),
                Err(err) => ui::warning_message(&format!("Could not render payload: {err}")),
            }
        }
        Outcome::Empty => {
            ui::info_message("Empty: the call succeeded but returned no content");
        }
        Outcome::Failure(failure) => {
            ui::error_message(&failure.kind.to_string());
            ui::field("Kind", failure.kind.as_str());
            if let Some(status) = failure.status_code {
                ui::field("Status", &status.to_string());
            }
            if let Some(message) = &failure.message {
                ui::field("Message", "");
                ui::block(message);
            }
            if failure.kind.is_retryable() {
                ui::warning_message("This failure may be transient; trying again later could succeed");
            }
        }
    }
}

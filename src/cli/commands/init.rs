//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "docsmith.toml")]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing docsmith configuration");
        println!();

        // Check if file already exists
        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your host and ports", self.output);
                println!("  2. Validate configuration: docsmith validate-config");
                println!("  3. Run export: docsmith export");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Docsmith Configuration File
# Swagger to HTML documentation exporter

[application]
log_level = "info"

[service]
host = "localhost"
ports = "8080;8081"

[output]
directory = "./docs"
"#
        .to_string()
    }

    /// Generate configuration with all options documented
    fn generate_config_with_examples() -> String {
        r#"# Docsmith Configuration File
# Swagger to HTML documentation exporter
#
# Values may reference environment variables as ${VAR_NAME}. Any key can also
# be overridden with DOCSMITH_<SECTION>_<KEY>, e.g. DOCSMITH_SERVICE_PORTS.

[application]
# Log level: trace, debug, info, warn, error
log_level = "info"

[service]
# Host serving every service; no scheme
host = "${DOCSMITH_HOST}"

# Ports of the services to document, separated by ';'.
# Each service must publish its Swagger 2.0 description at /v2/api-docs.
# An empty string exports nothing.
ports = "8080;8081;8082"

# Per-request timeout (1-600)
timeout_seconds = 30

# Connection timeout
connect_timeout_seconds = 10

[output]
# Directory receiving <port>.html; created when missing
directory = "./docs"

# Services exported at the same time (1-32, 1 = one after the other)
max_concurrency = 1

# Operation grouping: "tags" or "as_is"
group_by = "tags"

# Local CSS file embedded in place of the built-in stylesheet
# stylesheet = "./docs-theme.css"

[logging]
# JSON log files in addition to console output
local_enabled = false
local_path = "./logs"

# Rotation: daily, hourly, never
local_rotation = "daily"
"#
        .to_string()
    }
}

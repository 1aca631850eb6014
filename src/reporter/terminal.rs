use colored::Colorize;

use crate::config::Config;
use crate::reporter::{DiscoveryReport, Reporter};

pub struct TerminalReporter {
    verbose: bool,
}

impl TerminalReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn format_config(config: &Config) -> String {
        if config.is_empty() {
            return format!("    {}\n", "(no configuration)".dimmed());
        }

        let yaml = serde_yaml::to_string(config.raw()).unwrap_or_default();
        yaml.lines()
            .map(|line| format!("    {line}\n"))
            .collect()
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, report: &DiscoveryReport) -> String {
        let mut output = String::new();

        if report.scopes.is_empty() {
            output.push_str(&format!("No scopes found under {}\n", report.root.bold()));
        } else {
            output.push_str(&format!(
                "Found {} scope(s) under {}\n",
                report.scopes.len().to_string().bold(),
                report.root.bold()
            ));
            for entry in &report.scopes {
                output.push_str(&format!("  {}\n", entry.path.green()));
                if self.verbose {
                    output.push_str(&Self::format_config(&entry.config));
                }
            }
        }

        for message in &report.errors {
            output.push_str(&format!("  {} {}\n", "[ERROR]".red().bold(), message));
        }

        output
    }
}

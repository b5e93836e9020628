//! List available project templates

use console::style;

use playkit_cli_lib::{PlaykitConfig, TemplateName};

/// Print every registered template with its description
pub struct TemplatesCommand;

impl TemplatesCommand {
    /// Execute the command
    pub fn execute(config: &PlaykitConfig) {
        println!("{}", style("Available templates:").bold());
        println!();
        for template in TemplateName::ALL {
            let marker = if Self::is_default(template, config) {
                style(" (default)").dim().to_string()
            } else {
                String::new()
            };
            println!(
                "  {:<8} {}{}",
                style(template.as_str()).cyan().bold(),
                template.description(),
                marker
            );
        }
    }

    /// Whether `init` picks `template` when `--template` is omitted
    fn is_default(template: TemplateName, config: &PlaykitConfig) -> bool {
        template == config.project.default_template
    }
}

//! Application entry point and dispatch.

use anyhow::Result;

use mulbench_cli::presenter::CLIResultPresenter;
use mulbench_cli::{suite_bar, ui};
use mulbench_core::DefaultFactory;
use mulbench_harness::selection::multipliers_to_run;
use mulbench_harness::suite::{run_decimal_suite, run_matrix_suite};
use mulbench_harness::{compare, HarnessError, SuiteReport};

use crate::config::AppConfig;
use crate::version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        mulbench_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let run_matrix = matches!(config.suite.as_str(), "matrix" | "all");
    let run_decimal = matches!(config.suite.as_str(), "decimal" | "all");
    if !run_matrix && !run_decimal {
        return Err(HarnessError::Config(format!("unknown suite: {}", config.suite)).into());
    }

    let suite_config = config.suite_config();
    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    let mut report = SuiteReport::new(suite_config.seed);

    if !config.quiet {
        ui::print_header(&format!("mulbench {}", version::version()));
    }

    if run_matrix {
        let factory = DefaultFactory::new();
        let multipliers = multipliers_to_run(&config.kernel, &factory)?;
        let total = (suite_config.matrix_sizes.len() * multipliers.len()) as u64;
        let bar = suite_bar(total, config.quiet);
        let measurements = run_matrix_suite(&suite_config, &multipliers, |p| {
            bar.set_message(p.label.clone());
            bar.set_position(p.current as u64);
        })?;
        bar.finish_and_clear();
        presenter.present_measurements("Matrix suite", &measurements);
        report.measurements.extend(measurements);
    }

    if run_decimal {
        let total = suite_config.digit_lens.len() as u64;
        let bar = suite_bar(total, config.quiet);
        let measurements = run_decimal_suite(&suite_config, |p| {
            bar.set_message(p.label.clone());
            bar.set_position(p.current as u64);
        })?;
        bar.finish_and_clear();
        presenter.present_measurements("Decimal suite", &measurements);
        report.measurements.extend(measurements);
    }

    if suite_config.verify && !config.quiet {
        ui::print_success("all results cross-validated");
    }

    if let Some(path) = &config.json {
        report.save_to_path(path)?;
        tracing::info!(path = %path.display(), "report saved");
    }

    if let Some(path) = &config.baseline {
        let baseline = SuiteReport::load_from_path(path)?;
        let comparisons = compare(&report, &baseline);
        presenter.present_comparisons(&comparisons);
    }

    Ok(())
}

use crate::cli::{Cli, Step};
use anyhow::Context;
use chronograph::{Chronograph, ChronographOptions};
use std::process::Command;
use tracing::{debug, error, warn};

/// Exit code recorded for a step whose shell could not be started.
pub const SPAWN_FAILED: i32 = 127;

/// Result of running every step.
#[derive(Debug)]
pub struct Run {
    pub chronograph: Chronograph,
    pub exit_code: i32,
}

/// Runs the steps in order, one split each. The last split is closed even
/// when a step fails and the run stops early.
///
/// Chronograph messages go to the process subscriber, so stdout only ever
/// carries the report or the JSON dump.
pub fn execute(cli: &Cli) -> anyhow::Result<Run> {
    let logger = tracing::dispatcher::get_default(Clone::clone);
    let options = ChronographOptions::new(cli.name.as_str())
        .with_verbosity(cli.verbosity)
        .with_throw_exceptions(true)
        .with_logger(logger);
    let mut chronograph = Chronograph::with_options(options);
    let mut exit_code = 0;

    let Some(first) = cli.steps.first() else {
        return Ok(Run {
            chronograph,
            exit_code,
        });
    };

    {
        let mut scope = chronograph.scope(Some(first.label.as_str()))?;

        for (index, step) in cli.steps.iter().enumerate() {
            if index > 0 {
                scope.split(Some(step.label.as_str()))?;
            }

            let code = match run_step(&cli.shell, step) {
                Ok(code) => code,
                Err(err) => {
                    error!("{:?}", err);
                    SPAWN_FAILED
                }
            };
            if code != 0 {
                warn!("Step {} exited with code {}", step.label, code);
                exit_code = code;
                if !cli.keep_going {
                    break;
                }
            }
        }
    }

    Ok(Run {
        chronograph,
        exit_code,
    })
}

fn run_step(shell: &str, step: &Step) -> anyhow::Result<i32> {
    debug!("Running step {}: {}", step.label, step.command);

    let status = Command::new(shell)
        .arg("-c")
        .arg(&step.command)
        .status()
        .with_context(|| format!("Failed to run step {}", step.label))?;

    Ok(status.code().unwrap_or(1))
}

/// Text written to stdout once the run is over: the report, or the timing
/// data as JSON.
pub fn render(run: &Run, json: bool) -> anyhow::Result<String> {
    if json {
        Ok(run.chronograph.timing_data().to_json_pretty()?)
    } else {
        Ok(run.chronograph.report(false))
    }
}

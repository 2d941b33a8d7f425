// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use anyhow::Result;
use poolcms_cli::{run, Cli, Parser};
use tracing::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = cli.settings()?;

    // Console logs go to stderr so report output stays clean
    cli.logging.clone().init_with_defaults(
        "poolcms-cli",
        settings.log_level(),
        settings.log_format(),
    )?;
    debug!(?settings, "Resolved configuration");

    let mut stdout = std::io::stdout().lock();
    run(&cli.command, &settings, &mut stdout)
}

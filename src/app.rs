use anyhow::Result;

use crate::{
    cli::{Cli, Command},
    domain, infra, ui,
    usecases::{
        self, bootstrap,
        diff_snapshots::{check_snapshot, diff_snapshots, DiffRequest},
    },
};

pub fn run(cli: Cli) -> Result<()> {
    let context = bootstrap::bootstrap(cli.config.as_deref())?;

    tracing::debug!(
        ui = ui::module_name(),
        domain = domain::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );

    for line in execute(&context, &cli.command)? {
        println!("{line}");
    }

    Ok(())
}

fn execute(context: &usecases::context::AppContext, command: &Command) -> Result<Vec<String>> {
    let source = bootstrap::compose_snapshot_source(context);

    let lines = match command {
        Command::Diff { old, new, verify } => {
            let output = diff_snapshots(
                &source,
                DiffRequest {
                    old,
                    new,
                    verify: *verify,
                },
            )?;
            ui::report::render_diff_report(output)
        }
        Command::Check { snapshot } => {
            let entries = check_snapshot(&source, snapshot)?;
            vec![format!("{}: {entries} entries, ids unique", snapshot.display())]
        }
    };

    Ok(lines)
}

use anyhow::Context;
use coachboard::command;
use coachboard::core::cli::CliArgs;
use coachboard::core::context::AppContext;
use coachboard::logging::LogTarget;

fn main() {
    if let Err(err) = try_main() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let cli = CliArgs::from_env()?;
    let mut ctx = AppContext::new_with_paths(cli.config_path.clone(), cli.logs_dir.clone())
        .with_context(|| format!("Failed to start with '{}'", cli.config_path.display()))?;

    let mut stdout = std::io::stdout().lock();
    if let Err(err) = command::run(&mut ctx, &cli, &mut stdout) {
        ctx.logger
            .error(format!("{} failed: {err}", cli.command), LogTarget::FileOnly);
        return Err(err.into());
    }
    Ok(())
}

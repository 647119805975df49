use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    flagset_demos::init_tracing();
    let config = flagset_demos::load_config(flagset_demos::CONFIG_FILE)?;
    let mut cli = flagset_demos::echo::app()?.with_config(config);
    cli.run_env()
}

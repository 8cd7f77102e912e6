use anyhow::Result;
use std::io::Write;

mod features;
mod shared;

use features::reminder::Reminder;
use shared::Config;

fn main() -> Result<()> {
    // stderr only, stdout is reserved for the JSON result
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("REMINDER_LOG", "warn")).init();

    let config = Config::load();

    let today = config.today();
    log::debug!("Scanning {} for {today}", config.root.display());

    let result = Reminder::new(&config)?.compose(today);
    if !result.should_send() {
        log::info!("Nothing due and not Friday, skipping email");
    }

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer(&mut stdout, &result)?;
    writeln!(stdout)?;

    Ok(())
}

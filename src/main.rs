use spotreader::app::Controller;
use spotreader::engine::config::WindowConfig;
use spotreader::input::{open_source, parse_args, Launch, USAGE};
use spotreader::logging::init_tracing;
use spotreader::ui::TuiManager;
use tracing::{error, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let options = match parse_args(std::env::args().skip(1)) {
        Ok(Launch::Run(options)) => options,
        Ok(Launch::Help) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Err(err) => {
            eprintln!("{}\n\n{}", err, USAGE);
            std::process::exit(2);
        }
    };

    let log_path = init_tracing();
    info!(source = ?options.source, log = ?log_path, "Starting spotreader");

    // Build everything that can fail on bad input before touching the terminal.
    let source = open_source(&options.source).inspect_err(|err| error!("{err}"))?;
    let mut controller = Controller::new(source, &options.reader)?;

    let mut tui = TuiManager::new(WindowConfig::default())?;
    let result = tui.run_event_loop(&mut controller);
    drop(tui);

    result?;
    info!("Exited cleanly");
    Ok(())
}

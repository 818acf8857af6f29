use escape_time_explorer::{CliRenderController, PpmFilePresenter, RenderConfig, render_app};
use log::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = render_app().get_matches();
    let config = RenderConfig::from_matches(&matches)?;

    let mut controller = CliRenderController::new(PpmFilePresenter::new());
    controller.generate(config.settings)?;
    controller.write(&config.output)?;

    info!("done");
    Ok(())
}

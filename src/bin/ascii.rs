use escape_time_explorer::{ascii_app, ascii_frame_from_matches};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = ascii_app().get_matches();
    let frame = ascii_frame_from_matches(&matches)?;

    println!("{}", frame.render());

    Ok(())
}

mod icon_paths;
mod padder;

use icon_paths::IconPaths;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let paths = IconPaths::default();

    // Every failure ends up here as one message; nothing is propagated further
    match padder::create_padded_icon(&paths.input, &paths.output) {
        Ok(icon) => {
            log::debug!(
                "Padded {}x{} logo onto {}x{} canvas at ({}, {})",
                icon.source_width,
                icon.source_height,
                icon.canvas_side,
                icon.canvas_side,
                icon.offset.0,
                icon.offset.1
            );
            println!("Created smaller logo at: {}", icon.output_path.display());
        }
        Err(e) => log::error!("Error: {}", e),
    }
}

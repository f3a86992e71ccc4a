mod app;
mod collection;
mod config;
mod export;
mod icons;
mod platform;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use iced::{Size, window};
use image::ImageFormat;

use crate::app::App;
use crate::config::Config;

/// Desktop viewer for Postman collection documentation.
#[derive(Parser, Debug)]
#[command(name = "vellum", version, about = "Browse Postman collections as API documentation")]
struct Args {
    /// Postman collection JSON (v2.x) to document. Falls back to the
    /// configured default, then to the bundled sample.
    collection: Option<PathBuf>,

    /// Environment file whose values fill {{placeholder}} variables.
    #[arg(short, long)]
    environment: Option<PathBuf>,
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();
    let config = Config::load();
    let collection = args.collection.or_else(|| config.default_collection.clone());
    let environment = args.environment;

    iced::application(
        move || App::new(collection.clone(), environment.clone()),
        App::update,
        App::view,
    )
    .title(App::title)
    .theme(App::theme)
    .antialiasing(true)
    .window(window::Settings {
        size: config.window_size(),
        min_size: Some(Size::new(800.0, 600.0)),
        icon: icons::window_icon_png().and_then(|bytes| {
            window::icon::from_file_data(&bytes, Some(ImageFormat::Png)).ok()
        }),
        ..window::Settings::default()
    })
    .resizable(true)
    .run()
}

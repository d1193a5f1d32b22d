use clap::Parser;
use wasm_bindgen::prelude::*;

mod board;
mod client;
mod utils;

use client::JServiceClient;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Base URL of the trivia service
    #[arg(long, default_value = JServiceClient::DEFAULT_BASE)]
    api_base: String,

    /// Upper bound for the random category offset, 0 always starts at the first category
    #[arg(long, default_value_t = JServiceClient::DEFAULT_MAX_OFFSET)]
    max_offset: u32,
}

impl Args {
    /// Parses options written into the location hash, e.g. `#-vv&--max-offset=100`.
    fn from_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::from_hash(&location_hash);
    let log_level = match &args {
        Ok(args) => args.verbose.log_level(),
        Err(_) => Some(log::Level::Warn),
    };
    if let Some(log_level) = log_level {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    let args = args.unwrap_or_else(|err| {
        log::error!("ignoring malformed options {:?}: {}", location_hash, err);
        Args::parse_from([""])
    });
    log::debug!("args: {:?}", args);

    let root = document()
        .get_element_by_id("board")
        .expect("Could not find id=\"board\" element");

    let client = JServiceClient::new(args.api_base, args.max_offset);
    log::debug!("App started");
    yew::Renderer::<board::BoardView>::with_root_and_props(root, board::BoardProps { client })
        .render();
}

use clap::Parser;
use wasm_bindgen::prelude::*;

mod api;
mod game;
mod utils;

/// Options read from the page's URL fragment, e.g. `#--seed=42&--categories=4&-vv`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    board: game::BoardProps,
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

    let args = Args::try_parse_from(location_hash.split(['#', '&'])).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("board options: {:?}", args.board);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::BoardView>::with_root_and_props(root, args.board).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(hash: &str) -> Args {
        Args::try_parse_from(hash.split(['#', '&'])).unwrap()
    }

    #[test]
    fn empty_fragment_uses_defaults() {
        let args = parse("");

        assert_eq!(args.board.seed, None);
        assert_eq!(args.board.categories, 6);
        assert_eq!(args.board.clues, 5);
        assert_eq!(args.board.api_url, "https://jservice.io");
    }

    #[test]
    fn fragment_options_override_defaults() {
        let args = parse("#--seed=42&--categories=3&--clues=2&--api-url=http://localhost:3000&-vv");

        assert_eq!(args.board.seed, Some(42));
        assert_eq!(args.board.categories, 3);
        assert_eq!(args.board.clues, 2);
        assert_eq!(args.board.api_url, "http://localhost:3000");
        assert_eq!(args.verbose.log_level(), Some(log::Level::Info));
    }
}

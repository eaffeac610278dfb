use crate::cart::CartLedger;
use crate::cli::Cli;
use crate::config::Catalog;
use crate::prelude::*;

/// Everything one run shares: the parsed arguments, the price tables and the cart.
///
/// Nothing outlives the process. The cart starts empty every time.
pub struct App {
    pub cli: Cli,
    pub catalog: Catalog,
    pub cart: CartLedger,
}

impl App {
    pub fn new(cli: Cli) -> AppResult<Self> {
        let catalog = match &cli.catalog {
            Some(path) => Catalog::from_json_file(path)?,
            None => Catalog::builtin(),
        };

        Ok(App {
            cli,
            catalog,
            cart: CartLedger::new(),
        })
    }
}

// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use spendsheet::{cli, commands, config, sheets::HttpSheets, store::ExpenseStore};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let settings = config::load()?;
    let store = ExpenseStore::new(HttpSheets::new(&settings)?);

    match matches.subcommand() {
        Some(("init", _)) => {
            store.initialize()?;
            println!("Data sheet header ready");
        }
        Some(("expense", sub)) => commands::expenses::handle(&store, sub)?,
        Some(("summary", sub)) => commands::summary::handle(&store, sub)?,
        Some(("config", sub)) => commands::config::handle(&store, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&store)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}

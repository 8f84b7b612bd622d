// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

pub fn build_cli() -> Command {
    Command::new("spendsheet")
        .version(crate_version!())
        .about("Sheet-backed expense tracking for two, with monthly summaries")
        .subcommand(Command::new("init").about("Create the Data header row if missing"))
        .subcommand(
            Command::new("expense")
                .about("Record, list and delete expenses")
                .subcommand(
                    Command::new("add")
                        .about("Record one expense")
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .required(true)
                                .help("Date, YYYY-MM-DD or YYYY/MM/DD"),
                        )
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("subcategory").long("subcategory"))
                        .arg(
                            Arg::new("project")
                                .long("project")
                                .help("Defaults to the sheet's default_project"),
                        )
                        .arg(Arg::new("method").long("method"))
                        .arg(Arg::new("label").long("label"))
                        .arg(
                            Arg::new("currency")
                                .long("currency")
                                .help("Defaults to the sheet's default_currency"),
                        )
                        .arg(Arg::new("note").long("note")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List expenses, newest first")
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        )
                        .arg(
                            Arg::new("from")
                                .long("from")
                                .requires("to")
                                .help("Range start date, inclusive"),
                        )
                        .arg(
                            Arg::new("to")
                                .long("to")
                                .requires("from")
                                .help("Range end date, inclusive"),
                        )
                        .arg(Arg::new("category").long("category")),
                ))
                .subcommand(
                    Command::new("delete")
                        .about("Delete one expense by id")
                        .arg(Arg::new("id").long("id").required(true)),
                ),
        )
        .subcommand(json_flags(
            Command::new("summary")
                .about("Monthly total, category breakdown and top expenses")
                .arg(
                    Arg::new("year")
                        .long("year")
                        .value_parser(value_parser!(i32)),
                )
                .arg(
                    Arg::new("month")
                        .long("month")
                        .value_parser(value_parser!(u32)),
                ),
        ))
        .subcommand(
            Command::new("config")
                .about("Read-only views of the Config sheet")
                .subcommand(Command::new("categories").about("Categories and subcategories"))
                .subcommand(Command::new("methods").about("Payment methods"))
                .subcommand(Command::new("projects").about("Projects"))
                .subcommand(Command::new("labels").about("Labels"))
                .subcommand(Command::new("defaults").about("Default project, currency and budget")),
        )
        .subcommand(
            Command::new("export").about("Export expenses to a file").subcommand(
                Command::new("expenses")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .default_value("csv")
                            .help("csv|json"),
                    )
                    .arg(Arg::new("out").long("out").required(true)),
            ),
        )
        .subcommand(Command::new("doctor").about("Report sheet consistency issues"))
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Explorant CLI entrypoint.
//!
//! Drives one explorer session against a running trace service and prints the result of a
//! single command. Logs go to stderr, filtered by `RUST_LOG` (default `info`).

use std::error::Error;
use std::time::Duration;

use explorant::config::ExplorerConfig;
use explorant::explorer::{Explorer, SelectOutcome};
use explorant::model::NodeId;
use explorant::remote::{HttpTransport, RetryPolicy};
use explorant::store::{EditsDocument, EditsFile, WriteDurability};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--backend <url>] [--retries <n>] [--backoff-ms <ms>] \
         [--durable-writes] <command>\n\n\
         Commands:\n  \
         graph                 print the current diagram description\n  \
         select <key>          select a diagram element (`17`, `U3`, `C5`)\n  \
         export <file>         save the raw node/module tables\n  \
         import <file>         replace the raw tables and re-mine\n  \
         instances <node-id>   list executions of a mined node\n  \
         gdb <frame-time>      start a gdb server at a frame time\n  \
         schema                print the JSON schema of the edits file\n\n\
         The backend defaults to $EXPLORANT_BACKEND, then http://127.0.0.1:8080."
    );
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Graph,
    Select(String),
    Export(String),
    Import(String),
    Instances(u64),
    Gdb(u64),
    Schema,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    backend: Option<String>,
    retries: Option<u32>,
    backoff_ms: Option<u64>,
    durable_writes: bool,
    command: Option<Command>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--backend" => {
                if options.backend.is_some() {
                    return Err(());
                }
                options.backend = Some(args.next().ok_or(())?);
            }
            "--retries" => {
                if options.retries.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.retries = Some(raw.parse().map_err(|_| ())?);
            }
            "--backoff-ms" => {
                if options.backoff_ms.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.backoff_ms = Some(raw.parse().map_err(|_| ())?);
            }
            "--durable-writes" => {
                if options.durable_writes {
                    return Err(());
                }
                options.durable_writes = true;
            }
            _ if arg.starts_with('-') && arg.len() > 1 => return Err(()),
            _ => {
                if options.command.is_some() {
                    return Err(());
                }
                let command = match arg.as_str() {
                    "graph" => Command::Graph,
                    "schema" => Command::Schema,
                    "select" => Command::Select(args.next().ok_or(())?),
                    "export" => Command::Export(args.next().ok_or(())?),
                    "import" => Command::Import(args.next().ok_or(())?),
                    "instances" => {
                        Command::Instances(args.next().ok_or(())?.parse().map_err(|_| ())?)
                    }
                    "gdb" => Command::Gdb(args.next().ok_or(())?.parse().map_err(|_| ())?),
                    _ => return Err(()),
                };
                options.command = Some(command);
            }
        }
    }

    if options.command.is_none() {
        return Err(());
    }
    Ok(options)
}

fn config_from(options: &CliOptions) -> ExplorerConfig {
    let mut config = ExplorerConfig::from_env();
    if let Some(url) = &options.backend {
        config.backend_url = url.clone();
    }
    let attempts = options.retries.unwrap_or(config.retry.attempts());
    let backoff = options.backoff_ms.map(Duration::from_millis).unwrap_or(config.retry.backoff());
    config.retry = RetryPolicy::new(attempts, backoff);
    config
}

fn edits_file(path: &str, durable: bool) -> EditsFile {
    let file = EditsFile::new(path);
    if durable {
        file.with_durability(WriteDurability::Durable)
    } else {
        file
    }
}

async fn run(command: Command, options: &CliOptions) -> Result<(), Box<dyn Error>> {
    let config = config_from(options);
    let transport = HttpTransport::new(&config.backend_url, config.retry)?;
    let explorer = Explorer::new(transport, &config);

    match command {
        Command::Schema => {
            println!("{}", serde_json::to_string_pretty(&EditsDocument::json_schema())?);
        }
        Command::Graph => {
            explorer.mount().await?;
            if let Some(diagram) = explorer.rendered() {
                println!("{}", diagram.source_description());
            }
        }
        Command::Select(key) => {
            explorer.mount().await?;
            match explorer.on_element_click(&key).await? {
                SelectOutcome::Selected { focus, .. } => {
                    let selection = focus.selection();
                    println!("{}:{}", selection.file_path(), selection.line_number());
                    let lines = explorer.source_lines();
                    for line in lines.iter().filter(|line| line.number.is_some()) {
                        let marker = if line.highlighted { '>' } else { ' ' };
                        println!("{marker}{:>6} {}", line.number.unwrap_or_default(), line.text);
                    }
                }
                SelectOutcome::ModuleToggled { module, outcome } => {
                    let level = outcome.applied.rerun_level;
                    println!("module {module} toggled (rerun level {level:?})");
                }
                SelectOutcome::Ignored => println!("nothing selected: {key} names no entity"),
            }
        }
        Command::Export(path) => {
            let file = edits_file(&path, options.durable_writes);
            let document = explorer.export_edits(&file).await?;
            let (nodes, modules) = (document.nodes.len(), document.modules.len());
            println!("exported {nodes} nodes, {modules} modules to {path}");
        }
        Command::Import(path) => {
            explorer.mount().await?;
            explorer.import_edits(&edits_file(&path, options.durable_writes)).await?;
            println!("imported {path}");
        }
        Command::Instances(node_id) => {
            for occurrence in explorer.instances_of(NodeId::new(node_id)).await? {
                println!("{}\t{}", occurrence.frame_time, occurrence.instance_of_addr);
            }
        }
        Command::Gdb(frame_time) => {
            println!("{}", explorer.gdb_command(frame_time).await?);
        }
    }
    Ok(())
}

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).with_writer(std::io::stderr).init();

    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "explorant".to_owned());

        let mut options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };
        let Some(command) = options.command.take() else {
            print_usage(&program);
            std::process::exit(2);
        };

        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
        runtime.block_on(run(command, &options))
    })();

    if let Err(err) = result {
        eprintln!("explorant: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{config_from, parse_options, CliOptions, Command};

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|arg| (*arg).to_owned()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn parses_bare_command() {
        let options = parse_options(args(&["graph"])).expect("parse options");
        assert_eq!(options, CliOptions { command: Some(Command::Graph), ..CliOptions::default() });
    }

    #[test]
    fn parses_flags_around_command() {
        let options = parse_options(args(&[
            "--backend",
            "http://trace-box:9000/",
            "select",
            "U3",
            "--retries",
            "2",
            "--backoff-ms",
            "50",
        ]))
        .expect("parse options");
        assert_eq!(options.command, Some(Command::Select("U3".to_owned())));

        let config = config_from(&options);
        assert_eq!(config.backend_url, "http://trace-box:9000/");
        assert_eq!(config.retry.attempts(), 2);
        assert_eq!(config.retry.backoff(), Duration::from_millis(50));
    }

    #[test]
    fn parses_numeric_arguments() {
        let options = parse_options(args(&["instances", "17"])).expect("parse options");
        assert_eq!(options.command, Some(Command::Instances(17)));
        let options = parse_options(args(&["gdb", "4096"])).expect("parse options");
        assert_eq!(options.command, Some(Command::Gdb(4096)));
    }

    #[test]
    fn zero_retries_still_tries_once() {
        let options = parse_options(args(&["--retries", "0", "graph"])).expect("parse options");
        assert_eq!(config_from(&options).retry.attempts(), 1);
    }

    #[test]
    fn rejects_missing_command() {
        parse_options(args(&[])).unwrap_err();
        parse_options(args(&["--backend", "http://x"])).unwrap_err();
    }

    #[test]
    fn rejects_bad_arguments() {
        parse_options(args(&["select"])).unwrap_err();
        parse_options(args(&["instances", "seven"])).unwrap_err();
        parse_options(args(&["graph", "schema"])).unwrap_err();
        parse_options(args(&["--nope", "graph"])).unwrap_err();
        parse_options(args(&["--durable-writes", "--durable-writes", "graph"])).unwrap_err();
        parse_options(args(&["--retries", "1", "--retries", "2", "graph"])).unwrap_err();
    }
}

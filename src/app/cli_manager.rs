// crusti_app_helper
// Copyright (C) 2020  Univ. Artois & CNRS
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use super::{
    app_helper::{init_logger, init_logger_with_level},
    command::Command,
    writable_string::WritableString,
};
use anyhow::{anyhow, Context, Result};
use clap::{App, AppSettings, Arg};
use log::{info, LevelFilter};
use std::{ffi::OsString, str::FromStr};
use sysinfo::System;

/// Handles the set of commands and processes the CLI arguments against them.
pub(crate) struct CliManager<'a> {
    app_name: &'a str,
    version: &'a str,
    author: &'a str,
    about: &'a str,
    commands: Vec<Box<dyn Command<'a>>>,
}

const LOGGING_LEVEL_ARG: &str = "LOGGING_LEVEL";

const HELP_STRINGS: [&str; 3] = ["help", "-h", "--help"];

/// The CLI argument setting the logging level; each command must include it.
pub(crate) fn logging_level_cli_arg<'a>() -> Arg<'a, 'a> {
    Arg::with_name(LOGGING_LEVEL_ARG)
        .long("logging-level")
        .multiple(false)
        .default_value("info")
        .possible_values(&["trace", "debug", "info", "warn", "error", "off"])
        .help("set the minimal logging level")
}

impl<'a> CliManager<'a> {
    pub(crate) fn new(app_name: &'a str, version: &'a str, author: &'a str, about: &'a str) -> Self {
        CliManager {
            app_name,
            version,
            author,
            about,
            commands: vec![],
        }
    }

    pub(crate) fn add_command(&mut self, command: Box<dyn Command<'a>>) {
        self.commands.push(command);
    }

    fn build_app(&self) -> App<'a, 'a> {
        let mut app = App::new(self.app_name)
            .global_setting(AppSettings::DisableVersion)
            .global_setting(AppSettings::VersionlessSubcommands)
            .setting(AppSettings::SubcommandRequired)
            .version(self.version)
            .author(self.author)
            .about(self.about);
        for c in self.commands.iter() {
            app = app.subcommand(c.clap_subcommand());
        }
        app
    }

    pub(crate) fn parse_cli<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(|a| a.into()).collect();
        let mut app = self.build_app();
        match app.clone().get_matches_from_safe(args.iter()) {
            Ok(matches) => {
                let (name, sub_matches) = matches.subcommand();
                let sub_matches =
                    sub_matches.ok_or_else(|| anyhow!("a subcommand is required"))?;
                let command = self
                    .commands
                    .iter()
                    .find(|c| c.name() == name)
                    .ok_or_else(|| anyhow!("unknown subcommand {:?}", name))?;
                let log_level = match sub_matches.value_of(LOGGING_LEVEL_ARG) {
                    Some(l) => LevelFilter::from_str(l)
                        .map_err(|_| anyhow!("invalid logging level {:?}", l))?,
                    None => LevelFilter::Info,
                };
                init_logger_with_level(log_level);
                info!("{} {}", self.app_name, self.version);
                sys_info();
                command.execute(sub_matches)
            }
            Err(clap::Error {
                kind: clap::ErrorKind::HelpDisplayed,
                ..
            }) => {
                init_logger();
                self.print_help(&mut app, &args)
            }
            Err(e) => {
                init_logger();
                info!("{} {}", self.app_name, self.version);
                Err(anyhow!("{}", e))
            }
        }
    }

    fn print_help(&self, app: &mut App, args: &[OsString]) -> Result<()> {
        let words = args
            .iter()
            .skip(1)
            .filter_map(|a| a.to_str())
            .collect::<Vec<&str>>();
        let subcommand = words
            .iter()
            .filter(|w| !HELP_STRINGS.contains(*w))
            .find_map(|w| self.commands.iter().find(|c| c.name() == *w));
        let mut message = WritableString::default();
        match subcommand {
            Some(c) => c.clap_subcommand().write_long_help(&mut message),
            None => app.write_long_help(&mut message),
        }
        .context("while writing help")?;
        message
            .to_string()
            .split('\n')
            .for_each(|s| info!("{}", s));
        Ok(())
    }
}

fn sys_info() {
    info!("----------------------------------------");
    let sys = System::new_all();
    let unknown = || "[unknown]".to_string();
    info!("running on {}", System::host_name().unwrap_or_else(unknown));
    info!(
        "OS is {} {} with kernel {}",
        System::name().unwrap_or_else(unknown),
        System::os_version().unwrap_or_else(unknown),
        System::kernel_version().unwrap_or_else(unknown)
    );
    let mut cpu_brands: Vec<&str> = sys.cpus().iter().map(|c| c.brand()).collect();
    cpu_brands.sort_unstable();
    cpu_brands.dedup();
    match sys.physical_core_count() {
        Some(n) => info!("physical core count: {} {:?}", n, cpu_brands),
        None => info!("physical core count: [unknown] {:?}", cpu_brands),
    }
    info!("total memory: {} KB", sys.total_memory() >> 10);
    info!("----------------------------------------");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{ArgMatches, SubCommand};
    use std::{cell::RefCell, rc::Rc};

    struct LocalCommand {
        command_involved: Rc<RefCell<bool>>,
        argument_set: Rc<RefCell<bool>>,
    }

    impl<'a> Command<'a> for LocalCommand {
        fn name(&self) -> &str {
            "local_command_name"
        }

        fn clap_subcommand(&self) -> App<'a, 'a> {
            SubCommand::with_name("local_command_name")
                .about("local_command_about")
                .arg(Arg::with_name("arg_name").short("a"))
                .arg(logging_level_cli_arg())
                .setting(AppSettings::DisableVersion)
        }

        fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
            (*self.command_involved.borrow_mut()) = true;
            if arg_matches.is_present("arg_name") {
                (*self.argument_set.borrow_mut()) = true;
            }
            Ok(())
        }
    }

    fn run_local_command(args: Vec<&'static str>) -> Result<(bool, bool)> {
        init_logger_with_level(LevelFilter::Off);
        let mut manager = CliManager::new("app_name", "app_version", "author", "about");
        let command_involved = Rc::new(RefCell::new(false));
        let argument_set = Rc::new(RefCell::new(false));
        manager.add_command(Box::new(LocalCommand {
            command_involved: Rc::clone(&command_involved),
            argument_set: Rc::clone(&argument_set),
        }));
        manager.parse_cli(args)?;
        let result = (*command_involved.borrow(), *argument_set.borrow());
        Ok(result)
    }

    #[test]
    fn test_command_involved() {
        assert_eq!(
            (true, false),
            run_local_command(vec!["app_name", "local_command_name"]).unwrap()
        );
    }

    #[test]
    fn test_command_and_arg_involved() {
        assert_eq!(
            (true, true),
            run_local_command(vec!["app_name", "local_command_name", "-a"]).unwrap()
        );
    }

    #[test]
    fn test_logging_level() {
        assert_eq!(
            (true, false),
            run_local_command(vec![
                "app_name",
                "local_command_name",
                "--logging-level",
                "off"
            ])
            .unwrap()
        );
        assert!(run_local_command(vec![
            "app_name",
            "local_command_name",
            "--logging-level",
            "loud"
        ])
        .is_err());
    }

    #[test]
    fn test_wrong_subcommand() {
        assert!(run_local_command(vec!["app_name", "foo"]).is_err());
    }

    #[test]
    fn test_wrong_arg() {
        assert!(run_local_command(vec!["app_name", "local_command_name", "-b"]).is_err());
    }

    #[test]
    fn test_help() {
        assert_eq!(
            (false, false),
            run_local_command(vec!["app_name", "-h"]).unwrap()
        );
        assert_eq!(
            (false, false),
            run_local_command(vec!["app_name", "help", "local_command_name"]).unwrap()
        );
        assert_eq!(
            (false, false),
            run_local_command(vec!["app_name", "local_command_name", "-h"]).unwrap()
        );
    }
}

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

use super::{cli_manager::CliManager, command::Command};
use anyhow::Result;
use log::{error, info, LevelFilter};
use std::{ffi::OsString, sync::Once, time::Instant};

static LOGGER_INIT: Once = Once::new();

/// The entry point of the app.
///
/// Commands are registered with [`add_command`](Self::add_command), then [`launch_app`](Self::launch_app)
/// reads the CLI arguments, initializes the logger and executes the selected command.
/// If the command fails, the error and its causes are logged and the process exits with status 1.
pub(crate) struct AppHelper<'a> {
    cli_manager: CliManager<'a>,
}

impl<'a> AppHelper<'a> {
    pub(crate) fn new(app_name: &'a str, version: &'a str, author: &'a str, about: &'a str) -> Self {
        AppHelper {
            cli_manager: CliManager::new(app_name, version, author, about),
        }
    }

    pub(crate) fn add_command(&mut self, command: Box<dyn Command<'a>>) {
        self.cli_manager.add_command(command);
    }

    /// Launches the app using the arguments given by `std::env::args_os()`.
    pub(crate) fn launch_app(self) {
        if let Err(e) = self.execute_app(std::env::args_os()) {
            error!("an error occurred: {}", e);
            e.chain()
                .skip(1)
                .for_each(|err| error!("caused by: {}", err));
            std::process::exit(1);
        }
    }

    fn execute_app<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let start_time = Instant::now();
        let result = self.cli_manager.parse_cli(args);
        if result.is_ok() {
            info!("exiting successfully after {:?}", start_time.elapsed());
        }
        result
    }
}

pub(crate) fn init_logger() {
    init_logger_with_level(LevelFilter::Info)
}

/// Initializes the logger; only the first call has an effect.
pub(crate) fn init_logger_with_level(level: LevelFilter) {
    LOGGER_INIT.call_once(|| {
        let colors = fern::colors::ColoredLevelConfig::new().info(fern::colors::Color::Cyan);
        fern::Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "![{:5}] {} {}",
                    colors.color(record.level()),
                    chrono::Local::now().format("[%Y-%m-%d %H:%M:%S]"),
                    message
                ))
            })
            .level(level)
            .chain(std::io::stdout())
            .apply()
            .unwrap_or(());
    });
}

// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Invocation of the external badge executable.
///
/// The executable is reached through [`BadgeTool`], which takes the serialized
/// arguments and reports success or failure. [`ProcessBadgeTool`] spawns the
/// real `badge` binary; tests substitute their own implementation.
use std::{
    env,
    ffi::OsStr,
    path::{Path, PathBuf},
    process::Command,
};

use tracing::{debug, info};

use crate::{arguments::BadgeArguments, error::Error, settings::BadgeConfig};

/// Name of the badge executable searched on `PATH`.
pub const BADGE_EXECUTABLE: &str = "badge";

/// Consumer of serialized badge arguments.
pub trait BadgeTool
{
    /// Runs the tool with `arguments`.
    ///
    /// # Errors
    ///
    /// Implementations report start-up failures and unsuccessful exits.
    fn run(&self, arguments: &BadgeArguments,) -> Result<(), Error,>;
}

/// Badge executable started as a child process with inherited stdio.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct ProcessBadgeTool
{
    executable: PathBuf,
}

impl ProcessBadgeTool
{
    /// Uses the executable at `path` without checking that it exists.
    pub fn at(path: impl Into<PathBuf,>,) -> Self
    {
        Self {
            executable: path.into(),
        }
    }

    /// Locates [`BADGE_EXECUTABLE`] on `PATH`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ToolNotFound`] when no directory on `PATH` contains
    /// the executable.
    pub fn discover() -> Result<Self, Error,>
    {
        let executable = which::which(BADGE_EXECUTABLE,).map_err(tool_not_found,)?;
        debug!(executable = %executable.display(), "discovered badge executable");
        Ok(Self::at(executable,),)
    }

    /// Locates [`BADGE_EXECUTABLE`] in the directories of `search_path`, a
    /// platform-formatted `PATH` value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ToolNotFound`] when no directory contains the
    /// executable.
    pub fn discover_in(search_path: &OsStr,) -> Result<Self, Error,>
    {
        let cwd = env::current_dir().unwrap_or_default();
        let executable =
            which::which_in(BADGE_EXECUTABLE, Some(search_path,), cwd,).map_err(tool_not_found,)?;
        debug!(executable = %executable.display(), "discovered badge executable");
        Ok(Self::at(executable,),)
    }

    /// Path of the executable that will be started.
    pub fn executable(&self,) -> &Path
    {
        &self.executable
    }
}

fn tool_not_found(source: which::Error,) -> Error
{
    debug!(error = %source, "badge executable lookup failed");
    Error::ToolNotFound {
        name: BADGE_EXECUTABLE.to_owned(),
    }
}

impl BadgeTool for ProcessBadgeTool
{
    fn run(&self, arguments: &BadgeArguments,) -> Result<(), Error,>
    {
        debug!(executable = %self.executable.display(), arguments = %arguments, "running badge");

        let status = Command::new(&self.executable,)
            .args(arguments.to_tokens(),)
            .status()
            .map_err(|source| Error::ToolSpawn {
                path: self.executable.clone(),
                source,
            },)?;

        if !status.success() {
            return Err(Error::ToolExit {
                status: status.to_string(),
            },);
        }

        info!(executable = %self.executable.display(), "badge finished");
        Ok((),)
    }
}

/// Serializes badge settings and hands them to a [`BadgeTool`].
#[derive(Debug, Clone,)]
pub struct BadgeRunner<T,>
{
    tool: T,
}

impl<T: BadgeTool,> BadgeRunner<T,>
{
    /// Creates a runner around `tool`.
    pub fn new(tool: T,) -> Self
    {
        Self {
            tool,
        }
    }

    /// Tool that receives the arguments.
    pub fn tool(&self,) -> &T
    {
        &self.tool
    }

    /// Runs the tool with the arguments serialized from `config`.
    ///
    /// # Errors
    ///
    /// Propagates the failures reported by the tool.
    pub fn run(&self, config: &BadgeConfig,) -> Result<&Self, Error,>
    {
        let arguments = config.to_arguments();
        self.tool.run(&arguments,)?;
        Ok(self,)
    }

    /// Starts from [`BadgeConfig::default`], lets `configure` adjust it, then
    /// runs the tool.
    ///
    /// # Errors
    ///
    /// Propagates the failures reported by the tool.
    pub fn run_with<F,>(&self, configure: F,) -> Result<&Self, Error,>
    where
        F: FnOnce(&mut BadgeConfig,),
    {
        let mut config = BadgeConfig::default();
        configure(&mut config,);
        self.run(&config,)
    }
}

impl BadgeRunner<ProcessBadgeTool,>
{
    /// Creates a runner for the executable named by `config.tool_path`, or
    /// the one discovered on `PATH` when no path is configured.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ToolNotFound`] when discovery fails.
    pub fn for_config(config: &BadgeConfig,) -> Result<Self, Error,>
    {
        let tool = match config.tool_path.as_deref() {
            Some(path,) => ProcessBadgeTool::at(path,),
            None => ProcessBadgeTool::discover()?,
        };
        Ok(Self::new(tool,),)
    }
}

/// Runs the badge executable for `config`, resolving it from
/// `config.tool_path` or `PATH`.
///
/// # Errors
///
/// Returns [`Error::ToolNotFound`] when the executable cannot be located and
/// the errors of [`ProcessBadgeTool::run`] otherwise.
pub fn run_badge(config: &BadgeConfig,) -> Result<(), Error,>
{
    BadgeRunner::for_config(config,)?.run(config,)?;
    Ok((),)
}

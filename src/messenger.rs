//! Named, unit-tagged parameters that external commands can set.
//!
//! A [`Messenger`] owns a command directory such as `/target/` and a list
//! of properties declared on a configuration struct `C`. Commands never
//! reach into the detector; they mutate a `C` that is later handed to the
//! geometry build.

use tracing::info;

use crate::error::{CommandError, Result};
use crate::units::{parse_unit, UnitCategory};

/// A declared property: a scalar field of `C` with a default unit.
pub struct Command<C> {
    name: String,
    unit: String,
    unit_value: f64,
    category: UnitCategory,
    guidance: String,
    set: fn(&mut C, f64),
    get: fn(&C) -> f64,
}

impl<C> Command<C> {
    /// Returns the command name relative to the directory.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the default unit symbol.
    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Returns the guidance text.
    #[must_use]
    pub fn guidance(&self) -> &str {
        &self.guidance
    }
}

/// A directory of unit-tagged commands bound to fields of `C`.
pub struct Messenger<C> {
    directory: String,
    commands: Vec<Command<C>>,
}

impl<C> Messenger<C> {
    /// Creates a messenger for `directory`; a trailing `/` is added if missing.
    #[must_use]
    pub fn new(directory: &str) -> Self {
        let mut directory = directory.to_owned();
        if !directory.ends_with('/') {
            directory.push('/');
        }
        Self {
            directory,
            commands: Vec::new(),
        }
    }

    /// Returns the command directory.
    #[must_use]
    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// Declares a property settable as `<directory><name> <value> [unit]`.
    ///
    /// # Errors
    ///
    /// Returns an error if `unit` is unknown or `name` is already declared.
    pub fn declare_property_with_unit(
        &mut self,
        name: &str,
        unit: &str,
        set: fn(&mut C, f64),
        get: fn(&C) -> f64,
        guidance: &str,
    ) -> Result<()> {
        if self.commands.iter().any(|c| c.name == name) {
            return Err(CommandError::DuplicateCommand(format!("{}{name}", self.directory)).into());
        }
        let (unit_value, category) =
            parse_unit(unit).ok_or_else(|| CommandError::UnknownUnit(unit.to_owned()))?;
        self.commands.push(Command {
            name: name.to_owned(),
            unit: unit.to_owned(),
            unit_value,
            category,
            guidance: guidance.to_owned(),
            set,
            get,
        });
        Ok(())
    }

    /// Iterates over the declared commands.
    pub fn commands(&self) -> impl Iterator<Item = &Command<C>> {
        self.commands.iter()
    }

    fn command(&self, path: &str) -> Result<&Command<C>> {
        path.strip_prefix(&self.directory)
            .and_then(|name| self.commands.iter().find(|c| c.name == name))
            .ok_or_else(|| CommandError::UnknownCommand(path.to_owned()).into())
    }

    /// Applies one command line such as `/target/thickness 0.1 mm`.
    ///
    /// The unit may be omitted, in which case the declared unit is used.
    ///
    /// # Errors
    ///
    /// Returns an error if the command is unknown, the value is missing or
    /// not a finite number, or the unit is unknown or of the wrong kind.
    pub fn apply(&self, config: &mut C, line: &str) -> Result<()> {
        let mut tokens = line.split_whitespace();
        let path = tokens.next().unwrap_or_default();
        let command = self.command(path)?;

        let raw = tokens
            .next()
            .ok_or_else(|| CommandError::MissingValue(path.to_owned()))?;
        let value: f64 = raw
            .parse()
            .ok()
            .filter(|v: &f64| v.is_finite())
            .ok_or_else(|| CommandError::InvalidValue {
                command: path.to_owned(),
                value: raw.to_owned(),
            })?;

        let unit_value = match tokens.next() {
            None => command.unit_value,
            Some(symbol) => {
                let (unit_value, category) = parse_unit(symbol)
                    .ok_or_else(|| CommandError::UnknownUnit(symbol.to_owned()))?;
                if category != command.category {
                    return Err(CommandError::UnitCategory {
                        unit: symbol.to_owned(),
                        expected: command.category.name(),
                    }
                    .into());
                }
                unit_value
            }
        };
        if let Some(extra) = tokens.next() {
            return Err(CommandError::InvalidValue {
                command: path.to_owned(),
                value: extra.to_owned(),
            }
            .into());
        }

        (command.set)(config, value * unit_value);
        info!(command = path, value, "applied parameter command");
        Ok(())
    }

    /// Applies every command in a macro text, one per line. Blank lines and
    /// lines starting with `#` are skipped. Stops at the first failing line.
    ///
    /// # Errors
    ///
    /// Returns the error of the first command that fails.
    pub fn apply_macro(&self, config: &mut C, text: &str) -> Result<()> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .try_for_each(|line| self.apply(config, line))
    }

    /// Formats the current value of a property in its declared unit.
    ///
    /// # Errors
    ///
    /// Returns an error if the command is unknown.
    pub fn current_value(&self, config: &C, path: &str) -> Result<String> {
        let command = self.command(path)?;
        Ok(format!(
            "{} {}",
            (command.get)(config) / command.unit_value,
            command.unit
        ))
    }
}

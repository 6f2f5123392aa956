//! The `Logger` registry: config-driven method installation and dispatch

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;
use tracing::{debug, trace};

use crate::color::{self, colorize, Color};
use crate::config::{LoggingConfig, MethodConfig};
use crate::console::{render_value, Console, SinkKind, StdConsole};
use crate::error::LoggerError;
use crate::settings::LoggerSettings;

/// Operations every `Logger` exposes regardless of configuration.
/// Config keys may not shadow any of these.
const BUILTIN_METHODS: &[&str] = &[
    "enable_logging",
    "enable_logging_value",
    "invoke",
    "method",
    "method_names",
    "has_method",
    "time_stamp",
    "colorize",
    "settings",
    "options",
    "set_force",
];

/// Config-driven console logger.
///
/// A fresh logger has no logging methods. [`Logger::enable_logging`]
/// installs one named entry per config key, and [`Logger::invoke`]
/// dispatches a call by name through the gate/format/emit/escalate
/// contract.
///
/// `settings` and `options` are separate copies of the construction-time
/// [`LoggerSettings`]; mutating one never shows through the other.
/// [`Logger::set_force`] touches only `options`.
pub struct Logger {
    settings: LoggerSettings,
    options: LoggerSettings,
    methods: HashMap<String, MethodConfig>,
    console: Box<dyn Console>,
}

impl Logger {
    /// Create a logger that prints to the process console.
    pub fn new(settings: LoggerSettings) -> Self {
        Self::with_console(settings, Box::new(StdConsole))
    }

    /// Create a logger that writes to `console` instead of the process
    /// streams.
    pub fn with_console(settings: LoggerSettings, console: Box<dyn Console>) -> Self {
        Self {
            settings,
            options: settings,
            methods: HashMap::new(),
            console,
        }
    }

    /// Construction-time settings.
    pub fn settings(&self) -> &LoggerSettings {
        &self.settings
    }

    /// Runtime options. Starts identical to [`Logger::settings`] and
    /// diverges only through [`Logger::set_force`].
    pub fn options(&self) -> &LoggerSettings {
        &self.options
    }

    /// Toggle the runtime force flag. Throwing methods stop escalating
    /// only when `allow_force_no_throw` was also set at construction.
    pub fn set_force(&mut self, force: bool) {
        self.options.force = force;
    }

    /// Names of the installed logging methods, in no particular order.
    pub fn method_names(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(String::as_str)
    }

    /// Whether `name` is taken, either by a built-in operation or an
    /// installed logging method.
    pub fn has_method(&self, name: &str) -> bool {
        BUILTIN_METHODS.contains(&name) || self.methods.contains_key(name)
    }

    /// Install one logging method per entry in `config`.
    ///
    /// Fails with [`LoggerError::MethodCollision`] on the first key that
    /// is already taken. Entries processed before the failing key stay
    /// installed; since the typed config is a `HashMap`, which entries
    /// those are depends on iteration order.
    pub fn enable_logging(&mut self, config: LoggingConfig) -> Result<(), LoggerError> {
        for (name, method_config) in config.methods {
            self.install(name, method_config)?;
        }
        Ok(())
    }

    /// Permissive variant of [`Logger::enable_logging`] over raw JSON.
    ///
    /// Anything but an object is a silent no-op. Object entries are
    /// installed in insertion order; an entry that does not parse as
    /// method options fails with [`LoggerError::InvalidMethodConfig`].
    pub fn enable_logging_value(&mut self, config: Value) -> Result<(), LoggerError> {
        let Value::Object(entries) = config else {
            return Ok(());
        };
        for (name, entry) in entries {
            let method_config = serde_json::from_value(entry).map_err(|source| {
                LoggerError::InvalidMethodConfig {
                    name: name.clone(),
                    source,
                }
            })?;
            self.install(name, method_config)?;
        }
        Ok(())
    }

    fn install(&mut self, name: String, config: MethodConfig) -> Result<(), LoggerError> {
        if self.has_method(&name) {
            return Err(LoggerError::MethodCollision { name });
        }
        debug!(method = %name, "installed logging method");
        self.methods.insert(name, config);
        Ok(())
    }

    /// Dispatch a call to the installed method `name`.
    ///
    /// Gated calls (a verbose-only method without the verbose option, or
    /// any call under `quiet`) return `Ok(())` without output or
    /// escalation. Otherwise the arguments are colorized, prefixed, and
    /// stamped per the method's options, emitted in one console call as
    /// `[timestamp, prefix, ...args]`, and finally escalated to
    /// [`LoggerError::ForcedLog`] when the method is configured with
    /// `throws` and the force-override is not satisfied.
    pub fn invoke(&self, name: &str, args: &[Value]) -> Result<(), LoggerError> {
        let config = self
            .methods
            .get(name)
            .ok_or_else(|| LoggerError::UnknownMethod {
                name: name.to_string(),
            })?;

        if (config.verbose && !self.options.verbose) || self.options.quiet {
            trace!(method = %name, "call gated");
            return Ok(());
        }

        let sink = SinkKind::resolve(name);
        let color_name = config.color.as_deref().unwrap_or_default();

        let mut output = match Color::parse(color_name) {
            Some(color) => color::colorize_items(args.to_vec(), color),
            None => args.to_vec(),
        };

        if !config.prefix.trim().is_empty() {
            output.insert(0, colorize(Value::String(config.prefix.clone()), color_name));
        }

        if config.stamp {
            let stamp = format!("[{}]", self.time_stamp());
            output.insert(0, colorize(Value::String(stamp), color_name));
        }

        let parts: Vec<String> = output.iter().map(render_value).collect();
        self.console.write(sink, &parts);

        if config.throws && !(self.settings.allow_force_no_throw && self.options.force) {
            return Err(LoggerError::ForcedLog {
                args: args.to_vec(),
            });
        }

        Ok(())
    }

    /// Handle to an installed method, for call sites that want to bind
    /// the name once instead of spelling it at every invocation.
    pub fn method<'a>(&'a self, name: &str) -> Option<MethodHandle<'a>> {
        let (key, _) = self.methods.get_key_value(name)?;
        Some(MethodHandle {
            logger: self,
            name: key.as_str(),
        })
    }

    /// Current timestamp, `M/D/YYYY h:mm:ss AM/PM` in local time.
    pub fn time_stamp(&self) -> String {
        chrono::Local::now().format("%-m/%-d/%Y %-I:%M:%S %p").to_string()
    }

    /// Apply the color named `color_name` to every string in `value`.
    /// See [`colorize`](crate::color::colorize).
    pub fn colorize(value: Value, color_name: &str) -> Value {
        colorize(value, color_name)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LoggerSettings::default())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.method_names().collect();
        names.sort_unstable();
        f.debug_struct("Logger")
            .field("settings", &self.settings)
            .field("options", &self.options)
            .field("methods", &names)
            .finish_non_exhaustive()
    }
}

/// Borrowed handle to one installed logging method.
#[derive(Debug, Clone, Copy)]
pub struct MethodHandle<'a> {
    logger: &'a Logger,
    name: &'a str,
}

impl MethodHandle<'_> {
    pub fn name(&self) -> &str {
        self.name
    }

    /// Invoke the method with `args`. Same contract as
    /// [`Logger::invoke`].
    pub fn call(&self, args: &[Value]) -> Result<(), LoggerError> {
        self.logger.invoke(self.name, args)
    }
}

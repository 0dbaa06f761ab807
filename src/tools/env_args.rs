#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;
#[cfg(not(test))]
use std::env;
use log::warn;
use std::str::FromStr;

/// Where a setting can be read from.
/// A `--name=value` arg passed to the app always wins over the environment variable.
#[derive(Debug, Clone, Copy)]
pub struct Setting<'a> {
    arg_name: &'a str,
    env_var: &'a str,
}

impl<'a> Setting<'a> {
    pub const fn new(arg_name: &'a str, env_var: &'a str) -> Self {
        Self { arg_name, env_var }
    }

    /// Retrieve the setting value, if any.
    /// Empty values are considered missing.
    pub fn value(&self) -> Option<String> {
        retrieve_arg_value(self.arg_name)
            .filter(|value| !value.is_empty())
            .or_else(|| get_env_var(self.env_var).filter(|value| !value.is_empty()))
    }

    pub fn value_or(&self, default_value: &str) -> String {
        self.value().unwrap_or_else(|| default_value.to_owned())
    }

    /// Retrieve the setting value, parsed.
    /// Missing and unparsable values both lead to the default value.
    pub fn parsed_value_or<T: FromStr>(&self, default_value: T) -> T {
        match self.value() {
            None => default_value,
            Some(value) => value.parse::<T>().unwrap_or_else(|_| {
                warn!(
                    "Ignoring unparsable value [setting: {}, value: {value}]",
                    self.arg_name
                );
                default_value
            }),
        }
    }

    pub fn expected_value<E>(&self, error_if_missing: E) -> Result<String, E> {
        self.value().ok_or(error_if_missing)
    }
}

/// Retrieve value associated to an arg passed to the app.
///
/// /!\ As this works on global variables,
/// a function using `retrieve_arg_value` could be tricky to test.
/// To do so, wrap your test with `with_env_args(args, fn)`.
/// This function is only available in a test context.
pub fn retrieve_arg_value(arg_name: &str) -> Option<String> {
    let arg_prefix = format!("{arg_name}=");
    get_env_args()
        .into_iter()
        .find(|arg| arg.starts_with(&arg_prefix))
        .and_then(|arg| arg.split_once('=').map(|(_, value)| value.to_owned()))
}

#[cfg(not(test))]
fn get_env_args() -> Vec<String> {
    env::args().collect()
}

#[cfg(not(test))]
fn get_env_var(name: &str) -> Option<String> {
    env::var(name).ok()
}

#[cfg(test)]
thread_local! {
    /// A mutable `Vec<String>` to host env args for tests.
    /// When a test is run with `with_env_args`,
    /// the inner `Vec` is set to whatever param is passed.
    /// It is then reset to its previous state.
    static ENV_ARGS: RefCell<Vec<String>> = const { RefCell::new(vec![]) };

    /// Same as `ENV_ARGS`, for environment variables. See `with_env_vars`.
    static ENV_VARS: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
}

#[cfg(test)]
fn get_env_args() -> Vec<String> {
    ENV_ARGS.with(|vec| vec.borrow().clone())
}

#[cfg(test)]
fn get_env_var(name: &str) -> Option<String> {
    ENV_VARS.with(|vars| vars.borrow().get(name).cloned())
}

#[cfg(test)]
/// When running tests, env args are extended from within the app.
/// You can set them up from there by wrapping your test with this function.
pub fn with_env_args<F, T>(mut args: Vec<String>, function: F) -> T
where
    F: FnOnce() -> T,
{
    ENV_ARGS.with(|refcell| {
        let global_env_args = std::env::args().collect::<Vec<String>>();
        args.extend_from_slice(&global_env_args);
        let old_value = refcell.replace(args);
        let result = function();
        refcell.replace(old_value);
        result
    })
}

#[cfg(test)]
/// When running tests, environment variables are never read from the process.
/// Wrap your test with this function to provide some.
pub fn with_env_vars<F, T>(vars: &[(&str, &str)], function: F) -> T
where
    F: FnOnce() -> T,
{
    ENV_VARS.with(|refcell| {
        let vars = vars
            .iter()
            .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
            .collect();
        let old_value = refcell.replace(vars);
        let result = function();
        refcell.replace(old_value);
        result
    })
}

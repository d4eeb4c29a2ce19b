use std::{cell::RefCell, ffi::OsStr};

use crate::parse::Radix;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Env {
    /// `None` if not set; command-line flag or default radix is used instead.
    radix: Option<Radix>,
    minimal: bool,
}

thread_local! {
    /// Must only be mutated within `set_env`
    static ENV: RefCell<Option<Env>> = const { RefCell::new(None) };
}

/// Read `ADDRMON_RADIX` and `ADDRMON_MINIMAL`.
///
/// Returns `Err` if `ADDRMON_RADIX` is set to an unsupported radix.
pub fn init() -> Result<(), String> {
    let radix = std::env::var("ADDRMON_RADIX").ok();
    let value = Env::from_vars(radix.as_deref(), var_is("ADDRMON_MINIMAL", "1"))?;
    set_env(value);
    Ok(())
}

/// Default radix from environment, if any.
pub fn radix() -> Option<Radix> {
    with_env(|env| env.radix)
}

pub fn is_minimal() -> bool {
    with_env(|env| env.minimal)
}

impl Env {
    fn from_vars(radix: Option<&str>, minimal: bool) -> Result<Self, String> {
        let radix = match radix {
            None | Some("") => None,
            Some(radix) => Some(
                radix
                    .parse::<Radix>()
                    .map_err(|err| format!("In ADDRMON_RADIX: {}", err))?,
            ),
        };
        Ok(Self { radix, minimal })
    }
}

fn set_env(value: Env) {
    ENV.with(|env| {
        let mut env = env.borrow_mut();
        assert!(
            env.is_none(),
            "tried to initialize environment state multiple times"
        );
        *env = Some(value);
    });
}

fn with_env<F, R>(callback: F) -> R
where
    F: Fn(&Env) -> R,
{
    ENV.with(|env| {
        let env = env.borrow();
        let env = env.unwrap_or_else(|| {
            panic!("tried to access environment state before initialization");
        });
        callback(&env)
    })
}

fn var_is(name: impl AsRef<OsStr>, value: impl AsRef<str>) -> bool {
    std::env::var(name.as_ref()).is_ok_and(|v| v == value.as_ref())
}

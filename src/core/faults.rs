//! Fault demos.
//!
//! Recoverable faults are caught where they happen, reported to the error
//! stream as a cause chain, and execution carries on. The unrecoverable fault is
//! returned unconditionally and left for the caller to abort on.

use crate::core::Console;
use crate::utils::error::{DemoError, Result};
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Never created by this crate; opening it is expected to fail.
pub const MISSING_RESOURCE_PATH: &str = "idpo /outputs.txt";

pub const MISMATCH_MESSAGE: &str = "Username Password Mismatch Exception";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultOutcome {
    Completed,
    Recovered,
}

#[derive(Debug, Clone, Default)]
pub struct Address {
    pub street_name: String,
}

#[derive(Debug, Clone, Default)]
pub struct Student {
    pub name: Option<String>,
    pub address: Option<Address>,
}

impl Student {
    pub fn street_name(&self) -> Result<&str> {
        self.address
            .as_ref()
            .map(|address| address.street_name.as_str())
            .ok_or_else(|| DemoError::MissingValue {
                field: "student.address".to_string(),
            })
    }
}

pub fn open_resource<P: AsRef<Path>>(path: P) -> Result<BufReader<File>> {
    let path = path.as_ref();
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| DemoError::ResourceUnavailable {
            path: path.display().to_string(),
            source,
        })
}

/// Writes `value` into every slot `0..=upto`; the inclusive bound overruns on purpose
/// when `upto == data.len()`.
pub fn fill_through(data: &mut [i32], upto: usize, value: i32) -> Result<()> {
    let len = data.len();
    for index in 0..=upto {
        let slot = data
            .get_mut(index)
            .ok_or(DemoError::IndexOutOfBounds { index, len })?;
        *slot = value;
    }
    Ok(())
}

pub fn divide(dividend: i32, divisor: i32) -> Result<i32> {
    dividend.checked_div(divisor).ok_or(DemoError::DivisionByZero)
}

pub fn reject_credentials() -> Result<()> {
    Err(DemoError::UsernamePasswordMismatch(
        MISMATCH_MESSAGE.to_string(),
    ))
}

/// Error line followed by one `Caused by:` line per source.
pub fn fault_report(err: &dyn Error) -> Vec<String> {
    let mut lines = vec![format!("error: {}", err)];
    let mut source = err.source();
    while let Some(cause) = source {
        lines.push(format!("    Caused by: {}", cause));
        source = cause.source();
    }
    lines
}

/// Catches a recoverable fault, logs it and reports it to the error stream.
pub fn recover<T, C: Console>(console: &mut C, result: Result<T>) -> Result<FaultOutcome> {
    match result {
        Ok(_) => Ok(FaultOutcome::Completed),
        Err(e) if e.is_recoverable() => {
            tracing::warn!(
                "⚠️ Recovered from fault: {} (Category: {:?})",
                e,
                e.category()
            );
            for line in fault_report(&e) {
                console.write_error(&line)?;
            }
            Ok(FaultOutcome::Recovered)
        }
        Err(e) => Err(e),
    }
}

pub fn run_recoverable<C: Console>(console: &mut C) -> Result<Vec<FaultOutcome>> {
    let mut outcomes = Vec::with_capacity(4);

    outcomes.push(recover(console, open_resource(MISSING_RESOURCE_PATH))?);

    let student = Student {
        name: Some("niraj".to_string()),
        address: None,
    };
    outcomes.push(recover(console, student.street_name().map(str::len))?);

    let mut data = [0; 6];
    let len = data.len();
    outcomes.push(recover(console, fill_through(&mut data, len, 1))?);

    outcomes.push(recover(console, divide(10, 0))?);

    console.write_line("After Catch Block")?;
    Ok(outcomes)
}

pub fn run_unrecoverable() -> Result<()> {
    tracing::debug!("Raising credential fault");
    reject_credentials()
}

use std::io::{stdout, Write};

use anyhow::{bail, Context, Result};
use aprs::ErrorCode;

pub fn describe(code: Option<&str>, all: bool) -> Result<()> {
    let mut out = stdout().lock();
    let code = match code {
        Some(code) if !all => code,
        _ => {
            for code in ErrorCode::ALL {
                writeln!(out, "{:<20} {}", code.as_str(), code.description())
                    .context("writing to stdout")?;
            }
            return Ok(());
        }
    };

    let Some(message) = aprs::get_message(code) else {
        bail!("{code} is not a known error code; see --all");
    };
    writeln!(out, "{message}").context("writing to stdout")
}

use std::fs::File;
use std::io::{stdin, stdout, BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};
use aprs::{Clock, FixedClock, Parser, PositionReport, SystemClock};
use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use handlebars::{handlebars_helper, Handlebars};
use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub enum Format {
    Json,
    Text,
}

impl clap::ValueEnum for Format {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Json, Self::Text]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        match self {
            Self::Json => Some(clap::builder::PossibleValue::new("json")),
            Self::Text => Some(clap::builder::PossibleValue::new("text")),
        }
    }
}

/// One line of text output.
#[derive(Debug, Serialize)]
struct Row {
    call: String,
    timestamp: String,
    latitude: Option<String>,
    longitude: Option<String>,
    altitude: Option<i32>,
    kind: String,
    problems: Vec<String>,
}

impl From<&PositionReport> for Row {
    fn from(report: &PositionReport) -> Self {
        let mut problems = Vec::default();
        if let Some(code) = report.kind.and_then(|k| k.unsupported_code()) {
            problems.push(code.to_string());
        }
        let reasons = [
            report.callsign.reason(),
            report.timestamp.reason(),
            report.position.reason(),
        ];
        problems.extend(
            reasons
                .into_iter()
                .flatten()
                .filter_map(aprs::Error::code)
                .map(|code| code.to_string()),
        );
        problems.dedup();

        Row {
            call: report.call.clone(),
            timestamp: report
                .time_stamp()
                .to_rfc3339_opts(SecondsFormat::Secs, true),
            latitude: report.position.value().map(|p| format!("{:.4}", p.latitude)),
            longitude: report.position.value().map(|p| format!("{:.4}", p.longitude)),
            altitude: report.altitude(),
            kind: report
                .kind
                .map_or_else(|| "-".to_string(), |k| k.to_string()),
            problems,
        }
    }
}

fn new_parser(reference: Option<DateTime<Utc>>, utc_offset: Option<FixedOffset>) -> Parser {
    let clock: Box<dyn Clock> = match reference {
        Some(reference) => Box::new(FixedClock::new(reference)),
        None => Box::new(SystemClock),
    };
    Parser::builder()
        .clock(clock)
        .local_offset(utc_offset)
        .build()
}

pub fn decode(
    input: Option<&Path>,
    format: &Format,
    reference: Option<DateTime<Utc>>,
    utc_offset: Option<FixedOffset>,
) -> Result<()> {
    let reader: Box<dyn BufRead> = match input {
        Some(path) if path != Path::new("-") => {
            debug!("reading packets from {path:?}");
            let file = File::open(path).with_context(|| format!("opening input {path:?}"))?;
            Box::new(BufReader::new(file))
        }
        _ => Box::new(BufReader::new(stdin())),
    };
    let parser = new_parser(reference, utc_offset);
    let hb = setup_handlebars()?;
    let mut out = stdout().lock();

    if let Format::Text = format {
        out.write_all(text_header().as_bytes())
            .context("writing to stdout")?;
    }

    let mut total = 0;
    let mut decoded = 0;
    for line in reader.lines() {
        let line = line.context("reading input")?;
        if line.trim().is_empty() {
            continue;
        }
        let report = parser.parse(&line);
        total += 1;
        if report.position.is_decoded() {
            decoded += 1;
        }

        match format {
            Format::Json => {
                serde_json::to_writer(&mut out, &report).context("serializing to json")?;
                writeln!(out).context("writing to stdout")?;
            }
            Format::Text => {
                let row = hb
                    .render("row", &Row::from(&report))
                    .context("rendering text")?;
                out.write_all(row.as_bytes()).context("writing to stdout")?;
            }
        }
    }
    info!(total, decoded, "decoded packets");

    Ok(())
}

fn json_text(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::String(s) => s.to_owned(),
        serde_json::Value::Null => "-".to_string(),
        _ => v.to_string(),
    }
}

fn setup_handlebars() -> Result<Handlebars<'static>> {
    handlebars_helper!(lpad: |width: u64, v: Json| {
        format!("{:>width$}", json_text(v), width = usize::try_from(width).unwrap_or(0))
    });
    handlebars_helper!(rpad: |width: u64, v: Json| {
        format!("{:<width$}", json_text(v), width = usize::try_from(width).unwrap_or(0))
    });
    let mut hb = Handlebars::new();
    hb.register_escape_fn(handlebars::no_escape);
    hb.register_helper("lpad", Box::new(lpad));
    hb.register_helper("rpad", Box::new(rpad));
    hb.register_template_string("row", ROW_TEMPLATE)
        .context("registering text template")?;
    Ok(hb)
}

fn text_header() -> String {
    let header = format!(
        "{:<10} {:<20}  {:>9}  {:>10}  {:>8}  Kind [problems]",
        "Call", "Time", "Latitude", "Longitude", "Altitude"
    );
    format!("{header}\n{}\n", "-".repeat(header.len()))
}

const ROW_TEMPLATE: &str = "{{ rpad 10 call }} {{ rpad 20 timestamp }}  {{ lpad 9 latitude }}  {{ lpad 10 longitude }}  {{ lpad 8 altitude }}  {{ kind }}{{ #each problems }} [{{ this }}]{{ /each }}\n";

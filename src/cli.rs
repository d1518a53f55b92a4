//! Command implementations behind the `rowbind` binary. Each returns the text
//! to print so the commands can be exercised without a process.
use anyhow::{Context, Result, anyhow};
use chrono::{TimeZone, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rust_decimal::Decimal;
use std::fmt::Display;
use tracing::debug;

use crate::config::{Command, Config, ParamKind, Target};
use crate::param::ParamDescriptor;
use crate::row::Row;
use crate::types::RawValue;
use crate::types::coerce::{parse_datetime, parse_decimal};
use crate::util::{datetime, random};

const COLUMN: &str = "value";

pub fn run(config: &Config) -> Result<String> {
    debug!("Running {:?}", config.command);
    match &config.command {
        Command::Coerce { target, text } => Ok(coerce(*target, text)),
        Command::Describe {
            kind,
            name,
            value,
            size,
            precision,
            scale,
            default,
        } => {
            let descriptor = describe(*kind, name, value.as_deref(), *size, *precision, *scale, *default)?;
            Ok(serde_json::to_string_pretty(&descriptor)?)
        }
        Command::Ago { timestamp } => {
            let then = parse_datetime(timestamp).ok_or_else(|| anyhow!("unparseable timestamp: {timestamp}"))?;
            Ok(datetime::time_ago_from_now(Utc.from_utc_datetime(&then)))
        }
        Command::ParseDate { text, formats } => {
            let formats: Vec<&str> = formats.iter().map(String::as_str).collect();
            Ok(datetime::parse_datetime(text, &formats)
                .map(|dt| dt.to_string())
                .unwrap_or_else(|| "unparseable".to_string()))
        }
        Command::RandomIp => Ok(random::random_ip(&mut rng(config.seed)).to_string()),
        Command::RandomNumber { digits } => Ok(random::random_number(&mut rng(config.seed), *digits)?.to_string()),
    }
}

fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

fn render<T: Display>(required: T, nullable: Option<T>) -> String {
    let nullable = nullable.map_or_else(|| "none".to_string(), |v| v.to_string());
    format!("required: {required}\nnullable: {nullable}")
}

/// Store `text` in a one-column row and read it back as `target`
pub fn coerce(target: Target, text: &str) -> String {
    let row = Row::new().with(COLUMN, RawValue::Text(text.to_string()));
    match target {
        Target::String => render(row.read_string(COLUMN), row.read_nullable_string(COLUMN)),
        Target::Int => render(row.read_int(COLUMN), row.read_nullable_int(COLUMN)),
        Target::Byte => render(row.read_byte(COLUMN), row.read_nullable_byte(COLUMN)),
        Target::Double => render(row.read_double(COLUMN), row.read_nullable_double(COLUMN)),
        Target::Decimal => render(row.read_decimal(COLUMN), row.read_nullable_decimal(COLUMN)),
        Target::Bool => render(row.read_bool(COLUMN), row.read_nullable_bool(COLUMN)),
        Target::Datetime => render(row.read_datetime(COLUMN), row.read_nullable_datetime(COLUMN)),
        Target::Uuid => render(row.read_uuid(COLUMN), row.read_nullable_uuid(COLUMN)),
        Target::Time => row.read_time_text(COLUMN, false),
        Target::TimeSeconds => row.read_time_text(COLUMN, true),
    }
}

fn parse_arg<T>(value: Option<&str>, parse: impl Fn(&str) -> Option<T>, what: &str) -> Result<Option<T>> {
    value
        .map(|text| parse(text).ok_or_else(|| anyhow!("{text:?} is not a valid {what}")))
        .transpose()
}

fn required_arg<T>(value: Option<&str>, parse: impl Fn(&str) -> Option<T>, what: &str) -> Result<T> {
    parse_arg(value, parse, what)?.with_context(|| format!("a {what} value is required"))
}

fn decimal_arg(value: Option<&str>) -> Result<Option<Decimal>> {
    parse_arg(value, parse_decimal, "decimal")
}

fn bool_arg(text: &str) -> Option<bool> {
    crate::types::coerce::parse_bool(text)
}

/// Build the descriptor a `describe` invocation asks for.
///
/// Missing sizing metadata is passed through as zero so the binder reports
/// the misuse itself.
pub fn describe(
    kind: ParamKind,
    name: &str,
    value: Option<&str>,
    size: Option<u32>,
    precision: Option<u8>,
    scale: Option<u8>,
    default: bool,
) -> Result<ParamDescriptor> {
    let descriptor = match kind {
        ParamKind::NullableString => ParamDescriptor::nullable_string(name, value)?,
        ParamKind::Nvarchar => ParamDescriptor::nvarchar(name, value, size.unwrap_or(0))?,
        ParamKind::NvarcharMax => ParamDescriptor::nvarchar_max(name, value)?,
        ParamKind::NullableDatetime => {
            ParamDescriptor::nullable_datetime(name, parse_arg(value, parse_datetime, "timestamp")?)?
        }
        ParamKind::Smallint => {
            ParamDescriptor::smallint(name, required_arg(value, |t| t.trim().parse::<i16>().ok(), "smallint")?)?
        }
        ParamKind::Int => ParamDescriptor::int(name, required_arg(value, |t| t.trim().parse::<i32>().ok(), "int")?)?,
        ParamKind::NullableInt => {
            ParamDescriptor::nullable_int(name, parse_arg(value, |t| t.trim().parse::<i32>().ok(), "int")?)?
        }
        ParamKind::NullableMoney => ParamDescriptor::nullable_money(name, decimal_arg(value)?)?,
        ParamKind::NullableDecimal => ParamDescriptor::nullable_decimal(
            name,
            decimal_arg(value)?,
            precision.unwrap_or(0),
            scale.unwrap_or(0),
        )?,
        ParamKind::Bit => ParamDescriptor::bit(name, required_arg(value, bool_arg, "bool")?)?,
        ParamKind::NullableBit => ParamDescriptor::nullable_bit(name, parse_arg(value, bool_arg, "bool")?)?,
        ParamKind::BitWithDefault => {
            ParamDescriptor::bit_with_default(name, parse_arg(value, bool_arg, "bool")?, default)?
        }
    };
    Ok(descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::param::{BindError, ParamSize, ParamValue};

    #[test]
    fn test_coerce_output() {
        assert_eq!(coerce(Target::Int, "42"), "required: 42\nnullable: 42");
        assert_eq!(coerce(Target::Int, "abc"), "required: 0\nnullable: none");
        assert_eq!(
            coerce(Target::Uuid, "garbage"),
            "required: 00000000-0000-0000-0000-000000000000\nnullable: none"
        );
        assert_eq!(coerce(Target::TimeSeconds, "13:45:30"), "13:45:30");
        assert_eq!(coerce(Target::Time, "13:45:30"), "13:45");
    }

    #[test]
    fn test_describe_decimal() {
        let p = describe(ParamKind::NullableDecimal, "price", Some("12.50"), None, Some(10), Some(2), false).unwrap();
        assert_eq!(p.size, ParamSize::Fixed(10));
        assert_eq!(p.value, ParamValue::Decimal(Decimal::new(1250, 2)));
    }

    #[test]
    fn test_describe_missing_metadata_reports_bind_error() {
        let err = describe(ParamKind::Nvarchar, "code", Some("x"), None, None, None, false).unwrap_err();
        assert_eq!(
            err.downcast_ref::<BindError>(),
            Some(&BindError::MissingSize("code".to_string()))
        );
    }

    #[test]
    fn test_describe_requires_value_for_required_kinds() {
        assert!(describe(ParamKind::Int, "id", None, None, None, None, false).is_err());
        assert!(describe(ParamKind::Int, "id", Some("x"), None, None, None, false).is_err());

        let p = describe(ParamKind::BitWithDefault, "flag", None, None, None, None, true).unwrap();
        assert_eq!(p.value, ParamValue::Bit(true));
        assert!(!p.nullable);
    }

    #[test]
    fn test_seeded_random_commands_repeat() {
        let config = Config {
            log_level: "info".to_string(),
            seed: Some(3),
            command: Command::RandomNumber { digits: 8 },
        };
        let first = run(&config).unwrap();
        assert_eq!(first.len(), 8);
        assert_eq!(first, run(&config).unwrap());
    }
}

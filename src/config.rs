use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug, Clone)]
#[command(name = "rowbind")]
#[command(about = "rowbind - typed row access and parameter descriptors\nInspect how values coerce and how parameters bind", long_about = None)]
pub struct Config {
    #[arg(long, default_value = "info", env = "ROWBIND_LOG_LEVEL", global = true)]
    pub log_level: String,

    #[arg(long, env = "ROWBIND_SEED", global = true, help = "Seed for the random commands (random when omitted)")]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Read TEXT as a text column through the required and nullable accessors
    Coerce {
        #[arg(value_enum)]
        target: Target,
        text: String,
    },

    /// Build a parameter descriptor and print it as JSON
    Describe {
        #[arg(value_enum)]
        kind: ParamKind,
        name: String,
        value: Option<String>,

        #[arg(long, help = "Declared size for nvarchar parameters")]
        size: Option<u32>,

        #[arg(long, help = "Precision for decimal parameters")]
        precision: Option<u8>,

        #[arg(long, help = "Scale for decimal parameters")]
        scale: Option<u8>,

        #[arg(long, help = "Fallback for bit-with-default when VALUE is omitted")]
        default: bool,
    },

    /// Relative time between TIMESTAMP (UTC) and now
    Ago { timestamp: String },

    /// Parse TEXT with the default or given chrono formats
    ParseDate {
        text: String,

        #[arg(long = "format", help = "chrono format, repeatable; replaces the defaults")]
        formats: Vec<String>,
    },

    RandomIp,

    RandomNumber { digits: u32 },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    String,
    Int,
    Byte,
    Double,
    Decimal,
    Bool,
    Datetime,
    Uuid,
    Time,
    TimeSeconds,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    NullableString,
    Nvarchar,
    NvarcharMax,
    NullableDatetime,
    Smallint,
    Int,
    NullableInt,
    NullableMoney,
    NullableDecimal,
    Bit,
    NullableBit,
    BitWithDefault,
}

impl Config {
    /// Get a configuration instance with all values resolved from CLI args and environment variables
    pub fn load() -> Self {
        Config::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_describe() {
        let config = Config::try_parse_from([
            "rowbind", "describe", "nullable-decimal", "price", "10.5", "--precision", "10", "--scale", "2",
        ])
        .unwrap();
        match config.command {
            Command::Describe { kind, name, value, precision, scale, .. } => {
                assert_eq!(kind, ParamKind::NullableDecimal);
                assert_eq!(name, "price");
                assert_eq!(value.as_deref(), Some("10.5"));
                assert_eq!(precision, Some(10));
                assert_eq!(scale, Some(2));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_global_options() {
        let config = Config::try_parse_from(["rowbind", "random-ip", "--seed", "9", "--log-level", "debug"]).unwrap();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.log_level, "debug");
        assert!(matches!(config.command, Command::RandomIp));
    }
}

use clap::ValueEnum;
use repdigit_engine::options::{OutputFormat, Part};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    Plain,
    Table,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Plain => Self::Plain,
            CliOutputFormat::Table => Self::Table,
            CliOutputFormat::Json => Self::Json,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliPart {
    #[value(alias = "1")]
    One,
    #[value(alias = "2")]
    Two,
    Both,
}

impl From<CliPart> for Part {
    fn from(value: CliPart) -> Self {
        match value {
            CliPart::One => Self::One,
            CliPart::Two => Self::Two,
            CliPart::Both => Self::Both,
        }
    }
}

mod formatter;
mod plain;

pub(crate) use formatter::OutputFormatter;
pub(crate) use plain::PlainTextFormatter;

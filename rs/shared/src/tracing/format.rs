use std::{env, fmt, path::Path, process, thread, time::Instant};

use chrono::Utc;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    fmt::{format::Writer, time::FormatTime, FmtContext, FormatEvent, FormatFields},
    registry::LookupSpan,
};

use crate::config::log_format::{FieldValue, LogFormat, Placeholder, Segment};

/// `2003-07-08 16:49:45,896`, in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct AscTime;

impl FormatTime for AscTime {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", Utc::now().format("%Y-%m-%d %H:%M:%S,%3f"))
    }
}

pub fn level_name(level: &Level) -> &'static str {
    match *level {
        Level::TRACE => "TRACE",
        Level::DEBUG => "DEBUG",
        Level::INFO => "INFO",
        Level::WARN => "WARNING",
        Level::ERROR => "ERROR",
    }
}

pub fn level_number(level: &Level) -> u8 {
    match *level {
        Level::TRACE => 5,
        Level::DEBUG => 10,
        Level::INFO => 20,
        Level::WARN => 30,
        Level::ERROR => 40,
    }
}

fn process_name() -> String {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.file_stem().map(|stem| stem.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "MainProcess".to_owned())
}

/// Renders events through a parsed [`LogFormat`] template.
#[derive(Debug, Clone)]
pub struct TemplateFormat<T = AscTime> {
    format: LogFormat,
    timer: T,
    started: Instant,
    process_name: String,
}

impl TemplateFormat {
    pub fn new(format: LogFormat) -> Self {
        Self {
            format,
            timer: AscTime,
            started: Instant::now(),
            process_name: process_name(),
        }
    }
}

impl<T> TemplateFormat<T> {
    pub fn with_timer<T2: FormatTime>(self, timer: T2) -> TemplateFormat<T2> {
        TemplateFormat {
            format: self.format,
            timer,
            started: self.started,
            process_name: self.process_name,
        }
    }
}

impl<S, N, T> FormatEvent<S, N> for TemplateFormat<T>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
    T: FormatTime,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        let now = Utc::now();
        for segment in self.format.segments() {
            let field = match segment {
                Segment::Literal(text) => {
                    writer.write_str(text)?;
                    continue;
                }
                Segment::Field(field) => field,
            };
            let value = match field.placeholder {
                Placeholder::AscTime => {
                    let mut text = String::new();
                    self.timer.format_time(&mut Writer::new(&mut text))?;
                    FieldValue::Text(text)
                }
                Placeholder::Created => FieldValue::Float(now.timestamp_micros() as f64 / 1e6),
                Placeholder::RelativeCreated => {
                    FieldValue::Float(self.started.elapsed().as_secs_f64() * 1000.0)
                }
                Placeholder::Msecs => {
                    FieldValue::Float(f64::from(now.timestamp_subsec_micros()) / 1000.0)
                }
                Placeholder::LevelName => FieldValue::Text(level_name(meta.level()).to_owned()),
                Placeholder::LevelNo => FieldValue::Int(level_number(meta.level()).into()),
                Placeholder::Name => FieldValue::Text(meta.target().to_owned()),
                Placeholder::Module => FieldValue::Text(
                    meta.module_path()
                        .and_then(|path| path.rsplit("::").next())
                        .unwrap_or_else(|| meta.target())
                        .to_owned(),
                ),
                Placeholder::FileName => FieldValue::Text(
                    meta.file()
                        .and_then(|file| Path::new(file).file_name())
                        .and_then(|name| name.to_str())
                        .unwrap_or("-")
                        .to_owned(),
                ),
                Placeholder::PathName => FieldValue::Text(meta.file().unwrap_or("-").to_owned()),
                Placeholder::LineNo => FieldValue::Int(meta.line().unwrap_or_default().into()),
                Placeholder::FuncName => FieldValue::Text(match ctx.lookup_current() {
                    Some(span) => span.name().to_owned(),
                    None => "<module>".to_owned(),
                }),
                Placeholder::Message => {
                    let mut text = String::new();
                    ctx.field_format()
                        .format_fields(Writer::new(&mut text), event)?;
                    FieldValue::Text(text)
                }
                Placeholder::Process => FieldValue::Int(process::id().into()),
                Placeholder::ProcessName => FieldValue::Text(self.process_name.clone()),
                Placeholder::Thread => FieldValue::Text(format!("{:?}", thread::current().id())),
                Placeholder::ThreadName => {
                    FieldValue::Text(thread::current().name().unwrap_or("unnamed").to_owned())
                }
                // events are not tied to an async task
                Placeholder::TaskName => FieldValue::Text("None".to_owned()),
            };
            writer.write_str(&field.render(&value))?;
        }
        writeln!(writer)
    }
}

use crate::mapping::SinkMapping;
use crate::proto::logging::v2::LogSink;

impl From<LogSink> for SinkMapping {
    fn from(sink: LogSink) -> Self {
        SinkMapping {
            name: sink.name,
            destination: sink.destination,
            filter: sink.filter,
        }
    }
}

impl From<&SinkMapping> for LogSink {
    fn from(sink: &SinkMapping) -> Self {
        LogSink {
            name: sink.name.clone(),
            destination: sink.destination.clone(),
            filter: sink.filter.clone(),
            ..Default::default()
        }
    }
}

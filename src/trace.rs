//! Destinations for the trace records emitted while computing a sum. The summation routine takes
//! an explicit sink handle rather than writing to ambient global state, so callers (tests in
//! particular) can attach whatever collectors they like without interfering with each other. The
//! CLI attaches `LogSink`, which routes records into the process-wide `log` channel.

use std::io::Write;
use std::sync::mpsc::Sender;
use std::sync::Mutex;

/// Receives the rendered text of each trace record. Sinks must tolerate records arriving from
/// multiple threads; ordering is only defined within a single computation.
pub(crate) trait Sink: Sync {
    fn record(&self, message: &str);
}

/// Discards all records. Computing with no collector attached is valid and doesn't affect the
/// returned sum.
pub(crate) struct NullSink;

impl Sink for NullSink {
    fn record(&self, _message: &str) {}
}

/// Appends each record as a line to a writer. If a write fails, there's not a lot we can do, so we
/// just ignore it - tracing must never fail the computation.
pub(crate) struct StreamSink<W: Write + Send> {
    stream: Mutex<W>,
}

impl<W: Write + Send> StreamSink<W> {
    pub(crate) fn new(stream: W) -> Self {
        Self {
            stream: Mutex::new(stream),
        }
    }

    pub(crate) fn into_inner(self) -> W {
        self.stream.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W: Write + Send> Sink for StreamSink<W> {
    fn record(&self, message: &str) {
        let mut stream = self.stream.lock().unwrap();
        let _ = writeln!(stream, "{message}");
    }
}

/// Sends each record as a discrete message down a channel, for collectors that want to pull
/// records one at a time rather than parse a stream.
pub(crate) struct ChannelSink {
    sender: Mutex<Sender<String>>,
}

impl ChannelSink {
    pub(crate) fn new(sender: Sender<String>) -> Self {
        Self {
            sender: Mutex::new(sender),
        }
    }
}

impl Sink for ChannelSink {
    fn record(&self, message: &str) {
        // The receiver having hung up just means nobody is listening any more.
        let _ = self.sender.lock().unwrap().send(message.to_owned());
    }
}

/// Forwards each record to every sink in the slice, letting several independent collectors observe
/// one computation.
pub(crate) struct Fanout<'a> {
    sinks: &'a [&'a dyn Sink],
}

impl<'a> Fanout<'a> {
    pub(crate) fn new(sinks: &'a [&'a dyn Sink]) -> Self {
        Self { sinks }
    }
}

impl<'a> Sink for Fanout<'a> {
    fn record(&self, message: &str) {
        for sink in self.sinks {
            sink.record(message);
        }
    }
}

/// Bridges records into the `log` facade at debug level, so the process-wide logging
/// configuration decides whether they appear.
pub(crate) struct LogSink;

impl Sink for LogSink {
    fn record(&self, message: &str) {
        log::debug!(target: "add", "{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::ChannelSink;
    use super::Fanout;
    use super::Sink;
    use super::StreamSink;
    use crate::sum::sum_with_trace;
    use std::io::Read;
    use std::io::Seek;
    use std::sync::mpsc::channel;

    #[test]
    fn stream_sink_writes_one_line_per_record() {
        let sink = StreamSink::new(tempfile::tempfile().unwrap());
        assert_eq!(sum_with_trace(&[1, 2, 3], &sink), 6);

        let mut file = sink.into_inner();
        file.rewind().unwrap();
        let mut logdata = String::new();
        file.read_to_string(&mut logdata).unwrap();

        let lines: Vec<&str> = logdata.lines().collect();
        assert_eq!(
            lines,
            ["Calculating the sum of (1, 2, 3)", "Result is 6"]
        );
    }

    #[test]
    fn channel_sink_delivers_discrete_messages() {
        let (send, recv) = channel();
        let sink = ChannelSink::new(send);
        assert_eq!(sum_with_trace(&[1, 2, 3], &sink), 6);

        assert_eq!(recv.try_recv().unwrap(), "Calculating the sum of (1, 2, 3)");
        assert_eq!(recv.try_recv().unwrap(), "Result is 6");
    }

    /// The same computation must render identically whether observed through a buffered stream or
    /// a queue of discrete messages.
    #[test]
    fn stream_and_channel_mechanisms_agree() {
        let stream_sink = StreamSink::new(Vec::new());
        sum_with_trace(&[4, 8, 15], &stream_sink);
        let streamed = String::from_utf8(stream_sink.into_inner()).unwrap();
        let streamed: Vec<&str> = streamed.lines().collect();

        let (send, recv) = channel();
        sum_with_trace(&[4, 8, 15], &ChannelSink::new(send));
        let queued: Vec<String> = recv.try_iter().collect();

        assert_eq!(streamed, queued);
    }

    #[test]
    fn fanout_reaches_all_collectors() {
        let (send_a, recv_a) = channel();
        let (send_b, recv_b) = channel();
        let sink_a = ChannelSink::new(send_a);
        let sink_b = ChannelSink::new(send_b);
        let sinks: [&dyn Sink; 2] = [&sink_a, &sink_b];
        sum_with_trace(&[5], &Fanout::new(&sinks));

        for recv in [recv_a, recv_b] {
            assert_eq!(recv.try_recv().unwrap(), "Calculating the sum of (5,)");
            assert_eq!(recv.try_recv().unwrap(), "Result is 5");
        }
    }
}

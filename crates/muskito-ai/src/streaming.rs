//! Server-Sent Events (SSE) streaming parser.
//!
//! Chat-completion APIs stream replies as SSE. The parser here is
//! pull-based: it reads one line at a time from the body and yields an
//! event only when the caller asks for the next one, so no reply is
//! buffered ahead of the consumer.

use futures_util::{Stream, StreamExt};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tokio_util::io::StreamReader;

use crate::AiError;

/// A single SSE event parsed from the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseEvent {
    /// The event type, if the server sent an `event:` field.
    pub event: Option<String>,
    /// The event data (usually a JSON string).
    pub data: String,
}

struct ParserState<R> {
    lines: Lines<R>,
    event: Option<String>,
    data: String,
    done: bool,
}

impl<R> ParserState<R> {
    fn take_event(&mut self) -> SseEvent {
        SseEvent {
            event: self.event.take(),
            data: std::mem::take(&mut self.data),
        }
    }
}

/// Parse SSE events lazily from any buffered async reader.
pub fn sse_events<R>(reader: R) -> impl Stream<Item = Result<SseEvent, AiError>> + Send
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    let state = ParserState {
        lines: reader.lines(),
        event: None,
        data: String::new(),
        done: false,
    };

    futures_util::stream::unfold(state, |mut st| async move {
        if st.done {
            return None;
        }
        loop {
            let line = match st.lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => {
                    st.done = true;
                    // Flush an event the server did not terminate with a blank line
                    if st.data.is_empty() {
                        return None;
                    }
                    let event = st.take_event();
                    return Some((Ok(event), st));
                }
                Err(e) => {
                    st.done = true;
                    return Some((Err(AiError::Network(e.to_string())), st));
                }
            };

            if line.is_empty() {
                if !st.data.is_empty() {
                    let event = st.take_event();
                    return Some((Ok(event), st));
                }
                st.event = None;
                continue;
            }

            if let Some(event_type) = field_value(&line, "event") {
                st.event = Some(event_type.to_string());
            } else if let Some(data) = field_value(&line, "data") {
                if !st.data.is_empty() {
                    st.data.push('\n');
                }
                st.data.push_str(data);
            }
            // id:, retry: and `:` comments are ignored
        }
    })
}

/// Parse SSE events from a reqwest response body.
pub fn response_events(
    response: reqwest::Response,
) -> impl Stream<Item = Result<SseEvent, AiError>> + Send {
    let byte_stream = Box::pin(
        response
            .bytes_stream()
            .map(|result| result.map_err(std::io::Error::other)),
    );
    sse_events(tokio::io::BufReader::new(StreamReader::new(byte_stream)))
}

fn field_value<'a>(line: &'a str, field: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(field)?.strip_prefix(':')?;
    Some(rest.strip_prefix(' ').unwrap_or(rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn collect(input: &'static str) -> Vec<Result<SseEvent, AiError>> {
        sse_events(input.as_bytes()).collect().await
    }

    fn data(s: &str) -> SseEvent {
        SseEvent {
            event: None,
            data: s.to_string(),
        }
    }

    #[tokio::test]
    async fn parses_data_events_separated_by_blank_lines() {
        let events = collect("data: {\"a\":1}\n\ndata: {\"b\":2}\n\n").await;
        assert_eq!(events, vec![Ok(data("{\"a\":1}")), Ok(data("{\"b\":2}"))]);
    }

    #[tokio::test]
    async fn event_type_and_multiline_data() {
        let events = collect("event: delta\ndata: one\ndata: two\n\n").await;
        assert_eq!(
            events,
            vec![Ok(SseEvent {
                event: Some("delta".into()),
                data: "one\ntwo".into(),
            })]
        );
    }

    #[tokio::test]
    async fn ignores_comments_ids_and_crlf() {
        let events = collect(": keep-alive\r\nid: 7\r\nretry: 100\r\ndata:[DONE]\r\n\r\n").await;
        assert_eq!(events, vec![Ok(data("[DONE]"))]);
    }

    #[tokio::test]
    async fn flushes_trailing_event_at_eof() {
        let events = collect("data: first\n\ndata: tail").await;
        assert_eq!(events, vec![Ok(data("first")), Ok(data("tail"))]);
    }

    #[tokio::test]
    async fn blank_lines_without_data_yield_nothing() {
        let events = collect("\n\nevent: ping\n\n\n").await;
        assert!(events.is_empty());
    }
}

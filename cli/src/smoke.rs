//! The smoke-test request dispatcher.
//!
//! Issues the three-call sequence against the segments API: create a segment
//! with `track_unallocated` false, update it to true, update it back to
//! false. Any error aborts the remaining steps; there is no retry, backoff,
//! or partial-failure compensation.

use thiserror::Error;
use vantage_client::{
    ApiError, CreateSegment, HttpRequest, HttpResponse, Segment, UpdateSegment, VantageClient,
};

use crate::transport::TransportError;

/// Priority assigned to every segment this tool creates. Priority is fixed
/// at creation, so the two updates never touch it.
pub const SEGMENT_PRIORITY: &str = "100";

/// Errors that abort the smoke sequence.
#[derive(Debug, Error)]
pub enum SmokeError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Run the create / update(true) / update(false) sequence.
///
/// `execute` performs the HTTP round-trip for each built request; injecting
/// it as a closure keeps the sequencing testable with canned responses.
/// Returns the segment as observed after the final update.
///
/// # Panics
/// Panics if the final update response reports `track_unallocated` as true
/// after false was written.
pub fn run<E>(client: &VantageClient, mut execute: E, name: &str) -> Result<Segment, SmokeError>
where
    E: FnMut(HttpRequest) -> Result<HttpResponse, TransportError>,
{
    log::info!("creating vantage segment: name={name}");
    let input = CreateSegment {
        title: name.to_string(),
        priority: SEGMENT_PRIORITY.to_string(),
        track_unallocated: false,
    };
    log::info!(
        "sending POST request: title={} priority={} track_unallocated={}",
        input.title,
        input.priority,
        input.track_unallocated
    );
    let req = client.build_create_segment(&input)?;
    let created = client.parse_create_segment(execute(req)?)?;
    log::info!(
        "create response: title={} priority={} track_unallocated={} token={}",
        created.title,
        created.priority,
        created.track_unallocated,
        created.token
    );

    let segment_token = created.token;

    log::info!("changing track_unallocated to true: token={segment_token}");
    let update = UpdateSegment {
        title: name.to_string(),
        track_unallocated: true,
    };
    let req = client.build_update_segment(&segment_token, &update)?;
    let updated = client.parse_update_segment(execute(req)?)?;
    log::info!(
        "update response: title={} track_unallocated={} token={}",
        updated.title,
        updated.track_unallocated,
        updated.token
    );

    log::info!("changing track_unallocated back to false: token={segment_token}");
    let update = UpdateSegment {
        title: name.to_string(),
        track_unallocated: false,
    };
    let req = client.build_update_segment(&segment_token, &update)?;
    let finished = client.parse_update_segment(execute(req)?)?;
    log::info!(
        "final result: title={} priority={} track_unallocated={} token={}",
        finished.title,
        finished.priority,
        finished.track_unallocated,
        finished.token
    );

    // The final update wrote false; any other echoed value is a server-side bug.
    assert!(
        !finished.track_unallocated,
        "track unallocated should be false"
    );

    Ok(finished)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, collections::VecDeque, rc::Rc};
    use vantage_client::HttpMethod;

    fn client() -> VantageClient {
        VantageClient::new("http://localhost:3000", "tok").unwrap()
    }

    fn segment_json(track_unallocated: bool) -> String {
        format!(
            r#"{{"token":"seg_1","title":"Smoke","priority":"100","track_unallocated":{track_unallocated}}}"#
        )
    }

    fn ok(status: u16, body: String) -> Result<HttpResponse, TransportError> {
        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }

    /// Executor that records every request and replays canned responses.
    fn canned(
        responses: Vec<Result<HttpResponse, TransportError>>,
    ) -> (
        Rc<RefCell<Vec<HttpRequest>>>,
        impl FnMut(HttpRequest) -> Result<HttpResponse, TransportError>,
    ) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut responses = VecDeque::from(responses);
        let exec = {
            let log = Rc::clone(&log);
            move |req: HttpRequest| {
                log.borrow_mut().push(req);
                responses.pop_front().unwrap()
            }
        };
        (log, exec)
    }

    #[test]
    fn issues_three_calls_in_order() {
        let (log, exec) = canned(vec![
            ok(201, segment_json(false)),
            ok(200, segment_json(true)),
            ok(200, segment_json(false)),
        ]);

        let finished = run(&client(), exec, "Smoke").unwrap();
        assert!(!finished.track_unallocated);

        let log = log.borrow();
        assert_eq!(log.len(), 3);
        assert_eq!(log[0].method, HttpMethod::Post);
        assert_eq!(log[0].path, "http://localhost:3000/v2/segments");
        assert_eq!(log[1].method, HttpMethod::Put);
        assert_eq!(log[1].path, "http://localhost:3000/v2/segments/seg_1");
        assert_eq!(log[2].method, HttpMethod::Put);
        assert_eq!(log[2].path, "http://localhost:3000/v2/segments/seg_1");

        let second: serde_json::Value =
            serde_json::from_str(log[1].body.as_deref().unwrap()).unwrap();
        assert_eq!(second["track_unallocated"], true);
        let third: serde_json::Value =
            serde_json::from_str(log[2].body.as_deref().unwrap()).unwrap();
        assert_eq!(third["track_unallocated"], false);
    }

    #[test]
    fn create_sets_initial_flag_false_with_fixed_priority() {
        let (log, exec) = canned(vec![
            ok(201, segment_json(false)),
            ok(200, segment_json(true)),
            ok(200, segment_json(false)),
        ]);

        run(&client(), exec, "Smoke").unwrap();

        let log = log.borrow();
        let create: serde_json::Value =
            serde_json::from_str(log[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(create["title"], "Smoke");
        assert_eq!(create["priority"], SEGMENT_PRIORITY);
        assert_eq!(create["track_unallocated"], false);
    }

    #[test]
    fn create_failure_short_circuits() {
        let (log, exec) = canned(vec![ok(500, "internal error".to_string())]);

        let err = run(&client(), exec, "Smoke").unwrap_err();
        assert!(matches!(err, SmokeError::Api(ApiError::Http { status: 500, .. })));
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn first_update_failure_stops_sequence() {
        let (log, exec) = canned(vec![
            ok(201, segment_json(false)),
            ok(404, String::new()),
        ]);

        let err = run(&client(), exec, "Smoke").unwrap_err();
        assert!(matches!(err, SmokeError::Api(ApiError::NotFound)));
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    #[should_panic(expected = "track unallocated should be false")]
    fn final_true_flag_panics() {
        let (_log, exec) = canned(vec![
            ok(201, segment_json(false)),
            ok(200, segment_json(true)),
            // server echoes true after false was written
            ok(200, segment_json(true)),
        ]);

        let _ = run(&client(), exec, "Smoke");
    }
}

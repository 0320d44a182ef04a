use super::error::NotifyError;
use super::extraction::{parse_post_response, parse_redirect_query};
use super::request::NotificationRequest;
use super::types::{Acknowledgement, FileVisualState, HttpReply};
use crate::platform::Platform;
use crate::ports::{LoggerPort, UploadItemPort, WidgetEventPort};

/// Tells the backend at `target` that `item` finished its storage transfer.
///
/// The item's success marker is cleared on entry and only restored once the
/// backend acknowledges. A rejection moves the item to `Error` and emits the
/// widget's `error` event with the response body. Transport, token and
/// extraction failures leave the visual state untouched. Nothing is retried.
pub async fn notify_upload_complete(
    platform: &Platform,
    target: &str,
    item: &dyn UploadItemPort,
    widget: &dyn WidgetEventPort,
) -> Result<Acknowledgement, NotifyError> {
    let logger = platform.logger();
    let item_id = item.id();

    let state = item.visual_state();
    if state.is_terminal() {
        return Err(NotifyError::already_settled(format!(
            "'{item_id}' is already {state}"
        )));
    }
    item.clear_success_marker();

    let document = item.response_document().ok_or_else(|| {
        NotifyError::extraction(format!("'{item_id}' has no transfer response"))
    });
    let result = document
        .and_then(|document| parse_post_response(&document))
        .inspect_err(|e| logger.error(&format!("Upload '{item_id}': {e}")))?;

    let csrf_token = platform
        .csrf()
        .token()
        .inspect_err(|e| logger.error(&format!("Upload '{item_id}': {e}")))?;

    let request = NotificationRequest::new(target, result, csrf_token);
    logger.log(&format!(
        "Notifying {target} of s3://{}/{}",
        request.result().bucket,
        request.result().key
    ));

    let timer = format!("s3upload:ack:{item_id}");
    logger.time(&timer);
    let reply = platform.http().post_form(&request).await;
    logger.time_end(&timer);

    let reply = reply.inspect_err(|e| logger.error(&format!("Upload '{item_id}': {e}")))?;
    settle(logger, item, widget, request, reply)
}

fn settle(
    logger: &dyn LoggerPort,
    item: &dyn UploadItemPort,
    widget: &dyn WidgetEventPort,
    request: NotificationRequest,
    reply: HttpReply,
) -> Result<Acknowledgement, NotifyError> {
    let item_id = item.id();

    let state = item.visual_state();
    if state.is_terminal() {
        return Err(NotifyError::already_settled(format!(
            "'{item_id}' settled to {state} while awaiting acknowledgement"
        )));
    }

    if reply.is_success() {
        item.set_visual_state(FileVisualState::Success);
        logger.log(&format!(
            "Upload '{item_id}' acknowledged with status {}",
            reply.status
        ));
        return Ok(Acknowledgement {
            result: request.into_result(),
            status: reply.status,
        });
    }

    item.set_visual_state(FileVisualState::Error);
    widget.emit_error(&item_id, &reply.body);
    logger.warn(&format!(
        "Upload '{item_id}' rejected with status {}",
        reply.status
    ));
    Err(NotifyError::rejected(reply.status, reply.body))
}

/// Notifies the backend of a transfer completed through `success_action_redirect`.
///
/// The storage coordinates come from the redirect's query string; there is no
/// widget item to update.
pub async fn notify_redirect_complete(
    platform: &Platform,
    target: &str,
    query: &str,
) -> Result<Acknowledgement, NotifyError> {
    let logger = platform.logger();

    let result = parse_redirect_query(query)
        .inspect_err(|e| logger.error(&format!("Redirected upload: {e}")))?;
    let csrf_token = platform.csrf().token()?;
    let request = NotificationRequest::new(target, result, csrf_token);

    let reply = platform
        .http()
        .post_form(&request)
        .await
        .inspect_err(|e| logger.error(&format!("Redirected upload: {e}")))?;

    if !reply.is_success() {
        logger.warn(&format!(
            "Redirected upload rejected with status {}",
            reply.status
        ));
        return Err(NotifyError::rejected(reply.status, reply.body));
    }
    Ok(Acknowledgement {
        result: request.into_result(),
        status: reply.status,
    })
}

//! Cross-context message protocol
//!
//! The extension popup and background page talk to the content script with
//! JSON messages tagged by `action`. Each one maps onto a controller call.
//! A message carrying a `tabId` for another tab is ignored.

use serde::{Deserialize, Serialize};

use crate::core::Vec2;
use crate::host::{FrameScheduler, ObstacleProvider, RenderSink};
use crate::simulation::{WidgetCore, WidgetStatus};

const ACTIONS: [&str; 7] = [
    "copilot:busy",
    "copilot:idle",
    "gelolabs:enablePhysics",
    "gelolabs:disablePhysics",
    "gelolabs:resetPosition",
    "gelolabs:setPosition",
    "gelolabs:getStatus",
];

#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("message is not valid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("message has no `action`")]
    MissingAction,
    #[error("unknown action `{0}`")]
    UnknownAction(String),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "action")]
pub enum Request {
    /// Play the entry spin; `reason` containing `manual` or `force` replays it
    #[serde(rename = "copilot:busy")]
    CopilotBusy {
        #[serde(default)]
        reason: Option<String>,
    },
    #[serde(rename = "copilot:idle")]
    CopilotIdle,
    /// Coordinates are the element's current visual center, filled in by the
    /// page script that located the logo
    #[serde(rename = "gelolabs:enablePhysics")]
    EnablePhysics {
        #[serde(default)]
        x: Option<f64>,
        #[serde(default)]
        y: Option<f64>,
    },
    #[serde(rename = "gelolabs:disablePhysics")]
    DisablePhysics,
    #[serde(rename = "gelolabs:resetPosition")]
    ResetPosition,
    #[serde(rename = "gelolabs:setPosition")]
    SetPosition {
        #[serde(default)]
        x: Option<f64>,
        #[serde(default)]
        y: Option<f64>,
    },
    #[serde(rename = "gelolabs:getStatus")]
    GetStatus,
}

/// A request and the tab it is addressed to, if any
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub tab_id: Option<i64>,
    pub request: Request,
}

impl Message {
    pub fn from_json(json: &str) -> Result<Self, ProtocolError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let action = value
            .get("action")
            .and_then(|a| a.as_str())
            .ok_or(ProtocolError::MissingAction)?;
        if !ACTIONS.contains(&action) {
            return Err(ProtocolError::UnknownAction(action.to_string()));
        }
        // `0` is never a real tab
        let tab_id = value.get("tabId").and_then(|t| t.as_i64()).filter(|&t| t != 0);
        Ok(Message { tab_id, request: serde_json::from_value(value)? })
    }

    /// False when the message names a tab other than `own_tab`
    pub fn is_for(&self, own_tab: Option<i64>) -> bool {
        match (self.tab_id, own_tab) {
            (Some(to), Some(own)) => to == own,
            _ => true,
        }
    }
}

impl Request {
    pub fn from_json(json: &str) -> Result<Self, ProtocolError> {
        Ok(Message::from_json(json)?.request)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physics_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spinning: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Vec2>,
    #[serde(flatten)]
    pub status: Option<WidgetStatus>,
}

impl Response {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| r#"{"success":false}"#.to_string())
    }
}

fn both(x: Option<f64>, y: Option<f64>) -> Option<(f64, f64)> {
    Some((x?, y?))
}

/// Apply one request to the controller
pub fn dispatch<R, O, S>(widget: &mut WidgetCore<R, O, S>, request: Request) -> Response
where
    R: RenderSink,
    O: ObstacleProvider,
    S: FrameScheduler,
{
    match request {
        Request::CopilotBusy { reason } => {
            widget.start_spin(reason.as_deref().unwrap_or("copilot-active"));
            Response {
                success: true,
                spinning: Some(widget.spin().is_spinning()),
                ..Response::default()
            }
        }
        Request::CopilotIdle => {
            widget.stop_spin();
            Response {
                success: true,
                spinning: Some(false),
                ..Response::default()
            }
        }
        Request::EnablePhysics { x, y } => {
            match both(x, y) {
                Some((x, y)) => widget.enable(Vec2::new(x, y)),
                None => log_warn!("enablePhysics without a logo position"),
            }
            Response {
                success: widget.is_enabled(),
                physics_enabled: Some(widget.is_enabled()),
                ..Response::default()
            }
        }
        Request::DisablePhysics => {
            widget.disable();
            Response {
                success: true,
                physics_enabled: Some(widget.is_enabled()),
                ..Response::default()
            }
        }
        Request::ResetPosition => {
            widget.reset_position();
            Response { success: true, ..Response::default() }
        }
        Request::SetPosition { x, y } => {
            let Some((x, y)) = both(x, y) else {
                log_warn!("setPosition needs both x and y");
                return Response::default();
            };
            widget.set_position(x, y);
            let rest = widget.rest_position();
            Response {
                success: rest == Vec2::new(x, y),
                position: Some(rest),
                ..Response::default()
            }
        }
        Request::GetStatus => Response {
            success: true,
            status: Some(widget.status()),
            ..Response::default()
        },
    }
}

/// Parse, dispatch and serialize in one go.
///
/// `Ok(None)` means the message was for another tab and nothing ran.
pub fn handle_message<R, O, S>(
    widget: &mut WidgetCore<R, O, S>,
    json: &str,
    own_tab: Option<i64>,
) -> Result<Option<String>, ProtocolError>
where
    R: RenderSink,
    O: ObstacleProvider,
    S: FrameScheduler,
{
    let message = Message::from_json(json)?;
    if !message.is_for(own_tab) {
        return Ok(None);
    }
    Ok(Some(dispatch(widget, message.request).to_json()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> WidgetCore {
        WidgetCore::new(1280.0, 720.0)
    }

    #[test]
    fn parses_tagged_actions() {
        assert_eq!(Request::from_json(r#"{"action":"gelolabs:getStatus"}"#).unwrap(), Request::GetStatus);
        assert_eq!(
            Request::from_json(r#"{"action":"gelolabs:setPosition","x":10,"y":20.5}"#).unwrap(),
            Request::SetPosition { x: Some(10.0), y: Some(20.5) }
        );
    }

    #[test]
    fn rejects_unknown_and_missing_actions() {
        assert!(matches!(
            Request::from_json(r#"{"action":"copilot:dance"}"#),
            Err(ProtocolError::UnknownAction(a)) if a == "copilot:dance"
        ));
        assert!(matches!(Request::from_json(r#"{"x":1}"#), Err(ProtocolError::MissingAction)));
        assert!(matches!(Request::from_json("not json"), Err(ProtocolError::Json(_))));
    }

    #[test]
    fn enable_then_status_round_trip() {
        let mut w = widget();
        let reply = handle_message(&mut w, r#"{"action":"gelolabs:enablePhysics","x":100,"y":60}"#, None).unwrap();
        assert_eq!(reply.as_deref(), Some(r#"{"success":true,"physicsEnabled":true}"#));

        let reply = handle_message(&mut w, r#"{"action":"gelolabs:getStatus"}"#, None).unwrap().unwrap();
        let status: serde_json::Value = serde_json::from_str(&reply).unwrap();
        assert_eq!(status["success"], true);
        assert_eq!(status["physicsEnabled"], true);
        assert_eq!(status["physicsActive"], false);
        assert_eq!(status["isDragging"], false);
        assert_eq!(status["restPosition"]["x"], 100.0);
        assert_eq!(status["spinning"], false);
        assert_eq!(status["logoFound"], true);
        assert_eq!(status["reducedMotion"], false);
    }

    #[test]
    fn messages_for_other_tabs_are_ignored() {
        let mut w = widget();
        let busy = r#"{"action":"copilot:busy","tabId":7}"#;

        assert_eq!(handle_message(&mut w, busy, Some(3)).unwrap(), None);
        assert!(!w.spin().is_spinning());

        let reply = handle_message(&mut w, busy, Some(7)).unwrap();
        assert_eq!(reply.as_deref(), Some(r#"{"success":true,"spinning":true}"#));

        // Untargeted messages and unknown own tab always apply
        assert!(handle_message(&mut w, r#"{"action":"copilot:idle"}"#, Some(3)).unwrap().is_some());
        assert!(handle_message(&mut w, busy, None).unwrap().is_some());
    }

    #[test]
    fn busy_spins_once_and_idle_stops() {
        let mut w = widget();
        let reply = dispatch(&mut w, Request::CopilotBusy { reason: None });
        assert_eq!(reply.spinning, Some(true));
        assert!(w.spin().has_spun_once());

        let reply = dispatch(&mut w, Request::CopilotIdle);
        assert_eq!(reply.to_json(), r#"{"success":true,"spinning":false}"#);

        let reply = dispatch(&mut w, Request::CopilotBusy { reason: Some("copilot-active".into()) });
        assert_eq!(reply.spinning, Some(false));

        let reply = dispatch(&mut w, Request::CopilotBusy { reason: Some("manual".into()) });
        assert_eq!(reply.spinning, Some(true));
    }

    #[test]
    fn enable_without_position_fails_softly() {
        let mut w = widget();
        let reply = dispatch(&mut w, Request::EnablePhysics { x: None, y: Some(3.0) });
        assert!(!reply.success);
        assert_eq!(reply.physics_enabled, Some(false));
    }

    #[test]
    fn set_position_requires_both_coordinates() {
        let mut w = widget();
        w.enable(Vec2::new(50.0, 50.0));
        let reply = dispatch(&mut w, Request::SetPosition { x: Some(5.0), y: None });
        assert!(!reply.success);
        assert_eq!(w.rest_position(), Vec2::new(50.0, 50.0));

        let reply = dispatch(&mut w, Request::SetPosition { x: Some(5.0), y: Some(6.0) });
        assert!(reply.success);
        assert_eq!(reply.position, Some(Vec2::new(5.0, 6.0)));
    }

    #[test]
    fn disable_reports_new_state() {
        let mut w = widget();
        w.enable(Vec2::new(50.0, 50.0));
        let reply = dispatch(&mut w, Request::DisablePhysics);
        assert_eq!(reply.to_json(), r#"{"success":true,"physicsEnabled":false}"#);
    }
}

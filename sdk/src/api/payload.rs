//! JSON bodies sent to the decision API.
//!
//! Each body converts into a `serde_json::Value` whose object keys keep the
//! wire order (the crate enables `serde_json/preserve_order`).

use serde_json::{json, Map, Value};

#[derive(Debug, Clone)]
pub struct SingleCampaignBody<'a> {
    pub visitor_id: &'a str,
    pub decision_group: Option<&'a str>,
    pub format_response: bool,
    pub trigger_hit: bool,
    pub context: Map<String, Value>,
}

/// Same as [`SingleCampaignBody`] without `format_response`.
#[derive(Debug, Clone)]
pub struct AllCampaignsBody<'a> {
    pub visitor_id: &'a str,
    pub decision_group: Option<&'a str>,
    pub trigger_hit: bool,
    pub context: Map<String, Value>,
}

/// Activation event, using the API's abbreviated keys.
#[derive(Debug, Clone)]
pub struct ActivationBody<'a> {
    /// Visitor id.
    pub vid: &'a str,
    /// Environment id.
    pub cid: &'a str,
    /// Variation group id.
    pub caid: &'a str,
    /// Variation id.
    pub vaid: &'a str,
}

impl From<SingleCampaignBody<'_>> for Value {
    fn from(body: SingleCampaignBody<'_>) -> Self {
        json!({
            "visitor_id": body.visitor_id,
            "decision_group": body.decision_group,
            "format_response": body.format_response,
            "trigger_hit": body.trigger_hit,
            "context": body.context,
        })
    }
}

impl From<AllCampaignsBody<'_>> for Value {
    fn from(body: AllCampaignsBody<'_>) -> Self {
        json!({
            "visitor_id": body.visitor_id,
            "decision_group": body.decision_group,
            "trigger_hit": body.trigger_hit,
            "context": body.context,
        })
    }
}

impl From<ActivationBody<'_>> for Value {
    fn from(body: ActivationBody<'_>) -> Self {
        json!({
            "vid": body.vid,
            "cid": body.cid,
            "caid": body.caid,
            "vaid": body.vaid,
        })
    }
}

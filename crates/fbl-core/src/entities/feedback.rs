use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::entities::TagAssignment;
use crate::enums::RequestedResponse;
use crate::lenient::{
    bool_from_any, id_from_any, opt_id_from_any, opt_text_from_any, opt_truthy_text_from_any,
    text_from_any,
};

/// One piece of visitor feedback as returned by `feedback/`.
///
/// Field names follow the API's JSON. Contact and survey fields are flat on
/// the wire; [`FeedbackRecord::survey`] groups the survey answers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedbackRecord {
    #[serde(default, deserialize_with = "id_from_any")]
    pub id: u64,
    #[serde(default, deserialize_with = "text_from_any")]
    pub submit_date: String,
    #[serde(default, deserialize_with = "bool_from_any")]
    pub info_found: bool,
    #[serde(default, deserialize_with = "opt_id_from_any")]
    pub node_id: Option<u64>,
    #[serde(default, deserialize_with = "opt_text_from_any")]
    pub text: Option<String>,
    #[serde(default)]
    pub requested_response: RequestedResponse,
    #[serde(default, deserialize_with = "opt_text_from_any")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "opt_text_from_any")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "opt_text_from_any")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "opt_text_from_any")]
    pub phone: Option<String>,
    /// Opaque survey id; `None` when the API sends an empty value.
    #[serde(default, deserialize_with = "opt_truthy_text_from_any")]
    pub survey_id: Option<String>,
    #[serde(default, deserialize_with = "opt_text_from_any")]
    pub helpful: Option<String>,
    #[serde(default, deserialize_with = "opt_text_from_any")]
    pub easy_to_use: Option<String>,
    #[serde(default, deserialize_with = "opt_text_from_any")]
    pub confident: Option<String>,
    #[serde(default, deserialize_with = "opt_text_from_any")]
    pub professional_or_personal: Option<String>,
    #[serde(default, deserialize_with = "opt_text_from_any")]
    pub survey_email: Option<String>,
    #[serde(default, deserialize_with = "opt_text_from_any")]
    pub visit_purpose: Option<String>,
    #[serde(default, deserialize_with = "opt_text_from_any")]
    pub other_feedback: Option<String>,
    #[serde(default, deserialize_with = "tags_or_empty")]
    pub tags: Vec<TagAssignment>,
}

/// Answers to the follow-up survey attached to a feedback record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SurveyAnswers {
    pub helpful: Option<String>,
    pub easy: Option<String>,
    pub findable: Option<String>,
    pub reason: Option<String>,
    pub email: Option<String>,
    pub purpose: Option<String>,
    pub other: Option<String>,
}

impl FeedbackRecord {
    /// Calendar day the feedback was submitted, if `submit_date` parses.
    #[must_use]
    pub fn submit_day(&self) -> Option<NaiveDate> {
        parse_timestamp(&self.submit_date).map(|dt| dt.date())
    }

    /// Survey answers, present only when the record carries a survey.
    #[must_use]
    pub fn survey(&self) -> Option<SurveyAnswers> {
        self.survey_id.as_ref()?;
        Some(SurveyAnswers {
            helpful: self.helpful.clone(),
            easy: self.easy_to_use.clone(),
            findable: self.confident.clone(),
            reason: self.professional_or_personal.clone(),
            email: self.survey_email.clone(),
            purpose: self.visit_purpose.clone(),
            other: self.other_feedback.clone(),
        })
    }

    /// Tag assignments with `comment_id` filled from the owning record.
    pub fn tag_assignments(&self) -> impl Iterator<Item = TagAssignment> + '_ {
        self.tags.iter().map(|tag| TagAssignment {
            comment_id: tag.comment_id.or(Some(self.id)),
            ..tag.clone()
        })
    }
}

/// Parse the API's timestamp formats: RFC 3339, `YYYY-MM-DD HH:MM:SS`,
/// `YYYY-MM-DDTHH:MM:SS[.f]` and a bare `YYYY-MM-DD`.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn tags_or_empty<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<TagAssignment>, D::Error> {
    Ok(Option::<Vec<TagAssignment>>::deserialize(d)?.unwrap_or_default())
}
